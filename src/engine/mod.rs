//! Scheduling engine: one discriminated `AlgorithmConfig` variant per
//! algorithm (spec §4.13 / Design Notes §9 — replacing a loose key/value
//! parameter bag with a type that makes invalid configurations
//! unrepresentable), dispatching into `fcfs`/`sjf`/`srtf`/`priority`/
//! `round_robin`/`mlq`/`mlfq`, each of which is itself an instantiation of
//! one of the three generic engines in `shared`.

mod fcfs;
mod mlfq;
mod mlq;
mod priority;
mod round_robin;
pub mod shared;
mod sjf;
mod srtf;

use crate::dispatcher::Dispatcher;
use crate::error::{Result, SchedulerError};
use crate::process::Process;
use crate::timeline::Timeline;

/// Configuration for one scheduling run. One variant per algorithm; each
/// variant carries exactly the parameters that algorithm needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmConfig {
    Fcfs,
    Sjf,
    Srtf,
    Priority { preemptive: bool },
    RoundRobin { quantum: u64 },
    Mlq { queues: u32 },
    Mlfq { levels: u32, quanta: Vec<u64> },
}

impl AlgorithmConfig {
    /// Validate parameters eagerly, before a single process is loaded.
    pub fn validate(&self) -> Result<()> {
        match self {
            AlgorithmConfig::RoundRobin { quantum } if *quantum == 0 => {
                Err(SchedulerError::InvalidParameters("quantum must be positive".into()))
            }
            AlgorithmConfig::Mlq { queues } if *queues == 0 => {
                Err(SchedulerError::InvalidParameters("queues must be at least 1".into()))
            }
            AlgorithmConfig::Mlfq { levels, .. } if *levels == 0 => {
                Err(SchedulerError::InvalidParameters("mlfq requires at least 1 level".into()))
            }
            AlgorithmConfig::Mlfq { quanta, .. } if quanta.is_empty() => {
                Err(SchedulerError::InvalidParameters("mlfq requires at least one quantum".into()))
            }
            AlgorithmConfig::Mlfq { quanta, .. } if quanta.contains(&0) => {
                Err(SchedulerError::InvalidParameters("every mlfq level quantum must be positive".into()))
            }
            _ => Ok(()),
        }
    }
}

/// Run `config` over `processes` to exhaustion, returning the timeline of
/// occupied (and idle/context-switch) segments. `processes` is mutated in
/// place with `started`/`completed`/`remaining` bookkeeping for `metrics`.
pub fn run(processes: &mut [Process], config: &AlgorithmConfig, context_switch: u64) -> Result<Timeline> {
    config.validate()?;

    let mut dispatcher = Dispatcher::new(context_switch);
    let mut timeline = Timeline::new();

    match config {
        AlgorithmConfig::Fcfs => fcfs::run(processes, &mut dispatcher, &mut timeline),
        AlgorithmConfig::Sjf => sjf::run(processes, &mut dispatcher, &mut timeline),
        AlgorithmConfig::Srtf => srtf::run(processes, &mut dispatcher, &mut timeline),
        AlgorithmConfig::Priority { preemptive } => priority::run(processes, *preemptive, &mut dispatcher, &mut timeline),
        AlgorithmConfig::RoundRobin { quantum } => round_robin::run(processes, *quantum, &mut dispatcher, &mut timeline),
        AlgorithmConfig::Mlq { queues } => mlq::run(processes, *queues, &mut dispatcher, &mut timeline),
        AlgorithmConfig::Mlfq { levels, quanta } => mlfq::run(processes, *levels, quanta, &mut dispatcher, &mut timeline),
    }

    log::info!(
        "dispatcher: {} context switches, {} ticks of context-switch overhead",
        dispatcher.total_context_switches(),
        dispatcher.total_context_switch_time()
    );

    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_quantum() {
        let err = AlgorithmConfig::RoundRobin { quantum: 0 }.validate().unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidParameters(_)));
    }

    #[test]
    fn accepts_fewer_quanta_than_levels() {
        // Runtime expansion (repeat the last quantum) makes this a valid config.
        AlgorithmConfig::Mlfq { levels: 2, quanta: vec![1] }.validate().unwrap();
    }

    #[test]
    fn rejects_empty_mlfq_quanta() {
        let err = AlgorithmConfig::Mlfq { levels: 2, quanta: vec![] }.validate().unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidParameters(_)));
    }

    #[test]
    fn run_dispatches_to_the_selected_algorithm() {
        let mut ps = vec![Process::new("A".into(), 0, 2, 0, 0)];
        let timeline = run(&mut ps, &AlgorithmConfig::Fcfs, 0).unwrap();
        assert_eq!(timeline.segments().len(), 1);
        assert_eq!(ps[0].completed, Some(2));
    }
}
