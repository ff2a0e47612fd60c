//! Command-line surface. Spec §6.
//!
//! Grounded on the teacher's own preference for a `clap` derive struct over
//! hand-rolled argument parsing, enriched from the pack's CLI-driven repos.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::engine::AlgorithmConfig;
use crate::error::Result;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Srtf,
    Priority,
    Rr,
    Mlq,
    Mlfq,
}

/// Deterministic discrete-event CPU scheduling simulator.
#[derive(Debug, Parser)]
#[command(name = "schedsim", version, about)]
pub struct Cli {
    /// Path to a workload file (.csv or .json).
    #[arg(long)]
    pub input: PathBuf,

    /// Scheduling algorithm to simulate.
    #[arg(long, value_enum)]
    pub alg: Algorithm,

    /// Time quantum, used by `rr` and as every level's default quantum for
    /// `mlfq` when `--quanta` is not given.
    #[arg(long, default_value_t = 4)]
    pub quantum: u64,

    /// Per-switch context-switch overhead charged on every process transition.
    #[arg(long, default_value_t = 0)]
    pub context_switch: u64,

    /// Number of static bands, used by `mlq`.
    #[arg(long, default_value_t = 3)]
    pub queues: u32,

    /// Run `priority` preemptively.
    #[arg(long, default_value_t = false)]
    pub preemptive: bool,

    /// Number of feedback levels for `mlfq`. Defaults to 3, or to
    /// `--quanta`'s length when that implies more levels.
    #[arg(long)]
    pub levels: Option<u32>,

    /// Explicit per-level quanta for `mlfq`, e.g. `--quanta 2,4,8`.
    #[arg(long, value_delimiter = ',')]
    pub quanta: Vec<u64>,

    /// Output path for the run result. Defaults to `<alg>_output.json`.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl Cli {
    pub fn algorithm_config(&self) -> Result<AlgorithmConfig> {
        match self.alg {
            Algorithm::Fcfs => Ok(AlgorithmConfig::Fcfs),
            Algorithm::Sjf => Ok(AlgorithmConfig::Sjf),
            Algorithm::Srtf => Ok(AlgorithmConfig::Srtf),
            Algorithm::Priority => Ok(AlgorithmConfig::Priority { preemptive: self.preemptive }),
            Algorithm::Rr => Ok(AlgorithmConfig::RoundRobin { quantum: self.quantum }),
            Algorithm::Mlq => Ok(AlgorithmConfig::Mlq { queues: self.queues }),
            Algorithm::Mlfq => {
                let quanta = if self.quanta.is_empty() { vec![self.quantum] } else { self.quanta.clone() };
                let levels = match self.levels {
                    Some(levels) => levels.max(quanta.len() as u32),
                    None => quanta.len().max(3) as u32,
                };
                Ok(AlgorithmConfig::Mlfq { levels, quanta })
            }
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| PathBuf::from(format!("{}_output.json", alg_slug(self.alg))))
    }
}

fn alg_slug(alg: Algorithm) -> &'static str {
    match alg {
        Algorithm::Fcfs => "fcfs",
        Algorithm::Sjf => "sjf",
        Algorithm::Srtf => "srtf",
        Algorithm::Priority => "priority",
        Algorithm::Rr => "rr",
        Algorithm::Mlq => "mlq",
        Algorithm::Mlfq => "mlfq",
    }
}
