//! Process entity and bookkeeping.
//!
//! Grounded on `scheduler/process.rs` and `scheduler/types.rs`: an immutable
//! identity (`ProcessId` there, `pid` here) plus mutable runtime bookkeeping
//! the engine owns exclusively for the duration of a run.

use serde::Serialize;

/// A process as loaded from the workload, plus the bookkeeping the engine
/// mutates while it runs. See spec §3 for the field invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    /// Unique identifier across the workload.
    pub pid: String,
    /// Earliest time at which this process becomes eligible to run.
    pub arrival: u64,
    /// Total CPU time this process needs.
    pub cpu_burst: u64,
    /// Scheduling priority; lower values mean higher priority.
    pub priority: i64,
    /// Static queue band, interpreted only by MLQ.
    pub queue_level: u32,

    /// CPU time not yet delivered. Starts at `cpu_burst`, reaches 0 exactly once.
    pub remaining: u64,
    /// First time this process was dispatched, if any.
    pub started: Option<u64>,
    /// Time at which `remaining` reached 0, if any.
    pub completed: Option<u64>,
}

impl Process {
    /// Construct a process from its loaded identity fields. `remaining` is
    /// initialized to `cpu_burst`; `started`/`completed` are unset.
    pub fn new(pid: String, arrival: u64, cpu_burst: u64, priority: i64, queue_level: u32) -> Self {
        Self {
            pid,
            arrival,
            cpu_burst,
            priority,
            queue_level,
            remaining: cpu_burst,
            started: None,
            completed: None,
        }
    }

    /// Record that this process began running at `now`, if it hasn't already.
    pub fn mark_started(&mut self, now: u64) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// Whether this process has delivered its entire burst.
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// Sorts a workload by the `(arrival, pid)` total order used throughout the
/// engine for admission and tie-breaking (spec §5: "determinism is anchored
/// on the total ordering `(primary, arrival, pid)`").
pub fn sort_by_arrival(processes: &mut [Process]) {
    processes.sort_by(|a, b| (a.arrival, &a.pid).cmp(&(b.arrival, &b.pid)));
}
