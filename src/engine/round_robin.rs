//! Round Robin. Spec §4.8. A single FIFO queue with one fixed quantum —
//! the one-level instance of the shared quantum engine.

use crate::dispatcher::Dispatcher;
use crate::engine::shared::run_quantum;
use crate::process::Process;
use crate::timeline::Timeline;

pub fn run(processes: &mut [Process], quantum: u64, dispatcher: &mut Dispatcher, timeline: &mut Timeline) {
    let indices: Vec<usize> = (0..processes.len()).collect();
    let mut now = 0u64;
    run_quantum(processes, &indices, &[quantum], dispatcher, timeline, &mut now);
}
