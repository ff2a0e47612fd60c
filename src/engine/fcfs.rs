//! First-Come, First-Served. Spec §4.4.

use crate::dispatcher::Dispatcher;
use crate::engine::shared::run_nonpreemptive_keyed;
use crate::process::Process;
use crate::timeline::Timeline;

pub fn run(processes: &mut [Process], dispatcher: &mut Dispatcher, timeline: &mut Timeline) {
    let indices: Vec<usize> = (0..processes.len()).collect();
    let mut now = 0u64;
    // FCFS has no secondary ranking beyond (arrival, pid), so every process
    // shares the same key and selection falls through to admission order.
    run_nonpreemptive_keyed(processes, &indices, |_| (), dispatcher, timeline, &mut now);
}
