//! Shortest Remaining Time First, preemptive. Spec §4.6.

use crate::dispatcher::Dispatcher;
use crate::engine::shared::run_preemptive_keyed;
use crate::process::Process;
use crate::timeline::Timeline;

pub fn run(processes: &mut [Process], dispatcher: &mut Dispatcher, timeline: &mut Timeline) {
    let indices: Vec<usize> = (0..processes.len()).collect();
    let mut now = 0u64;
    run_preemptive_keyed(processes, &indices, |p| p.remaining, dispatcher, timeline, &mut now);
}
