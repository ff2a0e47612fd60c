//! Priority scheduling, preemptive and non-preemptive. Spec §4.7. Lower
//! `priority` values run first.

use crate::dispatcher::Dispatcher;
use crate::engine::shared::{run_nonpreemptive_keyed, run_preemptive_keyed};
use crate::process::Process;
use crate::timeline::Timeline;

pub fn run(processes: &mut [Process], preemptive: bool, dispatcher: &mut Dispatcher, timeline: &mut Timeline) {
    let indices: Vec<usize> = (0..processes.len()).collect();
    let mut now = 0u64;
    if preemptive {
        run_preemptive_keyed(processes, &indices, |p| p.priority, dispatcher, timeline, &mut now);
    } else {
        run_nonpreemptive_keyed(processes, &indices, |p| p.priority, dispatcher, timeline, &mut now);
    }
}
