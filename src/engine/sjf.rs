//! Shortest Job First, non-preemptive. Spec §4.5.

use crate::dispatcher::Dispatcher;
use crate::engine::shared::run_nonpreemptive_keyed;
use crate::process::Process;
use crate::timeline::Timeline;

pub fn run(processes: &mut [Process], dispatcher: &mut Dispatcher, timeline: &mut Timeline) {
    let indices: Vec<usize> = (0..processes.len()).collect();
    let mut now = 0u64;
    run_nonpreemptive_keyed(processes, &indices, |p| p.cpu_burst, dispatcher, timeline, &mut now);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_shortest_admitted_burst_first() {
        // All admitted at t=0: C (burst 1) then B (burst 3) then A (burst 4).
        let mut ps = vec![
            Process::new("A".into(), 0, 4, 0, 0),
            Process::new("B".into(), 0, 3, 0, 0),
            Process::new("C".into(), 0, 1, 0, 0),
        ];
        let mut dispatcher = Dispatcher::new(0);
        let mut timeline = Timeline::new();
        run(&mut ps, &mut dispatcher, &mut timeline);

        let segs = timeline.segments();
        assert_eq!(segs[0].pid, "C");
        assert_eq!(segs[1].pid, "B");
        assert_eq!(segs[2].pid, "A");
    }
}
