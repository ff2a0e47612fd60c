//! Static Multilevel Queue. Spec §4.9. Processes are partitioned by
//! `queue_level` (clamped into `[0, queues)`) into strictly-prioritized
//! bands; each band runs to exhaustion, non-preemptive FCFS, before the
//! next band is even considered — so this is the non-preemptive shared
//! engine invoked once per band, continuing the same clock and dispatcher
//! across bands.

use crate::dispatcher::Dispatcher;
use crate::engine::shared::run_nonpreemptive_keyed;
use crate::process::Process;
use crate::timeline::Timeline;

pub fn run(processes: &mut [Process], queues: u32, dispatcher: &mut Dispatcher, timeline: &mut Timeline) {
    let mut now = 0u64;
    for band in 0..queues {
        let indices: Vec<usize> =
            (0..processes.len()).filter(|&i| processes[i].queue_level.min(queues - 1) == band).collect();
        if indices.is_empty() {
            continue;
        }
        run_nonpreemptive_keyed(processes, &indices, |_| (), dispatcher, timeline, &mut now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_band_never_preempts_lower_band_processing() {
        let mut ps = vec![
            Process::new("A".into(), 0, 3, 0, 1),
            Process::new("B".into(), 0, 2, 0, 0),
            Process::new("C".into(), 1, 1, 0, 0),
        ];
        let mut dispatcher = Dispatcher::new(0);
        let mut timeline = Timeline::new();
        run(&mut ps, 2, &mut dispatcher, &mut timeline);

        let segs = timeline.segments();
        // Band 0 (B, C) exhausts entirely before band 1 (A) starts.
        assert_eq!(segs[0].pid, "B");
        assert_eq!(segs[1].pid, "C");
        assert_eq!(segs[2].pid, "A");
        assert_eq!((segs[2].start, segs[2].end), (3, 6));
    }

    #[test]
    fn queue_level_beyond_configured_bands_clamps_to_last_band() {
        let mut ps = vec![Process::new("A".into(), 0, 1, 0, 99)];
        let mut dispatcher = Dispatcher::new(0);
        let mut timeline = Timeline::new();
        run(&mut ps, 2, &mut dispatcher, &mut timeline);
        assert_eq!(ps[0].completed, Some(1));
    }
}
