//! Multilevel Feedback Queue. Spec §4.10. Every process is admitted at
//! level 0; a process that does not finish within a level's quantum
//! demotes one level (capped at the lowest). The N-level instance of the
//! shared quantum engine.

use crate::dispatcher::Dispatcher;
use crate::engine::shared::run_quantum;
use crate::process::Process;
use crate::timeline::Timeline;

/// Expand or truncate `quanta` to exactly `levels` entries, repeating the
/// last quantum for any level left unspecified. Spec §4.10: "if fewer
/// quanta than levels are provided, repeat the last".
fn expand_quanta(quanta: &[u64], levels: u32) -> Vec<u64> {
    let levels = levels.max(1) as usize;
    let mut expanded = quanta.to_vec();
    match expanded.last().copied() {
        Some(last) if expanded.len() < levels => expanded.resize(levels, last),
        _ => expanded.truncate(levels),
    }
    expanded
}

pub fn run(processes: &mut [Process], levels: u32, quanta: &[u64], dispatcher: &mut Dispatcher, timeline: &mut Timeline) {
    let quanta = expand_quanta(quanta, levels);
    let indices: Vec<usize> = (0..processes.len()).collect();
    let mut now = 0u64;
    run_quantum(processes, &indices, &quanta, dispatcher, timeline, &mut now);
}
