//! Generic run loops shared across algorithms.
//!
//! Grounded on the observation (spec Design Notes §9) that the original
//! `schedule_srtf` and `schedule_priority_generic` functions are structurally
//! identical except for the key they order the ready set by, and likewise
//! for `schedule_round_robin`/`schedule_mlfq` except for the number of
//! feedback levels. Rather than seven hand-rolled loops, three generic
//! engines here are instantiated once per algorithm in the sibling modules.

use crate::dispatcher::Dispatcher;
use crate::process::Process;
use crate::ready_set::{FifoQueue, OrderedReadySet};
use crate::timeline::{Timeline, IDLE};

/// Advance `now` to `arrival`, emitting an `IDLE` segment for the gap.
fn advance_to(now: &mut u64, arrival: u64, timeline: &mut Timeline) {
    if arrival > *now {
        timeline.push(IDLE, *now, arrival);
    }
    *now = (*now).max(arrival);
}

/// Sort `indices` into the workload's `(arrival, pid)` admission order.
fn admission_order(processes: &[Process], indices: &[usize]) -> Vec<usize> {
    let mut order = indices.to_vec();
    order.sort_by(|&a, &b| (processes[a].arrival, &processes[a].pid).cmp(&(processes[b].arrival, &processes[b].pid)));
    order
}

/// Non-preemptive select-by-key engine: FCFS, SJF, PRIORITY (non-preemptive),
/// and each band of MLQ are all this loop with a different `key_fn`.
///
/// Selects, among admitted processes, the one with the smallest
/// `(key_fn(p), arrival, pid)` and runs it to completion before selecting
/// again.
pub fn run_nonpreemptive_keyed<K: Ord + Copy>(
    processes: &mut [Process],
    indices: &[usize],
    key_fn: impl Fn(&Process) -> K,
    dispatcher: &mut Dispatcher,
    timeline: &mut Timeline,
    now: &mut u64,
) {
    let order = admission_order(processes, indices);
    let mut idx_ptr = 0;
    let mut ready: OrderedReadySet<K, usize> = OrderedReadySet::new();

    while idx_ptr < order.len() || !ready.is_empty() {
        if ready.is_empty() {
            let next = order[idx_ptr];
            advance_to(now, processes[next].arrival, timeline);
        }
        while idx_ptr < order.len() && processes[order[idx_ptr]].arrival <= *now {
            let i = order[idx_ptr];
            ready.push(key_fn(&processes[i]), processes[i].arrival, processes[i].pid.clone(), i);
            idx_ptr += 1;
        }

        let (_, _, pid, i) = ready.pop_min().expect("ready set populated above");
        *now = dispatcher.switch(&pid, *now, timeline);
        processes[i].mark_started(*now);
        let end = *now + processes[i].remaining;
        timeline.push(pid, *now, end);
        processes[i].remaining = 0;
        processes[i].completed = Some(end);
        *now = end;
    }
}

/// Preemptive select-by-key engine: SRTF and PRIORITY (preemptive) are both
/// this loop, differing only in whether `key_fn` reads `remaining` (dynamic)
/// or `priority` (static). A running process is preempted the instant a
/// newly admitted process's key strictly outranks it; ties never preempt.
pub fn run_preemptive_keyed<K: Ord + Copy>(
    processes: &mut [Process],
    indices: &[usize],
    key_fn: impl Fn(&Process) -> K,
    dispatcher: &mut Dispatcher,
    timeline: &mut Timeline,
    now: &mut u64,
) {
    let order = admission_order(processes, indices);
    let mut idx_ptr = 0;
    let mut ready: OrderedReadySet<K, usize> = OrderedReadySet::new();
    let mut current: Option<usize> = None;

    let admit = |idx_ptr: &mut usize, now: u64, processes: &[Process], ready: &mut OrderedReadySet<K, usize>| {
        while *idx_ptr < order.len() && processes[order[*idx_ptr]].arrival <= now {
            let i = order[*idx_ptr];
            ready.push(key_fn(&processes[i]), processes[i].arrival, processes[i].pid.clone(), i);
            *idx_ptr += 1;
        }
    };

    loop {
        admit(&mut idx_ptr, *now, processes, &mut ready);

        if current.is_none() {
            if let Some((_, _, pid, i)) = ready.pop_min() {
                *now = dispatcher.switch(&pid, *now, timeline);
                processes[i].mark_started(*now);
                current = Some(i);
                admit(&mut idx_ptr, *now, processes, &mut ready);
            } else if idx_ptr < order.len() {
                advance_to(now, processes[order[idx_ptr]].arrival, timeline);
                continue;
            } else {
                break;
            }
        }

        let cur_i = current.expect("current set above");
        let next_arrival = (idx_ptr < order.len()).then(|| processes[order[idx_ptr]].arrival);
        let completion = *now + processes[cur_i].remaining;

        match next_arrival {
            Some(arr) if arr < completion => {
                let run = arr - *now;
                let pid = processes[cur_i].pid.clone();
                timeline.push(pid, *now, arr);
                processes[cur_i].remaining -= run;
                *now = arr;
                admit(&mut idx_ptr, *now, processes, &mut ready);

                let cur_key = key_fn(&processes[cur_i]);
                if ready.peek_min_key().is_some_and(|top| *top < cur_key) {
                    let pid = processes[cur_i].pid.clone();
                    let arrival = processes[cur_i].arrival;
                    ready.push(cur_key, arrival, pid, cur_i);
                    current = None;
                }
            }
            _ => {
                let pid = processes[cur_i].pid.clone();
                let end = *now + processes[cur_i].remaining;
                timeline.push(pid, *now, end);
                processes[cur_i].remaining = 0;
                processes[cur_i].completed = Some(end);
                *now = end;
                current = None;
            }
        }
    }
}

/// Quantum-based feedback engine: Round Robin is this loop with one level
/// and a single repeated quantum, MLFQ is this loop with N levels and a
/// distinct quantum per level. Arrivals are always admitted to level 0;
/// a process that does not finish its slice demotes one level (capped at
/// the lowest) and rejoins the back of that level's queue.
pub fn run_quantum(
    processes: &mut [Process],
    indices: &[usize],
    quanta: &[u64],
    dispatcher: &mut Dispatcher,
    timeline: &mut Timeline,
    now: &mut u64,
) {
    let order = admission_order(processes, indices);
    let mut idx_ptr = 0;
    let levels = quanta.len();
    let mut queues: Vec<FifoQueue<usize>> = (0..levels).map(|_| FifoQueue::new()).collect();

    let admit = |idx_ptr: &mut usize, now: u64, processes: &[Process], queues: &mut [FifoQueue<usize>]| {
        while *idx_ptr < order.len() && processes[order[*idx_ptr]].arrival <= now {
            queues[0].push_back(order[*idx_ptr]);
            *idx_ptr += 1;
        }
    };

    loop {
        admit(&mut idx_ptr, *now, processes, &mut queues);

        let qid = match queues.iter().position(|q| !q.is_empty()) {
            Some(q) => q,
            None if idx_ptr < order.len() => {
                advance_to(now, processes[order[idx_ptr]].arrival, timeline);
                continue;
            }
            None => break,
        };

        let i = queues[qid].pop_front().expect("non-empty queue selected above");
        let pid = processes[i].pid.clone();
        *now = dispatcher.switch(&pid, *now, timeline);
        processes[i].mark_started(*now);

        let slice = quanta[qid].min(processes[i].remaining);
        let end = *now + slice;
        timeline.push(pid, *now, end);
        processes[i].remaining -= slice;
        *now = end;

        admit(&mut idx_ptr, *now, processes, &mut queues);

        if processes[i].remaining > 0 {
            let demoted = (qid + 1).min(levels - 1);
            queues[demoted].push_back(i);
        } else {
            processes[i].completed = Some(end);
        }
    }
}
