//! Ready-set structures shared by the scheduling algorithms.
//!
//! Spec §4.2 names two abstractions: an ordered ready set keyed by the
//! lexicographic triple `(primary, arrival, pid)`, and a FIFO ready queue.
//! The FIFO queue is the same `VecDeque` the teacher's round-robin policy
//! already uses (`scheduler/policies/round_robin.rs`); the ordered set is an
//! enrichment built on `std::collections::BinaryHeap`, the idiomatic Rust
//! analogue of the original Python implementation's `heapq`-based
//! `(key, arrival, pid, process)` tuples.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// One entry in an `OrderedReadySet`, ordered by `(primary, arrival, pid)`.
/// This ordering is NORMATIVE (spec §4.2) and must never be bypassed.
struct Entry<K, T> {
    primary: K,
    arrival: u64,
    pid: String,
    value: T,
}

impl<K: Eq, T> PartialEq for Entry<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.primary == other.primary && self.arrival == other.arrival && self.pid == other.pid
    }
}
impl<K: Eq, T> Eq for Entry<K, T> {}

impl<K: Ord, T> PartialOrd for Entry<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<K: Ord, T> Ord for Entry<K, T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (&self.primary, self.arrival, &self.pid).cmp(&(&other.primary, other.arrival, &other.pid))
    }
}

/// A min-heap over `(primary, arrival, pid)`, used by SJF, SRTF, and
/// PRIORITY to select the next process to run.
pub struct OrderedReadySet<K: Ord, T> {
    heap: BinaryHeap<Reverse<Entry<K, T>>>,
}

impl<K: Ord, T> OrderedReadySet<K, T> {
    pub fn new() -> Self {
        Self { heap: BinaryHeap::new() }
    }

    pub fn push(&mut self, primary: K, arrival: u64, pid: String, value: T) {
        self.heap.push(Reverse(Entry { primary, arrival, pid, value }));
    }

    /// Remove and return the minimum entry's value, arrival, and pid.
    pub fn pop_min(&mut self) -> Option<(K, u64, String, T)> {
        self.heap.pop().map(|Reverse(e)| (e.primary, e.arrival, e.pid, e.value))
    }

    /// The primary key of the minimum entry, without removing it.
    pub fn peek_min_key(&self) -> Option<&K> {
        self.heap.peek().map(|Reverse(e)| &e.primary)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<K: Ord, T> Default for OrderedReadySet<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A FIFO ready queue, used by Round Robin and MLFQ.
pub struct FifoQueue<T> {
    queue: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self { queue: VecDeque::new() }
    }

    pub fn push_back(&mut self, value: T) {
        self.queue.push_back(value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
