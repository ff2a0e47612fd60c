//! Timeline segments and the invariants they must satisfy.
//!
//! Spec §3: segments are `{pid, start, end}` with `start < end`, in
//! non-decreasing `start` order, contiguous where the CPU is busy, and
//! never overlapping. `Timeline` centralizes the append logic so every
//! algorithm in `engine/` produces a timeline that satisfies these by
//! construction rather than by convention.

use serde::Serialize;

/// Reserved pid marking CPU idle time.
pub const IDLE: &str = "IDLE";
/// Reserved pid marking dispatcher context-switch overhead.
pub const CS: &str = "CS";

/// One contiguous interval of CPU occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub pid: String,
    pub start: u64,
    pub end: u64,
}

impl Segment {
    pub fn new(pid: impl Into<String>, start: u64, end: u64) -> Self {
        debug_assert!(start < end, "segment must have positive duration");
        Self { pid: pid.into(), start, end }
    }

    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}

/// An ordered, append-only sequence of segments.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Timeline(Vec<Segment>);

impl Timeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a segment. Panics if it would violate ordering or overlap —
    /// every call site in `engine/` is expected to pass monotonically
    /// advancing `(start, end)` pairs, so a violation here is an engine bug,
    /// not a data problem to recover from.
    pub fn push(&mut self, pid: impl Into<String>, start: u64, end: u64) {
        if start >= end {
            return;
        }
        if let Some(last) = self.0.last() {
            assert!(start >= last.start, "segments must be appended in non-decreasing start order");
            assert!(start >= last.end, "segments on a single core must not overlap");
        }
        let segment = Segment::new(pid, start, end);
        log::debug!("timeline: {} [{}, {})", segment.pid, segment.start, segment.end);
        self.0.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total duration a given pid occupied the CPU across the whole run.
    pub fn duration_for(&self, pid: &str) -> u64 {
        self.0.iter().filter(|s| s.pid == pid).map(Segment::duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_ignores_zero_length_segments() {
        let mut t = Timeline::new();
        t.push("A", 5, 5);
        assert!(t.is_empty());
    }

    #[test]
    fn duration_for_sums_across_segments() {
        let mut t = Timeline::new();
        t.push("A", 0, 2);
        t.push("B", 2, 3);
        t.push("A", 3, 5);
        assert_eq!(t.duration_for("A"), 4);
        assert_eq!(t.duration_for("B"), 1);
    }

    #[test]
    #[should_panic(expected = "must not overlap")]
    fn push_rejects_overlap() {
        let mut t = Timeline::new();
        t.push("A", 0, 5);
        t.push("B", 3, 6);
    }
}
