//! Execution timeline model.
//!
//! A timeline is the chronological record of what a policy engine ran:
//! one [`ExecutionSegment`] per contiguous slice of CPU time, in dispatch
//! order. Non-preemptive policies produce one segment per process;
//! preemptive policies may produce many.
//!
//! Completion records ([`CompletionRecord`]) are the coarser, one-per-process
//! view that feeds metric aggregation.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId};

/// One contiguous slice of CPU time given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Process that ran.
    pub process_id: ProcessId,
    /// Segment start time.
    pub start: f64,
    /// Time spent running in this segment.
    pub duration: f64,
    /// Original arrival time of the process.
    pub arrival: f64,
    /// Original total burst of the process.
    pub burst: f64,
    /// Segment end time (`start + duration`).
    pub end: f64,
}

impl ExecutionSegment {
    /// Creates a segment for `process` running `duration` from `start`.
    pub fn new(process: &Process, start: f64, duration: f64) -> Self {
        Self {
            process_id: process.id,
            start,
            duration,
            arrival: process.arrival,
            burst: process.burst,
            end: start + duration,
        }
    }
}

/// Final outcome of one process under one policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Completed process.
    pub process_id: ProcessId,
    /// Original arrival time.
    pub arrival: f64,
    /// Original burst.
    pub burst: f64,
    /// End time of the process's final segment.
    pub completion: f64,
}

impl CompletionRecord {
    /// Creates a completion record from the original process.
    pub fn new(process: &Process, completion: f64) -> Self {
        Self {
            process_id: process.id,
            arrival: process.arrival,
            burst: process.burst,
            completion,
        }
    }

    /// Turnaround time: completion − arrival.
    #[inline]
    pub fn turnaround(&self) -> f64 {
        self.completion - self.arrival
    }

    /// Wait time: completion − (arrival + burst).
    ///
    /// Exactly zero for a process that ran uninterrupted from its arrival.
    #[inline]
    pub fn wait(&self) -> f64 {
        self.completion - (self.arrival + self.burst)
    }
}

/// A run of contiguous segments belonging to one process.
///
/// This is the unit a Gantt-style chart draws as one block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Process that ran.
    pub process_id: ProcessId,
    /// Start of the first merged segment.
    pub start: f64,
    /// End of the last merged segment.
    pub end: f64,
    /// Whether an idle gap precedes this span.
    pub after_gap: bool,
}

impl Span {
    /// Span length.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// An idle interval between two segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// Idle start (end of the previous segment).
    pub start: f64,
    /// Idle end (start of the next segment).
    pub end: f64,
}

/// Ordered sequence of execution segments for one policy run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in the order they ran.
    pub segments: Vec<ExecutionSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: ExecutionSegment) {
        self.segments.push(segment);
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment was recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Start of the first segment.
    pub fn start(&self) -> Option<f64> {
        self.segments.first().map(|s| s.start)
    }

    /// End of the last segment (0 for an empty timeline).
    pub fn makespan(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.end)
    }

    /// Total time the CPU spent running something.
    pub fn busy_time(&self) -> f64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Fraction of `[start, makespan]` during which the CPU was busy.
    ///
    /// Returns `None` if the horizon is zero.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan() - self.start()?;
        if horizon <= 0.0 {
            return None;
        }
        Some(self.busy_time() / horizon)
    }

    /// All segments of one process, in run order.
    pub fn segments_for(&self, id: ProcessId) -> impl Iterator<Item = &ExecutionSegment> + '_ {
        self.segments.iter().filter(move |s| s.process_id == id)
    }

    /// Time the process was first dispatched.
    pub fn first_dispatch(&self, id: ProcessId) -> Option<f64> {
        self.segments_for(id).next().map(|s| s.start)
    }

    /// Total CPU time received by one process.
    pub fn service_time(&self, id: ProcessId) -> f64 {
        self.segments_for(id).map(|s| s.duration).sum()
    }

    /// Merges contiguous segments of the same process into spans.
    ///
    /// A new span starts whenever the process changes or time jumps
    /// between consecutive segments.
    pub fn spans(&self) -> Vec<Span> {
        let mut spans: Vec<Span> = Vec::new();
        for seg in &self.segments {
            match spans.last_mut() {
                Some(last) if last.process_id == seg.process_id && last.end == seg.start => {
                    last.end = seg.end;
                }
                Some(last) => {
                    let after_gap = last.end != seg.start;
                    spans.push(Span {
                        process_id: seg.process_id,
                        start: seg.start,
                        end: seg.end,
                        after_gap,
                    });
                }
                None => spans.push(Span {
                    process_id: seg.process_id,
                    start: seg.start,
                    end: seg.end,
                    after_gap: false,
                }),
            }
        }
        spans
    }

    /// Idle intervals between consecutive segments.
    pub fn gaps(&self) -> Vec<Gap> {
        self.segments
            .windows(2)
            .filter(|w| w[1].start > w[0].end)
            .map(|w| Gap {
                start: w[0].end,
                end: w[1].start,
            })
            .collect()
    }
}
