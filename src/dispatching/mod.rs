//! Ready-queue disciplines.
//!
//! A discipline decides which waiting process runs next. Priority-based
//! disciplines are expressed as a [`SelectionRule`] (a score per entry)
//! held in a [`RuleQueue`]; Round-Robin uses the strict insertion-order
//! [`FifoQueue`].
//!
//! | Discipline | Rule | Used by |
//! |------------|------|---------|
//! | Arrival order | [`rules::ArrivalOrder`] | FCFS (pre-sort only) |
//! | Shortest burst first | [`rules::ShortestBurst`] | SJF |
//! | Longest burst first | [`rules::LongestBurst`] | LJF |
//! | Shortest remaining first | [`rules::ShortestRemaining`] | SRTF |
//! | Strict FIFO | [`FifoQueue`] | Round-Robin |
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{ReadyEntry, ReadyQueue, RuleQueue, TieBreaker};
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::Workload;
//!
//! let workload = Workload::from_triples(&[(1, 0.0, 5.0), (2, 0.0, 3.0)]).unwrap();
//! let mut queue = RuleQueue::new(rules::ShortestBurst, TieBreaker::default());
//! for p in workload.iter_by_arrival() {
//!     queue.push(ReadyEntry::new(p));
//! }
//! assert_eq!(queue.pop().unwrap().process_id.get(), 2);
//! ```

mod queue;
pub mod rules;

pub use queue::{order_by, FifoQueue, RuleQueue, TieBreaker};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{Process, ProcessId};

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A process waiting for the CPU.
///
/// Created when the process arrives; consumed when selected; re-inserted
/// with a smaller `remaining` after preemption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadyEntry {
    /// Waiting process.
    pub process_id: ProcessId,
    /// Original arrival time.
    pub arrival: f64,
    /// Original total burst.
    pub burst: f64,
    /// CPU time still needed.
    pub remaining: f64,
}

impl ReadyEntry {
    /// Entry for a freshly arrived process (remaining = burst).
    pub fn new(process: &Process) -> Self {
        Self {
            process_id: process.id,
            arrival: process.arrival,
            burst: process.burst,
            remaining: process.burst,
        }
    }

    /// The original process this entry stands for.
    pub fn process(&self) -> Process {
        Process {
            id: self.process_id,
            arrival: self.arrival,
            burst: self.burst,
        }
    }

    /// The same entry after running for `ran` time units.
    pub fn after_running(self, ran: f64) -> Self {
        Self {
            remaining: self.remaining - ran,
            ..self
        }
    }
}

/// A rule that scores ready entries.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait SelectionRule: Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores an entry. Lower = dispatched first.
    fn evaluate(&self, entry: &ReadyEntry) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// A ready structure owned by one policy engine run.
pub trait ReadyQueue {
    /// Inserts an entry.
    fn push(&mut self, entry: ReadyEntry);

    /// Removes and returns the highest-priority entry.
    fn pop(&mut self) -> Option<ReadyEntry>;

    /// Number of waiting entries.
    fn len(&self) -> usize;

    /// Whether nothing is waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
