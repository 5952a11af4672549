//! Ready-queue containers.
//!
//! [`RuleQueue`] selects by rule score with an explicit tie-breaker, so
//! equal scores never fall back on container order. [`FifoQueue`] never
//! reorders.

use std::cmp::Ordering;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{ReadyEntry, ReadyQueue, SelectionRule};

/// How entries with equal scores are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreaker {
    /// Earlier arrival first, then lower identity.
    #[default]
    ArrivalThenId,
    /// Lower identity first.
    ById,
}

impl TieBreaker {
    fn compare(self, a: &ReadyEntry, b: &ReadyEntry) -> Ordering {
        match self {
            Self::ArrivalThenId => a
                .arrival
                .total_cmp(&b.arrival)
                .then_with(|| a.process_id.cmp(&b.process_id)),
            Self::ById => a.process_id.cmp(&b.process_id),
        }
    }
}

const EPSILON: f64 = 1e-9;

fn compare<R: SelectionRule + ?Sized>(
    rule: &R,
    tie_breaker: TieBreaker,
    a: &ReadyEntry,
    b: &ReadyEntry,
) -> Ordering {
    let score_a = rule.evaluate(a);
    let score_b = rule.evaluate(b);

    if (score_a - score_b).abs() > EPSILON {
        return score_a.total_cmp(&score_b);
    }
    tie_breaker.compare(a, b)
}

/// Sorts entries by rule priority (highest priority first).
///
/// Scores compare exactly here; `sort_by` needs a total order.
pub fn order_by<R: SelectionRule + ?Sized>(
    rule: &R,
    tie_breaker: TieBreaker,
    entries: &mut [ReadyEntry],
) {
    entries.sort_by(|a, b| {
        rule.evaluate(a)
            .total_cmp(&rule.evaluate(b))
            .then_with(|| tie_breaker.compare(a, b))
    });
}

/// Priority ready queue driven by a [`SelectionRule`].
///
/// Selection is a linear scan; ready sets in a single-CPU simulation are
/// small, and rescoring on every pop keeps remaining-time rules exact.
#[derive(Debug, Clone)]
pub struct RuleQueue<R> {
    rule: R,
    tie_breaker: TieBreaker,
    entries: Vec<ReadyEntry>,
}

impl<R: SelectionRule> RuleQueue<R> {
    /// Creates an empty queue.
    pub fn new(rule: R, tie_breaker: TieBreaker) -> Self {
        Self {
            rule,
            tie_breaker,
            entries: Vec::new(),
        }
    }

    /// The rule this queue orders by.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Highest-priority entry without removing it.
    pub fn peek(&self) -> Option<&ReadyEntry> {
        self.best_index().map(|i| &self.entries[i])
    }

    fn best_index(&self) -> Option<usize> {
        (0..self.entries.len()).min_by(|&a, &b| {
            compare(&self.rule, self.tie_breaker, &self.entries[a], &self.entries[b])
        })
    }
}

impl<R: SelectionRule> ReadyQueue for RuleQueue<R> {
    fn push(&mut self, entry: ReadyEntry) {
        self.entries.push(entry);
    }

    fn pop(&mut self) -> Option<ReadyEntry> {
        // Scores within EPSILON defer to the tie-breaker. That relation is
        // not transitive, so for chains of near-equal scores the winner can
        // depend on scan order, which swap_remove permutes.
        self.best_index().map(|i| self.entries.swap_remove(i))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Strict insertion-order queue (Round-Robin).
#[derive(Debug, Clone, Default)]
pub struct FifoQueue {
    entries: VecDeque<ReadyEntry>,
}

impl FifoQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadyQueue for FifoQueue {
    fn push(&mut self, entry: ReadyEntry) {
        self.entries.push_back(entry);
    }

    fn pop(&mut self) -> Option<ReadyEntry> {
        self.entries.pop_front()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
