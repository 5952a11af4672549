//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for entries that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Schrage (1968), optimality of shortest-remaining-processing-time

use super::{ReadyEntry, RuleScore, SelectionRule};

/// Arrival order.
///
/// Earlier arrival first. FCFS applies it once as a pre-sort; it never
/// drives a live queue because FCFS has no ready-queue contention.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl SelectionRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, entry: &ReadyEntry) -> RuleScore {
        entry.arrival
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest total burst first.
///
/// Minimizes mean completion time among non-preemptive orders when all
/// processes are ready together.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, entry: &ReadyEntry) -> RuleScore {
        entry.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Longest total burst first.
#[derive(Debug, Clone, Copy)]
pub struct LongestBurst;

impl SelectionRule for LongestBurst {
    fn name(&self) -> &'static str {
        "LJF"
    }

    fn evaluate(&self, entry: &ReadyEntry) -> RuleScore {
        -entry.burst
    }

    fn description(&self) -> &'static str {
        "Longest Job First"
    }
}

/// Shortest remaining time first.
///
/// Scores by *remaining* time, so a preempted entry is re-ranked every
/// time it is re-inserted.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, entry: &ReadyEntry) -> RuleScore {
        entry.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessId;

    fn entry(id: u32, arrival: f64, burst: f64, remaining: f64) -> ReadyEntry {
        ReadyEntry {
            process_id: ProcessId(id),
            arrival,
            burst,
            remaining,
        }
    }

    #[test]
    fn test_arrival_order() {
        let early = entry(1, 0.0, 9.0, 9.0);
        let late = entry(2, 4.0, 1.0, 1.0);
        assert!(ArrivalOrder.evaluate(&early) < ArrivalOrder.evaluate(&late));
    }

    #[test]
    fn test_shortest_burst() {
        let short = entry(1, 5.0, 2.0, 2.0);
        let long = entry(2, 0.0, 7.0, 1.0);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_longest_burst() {
        let short = entry(1, 0.0, 2.0, 2.0);
        let long = entry(2, 0.0, 7.0, 7.0);
        assert!(LongestBurst.evaluate(&long) < LongestBurst.evaluate(&short));
    }

    #[test]
    fn test_shortest_remaining_ignores_burst() {
        let nearly_done = entry(1, 0.0, 10.0, 1.0);
        let fresh = entry(2, 0.0, 3.0, 3.0);
        assert!(
            ShortestRemaining.evaluate(&nearly_done) < ShortestRemaining.evaluate(&fresh)
        );
    }

    #[test]
    fn test_names_and_descriptions() {
        assert_eq!(ArrivalOrder.name(), "FCFS");
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(LongestBurst.description(), "Longest Job First");
        assert_eq!(ShortestRemaining.description(), "Shortest Remaining Time First");
    }
}
