//! Per-policy performance metrics.
//!
//! Computes per-process and workload-level indicators from a policy's
//! completion records.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Wait | completion − arrival − burst |
//! | Turnaround | completion − arrival |
//! | Response | first dispatch − arrival (needs the timeline) |
//! | Makespan | Latest completion time |
//! | Throughput | Processes completed per unit time since first arrival |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{CompletionRecord, ProcessId, Timeline};

/// Metrics of one process under one policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identity.
    pub process_id: ProcessId,
    /// Original arrival time.
    pub arrival: f64,
    /// Original burst.
    pub burst: f64,
    /// Completion time.
    pub completion: f64,
    /// Time spent ready but not running.
    pub wait: f64,
    /// Completion minus arrival.
    pub turnaround: f64,
    /// First dispatch minus arrival, when a timeline was supplied.
    pub response: Option<f64>,
}

/// Aggregated metrics of one policy run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolicyMetrics {
    /// Per-process metrics, sorted by identity.
    pub per_process: Vec<ProcessMetrics>,
    /// Mean wait time.
    pub avg_wait: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Longest single wait.
    pub max_wait: f64,
    /// Latest completion.
    pub makespan: f64,
    /// Completed processes per unit time over `[first arrival, makespan]`.
    pub throughput: f64,
}

impl PolicyMetrics {
    /// Computes metrics from completion records (any order).
    ///
    /// An empty slice yields all-zero metrics.
    pub fn calculate(records: &[CompletionRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let mut per_process: Vec<ProcessMetrics> = records
            .iter()
            .map(|r| ProcessMetrics {
                process_id: r.process_id,
                arrival: r.arrival,
                burst: r.burst,
                completion: r.completion,
                wait: r.wait(),
                turnaround: r.turnaround(),
                response: None,
            })
            .collect();
        per_process.sort_by_key(|m| m.process_id);

        let n = per_process.len() as f64;
        let avg_wait = per_process.iter().map(|m| m.wait).sum::<f64>() / n;
        let avg_turnaround = per_process.iter().map(|m| m.turnaround).sum::<f64>() / n;
        let max_wait = per_process
            .iter()
            .map(|m| m.wait)
            .fold(f64::NEG_INFINITY, f64::max);
        let makespan = per_process
            .iter()
            .map(|m| m.completion)
            .fold(f64::NEG_INFINITY, f64::max);
        let first_arrival = per_process
            .iter()
            .map(|m| m.arrival)
            .fold(f64::INFINITY, f64::min);

        let horizon = makespan - first_arrival;
        let throughput = if horizon > 0.0 { n / horizon } else { 0.0 };

        Self {
            per_process,
            avg_wait,
            avg_turnaround,
            max_wait,
            makespan,
            throughput,
        }
    }

    /// Fills in response times from the timeline that produced the records.
    pub fn with_response_times(mut self, timeline: &Timeline) -> Self {
        for m in &mut self.per_process {
            m.response = timeline
                .first_dispatch(m.process_id)
                .map(|start| start - m.arrival);
        }
        self
    }

    /// Mean response time, if every process has one.
    pub fn avg_response(&self) -> Option<f64> {
        if self.per_process.is_empty() {
            return None;
        }
        let total: Option<f64> = self.per_process.iter().map(|m| m.response).sum();
        total.map(|t| t / self.per_process.len() as f64)
    }

    /// Metrics of one process.
    pub fn get(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.process_id == id)
    }
}
