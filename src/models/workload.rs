//! Workload model.
//!
//! A workload is the fixed, non-empty set of processes one simulation run
//! schedules. It is built once by [`Workload::ingest`], never mutated, and
//! handed to every policy engine as an arrival-ordered copy.
//!
//! Processes are indexed two ways: by arrival order (for admission into
//! the ready structure) and by identity (to recover original arrival and
//! burst times downstream). Identities need not be dense or 1-based.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Process, ProcessId, ProcessRecord};
use crate::error::SimError;
use crate::validation::validate_records;

/// First and second statistical moments of a sample.
///
/// Variance is the population variance (divides by `n`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Moments {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Square root of the variance.
    pub std_dev: f64,
}

impl Moments {
    /// Computes the moments of a sample. An empty sample yields all zeros.
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
        }
    }
}

/// Workload-level statistics, computed once at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadStats {
    /// Number of processes.
    pub count: usize,
    /// Moments of the arrival times.
    pub arrival: Moments,
    /// Moments of the burst times.
    pub burst: Moments,
    /// Number of processes whose burst strictly exceeds the mean burst.
    pub long_burst_count: usize,
}

impl WorkloadStats {
    fn from_processes(processes: &[Process]) -> Self {
        let arrivals: Vec<f64> = processes.iter().map(|p| p.arrival).collect();
        let bursts: Vec<f64> = processes.iter().map(|p| p.burst).collect();
        let burst = Moments::of(&bursts);
        let long_burst_count = bursts.iter().filter(|&&b| b > burst.mean).count();

        Self {
            count: processes.len(),
            arrival: Moments::of(&arrivals),
            burst,
            long_burst_count,
        }
    }
}

/// A validated, non-empty collection of processes.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Processes in ingestion order.
    processes: Vec<Process>,
    /// Indices into `processes`, sorted by (arrival, id).
    arrival_order: Vec<usize>,
    /// Identity → index into `processes`.
    index: HashMap<ProcessId, usize>,
    stats: WorkloadStats,
}

impl Workload {
    /// Builds a workload from raw records.
    ///
    /// # Errors
    /// - [`SimError::EmptyWorkload`] if `records` is empty.
    /// - [`SimError::InvalidWorkload`] with every detected problem
    ///   (duplicate or zero identity, bad arrival or burst time).
    pub fn ingest<I>(records: I) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = ProcessRecord>,
    {
        let records: Vec<ProcessRecord> = records.into_iter().collect();
        if records.is_empty() {
            return Err(SimError::EmptyWorkload);
        }
        validate_records(&records).map_err(SimError::InvalidWorkload)?;

        let processes: Vec<Process> = records.iter().map(Process::from_record).collect();
        for p in &processes {
            log::debug!(
                "process {}: arrival {}, burst {}",
                p.id,
                p.arrival,
                p.burst
            );
        }

        let index = processes
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();

        let mut arrival_order: Vec<usize> = (0..processes.len()).collect();
        arrival_order.sort_by(|&a, &b| {
            processes[a]
                .arrival
                .total_cmp(&processes[b].arrival)
                .then_with(|| processes[a].id.cmp(&processes[b].id))
        });

        let stats = WorkloadStats::from_processes(&processes);
        log::info!(
            "ingested {} processes (mean burst {:.3}, mean arrival {:.3})",
            stats.count,
            stats.burst.mean,
            stats.arrival.mean
        );

        Ok(Self {
            processes,
            arrival_order,
            index,
            stats,
        })
    }

    /// Builds a workload from `(id, arrival, burst)` triples.
    pub fn from_triples(triples: &[(u32, f64, f64)]) -> Result<Self, SimError> {
        Self::ingest(triples.iter().map(|&t| ProcessRecord::from(t)))
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Always `false` for an ingested workload.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Processes in ingestion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates processes in (arrival, id) order.
    pub fn iter_by_arrival(&self) -> impl Iterator<Item = &Process> + '_ {
        self.arrival_order.iter().map(|&i| &self.processes[i])
    }

    /// An owned arrival-ordered copy, as handed to each policy engine.
    pub fn arrival_sorted(&self) -> Vec<Process> {
        self.iter_by_arrival().copied().collect()
    }

    /// Looks up a process by identity.
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.index.get(&id).map(|&i| &self.processes[i])
    }

    /// Earliest arrival time in the workload.
    pub fn first_arrival(&self) -> f64 {
        self.iter_by_arrival().next().map_or(0.0, |p| p.arrival)
    }

    /// Statistics computed at ingestion.
    pub fn stats(&self) -> &WorkloadStats {
        &self.stats
    }

    /// Sum of all bursts.
    pub fn total_burst(&self) -> f64 {
        self.processes.iter().map(|p| p.burst).sum()
    }
}
