//! Synthetic workload generation.
//!
//! Draws random `(id, arrival, burst)` triples from a caller-supplied RNG,
//! for benchmarking policies against each other and for randomized checks.
//! Times are drawn as integer ticks and divided by `resolution`, so
//! `resolution == 1` yields integral workloads.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::models::{ProcessRecord, Workload};

/// Parameters for random workloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes (identities `1..=count`).
    pub count: usize,
    /// Latest arrival, in ticks.
    pub max_arrival: u32,
    /// Shortest burst, in ticks (at least 1).
    pub min_burst: u32,
    /// Longest burst, in ticks.
    pub max_burst: u32,
    /// Ticks per time unit.
    pub resolution: u32,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            resolution: 1,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, ticks: u32) -> Self {
        self.max_arrival = ticks;
        self
    }

    /// Sets the burst range in ticks.
    pub fn with_burst_range(mut self, min_ticks: u32, max_ticks: u32) -> Self {
        self.min_burst = min_ticks;
        self.max_burst = max_ticks;
        self
    }

    /// Sets ticks per time unit.
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Draws raw records.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessRecord> {
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);
        let scale = f64::from(self.resolution.max(1));

        (1..=self.count)
            .map(|id| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(min_burst..=max_burst);
                ProcessRecord::new(
                    id as u32,
                    f64::from(arrival) / scale,
                    f64::from(burst) / scale,
                )
            })
            .collect()
    }

    /// Draws and ingests a workload.
    ///
    /// # Errors
    /// [`SimError::EmptyWorkload`] when `count` is zero.
    pub fn generate_workload<R: Rng>(&self, rng: &mut R) -> Result<Workload, SimError> {
        Workload::ingest(self.generate(rng))
    }
}
