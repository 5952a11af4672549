//! Process model.
//!
//! A process is the unit of work being scheduled: an identity, the
//! simulated time at which it becomes eligible for dispatch, and the
//! total CPU time it needs before completion.
//!
//! # Time Representation
//! Times are dimensionless simulated units (`f64`). Identities are kept
//! as integers and never mixed into time arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique process identifier.
///
/// Displayed as `P<n>`, the way timelines label processes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProcessId(pub u32);

impl ProcessId {
    /// Raw numeric identity.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProcessId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A raw `(identity, arrival, burst)` triple as read from an input source.
///
/// Records are unvalidated; [`Workload::ingest`](super::Workload::ingest)
/// turns them into [`Process`] values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Claimed process identity.
    pub id: u32,
    /// Arrival time.
    pub arrival: f64,
    /// Total CPU burst.
    pub burst: f64,
}

impl ProcessRecord {
    /// Creates a record.
    pub fn new(id: u32, arrival: f64, burst: f64) -> Self {
        Self { id, arrival, burst }
    }
}

impl From<(u32, f64, f64)> for ProcessRecord {
    fn from((id, arrival, burst): (u32, f64, f64)) -> Self {
        Self::new(id, arrival, burst)
    }
}

/// A validated process. Immutable once ingested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Unique identity.
    pub id: ProcessId,
    /// Simulated time at which the process becomes eligible for dispatch.
    pub arrival: f64,
    /// Total CPU time required.
    pub burst: f64,
}

impl Process {
    pub(crate) fn from_record(record: &ProcessRecord) -> Self {
        Self {
            id: ProcessId(record.id),
            arrival: record.arrival,
            burst: record.burst,
        }
    }

    /// Earliest possible completion: arrival plus burst, with no waiting.
    #[inline]
    pub fn earliest_completion(&self) -> f64 {
        self.arrival + self.burst
    }
}
