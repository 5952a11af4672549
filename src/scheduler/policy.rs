//! Dispatch policies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five simulated dispatch policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Longest-Job-First, non-preemptive.
    Ljf,
    /// Shortest-Remaining-Time-First, preemptive.
    Srtf,
    /// Round-Robin with a fixed quantum.
    RoundRobin,
}

impl Policy {
    /// All policies in reporting order.
    pub const ALL: [Policy; 5] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Ljf,
        Policy::Srtf,
        Policy::RoundRobin,
    ];

    /// Short name as used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Ljf => "LJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin => "RoundRobin",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
