//! Heuristic policy recommendation.
//!
//! Inspects burst and arrival dispersion of a workload and names the
//! policy most likely to suit it. Advisory only: it never changes how
//! any policy engine runs.
//!
//! # Decision Order (first match wins)
//!
//! 1. burst σ < burst mean **and** arrival σ < arrival mean → "SJF or SRTF"
//! 2. burst σ < burst mean → "SRTF"
//! 3. more than ⌊n/2⌋ bursts above the mean → "LJF"
//! 4. otherwise → "Round Robin"

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::WorkloadStats;

/// Recommended policy label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    /// Low burst and arrival dispersion.
    SjfOrSrtf,
    /// Low burst dispersion.
    Srtf,
    /// Mostly long bursts.
    Ljf,
    /// Fallback.
    RoundRobin,
}

impl Recommendation {
    /// Report label.
    pub fn label(self) -> &'static str {
        match self {
            Self::SjfOrSrtf => "SJF or SRTF",
            Self::Srtf => "SRTF",
            Self::Ljf => "LJF",
            Self::RoundRobin => "Round Robin",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommends a policy from workload statistics.
///
/// A pure function of the burst/arrival moments and the long-burst count.
pub fn predict(stats: &WorkloadStats) -> Recommendation {
    let burst_tight = stats.burst.std_dev < stats.burst.mean;
    let arrival_tight = stats.arrival.std_dev < stats.arrival.mean;

    if burst_tight && arrival_tight {
        Recommendation::SjfOrSrtf
    } else if burst_tight {
        Recommendation::Srtf
    } else if stats.long_burst_count > stats.count / 2 {
        Recommendation::Ljf
    } else {
        Recommendation::RoundRobin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Moments, Workload};

    fn stats(burst: (f64, f64), arrival: (f64, f64), count: usize, long: usize) -> WorkloadStats {
        WorkloadStats {
            count,
            arrival: Moments {
                mean: arrival.0,
                variance: arrival.1 * arrival.1,
                std_dev: arrival.1,
            },
            burst: Moments {
                mean: burst.0,
                variance: burst.1 * burst.1,
                std_dev: burst.1,
            },
            long_burst_count: long,
        }
    }

    #[test]
    fn test_sjf_or_srtf() {
        let s = stats((5.0, 1.0), (4.0, 2.0), 4, 2);
        assert_eq!(predict(&s), Recommendation::SjfOrSrtf);
    }

    #[test]
    fn test_srtf() {
        // arrival σ ≥ mean (e.g. everything arrives at 0)
        let s = stats((5.0, 1.0), (0.0, 0.0), 4, 2);
        assert_eq!(predict(&s), Recommendation::Srtf);
    }

    #[test]
    fn test_ljf() {
        let s = stats((5.0, 6.0), (1.0, 0.5), 5, 3);
        assert_eq!(predict(&s), Recommendation::Ljf);
    }

    #[test]
    fn test_long_count_uses_integer_half() {
        // 5 / 2 = 2, so exactly 2 long bursts is not enough
        let s = stats((5.0, 6.0), (1.0, 0.5), 5, 2);
        assert_eq!(predict(&s), Recommendation::RoundRobin);
    }

    #[test]
    fn test_from_workload() {
        let w = Workload::from_triples(&[(1, 0.0, 5.0), (2, 1.0, 3.0), (3, 2.0, 8.0)]).unwrap();
        // burst σ ≈ 2.05 < 5.33; arrival σ ≈ 0.82 < 1.0
        assert_eq!(predict(w.stats()), Recommendation::SjfOrSrtf);
    }

    #[test]
    fn test_deterministic() {
        let s = stats((3.0, 9.0), (2.0, 7.0), 6, 1);
        assert_eq!(predict(&s), predict(&s));
        assert_eq!(predict(&s).to_string(), "Round Robin");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Recommendation::SjfOrSrtf.label(), "SJF or SRTF");
        assert_eq!(Recommendation::Srtf.label(), "SRTF");
        assert_eq!(Recommendation::Ljf.label(), "LJF");
        assert_eq!(Recommendation::RoundRobin.label(), "Round Robin");
    }
}
