//! Policy engines and metric aggregation.
//!
//! Provides the five dispatch policies over a single simulated CPU and
//! the metrics derived from their runs.
//!
//! # Algorithm
//!
//! `Simulator` drives one shared admit/select/run loop per policy; the
//! policies differ only in their ready-queue discipline and in how long a
//! dispatch may run (whole burst, one SRTF slice, or one RR quantum).
//!
//! # KPI
//!
//! `PolicyMetrics` computes per-process wait, turnaround and response
//! time plus their workload-level aggregates.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Schrage (1968), "A Proof of the Optimality of the Shortest Remaining
//!   Processing Time Discipline"

mod engine;
mod kpi;
mod policy;

pub use engine::{PolicyRun, SimulationConfig, Simulator};
pub use kpi::{PolicyMetrics, ProcessMetrics};
pub use policy::Policy;
