//! Single-CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates one workload of processes (identity, arrival, burst) under
//! five dispatch policies and reports each policy's execution timeline,
//! per-process wait/turnaround, and workload averages, plus a heuristic
//! policy recommendation.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Workload`, `ExecutionSegment`,
//!   `Timeline`, `CompletionRecord`
//! - **`dispatching`**: Ready-queue disciplines and selection rules
//! - **`scheduler`**: Policy engines (FCFS, SJF, LJF, SRTF, RR) and metrics
//! - **`predictor`**: Dispersion-based policy recommendation
//! - **`report`**: Input parsing, Gantt rendering, text/structured reports
//! - **`generator`**: Seeded random workloads
//! - **`validation`**: Input and settings integrity checks
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Workload;
//! use u_cpusched::report::simulate;
//! use u_cpusched::scheduler::{Policy, SimulationConfig};
//!
//! let workload = Workload::from_triples(&[(1, 0.0, 5.0), (2, 1.0, 3.0), (3, 2.0, 8.0)]).unwrap();
//! let report = simulate(&workload, SimulationConfig::default()).unwrap();
//!
//! let fcfs = report.policy(Policy::Fcfs).unwrap();
//! assert!((fcfs.metrics.avg_wait - 10.0 / 3.0).abs() < 1e-9);
//! assert_eq!(report.recommendation.label(), "SJF or SRTF");
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod predictor;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::SimError;
