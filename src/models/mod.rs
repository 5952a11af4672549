//! CPU scheduling domain models.
//!
//! Provides the data types a simulation consumes and produces.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessRecord` | Raw `(id, arrival, burst)` input triple |
//! | `Process` | Validated, immutable process |
//! | `Workload` | Non-empty set of processes, indexed by arrival and identity |
//! | `ExecutionSegment` | One contiguous slice of CPU time |
//! | `Timeline` | Segments in run order, with span/gap views |
//! | `CompletionRecord` | Per-process completion under one policy |

mod process;
mod timeline;
mod workload;

pub use process::{Process, ProcessId, ProcessRecord};
pub use timeline::{CompletionRecord, ExecutionSegment, Gap, Span, Timeline};
pub use workload::{Moments, Workload, WorkloadStats};
