//! Simulation reports.
//!
//! Bridges the simulation core and its textual boundary: parses input
//! triples, runs the predictor and every policy, and renders the result
//! as text or exports it as structured data.
//!
//! # Text Layout
//!
//! ```text
//! Predicted Algorithm : SJF or SRTF
//!
//! FCFS :
//! |   P1   |   P2   |   P3   |
//!
//! 0       5       8       16
//!
//! Average Waiting Time : 3.33333, Average Turn-around Time : 8.66667
//! ```
//!
//! Blocks follow in the order FCFS, SJF, LJF, SRTF, RoundRobin.

mod gantt;
mod parse;

pub use gantt::render_gantt;
pub use parse::parse_records;

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::error::SimError;
use crate::models::{CompletionRecord, Timeline, Workload, WorkloadStats};
use crate::predictor::{predict, Recommendation};
use crate::scheduler::{Policy, PolicyMetrics, PolicyRun, SimulationConfig, Simulator};

/// Text written in place of a report when there is nothing to schedule.
pub const EMPTY_WORKLOAD_MESSAGE: &str = "No processes to schedule.\n";

const SIGNIFICANT_DIGITS: i32 = 6;

/// Magnitudes below this print as `0`.
const ZERO_EPSILON: f64 = 1e-9;

/// Formats a number with up to six significant digits, dropping
/// trailing zeros (`16`, `3.33333`, `6.5`). Rounding residue below
/// 1e-9 prints as `0`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.abs() < ZERO_EPSILON {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
    let text = format!("{value:.decimals$}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Outcome of one policy, ready for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    /// Policy.
    pub policy: Policy,
    /// Segments in run order.
    pub timeline: Timeline,
    /// One record per process.
    pub completions: Vec<CompletionRecord>,
    /// Aggregated metrics.
    pub metrics: PolicyMetrics,
}

impl From<PolicyRun> for PolicyReport {
    fn from(run: PolicyRun) -> Self {
        let metrics = run.metrics();
        Self {
            policy: run.policy,
            timeline: run.timeline,
            completions: run.completions,
            metrics,
        }
    }
}

/// Full result of simulating one workload under every policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Heuristic recommendation.
    pub recommendation: Recommendation,
    /// Workload statistics the recommendation was derived from.
    pub stats: WorkloadStats,
    /// Settings used.
    pub config: SimulationConfig,
    /// Per-policy results, in reporting order.
    pub policies: Vec<PolicyReport>,
}

impl SimulationReport {
    /// Runs the predictor and all five policies.
    pub fn build(workload: &Workload, simulator: &Simulator) -> Self {
        let recommendation = predict(workload.stats());
        log::info!("predicted algorithm: {recommendation}");

        Self {
            recommendation,
            stats: *workload.stats(),
            config: *simulator.config(),
            policies: simulator
                .run_all(workload)
                .into_iter()
                .map(PolicyReport::from)
                .collect(),
        }
    }

    /// Report for one policy.
    pub fn policy(&self, policy: Policy) -> Option<&PolicyReport> {
        self.policies.iter().find(|r| r.policy == policy)
    }

    /// Renders the text report.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "Predicted Algorithm : {}\n\n",
            self.recommendation.label()
        );

        for report in &self.policies {
            let header = match report.policy {
                Policy::RoundRobin => format!(
                    "RoundRobin (quantum = {})",
                    format_number(self.config.quantum)
                ),
                other => other.name().to_string(),
            };
            let _ = writeln!(out, "{header} :");
            out.push_str(&render_gantt(&report.timeline));
            let _ = write!(
                out,
                "Average Waiting Time : {}, Average Turn-around Time : {}\n\n\n\n",
                format_number(report.metrics.avg_wait),
                format_number(report.metrics.avg_turnaround)
            );
        }
        out
    }
}

/// Simulates a workload with the given settings.
///
/// # Errors
/// [`SimError::InvalidConfig`] if the settings are out of range.
pub fn simulate(
    workload: &Workload,
    config: SimulationConfig,
) -> Result<SimulationReport, SimError> {
    let simulator = Simulator::new(config)?;
    Ok(SimulationReport::build(workload, &simulator))
}

/// Parses input text and renders the full text report.
///
/// An input with no triples renders [`EMPTY_WORKLOAD_MESSAGE`] and runs
/// no policy.
///
/// # Errors
/// Parse and validation errors; [`SimError::EmptyWorkload`] is never returned.
pub fn render_input(input: &str, simulator: &Simulator) -> Result<String, SimError> {
    let records = parse_records(input)?;
    match Workload::ingest(records) {
        Ok(workload) => Ok(SimulationReport::build(&workload, simulator).render_text()),
        Err(SimError::EmptyWorkload) => {
            log::warn!("no processes to schedule");
            Ok(EMPTY_WORKLOAD_MESSAGE.to_string())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessId;

    const THREE: &str = "1 0 5\n2 1 3\n3 2 8\n";

    fn three_report() -> SimulationReport {
        let w = Workload::from_triples(&[(1, 0.0, 5.0), (2, 1.0, 3.0), (3, 2.0, 8.0)]).unwrap();
        simulate(&w, SimulationConfig::default()).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(10.0 / 3.0), "3.33333");
        assert_eq!(format_number(26.0 / 3.0), "8.66667");
        assert_eq!(format_number(6.5), "6.5");
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(9.9999999), "10");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(2.7755575615628914e-17), "0");
        assert_eq!(format_number(-4e-12), "0");
    }

    #[test]
    fn test_fractional_no_wait_reports_zero() {
        let w = Workload::from_triples(&[(1, 0.1, 0.2)]).unwrap();
        let r = simulate(&w, SimulationConfig::default()).unwrap();
        for report in &r.policies {
            assert_eq!(report.metrics.avg_wait, 0.0, "{}", report.policy);
        }
        let text = r.render_text();
        assert_eq!(
            text.matches("Average Waiting Time : 0, Average Turn-around Time : 0.2\n")
                .count(),
            5
        );
    }

    #[test]
    fn test_report_structure() {
        let r = three_report();
        assert_eq!(r.recommendation, Recommendation::SjfOrSrtf);
        assert_eq!(r.policies.len(), 5);
        let rr = r.policy(Policy::RoundRobin).unwrap();
        assert!((rr.metrics.avg_wait - 6.0).abs() < 1e-9);
        assert_eq!(rr.metrics.per_process[0].process_id, ProcessId(1));
        assert_eq!(rr.metrics.per_process[0].response, Some(0.0));
    }

    #[test]
    fn test_render_text_fcfs_block() {
        let text = three_report().render_text();
        assert!(text.starts_with("Predicted Algorithm : SJF or SRTF\n\nFCFS :\n"));
        assert!(text.contains(
            "FCFS :\n|   P1   |   P2   |   P3   |\n\n0       5       8       16\n\n\
             Average Waiting Time : 3.33333, Average Turn-around Time : 8.66667\n\n\n\n"
        ));
    }

    #[test]
    fn test_render_text_block_order() {
        let text = three_report().render_text();
        let headers = [
            "FCFS :",
            "SJF :",
            "LJF :",
            "SRTF :",
            "RoundRobin (quantum = 2) :",
        ];
        let positions: Vec<usize> = headers
            .iter()
            .map(|h| text.find(h).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_text_srtf_block() {
        let text = three_report().render_text();
        assert!(text.contains(
            "SRTF :\n|   P1   |   P2   |   P1   |   P3   |\n\n0       1       4       8       16\n\n\
             Average Waiting Time : 3, Average Turn-around Time : 8.33333\n"
        ));
    }

    #[test]
    fn test_render_input_matches_report() {
        let text = render_input(THREE, &Simulator::default()).unwrap();
        assert_eq!(text, three_report().render_text());
    }

    #[test]
    fn test_render_input_empty() {
        let text = render_input("   \n", &Simulator::default()).unwrap();
        assert_eq!(text, EMPTY_WORKLOAD_MESSAGE);
        assert!(!text.contains("FCFS"));
    }

    #[test]
    fn test_render_input_invalid() {
        let err = render_input("1 0 5\n1 2 3\n", &Simulator::default()).unwrap_err();
        assert!(matches!(err, SimError::InvalidWorkload(_)));
        let err = render_input("1 0", &Simulator::default()).unwrap_err();
        assert!(matches!(err, SimError::Parse { .. }));
    }

    #[test]
    fn test_custom_quantum_header() {
        let w = Workload::from_triples(&[(1, 0.0, 3.0)]).unwrap();
        let r = simulate(&w, SimulationConfig::new().with_quantum(0.5)).unwrap();
        assert!(r.render_text().contains("RoundRobin (quantum = 0.5) :"));
    }

    #[test]
    fn test_json_export() {
        let r = three_report();
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["recommendation"], "SjfOrSrtf");
        assert_eq!(value["policies"].as_array().unwrap().len(), 5);
        assert_eq!(value["policies"][0]["policy"], "Fcfs");
        assert_eq!(value["policies"][3]["timeline"]["segments"][0]["process_id"], 1);

        let back: SimulationReport = serde_json::from_value(value).unwrap();
        assert_eq!(back.policies[4].policy, Policy::RoundRobin);
        assert_eq!(back.policies[4].timeline.len(), r.policies[4].timeline.len());
    }
}
