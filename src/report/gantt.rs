//! Text Gantt chart.
//!
//! Draws a timeline's spans as a bar of fixed-width cells, one per span,
//! with a `********` cell wherever the CPU sat idle, followed by a line of
//! the timestamps that delimit each cell.

use super::format_number;
use crate::models::Timeline;

const IDLE_CELL: &str = "|********";
const TIME_PAD: &str = "       ";

/// Renders the bar and timestamp lines for one timeline.
pub fn render_gantt(timeline: &Timeline) -> String {
    let spans = timeline.spans();
    let mut bar = String::new();
    let mut times = String::new();

    for (i, span) in spans.iter().enumerate() {
        if span.after_gap {
            bar.push_str(IDLE_CELL);
            if let Some(prev) = i.checked_sub(1).map(|j| &spans[j]) {
                times.push_str(&format_number(prev.end));
                times.push_str(TIME_PAD);
            }
        }
        bar.push_str(&format!("|   {}   ", span.process_id));
        times.push_str(&format_number(span.start));
        times.push_str(TIME_PAD);
    }

    if let Some(last) = spans.last() {
        times.push_str(&format_number(last.end));
    }

    format!("{bar}|\n\n{times}\n\n")
}
