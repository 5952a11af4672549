//! Input parsing.
//!
//! The input format is a whitespace-separated stream of
//! `id arrival burst` triples; line breaks carry no meaning.

use crate::error::SimError;
use crate::models::ProcessRecord;

fn parse_error(token: &str, position: usize, message: &str) -> SimError {
    SimError::Parse {
        token: token.to_string(),
        position,
        message: message.to_string(),
    }
}

/// Parses process triples from text.
///
/// Returns an empty vector for blank input; emptiness is reported by
/// ingestion, not here.
///
/// # Errors
/// [`SimError::Parse`] on a malformed number or an incomplete final triple.
pub fn parse_records(input: &str) -> Result<Vec<ProcessRecord>, SimError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut records = Vec::with_capacity(tokens.len() / 3);

    for (triple, chunk) in tokens.chunks(3).enumerate() {
        let base = triple * 3;
        let [id, arrival, burst] = chunk else {
            return Err(parse_error("", tokens.len(), "incomplete process triple"));
        };

        let id: u32 = id
            .parse()
            .map_err(|_| parse_error(id, base, "expected a non-negative integer process ID"))?;
        let arrival: f64 = arrival
            .parse()
            .map_err(|_| parse_error(arrival, base + 1, "expected an arrival time"))?;
        let burst: f64 = burst
            .parse()
            .map_err(|_| parse_error(burst, base + 2, "expected a burst time"))?;

        records.push(ProcessRecord::new(id, arrival, burst));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        let records = parse_records("1 0 5\n2 1 3\n3 2.5 8\n").unwrap();
        assert_eq!(
            records,
            vec![
                ProcessRecord::new(1, 0.0, 5.0),
                ProcessRecord::new(2, 1.0, 3.0),
                ProcessRecord::new(3, 2.5, 8.0),
            ]
        );
    }

    #[test]
    fn test_parse_free_whitespace() {
        let records = parse_records("  4\t0 2   5 1\n\n 1 ").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], ProcessRecord::new(5, 1.0, 1.0));
    }

    #[test]
    fn test_parse_blank() {
        assert!(parse_records("").unwrap().is_empty());
        assert!(parse_records(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_bad_token() {
        match parse_records("1 0 5\n2 x 3").unwrap_err() {
            SimError::Parse {
                token, position, ..
            } => {
                assert_eq!(token, "x");
                assert_eq!(position, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_negative_id() {
        assert!(matches!(
            parse_records("-1 0 5"),
            Err(SimError::Parse { position: 0, .. })
        ));
    }

    #[test]
    fn test_parse_incomplete_triple() {
        match parse_records("1 0 5 2 1").unwrap_err() {
            SimError::Parse {
                token, position, ..
            } => {
                assert!(token.is_empty());
                assert_eq!(position, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
