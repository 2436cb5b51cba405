//! Input acquisition rules for the sequence and the search target.

use anyhow::{Context, Result};

use crate::domain::errors::TargetError;
use crate::domain::model::SortedSequence;

/// A target that passed the acceptance rules, with range advice attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VettedTarget {
    pub value: i64,
    /// Whether the value lies within the sequence's observed `[min, max]`.
    /// An empty sequence has no observable range, so nothing is in range.
    pub in_range: bool,
}

/// Parse one whitespace-separated line of integers.
///
/// The sequence is read once at start; unlike the target there is no retry
/// loop, so a malformed token is a hard error naming the token.
pub fn parse_sequence(line: &str) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("'{token}' is not a valid integer"))
        })
        .collect()
}

/// Apply the acceptance rules to one line of candidate target input.
///
/// Rejections (`Err`) force another prompt. A positive integer outside the
/// sequence's observed bounds is accepted with `in_range == false` so the
/// caller can warn without refusing the value.
pub fn vet_target(raw: &str, sequence: &SortedSequence) -> Result<VettedTarget, TargetError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| TargetError::NotAnInteger(trimmed.to_owned()))?;
    if value <= 0 {
        return Err(TargetError::NotPositive(value));
    }

    let in_range = match (sequence.min(), sequence.max()) {
        (Some(min), Some(max)) => value >= min && value <= max,
        _ => false,
    };

    Ok(VettedTarget { value, in_range })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::sort::sort_ascending;

    #[test]
    fn parses_a_whitespace_separated_line() {
        let parsed = parse_sequence("5 3 1 4 2").unwrap();
        assert_eq!(parsed, vec![5, 3, 1, 4, 2]);
    }

    #[test]
    fn parses_an_empty_line_to_an_empty_sequence() {
        assert!(parse_sequence("").unwrap().is_empty());
        assert!(parse_sequence("   ").unwrap().is_empty());
    }

    #[test]
    fn sequence_parse_error_names_the_token() {
        let error = parse_sequence("1 two 3").unwrap_err();
        assert!(error.to_string().contains("'two'"));
    }

    #[test]
    fn rejects_non_integer_target() {
        let sorted = sort_ascending(vec![1, 2, 3]);
        assert_eq!(
            vet_target("abc", &sorted),
            Err(TargetError::NotAnInteger("abc".into()))
        );
    }

    #[test]
    fn rejects_non_positive_targets() {
        let sorted = sort_ascending(vec![1, 2, 3]);
        assert_eq!(vet_target("-5", &sorted), Err(TargetError::NotPositive(-5)));
        assert_eq!(vet_target("0", &sorted), Err(TargetError::NotPositive(0)));
    }

    #[test]
    fn accepts_in_range_target() {
        let sorted = sort_ascending(vec![5, 3, 1, 4, 2]);
        let vetted = vet_target("4", &sorted).unwrap();
        assert_eq!(vetted.value, 4);
        assert!(vetted.in_range);
    }

    #[test]
    fn accepts_out_of_range_target_with_advice() {
        let sorted = sort_ascending(vec![1, 2, 3]);
        let vetted = vet_target("99", &sorted).unwrap();
        assert_eq!(vetted.value, 99);
        assert!(!vetted.in_range);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let sorted = sort_ascending(vec![1, 2, 3]);
        let vetted = vet_target("  2\n", &sorted).unwrap();
        assert_eq!(vetted.value, 2);
        assert!(vetted.in_range);
    }

    #[test]
    fn empty_sequence_puts_everything_out_of_range() {
        let empty = sort_ascending(Vec::new());
        let vetted = vet_target("1", &empty).unwrap();
        assert!(!vetted.in_range);
    }
}
