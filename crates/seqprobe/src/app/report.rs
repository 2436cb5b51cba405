//! Rendering run results for terminal output.

use std::str::FromStr;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::app::validate::VettedTarget;
use crate::domain::model::{SearchOutcome, SortedSequence};

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Human-readable lines.
    Text,
    /// One pretty-printed JSON document.
    Json,
}

impl ReportFormat {
    /// Return a stable identifier for configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportFormatParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(ReportFormatParseError::UnknownFormat(other.to_string())),
        }
    }
}

/// Error returned when parsing a [`ReportFormat`] fails.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ReportFormatParseError {
    #[error("unknown report format '{0}'")]
    UnknownFormat(String),
}

/// Serializable summary of one sort-and-search run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunReport {
    pub sorted: Vec<i64>,
    pub target: i64,
    pub out_of_range: bool,
    pub index: Option<usize>,
    pub found: bool,
}

impl RunReport {
    pub fn new(sequence: &SortedSequence, target: VettedTarget, outcome: SearchOutcome) -> Self {
        Self {
            sorted: sequence.as_slice().to_vec(),
            target: target.value,
            out_of_range: !target.in_range,
            index: outcome.index(),
            found: outcome.is_found(),
        }
    }

    /// Render the outcome in the requested format.
    ///
    /// Text mode yields the single outcome line; the sorted line is emitted
    /// separately (before the target prompt) via [`sorted_line`].
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_text(&self) -> String {
        match self.index {
            Some(index) => format!("Index of {} in the sorted sequence: {index}", self.target),
            None => format!("Element {} is not present in the sequence.", self.target),
        }
    }
}

/// Human-readable line echoing the sorted sequence.
pub fn sorted_line(sequence: &SortedSequence) -> String {
    format!("Sorted sequence: {:?}", sequence.as_slice())
}

/// Advisory note for an accepted target that cannot be present.
pub fn out_of_range_note(target: i64, sequence: &SortedSequence) -> String {
    match (sequence.min(), sequence.max()) {
        (Some(min), Some(max)) => {
            format!("{target} is outside the sequence range {min}..={max}")
        }
        _ => format!("the sequence is empty; {target} cannot be present"),
    }
}
