//! Composition root wiring input, sorting, search, and reporting.

use std::io::{self, IsTerminal, Write};
use std::str::FromStr;

use anyhow::{Result, anyhow};

use crate::app::report::{self, ReportFormat, RunReport};
use crate::app::search;
use crate::app::sort;
use crate::app::validate::{self, VettedTarget};
use crate::domain::model::SortedSequence;
use crate::infra::config::Config;
use crate::ui::prompt::{InteractivePrompt, LineSource, PipedLines};

/// One sort-and-search run over explicit inputs; no global state.
pub struct App {
    config: Config,
    format: ReportFormat,
}

impl App {
    /// Build an app from loaded configuration and an optional CLI override.
    pub fn new(config: Config, format_override: Option<ReportFormat>) -> Self {
        let format = format_override.unwrap_or_else(|| {
            ReportFormat::from_str(&config.defaults.format).unwrap_or_else(|error| {
                tracing::warn!(%error, "falling back to text output");
                ReportFormat::Text
            })
        });
        Self { config, format }
    }

    /// Run against the process's standard streams.
    pub fn run(&mut self, sequence: Option<Vec<i64>>, target: Option<i64>) -> Result<()> {
        let stdin = io::stdin();
        let mut lines: Box<dyn LineSource> = if stdin.is_terminal() {
            Box::new(InteractivePrompt::new())
        } else {
            Box::new(PipedLines::new(stdin.lock()))
        };

        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(
            sequence,
            target,
            lines.as_mut(),
            &mut stdout.lock(),
            &mut stderr.lock(),
        )
    }

    /// Run with injected input and output, for callers and tests alike.
    ///
    /// Results go to `out`; prompt-loop feedback and range warnings go to
    /// `err` so JSON output stays machine-parseable.
    pub fn run_with(
        &mut self,
        sequence: Option<Vec<i64>>,
        target: Option<i64>,
        lines: &mut dyn LineSource,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<()> {
        let raw = match sequence {
            Some(values) => values,
            None => {
                let line = lines
                    .read_line(&self.config.prompt.sequence)?
                    .ok_or_else(|| anyhow!("input ended before a sequence was provided"))?;
                validate::parse_sequence(&line)?
            }
        };

        let sorted = sort::sort_ascending(raw);
        if self.format == ReportFormat::Text {
            writeln!(out, "{}", report::sorted_line(&sorted))?;
        }

        let vetted = match target {
            Some(value) => validate::vet_target(&value.to_string(), &sorted)
                .map_err(|error| anyhow!("invalid target: {error}"))?,
            None => self.prompt_target(&sorted, lines, err)?,
        };

        if !vetted.in_range {
            writeln!(
                err,
                "warning: {}",
                report::out_of_range_note(vetted.value, &sorted)
            )?;
        }

        let outcome = search::search(&sorted, vetted.value);
        tracing::debug!(value = vetted.value, found = outcome.is_found(), "search finished");

        let report = RunReport::new(&sorted, vetted, outcome);
        writeln!(out, "{}", report.render(self.format)?)?;
        Ok(())
    }

    fn prompt_target(
        &self,
        sorted: &SortedSequence,
        lines: &mut dyn LineSource,
        err: &mut dyn Write,
    ) -> Result<VettedTarget> {
        loop {
            let line = lines
                .read_line(&self.config.prompt.target)?
                .ok_or_else(|| anyhow!("input ended before a valid target was provided"))?;
            match validate::vet_target(&line, sorted) {
                Ok(vetted) => return Ok(vetted),
                Err(error) => writeln!(err, "invalid target: {error}")?,
            }
        }
    }
}
