//! Line input sources for interactive and piped runs.

use std::io::BufRead;

use anyhow::Result;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};

/// Supplies one line of user input per call; `None` once exhausted.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Editor-backed input for interactive terminals.
pub struct InteractivePrompt {
    editor: Reedline,
}

impl InteractivePrompt {
    pub fn new() -> Self {
        Self {
            editor: Reedline::create(),
        }
    }
}

impl Default for InteractivePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for InteractivePrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(prompt.to_owned()),
            DefaultPromptSegment::Empty,
        );
        match self.editor.read_line(&prompt)? {
            Signal::Success(line) => Ok(Some(line)),
            Signal::CtrlC | Signal::CtrlD => Ok(None),
        }
    }
}

/// Silent line reader for piped standard input (and tests).
pub struct PipedLines<R: BufRead> {
    reader: R,
}

impl<R: BufRead> PipedLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for PipedLines<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn piped_lines_yield_each_line_then_none() {
        let mut lines = PipedLines::new(Cursor::new("first\nsecond\r\n"));
        assert_eq!(lines.read_line("> ").unwrap(), Some("first".into()));
        assert_eq!(lines.read_line("> ").unwrap(), Some("second".into()));
        assert_eq!(lines.read_line("> ").unwrap(), None);
    }

    #[test]
    fn piped_lines_preserve_blank_lines() {
        let mut lines = PipedLines::new(Cursor::new("\nvalue\n"));
        assert_eq!(lines.read_line("> ").unwrap(), Some(String::new()));
        assert_eq!(lines.read_line("> ").unwrap(), Some("value".into()));
    }
}
