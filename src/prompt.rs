//! # Version Prompt
//!
//! The operator is asked exactly once for the new version. The prompt shows the
//! current version for reference only; an empty answer is passed through and
//! rejected by validation.

use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Input};

use crate::error::Result;

/// Source of the operator's answer.
pub trait VersionPrompt {
    /// Ask for the new version, showing `current`.
    fn ask(&mut self, current: &str) -> Result<String>;
}

/// Text shown when asking for a version.
pub fn prompt_text(current: &str) -> String {
    format!("New version number: [{}]", current)
}

/// Interactive prompt on the terminal, via `dialoguer`.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl VersionPrompt for TerminalPrompt {
    fn ask(&mut self, current: &str) -> Result<String> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt_text(current))
            .allow_empty(true)
            .interact_text()
            .map_err(std::io::Error::other)?;
        Ok(answer)
    }
}

/// Reads one line from any reader; used when stdin is not a terminal.
///
/// Only the line terminator is stripped.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> VersionPrompt for LinePrompt<R> {
    fn ask(&mut self, current: &str) -> Result<String> {
        println!("{} ", prompt_text(current));
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// An answer supplied up front, e.g. on the command line.
#[derive(Debug, Clone)]
pub struct FixedPrompt(pub String);

impl VersionPrompt for FixedPrompt {
    fn ask(&mut self, _current: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_text_shows_current() {
        assert_eq!(prompt_text("1.2.3"), "New version number: [1.2.3]");
    }

    #[test]
    fn test_line_prompt_strips_newline() {
        let mut prompt = LinePrompt::new(Cursor::new("1.2.4\n"));
        assert_eq!(prompt.ask("1.2.3").unwrap(), "1.2.4");
    }

    #[test]
    fn test_line_prompt_strips_crlf() {
        let mut prompt = LinePrompt::new(Cursor::new("1.2.4\r\n"));
        assert_eq!(prompt.ask("1.2.3").unwrap(), "1.2.4");
    }

    #[test]
    fn test_line_prompt_keeps_spaces() {
        let mut prompt = LinePrompt::new(Cursor::new(" 1.2.4 \n"));
        assert_eq!(prompt.ask("1.2.3").unwrap(), " 1.2.4 ");
    }

    #[test]
    fn test_line_prompt_empty_and_eof() {
        let mut prompt = LinePrompt::new(Cursor::new("\n"));
        assert_eq!(prompt.ask("1.2.3").unwrap(), "");

        let mut prompt = LinePrompt::new(Cursor::new(""));
        assert_eq!(prompt.ask("1.2.3").unwrap(), "");
    }

    #[test]
    fn test_line_prompt_reads_only_first_line() {
        let mut prompt = LinePrompt::new(Cursor::new("1.2.4\n9.9.9\n"));
        assert_eq!(prompt.ask("1.2.3").unwrap(), "1.2.4");
    }

    #[test]
    fn test_fixed_prompt() {
        let mut prompt = FixedPrompt("3.0.0".to_string());
        assert_eq!(prompt.ask("2.9.9").unwrap(), "3.0.0");
    }
}
