//! Prompter implementations

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use colored::Colorize;

use super::Prompter;

// =============================================================================
// Terminal
// =============================================================================

/// Line-oriented prompter over any reader/writer pair (stdin/stdout in the CLI)
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one answer line without its line terminator.
    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        if read == 0 {
            bail!("Input closed while waiting for an answer");
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(d) if !d.is_empty() => write!(self.output, "{question} [{}]: ", d.yellow())?,
            _ => write!(self.output, "{question}: ")?,
        }
        self.output.flush()?;

        let answer = self.read_answer()?;
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer)
    }

    fn select(&mut self, question: &str, choices: &[&str], default: usize) -> Result<String> {
        let default_label = choices.get(default).copied().unwrap_or_default();
        writeln!(self.output, "{question} [{}]:", default_label.yellow())?;
        for (index, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  [{}] {choice}", index.to_string().green())?;
        }
        write!(self.output, " > ")?;
        self.output.flush()?;

        let answer = self.read_answer()?;
        if answer.trim().is_empty() {
            return Ok(default_label.to_string());
        }
        Ok(answer)
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }

    fn write(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

// =============================================================================
// Non-interactive
// =============================================================================

/// Answers every question with its default; used with `--no-interaction`
#[derive(Debug, Default)]
pub struct NonInteractivePrompter;

impl NonInteractivePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for NonInteractivePrompter {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(d) => Ok(d.to_string()),
            None => bail!("{question}: no default available, pass it as an option"),
        }
    }

    fn select(&mut self, question: &str, choices: &[&str], default: usize) -> Result<String> {
        choices
            .get(default)
            .map(|c| c.to_string())
            .with_context(|| format!("{question}: default choice {default} out of range"))
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        eprintln!("{}", message.red());
        Ok(())
    }

    fn write(&mut self, message: &str) -> Result<()> {
        println!("{message}");
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

// =============================================================================
// Scripted
// =============================================================================

/// Replays canned answers and records what was asked.
///
/// An empty canned answer takes the question's default, just like pressing
/// enter at the terminal. Running out of answers is an error.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    questions: Vec<String>,
    warnings: Vec<String>,
    lines: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Questions in the order they were asked, repeats included
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Validation messages shown
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Informational lines written
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn next_answer(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("No scripted answer left for '{question}'"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        let answer = self.next_answer(question)?;
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer)
    }

    fn select(&mut self, question: &str, choices: &[&str], default: usize) -> Result<String> {
        let answer = self.next_answer(question)?;
        if answer.is_empty() {
            return Ok(choices.get(default).copied().unwrap_or_default().to_string());
        }
        Ok(answer)
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        self.warnings.push(message.to_string());
        Ok(())
    }

    fn write(&mut self, message: &str) -> Result<()> {
        self.lines.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(input: &str) -> TerminalPrompter<&[u8], Vec<u8>> {
        TerminalPrompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_terminal_ask_returns_typed_answer() -> Result<()> {
        colored::control::set_override(false);
        let mut io = terminal("acme\r\n");
        assert_eq!(io.ask("Vendor key", None)?, "acme");
        assert_eq!(String::from_utf8(io.output.clone())?, "Vendor key: ");
        Ok(())
    }

    #[test]
    fn test_terminal_ask_empty_line_takes_default() -> Result<()> {
        colored::control::set_override(false);
        let mut io = terminal("\n");
        assert_eq!(io.ask("Title", Some("My Ext"))?, "My Ext");
        assert_eq!(String::from_utf8(io.output.clone())?, "Title [My Ext]: ");
        Ok(())
    }

    #[test]
    fn test_terminal_ask_keeps_inner_whitespace() -> Result<()> {
        let mut io = terminal("  spaced out  \n");
        assert_eq!(io.ask("Description", Some(""))?, "  spaced out  ");
        Ok(())
    }

    #[test]
    fn test_terminal_eof_is_an_error() {
        let mut io = terminal("");
        assert!(io.ask("Vendor key", None).is_err());
    }

    #[test]
    fn test_terminal_select_lists_choices() -> Result<()> {
        colored::control::set_override(false);
        let mut io = terminal("\n");
        let answer = io.select("License", &["MIT", "Apache-2.0"], 1)?;
        assert_eq!(answer, "Apache-2.0");

        let shown = String::from_utf8(io.output.clone())?;
        assert!(shown.contains("License [Apache-2.0]:"));
        assert!(shown.contains("  [0] MIT"));
        assert!(shown.contains("  [1] Apache-2.0"));
        Ok(())
    }

    #[test]
    fn test_non_interactive_without_default_fails() {
        let mut io = NonInteractivePrompter::new();
        assert!(io.ask("Vendor key", None).is_err());
        assert_eq!(io.ask("Description", Some("")).unwrap(), "");
    }
}
