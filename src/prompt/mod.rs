//! Interactive I/O for the installer
//!
//! The installer talks to the user only through [`Prompter`], the same
//! handle a package-manager hook would receive: plain questions, a
//! single-choice menu, and output lines. Validation never happens inside a
//! prompter. [`ask_validated`] and [`select_validated`] run the retry loop:
//! a rejected answer is reported and the question is asked again.
//!
//! # Example
//!
//! ```
//! use kickstart::identifiers::VendorKey;
//! use kickstart::prompt::{self, ScriptedPrompter};
//!
//! let mut io = ScriptedPrompter::new(["Bad Vendor", "acme"]);
//! let vendor = prompt::ask_validated(&mut io, "Vendor key", None, VendorKey::parse)?;
//! assert_eq!(vendor.as_str(), "acme");
//! assert_eq!(io.warnings(), ["Invalid vendor key"]);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::{bail, Result};

use crate::identifiers::ValidationError;

pub use internal::{NonInteractivePrompter, ScriptedPrompter, TerminalPrompter};

/// The installer's I/O handle
pub trait Prompter {
    /// Ask a free-text question. An empty answer yields `default`
    /// (or an empty string when there is none).
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String>;

    /// Offer a single-choice menu. Returns the raw answer, which may be a
    /// label or an index; an empty answer yields the default label.
    fn select(&mut self, question: &str, choices: &[&str], default: usize) -> Result<String>;

    /// Report a rejected answer.
    fn warn(&mut self, message: &str) -> Result<()>;

    /// Informational output line.
    fn write(&mut self, message: &str) -> Result<()>;

    /// Whether a rejected answer can be asked again.
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Ask until `validate` accepts the answer.
///
/// Non-interactive prompters get exactly one attempt; a rejection is fatal.
pub fn ask_validated<P, T, F>(
    io: &mut P,
    question: &str,
    default: Option<&str>,
    validate: F,
) -> Result<T>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    retry(io, question, |io| io.ask(question, default), validate)
}

/// Offer `choices` until `validate` accepts the selection.
pub fn select_validated<P, T, F>(
    io: &mut P,
    question: &str,
    choices: &[&str],
    default: usize,
    validate: F,
) -> Result<T>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    retry(io, question, |io| io.select(question, choices, default), validate)
}

fn retry<P, T, A, F>(io: &mut P, question: &str, mut ask: A, validate: F) -> Result<T>
where
    P: Prompter + ?Sized,
    A: FnMut(&mut P) -> Result<String>,
    F: Fn(&str) -> Result<T, ValidationError>,
{
    loop {
        let answer = ask(io)?;
        match validate(&answer) {
            Ok(value) => return Ok(value),
            Err(err) if io.is_interactive() => {
                tracing::debug!(question, answer = %answer, "answer rejected: {err}");
                io.warn(&err.to_string())?;
            }
            Err(err) => bail!("{question}: {err} ('{answer}')"),
        }
    }
}
