//! The wrapped docstring-checker seam.
//!
//! The plugin never implements style rules itself; it drives an external
//! checker through this interface: a configuration parser fed CLI-style
//! argument strings, and a source-level check routine producing issues.

use std::collections::BTreeSet;
use thiserror::Error;

/// One unit of checking work accepted by the checker's configuration
/// parser: a filename plus the rule parameters resolved for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCheck {
    /// The file the checker agreed to check.
    pub filename: String,
    /// Codes the checker enforces; issues outside this set are dropped.
    pub checked_codes: BTreeSet<String>,
    /// Pattern naming decorators whose functions are exempt from checks.
    pub ignore_decorators: Option<String>,
    /// Decorator names marking property accessors.
    pub property_decorators: BTreeSet<String>,
    /// Skip docstring checks for `__init__` methods taking only `self`.
    pub ignore_self_only_init: bool,
}

impl FileCheck {
    /// Create a unit of work for `filename` enforcing `checked_codes`,
    /// with no decorator exemptions.
    pub fn new<I, S>(filename: impl Into<String>, checked_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filename: filename.into(),
            checked_codes: checked_codes.into_iter().map(Into::into).collect(),
            ignore_decorators: None,
            property_decorators: BTreeSet::new(),
            ignore_self_only_init: false,
        }
    }
}

/// A single issue reported by the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleIssue {
    /// Rule code (e.g. `D100`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// 1-based line of the offending definition's start.
    pub start_line: u32,
}

impl StyleIssue {
    /// Create an issue for `code` starting at 1-based `start_line`.
    pub fn new(code: impl Into<String>, message: impl Into<String>, start_line: u32) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            start_line,
        }
    }
}

/// Errors surfaced by the wrapped checker.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// The checker could not parse the source under check.
    #[error("cannot parse source: {0}")]
    Parse(String),
    /// The checker rejected its configuration arguments.
    #[error("invalid checker configuration: {0}")]
    Config(String),
    /// Any other checker failure.
    #[error("checker failure: {0}")]
    Check(String),
}

/// The issue sequence of one `check_source` run.
pub type IssueIter<'a> = Box<dyn Iterator<Item = Result<StyleIssue, CheckerError>> + 'a>;

/// The external docstring checker the plugin wraps.
pub trait DocstyleChecker {
    /// Run the checker's configuration parser over CLI-style argument
    /// strings, yielding one [`FileCheck`] per accepted file.
    fn parse_config(&self, args: &[String]) -> Result<Vec<FileCheck>, CheckerError>;

    /// Check `source` with the parameters of `file`, producing issues in
    /// source order.
    ///
    /// A parse failure surfaces as an `Err` item ending the sequence; the
    /// caller keeps whatever issues were already produced.
    fn check_source<'a>(&'a self, source: &'a str, file: &FileCheck) -> IssueIter<'a>;
}
