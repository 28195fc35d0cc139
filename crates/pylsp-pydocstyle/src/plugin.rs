//! The pydocstyle lint plugin.

use crate::args::{build_checker_args, dir_match_regex, dir_matches};
use crate::checker::{CheckerError, DocstyleChecker, StyleIssue};
use pylsp_core::{
    Config, Diagnostic, DiagnosticSeverity, Document, LintPlugin, PluginError, Position, Range,
    Workspace,
};
use serde_json::{Value, json};

/// Diagnostic `source` attached to every finding.
pub const SOURCE: &str = "pydocstyle";

/// Lint plugin wrapping an external docstring style checker.
#[derive(Debug)]
pub struct PydocstylePlugin<C> {
    checker: C,
}

impl<C: DocstyleChecker> PydocstylePlugin<C> {
    /// Wrap `checker` as a lint plugin.
    pub fn new(checker: C) -> Self {
        Self { checker }
    }

    /// The wrapped checker.
    pub fn checker(&self) -> &C {
        &self.checker
    }
}

impl<C: DocstyleChecker> LintPlugin for PydocstylePlugin<C> {
    fn name(&self) -> &'static str {
        SOURCE
    }

    fn default_settings(&self) -> Value {
        json!({SOURCE: {"enabled": false}})
    }

    fn lint(
        &self,
        config: &Config,
        workspace: &Workspace,
        document: &Document,
    ) -> Result<Vec<Diagnostic>, PluginError> {
        let _progress = workspace.report_progress("lint: pydocstyle");

        let settings = config.plugin_settings(SOURCE, document.path());
        log::debug!(
            "pydocstyle settings for {}: {:?}",
            document.path().display(),
            settings
        );

        // The checker is handed an explicit file path, which bypasses its
        // own directory filtering; the gate is applied here instead.
        let dir_re = dir_match_regex(&settings)?;
        if !dir_matches(&dir_re, document.path()) {
            return Ok(Vec::new());
        }

        let args = build_checker_args(document.path(), &settings)?;
        log::info!("using pydocstyle args: {:?}", args);

        let files = self
            .checker
            .parse_config(&args)
            .map_err(PluginError::external)?;

        let source = document.source();
        let mut diagnostics = Vec::new();
        for file in &files {
            for item in self.checker.check_source(&source, file) {
                match item {
                    Ok(issue) => {
                        if !file.checked_codes.contains(&issue.code) {
                            continue;
                        }
                        diagnostics.push(issue_diagnostic(document, &issue));
                    }
                    // An unparsable document keeps what was collected so far.
                    Err(CheckerError::Parse(_)) => break,
                    Err(err) => return Err(PluginError::external(err)),
                }
            }
        }

        log::debug!("pydocstyle produced {} diagnostics", diagnostics.len());
        Ok(diagnostics)
    }
}

fn issue_diagnostic(document: &Document, issue: &StyleIssue) -> Diagnostic {
    let line_index = issue.start_line.saturating_sub(1);
    let line = document.line(0).unwrap_or_default();

    let start_character = line.chars().take_while(|c| c.is_whitespace()).count() as u32;
    let end_character = line.chars().count() as u32;

    Diagnostic {
        range: Range::new(
            Position::new(line_index, start_character),
            Position::new(line_index, end_character),
        ),
        severity: Some(DiagnosticSeverity::Warning),
        code: Some(issue.code.clone()),
        source: Some(SOURCE.to_string()),
        message: issue.message.clone(),
    }
}
