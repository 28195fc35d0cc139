//! Full-plugin behavior against a stub checker: the directory gate,
//! argument handoff, code filtering, range mapping, and failure recovery.

use pylsp_core::{
    Config, DiagnosticSeverity, Document, LintPlugin, PluginError, Workspace, run_lint_plugins,
};
use pylsp_pydocstyle::{
    CheckerError, DocstyleChecker, FileCheck, IssueIter, PydocstylePlugin, StyleIssue,
};
use serde_json::json;
use std::cell::RefCell;

enum Outcome {
    Issue(StyleIssue),
    ParseFailure,
    CheckFailure,
}

/// A scripted checker: returns preset work units and issue outcomes, and
/// records what the plugin handed it.
struct StubChecker {
    files: Vec<FileCheck>,
    outcomes: Vec<Outcome>,
    config_error: Option<String>,
    seen_args: RefCell<Vec<Vec<String>>>,
    seen_sources: RefCell<Vec<String>>,
}

impl StubChecker {
    fn reporting(file: FileCheck, issues: Vec<StyleIssue>) -> Self {
        Self {
            files: vec![file],
            outcomes: issues.into_iter().map(Outcome::Issue).collect(),
            config_error: None,
            seen_args: RefCell::new(Vec::new()),
            seen_sources: RefCell::new(Vec::new()),
        }
    }

    fn with_outcomes(file: FileCheck, outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes,
            ..Self::reporting(file, Vec::new())
        }
    }

    fn rejecting_config(message: &str) -> Self {
        Self {
            config_error: Some(message.to_string()),
            ..Self::reporting(FileCheck::new("unused", ["D100"]), Vec::new())
        }
    }
}

impl DocstyleChecker for StubChecker {
    fn parse_config(&self, args: &[String]) -> Result<Vec<FileCheck>, CheckerError> {
        self.seen_args.borrow_mut().push(args.to_vec());
        if let Some(message) = &self.config_error {
            return Err(CheckerError::Config(message.clone()));
        }
        Ok(self.files.clone())
    }

    fn check_source<'a>(&'a self, source: &'a str, _file: &FileCheck) -> IssueIter<'a> {
        self.seen_sources.borrow_mut().push(source.to_string());
        Box::new(self.outcomes.iter().map(|outcome| match outcome {
            Outcome::Issue(issue) => Ok(issue.clone()),
            Outcome::ParseFailure => Err(CheckerError::Parse("cannot parse file".to_string())),
            Outcome::CheckFailure => Err(CheckerError::Check("checker blew up".to_string())),
        }))
    }
}

/// A minimal module-docstring checker used for the end-to-end cases.
struct MissingDocstringChecker;

impl DocstyleChecker for MissingDocstringChecker {
    fn parse_config(&self, args: &[String]) -> Result<Vec<FileCheck>, CheckerError> {
        Ok(vec![FileCheck::new(args[0].clone(), ["D100"])])
    }

    fn check_source<'a>(&'a self, source: &'a str, _file: &FileCheck) -> IssueIter<'a> {
        let mut issues: Vec<Result<StyleIssue, CheckerError>> = Vec::new();
        if !source.trim_start().starts_with("\"\"\"") {
            issues.push(Ok(StyleIssue::new(
                "D100",
                "Missing docstring in public module",
                1,
            )));
        }
        Box::new(issues.into_iter())
    }
}

fn lint_context() -> (Config, Workspace) {
    (Config::new(), Workspace::new("repo"))
}

fn d100(start_line: u32) -> StyleIssue {
    StyleIssue::new("D100", "Missing docstring in public module", start_line)
}

#[test]
fn test_hidden_parent_directory_short_circuits_to_empty() {
    let checker = StubChecker::reporting(FileCheck::new(".hidden/mod.py", ["D100"]), vec![d100(1)]);
    let plugin = PydocstylePlugin::new(checker);
    let (config, workspace) = lint_context();
    let document = Document::new(".hidden/mod.py", "x = 1\n");

    let diagnostics = plugin.lint(&config, &workspace, &document).unwrap();
    assert!(diagnostics.is_empty());
    // The checker is never consulted for a gated-out document.
    assert!(plugin.checker().seen_args.borrow().is_empty());
}

#[test]
fn test_path_without_parent_directory_short_circuits_to_empty() {
    let checker = StubChecker::reporting(FileCheck::new("mod.py", ["D100"]), vec![d100(1)]);
    let plugin = PydocstylePlugin::new(checker);
    let (config, workspace) = lint_context();
    let document = Document::new("mod.py", "x = 1\n");

    assert!(plugin.lint(&config, &workspace, &document).unwrap().is_empty());
}

#[test]
fn test_custom_match_dir_gates_other_directories() {
    let (mut config, workspace) = lint_context();
    config.set_user_settings(json!({"pydocstyle": {"matchDir": "src"}}));

    let plugin = PydocstylePlugin::new(StubChecker::reporting(
        FileCheck::new("lib/mod.py", ["D100"]),
        vec![d100(1)],
    ));
    let document = Document::new("lib/mod.py", "x = 1\n");
    assert!(plugin.lint(&config, &workspace, &document).unwrap().is_empty());

    let plugin = PydocstylePlugin::new(StubChecker::reporting(
        FileCheck::new("src/mod.py", ["D100"]),
        vec![d100(1)],
    ));
    let document = Document::new("src/mod.py", "x = 1\n");
    assert_eq!(plugin.lint(&config, &workspace, &document).unwrap().len(), 1);
}

#[test]
fn test_checker_receives_built_args_and_in_memory_source() {
    let (mut config, workspace) = lint_context();
    config.set_user_settings(json!({"pydocstyle": {
        "convention": "pep257",
        "addSelect": ["D100", "D101"],
    }}));

    let checker = StubChecker::reporting(FileCheck::new("pkg/mod.py", ["D100"]), vec![d100(1)]);
    let plugin = PydocstylePlugin::new(checker);
    let document = Document::new("pkg/mod.py", "x = 1\n");

    plugin.lint(&config, &workspace, &document).unwrap();

    assert_eq!(
        *plugin.checker().seen_args.borrow(),
        vec![vec![
            "pkg/mod.py".to_string(),
            "--convention=pep257".to_string(),
            "--add-select=D100,D101".to_string(),
        ]]
    );
    assert_eq!(*plugin.checker().seen_sources.borrow(), vec!["x = 1\n"]);
}

#[test]
fn test_issue_outside_checked_codes_is_dropped() {
    let checker = StubChecker::reporting(
        FileCheck::new("pkg/mod.py", ["D100"]),
        vec![d100(1), StyleIssue::new("D203", "1 blank line required", 1)],
    );
    let plugin = PydocstylePlugin::new(checker);
    let (config, workspace) = lint_context();
    let document = Document::new("pkg/mod.py", "x = 1\n");

    let diagnostics = plugin.lint(&config, &workspace, &document).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code.as_deref(), Some("D100"));
}

#[test]
fn test_definition_start_maps_to_zero_based_line() {
    let checker = StubChecker::reporting(FileCheck::new("pkg/mod.py", ["D103"]), vec![
        StyleIssue::new("D103", "Missing docstring in public function", 5),
    ]);
    let plugin = PydocstylePlugin::new(checker);
    let (config, workspace) = lint_context();
    let document = Document::new("pkg/mod.py", "  x = 1\n\n\n\ndef f():\n    pass\n");

    let diagnostics = plugin.lint(&config, &workspace, &document).unwrap();
    let range = diagnostics[0].range;
    assert_eq!(range.start.line, 4);
    assert_eq!(range.end.line, 4);
    // Columns span the first line past its leading whitespace: "  x = 1\n".
    assert_eq!(range.start.character, 2);
    assert_eq!(range.end.character, 8);
}

#[test]
fn test_range_columns_come_from_first_line() {
    let checker = StubChecker::reporting(FileCheck::new("pkg/mod.py", ["D103"]), vec![
        StyleIssue::new("D103", "Missing docstring in public function", 3),
    ]);
    let plugin = PydocstylePlugin::new(checker);
    let (config, workspace) = lint_context();
    let document = Document::new("pkg/mod.py", "x = 1\n\ndef a_much_longer_line():\n    pass\n");

    let diagnostics = plugin.lint(&config, &workspace, &document).unwrap();
    let range = diagnostics[0].range;
    assert_eq!(range.start.line, 2);
    assert_eq!(range.end.line, 2);
    assert_eq!(range.start.character, 0);
    assert_eq!(range.end.character, "x = 1\n".chars().count() as u32);
}

#[test]
fn test_parse_failure_keeps_collected_issues() {
    let checker = StubChecker::with_outcomes(
        FileCheck::new("pkg/mod.py", ["D100", "D101"]),
        vec![
            Outcome::Issue(d100(1)),
            Outcome::ParseFailure,
            Outcome::Issue(StyleIssue::new("D101", "Missing docstring in public class", 9)),
        ],
    );
    let plugin = PydocstylePlugin::new(checker);
    let (config, workspace) = lint_context();
    let document = Document::new("pkg/mod.py", "x = 1\n");

    let diagnostics = plugin.lint(&config, &workspace, &document).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code.as_deref(), Some("D100"));
}

#[test]
fn test_parse_failure_with_nothing_collected_is_empty_ok() {
    let checker = StubChecker::with_outcomes(
        FileCheck::new("pkg/mod.py", ["D100"]),
        vec![Outcome::ParseFailure],
    );
    let plugin = PydocstylePlugin::new(checker);
    let (config, workspace) = lint_context();
    let document = Document::new("pkg/mod.py", "def broken(:\n");

    assert!(plugin.lint(&config, &workspace, &document).unwrap().is_empty());
}

#[test]
fn test_non_parse_checker_failure_propagates() {
    let checker = StubChecker::with_outcomes(
        FileCheck::new("pkg/mod.py", ["D100"]),
        vec![Outcome::Issue(d100(1)), Outcome::CheckFailure],
    );
    let plugin = PydocstylePlugin::new(checker);
    let (config, workspace) = lint_context();
    let document = Document::new("pkg/mod.py", "x = 1\n");

    let err = plugin.lint(&config, &workspace, &document).unwrap_err();
    assert!(matches!(err, PluginError::External(_)));
}

#[test]
fn test_config_rejection_propagates() {
    let plugin = PydocstylePlugin::new(StubChecker::rejecting_config("unknown option"));
    let (config, workspace) = lint_context();
    let document = Document::new("pkg/mod.py", "x = 1\n");

    let err = plugin.lint(&config, &workspace, &document).unwrap_err();
    assert!(matches!(err, PluginError::External(_)));
}

#[test]
fn test_malformed_settings_fail_the_lint_call() {
    let (mut config, workspace) = lint_context();
    config.set_user_settings(json!({"pydocstyle": {"select": 5}}));

    let plugin = PydocstylePlugin::new(StubChecker::reporting(
        FileCheck::new("pkg/mod.py", ["D100"]),
        Vec::new(),
    ));
    let document = Document::new("pkg/mod.py", "x = 1\n");

    let err = plugin.lint(&config, &workspace, &document).unwrap_err();
    assert!(matches!(err, PluginError::Settings(_)));
}

#[test]
fn test_missing_module_docstring_end_to_end() {
    let plugin = PydocstylePlugin::new(MissingDocstringChecker);
    let (mut config, workspace) = lint_context();
    // Default settings only mark the plugin disabled for dispatch; the
    // lint hook itself still runs when called.
    config.register_defaults(&plugin.default_settings());
    let document = Document::new("pkg/mod.py", "def f():\n    pass\n");

    let diagnostics = plugin.lint(&config, &workspace, &document).unwrap();
    assert!(!diagnostics.is_empty());
    assert_eq!(diagnostics[0].source.as_deref(), Some("pydocstyle"));
    assert_eq!(diagnostics[0].severity, Some(DiagnosticSeverity::Warning));
    assert_eq!(diagnostics[0].code.as_deref(), Some("D100"));

    let documented = Document::new("pkg/mod.py", "\"\"\"Module docstring.\"\"\"\n");
    assert!(plugin.lint(&config, &workspace, &documented).unwrap().is_empty());
}

#[test]
fn test_dispatch_honors_default_disabled_and_user_enable() {
    let plugin = PydocstylePlugin::new(MissingDocstringChecker);
    let (mut config, workspace) = lint_context();
    config.register_defaults(&plugin.default_settings());
    let document = Document::new("pkg/mod.py", "def f():\n    pass\n");

    let plugins: [&dyn LintPlugin; 1] = [&plugin];
    assert!(run_lint_plugins(&plugins, &config, &workspace, &document).is_empty());

    config.set_user_settings(json!({"pydocstyle": {"enabled": true}}));
    let diagnostics = run_lint_plugins(&plugins, &config, &workspace, &document);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_default_settings_payload() {
    let plugin = PydocstylePlugin::new(MissingDocstringChecker);
    assert_eq!(
        plugin.default_settings(),
        json!({"pydocstyle": {"enabled": false}})
    );
}
