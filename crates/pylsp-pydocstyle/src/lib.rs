#![warn(missing_docs)]
//! `pylsp-pydocstyle` - docstring-style lint plugin for the `pylsp-core`
//! plugin host.
//!
//! This crate is a thin adapter around an external docstring checker: it
//! translates resolved plugin settings into the checker's CLI-style
//! argument list, invokes the checker's configuration parser and
//! source-level check routine through the [`DocstyleChecker`] seam, and
//! maps each reported issue into the host's diagnostic shape. The style
//! rules themselves live entirely in the wrapped checker.

pub mod args;
pub mod checker;
pub mod plugin;

pub use args::{DEFAULT_MATCH_DIR, build_checker_args, dir_match_regex, dir_matches};
pub use checker::{CheckerError, DocstyleChecker, FileCheck, IssueIter, StyleIssue};
pub use plugin::{PydocstylePlugin, SOURCE};
