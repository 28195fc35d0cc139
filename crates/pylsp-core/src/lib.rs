#![warn(missing_docs)]
//! `pylsp-core` - headless plugin-host model for a Python language server.
//!
//! This crate contains the host-side pieces lint plugins are written
//! against:
//! - an immutable per-lint-call document model ([`Document`])
//! - layered, per-path plugin settings resolution ([`Config`] /
//!   [`PluginSettings`])
//! - the workspace with RAII progress scopes ([`Workspace`])
//! - LSP-shaped lint diagnostics ([`Diagnostic`])
//! - the plugin seam and host dispatch ([`LintPlugin`],
//!   [`run_lint_plugins`])
//!
//! The API intentionally uses `serde_json::Value` for settings and
//! diagnostic payloads to keep the dependency surface small and stay close
//! to the wire shapes the host speaks.

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod plugin;
pub mod settings;
pub mod workspace;

pub use config::Config;
pub use diagnostics::{Diagnostic, DiagnosticSeverity, Position, Range};
pub use document::Document;
pub use plugin::{LintPlugin, PluginError, run_lint_plugins};
pub use settings::{PluginSettings, SettingValue, SettingsError};
pub use workspace::{ProgressScope, Workspace};
