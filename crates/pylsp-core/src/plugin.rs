//! The lint-plugin seam and host-side dispatch.

use crate::config::Config;
use crate::diagnostics::Diagnostic;
use crate::document::Document;
use crate::settings::SettingsError;
use crate::workspace::Workspace;
use serde_json::{Map, Value};

/// Error surfaced by a lint plugin for one lint call.
#[derive(Debug)]
pub enum PluginError {
    /// A setting the plugin read had an unexpected shape.
    Settings(SettingsError),
    /// A failure in the external tool the plugin wraps.
    External(Box<dyn std::error::Error + Send + Sync>),
}

impl PluginError {
    /// Wrap an external tool failure.
    pub fn external(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::External(Box::new(err))
    }
}

impl std::fmt::Display for PluginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Settings(err) => write!(f, "{}", err),
            Self::External(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PluginError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Settings(err) => Some(err),
            Self::External(err) => Some(err.as_ref()),
        }
    }
}

impl From<SettingsError> for PluginError {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err)
    }
}

/// A lint plugin the host can dispatch to.
pub trait LintPlugin {
    /// The plugin's settings namespace (e.g. `"pydocstyle"`).
    fn name(&self) -> &'static str;

    /// The plugin's default settings payload, keyed by plugin name.
    fn default_settings(&self) -> Value {
        Value::Object(Map::new())
    }

    /// Produce diagnostics for one document.
    fn lint(
        &self,
        config: &Config,
        workspace: &Workspace,
        document: &Document,
    ) -> Result<Vec<Diagnostic>, PluginError>;
}

/// Run every enabled plugin over `document` and concatenate their
/// diagnostics in plugin order.
///
/// A plugin whose resolved `enabled` setting is `false` is skipped without
/// calling its lint hook. A failing plugin is logged and dropped; the
/// remaining plugins still run.
pub fn run_lint_plugins(
    plugins: &[&dyn LintPlugin],
    config: &Config,
    workspace: &Workspace,
    document: &Document,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for plugin in plugins {
        let settings = config.plugin_settings(plugin.name(), document.path());
        if let Some(Value::Bool(false)) = settings.get("enabled") {
            continue;
        }
        match plugin.lint(config, workspace, document) {
            Ok(mut found) => diagnostics.append(&mut found),
            Err(err) => log::warn!("lint plugin {} failed: {}", plugin.name(), err),
        }
    }
    diagnostics
}
