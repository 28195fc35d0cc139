//! Layered, per-path plugin settings resolution.
//!
//! [`Config`] resolves the effective settings namespace for one plugin and
//! one document path from three layers: registered plugin defaults, user
//! settings, and per-directory overrides. Resolution is a shallow key
//! merge with later layers winning, evaluated once per lint invocation.

use crate::settings::PluginSettings;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Layered plugin configuration with per-directory overrides.
#[derive(Debug, Default)]
pub struct Config {
    defaults: Map<String, Value>,
    user: Map<String, Value>,
    overrides: Vec<(PathBuf, Map<String, Value>)>,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a plugin's default-settings payload (plugin name → settings
    /// object) into the defaults layer.
    pub fn register_defaults(&mut self, payload: &Value) {
        let Value::Object(plugins) = payload else {
            return;
        };
        for (plugin, settings) in plugins {
            let entry = self
                .defaults
                .entry(plugin.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if let (Value::Object(existing), Value::Object(new)) = (entry, settings) {
                for (key, value) in new {
                    existing.insert(key.clone(), value.clone());
                }
            }
        }
    }

    /// Replace the user settings layer (plugin name → settings object).
    pub fn set_user_settings(&mut self, payload: Value) {
        self.user = match payload {
            Value::Object(plugins) => plugins,
            _ => Map::new(),
        };
    }

    /// Add an override layer applying to every document under `dir`.
    ///
    /// Overrides are applied in registration order after defaults and user
    /// settings.
    pub fn add_override(&mut self, dir: impl Into<PathBuf>, payload: Value) {
        if let Value::Object(plugins) = payload {
            self.overrides.push((dir.into(), plugins));
        }
    }

    /// Resolve the settings namespace for `plugin` and the document at
    /// `document_path`.
    pub fn plugin_settings(&self, plugin: &str, document_path: &Path) -> PluginSettings {
        let mut resolved = Map::new();
        merge_layer(&mut resolved, self.defaults.get(plugin));
        merge_layer(&mut resolved, self.user.get(plugin));
        for (dir, plugins) in &self.overrides {
            if document_path.starts_with(dir) {
                merge_layer(&mut resolved, plugins.get(plugin));
            }
        }
        PluginSettings::from_value(Value::Object(resolved))
    }
}

fn merge_layer(target: &mut Map<String, Value>, layer: Option<&Value>) {
    if let Some(Value::Object(settings)) = layer {
        for (key, value) in settings {
            target.insert(key.clone(), value.clone());
        }
    }
}
