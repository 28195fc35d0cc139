//! Checker argument construction and the directory-match gate.

use pylsp_core::PluginError;
use pylsp_core::settings::{PluginSettings, SettingValue, SettingsError};
use regex::Regex;
use std::path::Path;

/// Directory pattern the wrapped checker applies when none is configured.
pub const DEFAULT_MATCH_DIR: &str = r"[^\.].*";

/// Compile the effective directory-match pattern from settings.
///
/// Uses the `matchDir` setting, falling back to [`DEFAULT_MATCH_DIR`].
/// The pattern is anchored so it must cover the whole directory name.
pub fn dir_match_regex(settings: &PluginSettings) -> Result<Regex, PluginError> {
    let pattern = settings.str_setting("matchDir")?.unwrap_or(DEFAULT_MATCH_DIR);
    Regex::new(&format!(r"\A(?:{pattern}$)")).map_err(PluginError::external)
}

/// `true` if the immediate parent directory name of `path` matches `re`.
///
/// A path with no named parent (e.g. `mod.py` or `/mod.py`) is matched
/// against the empty string.
pub fn dir_matches(re: &Regex, path: &Path) -> bool {
    let parent = path
        .parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    re.is_match(&parent)
}

/// Build the checker's CLI-style argument list from the document path and
/// plugin settings.
///
/// At most one of the `convention` / `select` / `ignore` groups is
/// emitted; the checker treats those options as mutually exclusive.
pub fn build_checker_args(
    path: &Path,
    settings: &PluginSettings,
) -> Result<Vec<String>, SettingsError> {
    let mut args = vec![path.to_string_lossy().into_owned()];

    if let Some(arg) = setting_arg(settings, "convention", "convention")? {
        args.push(arg);
        if let Some(arg) = setting_arg(settings, "addSelect", "add-select")? {
            args.push(arg);
        }
        if let Some(arg) = setting_arg(settings, "addIgnore", "add-ignore")? {
            args.push(arg);
        }
    } else if let Some(arg) = setting_arg(settings, "select", "select")? {
        args.push(arg);
    } else if let Some(arg) = setting_arg(settings, "ignore", "ignore")? {
        args.push(arg);
    }

    if let Some(arg) = setting_arg(settings, "match", "match")? {
        args.push(arg);
    }

    Ok(args)
}

/// Format one setting as `--flag=value`. String values pass through
/// unchanged; list values join into a single comma-separated string.
fn setting_arg(
    settings: &PluginSettings,
    key: &str,
    flag: &str,
) -> Result<Option<String>, SettingsError> {
    let value = match settings.string_or_list(key)? {
        Some(SettingValue::Str(value)) => value,
        Some(SettingValue::List(items)) => items.join(","),
        None => return Ok(None),
    };
    Ok(Some(format!("--{flag}={value}")))
}
