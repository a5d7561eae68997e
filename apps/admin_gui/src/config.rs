use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "admin_gui.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub roster_path: PathBuf,
    pub log_filter: String,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from("./data/roster.json"),
            log_filter: "info".into(),
            window_title: "Admin Dashboard".into(),
        }
    }
}

impl Settings {
    pub fn with_roster_override(mut self, roster_path: Option<PathBuf>) -> Self {
        if let Some(path) = roster_path {
            self.roster_path = path;
        }
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    roster_path: Option<PathBuf>,
    log_filter: Option<String>,
    window_title: Option<String>,
}

/// Defaults, then the settings file, then environment.
///
/// A missing default settings file is fine; a missing file that was asked
/// for explicitly is an error.
pub fn load_settings(settings_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    let path = settings_path.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));

    match fs::read_to_string(path) {
        Ok(raw) => apply_file_overrides(&mut settings, &raw)
            .with_context(|| format!("invalid settings file '{}'", path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound && settings_path.is_none() => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file: SettingsFile = toml::from_str(raw)?;
    if let Some(v) = file.roster_path {
        settings.roster_path = v;
    }
    if let Some(v) = file.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file.window_title {
        settings.window_title = v;
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("ROSTER_PATH") {
        settings.roster_path = PathBuf::from(v);
    }
    if let Some(v) = non_empty("APP__ROSTER_PATH") {
        settings.roster_path = PathBuf::from(v);
    }

    if let Some(v) = non_empty("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = non_empty("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = non_empty("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
