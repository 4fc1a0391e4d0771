use std::{collections::HashMap, fs, path::Path, time::Duration};

use anyhow::Context;
use catalog_core::{SearchOptions, DEFAULT_CATALOG_URL, DEFAULT_SEARCH_DELAY};
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "storefront.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_url: String,
    pub search_delay_ms: u64,
    pub cancel_superseded_searches: bool,
    pub start_dark: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.into(),
            search_delay_ms: DEFAULT_SEARCH_DELAY.as_millis() as u64,
            cancel_superseded_searches: false,
            start_dark: false,
        }
    }
}

impl Settings {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            delay: Duration::from_millis(self.search_delay_ms),
            cancel_superseded: self.cancel_superseded_searches,
        }
    }
}

/// Defaults, then the config file, then the process environment.
///
/// A missing default config file is not an error; an explicitly named one is.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file_overrides(&mut settings, &raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                apply_file_overrides(&mut settings, &raw).with_context(|| {
                    format!("failed to parse config file '{DEFAULT_CONFIG_FILE}'")
                })?;
            }
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings.catalog_url = normalize_catalog_url(&settings.catalog_url);
    Ok(settings)
}

pub fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: HashMap<String, toml::Value> = toml::from_str(raw)?;
    let value = |key: &str| {
        file_cfg.get(key).map(|v| match v {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    };

    if let Some(v) = value("catalog_url") {
        settings.catalog_url = v;
    }
    if let Some(v) = value("search_delay_ms") {
        set_parsed(&mut settings.search_delay_ms, "search_delay_ms", &v);
    }
    if let Some(v) = value("cancel_superseded_searches") {
        set_parsed(
            &mut settings.cancel_superseded_searches,
            "cancel_superseded_searches",
            &v,
        );
    }
    if let Some(v) = value("start_dark") {
        set_parsed(&mut settings.start_dark, "start_dark", &v);
    }

    Ok(())
}

pub fn apply_env_overrides(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("CATALOG_URL") {
        settings.catalog_url = v;
    }
    if let Some(v) = env("APP__CATALOG_URL") {
        settings.catalog_url = v;
    }

    if let Some(v) = env("APP__SEARCH_DELAY_MS") {
        set_parsed(&mut settings.search_delay_ms, "APP__SEARCH_DELAY_MS", &v);
    }
    if let Some(v) = env("APP__CANCEL_SUPERSEDED_SEARCHES") {
        set_parsed(
            &mut settings.cancel_superseded_searches,
            "APP__CANCEL_SUPERSEDED_SEARCHES",
            &v,
        );
    }
    if let Some(v) = env("APP__START_DARK") {
        set_parsed(&mut settings.start_dark, "APP__START_DARK", &v);
    }
}

fn set_parsed<T: std::str::FromStr>(slot: &mut T, key: &str, raw: &str) {
    match raw.trim().parse::<T>() {
        Ok(parsed) => *slot = parsed,
        Err(_) => warn!(key, value = raw, "ignoring unparseable setting"),
    }
}

pub fn normalize_catalog_url(raw_catalog_url: &str) -> String {
    let raw_catalog_url = raw_catalog_url.trim();

    if raw_catalog_url.is_empty() {
        return Settings::default().catalog_url;
    }

    if raw_catalog_url.contains("://") {
        return raw_catalog_url.to_string();
    }

    format!("https://{raw_catalog_url}")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
