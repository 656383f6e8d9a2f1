//! Service settings: defaults, then `menu.toml`, then environment variables.

use std::{fs, io::ErrorKind, net::SocketAddr};

use anyhow::{bail, Context};
use serde::Deserialize;

/// Optional settings file, looked up in the working directory
pub const CONFIG_FILE: &str = "menu.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    /// Start with the sample menu instead of an empty one
    pub seed_sample_menu: bool,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8000".into(),
            seed_sample_menu: true,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.bind_addr))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_addr: Option<String>,
    seed_sample_menu: Option<bool>,
    log_filter: Option<String>,
}

/// Loads settings from `menu.toml` (if present) and the process environment.
pub fn load_settings() -> anyhow::Result<Settings> {
    let raw = match fs::read_to_string(CONFIG_FILE) {
        Ok(raw) => Some(raw),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(e).with_context(|| format!("failed to read {CONFIG_FILE}")),
    };

    resolve_settings(raw.as_deref(), |key| std::env::var(key).ok())
}

/// Layers the file contents and environment lookups over the defaults.
pub fn resolve_settings(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        let file_cfg: FileSettings =
            toml::from_str(raw).with_context(|| format!("failed to parse {CONFIG_FILE}"))?;
        if let Some(v) = file_cfg.bind_addr {
            settings.bind_addr = v;
        }
        if let Some(v) = file_cfg.seed_sample_menu {
            settings.seed_sample_menu = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("MENU_BIND_ADDR") {
        settings.bind_addr = v;
    }
    if let Some(v) = env("MENU_SEED_SAMPLE") {
        settings.seed_sample_menu =
            parse_flag(&v).context("MENU_SEED_SAMPLE must be true or false")?;
    }
    if let Some(v) = env("MENU_LOG") {
        settings.log_filter = v;
    }

    Ok(settings)
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{other}'"),
    }
}
