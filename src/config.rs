//! TOML configuration for puasar.
//!
//! Looks for `puasar.toml` under the platform config directory
//! (`~/.config/puasar/puasar.toml` on Linux) and writes a commented default
//! file when none exists. Every field is optional; unset fields fall back
//! to the compiled-in Surabaya schedule.
//!
//! Validation is deliberately soft. A malformed boundary time or a
//! maghrib-before-imsak ordering logs a warning and keeps running: the
//! phase engine degrades to its documented fallback rather than killing a
//! persistently visible widget over a config typo.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_CITY, DEFAULT_IMSAK, DEFAULT_MAGHRIB, DEFAULT_SAHUR};

/// User-facing configuration, all fields optional.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Location label shown in the widget panel.
    pub city: Option<String>,
    /// Dawn boundary (`HH:MM`), start of the fast.
    pub imsak: Option<String>,
    /// Sahur (subuh) marker (`HH:MM`), informational only.
    pub sahur: Option<String>,
    /// Sunset boundary (`HH:MM`), end of the fast.
    pub maghrib: Option<String>,
}

impl Config {
    /// Load configuration from the default path, creating a commented
    /// default file on first run.
    pub fn load() -> Result<Config> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            create_default_config(&config_path)?;
            log_block_start!("Created default configuration: {}", config_path.display());
        }

        Self::load_from_path(&config_path)
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse configuration from {}", path.display()))?;

        validate_config(&config);
        Ok(config)
    }

    /// Log the effective configuration in the visual block style.
    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        log_indented!(
            "City: {}",
            self.city.as_deref().unwrap_or(DEFAULT_CITY)
        );
        log_indented!(
            "Imsak: {}",
            self.imsak.as_deref().unwrap_or(DEFAULT_IMSAK)
        );
        log_indented!(
            "Sahur (Subuh): {}",
            self.sahur.as_deref().unwrap_or(DEFAULT_SAHUR)
        );
        log_indented!(
            "Berbuka (Maghrib): {}",
            self.maghrib.as_deref().unwrap_or(DEFAULT_MAGHRIB)
        );
    }
}

/// Path to `puasar.toml` under the platform config directory.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("puasar").join("puasar.toml"))
}

/// Write the commented default configuration file.
fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let contents = format!(
        r#"#[Puasar configuration]
city = "{DEFAULT_CITY}"

#[Daily schedule] 24-hour local time, HH:MM
imsak = "{DEFAULT_IMSAK}"     # Dawn boundary, start of the fast
sahur = "{DEFAULT_SAHUR}"     # Sahur (subuh) marker, informational
maghrib = "{DEFAULT_MAGHRIB}"   # Sunset boundary, end of the fast
"#
    );

    fs::write(path, contents)
        .with_context(|| format!("Failed to write default configuration to {}", path.display()))
}

/// Parse an `HH:MM` config value.
fn parse_schedule_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Warn about schedule values the phase engine will have to fall back on.
/// Never fails: the widget must stay displayable with a broken config.
fn validate_config(config: &Config) {
    for (field, value) in [
        ("imsak", &config.imsak),
        ("sahur", &config.sahur),
        ("maghrib", &config.maghrib),
    ] {
        if let Some(value) = value
            && parse_schedule_time(value).is_none()
        {
            log_pipe!();
            log_warning!("Invalid {field} time '{value}' (expected HH:MM)");
            log_indented!("The countdown will fall back to the current instant for this boundary");
        }
    }

    let imsak = config.imsak.as_deref().unwrap_or(DEFAULT_IMSAK);
    let maghrib = config.maghrib.as_deref().unwrap_or(DEFAULT_MAGHRIB);
    if let (Some(imsak), Some(maghrib)) =
        (parse_schedule_time(imsak), parse_schedule_time(maghrib))
        && imsak >= maghrib
    {
        log_pipe!();
        log_warning!("Schedule ordering: imsak ({imsak}) should precede maghrib ({maghrib})");
    }
}
