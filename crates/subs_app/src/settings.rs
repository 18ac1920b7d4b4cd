use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use subs_core::{CounterConfig, Platform, FALLBACK_TEXT};
use subs_engine::DashboardSettings;
use subs_logging::{subs_info, subs_warn};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "subs_counter.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub counter: CounterConfig,
    pub fallback_text: String,
    pub platforms: Vec<Platform>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            counter: CounterConfig::default(),
            fallback_text: FALLBACK_TEXT.to_string(),
            platforms: Platform::ALL.to_vec(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            counter: self.counter,
            fallback_text: self.fallback_text.clone(),
            platforms: self.platforms.clone(),
            ..DashboardSettings::default()
        }
    }
}

/// Loads the config named on the command line, or `subs_counter.ron` from
/// the working directory.
///
/// An explicitly named file must exist and parse. The implicit file is
/// optional; if it is unreadable the defaults are used and a warning is
/// printed, since the logger is not installed yet.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    match explicit {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            parse(&text).with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(load_implicit(&PathBuf::from(DEFAULT_CONFIG_FILE))),
    }
}

fn load_implicit(path: &Path) -> AppConfig {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return AppConfig::default(),
        Err(err) => {
            eprintln!("Warning: could not read {}: {}", path.display(), err);
            return AppConfig::default();
        }
    };
    match parse(&text) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: ignoring {}: {:#}", path.display(), err);
            AppConfig::default()
        }
    }
}

fn parse(text: &str) -> Result<AppConfig> {
    let config: AppConfig = ron::from_str(text)?;
    config.counter.step_count()?;
    Ok(config)
}

/// Writes the default config as pretty RON, for `--write-default-config`.
pub fn write_default(path: &Path) -> Result<()> {
    let pretty = ron::ser::PrettyConfig::new();
    let text = ron::ser::to_string_pretty(&AppConfig::default(), pretty)
        .context("serializing default config")?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    subs_info!("wrote default config to {:?}", path);
    Ok(())
}

/// Logs settings that are accepted but probably unintended.
pub fn report_suspicious(config: &AppConfig) {
    if LevelFilter::from_str(&config.log_level).is_err() {
        subs_warn!("unknown log level {:?}, using info", config.log_level);
    }
    if config.platforms.is_empty() {
        subs_warn!("no platforms configured; nothing will be animated");
    }
}
