use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::BaseDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::EurekaError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
pub const CONFIG_FILE_NAME: &str = "eureka.json";
pub const BASE_URL_ENV: &str = "EUREKA_API_BASE_URL";
pub const DEV_MODE_ENV: &str = "EUREKA_DEV";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub dev_mode: Option<bool>,
}

/// Values taken from the process environment and the command line, applied
/// on top of the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub dev_mode: Option<String>,
}

impl Overrides {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(BASE_URL_ENV)
                .ok()
                .filter(|value| !value.trim().is_empty()),
            dev_mode: std::env::var(DEV_MODE_ENV).ok(),
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub dev_mode: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            dev_mode: cfg!(debug_assertions),
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn resolve(
        path: Option<&str>,
        overrides: Overrides,
    ) -> Result<ResolvedConfig, EurekaError> {
        let config = match path {
            Some(path) => Self::read(PathBuf::from(path))?,
            None => match Self::implicit_path() {
                Some(found) => Self::read(found)?,
                None => Config::default(),
            },
        };

        Self::resolve_config(config, &overrides)
    }

    pub fn resolve_config(
        config: Config,
        overrides: &Overrides,
    ) -> Result<ResolvedConfig, EurekaError> {
        let defaults = ResolvedConfig::default();

        let raw_base_url = overrides
            .base_url
            .clone()
            .or(config.base_url)
            .unwrap_or(defaults.base_url);
        let base_url = normalize_base_url(&raw_base_url)?;

        let file_dev_mode = config.dev_mode.unwrap_or(defaults.dev_mode);
        let dev_mode = overrides
            .dev_mode
            .as_deref()
            .and_then(parse_flag)
            .unwrap_or(file_dev_mode);

        Ok(ResolvedConfig {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            dev_mode,
        })
    }

    fn read(path: PathBuf) -> Result<Config, EurekaError> {
        let content =
            fs::read_to_string(&path).map_err(|_| EurekaError::ConfigRead(path.clone()))?;
        serde_json::from_str(&content).map_err(|err| EurekaError::ConfigParse(err.to_string()))
    }

    fn implicit_path() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }
        BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("eureka").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }
}

pub fn normalize_base_url(value: &str) -> Result<String, EurekaError> {
    let trimmed = value.trim();
    let url = Url::parse(trimmed).map_err(|_| EurekaError::InvalidBaseUrl(value.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(EurekaError::InvalidBaseUrl(value.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
