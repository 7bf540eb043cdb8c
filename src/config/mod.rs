use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

pub mod credentials;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL, up to and including the API prefix.
    pub server_url: String,
    /// Default work location code for clock-in (O = office, H = home).
    pub default_location: String,
    #[serde(default = "default_highlight_secs")]
    pub feed_highlight_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_highlight_secs() -> u64 {
    3
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "https://ems-new.onrender.com/api/v1".to_string(),
            default_location: "O".to_string(),
            feed_highlight_secs: default_highlight_secs(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("emstrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".emstrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("emstrack.conf")
    }

    /// Full path of the persisted acknowledged-announcement-id set.
    pub fn read_notifications_file() -> PathBuf {
        Self::config_dir().join("read_notifications.json")
    }

    /// Full path of the stored login credentials.
    pub fn credentials_file() -> PathBuf {
        Self::config_dir().join("credentials.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A corrupt file falls back to defaults with a warning rather than
    /// aborting: every command should stay usable to re-run `init`.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        tracing::warn!("failed to parse {}: {}", path.display(), e);
                        Config::default()
                    }
                },
                Err(e) => {
                    tracing::warn!("failed to read {}: {}", path.display(), e);
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file
    pub fn init_all(server_url: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config {
            server_url: server_url.unwrap_or_else(|| Config::default().server_url),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(())
    }

    /// Check the loaded file for missing fields; returns the list of keys
    /// that fell back to defaults.
    pub fn missing_fields() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(&path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse config: {e}")))?;

        let mut missing = Vec::new();
        for key in [
            "server_url",
            "default_location",
            "feed_highlight_secs",
            "request_timeout_secs",
        ] {
            if value.get(key).is_none() {
                missing.push(key);
            }
        }
        Ok(missing)
    }
}
