use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use crate::error::{Context, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            listen_addr: default_listen_addr(),
            db_path: default_db_path(),
        }
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_db_path() -> PathBuf {
    PathBuf::from("tubelist.db")
}

impl Config {
    /// Loads configuration. An explicitly given path must exist; otherwise
    /// `config.toml` in the working directory is used when present, and the
    /// defaults when not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new("config.toml");
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    debug!("no config file found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        info!("loading config from {path:?}");
        let raw = std::fs::read_to_string(path).context("failed to read config file")?;
        let config = toml::from_str(&raw).context("failed to parse config file")?;
        Ok(config)
    }
}
