use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

const CONFIG_ENV: &str = "PLINTH_CONFIG";
const CONFIG_FILE: &str = "plinth.yaml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// Where and what to serve from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// Directory all served files must live under.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Document substituted for requests to "/".
    #[serde(default = "default_index")]
    pub index: String,
    /// Page served (with status 404) for missing or unreadable files.
    #[serde(default = "default_not_found")]
    pub not_found: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_index() -> String {
    "index.html".to_string()
}

fn default_not_found() -> String {
    "404.html".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            index: default_index(),
            not_found: default_not_found(),
        }
    }
}

impl Config {
    /// Loads the configuration from the YAML file named by the
    /// `PLINTH_CONFIG` environment variable, falling back to `plinth.yaml`.
    /// A missing file yields the built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_FILE.to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let cfg = serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(cfg)
    }
}
