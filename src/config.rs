use crate::error::{ImsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/api.php";
pub const ENV_API_URL: &str = "IMS_API_URL";
pub const ENV_API_TOKEN: &str = "IMS_API_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub page_limit: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout_secs: 30,
            page_limit: 100,
        }
    }
}

/// `<config dir>/ims-manager/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ims-manager").join("config.yaml"))
}

impl Settings {
    /// Defaults, then the YAML file, then environment variables.
    ///
    /// An explicitly requested file must exist; the default location is
    /// optional.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut settings = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("no settings file found, using defaults");
                    Self::default()
                }
            },
        };

        settings.apply_env();
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading settings from: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&contents)?;
        Ok(settings)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                self.api_base_url = url;
            }
        }
        if let Ok(token) = std::env::var(ENV_API_TOKEN) {
            if !token.is_empty() {
                self.token = Some(token);
            }
        }
    }

    /// Command-line flags win over everything else.
    pub fn with_overrides(mut self, url: Option<&str>, token: Option<&str>) -> Self {
        if let Some(url) = url {
            self.api_base_url = url.to_string();
        }
        if let Some(token) = token {
            self.token = Some(token.to_string());
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ImsError::Config(format!(
                "API URL must start with http:// or https://: {}",
                self.api_base_url
            )));
        }
        if self.page_limit == 0 {
            return Err(ImsError::Config("page_limit must be greater than 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
