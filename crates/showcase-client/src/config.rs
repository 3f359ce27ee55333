use crate::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default backend base URL when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:80";

/// Resolve the client data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SHOWCASE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.showcase (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("SHOWCASE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("showcase"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".showcase"));
    }

    Err(ApiError::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Client configuration persisted under the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_url: Option<String>,
}

impl ClientConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ApiError::Config(format!("{}: {}", path.display(), e)))?;
        let config: ClientConfig =
            toml::from_str(&content).map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ApiError::Config(format!("{}: {}", parent.display(), e)))?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| ApiError::Config(e.to_string()))?;
        std::fs::write(path, content)
            .map_err(|e| ApiError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Resolve the backend base URL based on priority:
    /// 1. Explicit flag value
    /// 2. SHOWCASE_API_URL environment variable
    /// 3. `api_url` from the config file
    /// 4. Built-in default
    pub fn resolve_api_url(&self, explicit: Option<&str>) -> String {
        if let Some(url) = explicit {
            return url.trim_end_matches('/').to_string();
        }
        if let Ok(url) = std::env::var("SHOWCASE_API_URL") {
            if !url.trim().is_empty() {
                return url.trim_end_matches('/').to_string();
            }
        }
        if let Some(url) = &self.api_url {
            return url.trim_end_matches('/').to_string();
        }
        DEFAULT_API_URL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.toml");

        let config = ClientConfig::load_from(&path)?;
        assert!(config.api_url.is_none());
        Ok(())
    }

    #[test]
    fn save_and_load_round_trip() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = ClientConfig {
            api_url: Some("http://10.0.0.5:8080".to_string()),
        };
        config.save_to(&path)?;

        let loaded = ClientConfig::load_from(&path)?;
        assert_eq!(loaded.api_url.as_deref(), Some("http://10.0.0.5:8080"));
        Ok(())
    }

    #[test]
    fn explicit_flag_wins_over_config() {
        let config = ClientConfig {
            api_url: Some("http://from-config".to_string()),
        };
        assert_eq!(
            config.resolve_api_url(Some("http://from-flag/")),
            "http://from-flag"
        );
    }

    #[test]
    fn config_file_wins_over_default() {
        let config = ClientConfig {
            api_url: Some("http://from-config".to_string()),
        };
        assert_eq!(config.resolve_api_url(None), "http://from-config");
    }

    #[test]
    fn falls_back_to_default() {
        let config = ClientConfig::default();
        // Only meaningful when SHOWCASE_API_URL is unset in the test env.
        if std::env::var("SHOWCASE_API_URL").is_err() {
            assert_eq!(config.resolve_api_url(None), DEFAULT_API_URL);
        }
    }
}
