//! Configuration management for sodhpuch.
//!
//! Loads configuration from ${SODHPUCH_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "SODHPUCH_API_URL";

/// Local development address of the API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for sodhpuch configuration and data files.
    //!
    //! SODHPUCH_HOME resolution order:
    //! 1. SODHPUCH_HOME environment variable (if set)
    //! 2. ~/.config/sodhpuch (default)

    use std::path::PathBuf;

    /// Returns the sodhpuch home directory.
    ///
    /// Falls back to a relative `.sodhpuch` directory when no home directory
    /// can be determined.
    pub fn sodhpuch_home() -> PathBuf {
        if let Ok(home) = std::env::var("SODHPUCH_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".sodhpuch"),
            |h| h.join(".config").join("sodhpuch"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        sodhpuch_home().join("config.toml")
    }

    /// Returns the path to the stored session (bearer token).
    pub fn session_path() -> PathBuf {
        sodhpuch_home().join("session.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        sodhpuch_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the API (without trailing slash)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    /// Request timeout in seconds (0 disables)
    pub timeout_secs: u64,
}

impl Config {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the API base URL to use for requests.
    ///
    /// Resolution order:
    /// 1) `SODHPUCH_API_URL` environment variable
    /// 2) `api_base_url` from config
    /// 3) Local development default
    pub fn effective_api_base_url(&self) -> String {
        let from_env = std::env::var(API_URL_ENV).ok();
        resolve_api_base_url(from_env.as_deref(), self.api_base_url.as_deref())
    }

    /// Returns the request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Saves only the `api_base_url` field to the config file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or written.
    pub fn save_api_base_url(url: &str) -> Result<()> {
        Self::save_api_base_url_to(&paths::config_path(), url)
    }

    /// Saves only the `api_base_url` field to a specific config file path.
    ///
    /// Creates the file from the default template if it doesn't exist.
    /// Existing fields and comments are preserved.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or written.
    pub fn save_api_base_url_to(path: &Path, url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["api_base_url"] = value(normalize_base_url(url));

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Picks the API base URL from an env override, a configured value, or the default.
///
/// Blank values are skipped. The result never ends with `/`.
pub fn resolve_api_base_url(from_env: Option<&str>, configured: Option<&str>) -> String {
    [from_env, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .map_or_else(|| DEFAULT_API_BASE_URL.to_string(), normalize_base_url)
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api_base_url, None);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "api_base_url = \"https://api.example.com\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://api.example.com")
        );
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "timeout_secs = \"soon\"\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# api_base_url ="));
        assert!(contents.contains("timeout_secs = 30"));
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api_base_url, None);
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_save_api_base_url_preserves_other_fields() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "# keep me\ntimeout_secs = 5\n").unwrap();

        Config::save_api_base_url_to(&config_path, "https://api.example.com/").unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# keep me"));
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://api.example.com")
        );
    }

    #[test]
    fn test_save_api_base_url_creates_file_from_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");

        Config::save_api_base_url_to(&config_path, "http://10.0.0.2:9000/api").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("http://10.0.0.2:9000/api")
        );
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_resolve_prefers_env_over_config() {
        let url = resolve_api_base_url(Some("http://env:1/api"), Some("http://cfg:2/api"));
        assert_eq!(url, "http://env:1/api");
    }

    #[test]
    fn test_resolve_skips_blank_values() {
        let url = resolve_api_base_url(Some("  "), Some("http://cfg:2/api/"));
        assert_eq!(url, "http://cfg:2/api");

        let url = resolve_api_base_url(None, Some(""));
        assert_eq!(url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_request_timeout_zero_disables() {
        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.request_timeout(), None);
        assert_eq!(
            Config::default().request_timeout(),
            Some(Duration::from_secs(30))
        );
    }
}
