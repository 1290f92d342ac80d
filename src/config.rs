use serde::{Deserialize, Serialize};

/// Used when neither flag, environment, nor config file names a server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Environment variable consulted for the server base URL.
pub const BASE_URL_ENV: &str = "CINEREC_BASE_URL";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Movies per catalog page requested from the server.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> u32 {
    10
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }

    /// Load from a file when one was given, otherwise fall back to defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the server base URL. Precedence: explicit flag, then the
    /// environment value passed in by the caller, then the config file, then
    /// the local default. The environment is handed in rather than read here
    /// so resolution stays deterministic under test.
    pub fn resolve_base_url(&self, flag: Option<&str>, env: Option<String>) -> String {
        flag.map(str::to_string)
            .or_else(|| env.filter(|v| !v.trim().is_empty()))
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://movies.example:9000").unwrap();
        writeln!(file, "catalog:").unwrap();
        writeln!(file, "  limit: 25").unwrap();

        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://movies.example:9000"));
        assert_eq!(config.catalog.limit, 25);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(matches!(
            Config::from_file("/nonexistent/cinerec.yaml"),
            Err(ConfigError::ReadError(_, _))
        ));
    }

    #[test]
    fn test_base_url_precedence() {
        let config = Config {
            base_url: Some("http://from-file:1".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_base_url(Some("http://flag:2"), Some("http://env:3".to_string())),
            "http://flag:2"
        );
        assert_eq!(
            config.resolve_base_url(None, Some("http://env:3".to_string())),
            "http://env:3"
        );
        assert_eq!(config.resolve_base_url(None, None), "http://from-file:1");
        assert_eq!(
            Config::default().resolve_base_url(None, Some("  ".to_string())),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.base_url, None);
        assert_eq!(config.catalog.limit, 10);
    }
}
