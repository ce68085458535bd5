use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for gdpr-obfuscator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub redaction: RedactionConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Local,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Root directory for the local backend; buckets are subdirectories
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Base URL for the http backend
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Fields redacted when a request names none
    #[serde(default)]
    pub default_fields: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            root: default_root(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("./data")
}

fn default_endpoint() -> String {
    "http://127.0.0.1:9000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_init(&Self::config_path())
    }

    /// Load config from `path`, writing the defaults there first if it does not exist
    pub fn load_or_init(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Config::default();
            config.save(path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "gdpr-obfuscator", "gdpr-obfuscator") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.gdpr-obfuscator/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.store.backend, StoreBackend::Local);
        assert_eq!(config.store.timeout_secs, 30);
        assert!(config.redaction.default_fields.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.store.endpoint, config.store.endpoint);
        assert_eq!(parsed.store.root, config.store.root);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[store]
backend = "http"
endpoint = "http://minio.local:9000"

[redaction]
default_fields = ["name", "email_address"]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Http);
        assert_eq!(config.store.endpoint, "http://minio.local:9000");
        assert_eq!(config.store.timeout_secs, 30);
        assert_eq!(config.redaction.default_fields, vec!["name", "email_address"]);
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let config = Config::load_or_init(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.store.backend, StoreBackend::Local);

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.store.root, config.store.root);
    }
}
