//! Runtime configuration for the kolam web service
//!
//! Layered: built-in defaults, then a YAML file, then `KOLAM_*` environment
//! variables. Command-line flags are applied last by the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const ENV_BIND: &str = "KOLAM_BIND";
pub const ENV_STATIC_DIR: &str = "KOLAM_STATIC_DIR";
pub const ENV_UPLOAD_DIR: &str = "KOLAM_UPLOAD_DIR";
pub const ENV_MAX_UPLOAD_BYTES: &str = "KOLAM_MAX_UPLOAD_BYTES";
pub const ENV_CATALOG: &str = "KOLAM_CATALOG";

/// 16 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Errors from loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Web server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebConfig {
    /// Socket address to listen on
    pub bind: String,
    /// Directory served at `/`
    pub static_dir: PathBuf,
    /// Where uploaded images are written
    pub upload_dir: PathBuf,
    /// Request body limit in bytes
    pub max_upload_bytes: usize,
    /// YAML catalog replacing the built-in templates
    pub catalog_path: Option<PathBuf>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
            static_dir: PathBuf::from("static"),
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            catalog_path: None,
        }
    }
}

impl WebConfig {
    /// `~/.config/kolam/config.yaml` (platform equivalent)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("kolam").join("config.yaml"))
    }

    /// Resolve configuration from file and process environment.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Apply `KOLAM_*` overrides using `lookup` to read variables
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_BIND) {
            self.bind = v;
        }
        if let Some(v) = lookup(ENV_STATIC_DIR) {
            self.static_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_UPLOAD_DIR) {
            self.upload_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_MAX_UPLOAD_BYTES) {
            self.max_upload_bytes = v.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_MAX_UPLOAD_BYTES,
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup(ENV_CATALOG) {
            self.catalog_path = if v.is_empty() {
                None
            } else {
                Some(PathBuf::from(v))
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = WebConfig::default();
        assert_eq!(config.bind, "0.0.0.0:5000");
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = WebConfig::from_yaml("bind: 127.0.0.1:8080\nupload_dir: /tmp/kolam\n").unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.upload_dir, PathBuf::from("/tmp/kolam"));
        assert_eq!(config.static_dir, PathBuf::from("static"));

        assert_eq!(WebConfig::from_yaml("").unwrap(), WebConfig::default());
        assert!(WebConfig::from_yaml("port: 80\n").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = WebConfig::default();
        config
            .apply_env(env(&[
                (ENV_BIND, "127.0.0.1:9000"),
                (ENV_MAX_UPLOAD_BYTES, " 1024 "),
                (ENV_CATALOG, "patterns.yaml"),
            ]))
            .unwrap();
        assert_eq!(config.bind, "127.0.0.1:9000");
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.catalog_path, Some(PathBuf::from("patterns.yaml")));
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));

        config.apply_env(env(&[(ENV_CATALOG, "")])).unwrap();
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_env_rejects_bad_size() {
        let mut config = WebConfig::default();
        let err = config
            .apply_env(env(&[(ENV_MAX_UPLOAD_BYTES, "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_MAX_UPLOAD_BYTES, .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "static_dir: public\nmax_upload_bytes: 2048\n").unwrap();

        let config = WebConfig::from_file(&path).unwrap();
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.max_upload_bytes, 2048);

        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            WebConfig::from_file(&missing),
            Err(ConfigError::Read { .. })
        ));

        std::fs::write(&path, "bind: [not, a, string]\n").unwrap();
        assert!(matches!(
            WebConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kolam.yaml");
        std::fs::write(&path, "static_dir: assets\n").unwrap();

        let config = WebConfig::load(Some(&path)).unwrap();
        assert_eq!(config.static_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_load_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");

        match WebConfig::load(Some(&missing)) {
            Err(ConfigError::Read { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
