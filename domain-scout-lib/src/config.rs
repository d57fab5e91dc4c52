//! Configuration file parsing and management.
//!
//! This module handles loading defaults from TOML files and merging them
//! with proper precedence: a local `domain-scout.toml` overrides one in the
//! user's home directory, and CLI flags override both (the merge with flags
//! happens in the CLI crate).

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration loaded from TOML files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Default values for CLI options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

/// Default configuration values that map to CLI options.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Default TLD list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tlds: Option<Vec<String>>,

    /// Default inter-lookup delay in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,

    /// Default character set: "alpha", "alphanum", "all", or a custom range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,

    /// Default pretty output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}

/// Configuration discovery and loading functionality.
pub struct ConfigManager {
    /// Whether to emit warnings for config issues
    pub verbose: bool,
}

impl ConfigManager {
    /// Create a new configuration manager.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Load configuration from a specific file.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<FileConfig, ScanError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ScanError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ScanError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        let config: FileConfig = toml::from_str(&content)?;
        self.validate_config(&config)?;
        Ok(config)
    }

    /// Discover and load configuration files in precedence order.
    ///
    /// Home-directory config loads first, then a local file overrides it.
    pub fn discover_and_load(&self) -> Result<FileConfig, ScanError> {
        let mut merged = FileConfig::default();
        let mut loaded_files = Vec::new();

        if let Some(global_path) = self.get_global_config_path() {
            if let Ok(config) = self.load_file(&global_path) {
                merged = merge_configs(merged, config);
                loaded_files.push(global_path);
            }
        }

        if let Some(local_path) = self.get_local_config_path() {
            if let Ok(config) = self.load_file(&local_path) {
                merged = merge_configs(merged, config);
                loaded_files.push(local_path);
            }
        }

        if self.verbose && loaded_files.len() > 1 {
            eprintln!("Multiple config files found, later entries override:");
            for path in &loaded_files {
                eprintln!("   {}", path.display());
            }
        }

        Ok(merged)
    }

    /// Look for configuration files in the current directory.
    fn get_local_config_path(&self) -> Option<PathBuf> {
        let candidates = ["./domain-scout.toml", "./.domain-scout.toml"];

        for candidate in &candidates {
            let path = Path::new(candidate);
            if path.exists() {
                return Some(path.to_path_buf());
            }
        }
        None
    }

    /// Look for configuration files in the user's home directory.
    fn get_global_config_path(&self) -> Option<PathBuf> {
        if let Some(home) = env::var_os("HOME") {
            let candidates = [".domain-scout.toml", "domain-scout.toml"];

            for candidate in &candidates {
                let path = Path::new(&home).join(candidate);
                if path.exists() {
                    return Some(path);
                }
            }
        }
        None
    }

    /// Sanity-check a loaded configuration.
    fn validate_config(&self, config: &FileConfig) -> Result<(), ScanError> {
        if let Some(defaults) = &config.defaults {
            if let Some(tlds) = &defaults.tlds {
                if tlds.iter().any(|t| t.trim().is_empty()) {
                    return Err(ScanError::config("config contains an empty TLD entry"));
                }
            }
            if let Some(charset) = &defaults.charset {
                if charset.trim().is_empty() {
                    return Err(ScanError::config("config charset cannot be empty"));
                }
            }
        }
        Ok(())
    }
}

/// Merge two configurations; fields set in `overlay` win.
pub fn merge_configs(base: FileConfig, overlay: FileConfig) -> FileConfig {
    let defaults = match (base.defaults, overlay.defaults) {
        (None, overlay) => overlay,
        (base, None) => base,
        (Some(base), Some(overlay)) => Some(DefaultsConfig {
            tlds: overlay.tlds.or(base.tlds),
            delay_ms: overlay.delay_ms.or(base.delay_ms),
            charset: overlay.charset.or(base.charset),
            pretty: overlay.pretty.or(base.pretty),
        }),
    };
    FileConfig { defaults }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"
[defaults]
tlds = ["com", "net"]
delay_ms = 250
charset = "alpha"
"#,
        );

        let manager = ConfigManager::new(false);
        let config = manager.load_file(file.path()).unwrap();
        let defaults = config.defaults.unwrap();
        assert_eq!(defaults.tlds.unwrap(), vec!["com", "net"]);
        assert_eq!(defaults.delay_ms, Some(250));
        assert_eq!(defaults.charset.as_deref(), Some("alpha"));
    }

    #[test]
    fn test_load_missing_file() {
        let manager = ConfigManager::new(false);
        let result = manager.load_file("/nonexistent/domain-scout.toml");
        assert!(matches!(result, Err(ScanError::File { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = write_config("this is not [valid toml");
        let manager = ConfigManager::new(false);
        assert!(matches!(
            manager.load_file(file.path()),
            Err(ScanError::Config { .. })
        ));
    }

    #[test]
    fn test_empty_tld_entry_rejected() {
        let file = write_config(
            r#"
[defaults]
tlds = ["com", ""]
"#,
        );
        let manager = ConfigManager::new(false);
        assert!(matches!(
            manager.load_file(file.path()),
            Err(ScanError::Config { .. })
        ));
    }

    #[test]
    fn test_merge_overlay_wins() {
        let base = FileConfig {
            defaults: Some(DefaultsConfig {
                tlds: Some(vec!["com".to_string()]),
                delay_ms: Some(500),
                charset: Some("alpha".to_string()),
                pretty: None,
            }),
        };
        let overlay = FileConfig {
            defaults: Some(DefaultsConfig {
                tlds: Some(vec!["io".to_string()]),
                delay_ms: None,
                charset: None,
                pretty: Some(true),
            }),
        };

        let merged = merge_configs(base, overlay);
        let defaults = merged.defaults.unwrap();
        assert_eq!(defaults.tlds.unwrap(), vec!["io"]);
        assert_eq!(defaults.delay_ms, Some(500)); // kept from base
        assert_eq!(defaults.pretty, Some(true));
    }

    #[test]
    fn test_merge_with_empty_sides() {
        let base = FileConfig::default();
        let overlay = FileConfig {
            defaults: Some(DefaultsConfig {
                delay_ms: Some(100),
                ..Default::default()
            }),
        };
        let merged = merge_configs(base, overlay);
        assert_eq!(merged.defaults.unwrap().delay_ms, Some(100));
    }
}
