//! Path utilities for configuration files
//!
//! Handles XDG directory specifications and path resolution.

use crate::error::{IpQueryError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Get the ipquery configuration directory
///
/// Priority:
/// 1. IPQUERY_CONFIG_HOME environment variable
/// 2. XDG_CONFIG_HOME/ipquery-rs
/// 3. ~/.config/ipquery-rs (fallback)
pub fn config_dir() -> Result<PathBuf> {
    config_dir_with(|key| env::var(key).ok())
}

fn config_dir_with<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<PathBuf> {
    if let Some(path) = lookup("IPQUERY_CONFIG_HOME") {
        return Ok(PathBuf::from(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("ipquery-rs"));
    }

    Err(IpQueryError::config("Unable to determine config directory"))
}

/// Get the path to the config file
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.yaml"))
}

/// Ensure directory exists, create if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .map_err(|e| IpQueryError::config(format!("Failed to create directory: {}", e)))?;
    }
    Ok(())
}

/// Expand tilde (~) in path
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name() {
        let file = config_file().unwrap();
        assert!(file.ends_with("config.yaml"));
    }

    #[test]
    fn test_config_dir_env_override() {
        let dir = config_dir_with(|key| {
            (key == "IPQUERY_CONFIG_HOME").then(|| "/tmp/ipquery-conf".to_string())
        })
        .unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/ipquery-conf"));
    }

    #[test]
    fn test_config_dir_fallback() {
        let dir = config_dir_with(|_| None).unwrap();
        assert!(dir.ends_with("ipquery-rs"));
    }

    #[test]
    fn test_ensure_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test");
        assert!(!path.to_string_lossy().starts_with("~"));
        assert_eq!(expand_tilde("/etc/ipquery.yaml"), PathBuf::from("/etc/ipquery.yaml"));
    }
}
