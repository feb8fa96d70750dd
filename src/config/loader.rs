use std::fs;
use std::path::{Path, PathBuf};

use super::core::TonemapConfig;
use crate::errors::TonemapError;

pub const CONFIG_FILE_NAME: &str = ".tonemap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse configuration from TOML contents.
pub fn parse_config(contents: &str) -> Result<TonemapConfig, TonemapError> {
    toml::from_str::<TonemapConfig>(contents)
        .map_err(|e| TonemapError::config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}"), None))
}

/// Load configuration from an explicit path, failing on any problem.
pub fn load_config_from_path(path: &Path) -> Result<TonemapConfig, TonemapError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| TonemapError::config_unreadable(e.to_string(), path))?;
    parse_config(&contents).map_err(|err| match err {
        TonemapError::Config { code, message, .. } => TonemapError::Config {
            code,
            message,
            path: Some(path.to_path_buf()),
        },
        other => other,
    })
}

/// Try loading config from a candidate path, logging instead of failing.
fn try_load_config_from_path(config_path: &Path) -> Option<TonemapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its ancestors, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the config file.
///
/// Unreadable or malformed files are skipped with a warning.
pub fn load_config_from(start: PathBuf) -> TonemapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            TonemapConfig::default()
        })
}

/// Search the current directory and its ancestors for the config file.
pub fn load_config() -> TonemapConfig {
    match std::env::current_dir() {
        Ok(current) => load_config_from(current),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            TonemapConfig::default()
        }
    }
}
