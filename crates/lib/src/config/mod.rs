//! Editor configuration: the model and where to find it.
//!
//! Lookup order for the configuration file:
//! 1. An explicit path (e.g. `--config`)
//! 2. The `FOREMAN_CONFIG` environment variable
//! 3. `./foreman.json`
//! 4. `foreman.json` in the user config directory

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::consts::{CONFIG_ENV_VAR, CONFIG_FILENAME};
use crate::paths::config_dir;

pub use types::*;

/// Errors that can occur while locating or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config file not found (tried {tried})")]
  NotFound { tried: String },

  #[error("failed to read config {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to parse config {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },
}

impl ComposerConfig {
  /// Load a configuration from a JSON file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_json_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }
}

/// Locate the configuration file.
///
/// An explicit path or `FOREMAN_CONFIG` must point at an existing file; they
/// do not fall through to the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] listing every location tried.
pub fn find_config(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
  if let Some(path) = explicit {
    return existing(path.to_path_buf());
  }

  if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
    debug!(var = CONFIG_ENV_VAR, "using config path from environment");
    return existing(PathBuf::from(env_path));
  }

  let mut candidates = vec![PathBuf::from(CONFIG_FILENAME)];
  if let Some(dir) = config_dir() {
    candidates.push(dir.join(CONFIG_FILENAME));
  }

  if let Some(found) = candidates.iter().find(|p| p.is_file()) {
    return Ok(found.clone());
  }

  Err(ConfigError::NotFound {
    tried: describe(&candidates),
  })
}

fn existing(path: PathBuf) -> Result<PathBuf, ConfigError> {
  if path.is_file() {
    Ok(path)
  } else {
    Err(ConfigError::NotFound {
      tried: describe(std::slice::from_ref(&path)),
    })
  }
}

fn describe(paths: &[PathBuf]) -> String {
  paths
    .iter()
    .map(|p| p.display().to_string())
    .collect::<Vec<_>>()
    .join(", ")
}
