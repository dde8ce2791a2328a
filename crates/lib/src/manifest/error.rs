use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, editing, or writing a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("failed to read manifest {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to parse manifest {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("manifest {} is not a JSON object", path.display())]
  NotAnObject { path: PathBuf },

  #[error("manifest key '{key}' is not {expected}")]
  UnexpectedType { key: String, expected: &'static str },

  #[error("failed to serialize manifest: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("failed to write manifest {}: {source}", path.display())]
  Write { path: PathBuf, source: std::io::Error },
}
