//! Editor configuration model.
//!
//! The configuration mirrors the sections of `composer.json` it feeds:
//!
//! ```json
//! {
//!   "require": [{ "package": "laravel/framework", "version": "4.1.*" }],
//!   "require-dev": [{ "package": "mockery/mockery", "version": "dev-master@dev" }],
//!   "autoload": {
//!     "classmap": ["app/lib"],
//!     "psr-0": { "Acme": "app/lib" },
//!     "psr-4": { "Foo\\Bar\\": "src/Foo/Bar/" }
//!   }
//! }
//! ```
//!
//! Every section is optional. PSR maps keep the key order of the document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A package requirement. The version constraint is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
  pub package: String,
  pub version: String,
}

impl Dependency {
  pub fn new(package: impl Into<String>, version: impl Into<String>) -> Self {
    Self {
      package: package.into(),
      version: version.into(),
    }
  }
}

/// Autoload entries to merge into `autoload`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoloadConfig {
  pub classmap: Vec<String>,
  #[serde(rename = "psr-0")]
  pub psr_0: IndexMap<String, String>,
  #[serde(rename = "psr-4")]
  pub psr_4: IndexMap<String, String>,
}

impl AutoloadConfig {
  pub fn is_empty(&self) -> bool {
    self.classmap.is_empty() && self.psr_0.is_empty() && self.psr_4.is_empty()
  }
}

/// Everything the manifest editor merges into `composer.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
  pub require: Vec<Dependency>,
  #[serde(rename = "require-dev")]
  pub require_dev: Vec<Dependency>,
  pub autoload: AutoloadConfig,
}

impl ComposerConfig {
  /// Parse a configuration from JSON text.
  pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(text)
  }

  /// True when no merge would change anything.
  pub fn is_empty(&self) -> bool {
    self.require.is_empty() && self.require_dev.is_empty() && self.autoload.is_empty()
  }
}
