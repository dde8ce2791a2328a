//! The manifest editor.
//!
//! A [`ManifestEditor`] owns one `composer.json` for its lifetime. The file is
//! read on first access, merges mutate the in-memory document, and nothing is
//! written until [`ManifestEditor::persist`] is called.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::{ManifestDocument, ManifestError};
use crate::config::{ComposerConfig, Dependency};
use crate::consts::MANIFEST_FILENAME;
use crate::fs::Filesystem;
use crate::report::{COMPOSER_CATEGORY, FOREMAN_CATEGORY, Reporter};

pub const REQUIRE_KEY: &str = "require";
pub const REQUIRE_DEV_KEY: &str = "require-dev";
pub const AUTOLOAD_KEY: &str = "autoload";
pub const CLASSMAP_KEY: &str = "classmap";
pub const PSR0_KEY: &str = "psr-0";
pub const PSR4_KEY: &str = "psr-4";

/// Number of entries merged into each manifest section by
/// [`ManifestEditor::merge_all`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
  pub require: usize,
  pub require_dev: usize,
  pub classmap: usize,
  pub psr_0: usize,
  pub psr_4: usize,
}

impl MergeSummary {
  pub fn total(&self) -> usize {
    self.require + self.require_dev + self.classmap + self.psr_0 + self.psr_4
  }
}

/// Manifest text as last read or written, plus the parsed document.
#[derive(Debug)]
struct Loaded {
  text: String,
  document: ManifestDocument,
}

/// Edits `composer.json` in an application directory.
pub struct ManifestEditor<F, R> {
  manifest_path: PathBuf,
  config: ComposerConfig,
  fs: F,
  reporter: R,
  state: Option<Loaded>,
}

impl<F: Filesystem, R: Reporter> ManifestEditor<F, R> {
  /// Create an editor for `base_dir/composer.json`.
  ///
  /// Nothing is read until the manifest is first accessed.
  pub fn new(base_dir: impl AsRef<Path>, config: ComposerConfig, fs: F, reporter: R) -> Self {
    Self {
      manifest_path: base_dir.as_ref().join(MANIFEST_FILENAME),
      config,
      fs,
      reporter,
      state: None,
    }
  }

  pub fn manifest_path(&self) -> &Path {
    &self.manifest_path
  }

  pub fn config(&self) -> &ComposerConfig {
    &self.config
  }

  pub fn is_loaded(&self) -> bool {
    self.state.is_some()
  }

  /// Raw manifest text exactly as last read or written.
  pub fn manifest_text(&mut self) -> Result<&str, ManifestError> {
    Ok(&self.loaded()?.text)
  }

  /// The parsed manifest, including any merges applied so far.
  pub fn manifest(&mut self) -> Result<&Map<String, Value>, ManifestError> {
    Ok(self.loaded()?.document.as_map())
  }

  /// Merge configured runtime packages into `require`.
  pub fn require_dependencies(&mut self) -> Result<usize, ManifestError> {
    let (config, reporter, document) = self.parts()?;
    merge_dependencies(&config.require, REQUIRE_KEY, "Require", reporter, document)
  }

  /// Merge configured development packages into `require-dev`.
  pub fn require_dev_dependencies(&mut self) -> Result<usize, ManifestError> {
    let (config, reporter, document) = self.parts()?;
    merge_dependencies(&config.require_dev, REQUIRE_DEV_KEY, "Require Dev", reporter, document)
  }

  /// Append configured paths to `autoload.classmap`.
  pub fn add_autoload_classmap_entries(&mut self) -> Result<usize, ManifestError> {
    let (config, reporter, document) = self.parts()?;
    let path = [AUTOLOAD_KEY, CLASSMAP_KEY];
    for entry in &config.autoload.classmap {
      reporter.comment(COMPOSER_CATEGORY, &format!("Autoload Classmap adding: {entry}"));
      document.push_entry(&path, Value::String(entry.clone()))?;
      debug!(entry = %entry, "classmap entry appended");
    }
    Ok(config.autoload.classmap.len())
  }

  /// Merge configured prefixes into `autoload.psr-0`.
  pub fn add_autoload_psr0_entries(&mut self) -> Result<usize, ManifestError> {
    let (config, reporter, document) = self.parts()?;
    merge_namespaces(config.autoload.psr_0.iter(), PSR0_KEY, "PSR0", reporter, document)
  }

  /// Merge configured namespaces into `autoload.psr-4`.
  pub fn add_autoload_psr4_entries(&mut self) -> Result<usize, ManifestError> {
    let (config, reporter, document) = self.parts()?;
    merge_namespaces(config.autoload.psr_4.iter(), PSR4_KEY, "PSR4", reporter, document)
  }

  /// Run every merge: require, require-dev, classmap, psr-0, psr-4.
  pub fn merge_all(&mut self) -> Result<MergeSummary, ManifestError> {
    Ok(MergeSummary {
      require: self.require_dependencies()?,
      require_dev: self.require_dev_dependencies()?,
      classmap: self.add_autoload_classmap_entries()?,
      psr_0: self.add_autoload_psr0_entries()?,
      psr_4: self.add_autoload_psr4_entries()?,
    })
  }

  /// Serialize the current document.
  pub fn manifest_json_text(&mut self) -> Result<String, ManifestError> {
    self
      .loaded()?
      .document
      .to_pretty_string()
      .map_err(ManifestError::Serialize)
  }

  /// Write the current document to the manifest path, replacing the file.
  ///
  /// On failure the in-memory document keeps its changes and the call can
  /// be retried.
  pub fn persist(&mut self) -> Result<(), ManifestError> {
    let text = self.manifest_json_text()?;

    self.reporter.comment(
      FOREMAN_CATEGORY,
      &format!("Writing manifest file to {}", self.manifest_path.display()),
    );
    self
      .fs
      .write(&self.manifest_path, &text)
      .map_err(|source| ManifestError::Write {
        path: self.manifest_path.clone(),
        source,
      })?;
    info!(path = %self.manifest_path.display(), bytes = text.len(), "manifest written");

    self.loaded()?.text = text;
    Ok(())
  }

  fn loaded(&mut self) -> Result<&mut Loaded, ManifestError> {
    let loaded = match self.state.take() {
      Some(loaded) => loaded,
      None => self.load()?,
    };
    Ok(self.state.insert(loaded))
  }

  /// Split borrows for the merge operations.
  fn parts(&mut self) -> Result<(&ComposerConfig, &R, &mut ManifestDocument), ManifestError> {
    let loaded = match self.state.take() {
      Some(loaded) => loaded,
      None => self.load()?,
    };
    let Self {
      config,
      reporter,
      state,
      ..
    } = self;
    Ok((&*config, &*reporter, &mut state.insert(loaded).document))
  }

  fn load(&self) -> Result<Loaded, ManifestError> {
    let path = &self.manifest_path;
    info!(path = %path.display(), "reading manifest");

    let text = self.fs.read(path).map_err(|source| ManifestError::Read {
      path: path.clone(),
      source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
      path: path.clone(),
      source,
    })?;
    let Value::Object(root) = value else {
      return Err(ManifestError::NotAnObject { path: path.clone() });
    };

    Ok(Loaded {
      text,
      document: ManifestDocument::from(root),
    })
  }
}

fn merge_dependencies<R: Reporter>(
  dependencies: &[Dependency],
  section: &str,
  label: &str,
  reporter: &R,
  document: &mut ManifestDocument,
) -> Result<usize, ManifestError> {
  for dep in dependencies {
    reporter.comment(COMPOSER_CATEGORY, &format!("{label}: {} {}", dep.package, dep.version));
    document.set_entry(&[section], &dep.package, Value::String(dep.version.clone()))?;
    debug!(section, package = %dep.package, version = %dep.version, "dependency set");
  }
  Ok(dependencies.len())
}

fn merge_namespaces<'a, R: Reporter>(
  entries: impl Iterator<Item = (&'a String, &'a String)>,
  section: &str,
  label: &str,
  reporter: &R,
  document: &mut ManifestDocument,
) -> Result<usize, ManifestError> {
  let path = [AUTOLOAD_KEY, section];
  let mut merged = 0;
  for (name, dir) in entries {
    reporter.comment(COMPOSER_CATEGORY, &format!("Adding {label} entry {name} => {dir}"));
    document.set_entry(&path, name, Value::String(dir.clone()))?;
    debug!(section, name = %name, path = %dir, "autoload entry set");
    merged += 1;
  }
  Ok(merged)
}
