//! Implementation of the `foreman apply` command.
//!
//! Loads the editor configuration and merges it into the application's
//! `composer.json`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use foreman_lib::report::Reporter;
use foreman_lib::{ComposerConfig, LocalFilesystem, ManifestEditor, MergeSummary, TracingReporter, find_config};

use crate::output::{ConsoleReporter, OutputFormat, print_info, print_json, print_stat, print_success};

#[derive(Debug, Serialize)]
struct ApplyReport {
  manifest_path: String,
  config_path: String,
  written: bool,
  merged: MergeSummary,
  #[serde(skip_serializing_if = "Option::is_none")]
  manifest: Option<Map<String, Value>>,
}

/// Execute the apply command.
///
/// Runs every merge (require, require-dev, classmap, psr-0, psr-4) and then
/// writes the manifest, unless `dry_run` is set.
///
/// In JSON mode progress goes to the log instead of stdout, so stdout holds
/// only the report.
pub fn cmd_apply(app_dir: &Path, config: Option<&Path>, dry_run: bool, output: OutputFormat) -> Result<()> {
  let app_dir = dunce::canonicalize(app_dir)
    .with_context(|| format!("Application directory not found: {}", app_dir.display()))?;

  let config_path = find_config(config)?;
  let composer_config = ComposerConfig::load(&config_path)?;
  info!(config = %config_path.display(), "loaded configuration");

  let reporter: Box<dyn Reporter> = if output.is_json() {
    Box::new(TracingReporter)
  } else {
    Box::new(ConsoleReporter)
  };
  let mut editor = ManifestEditor::new(&app_dir, composer_config, LocalFilesystem, reporter);

  let merged = editor.merge_all().context("Failed to merge configuration")?;
  if !dry_run {
    editor.persist().context("Failed to write manifest")?;
  }

  if output.is_json() {
    let manifest = if dry_run { Some(editor.manifest()?.clone()) } else { None };
    return print_json(&ApplyReport {
      manifest_path: editor.manifest_path().display().to_string(),
      config_path: config_path.display().to_string(),
      written: !dry_run,
      merged,
      manifest,
    });
  }

  println!();
  if dry_run {
    print_info("Dry run - manifest not written");
    println!("{}", editor.manifest_json_text()?);
    println!();
  } else {
    print_success("Manifest updated!");
  }
  print_stat("Manifest", &editor.manifest_path().display().to_string());
  print_stat("Config", &config_path.display().to_string());
  print_stat("Require", &merged.require.to_string());
  print_stat("Require dev", &merged.require_dev.to_string());
  print_stat("Classmap", &merged.classmap.to_string());
  print_stat("PSR-0", &merged.psr_0.to_string());
  print_stat("PSR-4", &merged.psr_4.to_string());

  Ok(())
}
