//! Implementation of the `foreman show` command.

use std::path::Path;

use anyhow::Result;
use serde_json::Map;

use foreman_lib::manifest::{AUTOLOAD_KEY, REQUIRE_DEV_KEY, REQUIRE_KEY};
use foreman_lib::{ComposerConfig, LocalFilesystem, ManifestEditor, TracingReporter};

use crate::output::{OutputFormat, print_json};

/// Print the manifest re-serialized, or just its dependency and autoload
/// sections as JSON.
pub fn cmd_show(app_dir: &Path, output: OutputFormat) -> Result<()> {
  let mut editor = ManifestEditor::new(app_dir, ComposerConfig::default(), LocalFilesystem, TracingReporter);

  if output.is_json() {
    let manifest = editor.manifest()?;
    let sections: Map<_, _> = [REQUIRE_KEY, REQUIRE_DEV_KEY, AUTOLOAD_KEY]
      .into_iter()
      .filter_map(|key| manifest.get(key).map(|value| (key.to_string(), value.clone())))
      .collect();
    print_json(&sections)?;
  } else {
    println!("{}", editor.manifest_json_text()?);
  }

  Ok(())
}
