//! Manifests shaped the way PHP tooling writes them.

use foreman_lib::{ComposerConfig, LocalFilesystem, ManifestEditor, RecordingReporter};
use serde_json::json;

use super::common::AppDir;

const PHP_WRITTEN: &str = r#"{
    "name": "acme/site",
    "require": [],
    "require-dev": [],
    "autoload": {
        "psr-0": [],
        "classmap": [
            "database"
        ]
    },
    "extra": {
        "laravel": {
            "dont-discover": []
        }
    }
}"#;

#[test]
fn empty_php_arrays_become_mappings() {
  let app = AppDir::with_manifest(PHP_WRITTEN);
  let config = ComposerConfig::from_json_str(
    r#"{
      "require": [{ "package": "laravel/framework", "version": "4.2.*" }],
      "require-dev": [{ "package": "phpunit/phpunit", "version": "~4.0" }],
      "autoload": { "psr-0": { "Acme": "app/lib" }, "classmap": ["database", "app/models"] }
    }"#,
  )
  .unwrap();
  let mut editor = ManifestEditor::new(app.path(), config, LocalFilesystem, RecordingReporter::new());

  editor.merge_all().unwrap();
  let manifest = editor.manifest().unwrap();

  assert_eq!(manifest["require"], json!({ "laravel/framework": "4.2.*" }));
  assert_eq!(manifest["require-dev"], json!({ "phpunit/phpunit": "~4.0" }));
  assert_eq!(manifest["autoload"]["psr-0"], json!({ "Acme": "app/lib" }));
  assert_eq!(manifest["autoload"]["classmap"], json!(["database", "database", "app/models"]));
  assert_eq!(manifest["extra"], json!({ "laravel": { "dont-discover": [] } }));
}

#[test]
fn garbage_versions_are_stored_verbatim() {
  let app = AppDir::with_manifest("{}");
  let config = ComposerConfig::from_json_str(
    r#"{ "require": [{ "package": "not a package", "version": ">>> not a constraint <<<" }] }"#,
  )
  .unwrap();
  let mut editor = ManifestEditor::new(app.path(), config, LocalFilesystem, RecordingReporter::new());

  editor.require_dependencies().unwrap();
  editor.persist().unwrap();

  assert_eq!(
    app.read_manifest(),
    "{\n    \"require\": {\n        \"not a package\": \">>> not a constraint <<<\"\n    }\n}"
  );
}
