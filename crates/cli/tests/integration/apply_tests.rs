use predicates::prelude::*;
use serde_json::{Value, json};

use super::common::{TestEnv, fixture_content};

#[test]
fn apply_merges_and_writes_manifest() {
  let env = TestEnv::laravel();
  let config = env.write_config("foreman.json");

  env
    .foreman_cmd()
    .arg("apply")
    .arg(env.app_path())
    .arg("--config")
    .arg(&config)
    .assert()
    .success()
    .stdout(predicate::str::contains("Require: laravel/framework 4.1.*"))
    .stdout(predicate::str::contains("Require Dev: fzaninotto/faker 1.3.*"))
    .stdout(predicate::str::contains("Adding PSR4 entry Foo\\Bar\\ => src/Foo/Bar/"))
    .stdout(predicate::str::contains("Writing manifest file to"))
    .stdout(predicate::str::contains("Manifest updated!"));

  let manifest: Value = serde_json::from_str(&env.manifest()).unwrap();
  assert_eq!(manifest["require"]["nesbot/Carbon"], json!("*"));
  assert_eq!(manifest["require-dev"]["mockery/mockery"], json!("dev-master@dev"));
  assert_eq!(manifest["autoload"]["classmap"].as_array().unwrap().len(), 13);
  assert_eq!(manifest["config"], json!({ "preferred-install": "dist" }));
}

#[test]
fn apply_reports_in_merge_order() {
  let env = TestEnv::laravel();
  let config = env.write_config("foreman.json");

  let output = env
    .foreman_cmd()
    .arg("apply")
    .arg(env.app_path())
    .arg("-c")
    .arg(&config)
    .output()
    .unwrap();
  assert!(output.status.success());

  let stdout = String::from_utf8(output.stdout).unwrap();
  let position = |needle: &str| stdout.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
  assert!(position("Require: laravel/framework") < position("Require: nesbot/Carbon"));
  assert!(position("Require: doctrine/inflector") < position("Require Dev: mockery/mockery"));
  assert!(position("Require Dev: squizlabs/php_codesniffer") < position("Autoload Classmap adding: app/lib"));
  assert!(position("Adding PSR0 entry Acme") < position("Adding PSR4 entry"));
  assert!(position("Adding PSR4 entry") < position("Writing manifest file to"));
}

#[test]
fn apply_dry_run_leaves_manifest_untouched() {
  let env = TestEnv::laravel();
  let config = env.write_config("foreman.json");

  env
    .foreman_cmd()
    .arg("apply")
    .arg(env.app_path())
    .arg("--config")
    .arg(&config)
    .arg("--dry-run")
    .assert()
    .success()
    .stdout(predicate::str::contains("Dry run"))
    .stdout(predicate::str::contains("\"squizlabs/php_codesniffer\": \"*\""))
    .stdout(predicate::str::contains("Writing manifest file").not());

  assert_eq!(env.manifest(), fixture_content("composer.json"));
}

#[test]
fn apply_json_output_is_valid() {
  let env = TestEnv::laravel();
  let config = env.write_config("foreman.json");

  let output = env
    .foreman_cmd()
    .arg("apply")
    .arg(env.app_path())
    .arg("--config")
    .arg(&config)
    .args(["-o", "json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let report: Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["written"], json!(true));
  assert_eq!(
    report["merged"],
    json!({ "require": 3, "require_dev": 3, "classmap": 7, "psr_0": 1, "psr_4": 1 })
  );
  assert!(report.get("manifest").is_none());
  assert!(report["manifest_path"].as_str().unwrap().ends_with("composer.json"));
}

#[test]
fn apply_json_dry_run_includes_manifest() {
  let env = TestEnv::laravel();
  let config = env.write_config("foreman.json");

  let output = env
    .foreman_cmd()
    .arg("apply")
    .arg(env.app_path())
    .arg("--config")
    .arg(&config)
    .args(["--dry-run", "-o", "json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let report: Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["written"], json!(false));
  assert_eq!(report["manifest"]["autoload"]["psr-0"], json!({ "Acme": "app/lib" }));
  assert_eq!(env.manifest(), fixture_content("composer.json"));
}

#[test]
fn apply_finds_config_in_current_directory() {
  let env = TestEnv::laravel();
  env.write_config("foreman.json");

  env
    .foreman_cmd()
    .args(["apply", "app"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Require: doctrine/inflector 1.0.*@dev"));
}

#[test]
fn apply_finds_config_from_environment() {
  let env = TestEnv::laravel();
  let config = env.write_config("elsewhere/custom.json");

  env
    .foreman_cmd()
    .env("FOREMAN_CONFIG", &config)
    .args(["apply", "app"])
    .assert()
    .success();

  assert!(env.manifest().contains("\"require-dev\""));
}

#[test]
fn apply_finds_config_in_user_config_dir() {
  let env = TestEnv::laravel();
  let user_config = env.config_home().join("foreman").join("foreman.json");
  std::fs::create_dir_all(user_config.parent().unwrap()).unwrap();
  std::fs::write(&user_config, r#"{ "autoload": { "psr-4": { "App\\": "app/" } } }"#).unwrap();

  env
    .foreman_cmd()
    .args(["apply", "app"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Adding PSR4 entry App\\ => app/"));
}

#[test]
fn apply_without_config_fails() {
  let env = TestEnv::laravel();

  env
    .foreman_cmd()
    .args(["apply", "app"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("config file not found"));

  assert_eq!(env.manifest(), fixture_content("composer.json"));
}

#[test]
fn apply_without_manifest_fails() {
  let env = TestEnv::empty();
  let config = env.write_config("foreman.json");

  env
    .foreman_cmd()
    .arg("apply")
    .arg(env.app_path())
    .arg("--config")
    .arg(&config)
    .assert()
    .failure()
    .stderr(predicate::str::contains("composer.json"));

  assert!(!env.app_path().join("composer.json").exists());
}

#[test]
fn apply_with_malformed_manifest_fails() {
  let env = TestEnv::empty();
  env.write_file("app/composer.json", "{ \"name\": ");
  let config = env.write_config("foreman.json");

  env
    .foreman_cmd()
    .arg("apply")
    .arg(env.app_path())
    .arg("--config")
    .arg(&config)
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to parse manifest"));
}

#[test]
fn apply_to_missing_directory_fails() {
  let env = TestEnv::empty();
  let config = env.write_config("foreman.json");

  env
    .foreman_cmd()
    .args(["apply", "does-not-exist", "--config"])
    .arg(&config)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Application directory not found"));
}
