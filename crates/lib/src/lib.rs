//! foreman-lib: `composer.json` editing for application scaffolding
//!
//! This crate provides the pieces the `foreman` CLI is built from:
//! - `ManifestEditor`: merges requirements and autoload entries into a manifest
//! - `ComposerConfig`: what to merge, loaded from `foreman.json`
//! - `Filesystem` / `Reporter`: the editor's I/O and progress collaborators

pub mod config;
pub mod consts;
pub mod fs;
pub mod manifest;
pub mod paths;
pub mod report;
pub mod util;

pub use config::{AutoloadConfig, ComposerConfig, ConfigError, Dependency, find_config};
pub use fs::{Filesystem, LocalFilesystem, MemoryFilesystem};
pub use manifest::{ManifestDocument, ManifestEditor, ManifestError, MergeSummary};
pub use report::{RecordingReporter, Reporter, TracingReporter};
