//! Editing `composer.json` manifests.
//!
//! [`ManifestEditor`] merges package requirements and autoload entries from a
//! [`ComposerConfig`](crate::config::ComposerConfig) into an application's
//! manifest. Unknown keys are carried through untouched by
//! [`ManifestDocument`].

mod document;
mod editor;
mod error;

pub use document::ManifestDocument;
pub use editor::*;
pub use error::ManifestError;
