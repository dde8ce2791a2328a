//! Filesystem access for the manifest editor.
//!
//! The editor only ever needs to read and write whole text files, so the
//! [`Filesystem`] trait is kept to those two calls. [`LocalFilesystem`] goes
//! straight to disk; [`MemoryFilesystem`] keeps files in memory for tests and
//! dry runs.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Whole-file text access.
pub trait Filesystem {
  /// Read the file at `path` as UTF-8 text.
  fn read(&self, path: &Path) -> io::Result<String>;

  /// Replace the contents of the file at `path`, creating it if needed.
  fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

impl<T: Filesystem + ?Sized> Filesystem for &T {
  fn read(&self, path: &Path) -> io::Result<String> {
    (**self).read(path)
  }

  fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
    (**self).write(path, contents)
  }
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
  fn read(&self, path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
  }

  fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
    fs::write(path, contents)
  }
}

/// An in-memory filesystem.
///
/// Files live in a map keyed by path. Writes can be made to fail with
/// [`MemoryFilesystem::set_read_only`].
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
  files: RefCell<BTreeMap<PathBuf, String>>,
  writes: Cell<usize>,
  read_only: Cell<bool>,
}

impl MemoryFilesystem {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style [`MemoryFilesystem::insert`].
  pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
    self.insert(path, contents);
    self
  }

  /// Place a file without counting it as a write.
  pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
    self.files.borrow_mut().insert(path.into(), contents.into());
  }

  /// Current contents of the file at `path`.
  pub fn contents(&self, path: &Path) -> Option<String> {
    self.files.borrow().get(path).cloned()
  }

  /// Number of successful [`Filesystem::write`] calls.
  pub fn write_count(&self) -> usize {
    self.writes.get()
  }

  /// Make subsequent writes fail with `PermissionDenied`.
  pub fn set_read_only(&self, read_only: bool) {
    self.read_only.set(read_only);
  }
}

impl Filesystem for MemoryFilesystem {
  fn read(&self, path: &Path) -> io::Result<String> {
    self.contents(path).ok_or_else(|| {
      io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: no such file", path.display()),
      )
    })
  }

  fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
    if self.read_only.get() {
      return Err(io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("{}: read-only filesystem", path.display()),
      ));
    }
    self.insert(path, contents);
    self.writes.set(self.writes.get() + 1);
    Ok(())
  }
}
