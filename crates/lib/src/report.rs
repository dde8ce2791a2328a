//! Progress reporting.
//!
//! The editor announces every item it merges through a [`Reporter`] before
//! mutating the manifest, so the order of comments always matches the order
//! of changes.

use std::cell::RefCell;

use tracing::info;

/// Category used for manifest merge comments.
pub const COMPOSER_CATEGORY: &str = "Composer";

/// Category used for file-level comments (writing the manifest).
pub const FOREMAN_CATEGORY: &str = "Foreman";

/// A sink for progress messages.
///
/// Reporting never fails the operation it annotates.
pub trait Reporter {
  fn comment(&self, category: &str, message: &str);
}

impl<T: Reporter + ?Sized> Reporter for &T {
  fn comment(&self, category: &str, message: &str) {
    (**self).comment(category, message)
  }
}

impl<T: Reporter + ?Sized> Reporter for Box<T> {
  fn comment(&self, category: &str, message: &str) {
    (**self).comment(category, message)
  }
}

/// Forwards comments to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
  fn comment(&self, category: &str, message: &str) {
    info!(category, "{message}");
  }
}

/// A single recorded comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
  pub category: String,
  pub message: String,
}

impl Comment {
  pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      category: category.into(),
      message: message.into(),
    }
  }
}

/// Records every comment in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
  comments: RefCell<Vec<Comment>>,
}

impl RecordingReporter {
  pub fn new() -> Self {
    Self::default()
  }

  /// All comments received so far, oldest first.
  pub fn comments(&self) -> Vec<Comment> {
    self.comments.borrow().clone()
  }

  /// Messages received under `category`, oldest first.
  pub fn messages(&self, category: &str) -> Vec<String> {
    self
      .comments
      .borrow()
      .iter()
      .filter(|c| c.category == category)
      .map(|c| c.message.clone())
      .collect()
  }

  pub fn len(&self) -> usize {
    self.comments.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.comments.borrow().is_empty()
  }

  pub fn clear(&self) {
    self.comments.borrow_mut().clear();
  }
}

impl Reporter for RecordingReporter {
  fn comment(&self, category: &str, message: &str) {
    self.comments.borrow_mut().push(Comment::new(category, message));
  }
}
