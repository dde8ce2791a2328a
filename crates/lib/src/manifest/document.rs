//! Ordered, schema-less view of a `composer.json` document.
//!
//! Keys keep their insertion order (serde_json is built with
//! `preserve_order`), so untouched sections survive a load/save cycle in
//! place and new keys are appended at the end of their mapping.

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use super::ManifestError;

/// Indentation used by composer and hand-written manifests.
const INDENT: &[u8] = b"    ";

/// A manifest held as an ordered JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestDocument {
  root: Map<String, Value>,
}

impl ManifestDocument {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn as_map(&self) -> &Map<String, Value> {
    &self.root
  }

  pub fn into_map(self) -> Map<String, Value> {
    self.root
  }

  /// Look up the value at a key path, e.g. `["autoload", "psr-4"]`.
  pub fn get(&self, path: &[&str]) -> Option<&Value> {
    let (first, rest) = path.split_first()?;
    rest
      .iter()
      .try_fold(self.root.get(*first)?, |value, key| value.as_object()?.get(*key))
  }

  /// Get the mapping at `path`, creating any missing mappings along the way.
  ///
  /// `null` and `[]` count as vacant and are replaced by `{}`. Any other
  /// non-object value fails with [`ManifestError::UnexpectedType`] and leaves
  /// the document untouched.
  pub fn mapping_mut(&mut self, path: &[&str]) -> Result<&mut Map<String, Value>, ManifestError> {
    let mut map = &mut self.root;
    for (depth, key) in path.iter().enumerate() {
      let slot = map.entry(*key).or_insert(Value::Null);
      if is_vacant_mapping(slot) {
        *slot = Value::Object(Map::new());
      }
      map = match slot {
        Value::Object(inner) => inner,
        _ => return Err(unexpected(&path[..=depth], "an object")),
      };
    }
    Ok(map)
  }

  /// Get the list at `path`, creating it (and its parents) if missing.
  pub fn list_mut(&mut self, path: &[&str]) -> Result<&mut Vec<Value>, ManifestError> {
    let Some((last, parents)) = path.split_last() else {
      return Err(unexpected(path, "a list"));
    };
    let slot = self.mapping_mut(parents)?.entry(*last).or_insert(Value::Null);
    if slot.is_null() {
      *slot = Value::Array(Vec::new());
    }
    match slot {
      Value::Array(list) => Ok(list),
      _ => Err(unexpected(path, "a list")),
    }
  }

  /// Insert or overwrite `key` in the mapping at `path`.
  ///
  /// An existing key keeps its position; a new key is appended.
  pub fn set_entry(&mut self, path: &[&str], key: &str, value: Value) -> Result<(), ManifestError> {
    self.mapping_mut(path)?.insert(key.to_string(), value);
    Ok(())
  }

  /// Append `value` to the list at `path`. Duplicates are kept.
  pub fn push_entry(&mut self, path: &[&str], value: Value) -> Result<(), ManifestError> {
    self.list_mut(path)?.push(value);
    Ok(())
  }

  /// Serialize with four-space indentation and no trailing newline.
  ///
  /// Slashes and non-ASCII characters are written as-is.
  pub fn to_pretty_string(&self) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    self.root.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
  }
}

impl From<Map<String, Value>> for ManifestDocument {
  fn from(root: Map<String, Value>) -> Self {
    Self { root }
  }
}

fn is_vacant_mapping(value: &Value) -> bool {
  match value {
    Value::Null => true,
    Value::Array(items) => items.is_empty(),
    _ => false,
  }
}

fn unexpected(path: &[&str], expected: &'static str) -> ManifestError {
  ManifestError::UnexpectedType {
    key: path.join("."),
    expected,
  }
}
