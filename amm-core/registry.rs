//! The in-memory, ordered collection of directives parsed from one file.

use crate::{
  directive,
  lines::LineStore,
};

/// One recognized directive occurrence in the file.
///
/// `id` is an index into the registry build that produced it and must never
/// be persisted or compared across two different scans. `line` is the
/// 1-based source line, which stays valid because the line count never
/// changes within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveEntry {
  pub id:      usize,
  pub name:    String,
  pub path:    String,
  pub enabled: bool,
  pub line:    usize,
}

/// All directives found in one scan of the line store, in file order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
  entries: Vec<DirectiveEntry>,
}

impl Registry {
  /// Build a fresh registry from the store's current text.
  pub fn scan(store: &LineStore) -> Self {
    let mut entries = Vec::new();

    for (idx, line) in store.iter().enumerate() {
      if let Some(parsed) = directive::parse_line(line) {
        entries.push(DirectiveEntry {
          id:      entries.len(),
          name:    parsed.name.to_owned(),
          path:    parsed.path.to_owned(),
          enabled: parsed.enabled,
          line:    idx + 1,
        });
      }
    }

    log::debug!("scanned {} directive(s)", entries.len());
    Self { entries }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn entries(&self) -> &[DirectiveEntry] {
    &self.entries
  }

  pub fn get(&self, id: usize) -> Option<&DirectiveEntry> {
    self.entries.get(id)
  }

  pub fn get_mut(&mut self, id: usize) -> Option<&mut DirectiveEntry> {
    self.entries.get_mut(id)
  }

  /// Currently active entries, cloned out as resolver candidates.
  pub fn enabled(&self) -> Vec<DirectiveEntry> {
    self
      .entries
      .iter()
      .filter(|entry| entry.enabled)
      .cloned()
      .collect()
  }

  /// Currently inactive entries, cloned out as resolver candidates.
  pub fn disabled(&self) -> Vec<DirectiveEntry> {
    self
      .entries
      .iter()
      .filter(|entry| !entry.enabled)
      .cloned()
      .collect()
  }

  /// Whether some other entry with this name is already active.
  ///
  /// Deliberately only consulted on the enable path: nothing stops two
  /// entries with the same name from both being disabled.
  pub fn has_active_named(&self, name: &str, excluding: usize) -> bool {
    self
      .entries
      .iter()
      .any(|entry| entry.id != excluding && entry.enabled && entry.name == name)
  }
}
