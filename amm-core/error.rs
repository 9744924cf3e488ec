use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while toggling a directive. None of these mutate the
/// store: a transition either completes fully or leaves everything as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
  /// Enabling would leave two simultaneously active directives with the
  /// same name.
  #[error("there is already an enabled module named {name}")]
  DuplicateActiveName { name: String },

  /// The live line content no longer matches the state the registry
  /// expects, or the state already matches the target.
  #[error("line {line} no longer matches the expected directive state")]
  StateDrift { line: usize },

  /// The entry id does not belong to the current registry build.
  #[error("no directive entry with id {id} in this registry")]
  UnknownEntry { id: usize },
}

/// Writing the serialized text back to the config file failed.
///
/// Fatal for the whole invocation: the in-memory model and the on-disk file
/// may now diverge, so no further mutation should be attempted this run.
#[derive(Debug, Error)]
#[error("failed to write {}", path.display())]
pub struct PersistError {
  pub path:   PathBuf,
  #[source]
  pub source: std::io::Error,
}
