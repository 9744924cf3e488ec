//! Core model for toggling `LoadModule` directives in an Apache config file.
//!
//! The file is treated as a positional database: every recognized directive
//! is addressed by its exact source line, mutations rewrite the content of
//! that one line and nothing else, and every unrelated line round-trips
//! byte-for-byte. The registry of directives is rebuilt from scratch on each
//! run; entry ids are only meaningful against the build that produced them.

pub mod directive;
pub mod error;
pub mod fuzzy;
pub mod lines;
pub mod persist;
pub mod registry;
pub mod transition;

pub use directive::{
  DIRECTIVE_KEYWORD,
  INACTIVE_MARKER,
};
pub use error::{
  PersistError,
  TransitionError,
};
pub use fuzzy::Resolution;
pub use lines::LineStore;
pub use registry::{
  DirectiveEntry,
  Registry,
};
