//! Writing the line store back to the authoritative file.

use std::{
  fs,
  path::Path,
};

use crate::{
  error::PersistError,
  lines::LineStore,
};

/// Serialize the store and write it to the backing file.
///
/// Callers treat a failure here as fatal for the invocation: once a write
/// has been attempted and failed, the in-memory model can no longer be
/// trusted to mirror the disk.
pub fn commit(store: &LineStore, path: &Path) -> Result<(), PersistError> {
  fs::write(path, store.serialize()).map_err(|source| {
    PersistError {
      path: path.to_owned(),
      source,
    }
  })
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn commit_writes_the_serialized_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("httpd.conf");

    let store = LineStore::new("LoadModule a x.so\n# noise\n");
    commit(&store, &path).unwrap();

    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "LoadModule a x.so\n# noise\n"
    );
  }

  #[test]
  fn commit_surfaces_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("httpd.conf");

    let store = LineStore::new("LoadModule a x.so\n");
    let err = commit(&store, &path).unwrap_err();

    assert_eq!(err.path, path);
  }
}
