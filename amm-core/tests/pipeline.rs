//! End-to-end pipeline tests: load -> scan -> resolve -> toggle -> commit.

use std::fs;

use amm_core::{
  LineStore,
  Registry,
  Resolution,
  TransitionError,
  fuzzy,
  persist,
  transition,
};

const CONF: &str = "\
# Apache sample
LoadModule foo_module modules/mod_foo.so
#LoadModule bar_module modules/mod_bar.so
Listen 8080
#LoadModule baz_module modules/mod_baz.so
";

#[test]
fn enable_then_commit_round_trips_unrelated_lines() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("httpd.conf");
  fs::write(&path, CONF).unwrap();

  let text = fs::read_to_string(&path).unwrap();
  let mut store = LineStore::new(&text);
  let mut registry = Registry::scan(&store);

  let target = match fuzzy::resolve("bar", &registry.disabled()) {
    Resolution::Single(entry) => entry,
    other => panic!("expected single match, got {other:?}"),
  };

  transition::toggle(&mut store, &mut registry, target.id, true).unwrap();
  persist::commit(&store, &path).unwrap();

  let after = fs::read_to_string(&path).unwrap();
  assert_eq!(
    after,
    "\
# Apache sample
LoadModule foo_module modules/mod_foo.so
LoadModule bar_module modules/mod_bar.so
Listen 8080
#LoadModule baz_module modules/mod_baz.so
"
  );
}

#[test]
fn toggle_there_and_back_is_byte_identical() {
  let mut store = LineStore::new(CONF);
  let mut registry = Registry::scan(&store);

  transition::toggle(&mut store, &mut registry, 0, false).unwrap();
  transition::toggle(&mut store, &mut registry, 0, true).unwrap();

  assert_eq!(store.serialize(), CONF);
}

#[test]
fn duplicate_active_name_leaves_the_file_unchanged() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("httpd.conf");
  let conf = "LoadModule foo_module a.so\n#LoadModule foo_module b.so\n";
  fs::write(&path, conf).unwrap();

  let text = fs::read_to_string(&path).unwrap();
  let mut store = LineStore::new(&text);
  let mut registry = Registry::scan(&store);

  let err = transition::toggle(&mut store, &mut registry, 1, true).unwrap_err();
  assert!(matches!(err, TransitionError::DuplicateActiveName { .. }));

  // Nothing was mutated, so nothing gets committed.
  assert_eq!(store.serialize(), conf);
  assert_eq!(fs::read_to_string(&path).unwrap(), conf);
}

#[test]
fn switch_is_not_transactional() {
  // Disabling the first half sticks even when enabling the second half
  // fails its duplicate guard.
  let conf = "\
LoadModule foo_module a.so
#LoadModule bar_module b.so
LoadModule bar_module c.so
";
  let mut store = LineStore::new(conf);
  let mut registry = Registry::scan(&store);

  let old = match fuzzy::resolve("foo", &registry.enabled()) {
    Resolution::Single(entry) => entry,
    other => panic!("expected single match, got {other:?}"),
  };
  let disabled = registry.disabled();

  transition::toggle(&mut store, &mut registry, old.id, false).unwrap();

  let new = match fuzzy::resolve("bar", &disabled) {
    Resolution::Single(entry) => entry,
    other => panic!("expected single match, got {other:?}"),
  };
  let err = transition::toggle(&mut store, &mut registry, new.id, true).unwrap_err();
  assert!(matches!(err, TransitionError::DuplicateActiveName { .. }));

  assert_eq!(
    store.serialize(),
    "\
#LoadModule foo_module a.so
#LoadModule bar_module b.so
LoadModule bar_module c.so
"
  );
}

#[test]
fn registry_is_rebuilt_from_scratch_per_run() {
  let mut store = LineStore::new(CONF);
  let mut registry = Registry::scan(&store);
  transition::toggle(&mut store, &mut registry, 0, false).unwrap();

  // A second "run" over the committed text sees the new state with fresh
  // ids assigned purely by parse order.
  let rescan = Registry::scan(&LineStore::new(&store.serialize()));
  assert_eq!(rescan.len(), registry.len());
  assert!(!rescan.get(0).unwrap().enabled);
  assert_eq!(rescan.get(0).unwrap().id, 0);
}
