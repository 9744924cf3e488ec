//! Enable/disable transitions and their guards.

use crate::{
  directive::{
    DIRECTIVE_KEYWORD,
    INACTIVE_MARKER,
  },
  error::TransitionError,
  lines::LineStore,
  registry::Registry,
};

/// Flip one registry entry to the target state.
///
/// Guards, in order:
///
/// 1. Duplicate guard (enable only): no *other* entry with the same name may
///    already be active.
/// 2. Drift guard: the live line must start with the inactive marker when
///    enabling, and with the directive keyword when disabling. A line that
///    drifted from the in-memory model aborts the transition untouched.
///
/// On success exactly one line's leading marker changes; line count, line
/// order and every other line are untouched, and the entry's `enabled` flag
/// is updated to match.
pub fn toggle(
  store: &mut LineStore,
  registry: &mut Registry,
  id: usize,
  target: bool,
) -> Result<(), TransitionError> {
  let (name, line) = match registry.get(id) {
    Some(entry) => (entry.name.clone(), entry.line),
    None => return Err(TransitionError::UnknownEntry { id }),
  };

  if target && registry.has_active_named(&name, id) {
    return Err(TransitionError::DuplicateActiveName { name });
  }

  let live = store
    .line(line)
    .ok_or(TransitionError::StateDrift { line })?;

  let new_text = if target {
    match live.strip_prefix(INACTIVE_MARKER) {
      Some(rest) => rest.to_owned(),
      None => return Err(TransitionError::StateDrift { line }),
    }
  } else {
    if !live.starts_with(DIRECTIVE_KEYWORD) {
      return Err(TransitionError::StateDrift { line });
    }
    format!("{INACTIVE_MARKER}{live}")
  };

  log::debug!("line {line}: {live:?} -> {new_text:?}");
  store.replace(line, new_text);

  if let Some(entry) = registry.get_mut(id) {
    entry.enabled = target;
  }

  Ok(())
}
