//! Fuzzy name resolution over registry entries.
//!
//! Matching is powered by the [`nucleo`] crate and tuned to be strict: a
//! query should land on the module the operator had in mind, not serve as a
//! broad free-text search. A substring pass runs first (near-exact, smart
//! case); only when it finds nothing does a fuzzy pass run, and that pass
//! keeps just the candidates scoring close to the best hit, which tolerates
//! minor typos without dragging in unrelated names.
//!
//! Resolution is deterministic: hits are ranked by score descending with
//! ties broken by registry order, so the same query over the same candidate
//! set always yields the same outcome.

use std::cell::RefCell;

use nucleo::{
  Config,
  Matcher,
  Utf32Str,
  pattern::{
    Atom,
    AtomKind,
    CaseMatching,
    Normalization,
  },
};

use crate::registry::DirectiveEntry;

/// Outcome of a name lookup against a candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
  /// Nothing passed the threshold; the caller reports failure and aborts.
  NoMatch,

  /// Exactly one candidate passed; auto-selected, no interaction needed.
  Single(DirectiveEntry),

  /// Several candidates passed, ranked; the caller must disambiguate.
  Multiple(Vec<DirectiveEntry>),
}

thread_local! {
  static MATCHER: RefCell<Matcher> = RefCell::new(Matcher::default());
}

/// Resolve a free-text query against the candidates.
///
/// An empty query matches every candidate in registry order, which feeds
/// straight into the disambiguation prompt.
pub fn resolve(query: &str, candidates: &[DirectiveEntry]) -> Resolution {
  let mut hits = rank(query, candidates);

  match hits.len() {
    0 => Resolution::NoMatch,
    1 => Resolution::Single(hits.remove(0)),
    _ => Resolution::Multiple(hits),
  }
}

/// Candidates passing the threshold, best match first.
pub fn rank(query: &str, candidates: &[DirectiveEntry]) -> Vec<DirectiveEntry> {
  if query.is_empty() {
    return candidates.to_vec();
  }

  let mut hits = MATCHER.with(|matcher| {
    let mut matcher = matcher.borrow_mut();
    matcher.config = Config::DEFAULT;

    let hits = score_names(&mut matcher, query, candidates, AtomKind::Substring);
    if !hits.is_empty() {
      return hits;
    }

    let hits = score_names(&mut matcher, query, candidates, AtomKind::Fuzzy);
    let Some(best) = hits.iter().map(|(_, score)| *score).max() else {
      return hits;
    };

    // Keep only near-best fuzzy hits; distant subsequence matches are not
    // what a strict resolver should surface.
    let floor = best - best / 3;
    hits
      .into_iter()
      .filter(|(_, score)| *score >= floor)
      .collect()
  });

  hits.sort_by(|(a, sa), (b, sb)| sb.cmp(sa).then(a.id.cmp(&b.id)));
  hits.into_iter().map(|(entry, _)| entry).collect()
}

fn score_names(
  matcher: &mut Matcher,
  query: &str,
  candidates: &[DirectiveEntry],
  kind: AtomKind,
) -> Vec<(DirectiveEntry, u16)> {
  let pattern = Atom::new(
    query,
    CaseMatching::Smart,
    Normalization::Smart,
    kind,
    false,
  );

  let mut buf = Vec::new();
  candidates
    .iter()
    .filter_map(|entry| {
      pattern
        .score(Utf32Str::new(&entry.name, &mut buf), matcher)
        .map(|score| (entry.clone(), score))
    })
    .collect()
}
