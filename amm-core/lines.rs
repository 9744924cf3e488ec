//! Line-addressed storage for the configuration text.
//!
//! A [`LineStore`] is built once per invocation by splitting the loaded file
//! content on its detected line ending, mutated in place by the transition
//! engine, and serialized back when committing. Splitting keeps the final
//! empty segment, so `LineStore::new(t).serialize() == t` for any input.

/// The two line endings an Apache config file realistically carries.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum LineEnding {
  /// CarriageReturn followed by LineFeed.
  Crlf,

  /// U+000A -- LineFeed
  LF,
}

impl LineEnding {
  #[inline]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Crlf => "\u{000D}\u{000A}",
      Self::LF => "\u{000A}",
    }
  }
}

/// Ordered, mutable sequence of text lines, 1-indexed for addressing.
///
/// The line count is fixed at construction; only the content of existing
/// lines ever changes, so line numbers held elsewhere stay valid for the
/// lifetime of the store.
#[derive(Debug, Clone)]
pub struct LineStore {
  lines:  Vec<String>,
  ending: LineEnding,
}

impl LineStore {
  pub fn new(text: &str) -> Self {
    let ending = detect_line_ending(text);
    let lines = text.split(ending.as_str()).map(str::to_owned).collect();
    Self { lines, ending }
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  pub fn line_ending(&self) -> LineEnding {
    self.ending
  }

  /// Line content at the given 1-based line number.
  pub fn line(&self, number: usize) -> Option<&str> {
    number
      .checked_sub(1)
      .and_then(|idx| self.lines.get(idx))
      .map(String::as_str)
  }

  /// Replace the content of an existing line in place.
  ///
  /// Returns `false` when the line number is out of range; the store is
  /// untouched in that case.
  pub fn replace(&mut self, number: usize, text: String) -> bool {
    match number.checked_sub(1).and_then(|idx| self.lines.get_mut(idx)) {
      Some(slot) => {
        *slot = text;
        true
      },
      None => false,
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.lines.iter().map(String::as_str)
  }

  /// Join the lines back into a single text blob with the original ending.
  pub fn serialize(&self) -> String {
    self.lines.join(self.ending.as_str())
  }
}

fn detect_line_ending(text: &str) -> LineEnding {
  match text.find('\n') {
    Some(idx) if idx > 0 && text.as_bytes()[idx - 1] == b'\r' => LineEnding::Crlf,
    _ => LineEnding::LF,
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn round_trips_byte_for_byte() {
    let texts = [
      "",
      "single line no newline",
      "a\nb\nc",
      "a\nb\nc\n",
      "\n\n\n",
      "a\r\nb\r\nc\r\n",
    ];

    for text in texts {
      assert_eq!(LineStore::new(text).serialize(), text);
    }
  }

  #[test]
  fn one_based_addressing() {
    let store = LineStore::new("first\nsecond\nthird");

    assert_eq!(store.line(1), Some("first"));
    assert_eq!(store.line(3), Some("third"));
    assert_eq!(store.line(0), None);
    assert_eq!(store.line(4), None);
  }

  #[test]
  fn replace_changes_one_line_only() {
    let mut store = LineStore::new("a\nb\nc\n");
    let before = store.len();

    assert!(store.replace(2, "B".to_owned()));
    assert_eq!(store.len(), before);
    assert_eq!(store.serialize(), "a\nB\nc\n");
  }

  #[test]
  fn replace_out_of_range_is_rejected() {
    let mut store = LineStore::new("a\nb");

    assert!(!store.replace(0, "x".to_owned()));
    assert!(!store.replace(5, "x".to_owned()));
    assert_eq!(store.serialize(), "a\nb");
  }

  #[test]
  fn crlf_is_detected_and_preserved() {
    let mut store = LineStore::new("a\r\nb\r\n");

    assert_eq!(store.line_ending(), LineEnding::Crlf);
    assert!(store.replace(1, "A".to_owned()));
    assert_eq!(store.serialize(), "A\r\nb\r\n");
  }
}
