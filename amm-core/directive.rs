//! The `LoadModule` directive grammar.
//!
//! A directive line is, in its entirety:
//!
//! ```text
//! [#]LoadModule<WS><name><WS><path>
//! ```
//!
//! where `<WS>` is one or more spaces/tabs and both tokens are non-empty
//! runs of non-whitespace. Matching is case-sensitive and anchored at both
//! ends; a line with trailing content is not a directive. There is no parse
//! error, only non-match -- anything that fails the grammar is inert text.

/// Leading character denoting an inactive directive.
pub const INACTIVE_MARKER: char = '#';

/// Literal keyword that opens every directive line.
pub const DIRECTIVE_KEYWORD: &str = "LoadModule";

/// A single line successfully matched against the grammar.
///
/// Borrows from the source line; the registry copies the fields out when it
/// builds its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDirective<'a> {
  pub enabled: bool,
  pub name:    &'a str,
  pub path:    &'a str,
}

/// Test one line against the grammar.
///
/// A `#` with no keyword directly after it is plain commented-out text, not
/// a disabled directive.
pub fn parse_line(line: &str) -> Option<ParsedDirective<'_>> {
  let (enabled, rest) = match line.strip_prefix(INACTIVE_MARKER) {
    Some(rest) => (false, rest),
    None => (true, line),
  };

  let rest = rest.strip_prefix(DIRECTIVE_KEYWORD)?;
  let (name, rest) = token(skip_ws(rest)?)?;
  let (path, rest) = token(skip_ws(rest)?)?;

  rest
    .is_empty()
    .then_some(ParsedDirective { enabled, name, path })
}

/// Skip one or more horizontal whitespace characters. `None` if there are
/// none to skip.
fn skip_ws(s: &str) -> Option<&str> {
  let trimmed = s.trim_start_matches([' ', '\t']);
  (trimmed.len() < s.len()).then_some(trimmed)
}

/// Split off a non-empty run of non-whitespace.
fn token(s: &str) -> Option<(&str, &str)> {
  let end = s
    .find(|c: char| c.is_whitespace())
    .unwrap_or(s.len());
  (end > 0).then(|| s.split_at(end))
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn enabled_directive() {
    let parsed = parse_line("LoadModule foo_module modules/mod_foo.so").unwrap();

    assert!(parsed.enabled);
    assert_eq!(parsed.name, "foo_module");
    assert_eq!(parsed.path, "modules/mod_foo.so");
  }

  #[test]
  fn disabled_directive() {
    let parsed = parse_line("#LoadModule bar_module modules/mod_bar.so").unwrap();

    assert!(!parsed.enabled);
    assert_eq!(parsed.name, "bar_module");
  }

  #[test]
  fn tabs_and_repeated_whitespace() {
    let parsed = parse_line("LoadModule\tfoo_module \t modules/mod_foo.so").unwrap();

    assert_eq!(parsed.name, "foo_module");
    assert_eq!(parsed.path, "modules/mod_foo.so");
  }

  #[test]
  fn marker_without_keyword_is_plain_text() {
    assert!(parse_line("# LoadModule foo modules/mod_foo.so").is_none());
    assert!(parse_line("# just a comment").is_none());
    assert!(parse_line("#").is_none());
  }

  #[test]
  fn wrong_arity_does_not_match() {
    assert!(parse_line("LoadModule foo_module").is_none());
    assert!(parse_line("LoadModule foo_module a.so extra").is_none());
    assert!(parse_line("LoadModule").is_none());
  }

  #[test]
  fn anchoring_rejects_trailing_content() {
    assert!(parse_line("LoadModule foo_module a.so ").is_none());
    assert!(parse_line(" LoadModule foo_module a.so").is_none());
    assert!(parse_line("LoadModule foo_module a.so # comment").is_none());
  }

  #[test]
  fn keyword_is_case_sensitive() {
    assert!(parse_line("loadmodule foo_module a.so").is_none());
    assert!(parse_line("LOADMODULE foo_module a.so").is_none());
  }

  #[test]
  fn keyword_must_be_followed_by_whitespace() {
    assert!(parse_line("LoadModules foo a.so").is_none());
    assert!(parse_line("LoadModulefoo a.so").is_none());
  }
}
