//! Interactive prompts and styled status output.

use amm_core::DirectiveEntry;
use anyhow::Result;
use console::style;
use dialoguer::{
  Confirm,
  Select,
  theme::ColorfulTheme,
};

pub fn success(message: &str) {
  println!("{} {message}", style("✔").green());
}

pub fn failure(message: &str) {
  println!("{} {message}", style("✘").red());
}

pub fn warning(message: &str) {
  println!("{} {message}", style("!").yellow());
}

/// Blocking yes/no prompt. Declining is a normal outcome, not an error.
pub fn confirm(message: &str) -> Result<bool> {
  let answer = Confirm::with_theme(&ColorfulTheme::default())
    .with_prompt(message)
    .default(true)
    .interact()?;
  Ok(answer)
}

/// Blocking pick-one prompt for an ambiguous resolution. Escape returns
/// `None`, which callers treat as a cancellation.
pub fn choose(candidates: &[DirectiveEntry]) -> Result<Option<DirectiveEntry>> {
  let items: Vec<String> = candidates
    .iter()
    .map(|entry| format!("{} {}", entry.name, style(&entry.path).yellow()))
    .collect();

  let picked = Select::with_theme(&ColorfulTheme::default())
    .with_prompt("Which module are you looking for?")
    .items(&items)
    .default(0)
    .interact_opt()?;

  Ok(picked.map(|idx| candidates[idx].clone()))
}
