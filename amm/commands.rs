//! Top-level operations: enable, disable, list, switch.
//!
//! Each operation catches its own resolution/guard failures and prints a
//! styled message; only a failed write (or a missing Apache config at
//! startup) terminates the process with a non-zero status.

use std::cmp::Ordering;

use amm_core::{
  DirectiveEntry,
  Resolution,
  TransitionError,
  fuzzy,
  transition,
};
use amm_loader::config::Overrides;
use anyhow::Result;
use console::style;

use crate::{
  cli::{
    Cli,
    Command,
  },
  context::Context,
  restart,
  ui,
};

/// How an interactive operation finished. Declining a prompt or failing a
/// guard ends the operation without being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Completed,
  Cancelled,
}

pub fn run(cli: Cli) -> Result<()> {
  let overrides = Overrides {
    config_file:   cli.config,
    apache_config: cli.apache_config,
  };
  let loaded = amm_loader::config::load(&overrides)?;
  if let Some(path) = &loaded.user_config {
    log::info!("amm config: {}", path.display());
  }

  let mut ctx = match Context::load(loaded.config) {
    Ok(ctx) => ctx,
    Err(err) => {
      ui::failure(&format!("{err:#}"));
      std::process::exit(1);
    },
  };

  match cli.command {
    Command::Enable { module } => {
      let outcome = enable(&mut ctx, module.as_deref().unwrap_or(""))?;
      offer_restart(&ctx, outcome)?;
    },
    Command::Disable { module } => {
      let outcome = disable(&mut ctx, &module)?;
      offer_restart(&ctx, outcome)?;
    },
    Command::List {
      search,
      disabled,
      enabled,
      sort,
    } => list(&ctx, search.as_deref(), disabled, enabled, sort.as_deref()),
    Command::Switch {
      old_module,
      new_module,
    } => {
      let new_module = new_module.unwrap_or_else(|| old_module.clone());
      let outcome = switch(&mut ctx, &old_module, &new_module)?;
      offer_restart(&ctx, outcome)?;
    },
  }

  Ok(())
}

fn offer_restart(ctx: &Context, outcome: Outcome) -> Result<()> {
  if outcome == Outcome::Completed {
    restart::offer(ctx.config.apache_restart.as_deref())?;
  }
  Ok(())
}

fn enable(ctx: &mut Context, query: &str) -> Result<Outcome> {
  let candidates = ctx.registry.disabled();
  let Some(target) = select_module(query, &candidates)? else {
    return Ok(Outcome::Cancelled);
  };
  toggle_module(ctx, &target, true)
}

fn disable(ctx: &mut Context, query: &str) -> Result<Outcome> {
  let candidates = ctx.registry.enabled();
  let Some(target) = select_module(query, &candidates)? else {
    return Ok(Outcome::Cancelled);
  };
  toggle_module(ctx, &target, false)
}

/// Disable one module, then enable another. Deliberately not transactional:
/// if the enable half fails or is cancelled, the disable half stays
/// committed and the file is left with only the first change applied.
fn switch(ctx: &mut Context, old_query: &str, new_query: &str) -> Result<Outcome> {
  let enabled = ctx.registry.enabled();
  // Candidates for the enable half are captured before the disable half
  // runs, so the just-disabled module is not offered for re-enabling.
  let disabled = ctx.registry.disabled();

  let Some(old) = select_module(old_query, &enabled)? else {
    return Ok(Outcome::Cancelled);
  };
  if toggle_module(ctx, &old, false)? == Outcome::Cancelled {
    return Ok(Outcome::Cancelled);
  }

  let Some(new) = select_module(new_query, &disabled)? else {
    return Ok(Outcome::Cancelled);
  };
  toggle_module(ctx, &new, true)
}

/// Resolve a query to a single entry, prompting on ambiguity.
fn select_module(query: &str, candidates: &[DirectiveEntry]) -> Result<Option<DirectiveEntry>> {
  match fuzzy::resolve(query, candidates) {
    Resolution::NoMatch => {
      ui::failure(&format!(
        "No applicable modules found matching {}",
        style(query).yellow()
      ));
      Ok(None)
    },
    Resolution::Single(entry) => Ok(Some(entry)),
    Resolution::Multiple(hits) => ui::choose(&hits),
  }
}

/// Confirm and apply one transition, committing the file immediately.
fn toggle_module(ctx: &mut Context, entry: &DirectiveEntry, target: bool) -> Result<Outcome> {
  // Surface the duplicate conflict before bothering the operator with a
  // confirmation prompt.
  if target && ctx.registry.has_active_named(&entry.name, entry.id) {
    report_duplicate(&entry.name);
    return Ok(Outcome::Cancelled);
  }

  let verb = if target { "Enable" } else { "Disable" };
  let prompt = format!(
    "{verb} {} ({})?",
    style(&entry.name).cyan(),
    style(&entry.path).yellow()
  );
  if !ui::confirm(&prompt)? {
    return Ok(Outcome::Cancelled);
  }

  match transition::toggle(&mut ctx.store, &mut ctx.registry, entry.id, target) {
    Ok(()) => {},
    Err(TransitionError::DuplicateActiveName { name }) => {
      report_duplicate(&name);
      return Ok(Outcome::Cancelled);
    },
    Err(err) => {
      ui::failure(&err.to_string());
      return Ok(Outcome::Cancelled);
    },
  }

  if let Err(err) = ctx.commit() {
    ui::failure(&format!(
      "An error occurred while trying to edit {}: {}",
      style(err.path.display()).yellow(),
      err.source
    ));
    ui::warning(&format!(
      "You may want to retry that command with the {} prefix",
      style("sudo").cyan()
    ));
    std::process::exit(1);
  }

  let new_text = ctx.store.line(entry.line).unwrap_or_default().to_owned();
  ui::success(&format!(
    "Changed line {} to {}",
    style(entry.line).cyan(),
    style(new_text).yellow()
  ));

  Ok(Outcome::Completed)
}

fn report_duplicate(name: &str) {
  ui::failure(&format!(
    "There is already an {} module named {}",
    style("enabled").green(),
    style(name).yellow()
  ));
}

// --- list -------------------------------------------------------------

const DEFAULT_SORT: &str = "enabled,name,path";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
  Id,
  Name,
  Path,
  Enabled,
  Line,
}

impl Column {
  fn parse(name: &str) -> Option<Self> {
    match name.trim().to_lowercase().as_str() {
      "id" => Some(Self::Id),
      "name" => Some(Self::Name),
      "path" => Some(Self::Path),
      "enabled" => Some(Self::Enabled),
      "line" => Some(Self::Line),
      _ => None,
    }
  }

  fn compare(self, a: &DirectiveEntry, b: &DirectiveEntry) -> Ordering {
    match self {
      Self::Id => a.id.cmp(&b.id),
      Self::Name => a.name.cmp(&b.name),
      Self::Path => a.path.cmp(&b.path),
      // Enabled sorts before disabled.
      Self::Enabled => b.enabled.cmp(&a.enabled),
      Self::Line => a.line.cmp(&b.line),
    }
  }
}

fn list(
  ctx: &Context,
  search: Option<&str>,
  only_disabled: bool,
  only_enabled: bool,
  sort: Option<&str>,
) {
  let mut entries = ctx.registry.entries().to_vec();

  if only_disabled {
    entries.retain(|entry| !entry.enabled);
  }
  if only_enabled {
    entries.retain(|entry| entry.enabled);
  }
  if let Some(query) = search {
    entries = fuzzy::rank(query, &entries);
  }

  if entries.is_empty() {
    ui::failure("No applicable modules found");
    return;
  }

  let columns = parse_sort_columns(sort.unwrap_or(DEFAULT_SORT));
  sort_entries(&mut entries, &columns);

  print!("{}", render_table(&entries));
}

fn parse_sort_columns(spec: &str) -> Vec<Column> {
  spec.split(',').filter_map(Column::parse).collect()
}

fn sort_entries(entries: &mut [DirectiveEntry], columns: &[Column]) {
  if columns.is_empty() {
    return;
  }
  entries.sort_by(|a, b| {
    columns
      .iter()
      .map(|column| column.compare(a, b))
      .find(|ord| *ord != Ordering::Equal)
      .unwrap_or(Ordering::Equal)
  });
}

fn render_table(entries: &[DirectiveEntry]) -> String {
  const HEADERS: [&str; 5] = ["ID", "NAME", "PATH", "ENABLED", "LINE"];

  let rows: Vec<[String; 5]> = entries
    .iter()
    .map(|entry| {
      [
        entry.id.to_string(),
        entry.name.clone(),
        entry.path.clone(),
        entry.enabled.to_string(),
        entry.line.to_string(),
      ]
    })
    .collect();

  let mut widths = HEADERS.map(str::len);
  for row in &rows {
    for (width, cell) in widths.iter_mut().zip(row) {
      *width = (*width).max(cell.len());
    }
  }

  let mut out = String::new();
  for (idx, header) in HEADERS.iter().enumerate() {
    push_cell(&mut out, &style(header).bold().to_string(), header.len(), widths[idx], idx == 4);
  }
  out.push('\n');

  for row in &rows {
    for (idx, cell) in row.iter().enumerate() {
      let rendered = if idx == 3 {
        if cell == "true" {
          style(cell).green().to_string()
        } else {
          style(cell).red().to_string()
        }
      } else {
        cell.clone()
      };
      push_cell(&mut out, &rendered, cell.len(), widths[idx], idx == 4);
    }
    out.push('\n');
  }

  out
}

/// Append one cell, padding by the unstyled width so ANSI codes don't skew
/// the columns.
fn push_cell(out: &mut String, rendered: &str, visible: usize, width: usize, last: bool) {
  out.push_str(rendered);
  if !last {
    for _ in visible..width + 1 {
      out.push(' ');
    }
  }
}
