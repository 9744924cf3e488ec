//! Optional service restart after a successful commit.

use std::process::Command;

use anyhow::{
  Context as _,
  Result,
};

use crate::ui;

/// Offer to run the configured restart command, gated by its own prompt.
pub fn offer(restart: Option<&str>) -> Result<()> {
  let Some(command) = restart else {
    return Ok(());
  };

  if !ui::confirm(&format!("Restart Apache ({command})?"))? {
    return Ok(());
  }
  run(command)
}

fn run(command: &str) -> Result<()> {
  log::info!("running restart command: {command}");

  let status = Command::new("sh")
    .arg("-c")
    .arg(command)
    .status()
    .with_context(|| format!("failed to run `{command}`"))?;

  if !status.success() {
    ui::failure(&format!("Restart command exited with {status}"));
  }
  Ok(())
}
