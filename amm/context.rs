//! Per-operation pipeline state, threaded explicitly through every command.

use std::{
  fs,
  io,
};

use amm_core::{
  LineStore,
  PersistError,
  Registry,
  persist,
};
use amm_loader::config::Config;
use anyhow::{
  Context as _,
  Result,
  bail,
};

/// Everything one operation needs: the resolved config, the line store and
/// the registry scanned from it. Built fresh per invocation; never ambient.
pub struct Context {
  pub config:   Config,
  pub store:    LineStore,
  pub registry: Registry,
}

impl Context {
  /// Read the Apache config and build the registry.
  ///
  /// A missing file is fatal: no registry is built and the process exits
  /// with a non-zero status.
  pub fn load(config: Config) -> Result<Self> {
    let text = match fs::read_to_string(&config.apache_config) {
      Ok(text) => text,
      Err(err) if err.kind() == io::ErrorKind::NotFound => {
        bail!(
          "Apache config file {} was not found",
          config.apache_config.display()
        );
      },
      Err(err) => {
        return Err(err).with_context(|| {
          format!("failed to read {}", config.apache_config.display())
        });
      },
    };

    log::info!("Apache config: {}", config.apache_config.display());

    let store = LineStore::new(&text);
    let registry = Registry::scan(&store);
    Ok(Self {
      config,
      store,
      registry,
    })
  }

  /// Write the store's current serialization back to the Apache config.
  pub fn commit(&self) -> Result<(), PersistError> {
    persist::commit(&self.store, &self.config.apache_config)
  }
}
