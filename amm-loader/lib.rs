//! Configuration discovery and loading for amm.

pub mod config;

use std::path::PathBuf;

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory holding the user's amm config file.
pub fn config_dir() -> PathBuf {
  if let Ok(dir) = std::env::var("AMM_CONFIG_DIR") {
    return PathBuf::from(dir);
  }
  let strategy = choose_base_strategy().expect("Unable to find the config directory!");
  let mut path = strategy.config_dir();
  path.push("amm");
  path
}

/// Default location of the user config file.
pub fn default_config_file() -> PathBuf {
  config_dir().join("config.toml")
}
