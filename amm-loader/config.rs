//! Typed configuration with explicit layer precedence.
//!
//! Layers merge lowest to highest: built-in defaults, then the user's TOML
//! config file, then environment variables, then command-line flags. The
//! file is declarative data only -- it is parsed, never executed.

use std::path::{
  Path,
  PathBuf,
};

use anyhow::{
  Context as _,
  Result,
};
use serde::Deserialize;

pub const DEFAULT_APACHE_CONFIG: &str = "/etc/apache2/httpd.conf";
pub const DEFAULT_RESTART_COMMAND: &str = "/usr/sbin/apachectl restart";

/// Fully resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// The Apache config file holding the `LoadModule` directives.
  pub apache_config: PathBuf,

  /// Restart command offered after a successful commit. `None` disables
  /// the restart prompt entirely.
  pub apache_restart: Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      apache_config:  PathBuf::from(DEFAULT_APACHE_CONFIG),
      apache_restart: Some(DEFAULT_RESTART_COMMAND.to_owned()),
    }
  }
}

/// The on-disk layer. Every field is optional so layers merge cleanly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
  apache_config:  Option<PathBuf>,
  apache_restart: Option<String>,
}

/// Flag-level overrides, the highest-precedence layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  /// `-c/--config`: explicit user config file path.
  pub config_file: Option<PathBuf>,

  /// `-a/--apache-config`: explicit Apache config path.
  pub apache_config: Option<PathBuf>,
}

/// Relevant environment variables, captured once.
#[derive(Debug, Clone, Default)]
pub struct EnvOverlay {
  pub config_file:   Option<PathBuf>,
  pub apache_config: Option<PathBuf>,
}

impl EnvOverlay {
  pub fn capture() -> Self {
    Self {
      config_file:   std::env::var_os("AMM_CONFIG").map(PathBuf::from),
      apache_config: std::env::var_os("AMM_APACHE_CONFIG").map(PathBuf::from),
    }
  }
}

/// A resolved config plus where the file layer actually came from.
#[derive(Debug, Clone)]
pub struct Loaded {
  pub config: Config,

  /// The user config file that was read, if any.
  pub user_config: Option<PathBuf>,
}

/// Resolve the configuration from all layers.
pub fn load(overrides: &Overrides) -> Result<Loaded> {
  resolve(overrides, &EnvOverlay::capture())
}

/// Pure resolution against a captured environment, for testability.
pub fn resolve(overrides: &Overrides, env: &EnvOverlay) -> Result<Loaded> {
  let mut config = Config::default();

  // Flag beats env for the config file location. An explicitly named file
  // that is missing is only a warning; the implicit default path is
  // silently skipped when absent.
  let (file, explicit) = match (&overrides.config_file, &env.config_file) {
    (Some(path), _) => (path.clone(), true),
    (None, Some(path)) => (path.clone(), true),
    (None, None) => (crate::default_config_file(), false),
  };

  let mut user_config = None;
  if file.exists() {
    apply_file(&mut config, &file)?;
    user_config = Some(file);
  } else if explicit {
    log::warn!(
      "specified config file {} was not found",
      file.display()
    );
  }

  if let Some(path) = &env.apache_config {
    config.apache_config = path.clone();
  }
  if let Some(path) = &overrides.apache_config {
    config.apache_config = path.clone();
  }

  // An empty restart command means "never offer a restart".
  if config
    .apache_restart
    .as_deref()
    .is_some_and(|cmd| cmd.trim().is_empty())
  {
    config.apache_restart = None;
  }

  Ok(Loaded {
    config,
    user_config,
  })
}

fn apply_file(config: &mut Config, path: &Path) -> Result<()> {
  let text = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read config file {}", path.display()))?;
  let file: ConfigFile = toml::from_str(&text)
    .with_context(|| format!("failed to parse config file {}", path.display()))?;

  if let Some(apache_config) = file.apache_config {
    config.apache_config = apache_config;
  }
  if let Some(apache_restart) = file.apache_restart {
    config.apache_restart = Some(apache_restart);
  }
  Ok(())
}
