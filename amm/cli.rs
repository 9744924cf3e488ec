use std::path::PathBuf;

use clap::{
  ArgAction,
  Parser,
  Subcommand,
};

#[derive(Parser, Debug)]
#[command(
  name = "amm",
  about = "Enable, disable and list Apache LoadModule directives",
  version = amm_loader::VERSION
)]
pub struct Cli {
  /// Apache config path
  #[arg(
    short = 'a',
    long = "apache-config",
    value_name = "PATH",
    global = true
  )]
  pub apache_config: Option<PathBuf>,

  /// amm config path
  #[arg(short = 'c', long = "config", value_name = "PATH", global = true)]
  pub config: Option<PathBuf>,

  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count, global = true)]
  pub verbosity: u8,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Enable a module
  #[command(alias = "e")]
  Enable {
    /// Module name to search for (omit to pick from all disabled modules)
    module: Option<String>,
  },

  /// Disable a module
  #[command(alias = "d")]
  Disable {
    /// Module name to search for
    module: String,
  },

  /// List modules
  #[command(alias = "l")]
  List {
    /// Only show modules with names matching this search
    search: Option<String>,

    /// Only display disabled modules
    #[arg(short = 'd', long)]
    disabled: bool,

    /// Only display enabled modules
    #[arg(short = 'e', long)]
    enabled: bool,

    /// Sort results by column values (comma-separated: id, name, path,
    /// enabled, line)
    #[arg(short = 's', long, value_name = "COLUMNS")]
    sort: Option<String>,
  },

  /// Disable one module and enable another
  #[command(alias = "s")]
  Switch {
    /// Module to disable
    old_module: String,

    /// Module to enable (defaults to the same search as OLD_MODULE)
    new_module: Option<String>,
  },
}
