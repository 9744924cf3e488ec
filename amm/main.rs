use clap::Parser;

mod cli;
mod commands;
mod context;
mod restart;
mod ui;

fn main() -> anyhow::Result<()> {
  let cli = cli::Cli::parse();
  init_logging(cli.verbosity);
  commands::run(cli)
}

fn init_logging(verbosity: u8) {
  let level = match verbosity {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Info,
    2 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  };

  env_logger::Builder::from_default_env()
    .filter_level(level)
    .init();
}
