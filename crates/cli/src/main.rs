use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use output::OutputFormat;

/// foreman - composer.json editing for application scaffolding
#[derive(Parser)]
#[command(name = "foreman")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Merge configured packages and autoload entries into composer.json
  Apply {
    /// Application directory containing composer.json
    #[arg(default_value = ".")]
    app_dir: PathBuf,

    /// Configuration file (default: $FOREMAN_CONFIG, ./foreman.json, then the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the resulting manifest without writing it
    #[arg(long)]
    dry_run: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
  },

  /// Print composer.json the way foreman writes it
  Show {
    /// Application directory containing composer.json
    #[arg(default_value = ".")]
    app_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  // RUST_LOG wins over --verbose
  let default_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cli.command {
    Commands::Apply {
      app_dir,
      config,
      dry_run,
      output,
    } => cmd::cmd_apply(&app_dir, config.as_deref(), dry_run, output),
    Commands::Show { app_dir, output } => cmd::cmd_show(&app_dir, output),
  }
}
