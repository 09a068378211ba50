use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kiln_launcher::{ContainerManifest, ContainerStep};

/// Kiln - resolves container step templates into concrete invocations
#[derive(Parser)]
#[command(name = "kiln")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Log at debug level (RUST_LOG takes precedence)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve a container step and print the resolved spec as JSON
  Resolve {
    /// Path to the step file (JSON), or `-` to read stdin
    step_file: PathBuf,
  },

  /// Resolve a container step and print it as a container manifest
  Manifest {
    /// Path to the step file (JSON), or `-` to read stdin
    step_file: PathBuf,

    /// Container name to put in the manifest
    #[arg(long, default_value = "main")]
    name: String,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match cli.command {
    Some(Commands::Resolve { step_file }) => {
      let step = load_step(&step_file)?;
      let resolved = step.resolve().context("failed to resolve container step")?;
      println!("{}", serde_json::to_string_pretty(&resolved)?);
    }
    Some(Commands::Manifest { step_file, name }) => {
      let step = load_step(&step_file)?;
      let resolved = step.resolve().context("failed to resolve container step")?;
      let manifest = ContainerManifest::from_resolved(name, &resolved);
      println!("{}", serde_json::to_string_pretty(&manifest.to_swagger_dict())?);
    }
    None => {
      println!("kiln - use --help to see available commands");
    }
  }

  Ok(())
}

fn init_logging(verbose: bool) {
  let level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .init();

  debug!("logging initialized at level {}", level);
}

fn load_step(path: &Path) -> Result<ContainerStep> {
  let step = if path.as_os_str() == "-" {
    ContainerStep::from_reader(io::stdin().lock()).context("failed to parse step from stdin")?
  } else {
    let file = File::open(path)
      .with_context(|| format!("failed to read step file: {}", path.display()))?;
    ContainerStep::from_reader(io::BufReader::new(file))
      .with_context(|| format!("failed to parse step file: {}", path.display()))?
  };

  info!(mode = step.container.mode(), "loaded container step");
  Ok(step)
}
