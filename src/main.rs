//! Interactive route planner reading a graph definition file.
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use townroute::{DefinitionConfig, Shell, read_definition_file};

/// Search routes between towns described by a graph definition file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    /// Path to the file listing the towns, a `--` line, then the paths
    #[arg(required = true)]
    definition: PathBuf,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let graph = match read_definition_file(&DefinitionConfig::default(), &args.definition) {
        Ok(graph) => graph,
        Err(e) => {
            error!("Cannot read {}: {e:?}", args.definition.display());
            println!("Error, {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut shell = Shell::new(graph);
    shell.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(ExitCode::SUCCESS)
}
