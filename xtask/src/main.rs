//! xtask - Development task runner for cairn
//!
//! Usage:
//!   cargo xtask expand --arity <n> --template <path> [--output <path>]
//!   cargo xtask generate [--config <yaml>]

mod expand;
mod generate;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for cairn")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a template for a single arity
    Expand(ExpandArgs),
    /// Expand a template for every arity listed in a config file
    Generate(generate::GenerateArgs),
}

/// Arguments for the expand subcommand
#[derive(Args, Debug)]
struct ExpandArgs {
    /// Number of cases to generate
    #[arg(long, short = 'n')]
    arity: usize,

    /// Template file path, relative to the project root
    #[arg(long, short = 't', default_value = "xtask/templates/one_of.rs.tmpl")]
    template: PathBuf,

    /// Write to this file instead of stdout, relative to the project root
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

impl ExpandArgs {
    fn template_path(&self, root: &Path) -> PathBuf {
        root.join(&self.template)
    }

    fn output_path(&self, root: &Path) -> Option<PathBuf> {
        self.output.as_ref().map(|output| root.join(output))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Expand(args) => run_expand(args),
        Commands::Generate(args) => generate::run(args),
    }
}

fn run_expand(args: ExpandArgs) -> Result<()> {
    let root = project_root()?;
    let template_path = args.template_path(&root);
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template: {}", template_path.display()))?;

    let expanded = expand::expand(&template, args.arity)?;

    match args.output_path(&root) {
        Some(output) => {
            fs::write(&output, expanded)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            tracing::info!(arity = args.arity, path = %output.display(), "expanded");
        }
        None => print!("{expanded}"),
    }

    Ok(())
}

/// Workspace root, derived from the xtask manifest directory.
fn project_root() -> Result<PathBuf> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| env::current_dir())
        .context("Failed to locate the project root")?;

    // xtask is in project_root/xtask
    Ok(match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    })
}
