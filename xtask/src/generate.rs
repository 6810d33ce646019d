//! The `generate` subcommand: expands one template for several arities.

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::expand::expand;

/// Arguments for the generate subcommand
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Generation config YAML file path
    #[arg(long, short = 'c', default_value = "xtask/generate.yaml")]
    pub config: PathBuf,
}

/// Generation config from YAML
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct GenerateConfig {
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub arities: Vec<usize>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    "one_of_{n}.rs".to_string()
}

impl GenerateConfig {
    /// Output path for one arity, relative to `root`.
    pub fn output_path(&self, root: &Path, arity: usize) -> PathBuf {
        root.join(&self.output_dir)
            .join(self.file_name.replace("{n}", &arity.to_string()))
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let root = crate::project_root()?;
    let config_path = root.join(&args.config);
    let config_text = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let config: GenerateConfig = serde_yaml::from_str(&config_text)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

    if config.arities.is_empty() {
        bail!("No arities listed in {}", config_path.display());
    }
    if !config.file_name.contains("{n}") && config.arities.len() > 1 {
        bail!("file_name must contain {{n}} when several arities are generated");
    }

    let template_path = root.join(&config.template);
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template: {}", template_path.display()))?;

    let output_dir = root.join(&config.output_dir);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    for &arity in &config.arities {
        let expanded = expand(&template, arity).with_context(|| format!("Arity {arity}"))?;
        let path = config.output_path(&root, arity);
        fs::write(&path, expanded).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(arity, path = %path.display(), "generated");
    }

    Ok(())
}
