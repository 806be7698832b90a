//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::build::{build_file, BuildSettings};
use super::output::Output;
use crate::storage::{Config, OutputFormat};
use crate::version;

#[derive(Parser, Debug)]
#[command(name = "journaltxt")]
#[command(author, version, about = "Build Jekyll blog posts from Journal.TXT single-file journals")]
#[command(after_help = "Example: journaltxt -o _posts Vienna.txt")]
pub struct Cli {
    /// Journal.TXT files to process
    #[arg(value_name = "FILE", default_value = "journal.txt")]
    pub files: Vec<PathBuf>,

    /// Output directory path [default: .]
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Journal name (default: derived from filename)
    #[arg(long, short = 'n', value_name = "NAME")]
    pub name: Option<String>,

    /// Add date to page title (default)
    #[arg(long, overrides_with = "no_date")]
    pub date: bool,

    /// Do not add date to page title
    #[arg(long, overrides_with = "date")]
    pub no_date: bool,

    /// Report format
    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,

    /// Show debug messages
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Configuration file
    #[arg(long, env = "JOURNALTXT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Returns the date flag, if one was given
    fn date_flag(&self) -> Option<bool> {
        if self.no_date {
            Some(false)
        } else if self.date {
            Some(true)
        } else {
            None
        }
    }

    /// Merges flags over configuration file values
    pub fn settings(&self, config: &Config) -> BuildSettings {
        BuildSettings {
            output_dir: self
                .output
                .clone()
                .unwrap_or_else(|| config.build.output.clone()),
            name: self.name.clone(),
            include_date: self.date_flag().unwrap_or(config.build.date),
        }
    }

    /// Returns the report format, flag first
    pub fn format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.build.format)
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Runs a build for already-parsed arguments
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = cli.settings(&config);
    let output = Output::new(cli.format(&config), cli.verbose);

    output.verbose(&version::banner());
    if let Some(source) = &config.source {
        output.verbose_ctx("config", &format!("Loaded {}", source.display()));
    }
    output.verbose_ctx("config", &format!("{:?}", settings));
    output.verbose_ctx("files", &format!("{:?}", cli.files));

    let mut written = Vec::new();

    for path in &cli.files {
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }

        written.extend(build_file(path, &settings, &output)?);
    }

    output.data(&serde_json::json!({ "posts": written }));

    output.verbose("Build completed successfully");
    Ok(())
}
