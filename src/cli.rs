//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgGroup, CommandFactory, Parser};

use crate::commands;
use zarish_validate::config::Config;
use zarish_validate::core::services::UnknownKindPolicy;
use zarish_validate::output::OutputMode;

/// Exit status for usage and environment errors
pub const EXIT_USAGE: u8 = 2;

/// zarish-validate - ZARISH HIS FHIR resource validation
#[derive(Parser, Debug)]
#[command(
    name = "zarish-validate",
    version,
    about = "Validate FHIR resources against ZARISH HIS profiles",
    long_about = "Validate FHIR resources against ZARISH HIS profiles.\n\n\
                  Checks required fields, required extensions, coded values and\n\
                  nationality-specific identifier formats. Errors fail a record;\n\
                  warnings are advisory."
)]
#[command(group(ArgGroup::new("target").args(["file", "directory"])))]
pub struct Cli {
    /// Path to a single FHIR resource file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Path to a directory of FHIR resource files (searched recursively)
    #[arg(long, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Fail records whose resourceType has no profile
    #[arg(long)]
    pub strict: bool,

    /// Configuration file (defaults to .zarish-validate.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let mut config = Config::load(cli.config.as_deref(), &cwd)?;
    if cli.strict {
        config.validation.unknown_kinds = UnknownKindPolicy::Strict;
    }

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let all_passed = match (cli.file, cli.directory) {
        (Some(file), _) => commands::validate_file(&file, &config, output_mode)?,
        (None, Some(dir)) => commands::validate_directory(&dir, &config, output_mode)?,
        (None, None) => {
            Cli::command().print_help()?;
            return Ok(ExitCode::from(EXIT_USAGE));
        },
    };

    Ok(if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
