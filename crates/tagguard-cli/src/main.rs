//! CLI entry point for tagguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `tagguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use tagguard_app::{SourceInput, ValidateInput, run_validate, violation_exit_code};

#[derive(Parser, Debug)]
#[command(
    name = "tagguard",
    version,
    about = "Tag policy linter for Terraform resources"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate Terraform files (or a plan snapshot) for tag violations.
    Validate {
        /// Root paths to scan for .tf files (default: current directory).
        paths: Vec<Utf8PathBuf>,

        /// Path to the rule file.
        #[arg(
            long,
            short = 'c',
            visible_alias = "file",
            visible_short_alias = 'f',
            default_value = "tag-rules.yaml"
        )]
        config: Utf8PathBuf,

        /// Terraform plan JSON file (used instead of .tf files).
        #[arg(long, short = 'p')]
        plan: Option<Utf8PathBuf>,

        /// Show a per-rule summary after the report.
        #[arg(long, short = 's')]
        summary: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.cmd {
        Commands::Validate {
            paths,
            config,
            plan,
            summary,
        } => cmd_validate(paths, config, plan, summary),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("tagguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_validate(
    paths: Vec<Utf8PathBuf>,
    config: Utf8PathBuf,
    plan: Option<Utf8PathBuf>,
    summary: bool,
) -> anyhow::Result<i32> {
    let config_text = std::fs::read_to_string(&config)
        .with_context(|| format!("read config file: {config}"))?;

    let source = match plan {
        Some(file) => SourceInput::Plan { file },
        None => SourceInput::Files {
            roots: if paths.is_empty() {
                vec![Utf8PathBuf::from(".")]
            } else {
                paths
            },
        },
    };

    let output = run_validate(ValidateInput {
        config_text: &config_text,
        source,
        show_summary: summary,
    })?;

    // Recoverable per-file failures: warn and continue.
    if !output.parse_errors.is_empty() {
        eprintln!("⚠️  Parsing errors encountered:");
        for err in &output.parse_errors {
            eprintln!("  - {err}");
        }
        eprintln!();
    }

    print!("{}", output.report);
    if let Some(summary) = output.summary {
        print!("{summary}");
    }

    Ok(violation_exit_code(output.violation_count))
}
