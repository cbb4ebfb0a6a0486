//! CLI entry point for capgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `capgate-app` crate.
//!
//! Stream discipline: the post-load summary and all diagnostics go to stderr;
//! command output goes to stdout.

use camino::Utf8PathBuf;
use capgate_app::{
    format_partition, run_resolve, run_show, run_validate, validate_exit_code, ResolveInput,
    ShowInput, ValidateOutput,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "capgate",
    version,
    about = "Config-driven feature and tool gating for DevOps automation tool servers"
)]
struct Cli {
    /// Path to the capgate config JSON. Falls back to $CAPGATE_CONFIG, then
    /// capgate.json in the working directory.
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show effective feature and tool enablement.
    Show,
    /// Partition tool names into enabled and disabled sets.
    Resolve {
        /// Tool names to resolve.
        #[arg(required = true)]
        tools: Vec<String>,
    },
    /// Check the config document without applying it.
    Validate,
}

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = (|| -> anyhow::Result<i32> {
        match cli.cmd {
            Commands::Show => {
                let output = run_show(ShowInput { config_path })?;
                eprint!("{}", output.summary);
                print!("{}", output.listing);
                Ok(0)
            }
            Commands::Resolve { ref tools } => {
                let output = run_resolve(ResolveInput { config_path, tools })?;
                eprint!("{}", output.summary);
                print!("{}", format_partition(&output));
                Ok(0)
            }
            Commands::Validate => {
                let output = run_validate(config_path)?;
                match &output {
                    ValidateOutput::Valid { summary } => {
                        eprint!("{summary}");
                        println!("config ok");
                    }
                    ValidateOutput::Invalid { diagnostic } => {
                        eprintln!("{diagnostic}");
                    }
                }
                Ok(validate_exit_code(&output))
            }
        }
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("capgate error: {err:#}");
            std::process::exit(1);
        }
    }
}
