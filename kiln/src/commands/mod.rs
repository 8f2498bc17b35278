mod check;
mod completions;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use kiln_bean::BeanFormat;

use crate::reports::{Output, TerminalOutput};

/// Extension trait for exiting with the two-line failure diagnostic
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self, headline: &str) -> T;
}

impl<T> UnwrapOrExit<T> for kiln_bean::Result<T> {
    fn unwrap_or_exit(self, headline: &str) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                TerminalOutput::new().failure(headline, &e.to_string());
                if matches!(*e, kiln_bean::Error::Parse { .. })
                    && tracing::enabled!(tracing::Level::DEBUG)
                {
                    eprintln!("{:?}", miette::Report::new(*e));
                }
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for Result<T> {
    fn unwrap_or_exit(self, headline: &str) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(error = ?e, "command failed");
                TerminalOutput::new().failure(headline, &format!("{:#}", e));
                std::process::exit(1);
            }
        }
    }
}

/// Source bean arguments shared by commands.
#[derive(Args)]
pub struct BeanArgs {
    /// Path to target source bean
    #[arg(short, long)]
    pub src: PathBuf,

    /// Force bean parser to JSON
    #[arg(long, conflicts_with = "toml")]
    pub json: bool,

    /// Force bean parser to TOML
    #[arg(long)]
    pub toml: bool,
}

impl BeanArgs {
    /// Absolute bean path plus its forced or detected format.
    pub fn resolve(&self) -> kiln_bean::Result<(PathBuf, BeanFormat)> {
        let path = std::path::absolute(&self.src).map_err(|e| {
            Box::new(kiln_bean::Error::Io {
                path: self.src.clone(),
                source: e,
            })
        })?;
        let format = if self.json {
            BeanFormat::Json
        } else if self.toml {
            BeanFormat::Toml
        } else {
            BeanFormat::from_path(&path)?
        };
        Ok((path, format))
    }
}

#[derive(Parser)]
#[command(name = "kiln")]
#[command(version)]
#[command(about = "Generate JavaScript classes from JSON/TOML beans")]
pub(crate) struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a JavaScript class from a bean
    Generate(GenerateCommand),

    /// Validate a bean without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
