use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};
use kiln_bean::{bean_stem, load_schema};
use kiln_codegen::{CraftOptions, Indent};

use super::{BeanArgs, UnwrapOrExit};
use crate::{
    ops::{self, generate::GenerateRequest},
    reports::{Report, TerminalOutput},
};

const FAILURE: &str = "Cannot generate class from bean!";

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub bean: BeanArgs,

    /// Path to class directory
    #[arg(short, long, required_unless_present = "preview")]
    pub dest: Option<PathBuf>,

    /// Print to console instead of saving
    #[arg(long)]
    pub preview: bool,

    /// Fail on unbalanced braces instead of emitting drifted indentation
    #[arg(long)]
    pub strict: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=16))]
    pub indent: u8,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (path, format) = self.bean.resolve().unwrap_or_exit(FAILURE);
        let schema = load_schema(&path, Some(format)).unwrap_or_exit(FAILURE);

        let dest = if self.preview {
            None
        } else {
            self.dest
                .as_deref()
                .map(std::path::absolute)
                .transpose()
                .wrap_err("failed to resolve the class directory")
                .unwrap_or_exit(FAILURE)
        };

        let report = ops::generate(GenerateRequest {
            schema: &schema,
            stem: bean_stem(&path, format),
            bean: path,
            dest: dest.as_deref(),
            options: CraftOptions::default()
                .indent(Indent::Spaces(self.indent))
                .strict(self.strict),
        })
        .unwrap_or_exit(FAILURE);

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
