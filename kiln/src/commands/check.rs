use clap::Args;
use eyre::Result;
use kiln_bean::load_schema;

use super::{BeanArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

const FAILURE: &str = "Invalid bean!";

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub bean: BeanArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (path, format) = self.bean.resolve().unwrap_or_exit(FAILURE);
        let schema = load_schema(&path, Some(format)).unwrap_or_exit(FAILURE);

        let report = ops::check(&schema, &path).unwrap_or_exit(FAILURE);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
