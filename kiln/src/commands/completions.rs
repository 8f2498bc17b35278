use std::io::{self, Write};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::Result;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        self.write_to(&mut io::stdout().lock());
        Ok(())
    }

    fn write_to(&self, out: &mut impl Write) {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(self.shell, &mut command, name, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_name_the_binary() {
        let mut buffer = Vec::new();
        CompletionsCommand { shell: Shell::Bash }.write_to(&mut buffer);

        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("_kiln()"));
        assert!(script.contains("generate"));
    }
}
