use crate::commands::{build::BuildArgs, inspect::InspectArgs};

pub mod build;
pub mod inspect;

/// Subcommands for tagvocab.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build vocabularies from tab-separated corpus files.
    Build(BuildArgs),

    /// Summarize a saved vocabulary state dict.
    Inspect(InspectArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Build(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}
