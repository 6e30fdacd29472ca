mod commands;
mod io_args;
mod logging;

use clap::Parser;
use commands::Commands;

/// tagvocab: build and inspect tagging vocabularies.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
