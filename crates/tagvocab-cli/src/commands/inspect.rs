use std::io::BufReader;

use log::LevelFilter;
use tagvocab::{
    types::Unit,
    vocab::{
        AnyVocab,
        CompositeVocab,
        MultiVocab,
        io::{load_multi_vocab_path, read_multi_vocab},
    },
};

use crate::{io_args::StateInputArgs, logging::LogArgs};

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[clap(flatten)]
    input: StateInputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Also list the units of this vocab, in id order.
    #[arg(long)]
    units: Option<String>,
}

impl InspectArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(LevelFilter::Warn)?;

        let vocabs: MultiVocab = if self.input.input == "-" {
            read_multi_vocab(BufReader::new(std::io::stdin().lock()))?
        } else {
            load_multi_vocab_path(&self.input.input)?
        };

        for (name, vocab) in vocabs.iter() {
            println!("\"{name}\" - {}", vocab.class());
            println!("    sizes: {:?}", vocab.sizes());
        }

        if let Some(name) = &self.units {
            let vocab = vocabs
                .get(name)
                .ok_or_else(|| format!("no vocab named {name:?}"))?;
            print_units(vocab);
        }

        Ok(())
    }
}

fn print_units(vocab: &AnyVocab) {
    match vocab {
        AnyVocab::Char(v) => print_unit_list(v.unit_vocab().units()),
        AnyVocab::Word(v) => print_unit_list(v.unit_vocab().units()),
        AnyVocab::Xpos(v) => print_parts(v),
        AnyVocab::Feature(v) => print_parts(v),
    }
}

fn print_parts(vocab: &CompositeVocab) {
    for index in 0..vocab.len() {
        if let Some(part) = vocab.part(index) {
            println!("[{}]", part.key());
            print_unit_list(part.units());
        }
    }
}

fn print_unit_list(units: &[Unit]) {
    for (id, unit) in units.iter().enumerate() {
        println!("{id}\t{unit}");
    }
}
