use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
};

use tagvocab::corpus::{Sentence, read_sentences};

fn is_standard_io(path: &str) -> bool {
    path == "-"
}

/// Corpus input argument group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Tab-separated corpus files; "-" (or none) reads stdin.
    pub files: Vec<String>,
}

impl CorpusArgs {
    /// Read every sentence of every input.
    pub fn read_corpus(&self) -> Result<Vec<Sentence>, Box<dyn std::error::Error>> {
        if self.files.is_empty() {
            return Ok(read_sentences(std::io::stdin().lock())?);
        }

        let mut sentences = Vec::new();
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            let batch = if is_standard_io(path) {
                read_sentences(std::io::stdin().lock())?
            } else {
                read_sentences(BufReader::new(File::open(path)?))?
            };
            sentences.extend(batch);
        }
        Ok(sentences)
    }
}

/// State dict input argument group.
#[derive(clap::Args, Debug)]
pub struct StateInputArgs {
    /// Saved state dict; "-" reads stdin.
    #[clap(long)]
    pub input: String,
}

/// State dict output argument group.
#[derive(clap::Args, Debug)]
pub struct StateOutputArgs {
    /// Optional output file; "-" (or none) writes stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl StateOutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match self.output.as_deref() {
            Some(p) if !is_standard_io(p) => Box::new(BufWriter::new(File::create(p)?)),
            _ => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
