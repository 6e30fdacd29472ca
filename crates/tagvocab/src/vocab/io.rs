//! # State Dict IO
//!
//! State dicts are stored as pretty-printed JSON, in insertion order.
//!
//! ```rust,no_run
//! use tagvocab::vocab::{
//!     MultiVocab,
//!     io::{load_multi_vocab_path, save_multi_vocab_path},
//! };
//!
//! fn example(vocabs: &MultiVocab) -> tagvocab::VocabResult<MultiVocab> {
//!     save_multi_vocab_path(vocabs, "vocab.json")?;
//!     load_multi_vocab_path("vocab.json")
//! }
//! ```

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use serde_json::Value;

use crate::{
    errors::{VocabError, VocabResult},
    vocab::{MultiVocab, StateDict},
};

/// Write a state dict as JSON.
pub fn write_state_dict<W: Write>(
    state: &StateDict,
    writer: &mut W,
) -> VocabResult<()> {
    serde_json::to_writer_pretty(&mut *writer, state)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read a JSON state dict.
///
/// ## Errors
/// [`VocabError::InvalidState`] if the JSON is not an object.
pub fn read_state_dict<R: BufRead>(reader: R) -> VocabResult<StateDict> {
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Object(state) => Ok(state),
        _ => Err(VocabError::InvalidState(
            "state dict is not an object".to_string(),
        )),
    }
}

/// Write a [`MultiVocab`]'s state dict.
pub fn write_multi_vocab<W: Write>(
    vocab: &MultiVocab,
    writer: &mut W,
) -> VocabResult<()> {
    write_state_dict(&vocab.state_dict()?, writer)
}

/// Read a [`MultiVocab`] from its state dict.
pub fn read_multi_vocab<R: BufRead>(reader: R) -> VocabResult<MultiVocab> {
    MultiVocab::load_state_dict(read_state_dict(reader)?)
}

/// Save a [`MultiVocab`] to a file path.
pub fn save_multi_vocab_path<P: AsRef<Path>>(
    vocab: &MultiVocab,
    path: P,
) -> VocabResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_multi_vocab(vocab, &mut writer)?;
    log::info!("saved {} vocabs to {}", vocab.len(), path.display());
    Ok(())
}

/// Load a [`MultiVocab`] from a file path.
pub fn load_multi_vocab_path<P: AsRef<Path>>(path: P) -> VocabResult<MultiVocab> {
    let path = path.as_ref();
    let vocab = read_multi_vocab(BufReader::new(File::open(path)?))?;
    log::info!("loaded {} vocabs from {}", vocab.len(), path.display());
    Ok(vocab)
}
