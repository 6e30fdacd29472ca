//! # Corpus Model
//!
//! Vocabularies are built from tokenized sentences:
//! * a [`Word`] is an ordered tuple of string fields
//!   (surface form, upos, relation, feats, ...);
//! * a [`Sentence`] is a sequence of words.
//!
//! The builders accept any nesting of ``AsRef`` slices, so
//! ``Vec<Sentence>``, ``&[Vec<Vec<String>>]`` and ``&[&[&[&str]]]``
//! all work.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::{VocabError, VocabResult},
    types::Unit,
};

/// A word: an ordered tuple of fields.
pub type Word = Vec<Unit>;

/// A sentence: a sequence of words.
pub type Sentence = Vec<Word>;

/// Iterate over field `idx` of every word in `data`.
///
/// Words too short to carry the field are skipped.
pub fn field_values<'a, D, W, F>(
    data: &'a [D],
    idx: usize,
) -> impl Iterator<Item = &'a str> + 'a
where
    D: AsRef<[W]>,
    W: AsRef<[F]> + 'a,
    F: AsRef<str> + 'a,
{
    data.iter()
        .flat_map(|sent| sent.as_ref().iter())
        .filter_map(move |word| word.as_ref().get(idx).map(|f| f.as_ref()))
}

/// Read tab-separated sentences.
///
/// One word per line, fields separated by tabs; sentences are separated
/// by blank lines, and lines starting with ``#`` are comments.
///
/// Every word of a sentence must have the same number of fields.
pub fn read_sentences<R: BufRead>(reader: R) -> VocabResult<Vec<Sentence>> {
    let mut sentences: Vec<Sentence> = Vec::new();
    let mut current: Sentence = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() {
            if !current.is_empty() {
                sentences.push(core::mem::take(&mut current));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let word: Word = line.split('\t').map(Unit::from).collect();
        if let Some(first) = current.first()
            && first.len() != word.len()
        {
            return Err(VocabError::Parse(format!(
                "line {}: expected {} fields, found {}",
                lineno + 1,
                first.len(),
                word.len()
            )));
        }
        current.push(word);
    }
    if !current.is_empty() {
        sentences.push(current);
    }

    log::debug!("read {} sentences", sentences.len());
    Ok(sentences)
}

/// Read tab-separated sentences from a file path.
///
/// See [`read_sentences`].
pub fn read_sentences_path<P: AsRef<Path>>(path: P) -> VocabResult<Vec<Sentence>> {
    let reader = BufReader::new(File::open(path)?);
    read_sentences(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# sent_id = 1
1\tThe\tDET
2\tdog\tNOUN

# sent_id = 2
1\tbarks\tVERB
";

    #[test]
    fn test_read_sentences() {
        let sentences = read_sentences(SAMPLE.as_bytes()).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].len(), 2);
        assert_eq!(sentences[0][1], vec![Unit::from("2"), "dog".into(), "NOUN".into()]);
        assert_eq!(sentences[1][0][1], "barks");
    }

    #[test]
    fn test_read_sentences_field_mismatch() {
        let text = "a\tb\nc\n";
        let err = read_sentences(text.as_bytes()).unwrap_err();
        assert!(matches!(err, VocabError::Parse(msg) if msg.starts_with("line 2")));
    }

    #[test]
    fn test_field_values() {
        let data = vec![vec![vec!["a", "X"], vec!["b"]], vec![vec!["c", "Y"]]];
        let values: Vec<&str> = field_values(&data, 1).collect();
        assert_eq!(values, vec!["X", "Y"]);
    }
}
