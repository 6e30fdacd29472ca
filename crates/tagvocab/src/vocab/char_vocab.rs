//! # Character Vocabulary

use crate::{
    corpus::field_values,
    errors::VocabResult,
    vocab::{
        UnitCounter,
        unit_vocab::{FlatVocab, UnitVocab, UnitVocabState, VocabOptions},
    },
};

/// Vocabulary over the characters of a word field.
///
/// Characters counted fewer than ``cutoff`` times are dropped;
/// the survivors follow the reserved prefix ordered by
/// (count descending, character ascending).
#[derive(Debug, Clone, PartialEq)]
pub struct CharVocab {
    inner: UnitVocab,
}

impl CharVocab {
    /// Build from the characters of field ``options.idx`` of every word.
    pub fn build<D, W, F>(
        data: &[D],
        options: VocabOptions,
    ) -> Self
    where
        D: AsRef<[W]>,
        W: AsRef<[F]>,
        F: AsRef<str>,
    {
        let mut counter = UnitCounter::new();
        for value in field_values(data, options.idx) {
            if options.lower {
                counter.update_from_chars(&value.to_lowercase());
            } else {
                counter.update_from_chars(value);
            }
        }
        Self::from_counter(counter, options)
    }

    /// Build directly from pre-tokenized character streams.
    ///
    /// Each stream contributes every one of its characters;
    /// ``options.idx`` is ignored.
    pub fn from_char_streams<S: AsRef<str>>(
        streams: &[S],
        options: VocabOptions,
    ) -> Self {
        let mut counter = UnitCounter::new();
        for stream in streams {
            if options.lower {
                counter.update_from_chars(&stream.as_ref().to_lowercase());
            } else {
                counter.update_from_chars(stream.as_ref());
            }
        }
        Self::from_counter(counter, options)
    }

    fn from_counter(
        mut counter: UnitCounter,
        options: VocabOptions,
    ) -> Self {
        let dropped = counter.retain_frequent(options.cutoff, |_| false);
        let inner = UnitVocab::from_units(options, counter.into_sorted_units());
        log::debug!(
            "built char vocab: {} units ({dropped} below cutoff)",
            inner.len()
        );
        Self { inner }
    }

    /// Restore from a state.
    pub fn from_state(state: UnitVocabState) -> VocabResult<Self> {
        Ok(Self {
            inner: UnitVocab::from_state(state)?,
        })
    }

    /// Snapshot the state.
    pub fn state(&self) -> UnitVocabState {
        self.inner.state()
    }

    /// The underlying flat vocab.
    pub fn unit_vocab(&self) -> &UnitVocab {
        &self.inner
    }
}

impl FlatVocab for CharVocab {
    fn unit2id(
        &self,
        unit: &str,
    ) -> usize {
        self.inner.unit2id(unit)
    }

    fn id2unit(
        &self,
        id: usize,
    ) -> Option<&str> {
        self.inner.id2unit(id)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
