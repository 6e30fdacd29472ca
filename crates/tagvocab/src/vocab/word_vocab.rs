//! # Word Vocabulary
//!
//! Vocabulary over a whole word field: word forms, POS tags, and relations.
//!
//! The relation field ([`RELATION_FIELD`]) is special-cased:
//! its vocabulary is always [`RELATION_LABELS`], whatever the corpus holds.

use serde::{Deserialize, Serialize};

use crate::{
    corpus::field_values,
    errors::VocabResult,
    types::Unit,
    vocab::{
        UnitCounter,
        relations::{RELATION_FIELD, RELATION_LABELS},
        specials::{EMPTY_FIELD, EMPTY_ID},
        unit_vocab::{FlatVocab, UnitVocab, UnitVocabState, VocabOptions},
    },
};

/// Serialized state of a [`WordVocab`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordVocabState {
    /// The flat vocab state.
    #[serde(flatten)]
    pub base: UnitVocabState,

    /// Units mapped to the empty sentinel.
    #[serde(default)]
    pub ignore: Vec<Unit>,
}

/// Vocabulary over one field of every word.
///
/// Units in the ignore list are excluded from the vocab, and look up
/// as [`EMPTY_ID`]; while the ignore list is non-empty, [`EMPTY_ID`]
/// looks up as ``"_"``, and ``"_"`` as [`EMPTY_ID`].
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab {
    inner: UnitVocab,
    ignore: Vec<Unit>,
}

impl WordVocab {
    /// Build from field ``options.idx`` of every word.
    ///
    /// ## Arguments
    /// * `data` - the tokenized sentences.
    /// * `options` - build options.
    /// * `ignore` - units to exclude, and to map to [`EMPTY_ID`].
    ///
    /// When ``options.idx == RELATION_FIELD`` the corpus is not consulted;
    /// see [`WordVocab::relations`].
    pub fn build<D, W, F, S>(
        data: &[D],
        options: VocabOptions,
        ignore: &[S],
    ) -> Self
    where
        D: AsRef<[W]>,
        W: AsRef<[F]>,
        F: AsRef<str>,
        S: AsRef<str>,
    {
        let ignore: Vec<Unit> = ignore.iter().map(|u| Unit::from(u.as_ref())).collect();

        if options.idx == RELATION_FIELD {
            return Self::relations(options).with_ignore(ignore);
        }

        let mut counter = UnitCounter::new();
        if options.lower {
            counter.update_from_units(field_values(data, options.idx).map(str::to_lowercase));
        } else {
            counter.update_from_units(field_values(data, options.idx));
        }

        // With an ignore list, "_" is the rendering of EMPTY_ID.
        let dropped = counter.retain_frequent(options.cutoff, |unit| {
            (!ignore.is_empty() && unit == EMPTY_FIELD)
                || ignore.iter().any(|u| u.as_str() == unit)
        });

        let inner = UnitVocab::from_units(options, counter.into_sorted_units());
        log::debug!(
            "built word vocab (field {}): {} units ({dropped} dropped)",
            inner.options().idx,
            inner.len()
        );

        Self { inner, ignore }
    }

    /// The closed relation label vocabulary.
    pub fn relations(options: VocabOptions) -> Self {
        Self {
            inner: UnitVocab::from_units(options, RELATION_LABELS),
            ignore: Vec::new(),
        }
    }

    fn with_ignore(
        self,
        ignore: Vec<Unit>,
    ) -> Self {
        Self { ignore, ..self }
    }

    /// Restore from a state.
    pub fn from_state(state: WordVocabState) -> VocabResult<Self> {
        Ok(Self {
            inner: UnitVocab::from_state(state.base)?,
            ignore: state.ignore,
        })
    }

    /// Snapshot the state.
    pub fn state(&self) -> WordVocabState {
        WordVocabState {
            base: self.inner.state(),
            ignore: self.ignore.clone(),
        }
    }

    /// The ignore list.
    pub fn ignore(&self) -> &[Unit] {
        &self.ignore
    }

    /// Is `unit` in the ignore list?
    pub fn is_ignored(
        &self,
        unit: &str,
    ) -> bool {
        self.ignore.iter().any(|u| u.as_str() == unit)
    }

    /// The underlying flat vocab.
    pub fn unit_vocab(&self) -> &UnitVocab {
        &self.inner
    }
}

impl FlatVocab for WordVocab {
    fn unit2id(
        &self,
        unit: &str,
    ) -> usize {
        if self.is_ignored(unit) || (!self.ignore.is_empty() && unit == EMPTY_FIELD) {
            EMPTY_ID
        } else {
            self.inner.unit2id(unit)
        }
    }

    fn id2unit(
        &self,
        id: usize,
    ) -> Option<&str> {
        if !self.ignore.is_empty() && id == EMPTY_ID {
            Some(EMPTY_FIELD)
        } else {
            self.inner.id2unit(id)
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
