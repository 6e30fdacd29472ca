//! # Flat Unit Vocabulary
//!
//! [`UnitVocab`] is the ``{ unit <-> id }`` core shared by
//! [`crate::vocab::CharVocab`] and [`crate::vocab::WordVocab`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{VocabError, VocabResult},
    types::{Count, Unit, VocabHashMap, hash_map_with_capacity},
    vocab::specials::{UNK, UNK_ID, VOCAB_PREFIX},
};

/// Build options for flat vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabOptions {
    /// Language shorthand; carried in the state, not interpreted.
    pub lang: String,

    /// The word field to read.
    pub idx: usize,

    /// Minimum count for a unit to be retained.
    pub cutoff: Count,

    /// Lowercase units when counting and when looking up.
    pub lower: bool,
}

impl VocabOptions {
    /// Set the language shorthand.
    pub fn with_lang<S: Into<String>>(
        self,
        lang: S,
    ) -> Self {
        Self {
            lang: lang.into(),
            ..self
        }
    }

    /// Set the word field index.
    pub fn with_idx(
        self,
        idx: usize,
    ) -> Self {
        Self { idx, ..self }
    }

    /// Set the frequency cutoff.
    pub fn with_cutoff(
        self,
        cutoff: Count,
    ) -> Self {
        Self { cutoff, ..self }
    }

    /// Set lowercasing.
    pub fn with_lower(
        self,
        lower: bool,
    ) -> Self {
        Self { lower, ..self }
    }
}

/// Lookup operations common to flat vocabularies.
pub trait FlatVocab {
    /// The id for `unit`; [`UNK_ID`] when absent.
    fn unit2id(
        &self,
        unit: &str,
    ) -> usize;

    /// The unit for `id`, if `id` is in range.
    fn id2unit(
        &self,
        id: usize,
    ) -> Option<&str>;

    /// The number of units, including the reserved prefix.
    fn len(&self) -> usize;

    /// Always false for a built vocab; the reserved prefix is always present.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Map units to ids.
    fn map<I>(
        &self,
        units: I,
    ) -> Vec<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        units
            .into_iter()
            .map(|u| self.unit2id(u.as_ref()))
            .collect()
    }

    /// Map ids to units; out of range ids map to [`UNK`].
    fn unmap(
        &self,
        ids: &[usize],
    ) -> Vec<&str> {
        ids.iter()
            .map(|&id| self.id2unit(id).unwrap_or(UNK))
            .collect()
    }
}

/// Serialized state of a [`UnitVocab`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitVocabState {
    /// The build options.
    #[serde(flatten)]
    pub options: VocabOptions,

    /// Units in id order, reserved prefix first.
    pub id2unit: Vec<Unit>,
}

/// A flat ``{ unit <-> id }`` vocabulary.
///
/// The reserved prefix occupies ids ``0..4``;
/// ``unit2id[id2unit[i]] == i`` holds for every id.
#[derive(Debug, Clone)]
pub struct UnitVocab {
    options: VocabOptions,
    id2unit: Vec<Unit>,
    unit2id: VocabHashMap<Unit, usize>,
}

impl PartialEq for UnitVocab {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.options == other.options && self.id2unit == other.id2unit
    }
}

impl UnitVocab {
    /// Build a vocab of the reserved prefix followed by `units`.
    ///
    /// Repeated units, including corpus units which collide with
    /// the reserved prefix, keep their first id.
    pub fn from_units<I>(
        options: VocabOptions,
        units: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Unit>,
    {
        let units = units.into_iter();
        let (lower, _) = units.size_hint();

        let mut id2unit: Vec<Unit> = Vec::with_capacity(VOCAB_PREFIX.len() + lower);
        let mut unit2id: VocabHashMap<Unit, usize> =
            hash_map_with_capacity(VOCAB_PREFIX.len() + lower);

        for unit in VOCAB_PREFIX.into_iter().map(Unit::from).chain(units.map(Into::into)) {
            if unit2id.contains_key(&unit) {
                continue;
            }
            unit2id.insert(unit.clone(), id2unit.len());
            id2unit.push(unit);
        }

        Self {
            options,
            id2unit,
            unit2id,
        }
    }

    /// Restore a vocab from its state.
    ///
    /// ## Errors
    /// [`VocabError::InvalidState`] if the units do not begin with the
    /// reserved prefix, or contain duplicates.
    pub fn from_state(state: UnitVocabState) -> VocabResult<Self> {
        let UnitVocabState { options, id2unit } = state;
        let unit2id = index_units(&id2unit)?;
        Ok(Self {
            options,
            id2unit,
            unit2id,
        })
    }

    /// Snapshot the vocab state.
    pub fn state(&self) -> UnitVocabState {
        UnitVocabState {
            options: self.options.clone(),
            id2unit: self.id2unit.clone(),
        }
    }

    /// The build options.
    pub fn options(&self) -> &VocabOptions {
        &self.options
    }

    /// Units in id order.
    pub fn units(&self) -> &[Unit] {
        &self.id2unit
    }

    /// Apply the vocab's normalization to `unit`.
    pub fn normalize_unit<'a>(
        &self,
        unit: &'a str,
    ) -> Cow<'a, str> {
        if self.options.lower {
            Cow::Owned(unit.to_lowercase())
        } else {
            Cow::Borrowed(unit)
        }
    }

    /// The id of `unit`, if present.
    ///
    /// The unit is matched as given first, so the reserved prefix
    /// survives normalization; otherwise it is normalized and retried.
    pub fn lookup(
        &self,
        unit: &str,
    ) -> Option<usize> {
        if let Some(&id) = self.unit2id.get(unit) {
            return Some(id);
        }
        match self.normalize_unit(unit) {
            Cow::Owned(normal) => self.unit2id.get(normal.as_str()).copied(),
            Cow::Borrowed(_) => None,
        }
    }

    /// Does the vocab contain `unit`, after normalization?
    pub fn contains(
        &self,
        unit: &str,
    ) -> bool {
        self.lookup(unit).is_some()
    }
}

impl FlatVocab for UnitVocab {
    fn unit2id(
        &self,
        unit: &str,
    ) -> usize {
        self.lookup(unit).unwrap_or(UNK_ID)
    }

    fn id2unit(
        &self,
        id: usize,
    ) -> Option<&str> {
        self.id2unit.get(id).map(Unit::as_str)
    }

    fn len(&self) -> usize {
        self.id2unit.len()
    }
}

/// Build the inverse index of `id2unit`, checking the vocab invariants.
pub(crate) fn index_units(id2unit: &[Unit]) -> VocabResult<VocabHashMap<Unit, usize>> {
    if id2unit.len() < VOCAB_PREFIX.len()
        || id2unit
            .iter()
            .zip(VOCAB_PREFIX)
            .any(|(unit, expected)| unit.as_str() != expected)
    {
        return Err(VocabError::InvalidState(format!(
            "units must begin with {VOCAB_PREFIX:?}"
        )));
    }

    let mut unit2id = hash_map_with_capacity(id2unit.len());
    for (id, unit) in id2unit.iter().enumerate() {
        if unit2id.insert(unit.clone(), id).is_some() {
            return Err(VocabError::InvalidState(format!(
                "duplicate unit {unit:?}"
            )));
        }
    }
    Ok(unit2id)
}
