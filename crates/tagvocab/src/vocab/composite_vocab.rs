//! # Composite Tag Vocabulary
//!
//! A composite tag is a list of subfields joined by a separator:
//! * positional tags (``"NNS"`` with ``sep = ""``) decompose into one
//!   sub-vocab per position;
//! * keyed tags (``"Case=Nom|Number=Sing"`` with ``sep = "|"``)
//!   decompose into one sub-vocab per feature key.
//!
//! A tag maps to one id per sub-vocab.
//!
//! [`XposVocab`] and [`FeatureVocab`] share this logic, and differ only
//! in the class tag recorded by [`crate::vocab::MultiVocab`].

use std::{collections::BTreeMap, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::{
    corpus::field_values,
    errors::{VocabError, VocabResult},
    types::{Unit, VocabHashMap, VocabHashSet},
    vocab::{
        specials::{EMPTY_FIELD, EMPTY_ID, UNK, UNK_ID, VOCAB_PREFIX},
        unit_vocab::index_units,
    },
};

/// Build options for composite vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeOptions {
    /// Language shorthand; carried in the state, not interpreted.
    pub lang: String,

    /// The word field to read.
    pub idx: usize,

    /// Subfield separator; empty splits into characters.
    pub sep: String,

    /// Subfields are ``key=value`` pairs.
    pub keyed: bool,
}

impl CompositeOptions {
    /// Options for ``Key=Value|Key=Value`` feature strings.
    pub fn keyed_features() -> Self {
        Self::default().with_sep("|").with_keyed(true)
    }

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

    /// Set the subfield separator.
    pub fn with_sep<S: Into<String>>(
        self,
        sep: S,
    ) -> Self {
        Self {
            sep: sep.into(),
            ..self
        }
    }

    /// Set keyed mode.
    pub fn with_keyed(
        self,
        keyed: bool,
    ) -> Self {
        Self { keyed, ..self }
    }
}

/// A composite unit, split into subfields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitParts<'a> {
    /// Subfields by position.
    Positional(Vec<&'a str>),

    /// Subfield values by key; the last duplicate key wins.
    Keyed(BTreeMap<&'a str, &'a str>),
}

impl UnitParts<'_> {
    /// The number of subfields.
    pub fn len(&self) -> usize {
        match self {
            Self::Positional(parts) => parts.len(),
            Self::Keyed(parts) => parts.len(),
        }
    }

    /// Are there no subfields?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serialized state of one sub-vocab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartState {
    /// The feature key, or the decimal position.
    pub key: Unit,

    /// Units in id order, reserved prefix first.
    pub id2unit: Vec<Unit>,
}

/// Serialized state of a [`CompositeVocab`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeVocabState {
    /// The build options.
    #[serde(flatten)]
    pub options: CompositeOptions,

    /// The sub-vocabs, in key order.
    pub parts: Vec<PartState>,
}

/// One subfield's ``{ unit <-> id }`` vocabulary.
#[derive(Debug, Clone)]
pub struct PartVocab {
    key: Unit,
    id2unit: Vec<Unit>,
    unit2id: VocabHashMap<Unit, usize>,
}

impl PartialEq for PartVocab {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.key == other.key && self.id2unit == other.id2unit
    }
}

impl PartVocab {
    fn new(key: Unit) -> Self {
        let id2unit: Vec<Unit> = VOCAB_PREFIX.into_iter().map(Unit::from).collect();
        let unit2id = id2unit
            .iter()
            .enumerate()
            .map(|(id, unit)| (unit.clone(), id))
            .collect();
        Self {
            key,
            id2unit,
            unit2id,
        }
    }

    fn push(
        &mut self,
        unit: &str,
    ) {
        if !self.unit2id.contains_key(unit) {
            self.unit2id.insert(unit.into(), self.id2unit.len());
            self.id2unit.push(unit.into());
        }
    }

    /// The feature key, or the decimal position.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Units in id order.
    pub fn units(&self) -> &[Unit] {
        &self.id2unit
    }

    /// The number of units, including the reserved prefix.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.id2unit.len()
    }

    /// The id for `unit`; [`UNK_ID`] when absent.
    pub fn unit2id(
        &self,
        unit: &str,
    ) -> usize {
        self.unit2id.get(unit).copied().unwrap_or(UNK_ID)
    }

    /// The unit for `id`, if `id` is in range.
    pub fn id2unit(
        &self,
        id: usize,
    ) -> Option<&str> {
        self.id2unit.get(id).map(Unit::as_str)
    }
}

/// Vocabulary over composite tags; one sub-vocab per subfield.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeVocab {
    options: CompositeOptions,
    parts: Vec<PartVocab>,
}

impl CompositeVocab {
    /// Build from field ``options.idx`` of every word.
    ///
    /// Sub-vocab values are kept in first-seen order; keyed sub-vocabs
    /// are ordered by key. If the corpus yields no subfields at all,
    /// a single placeholder sub-vocab holding only the reserved prefix
    /// is created.
    pub fn build<D, W, F>(
        data: &[D],
        options: CompositeOptions,
    ) -> Self
    where
        D: AsRef<[W]>,
        W: AsRef<[F]>,
        F: AsRef<str>,
    {
        let mut parts: Vec<PartVocab> = Vec::new();

        if options.keyed {
            let mut keyed: BTreeMap<Unit, PartVocab> = BTreeMap::new();
            for unit in field_values(data, options.idx) {
                if let UnitParts::Keyed(fields) = split_unit(unit, &options) {
                    for (key, value) in fields {
                        keyed
                            .entry(key.into())
                            .or_insert_with(|| PartVocab::new(key.into()))
                            .push(value);
                    }
                }
            }
            parts.extend(keyed.into_values());
        } else {
            for unit in field_values(data, options.idx) {
                if let UnitParts::Positional(fields) = split_unit(unit, &options) {
                    for (pos, value) in fields.into_iter().enumerate() {
                        if pos == parts.len() {
                            parts.push(PartVocab::new(pos.to_string().into()));
                        }
                        parts[pos].push(value);
                    }
                }
            }
        }

        if parts.is_empty() {
            let key = if options.keyed { EMPTY_FIELD } else { "0" };
            parts.push(PartVocab::new(key.into()));
        }

        let vocab = Self { options, parts };
        log::debug!(
            "built composite vocab (field {}): part sizes {:?}",
            vocab.options.idx,
            vocab.lens()
        );
        vocab
    }

    /// Restore from a state.
    ///
    /// ## Errors
    /// [`VocabError::InvalidState`] if there are no sub-vocabs, keys repeat,
    /// or any sub-vocab breaks the reserved prefix / uniqueness invariants.
    pub fn from_state(state: CompositeVocabState) -> VocabResult<Self> {
        if state.parts.is_empty() {
            return Err(VocabError::InvalidState(
                "composite vocab has no parts".to_string(),
            ));
        }

        let mut seen: VocabHashSet<Unit> = VocabHashSet::with_capacity(state.parts.len());
        let mut parts = Vec::with_capacity(state.parts.len());
        for PartState { key, id2unit } in state.parts {
            if !seen.insert(key.clone()) {
                return Err(VocabError::InvalidState(format!(
                    "duplicate composite key {key:?}"
                )));
            }
            let unit2id = index_units(&id2unit)?;
            parts.push(PartVocab {
                key,
                id2unit,
                unit2id,
            });
        }

        Ok(Self {
            options: state.options,
            parts,
        })
    }

    /// Snapshot the state.
    pub fn state(&self) -> CompositeVocabState {
        CompositeVocabState {
            options: self.options.clone(),
            parts: self
                .parts
                .iter()
                .map(|part| PartState {
                    key: part.key.clone(),
                    id2unit: part.id2unit.clone(),
                })
                .collect(),
        }
    }

    /// The build options.
    pub fn options(&self) -> &CompositeOptions {
        &self.options
    }

    /// Split `unit` into subfields.
    pub fn unit2parts<'a>(
        &self,
        unit: &'a str,
    ) -> UnitParts<'a> {
        split_unit(unit, &self.options)
    }

    /// The number of sub-vocabs.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// The sub-vocab keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(PartVocab::key)
    }

    /// The sub-vocab at `index`.
    pub fn part(
        &self,
        index: usize,
    ) -> Option<&PartVocab> {
        self.parts.get(index)
    }

    /// The size of each sub-vocab.
    pub fn lens(&self) -> Vec<usize> {
        self.parts.iter().map(PartVocab::len).collect()
    }

    /// Map a composite unit to one id per sub-vocab.
    ///
    /// Missing subfields map to [`EMPTY_ID`]; unseen values to [`UNK_ID`].
    pub fn unit2id(
        &self,
        unit: &str,
    ) -> Vec<usize> {
        match self.unit2parts(unit) {
            UnitParts::Keyed(fields) => self
                .parts
                .iter()
                .map(|part| {
                    fields
                        .get(part.key())
                        .map_or(EMPTY_ID, |value| part.unit2id(value))
                })
                .collect(),
            UnitParts::Positional(fields) => self
                .parts
                .iter()
                .enumerate()
                .map(|(pos, part)| {
                    fields
                        .get(pos)
                        .map_or(EMPTY_ID, |value| part.unit2id(value))
                })
                .collect(),
        }
    }

    /// Render one id per sub-vocab back into a composite unit.
    ///
    /// [`EMPTY_ID`] subfields are omitted; an all-empty unit renders as ``"_"``.
    pub fn id2unit(
        &self,
        ids: &[usize],
    ) -> String {
        let items: Vec<String> = ids
            .iter()
            .zip(&self.parts)
            .filter(|&(&id, _)| id != EMPTY_ID)
            .map(|(&id, part)| {
                let value = part.id2unit(id).unwrap_or(UNK);
                if self.options.keyed {
                    format!("{}={value}", part.key())
                } else {
                    value.to_string()
                }
            })
            .collect();

        let unit = items.join(self.options.sep.as_str());
        if unit.is_empty() {
            EMPTY_FIELD.to_string()
        } else {
            unit
        }
    }

    /// Map composite units to ids.
    pub fn map<I>(
        &self,
        units: I,
    ) -> Vec<Vec<usize>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        units
            .into_iter()
            .map(|u| self.unit2id(u.as_ref()))
            .collect()
    }

    /// Map ids back to composite units.
    pub fn unmap<I>(
        &self,
        ids: I,
    ) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<[usize]>,
    {
        ids.into_iter()
            .map(|id| self.id2unit(id.as_ref()))
            .collect()
    }
}

fn split_unit<'a>(
    unit: &'a str,
    options: &CompositeOptions,
) -> UnitParts<'a> {
    let fields: Vec<&'a str> = if options.sep.is_empty() {
        unit.char_indices()
            .map(|(i, c)| &unit[i..i + c.len_utf8()])
            .collect()
    } else {
        unit.split(options.sep.as_str()).collect()
    };

    if options.keyed {
        if fields.len() == 1 && fields[0] == EMPTY_FIELD {
            return UnitParts::Keyed(BTreeMap::new());
        }
        UnitParts::Keyed(
            fields
                .into_iter()
                .filter(|field| !field.is_empty())
                .map(|field| field.split_once('=').unwrap_or((field, "")))
                .collect(),
        )
    } else if unit == EMPTY_FIELD {
        UnitParts::Positional(Vec::new())
    } else {
        UnitParts::Positional(fields)
    }
}

macro_rules! composite_vocab_type {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(CompositeVocab);

        impl $name {
            /// Build from field ``options.idx`` of every word.
            ///
            /// See [`CompositeVocab::build`].
            pub fn build<D, W, F>(
                data: &[D],
                options: CompositeOptions,
            ) -> Self
            where
                D: AsRef<[W]>,
                W: AsRef<[F]>,
                F: AsRef<str>,
            {
                Self(CompositeVocab::build(data, options))
            }

            /// Restore from a state.
            pub fn from_state(state: CompositeVocabState) -> VocabResult<Self> {
                CompositeVocab::from_state(state).map(Self)
            }

            /// Release the inner composite vocab.
            pub fn into_inner(self) -> CompositeVocab {
                self.0
            }
        }

        impl Deref for $name {
            type Target = CompositeVocab;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<CompositeVocab> for $name {
            fn from(vocab: CompositeVocab) -> Self {
                Self(vocab)
            }
        }
    };
}

composite_vocab_type!(
    XposVocab,
    "Composite vocabulary over language-specific POS tags (XPOS)."
);

composite_vocab_type!(
    FeatureVocab,
    "Composite vocabulary over morphological feature strings."
);

#[cfg(test)]
mod tests {
    use super::*;

    fn xpos_data() -> Vec<Vec<Vec<&'static str>>> {
        vec![vec![
            vec!["dogs", "NNS"],
            vec!["run", "VB"],
            vec!["fast", "RB"],
            vec![",", "_"],
        ]]
    }

    fn feats_data() -> Vec<Vec<Vec<&'static str>>> {
        vec![vec![
            vec!["dogs", "Number=Plur"],
            vec!["run", "Mood=Ind|Number=Plur|Tense=Pres"],
            vec!["fast", "_"],
            vec!["I", "Case=Nom|Number=Sing"],
        ]]
    }

    #[test]
    fn test_split_unit() {
        let positional = CompositeOptions::default();
        assert_eq!(
            split_unit("NNS", &positional),
            UnitParts::Positional(vec!["N", "N", "S"])
        );
        assert!(split_unit("_", &positional).is_empty());

        let keyed = CompositeOptions::keyed_features();
        assert_eq!(
            split_unit("Case=Nom|Number=Sing|Case=Acc", &keyed),
            UnitParts::Keyed([("Case", "Acc"), ("Number", "Sing")].into_iter().collect())
        );
        assert!(split_unit("_", &keyed).is_empty());
        assert_eq!(
            split_unit("Foreign", &keyed),
            UnitParts::Keyed([("Foreign", "")].into_iter().collect())
        );
    }

    #[test]
    fn test_positional_build() {
        let vocab = XposVocab::build(&xpos_data(), CompositeOptions::default().with_idx(1));

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.keys().collect::<Vec<_>>(), vec!["0", "1", "2"]);
        assert_eq!(vocab.lens(), vec![7, 6, 5]);
        assert_eq!(&vocab.part(0).unwrap().units()[4..], &["N", "V", "R"]);
        assert_eq!(&vocab.part(1).unwrap().units()[4..], &["N", "B"]);

        assert_eq!(vocab.unit2id("NNS"), vec![4, 4, 4]);
        assert_eq!(vocab.unit2id("VB"), vec![5, 5, EMPTY_ID]);
        assert_eq!(vocab.unit2id("_"), vec![EMPTY_ID; 3]);
        assert_eq!(vocab.unit2id("XB"), vec![UNK_ID, 5, EMPTY_ID]);

        for tag in ["NNS", "VB", "RB", "_"] {
            assert_eq!(vocab.id2unit(&vocab.unit2id(tag)), tag);
        }
    }

    #[test]
    fn test_keyed_build() {
        let vocab = FeatureVocab::build(
            &feats_data(),
            CompositeOptions::keyed_features().with_idx(1),
        );

        assert_eq!(
            vocab.keys().collect::<Vec<_>>(),
            vec!["Case", "Mood", "Number", "Tense"]
        );
        assert_eq!(vocab.lens(), vec![5, 5, 6, 5]);

        assert_eq!(
            vocab.unit2id("Number=Sing|Case=Nom"),
            vec![4, EMPTY_ID, 5, EMPTY_ID]
        );
        assert_eq!(vocab.unit2id("Number=Dual"), vec![EMPTY_ID, EMPTY_ID, UNK_ID, EMPTY_ID]);
        assert_eq!(vocab.unit2id("_"), vec![EMPTY_ID; 4]);

        assert_eq!(
            vocab.id2unit(&vocab.unit2id("Number=Sing|Case=Nom")),
            "Case=Nom|Number=Sing"
        );
        assert_eq!(
            vocab.unmap(vocab.map(["Mood=Ind|Number=Plur|Tense=Pres", "_"])),
            vec!["Mood=Ind|Number=Plur|Tense=Pres", "_"]
        );
    }

    #[test]
    fn test_empty_field_placeholder() {
        let data = vec![vec![vec!["a", "_"], vec!["b", "_"]]];

        let keyed = FeatureVocab::build(&data, CompositeOptions::keyed_features().with_idx(1));
        assert_eq!(keyed.keys().collect::<Vec<_>>(), vec!["_"]);
        assert_eq!(keyed.lens(), vec![VOCAB_PREFIX.len()]);
        assert_eq!(keyed.id2unit(&keyed.unit2id("_")), "_");

        let positional = XposVocab::build(&data, CompositeOptions::default().with_idx(1));
        assert_eq!(positional.keys().collect::<Vec<_>>(), vec!["0"]);
        assert_eq!(positional.unit2id("_"), vec![EMPTY_ID]);
    }

    #[test]
    fn test_out_of_range_ids() {
        let vocab = XposVocab::build(&xpos_data(), CompositeOptions::default().with_idx(1));
        assert_eq!(vocab.id2unit(&[4, 99, EMPTY_ID]), "N<UNK>");
    }

    #[test]
    fn test_state_roundtrip() {
        let vocab = FeatureVocab::build(
            &feats_data(),
            CompositeOptions::keyed_features().with_idx(1).with_lang("en"),
        );
        let restored = FeatureVocab::from_state(vocab.state()).unwrap();
        assert_eq!(restored, vocab);
    }

    #[test]
    fn test_from_state_rejects_bad_parts() {
        let vocab = XposVocab::build(&xpos_data(), CompositeOptions::default().with_idx(1));

        let mut state = vocab.state();
        state.parts.clear();
        assert!(matches!(
            CompositeVocab::from_state(state),
            Err(VocabError::InvalidState(_))
        ));

        let mut state = vocab.state();
        state.parts[1].key = "0".into();
        assert!(matches!(
            CompositeVocab::from_state(state),
            Err(VocabError::InvalidState(_))
        ));

        let mut state = vocab.state();
        state.parts[0].id2unit.remove(0);
        assert!(matches!(
            CompositeVocab::from_state(state),
            Err(VocabError::InvalidState(_))
        ));
    }
}
