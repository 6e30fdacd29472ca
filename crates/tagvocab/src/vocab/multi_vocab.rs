//! # Multi Vocabulary
//!
//! [`MultiVocab`] is an ordered, named collection of vocabularies.
//!
//! Its state dict holds each entry's own state, plus a ``"_key2class"``
//! registry from entry name to class name; the registry selects the
//! constructor used to restore each entry:
//!
//! ```json
//! {
//!   "char": { "lang": "en", "idx": 0, "cutoff": 0, "lower": false, "id2unit": [...] },
//!   "feats": { "lang": "en", "idx": 3, "sep": "|", "keyed": true, "parts": [...] },
//!   "_key2class": { "char": "CharVocab", "feats": "FeatureVocab" }
//! }
//! ```

use std::str::FromStr;

use serde_json::Value;

use crate::{
    errors::{VocabError, VocabResult},
    vocab::{
        CharVocab,
        FeatureVocab,
        WordVocab,
        XposVocab,
        unit_vocab::FlatVocab,
    },
};

/// The state dict key of the class registry.
pub const KEY2CLASS: &str = "_key2class";

/// A state dict: a JSON object, in insertion order.
pub type StateDict = serde_json::Map<String, Value>;

/// The class tag recorded for each [`MultiVocab`] entry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
)]
pub enum VocabClass {
    /// [`CharVocab`].
    #[strum(serialize = "CharVocab")]
    Char,

    /// [`WordVocab`].
    #[strum(serialize = "WordVocab")]
    Word,

    /// [`XposVocab`].
    #[strum(serialize = "XPOSVocab")]
    Xpos,

    /// [`FeatureVocab`].
    #[strum(serialize = "FeatureVocab")]
    Feature,
}

/// Any vocabulary which can be held by a [`MultiVocab`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnyVocab {
    /// A character vocab.
    Char(CharVocab),

    /// A word / tag / relation vocab.
    Word(WordVocab),

    /// An XPOS composite vocab.
    Xpos(XposVocab),

    /// A feature composite vocab.
    Feature(FeatureVocab),
}

impl From<CharVocab> for AnyVocab {
    fn from(vocab: CharVocab) -> Self {
        Self::Char(vocab)
    }
}

impl From<WordVocab> for AnyVocab {
    fn from(vocab: WordVocab) -> Self {
        Self::Word(vocab)
    }
}

impl From<XposVocab> for AnyVocab {
    fn from(vocab: XposVocab) -> Self {
        Self::Xpos(vocab)
    }
}

impl From<FeatureVocab> for AnyVocab {
    fn from(vocab: FeatureVocab) -> Self {
        Self::Feature(vocab)
    }
}

impl AnyVocab {
    /// The class tag.
    pub fn class(&self) -> VocabClass {
        match self {
            Self::Char(_) => VocabClass::Char,
            Self::Word(_) => VocabClass::Word,
            Self::Xpos(_) => VocabClass::Xpos,
            Self::Feature(_) => VocabClass::Feature,
        }
    }

    /// The vocab sizes: one for flat vocabs, one per sub-vocab for composites.
    pub fn sizes(&self) -> Vec<usize> {
        match self {
            Self::Char(v) => vec![v.len()],
            Self::Word(v) => vec![v.len()],
            Self::Xpos(v) => v.lens(),
            Self::Feature(v) => v.lens(),
        }
    }

    /// Snapshot the state as JSON.
    pub fn state_value(&self) -> VocabResult<Value> {
        Ok(match self {
            Self::Char(v) => serde_json::to_value(v.state())?,
            Self::Word(v) => serde_json::to_value(v.state())?,
            Self::Xpos(v) => serde_json::to_value(v.state())?,
            Self::Feature(v) => serde_json::to_value(v.state())?,
        })
    }

    /// Restore a vocab of class `class` from its JSON state.
    pub fn from_state_value(
        class: VocabClass,
        state: Value,
    ) -> VocabResult<Self> {
        Ok(match class {
            VocabClass::Char => CharVocab::from_state(serde_json::from_value(state)?)?.into(),
            VocabClass::Word => WordVocab::from_state(serde_json::from_value(state)?)?.into(),
            VocabClass::Xpos => XposVocab::from_state(serde_json::from_value(state)?)?.into(),
            VocabClass::Feature => {
                FeatureVocab::from_state(serde_json::from_value(state)?)?.into()
            }
        })
    }

    /// The inner [`CharVocab`], if this is one.
    pub fn as_char(&self) -> Option<&CharVocab> {
        match self {
            Self::Char(v) => Some(v),
            _ => None,
        }
    }

    /// The inner [`WordVocab`], if this is one.
    pub fn as_word(&self) -> Option<&WordVocab> {
        match self {
            Self::Word(v) => Some(v),
            _ => None,
        }
    }

    /// The inner [`XposVocab`], if this is one.
    pub fn as_xpos(&self) -> Option<&XposVocab> {
        match self {
            Self::Xpos(v) => Some(v),
            _ => None,
        }
    }

    /// The inner [`FeatureVocab`], if this is one.
    pub fn as_feature(&self) -> Option<&FeatureVocab> {
        match self {
            Self::Feature(v) => Some(v),
            _ => None,
        }
    }
}

/// An ordered collection of named vocabularies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiVocab {
    entries: Vec<(String, AnyVocab)>,
}

impl MultiVocab {
    /// Add or replace the vocab named `name`.
    ///
    /// A replaced entry keeps its position.
    ///
    /// ## Returns
    /// The previous vocab of that name, if any.
    ///
    /// ## Errors
    /// [`VocabError::InvalidState`] if `name` is the reserved [`KEY2CLASS`].
    pub fn insert<S, V>(
        &mut self,
        name: S,
        vocab: V,
    ) -> VocabResult<Option<AnyVocab>>
    where
        S: Into<String>,
        V: Into<AnyVocab>,
    {
        let name = name.into();
        if name == KEY2CLASS {
            return Err(VocabError::InvalidState(format!(
                "{KEY2CLASS:?} is a reserved vocab name"
            )));
        }

        let vocab = vocab.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Ok(Some(core::mem::replace(slot, vocab))),
            None => {
                self.entries.push((name, vocab));
                Ok(None)
            }
        }
    }

    /// The vocab named `name`.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&AnyVocab> {
        self.entries
            .iter()
            .find_map(|(n, v)| if n == name { Some(v) } else { None })
    }

    /// Is there a vocab named `name`?
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.get(name).is_some()
    }

    /// The number of vocabs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the collection empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The vocab names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over ``(name, vocab)`` entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnyVocab)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Build the state dict.
    ///
    /// Each entry's state is stored under its name; the class registry
    /// is stored under [`KEY2CLASS`].
    pub fn state_dict(&self) -> VocabResult<StateDict> {
        let mut state = StateDict::new();
        let mut key2class = StateDict::new();
        for (name, vocab) in &self.entries {
            state.insert(name.clone(), vocab.state_value()?);
            key2class.insert(name.clone(), Value::String(vocab.class().to_string()));
        }
        state.insert(KEY2CLASS.to_string(), Value::Object(key2class));
        Ok(state)
    }

    /// Restore from a state dict.
    ///
    /// ## Errors
    /// * [`VocabError::MissingClassRegistry`] if there is no [`KEY2CLASS`] entry;
    ///   the state dict is corrupt or from an incompatible writer.
    /// * [`VocabError::MissingClass`] / [`VocabError::UnknownClass`] if an
    ///   entry has no usable class.
    /// * Any error from restoring the individual vocab states.
    pub fn load_state_dict(mut state: StateDict) -> VocabResult<Self> {
        let key2class = match state.shift_remove(KEY2CLASS) {
            Some(Value::Object(key2class)) => key2class,
            Some(_) => {
                return Err(VocabError::InvalidState(format!(
                    "{KEY2CLASS:?} is not an object"
                )));
            }
            None => return Err(VocabError::MissingClassRegistry),
        };

        let mut multi = Self::default();
        for (name, sub_state) in state {
            let class_name = key2class
                .get(&name)
                .and_then(Value::as_str)
                .ok_or_else(|| VocabError::MissingClass { name: name.clone() })?;
            let class = VocabClass::from_str(class_name).map_err(|_| VocabError::UnknownClass {
                name: class_name.to_string(),
            })?;

            let vocab = AnyVocab::from_state_value(class, sub_state)?;
            log::debug!("restored {class} {name:?}: sizes {:?}", vocab.sizes());
            multi.entries.push((name, vocab));
        }
        Ok(multi)
    }

    /// Restore from a JSON value, which must be a state dict object.
    pub fn load_state_value(state: Value) -> VocabResult<Self> {
        match state {
            Value::Object(state) => Self::load_state_dict(state),
            _ => Err(VocabError::InvalidState(
                "state dict is not an object".to_string(),
            )),
        }
    }
}
