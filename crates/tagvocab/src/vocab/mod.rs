//! # Vocabulary
//!
//! This module provides the vocabularies and their state dict io.
//!
//! Every vocabulary reserves the same prefix at the lowest ids
//! (see [`specials`]); unknown units map to [`specials::UNK_ID`].
//!
//! ## Flat Vocabularies
//!
//! * [`CharVocab`] - characters of a word field.
//! * [`WordVocab`] - whole word fields; the relation field uses the
//!   closed [`relations::RELATION_LABELS`] set.
//!
//! Both implement [`FlatVocab`].
//!
//! ## Composite Vocabularies
//!
//! * [`XposVocab`], [`FeatureVocab`] - see [`CompositeVocab`].
//!
//! ## Collections
//!
//! * [`MultiVocab`] - named vocabs, saved and restored through a
//!   class-tagged state dict; see [`io`].
pub mod io;

pub mod char_vocab;
pub mod composite_vocab;
pub mod multi_vocab;
pub mod relations;
pub mod specials;
pub mod unit_counter;
pub mod unit_vocab;
pub mod word_vocab;

#[doc(inline)]
pub use char_vocab::CharVocab;
#[doc(inline)]
pub use composite_vocab::{CompositeOptions, CompositeVocab, FeatureVocab, XposVocab};
#[doc(inline)]
pub use multi_vocab::{AnyVocab, MultiVocab, StateDict, VocabClass};
#[doc(inline)]
pub use unit_counter::UnitCounter;
#[doc(inline)]
pub use unit_vocab::{FlatVocab, UnitVocab, VocabOptions};
#[doc(inline)]
pub use word_vocab::WordVocab;
