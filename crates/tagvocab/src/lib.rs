//! # `tagvocab` Tagging Vocabulary Suite
//!
//! Builds the ``unit <-> id`` vocabularies that feed the embedding layers
//! of a part-of-speech / dependency-parsing model; and saves / restores
//! them as a class-tagged state dict.
//!
//! See:
//! * [`corpus`] for the ``Sentence`` / ``Word`` input model.
//! * [`vocab`] for the vocabulary types:
//!   * [`vocab::CharVocab`] - character vocabularies.
//!   * [`vocab::WordVocab`] - word form, tag, and relation vocabularies.
//!   * [`vocab::XposVocab`], [`vocab::FeatureVocab`] - composite tag vocabularies.
//!   * [`vocab::MultiVocab`] - a named collection, with state dict io.
//!
//! ## Crate Features
//!
//! #### feature: ``std``
//!
//! The "std" feature enables the use of the `std` library.
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! ## Building A Vocabulary
//!
//! ```rust
//! use tagvocab::{
//!     corpus::Sentence,
//!     vocab::{CharVocab, MultiVocab, VocabOptions, WordVocab},
//! };
//!
//! let data: Vec<Sentence> = vec![
//!     vec![
//!         vec!["The".into(), "DET".into()],
//!         vec!["dog".into(), "NOUN".into()],
//!     ],
//! ];
//!
//! let mut vocabs = MultiVocab::default();
//! vocabs
//!     .insert("char", CharVocab::build(&data, VocabOptions::default()))
//!     .unwrap();
//! vocabs
//!     .insert(
//!         "word",
//!         WordVocab::build(&data, VocabOptions::default().with_lower(true), &["_"]),
//!     )
//!     .unwrap();
//!
//! let state = vocabs.state_dict().unwrap();
//! let restored = MultiVocab::load_state_dict(state).unwrap();
//! assert_eq!(restored, vocabs);
//! ```
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod errors;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{VocabError, VocabResult};
