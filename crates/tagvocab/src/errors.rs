//! # Error Types

/// Errors from tagvocab operations.
#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    /// The state dict has no ``_key2class`` registry.
    ///
    /// This marks a corrupt or incompatible checkpoint.
    #[error("cannot find class name mapping in state dict")]
    MissingClassRegistry,

    /// A named vocab has no entry in the class registry.
    #[error("no class recorded for vocab {name:?}")]
    MissingClass {
        /// The vocab name.
        name: String,
    },

    /// The class registry names a class with no known constructor.
    #[error("unknown vocab class {name:?}")]
    UnknownClass {
        /// The class name.
        name: String,
    },

    /// A vocab state is structurally invalid.
    #[error("invalid vocab state: {0}")]
    InvalidState(String),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error in corpus input.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for tagvocab operations.
pub type VocabResult<T> = core::result::Result<T, VocabError>;
