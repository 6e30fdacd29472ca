//! # Reserved Prefix Units
//!
//! Every vocabulary begins with the same sentinel units, at the lowest ids.

/// Padding unit.
pub const PAD: &str = "<PAD>";
/// Padding id.
pub const PAD_ID: usize = 0;

/// Unknown unit.
pub const UNK: &str = "<UNK>";
/// Unknown id.
pub const UNK_ID: usize = 1;

/// Empty unit.
pub const EMPTY: &str = "<EMPTY>";
/// Empty id.
pub const EMPTY_ID: usize = 2;

/// Root unit.
pub const ROOT: &str = "<ROOT>";
/// Root id.
pub const ROOT_ID: usize = 3;

/// The reserved prefix, in id order.
pub const VOCAB_PREFIX: [&str; 4] = [PAD, UNK, EMPTY, ROOT];

/// The surface form of an empty field.
pub const EMPTY_FIELD: &str = "_";

/// Is `unit` one of the reserved prefix units?
pub fn is_reserved(unit: &str) -> bool {
    VOCAB_PREFIX.contains(&unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_ids() {
        assert_eq!(VOCAB_PREFIX[PAD_ID], PAD);
        assert_eq!(VOCAB_PREFIX[UNK_ID], UNK);
        assert_eq!(VOCAB_PREFIX[EMPTY_ID], EMPTY);
        assert_eq!(VOCAB_PREFIX[ROOT_ID], ROOT);

        assert!(is_reserved("<ROOT>"));
        assert!(!is_reserved("_"));
    }
}
