//! # Relation Labels
//!
//! The relation vocabulary is a closed label set, not learned from a corpus.

/// The word field holding the relation label.
pub const RELATION_FIELD: usize = 2;

/// The closed set of relation labels, in id order (after the reserved prefix).
pub const RELATION_LABELS: [&str; 47] = [
    "mod",
    "amr-unknown",
    "in",
    "arg0",
    "quantity",
    "arg1",
    "polarity",
    "arg3",
    "root",
    "out",
    "domain-of",
    "location",
    "time",
    "example",
    "conj",
    "purpose",
    "manner",
    "arg4",
    "arg2",
    "direction",
    "compared-to",
    "accompanier",
    "topic",
    "extent",
    "mode",
    "vocative",
    "condition",
    "date",
    "cause-of",
    "instrument",
    "degree",
    "concession",
    "organization",
    "arg5",
    "country",
    "medium",
    "name",
    "order",
    "poss-of",
    "range",
    "source",
    "target",
    "unit",
    "day",
    "month",
    "value",
    "year",
];
