//! Built-in keyword and pattern tables.
//!
//! These seed `TrackerConfig::default()` and fill any section a config file
//! leaves out.

pub(crate) const PREPOSITIONS: &[&str] = &["along", "near", "adjacent to", "corridor"];

pub(crate) const ROAD_SUFFIXES: &[&str] = &[
    "Street",
    "Road",
    "Boulevard",
    "Avenue",
    "Drive",
    "Parkway",
    "Highway",
    "Corridor",
];

pub(crate) const AREA_WORDS: &[&str] = &["corridor", "area", "district", "neighborhood"];

pub(crate) const RANGE_OPENERS: &[&str] = &["between", "from"];
pub(crate) const RANGE_JOINERS: &[&str] = &["and", "to"];

pub(crate) const STOP_WORDS: &[&str] = &[
    "the", "this", "these", "those", "that", "a", "an", "and", "or", "but", "in", "on", "at",
    "to", "for", "of", "with", "by", "from",
];

pub(crate) const GENERIC_TERMS: &[&str] = &["area", "corridor", "district", "street"];

pub(crate) const HIGH_SIGNAL: &[&str] = &[
    "encourage development",
    "promote mixed-use",
    "transit-oriented",
    "strategic corridor",
    "priority area",
    "future growth",
    "redevelopment opportunity",
    "transformation",
    "master plan update",
];

pub(crate) const MEDIUM_SIGNAL: &[&str] = &[
    "consider rezoning",
    "evaluate",
    "study area",
    "potential",
    "appropriate for",
    "consistent with",
    "align with",
];

pub(crate) const INFRASTRUCTURE: &[&str] = &[
    "sewer expansion",
    "water infrastructure",
    "transit investment",
    "road improvements",
    "utility extension",
];

pub(crate) const TIMELINE_IMMEDIATE: &[&str] = &[
    r"within (\d+) months?",
    r"by (\d{4})",
    r"next year",
    r"immediate",
];

pub(crate) const TIMELINE_NEAR_TERM: &[&str] =
    &[r"within (\d+) years?", r"short[- ]term", r"upcoming"];

pub(crate) const TIMELINE_LONG_TERM: &[&str] =
    &[r"long[- ]term", r"future", r"eventual", r"phase [2-9]"];

pub(crate) fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
