// src/analyze/extract.rs
//! Corridor-name extraction.
//!
//! Three pattern families, all case-sensitive:
//! 1. `<preposition> <Proper Name> <RoadSuffix>`  ("along North Tryon Street")
//! 2. `<Proper Name> <area word>`                 ("Eastland area")
//! 3. `between|from <Proper Name> and|to <Proper Name>` (two candidates)
//!
//! Candidates are filtered against stop words and generic terms
//! (case-insensitive) and a minimum length. No canonicalization: "Tryon Street"
//! and "North Tryon Street" are different corridors.

use crate::config::ExtractionConfig;
use crate::error::Result;
use regex::Regex;
use std::collections::HashSet;

/// One or more capitalized words: `Word`, `Word Word`, ...
const PROPER_PHRASE: &str = r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*";

#[derive(Debug)]
pub struct CorridorExtractor {
    families: Vec<Regex>,
    stop_words: HashSet<String>,
    generic_terms: HashSet<String>,
    min_name_len: usize,
}

impl CorridorExtractor {
    pub fn new(cfg: &ExtractionConfig) -> Result<Self> {
        let road = format!(
            r"(?:{preps})\s+({PROPER_PHRASE}(?:\s+(?:{suffixes})))",
            preps = alternation(&cfg.prepositions),
            suffixes = alternation(&cfg.road_suffixes),
        );
        let area = format!(
            r"({PROPER_PHRASE})\s+(?:{areas})",
            areas = alternation(&cfg.area_words),
        );
        let range = format!(
            r"(?:{openers})\s+({PROPER_PHRASE})\s+(?:{joiners})\s+({PROPER_PHRASE})",
            openers = alternation(&cfg.range_openers),
            joiners = alternation(&cfg.range_joiners),
        );

        let families = [road, area, range]
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            families,
            stop_words: lowered(&cfg.stop_words),
            generic_terms: lowered(&cfg.generic_terms),
            min_name_len: cfg.min_name_len,
        })
    }

    /// Distinct corridor names in first-seen order (family 1 first, then 2, then 3).
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for re in &self.families {
            for caps in re.captures_iter(text) {
                for m in caps.iter().skip(1).flatten() {
                    let name = m.as_str().trim();
                    if self.keep(name) && seen.insert(name.to_string()) {
                        out.push(name.to_string());
                    }
                }
            }
        }
        out
    }

    fn keep(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        !self.stop_words.contains(&lower)
            && name.chars().count() > self.min_name_len
            && !self.generic_terms.contains(&lower)
    }
}

fn alternation(words: &[String]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

fn lowered(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}
