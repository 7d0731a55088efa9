// src/analyze/timeline.rs
//! Coarse urgency classification from the text around corridor mentions.
//!
//! Categories are tested in declaration order (immediate → near_term →
//! long_term) and the first category with any hit wins, so a context holding
//! both "immediate" and "long-term" is `Immediate`.

use super::context::Mentions;
use crate::config::TimelineConfig;
use crate::error::Result;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Immediate,
    NearTerm,
    LongTerm,
    Unspecified,
}

impl Timeline {
    pub const ALL: [Timeline; 4] = [
        Timeline::Immediate,
        Timeline::NearTerm,
        Timeline::LongTerm,
        Timeline::Unspecified,
    ];

    /// Lower is more urgent.
    pub fn priority(self) -> u8 {
        match self {
            Timeline::Immediate => 1,
            Timeline::NearTerm => 2,
            Timeline::LongTerm => 3,
            Timeline::Unspecified => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Timeline::Immediate => "immediate",
            Timeline::NearTerm => "near_term",
            Timeline::LongTerm => "long_term",
            Timeline::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct TimelineClassifier {
    window: usize,
    categories: Vec<(Timeline, Vec<Regex>)>,
}

impl TimelineClassifier {
    pub fn new(cfg: &TimelineConfig) -> Result<Self> {
        let compile = |patterns: &[String]| -> Result<Vec<Regex>> {
            patterns
                .iter()
                .map(|p| {
                    RegexBuilder::new(p)
                        .case_insensitive(true)
                        .build()
                        .map_err(Into::into)
                })
                .collect()
        };
        Ok(Self {
            window: cfg.window,
            categories: vec![
                (Timeline::Immediate, compile(&cfg.immediate)?),
                (Timeline::NearTerm, compile(&cfg.near_term)?),
                (Timeline::LongTerm, compile(&cfg.long_term)?),
            ],
        })
    }

    pub fn classify(&self, text: &str, corridor: &str) -> Timeline {
        self.classify_mentions(text, &Mentions::find(text, corridor))
    }

    pub(crate) fn classify_mentions(&self, text: &str, mentions: &Mentions) -> Timeline {
        if mentions.is_empty() {
            return Timeline::Unspecified;
        }
        self.classify_context(&mentions.joined(text, self.window))
    }

    /// Classify an already-built context string.
    pub fn classify_context(&self, context: &str) -> Timeline {
        self.categories
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|re| re.is_match(context)))
            .map(|(t, _)| *t)
            .unwrap_or(Timeline::Unspecified)
    }
}
