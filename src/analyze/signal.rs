// src/analyze/signal.rs
//! Rezoning-intent scoring around corridor mentions.
//!
//! Context = every mention window (lower-cased) joined by a space.
//! Score = Σ tier_weight × phrase_count + min(bonus × mentions, cap), clamped.
//! It is a transparent keyword heuristic; the keyword lists are the tuning surface.

use super::context::Mentions;
use crate::config::{SignalConfig, SIGNAL_CEILING};

/// Per-tier hit counts behind a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalBreakdown {
    pub mentions: usize,
    pub high_hits: u32,
    pub medium_hits: u32,
    pub infrastructure_hits: u32,
    pub frequency_bonus: u32,
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct SignalScorer {
    cfg: SignalConfig,
}

impl SignalScorer {
    pub fn new(cfg: &SignalConfig) -> Self {
        let lower = |v: &[String]| v.iter().map(|k| k.to_lowercase()).collect::<Vec<_>>();
        Self {
            cfg: SignalConfig {
                high: lower(&cfg.high),
                medium: lower(&cfg.medium),
                infrastructure: lower(&cfg.infrastructure),
                ..cfg.clone()
            },
        }
    }

    /// Score in `[0, max_score]`; 0 when the corridor never occurs.
    pub fn score(&self, text: &str, corridor: &str) -> u32 {
        self.breakdown(text, corridor).score
    }

    pub fn breakdown(&self, text: &str, corridor: &str) -> SignalBreakdown {
        self.breakdown_mentions(text, &Mentions::find(text, corridor))
    }

    pub(crate) fn breakdown_mentions(&self, text: &str, mentions: &Mentions) -> SignalBreakdown {
        if mentions.is_empty() {
            return SignalBreakdown::default();
        }

        let context = mentions.joined(text, self.cfg.window).to_lowercase();

        let high_hits = count_all(&context, &self.cfg.high);
        let medium_hits = count_all(&context, &self.cfg.medium);
        let infrastructure_hits = count_all(&context, &self.cfg.infrastructure);

        let n = u32::try_from(mentions.len()).unwrap_or(u32::MAX);
        let frequency_bonus = n
            .saturating_mul(self.cfg.mention_bonus)
            .min(self.cfg.mention_bonus_cap);

        let raw = high_hits
            .saturating_mul(self.cfg.high_weight)
            .saturating_add(medium_hits.saturating_mul(self.cfg.medium_weight))
            .saturating_add(infrastructure_hits.saturating_mul(self.cfg.infrastructure_weight))
            .saturating_add(frequency_bonus);

        SignalBreakdown {
            mentions: mentions.len(),
            high_hits,
            medium_hits,
            infrastructure_hits,
            frequency_bonus,
            score: raw.min(self.cfg.max_score.min(SIGNAL_CEILING)),
        }
    }
}

/// Total non-overlapping occurrences of every phrase in `haystack`.
fn count_all(haystack: &str, phrases: &[String]) -> u32 {
    phrases
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| haystack.matches(p.as_str()).count())
        .fold(0u32, |acc, c| {
            acc.saturating_add(u32::try_from(c).unwrap_or(u32::MAX))
        })
}
