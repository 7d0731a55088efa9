// src/summary.rs
//! Summary statistics over a ranked list: timeline distribution and the
//! counts called out at the end of a report.

use crate::analyze::Timeline;
use crate::rank::RankedOpportunity;
use serde::Serialize;
use std::fmt;

/// Corridors at or above this total are "high confidence".
pub const HIGH_CONFIDENCE_SCORE: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub corridors: usize,
    /// (timeline, count) in priority order; zero counts omitted.
    pub timeline_distribution: Vec<(Timeline, usize)>,
    pub immediate: usize,
    pub near_term: usize,
    pub high_confidence: usize,
}

impl Summary {
    pub fn from_ranked(ranked: &[RankedOpportunity]) -> Self {
        let count = |t: Timeline| ranked.iter().filter(|r| r.timeline == t).count();
        let timeline_distribution = Timeline::ALL
            .iter()
            .map(|&t| (t, count(t)))
            .filter(|&(_, n)| n > 0)
            .collect();

        Self {
            corridors: ranked.len(),
            timeline_distribution,
            immediate: count(Timeline::Immediate),
            near_term: count(Timeline::NearTerm),
            high_confidence: ranked
                .iter()
                .filter(|r| r.total_score >= HIGH_CONFIDENCE_SCORE)
                .count(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(80))?;
        writeln!(f, "SUMMARY STATISTICS")?;
        writeln!(f, "{}", "=".repeat(80))?;
        writeln!(f, "Total opportunities ranked: {}", self.corridors)?;
        writeln!(f)?;
        writeln!(f, "Timeline Distribution:")?;
        for (t, n) in &self.timeline_distribution {
            writeln!(f, "  {t}: {n} corridors")?;
        }
        writeln!(f)?;
        writeln!(f, "Immediate opportunities: {}", self.immediate)?;
        writeln!(f, "Near-term pipeline: {}", self.near_term)?;
        writeln!(
            f,
            "High-confidence signals (score >= {HIGH_CONFIDENCE_SCORE}): {}",
            self.high_confidence
        )
    }
}
