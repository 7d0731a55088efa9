// src/export.rs
//! Flat CSV rows and nested JSON for the ranked list.
//!
//! CSV keeps one row per corridor (documents comma-joined, only the top quote);
//! JSON keeps everything.

use crate::rank::RankedOpportunity;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsvRow {
    #[serde(rename = "Corridor/Area")]
    pub corridor: String,
    #[serde(rename = "Total Score")]
    pub total_score: u32,
    #[serde(rename = "Average Score")]
    pub average_score: f64,
    #[serde(rename = "Mentions")]
    pub mentions: usize,
    #[serde(rename = "Timeline")]
    pub timeline: String,
    #[serde(rename = "Documents")]
    pub documents: String,
    #[serde(rename = "Top Evidence")]
    pub top_evidence: String,
}

impl From<&RankedOpportunity> for CsvRow {
    fn from(r: &RankedOpportunity) -> Self {
        Self {
            corridor: r.corridor.clone(),
            total_score: r.total_score,
            average_score: round1(r.avg_score),
            mentions: r.num_mentions,
            timeline: r.timeline.to_string(),
            documents: r
                .documents
                .iter()
                .map(|d| d.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            top_evidence: r.evidence.first().cloned().unwrap_or_default(),
        }
    }
}

pub fn csv_rows(ranked: &[RankedOpportunity]) -> Vec<CsvRow> {
    ranked.iter().map(CsvRow::from).collect()
}

/// Write the header plus one row per corridor.
pub fn write_csv<W: Write>(out: W, ranked: &[RankedOpportunity]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    if ranked.is_empty() {
        // serde-driven headers only appear with the first record
        wtr.write_record([
            "Corridor/Area",
            "Total Score",
            "Average Score",
            "Mentions",
            "Timeline",
            "Documents",
            "Top Evidence",
        ])
        .context("writing csv header")?;
    }
    for row in csv_rows(ranked) {
        wtr.serialize(&row)
            .with_context(|| format!("writing csv row for {}", row.corridor))?;
    }
    wtr.flush().context("flushing csv")?;
    Ok(())
}

pub fn to_csv_string(ranked: &[RankedOpportunity]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, ranked)?;
    String::from_utf8(buf).context("csv output is not utf-8")
}

pub fn to_json_pretty(ranked: &[RankedOpportunity]) -> Result<String> {
    serde_json::to_string_pretty(ranked).context("serializing ranked opportunities")
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
