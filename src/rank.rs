//! # Corridor Ranking
//! Merges per-document opportunities by corridor name across the corpus and
//! sorts the result by total score (descending).
//!
//! - Grouping key is the exact corridor string; groups keep first-seen order.
//! - Timeline: most urgent across the group (first seen wins a tie).
//! - Evidence: first-seen unique quotes, at most `per_corridor`.
//! - Sort is stable, so equal totals keep first-seen order.
//!
//! Pure function of its input, no I/O.

use crate::analyze::{DocumentOpportunity, Timeline};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_EVIDENCE_PER_CORRIDOR: usize = 3;

/// A contributing document inside a ranked corridor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub name: String,
    pub date: String,
    pub score: u32,
}

/// One corridor across the whole corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOpportunity {
    pub corridor: String,
    pub total_score: u32,
    pub avg_score: f64,
    pub num_mentions: usize,
    pub timeline: Timeline,
    pub documents: Vec<DocumentRef>,
    pub evidence: Vec<String>,
}

#[derive(Debug)]
struct Group {
    corridor: String,
    total: u32,
    timeline: Timeline,
    documents: Vec<DocumentRef>,
    evidence: Vec<String>,
    seen_evidence: HashSet<String>,
}

/// Rank with the default evidence cap.
pub fn rank(opportunities: &[DocumentOpportunity]) -> Vec<RankedOpportunity> {
    rank_with(opportunities, DEFAULT_EVIDENCE_PER_CORRIDOR)
}

pub fn rank_with(
    opportunities: &[DocumentOpportunity],
    evidence_per_corridor: usize,
) -> Vec<RankedOpportunity> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for op in opportunities {
        let slot = *index.entry(op.corridor.as_str()).or_insert_with(|| {
            groups.push(Group {
                corridor: op.corridor.clone(),
                total: 0,
                timeline: op.timeline,
                documents: Vec::new(),
                evidence: Vec::new(),
                seen_evidence: HashSet::new(),
            });
            groups.len() - 1
        });
        let g = &mut groups[slot];

        g.total = g.total.saturating_add(op.signal_strength);
        g.documents.push(DocumentRef {
            name: op.source_document.clone(),
            date: op.document_date.clone(),
            score: op.signal_strength,
        });
        // Strictly more urgent replaces; ties keep the earlier record.
        if op.timeline.priority() < g.timeline.priority() {
            g.timeline = op.timeline;
        }
        for quote in &op.evidence {
            if g.evidence.len() >= evidence_per_corridor {
                break;
            }
            if g.seen_evidence.insert(quote.clone()) {
                g.evidence.push(quote.clone());
            }
        }
    }

    let mut ranked: Vec<RankedOpportunity> = groups
        .into_iter()
        .map(|g| {
            let n = g.documents.len();
            RankedOpportunity {
                corridor: g.corridor,
                total_score: g.total,
                avg_score: f64::from(g.total) / n as f64,
                num_mentions: n,
                timeline: g.timeline,
                documents: g.documents,
                evidence: g.evidence,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(corridor: &str, doc: &str, score: u32, timeline: Timeline, ev: &[&str]) -> DocumentOpportunity {
        DocumentOpportunity {
            corridor: corridor.to_string(),
            signal_strength: score,
            timeline,
            source_document: doc.to_string(),
            document_date: "2024-10-01".to_string(),
            evidence: ev.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn wilkinson_boulevard_aggregates() {
        let ops = vec![
            op("Wilkinson Boulevard", "A", 20, Timeline::LongTerm, &[]),
            op("Wilkinson Boulevard", "B", 15, Timeline::NearTerm, &[]),
        ];
        let r = rank(&ops);
        assert_eq!(r.len(), 1);
        assert_eq!(r[0].total_score, 35);
        assert_eq!(r[0].num_mentions, 2);
        assert!((r[0].avg_score - 17.5).abs() < 1e-9);
        assert_eq!(r[0].timeline, Timeline::NearTerm);
        assert_eq!(
            r[0].documents.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            vec!["A", "B"]
        );
    }

    #[test]
    fn sorted_descending_with_stable_ties() {
        let ops = vec![
            op("Alpha Road", "A", 20, Timeline::Unspecified, &[]),
            op("Beta Road", "A", 40, Timeline::Unspecified, &[]),
            op("Gamma Road", "A", 20, Timeline::Unspecified, &[]),
        ];
        let names: Vec<_> = rank(&ops).into_iter().map(|r| r.corridor).collect();
        assert_eq!(names, vec!["Beta Road", "Alpha Road", "Gamma Road"]);
    }

    #[test]
    fn evidence_is_unique_first_seen_and_capped() {
        let ops = vec![
            op("Elm Road", "A", 20, Timeline::Unspecified, &["q1", "q2"]),
            op("Elm Road", "B", 20, Timeline::Unspecified, &["q2", "q3"]),
            op("Elm Road", "C", 20, Timeline::Unspecified, &["q4"]),
        ];
        let r = rank(&ops);
        assert_eq!(r[0].evidence, vec!["q1", "q2", "q3"]);
    }

    #[test]
    fn most_urgent_timeline_wins() {
        let ops = vec![
            op("Elm Road", "A", 20, Timeline::Unspecified, &[]),
            op("Elm Road", "B", 20, Timeline::Immediate, &[]),
            op("Elm Road", "C", 20, Timeline::LongTerm, &[]),
        ];
        assert_eq!(rank(&ops)[0].timeline, Timeline::Immediate);
    }

    #[test]
    fn case_variants_are_separate_corridors() {
        let ops = vec![
            op("North Tryon Street", "A", 20, Timeline::Unspecified, &[]),
            op("North Tryon Street Corridor", "A", 20, Timeline::Unspecified, &[]),
        ];
        assert_eq!(rank(&ops).len(), 2);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(rank(&[]).is_empty());
    }
}
