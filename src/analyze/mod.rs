// src/analyze/mod.rs
//! Per-document analysis: extract corridors, score them, and keep the ones with
//! a meaningful signal along with their timeline and evidence.
//!
//! Order per corridor:
//! 1) signal strength (drop below `analysis.min_signal`)
//! 2) timeline classification
//! 3) evidence quotes (`evidence.per_document`)

pub mod context;
pub mod evidence;
pub mod extract;
pub mod signal;
pub mod timeline;

use crate::config::TrackerConfig;
use crate::document::Document;
use crate::error::Result;
use crate::telemetry::anon_hash;
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// Re-export convenient types.
pub use crate::analyze::context::Mentions;
pub use crate::analyze::evidence::EvidenceCollector;
pub use crate::analyze::extract::CorridorExtractor;
pub use crate::analyze::signal::{SignalBreakdown, SignalScorer};
pub use crate::analyze::timeline::{Timeline, TimelineClassifier};

/// One corridor found in one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOpportunity {
    pub corridor: String,
    pub signal_strength: u32,
    pub timeline: Timeline,
    pub source_document: String,
    pub document_date: String,
    pub evidence: Vec<String>,
}

/// One-time metrics registration (so series show up once a recorder is installed).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "rezoning_documents_analyzed_total",
            "Documents passed through the analyzer."
        );
        describe_counter!(
            "rezoning_corridor_candidates_total",
            "Corridor names produced by extraction."
        );
        describe_counter!(
            "rezoning_opportunities_kept_total",
            "Corridors at or above the signal threshold."
        );
        describe_counter!(
            "rezoning_opportunities_dropped_total",
            "Corridors below the signal threshold."
        );
    });
}

#[derive(Debug)]
pub struct DocumentAnalyzer {
    extractor: CorridorExtractor,
    scorer: SignalScorer,
    classifier: TimelineClassifier,
    evidence: EvidenceCollector,
    min_signal: u32,
    quotes_per_document: usize,
}

impl DocumentAnalyzer {
    pub fn new(cfg: &TrackerConfig) -> Result<Self> {
        ensure_metrics_described();
        Ok(Self {
            extractor: CorridorExtractor::new(&cfg.extraction)?,
            scorer: SignalScorer::new(&cfg.signals),
            classifier: TimelineClassifier::new(&cfg.timeline)?,
            evidence: EvidenceCollector::new(&cfg.evidence),
            min_signal: cfg.analysis.min_signal,
            quotes_per_document: cfg.evidence.per_document,
        })
    }

    pub fn extractor(&self) -> &CorridorExtractor {
        &self.extractor
    }

    pub fn scorer(&self) -> &SignalScorer {
        &self.scorer
    }

    pub fn classifier(&self) -> &TimelineClassifier {
        &self.classifier
    }

    pub fn evidence(&self) -> &EvidenceCollector {
        &self.evidence
    }

    pub fn analyze_document(&self, doc: &Document) -> Vec<DocumentOpportunity> {
        self.analyze(&doc.text, &doc.name, &doc.date)
    }

    /// Opportunities for one document, in extraction order.
    pub fn analyze(&self, text: &str, name: &str, date: &str) -> Vec<DocumentOpportunity> {
        let corridors = self.extractor.extract(text);
        let mut out = Vec::new();

        for corridor in &corridors {
            let mentions = Mentions::find(text, corridor);
            let b = self.scorer.breakdown_mentions(text, &mentions);

            if b.score < self.min_signal {
                debug!(
                    target: "rezoning",
                    corridor = %corridor, score = b.score, min = self.min_signal,
                    "corridor below threshold"
                );
                continue;
            }

            let timeline = self.classifier.classify_mentions(text, &mentions);
            let evidence = self
                .evidence
                .collect_mentions(text, &mentions, self.quotes_per_document);

            debug!(
                target: "rezoning",
                corridor = %corridor, score = b.score, %timeline,
                high = b.high_hits, medium = b.medium_hits, infra = b.infrastructure_hits,
                mentions = b.mentions,
                "corridor kept"
            );

            out.push(DocumentOpportunity {
                corridor: corridor.clone(),
                signal_strength: b.score,
                timeline,
                source_document: name.to_string(),
                document_date: date.to_string(),
                evidence,
            });
        }

        let dropped = corridors.len() - out.len();
        counter!("rezoning_documents_analyzed_total").increment(1);
        counter!("rezoning_corridor_candidates_total").increment(corridors.len() as u64);
        counter!("rezoning_opportunities_kept_total").increment(out.len() as u64);
        counter!("rezoning_opportunities_dropped_total").increment(dropped as u64);

        // Never log raw text. Only hashed id + counts.
        let id = anon_hash(&format!("{name}\u{1f}{text}"));
        info!(
            target: "rezoning",
            %id, candidates = corridors.len(), kept = out.len(), dropped,
            "document analyzed"
        );

        out
    }
}
