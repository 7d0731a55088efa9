//! # Tracker Engine
//! Runs the per-document analyzer over a corpus in input order, then ranks.
//! Pure and synchronous: documents in, ranked corridors out.

use crate::analyze::{DocumentAnalyzer, DocumentOpportunity};
use crate::config::TrackerConfig;
use crate::document::{validate_all, Document, RawDocument};
use crate::error::Result;
use crate::rank::{rank_with, RankedOpportunity};
use tracing::info;

#[derive(Debug)]
pub struct RezoningTracker {
    analyzer: DocumentAnalyzer,
    evidence_per_corridor: usize,
}

impl RezoningTracker {
    pub fn new(cfg: &TrackerConfig) -> Result<Self> {
        Ok(Self {
            analyzer: DocumentAnalyzer::new(cfg)?,
            evidence_per_corridor: cfg.evidence.per_corridor,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&TrackerConfig::default())
    }

    pub fn analyzer(&self) -> &DocumentAnalyzer {
        &self.analyzer
    }

    /// Flat per-document list, documents in input order.
    pub fn collect_opportunities(&self, documents: &[Document]) -> Vec<DocumentOpportunity> {
        documents
            .iter()
            .flat_map(|d| self.analyzer.analyze_document(d))
            .collect()
    }

    pub fn rank(&self, opportunities: &[DocumentOpportunity]) -> Vec<RankedOpportunity> {
        rank_with(opportunities, self.evidence_per_corridor)
    }

    pub fn analyze_documents(&self, documents: &[Document]) -> Vec<RankedOpportunity> {
        let all = self.collect_opportunities(documents);
        let ranked = self.rank(&all);
        info!(
            target: "rezoning",
            documents = documents.len(),
            opportunities = all.len(),
            corridors = ranked.len(),
            "corpus ranked"
        );
        ranked
    }

    /// Validate every record first; a malformed one aborts the whole run.
    pub fn analyze_raw(&self, raw: Vec<RawDocument>) -> Result<Vec<RankedOpportunity>> {
        let docs = validate_all(raw)?;
        Ok(self.analyze_documents(&docs))
    }
}
