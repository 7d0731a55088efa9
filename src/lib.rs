// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod rank;
pub mod telemetry;

// Per-document pipeline (extractor, scorer, timeline, evidence)
pub mod analyze;

// Output layers over the ranked list
pub mod export;
pub mod report;
pub mod sample;
pub mod summary;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{DocumentAnalyzer, DocumentOpportunity, Timeline};
pub use crate::config::TrackerConfig;
pub use crate::document::{Document, RawDocument};
pub use crate::engine::RezoningTracker;
pub use crate::error::TrackerError;
pub use crate::rank::{rank, DocumentRef, RankedOpportunity};
