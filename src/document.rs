// src/document.rs
//! Input documents and their validation.

use crate::error::{Result, TrackerError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// A validated planning document. Immutable input to the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    /// ISO date (`YYYY-MM-DD`), kept verbatim.
    pub date: String,
    pub text: String,
}

/// Wire shape of a document as read from JSON; every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, date: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            text: text.into(),
        }
    }

    /// Parsed date, if the string is a plain ISO calendar date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

impl TryFrom<RawDocument> for Document {
    type Error = TrackerError;

    /// Fails on the first missing field, checked as text, name, date.
    /// An empty text is valid (it simply yields no corridors).
    fn try_from(raw: RawDocument) -> Result<Self> {
        let text = raw.text.ok_or(TrackerError::InvalidInput { field: "text" })?;
        let name = raw.name.ok_or(TrackerError::InvalidInput { field: "name" })?;
        let date = raw.date.ok_or(TrackerError::InvalidInput { field: "date" })?;

        let doc = Document { name, date, text };
        if doc.parsed_date().is_none() {
            warn!(target: "rezoning", document = %doc.name, date = %doc.date, "document date is not YYYY-MM-DD");
        }
        Ok(doc)
    }
}

/// Validate a batch in order; stops at the first malformed record.
pub fn validate_all(raw: Vec<RawDocument>) -> Result<Vec<Document>> {
    raw.into_iter().map(Document::try_from).collect()
}

/// Read a JSON array of documents from disk and validate it.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let content = fs::read_to_string(path)?;
    let raw: Vec<RawDocument> = serde_json::from_str(&content)
        .map_err(|e| TrackerError::Parse(format!("{}: {e}", path.display())))?;
    validate_all(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: Option<&str>, date: Option<&str>, text: Option<&str>) -> RawDocument {
        RawDocument {
            name: name.map(String::from),
            date: date.map(String::from),
            text: text.map(String::from),
        }
    }

    #[test]
    fn missing_fields_are_reported_by_name() {
        let e = Document::try_from(raw(Some("n"), Some("2024-01-01"), None)).unwrap_err();
        assert!(matches!(e, TrackerError::InvalidInput { field: "text" }));

        let e = Document::try_from(raw(None, Some("2024-01-01"), Some("t"))).unwrap_err();
        assert!(matches!(e, TrackerError::InvalidInput { field: "name" }));

        let e = Document::try_from(raw(Some("n"), None, Some("t"))).unwrap_err();
        assert!(matches!(e, TrackerError::InvalidInput { field: "date" }));
    }

    #[test]
    fn empty_text_is_accepted() {
        let d = Document::try_from(raw(Some("n"), Some("2024-01-01"), Some(""))).unwrap();
        assert!(d.text.is_empty());
    }

    #[test]
    fn non_iso_date_is_kept_verbatim() {
        let d = Document::try_from(raw(Some("n"), Some("Q4 2024"), Some("t"))).unwrap();
        assert_eq!(d.date, "Q4 2024");
        assert!(d.parsed_date().is_none());
    }

    #[test]
    fn batch_stops_at_first_bad_record() {
        let batch = vec![
            raw(Some("a"), Some("2024-01-01"), Some("x")),
            raw(Some("b"), None, Some("y")),
            raw(None, None, None),
        ];
        let e = validate_all(batch).unwrap_err();
        assert!(matches!(e, TrackerError::InvalidInput { field: "date" }));
    }
}
