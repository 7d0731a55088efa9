// Bundled sample corpus: excerpts from Charlotte planning documents.

use crate::document::Document;
use once_cell::sync::Lazy;

static SAMPLE: Lazy<Vec<Document>> = Lazy::new(|| {
    let raw = include_str!("../data/sample_documents.json");
    serde_json::from_str::<Vec<Document>>(raw).expect("valid sample corpus")
});

pub fn documents() -> Vec<Document> {
    SAMPLE.clone()
}
