// src/analyze/evidence.rs
//! Short quotes around corridor mentions, for the human reviewer.

use super::context::Mentions;
use crate::config::EvidenceConfig;
use once_cell::sync::OnceCell;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct EvidenceCollector {
    window: usize,
    min_len: usize,
}

impl EvidenceCollector {
    pub fn new(cfg: &EvidenceConfig) -> Self {
        Self {
            window: cfg.window,
            min_len: cfg.min_len,
        }
    }

    /// Up to `max_quotes` quotes in text order, each wrapped as `...quote...`.
    pub fn collect(&self, text: &str, corridor: &str, max_quotes: usize) -> Vec<String> {
        self.collect_mentions(text, &Mentions::find(text, corridor), max_quotes)
    }

    pub(crate) fn collect_mentions(
        &self,
        text: &str,
        mentions: &Mentions,
        max_quotes: usize,
    ) -> Vec<String> {
        let mut out = Vec::new();
        if max_quotes == 0 {
            return out;
        }
        for w in mentions.windows(text, self.window) {
            let quote = collapse_whitespace(w);
            if quote.chars().count() > self.min_len {
                out.push(format!("...{quote}..."));
            }
            if out.len() >= max_quotes {
                break;
            }
        }
        out
    }
}

/// Trim and collapse whitespace runs to single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"));
    re_ws.replace_all(s.trim(), " ").into_owned()
}
