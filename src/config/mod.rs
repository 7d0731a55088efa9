// src/config/mod.rs
//! Tracker configuration: keyword tables, timeline patterns, windows and thresholds.
//!
//! Every component receives its section at construction, so tests can swap a
//! keyword list without touching globals. All keys are optional; anything
//! missing falls back to the built-in tables in `defaults.rs`.
//!
//! Lookup order for `load_default()`:
//! 1) $REZONING_CONFIG_PATH (must exist)
//! 2) config/rezoning.toml
//! 3) config/rezoning.json
//! 4) built-in defaults
//!
//! `REZONING_MIN_SIGNAL` overrides `analysis.min_signal` when it parses.

pub(crate) mod defaults;

use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use defaults::owned;

pub const DEFAULT_CONFIG_PATH: &str = "config/rezoning.toml";
pub const DEFAULT_CONFIG_PATH_JSON: &str = "config/rezoning.json";

pub const ENV_CONFIG_PATH: &str = "REZONING_CONFIG_PATH";
pub const ENV_MIN_SIGNAL: &str = "REZONING_MIN_SIGNAL";

/// Upper bound for any per-document signal strength.
pub const SIGNAL_CEILING: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub extraction: ExtractionConfig,
    pub signals: SignalConfig,
    pub timeline: TimelineConfig,
    pub evidence: EvidenceConfig,
    pub analysis: AnalysisConfig,
}

/// Word lists that assemble the three corridor pattern families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub prepositions: Vec<String>,
    pub road_suffixes: Vec<String>,
    pub area_words: Vec<String>,
    pub range_openers: Vec<String>,
    pub range_joiners: Vec<String>,
    pub stop_words: Vec<String>,
    pub generic_terms: Vec<String>,
    /// Names must be strictly longer than this (characters).
    pub min_name_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            prepositions: owned(defaults::PREPOSITIONS),
            road_suffixes: owned(defaults::ROAD_SUFFIXES),
            area_words: owned(defaults::AREA_WORDS),
            range_openers: owned(defaults::RANGE_OPENERS),
            range_joiners: owned(defaults::RANGE_JOINERS),
            stop_words: owned(defaults::STOP_WORDS),
            generic_terms: owned(defaults::GENERIC_TERMS),
            min_name_len: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub infrastructure: Vec<String>,
    pub high_weight: u32,
    pub medium_weight: u32,
    pub infrastructure_weight: u32,
    /// Characters taken on each side of a mention.
    pub window: usize,
    pub mention_bonus: u32,
    pub mention_bonus_cap: u32,
    /// At most `SIGNAL_CEILING`.
    pub max_score: u32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            high: owned(defaults::HIGH_SIGNAL),
            medium: owned(defaults::MEDIUM_SIGNAL),
            infrastructure: owned(defaults::INFRASTRUCTURE),
            high_weight: 10,
            medium_weight: 5,
            infrastructure_weight: 8,
            window: 300,
            mention_bonus: 3,
            mention_bonus_cap: 20,
            max_score: SIGNAL_CEILING,
        }
    }
}

/// Regex lists per urgency category. Declaration order is precedence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub window: usize,
    pub immediate: Vec<String>,
    pub near_term: Vec<String>,
    pub long_term: Vec<String>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            window: 200,
            immediate: owned(defaults::TIMELINE_IMMEDIATE),
            near_term: owned(defaults::TIMELINE_NEAR_TERM),
            long_term: owned(defaults::TIMELINE_LONG_TERM),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    pub window: usize,
    /// Quotes must be strictly longer than this after cleanup.
    pub min_len: usize,
    pub per_document: usize,
    pub per_corridor: usize,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            window: 150,
            min_len: 50,
            per_document: 2,
            per_corridor: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Corridors scoring below this in a document are dropped (inclusive pass).
    pub min_signal: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { min_signal: 15 }
    }
}

impl TrackerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: TrackerConfig =
            toml::from_str(s).map_err(|e| TrackerError::Parse(format!("toml: {e}")))?;
        cfg.validated()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: TrackerConfig =
            serde_json::from_str(s).map_err(|e| TrackerError::Parse(format!("json: {e}")))?;
        cfg.validated()
    }

    /// Load from an explicit path. Supports TOML or JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let cfg = parse_config(&content, ext.as_str())?;
        debug!(target: "rezoning", path = %path.display(), "loaded tracker config");
        Ok(cfg)
    }

    /// Resolve via env var + fallbacks, then apply env overrides.
    pub fn load_default() -> Result<Self> {
        let cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(TrackerError::Config(format!(
                    "{ENV_CONFIG_PATH} points to non-existent path {}",
                    pb.display()
                )));
            }
            Self::load_from(&pb)?
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::load_from(Path::new(DEFAULT_CONFIG_PATH))?
        } else if Path::new(DEFAULT_CONFIG_PATH_JSON).exists() {
            Self::load_from(Path::new(DEFAULT_CONFIG_PATH_JSON))?
        } else {
            Self::default()
        };

        cfg.with_env_overrides().validated()
    }

    /// Apply `REZONING_MIN_SIGNAL` if set; an unparseable value is ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var(ENV_MIN_SIGNAL) {
            match parse_min_signal(&raw) {
                Some(v) => self.analysis.min_signal = v,
                None => warn!(target: "rezoning", value = %raw, "ignoring unparseable {ENV_MIN_SIGNAL}"),
            }
        }
        self
    }

    /// Trim keyword lists, drop empty entries, and check numeric bounds.
    pub fn validated(mut self) -> Result<Self> {
        let lists = [
            &mut self.extraction.prepositions,
            &mut self.extraction.road_suffixes,
            &mut self.extraction.area_words,
            &mut self.extraction.range_openers,
            &mut self.extraction.range_joiners,
            &mut self.extraction.stop_words,
            &mut self.extraction.generic_terms,
            &mut self.signals.high,
            &mut self.signals.medium,
            &mut self.signals.infrastructure,
            &mut self.timeline.immediate,
            &mut self.timeline.near_term,
            &mut self.timeline.long_term,
        ];
        for list in lists {
            clean_list(list);
        }

        let ex = &self.extraction;
        if ex.prepositions.is_empty() || ex.road_suffixes.is_empty() {
            return Err(TrackerError::Config(
                "extraction.prepositions and extraction.road_suffixes must not be empty".into(),
            ));
        }
        if ex.area_words.is_empty() {
            return Err(TrackerError::Config(
                "extraction.area_words must not be empty".into(),
            ));
        }
        if ex.range_openers.is_empty() || ex.range_joiners.is_empty() {
            return Err(TrackerError::Config(
                "extraction.range_openers and extraction.range_joiners must not be empty".into(),
            ));
        }
        if self.signals.window == 0 || self.timeline.window == 0 || self.evidence.window == 0 {
            return Err(TrackerError::Config("context windows must be > 0".into()));
        }
        if self.signals.max_score > SIGNAL_CEILING {
            return Err(TrackerError::Config(format!(
                "signals.max_score ({}) exceeds {SIGNAL_CEILING}",
                self.signals.max_score
            )));
        }
        if self.analysis.min_signal > self.signals.max_score {
            return Err(TrackerError::Config(format!(
                "analysis.min_signal ({}) exceeds signals.max_score ({})",
                self.analysis.min_signal, self.signals.max_score
            )));
        }
        Ok(self)
    }
}

fn parse_config(s: &str, hint_ext: &str) -> Result<TrackerConfig> {
    match hint_ext {
        "toml" => TrackerConfig::from_toml_str(s),
        "json" => TrackerConfig::from_json_str(s),
        _ => {
            // No usable extension: JSON starts with an object brace.
            if s.trim_start().starts_with('{') {
                TrackerConfig::from_json_str(s)
            } else {
                TrackerConfig::from_toml_str(s)
            }
        }
    }
}

fn parse_min_signal(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

fn clean_list(items: &mut Vec<String>) {
    for it in items.iter_mut() {
        let t = it.trim();
        if t.len() != it.len() {
            *it = t.to_string();
        }
    }
    items.retain(|s| !s.is_empty());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_tables() {
        let cfg = TrackerConfig::default();
        assert_eq!(cfg.signals.high.len(), 9);
        assert_eq!(cfg.signals.medium.len(), 7);
        assert_eq!(cfg.signals.infrastructure.len(), 5);
        assert_eq!(cfg.analysis.min_signal, 15);
        assert_eq!(cfg.evidence.per_document, 2);
        assert_eq!(cfg.evidence.per_corridor, 3);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let toml = r#"
            [signals]
            high = ["  bold vision ", ""]

            [analysis]
            min_signal = 20
        "#;
        let cfg = TrackerConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.signals.high, vec!["bold vision".to_string()]);
        assert_eq!(cfg.signals.medium.len(), 7);
        assert_eq!(cfg.analysis.min_signal, 20);
        assert_eq!(cfg.timeline.window, 200);
    }

    #[test]
    fn json_without_extension_is_sniffed() {
        let cfg = parse_config(r#"{"analysis": {"min_signal": 30}}"#, "").unwrap();
        assert_eq!(cfg.analysis.min_signal, 30);
    }

    #[test]
    fn rejects_threshold_above_cap() {
        let err = TrackerConfig::from_toml_str("[analysis]\nmin_signal = 101").unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn rejects_score_cap_above_ceiling() {
        let err = TrackerConfig::from_toml_str("[signals]\nmax_score = 1000").unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
        assert!(TrackerConfig::from_toml_str("[signals]\nmax_score = 100").is_ok());
    }

    #[test]
    fn rejects_zero_window() {
        let err = TrackerConfig::from_toml_str("[evidence]\nwindow = 0").unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[test]
    fn min_signal_env_parsing() {
        assert_eq!(parse_min_signal(" 25 "), Some(25));
        assert_eq!(parse_min_signal("abc"), None);
        assert_eq!(parse_min_signal("-3"), None);
    }
}
