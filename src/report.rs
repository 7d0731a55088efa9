// src/report.rs
// Human-readable report of the top corridors.

use crate::rank::RankedOpportunity;
use std::fmt::Write as _;

pub const TITLE: &str = "MUNICIPAL REZONING OPPORTUNITY TRACKER - ANALYSIS REPORT";
const RULE_WIDTH: usize = 80;
const EVIDENCE_PREVIEW_CHARS: usize = 200;
const EVIDENCE_LINES: usize = 2;

pub fn render(ranked: &[RankedOpportunity], top_n: usize) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out);

    for (i, opp) in ranked.iter().take(top_n).enumerate() {
        let _ = writeln!(out, "\n#{} - {}", i + 1, opp.corridor);
        let _ = writeln!(out, "{light}");
        let _ = writeln!(
            out,
            "Overall Score: {:.1} | Timeline: {}",
            f64::from(opp.total_score),
            opp.timeline
        );
        let _ = writeln!(out, "Mentioned in {} document(s)", opp.num_mentions);
        let _ = writeln!(out);
        let _ = writeln!(out, "Source Documents:");
        for d in &opp.documents {
            let _ = writeln!(out, "  • {} ({}) - Score: {}", d.name, d.date, d.score);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Supporting Evidence:");
        for ev in opp.evidence.iter().take(EVIDENCE_LINES) {
            let preview: String = ev.chars().take(EVIDENCE_PREVIEW_CHARS).collect();
            let _ = writeln!(out, "  • {preview}...");
        }
        let _ = writeln!(out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::Timeline;
    use crate::rank::DocumentRef;

    fn sample() -> Vec<RankedOpportunity> {
        vec![RankedOpportunity {
            corridor: "Wilkinson Boulevard".into(),
            total_score: 35,
            avg_score: 17.5,
            num_mentions: 2,
            timeline: Timeline::NearTerm,
            documents: vec![
                DocumentRef { name: "Minutes".into(), date: "2024-11-05".into(), score: 20 },
                DocumentRef { name: "Agenda".into(), date: "2024-10-18".into(), score: 15 },
            ],
            evidence: vec![format!("...{}...", "x".repeat(300))],
        }]
    }

    #[test]
    fn renders_header_and_entry() {
        let r = render(&sample(), 10);
        assert!(r.starts_with(&"=".repeat(80)));
        assert!(r.contains(TITLE));
        assert!(r.contains("#1 - Wilkinson Boulevard"));
        assert!(r.contains("Overall Score: 35.0 | Timeline: near_term"));
        assert!(r.contains("Mentioned in 2 document(s)"));
        assert!(r.contains("  • Minutes (2024-11-05) - Score: 20"));
    }

    #[test]
    fn evidence_preview_is_truncated() {
        let r = render(&sample(), 10);
        let line = r
            .lines()
            .find(|l| l.starts_with("  • ..."))
            .unwrap();
        // bullet + 200 chars + trailing ellipsis
        assert_eq!(line.chars().count(), 4 + 200 + 3);
    }

    #[test]
    fn top_n_limits_entries() {
        assert!(!render(&sample(), 0).contains("#1"));
    }
}
