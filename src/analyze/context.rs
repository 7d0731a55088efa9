// src/analyze/context.rs
//! Mention lookup and character windows shared by the scorer, classifier and
//! evidence collector.

use regex::RegexBuilder;
use tracing::warn;

/// Byte spans of every case-insensitive, non-overlapping occurrence of a
/// corridor name, in text order.
#[derive(Debug, Clone, Default)]
pub struct Mentions {
    spans: Vec<(usize, usize)>,
}

impl Mentions {
    pub fn find(text: &str, corridor: &str) -> Self {
        if corridor.is_empty() || text.is_empty() {
            return Self::default();
        }
        let re = match RegexBuilder::new(&regex::escape(corridor))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => re,
            Err(e) => {
                warn!(target: "rezoning", error = %e, "corridor name did not compile as a literal");
                return Self::default();
            }
        };
        Self {
            spans: re.find_iter(text).map(|m| (m.start(), m.end())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Windows of `radius` characters on each side of every mention.
    pub fn windows<'a, 't: 'a>(
        &'a self,
        text: &'t str,
        radius: usize,
    ) -> impl Iterator<Item = &'t str> + 'a {
        self.spans
            .iter()
            .map(move |&(s, e)| window(text, s, e, radius))
    }

    /// All windows joined by a single space.
    pub fn joined(&self, text: &str, radius: usize) -> String {
        self.windows(text, radius).collect::<Vec<_>>().join(" ")
    }
}

/// Slice `radius` characters before `start` and after `end`, clamped to the
/// text. Offsets always land on char boundaries.
pub(crate) fn window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let lo = if radius == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };
    let hi = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    &text[lo..hi]
}
