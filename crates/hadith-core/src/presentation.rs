//! Display policy for hadith results.
//!
//! Pure functions shared by the result card, the answer panel and the detail
//! view. Thresholds here are product decisions; keep them exact.

use crate::config::{HIGH_RELEVANCE_PERCENT, PREVIEW_CHAR_LIMIT};
use crate::types::{Hadith, HadithMetadata};

/// Circumference of the detail view's score ring, in SVG units.
pub const SCORE_RING_CIRCUMFERENCE: f64 = 251.0;

/// Relevance score as a rounded percentage (0.876 → 88).
pub fn score_percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Five-step visual treatment of the score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBucket {
    Excellent,
    Strong,
    Moderate,
    Weak,
    Poor,
}

impl ScoreBucket {
    /// Buckets a percentage: ≥80, ≥60, ≥40, ≥20, else.
    pub fn from_percent(percent: i64) -> Self {
        match percent {
            p if p >= 80 => ScoreBucket::Excellent,
            p if p >= 60 => ScoreBucket::Strong,
            p if p >= 40 => ScoreBucket::Moderate,
            p if p >= 20 => ScoreBucket::Weak,
            _ => ScoreBucket::Poor,
        }
    }

    /// CSS modifier class for the badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBucket::Excellent => "hs-score-badge--excellent",
            ScoreBucket::Strong => "hs-score-badge--strong",
            ScoreBucket::Moderate => "hs-score-badge--moderate",
            ScoreBucket::Weak => "hs-score-badge--weak",
            ScoreBucket::Poor => "hs-score-badge--poor",
        }
    }
}

/// Whether the detail view flags the hadith as highly relevant.
pub fn is_high_relevance(score: f64) -> bool {
    score_percent(score) >= HIGH_RELEVANCE_PERCENT
}

/// `stroke-dasharray` value drawing `percent` of the score ring.
pub fn score_ring_dasharray(score: f64) -> String {
    let filled = score_percent(score) as f64 * SCORE_RING_CIRCUMFERENCE / 100.0;
    format!("{:.2} {}", filled, SCORE_RING_CIRCUMFERENCE)
}

/// Collapsed-card preview of a hadith text.
///
/// Text longer than [`PREVIEW_CHAR_LIMIT`] characters is cut there and gets a
/// trailing "..."; anything shorter is returned verbatim. Counting is by
/// `char`, so multi-byte text (Arabic, diacritics) never splits mid-character.
pub fn preview_text(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHAR_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Text a hadith card shows in its current state.
///
/// Expanded cards show the narration verbatim, line breaks included, however
/// short it is.
pub fn card_text(text: &str, expanded: bool) -> String {
    if expanded {
        text.to_string()
    } else {
        preview_text(text)
    }
}

/// Splits a synthesized answer into paragraphs on blank lines.
pub fn answer_paragraphs(answer: &str) -> Vec<&str> {
    answer
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Initial shown in the card avatar; "?" when the source is unknown.
pub fn source_initial(metadata: &HadithMetadata) -> String {
    metadata
        .source_name()
        .and_then(|s| s.chars().next())
        .map(|c| c.to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Card title: "{source} - {hadith_no}".
pub fn card_title(metadata: &HadithMetadata) -> String {
    let source = metadata.source_name().unwrap_or_default();
    let number = metadata
        .hadith_no
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    format!("{} - {}", source, number)
}

/// "Chapter: {name} ({number})", with "N/A" for an unknown chapter name.
pub fn chapter_line(metadata: &HadithMetadata) -> String {
    let name = metadata
        .chapter
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "N/A".to_string());
    match &metadata.chapter_no {
        Some(number) => format!("Chapter: {} ({})", name, number),
        None => format!("Chapter: {}", name),
    }
}

/// Chapter line for the detail view, absent when the chapter is unknown.
pub fn detail_chapter_line(metadata: &HadithMetadata) -> Option<String> {
    metadata.chapter.as_ref().map(|_| chapter_line(metadata))
}

/// Turns a metadata key into a label ("chapter_no" → "chapter no").
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}

/// Every non-empty metadata field as a (label, value) row, known fields first.
pub fn metadata_rows(metadata: &HadithMetadata) -> Vec<(String, String)> {
    let known = [
        ("source", &metadata.source),
        ("hadith_no", &metadata.hadith_no),
        ("chapter", &metadata.chapter),
        ("chapter_no", &metadata.chapter_no),
    ];

    known
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (humanize_key(key), v.to_string())))
        .chain(
            metadata
                .extra_values()
                .map(|(key, value)| (humanize_key(key), value.to_string())),
        )
        .collect()
}

/// Header of the results list: "3 Search Results" or "5 Related Hadiths".
pub fn results_heading(count: usize, question_mode: bool) -> String {
    let noun = if question_mode {
        "Related Hadiths"
    } else {
        "Search Results"
    };
    format!("{} {}", count, noun)
}

/// Convenience for cards: percentage plus bucket.
pub fn score_badge(hadith: &Hadith) -> (i64, ScoreBucket) {
    let percent = score_percent(hadith.score);
    (percent, ScoreBucket::from_percent(percent))
}
