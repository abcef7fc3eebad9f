use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::{DEFAULT_RESULT_LIMIT, FALLBACK_RESULT_LIMIT};

/// A single metadata value as the backend sends it.
///
/// The index stores hadith and chapter numbers either as strings or as
/// numbers depending on how it was built, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl MetadataValue {
    /// Empty strings carry no information and are treated as missing.
    pub fn is_blank(&self) -> bool {
        matches!(self, MetadataValue::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(s) => f.write_str(s),
            MetadataValue::Number(n) => write!(f, "{}", n),
            MetadataValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Deserializes an optional metadata field, mapping `null`, blank strings
/// and unsupported shapes to `None`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<MetadataValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(value_from_json))
}

fn value_from_json(raw: serde_json::Value) -> Option<MetadataValue> {
    let value = match raw {
        serde_json::Value::String(s) => MetadataValue::Text(s),
        serde_json::Value::Number(n) => MetadataValue::Number(n),
        serde_json::Value::Bool(b) => MetadataValue::Flag(b),
        _ => return None,
    };
    (!value.is_blank()).then_some(value)
}

/// Source collection, numbering and chapter of a hadith.
///
/// Every field is optional; the backend is not validated defensively and
/// whatever is absent is simply not displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HadithMetadata {
    /// Collection name (e.g. "Bukhari")
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub source: Option<MetadataValue>,
    /// Number of the hadith within its collection
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub hadith_no: Option<MetadataValue>,
    /// Chapter name
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub chapter: Option<MetadataValue>,
    /// Chapter number
    #[serde(default, deserialize_with = "present_value", skip_serializing_if = "Option::is_none")]
    pub chapter_no: Option<MetadataValue>,
    /// Any other free-form fields the index attached, kept as sent
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl HadithMetadata {
    pub fn source_name(&self) -> Option<String> {
        self.source.as_ref().map(ToString::to_string)
    }

    /// Free-form fields that carry a displayable, non-blank value.
    pub fn extra_values(&self) -> impl Iterator<Item = (&str, MetadataValue)> + '_ {
        self.extra
            .iter()
            .filter_map(|(key, raw)| value_from_json(raw.clone()).map(|v| (key.as_str(), v)))
    }
}

/// A recorded narration returned by the backend for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hadith {
    /// Backend identifier, also used in the detail route
    pub hadith_id: String,
    /// Raw narration text (may contain line breaks)
    pub text: String,
    /// Relevance to the query, nominally in [0, 1]
    pub score: f64,
    #[serde(default)]
    pub metadata: HadithMetadata,
}

/// Response of the `/answer` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResponse {
    /// Synthesized answer text; paragraphs separated by blank lines
    pub answer: String,
    /// Hadiths the answer was based on
    pub hadiths: Vec<Hadith>,
}

/// How the search box input is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Keyword search against the index
    #[default]
    Search,
    /// Natural-language question answered from supporting hadiths
    Question,
}

impl SearchMode {
    /// Label of the toggle and submit buttons.
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Search => "Search",
            SearchMode::Question => "Ask",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SearchMode::Search => "Search hadith...",
            SearchMode::Question => "Ask a question about hadith...",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            SearchMode::Search => "Search for terms like 'prayer', 'charity', 'fasting', etc.",
            SearchMode::Question => "Ask questions like 'What does Islam say about kindness?'",
        }
    }
}

/// User-selected constraints applied in keyword-search mode only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    /// Restrict results to one source collection
    pub source: Option<String>,
    /// Maximum number of results requested
    pub limit: u32,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            source: None,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl SearchFilters {
    /// Copy with the source taken from a select value ("" means all sources).
    pub fn with_source_value(&self, value: &str) -> Self {
        let source = (!value.is_empty()).then(|| value.to_string());
        Self {
            source,
            ..self.clone()
        }
    }

    /// Copy with the limit taken from a select value.
    ///
    /// Values that are not positive integers fall back to
    /// [`FALLBACK_RESULT_LIMIT`].
    pub fn with_limit_value(&self, value: &str) -> Self {
        let limit = value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|limit| *limit > 0)
            .unwrap_or(FALLBACK_RESULT_LIMIT);
        Self {
            limit,
            ..self.clone()
        }
    }

    /// Query parameters sent to `/search`, without the query itself.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(source) = &self.source {
            params.push(("filter_source", source.clone()));
        }
        params.push(("limit", self.limit.to_string()));
        params
    }
}

/// Sorts results by descending score, keeping backend order for ties.
pub fn sort_by_score(hadiths: &mut [Hadith]) {
    hadiths.sort_by(|a, b| b.score.total_cmp(&a.score));
}

#[cfg(test)]
pub(crate) fn hadith(id: &str, score: f64) -> Hadith {
    Hadith {
        hadith_id: id.to_string(),
        text: format!("Narration {}", id),
        score,
        metadata: HadithMetadata {
            source: Some(MetadataValue::Text("Bukhari".to_string())),
            ..HadithMetadata::default()
        },
    }
}
