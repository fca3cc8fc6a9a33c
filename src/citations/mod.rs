//! Citation extraction from research results.
//!
//! Research payloads carry citation metadata in more than one shape. The
//! extractor tries an ordered list of [`CitationStrategy`] values and keeps
//! the first non-empty result. Extraction never fails; an unrecognised shape
//! yields no citations.

use serde_json::Value;

/// Title used when a citation carries none.
pub const DEFAULT_TITLE: &str = "Source";

/// A normalized `(title, url)` citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub title: String,
    pub url: String,
}

impl Citation {
    /// Create a citation.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// One way of reading citations out of a payload.
///
/// Returns `None` when the shape it understands is absent or empty.
pub type CitationStrategy = fn(&Value) -> Option<Vec<Citation>>;

/// Strategies in the order they are tried.
pub const STRATEGIES: &[CitationStrategy] = &[top_level_citations, annotation_citations];

/// Extract citations with the default strategy chain.
pub fn extract_citations(source: &Value) -> Vec<Citation> {
    extract_with(STRATEGIES, source)
}

/// Extract citations with an explicit strategy chain.
pub fn extract_with(strategies: &[CitationStrategy], source: &Value) -> Vec<Citation> {
    strategies
        .iter()
        .find_map(|strategy| strategy(source))
        .unwrap_or_default()
}

/// A top-level `citations` list. Entries without a `url` are skipped; a list
/// with no usable entry counts as absent.
pub fn top_level_citations(source: &Value) -> Option<Vec<Citation>> {
    let entries = source.get("citations")?.as_array()?;

    let citations: Vec<Citation> = entries
        .iter()
        .filter_map(|entry| {
            let url = entry.get("url")?.as_str()?;
            Some(Citation::new(title_of(entry), url))
        })
        .collect();

    if citations.is_empty() {
        None
    } else {
        Some(citations)
    }
}

/// `url_citation` entries from nested annotation lists.
///
/// Looks at `content.annotations` and at the Responses shape
/// `output[].content[].annotations`.
pub fn annotation_citations(source: &Value) -> Option<Vec<Citation>> {
    let mut annotations: Vec<&Value> = Vec::new();

    if let Some(list) = source
        .get("content")
        .and_then(|c| c.get("annotations"))
        .and_then(Value::as_array)
    {
        annotations.extend(list);
    }

    if let Some(items) = source.get("output").and_then(Value::as_array) {
        let parts = items
            .iter()
            .filter_map(|item| item.get("content").and_then(Value::as_array))
            .flatten();
        for part in parts {
            if let Some(list) = part.get("annotations").and_then(Value::as_array) {
                annotations.extend(list);
            }
        }
    }

    let citations: Vec<Citation> = annotations
        .into_iter()
        .filter(|a| a.get("type").and_then(Value::as_str) == Some("url_citation"))
        .map(|a| {
            let url = a.get("url").and_then(Value::as_str).unwrap_or_default();
            Citation::new(title_of(a), url)
        })
        .collect();

    if citations.is_empty() {
        None
    } else {
        Some(citations)
    }
}

fn title_of(entry: &Value) -> &str {
    entry
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_TITLE)
}
