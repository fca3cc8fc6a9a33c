//! Seam between the pipeline and the hosted language-model service.

use async_trait::async_trait;

use crate::citations::{extract_citations, Citation};
use crate::error::BackendResult;
use crate::roles::RoleConfig;

/// Output of the research role.
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchResult {
    /// Report body.
    pub body: String,
    /// Raw backend payload that citation metadata is read from.
    pub citation_source: serde_json::Value,
}

impl ResearchResult {
    /// Create a result from a report body and its citation source.
    pub fn new(body: impl Into<String>, citation_source: serde_json::Value) -> Self {
        Self {
            body: body.into(),
            citation_source,
        }
    }

    /// Normalized citations found in this result.
    pub fn citations(&self) -> Vec<Citation> {
        extract_citations(&self.citation_source)
    }
}

/// A language-model backend able to play every pipeline role.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Run a structured role and return its JSON object unvalidated.
    async fn run_structured(
        &self,
        role: &RoleConfig,
        input: &str,
    ) -> BackendResult<serde_json::Value>;

    /// Run the research role.
    async fn run_research(&self, role: &RoleConfig, input: &str) -> BackendResult<ResearchResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_research_result_citations() {
        let result = ResearchResult::new(
            "Report",
            json!({"citations": [{"title": "IEA", "url": "https://iea.org"}]}),
        );
        let citations = result.citations();
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].title, "IEA");
    }

    #[test]
    fn test_research_result_without_citations() {
        let result = ResearchResult::new("Report", serde_json::Value::Null);
        assert!(result.citations().is_empty());
    }
}
