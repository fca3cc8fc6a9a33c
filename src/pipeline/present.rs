use crate::citations::Citation;

const RULE: &str = "==================================================";

/// Results block: rule, title, rule, body, rule.
pub fn render_results(body: &str) -> String {
    format!("\n{RULE}\n📋 RESULTS\n{RULE}\n{body}\n{RULE}")
}

/// Sources block for the extracted citations.
pub fn render_sources(citations: &[Citation]) -> String {
    let mut out = format!("\n📖 SOURCES ({} found):", citations.len());
    for citation in citations {
        out.push_str(&format!("\n- {}: {}", citation.title, citation.url));
    }
    if citations.is_empty() {
        out.push_str("\n- Research completed with web search capabilities");
    }
    out
}
