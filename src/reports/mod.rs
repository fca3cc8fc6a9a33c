//! Markdown report persistence.
//!
//! One file per run, named by local time at minute resolution. A second
//! report saved within the same minute replaces the first.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::info;

use crate::error::AppResult;

/// Writes research reports into a directory.
#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    /// Create a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Save a report for `query` and return the written path.
    pub async fn save(&self, query: &str, body: &str, at: DateTime<Local>) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(report_file_name(at));
        tokio::fs::write(&path, render_report(query, body)).await?;

        info!(path = %path.display(), bytes = body.len(), "Report saved");
        Ok(path)
    }
}

/// File name for a report saved at `at`: `report_YYYYMMDD_HHMM.md`.
pub fn report_file_name(at: DateTime<Local>) -> String {
    format!("report_{}.md", at.format("%Y%m%d_%H%M"))
}

/// Markdown document for a report.
pub fn render_report(query: &str, body: &str) -> String {
    format!("# Research Results\n\n**Query:** {}\n\n{}", query, body)
}

/// Whether an answer to the save prompt means "save".
///
/// Everything except a case-insensitive `n` saves, including empty input.
pub fn confirms_save(answer: &str) -> bool {
    !answer.trim().eq_ignore_ascii_case("n")
}
