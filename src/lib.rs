//! # Deep Research
//!
//! An interactive command-line research assistant. A query is triaged,
//! optionally clarified with the user, expanded into a detailed research brief
//! and handed to a web-search research model. The cited report is printed and
//! can be saved as markdown.
//!
//! ## Architecture
//!
//! ```text
//! stdin → ResearchPipeline → ModelBackend (OpenAI HTTP)
//!               ↓
//!          reports/*.md
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use deep_research::{Config, ResearchPipeline};
//! use deep_research::console::Terminal;
//! use deep_research::openai::OpenAiClient;
//! use deep_research::reports::ReportStore;
//! use deep_research::roles::RoleRegistry;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let backend = Arc::new(OpenAiClient::new(&config.openai, config.request.clone())?);
//!     let roles = RoleRegistry::from_models(&config.models);
//!     let terminal = Terminal::new(std::io::stdin().lock(), std::io::stdout(), true);
//!     let mut pipeline = ResearchPipeline::new(backend, roles, terminal, ReportStore::new("reports"));
//!     pipeline.run(None).await;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Language-model backend seam and research results.
pub mod backend;
/// Citation extraction strategies.
pub mod citations;
/// Configuration management.
pub mod config;
/// Interactive terminal and worker offload with spinner.
pub mod console;
/// Error types and result aliases for the application.
pub mod error;
/// OpenAI HTTP client and wire types.
pub mod openai;
/// Research pipeline driver.
pub mod pipeline;
/// System prompts for the pipeline roles.
pub mod prompts;
/// Markdown report persistence.
pub mod reports;
/// Role bindings and declared response shapes.
pub mod roles;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use pipeline::{ResearchPipeline, RunOutcome};
