//! OpenAI HTTP backend.
//!
//! Structured roles go through `/v1/chat/completions` with a strict JSON
//! schema; the research role goes through `/v1/responses` with web search.

mod client;
mod types;

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

pub use client::OpenAiClient;
pub use types::*;
