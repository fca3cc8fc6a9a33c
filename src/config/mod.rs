use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::error::AppError;

/// Default model for the triage, clarification and instruction roles.
pub const DEFAULT_BASE_MODEL: &str = "gpt-4o-mini";

/// Default model for the research role.
pub const DEFAULT_RESEARCH_MODEL: &str = "o3-deep-research-2025-06-26";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub openai: OpenAiConfig,
    pub models: ModelConfig,
    pub reports: ReportConfig,
    pub logging: LoggingConfig,
    pub request: RequestConfig,
}

/// OpenAI API configuration
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Model ids bound to the pipeline roles
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub base: String,
    pub research: String,
}

/// Report persistence configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP request configuration.
///
/// Only the connect phase is bounded; research calls run for minutes and any
/// overall deadline is left to the backend.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub connect_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads the process environment only. The binary loads `.env` before
    /// calling this.
    pub fn from_env() -> Result<Self, AppError> {
        let openai = OpenAiConfig {
            api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .ok_or_else(|| AppError::Config {
                    message: "OPENAI_API_KEY is required".to_string(),
                })?,
            base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
        };

        let models = ModelConfig {
            base: env::var("BASE_MODEL").unwrap_or_else(|_| DEFAULT_BASE_MODEL.to_string()),
            research: env::var("RESEARCH_MODEL")
                .unwrap_or_else(|_| DEFAULT_RESEARCH_MODEL.to_string()),
        };

        let reports = ReportConfig {
            dir: PathBuf::from(env::var("REPORTS_DIR").unwrap_or_else(|_| "reports".to_string())),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let request = RequestConfig {
            connect_timeout_ms: env::var("CONNECT_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10_000),
        };

        Ok(Config {
            openai,
            models,
            reports,
            logging,
            request,
        })
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_MODEL.to_string(),
            research: DEFAULT_RESEARCH_MODEL.to_string(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 10_000,
        }
    }
}

/// Mask an API key for display, keeping only a short prefix.
pub fn mask_api_key(key: &str) -> String {
    if key.chars().count() <= 8 {
        return "****".to_string();
    }
    let prefix: String = key.chars().take(4).collect();
    format!("{}****", prefix)
}
