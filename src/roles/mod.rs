//! Role bindings for the research pipeline.
//!
//! Each pipeline stage is played by a [`Role`] bound to a model, a fixed
//! prompt and an output kind. The bindings live in a [`RoleRegistry`] built
//! once at startup and handed to the pipeline driver read-only.

mod shapes;

pub use shapes::*;

use std::collections::HashMap;
use std::fmt;

use crate::config::ModelConfig;
use crate::error::{AppError, AppResult};
use crate::prompts::{CLARIFY_PROMPT, INSTRUCTIONS_PROMPT, RESEARCH_PERSONA, TRIAGE_PROMPT};

/// The four pipeline roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Decides whether the query needs clarification.
    Triage,
    /// Generates clarifying questions.
    Clarify,
    /// Rewrites the query into a research brief.
    Instructions,
    /// Performs the web-search research.
    Research,
}

impl Role {
    /// All roles in pipeline order.
    pub const ALL: [Role; 4] = [Role::Triage, Role::Clarify, Role::Instructions, Role::Research];

    /// Stable lowercase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Triage => "triage",
            Role::Clarify => "clarify",
            Role::Instructions => "instructions",
            Role::Research => "research",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a role is expected to return.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleOutput {
    /// A JSON object matching a named schema.
    Json {
        /// Schema name sent to the backend.
        name: &'static str,
        /// JSON schema of the expected object.
        schema: serde_json::Value,
    },
    /// A free-text report, optionally with web search enabled.
    Report {
        /// Whether the backend may search the web.
        web_search: bool,
    },
}

/// Backend binding for a single role.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleConfig {
    /// Role this binding serves.
    pub role: Role,
    /// Model id.
    pub model: String,
    /// Fixed system prompt.
    pub prompt: &'static str,
    /// Declared output kind.
    pub output: RoleOutput,
}

impl RoleConfig {
    /// Create a binding whose output is the JSON shape `T`.
    pub fn structured<T: StructuredOutput>(
        role: Role,
        model: impl Into<String>,
        prompt: &'static str,
    ) -> Self {
        Self {
            role,
            model: model.into(),
            prompt,
            output: RoleOutput::Json {
                name: T::NAME,
                schema: T::schema(),
            },
        }
    }

    /// Create a binding for a web-search report.
    pub fn report(role: Role, model: impl Into<String>, prompt: &'static str) -> Self {
        Self {
            role,
            model: model.into(),
            prompt,
            output: RoleOutput::Report { web_search: true },
        }
    }
}

/// Immutable map from role to backend binding.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    roles: HashMap<Role, RoleConfig>,
}

impl RoleRegistry {
    /// Build a registry from explicit bindings. Later bindings for the same
    /// role replace earlier ones.
    pub fn new(bindings: impl IntoIterator<Item = RoleConfig>) -> Self {
        Self {
            roles: bindings.into_iter().map(|b| (b.role, b)).collect(),
        }
    }

    /// Build the standard four-role registry from model configuration.
    pub fn from_models(models: &ModelConfig) -> Self {
        Self::new([
            RoleConfig::structured::<TriageVerdict>(Role::Triage, &models.base, TRIAGE_PROMPT),
            RoleConfig::structured::<ClarifyingQuestions>(
                Role::Clarify,
                &models.base,
                CLARIFY_PROMPT,
            ),
            RoleConfig::structured::<ResearchInstructions>(
                Role::Instructions,
                &models.base,
                INSTRUCTIONS_PROMPT,
            ),
            RoleConfig::report(Role::Research, &models.research, RESEARCH_PERSONA),
        ])
    }

    /// Look up the binding for a role.
    pub fn get(&self, role: Role) -> AppResult<&RoleConfig> {
        self.roles.get(&role).ok_or_else(|| AppError::Config {
            message: format!("no model configured for role '{}'", role),
        })
    }

    /// Model id of the research role, if registered.
    pub fn research_model(&self) -> Option<&str> {
        self.roles.get(&Role::Research).map(|r| r.model.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_from_models_binds_all_roles() {
        let registry = RoleRegistry::from_models(&ModelConfig::default());

        for role in Role::ALL {
            let binding = registry.get(role).unwrap();
            assert_eq!(binding.role, role);
        }

        assert_eq!(registry.get(Role::Triage).unwrap().model, "gpt-4o-mini");
        assert_eq!(
            registry.research_model(),
            Some("o3-deep-research-2025-06-26")
        );
    }

    #[test]
    fn test_registry_output_kinds() {
        let registry = RoleRegistry::from_models(&ModelConfig::default());

        match &registry.get(Role::Triage).unwrap().output {
            RoleOutput::Json { name, .. } => assert_eq!(*name, "triage_response"),
            other => panic!("unexpected output kind: {:?}", other),
        }
        assert_eq!(
            registry.get(Role::Research).unwrap().output,
            RoleOutput::Report { web_search: true }
        );
    }

    #[test]
    fn test_registry_missing_role_is_config_error() {
        let registry = RoleRegistry::new([RoleConfig::report(
            Role::Research,
            "model",
            RESEARCH_PERSONA,
        )]);

        let err = registry.get(Role::Triage).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
        assert!(err.to_string().contains("triage"));
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Instructions.to_string(), "instructions");
        assert_eq!(Role::ALL.len(), 4);
    }
}
