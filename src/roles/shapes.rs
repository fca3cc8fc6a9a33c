use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{BackendError, BackendResult};

/// A declared response shape for a structured role.
///
/// Values received from the backend are validated into the concrete type at
/// the boundary, independent of how the backend shapes its own responses.
pub trait StructuredOutput: DeserializeOwned + Sized {
    /// Schema name sent with the request.
    const NAME: &'static str;

    /// JSON schema of the shape.
    fn schema() -> serde_json::Value;

    /// Validate a backend value into this shape.
    fn from_value(value: serde_json::Value) -> BackendResult<Self> {
        serde_json::from_value(value).map_err(|e| BackendError::InvalidResponse {
            message: format!("{} does not match declared shape: {}", Self::NAME, e),
        })
    }
}

/// Triage role output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageVerdict {
    pub needs_clarification: bool,
}

impl StructuredOutput for TriageVerdict {
    const NAME: &'static str = "triage_response";

    fn schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "needs_clarification": { "type": "boolean" }
            },
            "required": ["needs_clarification"],
            "additionalProperties": false
        })
    }
}

/// Clarification role output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarifyingQuestions {
    pub questions: Vec<String>,
}

impl StructuredOutput for ClarifyingQuestions {
    const NAME: &'static str = "clarify_response";

    fn schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "questions": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": ["questions"],
            "additionalProperties": false
        })
    }
}

/// Instruction-expansion role output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchInstructions {
    pub instructions: String,
}

impl StructuredOutput for ResearchInstructions {
    const NAME: &'static str = "instructions_response";

    fn schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "instructions": { "type": "string" }
            },
            "required": ["instructions"],
            "additionalProperties": false
        })
    }
}
