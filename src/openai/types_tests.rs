//! Unit tests for OpenAI API types.
//!
//! Tests request serialization, response deserialization and the helpers
//! that pull JSON and report text out of model replies.

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

// Message tests
#[test]
fn test_message_system() {
    let msg = Message::system("You are a research intake assistant");
    assert!(matches!(msg.role, MessageRole::System));
    assert_eq!(msg.content, "You are a research intake assistant");
}

#[test]
fn test_message_user_serialization() {
    let msg = Message::user("market trends");
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value, json!({"role": "user", "content": "market trends"}));
}

// ChatRequest tests
#[test]
fn test_chat_request_without_schema_omits_format() {
    let request = ChatRequest::new("gpt-4o-mini", vec![Message::user("hi")]);
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("response_format").is_none());
    assert_eq!(value["model"], "gpt-4o-mini");
}

#[test]
fn test_chat_request_with_json_schema() {
    let schema = json!({"type": "object"});
    let request = ChatRequest::new("gpt-4o-mini", vec![Message::user("hi")])
        .with_json_schema("triage_response", schema.clone());
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value["response_format"],
        json!({
            "type": "json_schema",
            "json_schema": {
                "name": "triage_response",
                "strict": true,
                "schema": schema
            }
        })
    );
}

// ChatResponse tests
#[test]
fn test_chat_response_first_content() {
    let response: ChatResponse = serde_json::from_value(json!({
        "model": "gpt-4o-mini",
        "choices": [{
            "message": {"role": "assistant", "content": "{\"needs_clarification\": false}"},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }))
    .unwrap();

    assert_eq!(
        response.first_content().unwrap(),
        "{\"needs_clarification\": false}"
    );
    assert_eq!(response.usage.unwrap().total_tokens, Some(15));
}

#[test]
fn test_chat_response_refusal() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": [{"message": {"content": null, "refusal": "I can't help with that."}}]
    }))
    .unwrap();

    let err = response.first_content().unwrap_err();
    assert!(err.contains("refused"));
}

#[test]
fn test_chat_response_no_choices() {
    let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
    assert_eq!(
        response.first_content().unwrap_err(),
        "response contained no choices"
    );
}

// ResponsesRequest tests
#[test]
fn test_responses_request_serialization() {
    let request = ResponsesRequest::new("o3-deep-research-2025-06-26", "Research this")
        .with_instructions("You are a researcher")
        .with_tool(Tool::WebSearchPreview);
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "model": "o3-deep-research-2025-06-26",
            "instructions": "You are a researcher",
            "input": "Research this",
            "tools": [{"type": "web_search_preview"}]
        })
    );
}

#[test]
fn test_responses_request_without_tools() {
    let request = ResponsesRequest::new("model", "input");
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("tools").is_none());
    assert!(value.get("instructions").is_none());
}

// extract_json tests
#[test]
fn test_extract_json_raw() {
    assert_eq!(extract_json("  {\"a\": 1}  ").unwrap(), "{\"a\": 1}");
}

#[test]
fn test_extract_json_fenced() {
    let completion = "Here you go:\n```json\n{\"questions\": []}\n```";
    assert_eq!(extract_json(completion).unwrap(), "{\"questions\": []}");
}

#[test]
fn test_extract_json_plain_fence() {
    let completion = "```\n{\"instructions\": \"x\"}\n```";
    assert_eq!(extract_json(completion).unwrap(), "{\"instructions\": \"x\"}");
}

#[test]
fn test_extract_json_missing() {
    let err = extract_json("no json here").unwrap_err();
    assert!(err.starts_with("No JSON found"));
}

// response_output_text tests
#[test]
fn test_output_text_top_level() {
    let payload = json!({"output_text": "Full report", "output": []});
    assert_eq!(response_output_text(&payload), Some("Full report".to_string()));
}

#[test]
fn test_output_text_from_message_items() {
    let payload = json!({
        "output": [
            {"type": "reasoning", "summary": []},
            {"type": "web_search_call", "status": "completed"},
            {
                "type": "message",
                "content": [
                    {"type": "output_text", "text": "# Findings", "annotations": []},
                    {"type": "output_text", "text": "Wind is cheaper.", "annotations": []}
                ]
            }
        ]
    });

    assert_eq!(
        response_output_text(&payload),
        Some("# Findings\n\nWind is cheaper.".to_string())
    );
}

#[test]
fn test_output_text_missing() {
    assert_eq!(response_output_text(&json!({"output": []})), None);
    assert_eq!(response_output_text(&json!({})), None);
    assert_eq!(response_output_text(&json!({"output_text": "  "})), None);
}
