//! Reply extraction and repair
//!
//! The backend is untrusted. Its text may wrap the payload in a fenced
//! block, fields may be missing or of the wrong type, and the frontend may
//! arrive as a `path → source` object instead of one string.

use crate::error::GenerateError;
use forge_artifact::{Bundle, BundleOrigin, FALLBACK_APP_NAME};
use serde_json::{Map, Value};

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Locate the JSON payload inside a raw reply
///
/// Tries a ```` ```json ```` fence, then the first unlabeled fence, then the
/// whole text. An unterminated fence runs to the end of the reply.
#[must_use]
pub fn extract_json_payload(reply: &str) -> &str {
    if let Some(start) = reply.find(JSON_FENCE) {
        return until_fence(&reply[start + JSON_FENCE.len()..]).trim();
    }
    if let Some(start) = reply.find(FENCE) {
        let segment = until_fence(&reply[start + FENCE.len()..]);
        return strip_label(segment).trim();
    }
    reply.trim()
}

fn until_fence(text: &str) -> &str {
    text.find(FENCE).map_or(text, |end| &text[..end])
}

/// Drop a language label such as `JSON` on the fence line
fn strip_label(segment: &str) -> &str {
    match segment.split_once('\n') {
        Some((label, rest))
            if !label.trim().is_empty()
                && label.trim().chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            rest
        }
        _ => segment,
    }
}

/// Parse and repair a raw reply into a generated bundle
///
/// # Errors
/// Returns [`GenerateError::Malformed`] if the payload is not valid JSON or
/// not a JSON object.
pub fn parse_reply(reply: &str) -> Result<Bundle, GenerateError> {
    let payload = extract_json_payload(reply);
    let value: Value = serde_json::from_str(payload)?;
    repair(value)
}

/// Coerce a parsed payload into a bundle
///
/// # Errors
/// Returns [`GenerateError::Malformed`] if `value` is not an object.
pub fn repair(value: Value) -> Result<Bundle, GenerateError> {
    let Value::Object(mut fields) = value else {
        return Err(GenerateError::malformed(format!(
            "expected a JSON object, got {}",
            kind(&value)
        )));
    };

    let app_name = text_field(&mut fields, "app_name");
    let app_name = if app_name.trim().is_empty() {
        FALLBACK_APP_NAME.to_string()
    } else {
        app_name.trim().to_string()
    };

    let frontend_code = match fields.remove("frontend_code") {
        Some(Value::Object(files)) => flatten_files(files),
        other => text_value(other),
    };

    Ok(Bundle {
        origin: BundleOrigin::Generated,
        app_name,
        frontend_code,
        backend_code: text_field(&mut fields, "backend_code"),
        database_schema: text_field(&mut fields, "database_schema"),
        deploy_instructions: text_field(&mut fields, "deploy_instructions"),
    })
}

fn text_field(fields: &mut Map<String, Value>, key: &str) -> String {
    text_value(fields.remove(key))
}

fn text_value(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    }
}

/// `{ "src/App.jsx": "..." }` → sentinel-delimited text
fn flatten_files(files: Map<String, Value>) -> String {
    let mut out = String::new();
    for (path, source) in files {
        let source = text_value(Some(source));
        out.push_str("===== ");
        out.push_str(&path);
        out.push_str(" =====\n");
        out.push_str(&source);
        if !source.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn payload_from_json_fence() {
        let reply = "Here you go:\n```json\n{\"app_name\": \"A\"}\n```\nEnjoy!";
        assert_eq!(extract_json_payload(reply), "{\"app_name\": \"A\"}");
    }

    #[test]
    fn payload_from_unlabeled_fence() {
        let reply = "```\n{\"app_name\": \"B\"}\n```";
        assert_eq!(extract_json_payload(reply), "{\"app_name\": \"B\"}");
    }

    #[test]
    fn payload_from_fence_with_other_label() {
        let reply = "```JSON\n{\"app_name\": \"C\"}\n```";
        assert_eq!(extract_json_payload(reply), "{\"app_name\": \"C\"}");
    }

    #[test]
    fn payload_from_bare_text() {
        assert_eq!(extract_json_payload("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        assert_eq!(extract_json_payload("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn complete_reply_parses() {
        let reply = format!(
            "```json\n{}\n```",
            json!({
                "app_name": "PlantPal",
                "frontend_code": "===== src/App.jsx =====\nfunction App() {}\n",
                "backend_code": "from fastapi import FastAPI",
                "database_schema": "create table plants();",
                "deploy_instructions": "netlify deploy"
            })
        );
        let bundle = parse_reply(&reply).unwrap();
        assert_eq!(bundle.origin, BundleOrigin::Generated);
        assert_eq!(bundle.app_name, "PlantPal");
        assert_eq!(bundle.backend_code, "from fastapi import FastAPI");
        assert_eq!(bundle.deploy_instructions, "netlify deploy");
    }

    #[test]
    fn missing_and_null_fields_become_empty() {
        let bundle = repair(json!({ "frontend_code": null })).unwrap();
        assert_eq!(bundle.app_name, FALLBACK_APP_NAME);
        assert_eq!(bundle.frontend_code, "");
        assert_eq!(bundle.backend_code, "");
        assert_eq!(bundle.database_schema, "");
    }

    #[test]
    fn blank_app_name_replaced() {
        let bundle = repair(json!({ "app_name": "   " })).unwrap();
        assert_eq!(bundle.app_name, FALLBACK_APP_NAME);
    }

    #[test]
    fn frontend_object_is_flattened_into_sentinels() {
        let bundle = repair(json!({
            "app_name": "Files",
            "frontend_code": {
                "src/App.jsx": "function App() { return null; }",
                "src/index.css": "body { margin: 0; }\n"
            }
        }))
        .unwrap();
        assert_eq!(
            bundle.frontend_code,
            "===== src/App.jsx =====\nfunction App() { return null; }\n===== src/index.css =====\nbody { margin: 0; }\n"
        );
    }

    #[test]
    fn non_string_fields_rendered_as_json() {
        let bundle = repair(json!({ "app_name": "X", "database_schema": ["a", "b"] })).unwrap();
        assert_eq!(bundle.database_schema, "[\"a\",\"b\"]");
    }

    #[test]
    fn non_object_payload_is_malformed() {
        assert!(matches!(
            parse_reply("[1, 2, 3]"),
            Err(GenerateError::Malformed(msg)) if msg.contains("an array")
        ));
        assert!(matches!(
            parse_reply("Sorry, I cannot help with that."),
            Err(GenerateError::Malformed(_))
        ));
    }
}
