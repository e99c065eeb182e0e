//! Completion response parsing

use crate::{Error, Result};
use log::debug;
use serde_json::Value;

/// Title and description extracted from one completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub title: String,
    pub description: String,
}

/// Parse the raw response body: pull `content[0].text` out of the JSON
/// document, then segment it into a title and description.
pub fn parse_response(body: &str) -> Result<ReviewSummary> {
    let text = extract_completion_text(body)?;
    debug!("Response text length: {} bytes", text.len());
    Ok(split_title_description(&text))
}

/// Locate the first completion item's text field. Every other response
/// field is ignored.
fn extract_completion_text(body: &str) -> Result<String> {
    let root: Value = serde_json::from_str(body).map_err(|e| Error::InvalidResponse {
        reason: format!("JSON parsing failed: {}", e),
    })?;

    let content = root
        .get("content")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::InvalidResponse {
            reason: "content field not found or not an array".to_string(),
        })?;

    let first = content.first().ok_or_else(|| Error::InvalidResponse {
        reason: "content array is empty".to_string(),
    })?;

    let text = first
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::InvalidResponse {
            reason: "text field not found or not a string".to_string(),
        })?;

    Ok(text.to_string())
}

/// Split the completion text into a title line and the rest.
///
/// Leading blank lines are skipped; the title is the first non-blank line up
/// to the next `\n`, with no further trimming (a `\r` before that newline
/// stays in the title); the description is everything after that newline,
/// byte-for-byte. Text without a newline becomes the title with an empty
/// description.
pub fn split_title_description(text: &str) -> ReviewSummary {
    let start = text
        .find(|c: char| c != '\n' && c != '\r')
        .unwrap_or(text.len());
    let rest = &text[start..];

    match rest.find('\n') {
        Some(pos) => {
            let summary = ReviewSummary {
                title: rest[..pos].to_string(),
                description: rest[pos + 1..].to_string(),
            };
            debug!("Title extracted: \"{}\"", summary.title);
            summary
        }
        None => {
            debug!("No newline found, using entire response as title");
            ReviewSummary {
                title: rest.to_string(),
                description: String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_text(text: &str) -> String {
        serde_json::json!({
            "id": "msg_01",
            "role": "assistant",
            "content": [{ "type": "text", "text": text }],
            "stop_reason": "end_turn"
        })
        .to_string()
    }

    #[test]
    fn test_title_and_description() {
        let summary = split_title_description("Fix bug\nThis patch fixes X");
        assert_eq!(summary.title, "Fix bug");
        assert_eq!(summary.description, "This patch fixes X");
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        let summary = split_title_description("\n\nFix bug\nThis patch fixes X");
        assert_eq!(summary.title, "Fix bug");
        assert_eq!(summary.description, "This patch fixes X");
    }

    #[test]
    fn test_single_line_becomes_title() {
        let summary = split_title_description("Only one line");
        assert_eq!(summary.title, "Only one line");
        assert_eq!(summary.description, "");
    }

    #[test]
    fn test_description_kept_verbatim() {
        let text = "Title line\nFirst paragraph.\n\nSecond paragraph.\n  \n";
        let summary = split_title_description(text);
        assert_eq!(summary.title, "Title line");
        assert_eq!(summary.description, "First paragraph.\n\nSecond paragraph.\n  \n");
    }

    #[test]
    fn test_carriage_return_stays_in_title() {
        // Only the leading blank-line skip strips \r; the first line keeps it.
        let summary = split_title_description("Title\r\nBody");
        assert_eq!(summary.title, "Title\r");
        assert_eq!(summary.description, "Body");
    }

    #[test]
    fn test_segmentation_is_idempotent() {
        let text = "\nA title\nAnd a description\n";
        assert_eq!(split_title_description(text), split_title_description(text));
    }

    #[test]
    fn test_all_blank_text() {
        let summary = split_title_description("\n\r\n");
        assert_eq!(summary.title, "");
        assert_eq!(summary.description, "");
    }

    #[test]
    fn test_parse_full_response() {
        let body = response_with_text("Add retries to uploader\nCovers transient S3 errors.");
        let summary = parse_response(&body).unwrap();
        assert_eq!(summary.title, "Add retries to uploader");
        assert_eq!(summary.description, "Covers transient S3 errors.");
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let result = parse_response("not json at all");
        assert!(matches!(result, Err(Error::InvalidResponse { .. })));
    }

    #[test]
    fn test_missing_content_field() {
        let result = parse_response(r#"{"id": "msg_01"}"#);
        assert!(matches!(result, Err(Error::InvalidResponse { .. })));
    }

    #[test]
    fn test_content_not_an_array() {
        let result = parse_response(r#"{"content": "text"}"#);
        assert!(matches!(result, Err(Error::InvalidResponse { .. })));
    }

    #[test]
    fn test_empty_content_array() {
        let result = parse_response(r#"{"content": []}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("content array is empty"));
    }

    #[test]
    fn test_text_field_missing_or_not_a_string() {
        let missing = parse_response(r#"{"content": [{"type": "text"}]}"#);
        assert!(matches!(missing, Err(Error::InvalidResponse { .. })));

        let not_a_string = parse_response(r#"{"content": [{"text": 42}]}"#);
        assert!(matches!(not_a_string, Err(Error::InvalidResponse { .. })));
    }
}
