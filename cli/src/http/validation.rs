//! Request validation for the trigger API.

use super::models::HttpServerError;

/// Extracts a usable script id. Missing, empty, or whitespace-only values
/// are rejected with the exact message clients match on.
pub fn validate_script_id(script_id: Option<&str>) -> Result<String, HttpServerError> {
    let trimmed = script_id.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(HttpServerError::InvalidRequest(
            "scriptId is required".to_string(),
        ));
    }

    if trimmed.len() > 100 {
        return Err(HttpServerError::InvalidRequest(format!(
            "scriptId too long ({} chars, max 100)",
            trimmed.len()
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_ids() {
        assert_eq!(validate_script_id(Some("1")).unwrap(), "1");
        assert_eq!(validate_script_id(Some("  7  ")).unwrap(), "7");
    }

    #[test]
    fn missing_and_empty_ids_are_rejected_with_the_wire_message() {
        for input in [None, Some(""), Some("   ")] {
            match validate_script_id(input) {
                Err(HttpServerError::InvalidRequest(msg)) => {
                    assert_eq!(msg, "scriptId is required");
                }
                other => panic!("expected InvalidRequest, got {other:?}"),
            }
        }
    }

    #[test]
    fn oversized_ids_are_rejected() {
        let long = "a".repeat(101);
        match validate_script_id(Some(&long)) {
            Err(HttpServerError::InvalidRequest(msg)) => assert!(msg.contains("too long")),
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }
}
