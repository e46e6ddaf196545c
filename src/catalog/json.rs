//! JSON parsing with readable errors for hand-edited catalog files.

use super::errors::CatalogError;

/// Parse JSON and, on failure, report the serde path, the position, a cleaned
/// up type mismatch, and a snippet of the offending line.
pub fn parse_json_with_context<T: serde::de::DeserializeOwned>(
    body: &str,
) -> Result<T, CatalogError> {
    let jd = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(jd).map_err(|err| {
        let inner = err.inner();
        let (line, column) = (inner.line(), inner.column());
        let path = err.path().to_string();

        let msg = inner.to_string();
        let loc_suffix = format!(" at line {line} column {column}");
        let msg = msg.strip_suffix(&loc_suffix).unwrap_or(&msg);

        let location = if !path.is_empty() && path != "." {
            format!(" at path '{path}' (line {line} col {column})")
        } else {
            format!(" (line {line} col {column})")
        };

        CatalogError::Parse {
            location,
            message: parse_type_mismatch(msg),
            snippet: build_error_snippet(body, line, column, 20),
        }
    })
}

/// Turn `"invalid type: null, expected a string"` into
/// `"expected a string, got null"`; other messages pass through.
fn parse_type_mismatch(error_msg: &str) -> String {
    if let Some(rest) = error_msg.strip_prefix("invalid type: ")
        && let Some((actual, expected)) = rest.split_once(", expected ")
    {
        return format!("expected {}, got {}", expected.trim(), actual);
    }
    error_msg.to_string()
}

/// A window of `context_len` characters around the error with a caret under it.
fn build_error_snippet(body: &str, line: usize, column: usize, context_len: usize) -> String {
    let chars: Vec<char> = body
        .lines()
        .nth(line.saturating_sub(1))
        .unwrap_or("")
        .chars()
        .collect();
    if chars.is_empty() {
        return "(empty line)".to_string();
    }

    // column is 1-based
    let error_idx = column.saturating_sub(1).min(chars.len());
    let half_len = context_len / 2;
    let start = error_idx.saturating_sub(half_len);
    let end = (error_idx + half_len).min(chars.len());

    let slice: String = chars[start..end].iter().collect();
    let indicator = " ".repeat(error_idx - start) + "^";

    format!("...{slice}...\n   {indicator}")
}
