//! Interpretation of API response bodies.
//!
//! The API does not guarantee a stable body shape, so bodies are handled
//! as loose JSON rather than deserialized into fixed structs.

use serde_json::{Map, Value};

use crate::record::{AttrValue, is_truthy};

/// Parse a response body, treating anything that is not JSON as `{}`.
pub fn parse_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Returns the first field among `keys` that is present and not null.
pub fn first_present<'a>(body: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let map = body.as_object()?;
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
}

/// The server-supplied error message, if the body is an object carrying
/// a non-empty `error` field.
pub fn server_error(body: &Value) -> Option<String> {
    body.get("error")
        .filter(|error| is_truthy(error))
        .map(|error| AttrValue::Raw(error.clone()).to_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_json_body_is_empty_object() {
        assert_eq!(parse_body(b"<html>gateway timeout</html>"), json!({}));
        assert_eq!(parse_body(b""), json!({}));
    }

    #[test]
    fn json_body_is_parsed() {
        assert_eq!(parse_body(br#"[1, 2]"#), json!([1, 2]));
    }

    #[test]
    fn first_present_skips_null() {
        let body = json!({"a": null, "b": 0, "c": 1});
        assert_eq!(first_present(&body, &["a", "b", "c"]), Some(&json!(0)));
        assert_eq!(first_present(&json!([1]), &["a"]), None);
    }

    #[test]
    fn extracts_server_error() {
        assert_eq!(server_error(&json!({"error": "bad"})), Some("bad".to_string()));
        assert_eq!(server_error(&json!({"error": ""})), None);
        assert_eq!(server_error(&json!({"message": "nope"})), None);
        assert_eq!(server_error(&json!(["error"])), None);
    }
}
