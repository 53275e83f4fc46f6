//! Pure helper functions for extracting typed settings from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail, in keeping with the rest of the core: bad settings are
//! replaced, not reported.

use serde_json::Value;

/// Extracts a `u32` from `params[name]`, returning `default` if missing, wrong
/// type, negative, or too large.
pub fn param_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_u32 --

    #[test]
    fn param_u32_extracts_existing_integer() {
        let params = json!({"size": 316});
        assert_eq!(param_u32(&params, "size", 0), 316);
    }

    #[test]
    fn param_u32_returns_default_when_key_missing() {
        let params = json!({});
        assert_eq!(param_u32(&params, "size", 10), 10);
    }

    #[test]
    fn param_u32_returns_default_for_float_value() {
        let params = json!({"size": 2.5});
        assert_eq!(param_u32(&params, "size", 99), 99);
    }

    #[test]
    fn param_u32_returns_default_for_negative_integer() {
        let params = json!({"size": -1});
        assert_eq!(param_u32(&params, "size", 5), 5);
    }

    #[test]
    fn param_u32_returns_default_when_out_of_range() {
        let params = json!({"size": 5_000_000_000_u64});
        assert_eq!(param_u32(&params, "size", 8), 8);
    }

    // -- param_string --

    #[test]
    fn param_string_extracts_existing_string() {
        let params = json!({"initial": "#00FF00"});
        assert_eq!(param_string(&params, "initial", "#FF0000"), "#00FF00");
    }

    #[test]
    fn param_string_returns_default_for_wrong_type() {
        let params = json!({"initial": 42});
        assert_eq!(param_string(&params, "initial", "fallback"), "fallback");
    }
}
