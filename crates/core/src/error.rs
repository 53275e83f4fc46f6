//! Error types for the tincture core.
//!
//! The synchronization protocol in [`crate::state`] never surfaces these: bad
//! input there is clamped or silently dropped. They exist for the strict
//! parsing entry points and for collaborators (render, CLI).

use thiserror::Error;

/// Errors produced by color parsing, lookups and snapshot rendering.
#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    /// A hex color string could not be parsed.
    #[error("invalid hex color '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// A harmony scheme name was not recognized.
    #[error("unknown harmony scheme: {0}")]
    UnknownScheme(String),

    /// A component list had the wrong arity or a non-numeric entry.
    #[error("invalid components: {0}")]
    InvalidComponents(String),

    /// Width or height was zero (or overflowed) when sizing a pixel buffer.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A snapshot could not be written.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ColorError {
    pub(crate) fn invalid_hex(input: &str, reason: impl Into<String>) -> Self {
        ColorError::InvalidHex {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hex_includes_input_and_reason() {
        let err = ColorError::invalid_hex("#12G", "expected 6 hex digits, got 3");
        let msg = format!("{err}");
        assert!(msg.contains("#12G"), "missing input in: {msg}");
        assert!(msg.contains("got 3"), "missing reason in: {msg}");
    }

    #[test]
    fn unknown_scheme_includes_name() {
        let err = ColorError::UnknownScheme("pentadic".into());
        let msg = format!("{err}");
        assert!(msg.contains("pentadic"), "missing name in: {msg}");
    }

    #[test]
    fn invalid_components_includes_message() {
        let err = ColorError::InvalidComponents("expected 3 values".into());
        assert!(err.to_string().contains("expected 3 values"));
    }

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let msg = ColorError::InvalidDimensions.to_string();
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn io_includes_message() {
        let err = ColorError::Io("disk full".into());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
