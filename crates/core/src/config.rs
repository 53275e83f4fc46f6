//! Startup configuration for a [`ColorState`](crate::state::ColorState).
//!
//! Read from a JSON object of the form
//! `{"initial": "#RRGGBB", "picker": {"size": 316, "margin": 12, "span": 292}}`.
//! Every key is optional.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::color::Rgb;
use crate::model::parse_hex;
use crate::params::param_string;
use crate::picker::PickerGeometry;

/// Initial color and picker geometry for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    pub initial: Rgb,
    pub picker: PickerGeometry,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            initial: Rgb::RED,
            picker: PickerGeometry::default(),
        }
    }
}

impl StateConfig {
    /// Builds a config from JSON, falling back to defaults for anything
    /// missing or malformed. An unparsable `initial` is logged and replaced.
    pub fn from_json(params: &Value) -> Self {
        let defaults = Self::default();
        let initial_text = param_string(params, "initial", &defaults.initial.to_hex());
        let initial = match parse_hex(&initial_text) {
            Ok(rgb) => rgb,
            Err(e) => {
                warn!(error = %e, "ignoring initial color from config");
                defaults.initial
            }
        };
        let picker = params
            .get("picker")
            .map(PickerGeometry::from_json)
            .unwrap_or(defaults.picker);
        Self { initial, picker }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_red_with_reference_picker() {
        let config = StateConfig::default();
        assert_eq!(config.initial, Rgb::RED);
        assert_eq!(config.picker, PickerGeometry::default());
    }

    #[test]
    fn from_json_empty_object_is_default() {
        assert_eq!(StateConfig::from_json(&json!({})), StateConfig::default());
    }

    #[test]
    fn from_json_reads_initial_and_picker() {
        let config = StateConfig::from_json(&json!({
            "initial": "#336699",
            "picker": {"size": 128, "margin": 4, "span": 120}
        }));
        assert_eq!(config.initial, Rgb::new(0x33, 0x66, 0x99));
        assert_eq!(
            config.picker,
            PickerGeometry {
                size: 128,
                margin: 4,
                span: 120
            }
        );
    }

    #[test]
    fn from_json_malformed_initial_falls_back() {
        let config = StateConfig::from_json(&json!({"initial": "#12G"}));
        assert_eq!(config.initial, Rgb::RED);
    }

    #[test]
    fn serde_round_trip() {
        let config = StateConfig::from_json(&json!({"initial": "#0A0B0C"}));
        let text = serde_json::to_string(&config).unwrap();
        let back: StateConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
