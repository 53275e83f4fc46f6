//! Turns command-line color text into a proposal on a [`ColorState`].

use clap::ValueEnum;
use tincture_core::color::parse_components;
use tincture_core::{ColorState, Outcome};

use crate::error::CliError;

/// Color model the positional COLOR argument is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputModel {
    /// Hex if there are no commas, otherwise an `r,g,b` triple.
    Auto,
    Hex,
    Rgb,
    Hsv,
    Hsl,
    Cmyk,
    Yuv,
}

impl InputModel {
    pub fn name(self) -> &'static str {
        match self {
            InputModel::Auto => "auto",
            InputModel::Hex => "hex",
            InputModel::Rgb => "rgb",
            InputModel::Hsv => "hsv",
            InputModel::Hsl => "hsl",
            InputModel::Cmyk => "cmyk",
            InputModel::Yuv => "yuv",
        }
    }

    pub fn list_names() -> Vec<&'static str> {
        InputModel::value_variants()
            .iter()
            .map(|m| m.name())
            .collect()
    }
}

/// Proposes `text`, read as `model`, to `state`.
///
/// The state itself never fails; a proposal that is not applied here means
/// the text was malformed, which the CLI reports as an input error.
pub fn propose(state: &ColorState, model: InputModel, text: &str) -> Result<(), CliError> {
    let text = text.trim();
    let outcome = match model {
        InputModel::Auto if text.contains(',') => return propose(state, InputModel::Rgb, text),
        InputModel::Auto | InputModel::Hex => {
            let hex = if text.starts_with('#') {
                text.to_string()
            } else {
                format!("#{text}")
            };
            state.set_from_hex(&hex)
        }
        InputModel::Rgb => {
            let c = parse_components(text, 3)?;
            state.set_from_rgb(c[0].round() as i64, c[1].round() as i64, c[2].round() as i64)
        }
        InputModel::Hsv => {
            let c = parse_components(text, 3)?;
            state.set_from_hsv(c[0], c[1], c[2])
        }
        InputModel::Hsl => {
            let c = parse_components(text, 3)?;
            state.set_from_hsl(c[0], c[1], c[2])
        }
        InputModel::Cmyk => {
            let c = parse_components(text, 4)?;
            state.set_from_cmyk(c[0], c[1], c[2], c[3])
        }
        InputModel::Yuv => {
            let c = parse_components(text, 3)?;
            state.set_from_yuv(c[0], c[1], c[2])
        }
    };
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Ignored | Outcome::Suppressed => Err(CliError::Input(format!(
            "could not read '{text}' as {}",
            model.name()
        ))),
    }
}

/// Parses a pointer position written as `x,y`.
pub fn parse_position(text: &str) -> Result<(f64, f64), CliError> {
    let c = parse_components(text, 2)?;
    Ok((c[0], c[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_core::Rgb;

    fn proposed(model: InputModel, text: &str) -> Result<Rgb, CliError> {
        let state = ColorState::new();
        propose(&state, model, text).map(|()| state.rgb())
    }

    #[test]
    fn auto_reads_hex_with_or_without_hash() {
        assert_eq!(proposed(InputModel::Auto, "#00FF00").ok(), Some(Rgb::new(0, 255, 0)));
        assert_eq!(proposed(InputModel::Auto, "0000ff").ok(), Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn auto_reads_triples_as_rgb_and_clamps() {
        assert_eq!(
            proposed(InputModel::Auto, "300, -10, 256").ok(),
            Some(Rgb::new(255, 0, 255))
        );
    }

    #[test]
    fn other_models() {
        assert_eq!(proposed(InputModel::Hsv, "120,100,100").ok(), Some(Rgb::new(0, 255, 0)));
        assert_eq!(proposed(InputModel::Hsl, "240,100,50").ok(), Some(Rgb::new(0, 0, 255)));
        assert_eq!(proposed(InputModel::Cmyk, "0,0,0,100").ok(), Some(Rgb::BLACK));
        assert_eq!(proposed(InputModel::Yuv, "255,128,128").ok(), Some(Rgb::WHITE));
    }

    #[test]
    fn malformed_input_is_an_input_error() {
        for (model, text) in [
            (InputModel::Hex, "#12G"),
            (InputModel::Auto, "12345"),
            (InputModel::Cmyk, "1,2,3"),
            (InputModel::Rgb, "a,b,c"),
        ] {
            let err = proposed(model, text).unwrap_err();
            assert_eq!(err.exit_code(), 12, "{model:?} {text}");
        }
    }

    #[test]
    fn list_names_covers_every_model() {
        let names = InputModel::list_names();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"cmyk"));
    }

    #[test]
    fn parse_position_reads_pair() {
        assert_eq!(parse_position("158, 12").ok(), Some((158.0, 12.0)));
        assert!(parse_position("158").is_err());
    }
}
