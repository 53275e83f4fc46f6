#![deny(unsafe_code)]
//! CLI binary for the tincture color converter.
//!
//! Subcommands:
//! - `convert <color>`: print every representation of a color
//! - `harmony <scheme> [color]`: print (and optionally render) a harmony
//! - `picker [color]`: render the saturation/value picker as PNG
//! - `list`: print harmony schemes and input models

mod error;
mod input;

use std::cell::RefCell;
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use error::CliError;
use input::InputModel;
use tincture_core::{ColorBundle, ColorState, Scheme, StateConfig};
use tincture_render::snapshot::write_png;
use tincture_render::{hue_strip_rgba, picker_rgba, swatch_rgba};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "tincture", about = "Color conversion and harmony CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Session settings as a JSON string, e.g. '{"initial": "#336699"}'.
    #[arg(long, global = true, default_value = "{}")]
    config: String,

    /// Log proposals and broadcasts to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every representation of a color.
    Convert {
        /// The color, e.g. "#FF8800", "255,136,0", or "32,100,100" with --from hsv.
        color: String,

        /// Model COLOR is written in.
        #[arg(short, long, value_enum, default_value_t = InputModel::Auto)]
        from: InputModel,
    },
    /// Generate a harmony around a color.
    Harmony {
        /// Scheme name (complementary, analogous, triadic, tetradic).
        scheme: String,

        /// Base color; defaults to the configured initial color.
        color: Option<String>,

        /// Model COLOR is written in.
        #[arg(short, long, value_enum, default_value_t = InputModel::Auto)]
        from: InputModel,

        /// Write the swatches side by side to this PNG.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Swatch edge in pixels.
        #[arg(long, default_value_t = 110)]
        swatch: u32,
    },
    /// Render the saturation/value picker for a color.
    Picker {
        /// Starting color; defaults to the configured initial color.
        color: Option<String>,

        /// Model COLOR is written in.
        #[arg(short, long, value_enum, default_value_t = InputModel::Auto)]
        from: InputModel,

        /// Move the hue slider to this angle (degrees, wraps).
        #[arg(long)]
        hue: Option<f64>,

        /// Press the picker at this "x,y" position.
        #[arg(long)]
        at: Option<String>,

        /// Output file path.
        #[arg(short, long, default_value = "picker.png")]
        output: PathBuf,

        /// Also write the hue slider track to this PNG.
        #[arg(long)]
        hue_strip: Option<PathBuf>,
    },
    /// List harmony schemes and input models.
    List,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "tincture_core=debug,tincture=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Builds the session state and records the latest broadcast bundle.
fn session(config: &str) -> Result<(Rc<ColorState>, Rc<RefCell<Option<ColorBundle>>>), CliError> {
    let config: serde_json::Value = serde_json::from_str(config)
        .map_err(|e| CliError::Input(format!("invalid --config JSON: {e}")))?;
    let state = Rc::new(ColorState::with_config(StateConfig::from_json(&config)));
    let latest = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&latest);
    state.subscribe(move |bundle| {
        debug!(hex = %bundle.hex, "view updated");
        *sink.borrow_mut() = Some(bundle.clone());
    });
    Ok((state, latest))
}

fn print_bundle(bundle: &ColorBundle, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(bundle)?);
    } else {
        println!("{}", bundle.rgb);
        println!("  hex   {}", bundle.hex);
        println!("  hsv   {}", bundle.hsv);
        println!("  hsl   {}", bundle.hsl);
        println!("  cmyk  {}", bundle.cmyk);
        println!("  yuv   {}", bundle.yuv);
        println!("  hue   {}", bundle.hue());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (state, latest) = session(&cli.config)?;

    match cli.command {
        Command::List => {
            let schemes = Scheme::list_names();
            let models = InputModel::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "schemes": schemes,
                    "input_models": models,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Harmony schemes:");
                for name in schemes {
                    println!("  {name}");
                }
                println!("Input models:");
                println!("  {}", models.join(", "));
            }
        }
        Command::Convert { color, from } => {
            input::propose(&state, from, &color)?;
            let bundle = latest.borrow().clone().unwrap_or_else(|| state.bundle());
            print_bundle(&bundle, cli.json)?;
        }
        Command::Harmony {
            scheme,
            color,
            from,
            output,
            swatch,
        } => {
            let scheme: Scheme = scheme.parse()?;
            if let Some(color) = color {
                input::propose(&state, from, &color)?;
            }
            let harmony = state.harmony(scheme);

            if let Some(path) = &output {
                write_png(&swatch_rgba(&harmony.colors, swatch)?, path)?;
                info!(path = %path.display(), "wrote harmony swatches");
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&harmony)?);
            } else {
                println!("{scheme} around {}:", state.rgb().to_hex());
                for (hue, rgb) in harmony.hues.iter().zip(&harmony.colors) {
                    println!("  {hue:>3}°  {}  {rgb}", rgb.to_hex());
                }
                if let Some(path) = &output {
                    eprintln!("wrote {}", path.display());
                }
            }
        }
        Command::Picker {
            color,
            from,
            hue,
            at,
            output,
            hue_strip,
        } => {
            if let Some(color) = color {
                input::propose(&state, from, &color)?;
            }
            if let Some(hue) = hue {
                state.set_hue(hue);
            }
            if let Some(at) = at {
                let (x, y) = input::parse_position(&at)?;
                if !state.set_from_picker_position(x, y).is_applied() {
                    return Err(CliError::Input(format!(
                        "position ({x}, {y}) is outside the picker's active area"
                    )));
                }
            }

            let geometry = state.geometry();
            let picker = state.picker();
            let buffer = picker_rgba(
                &geometry,
                picker.hue,
                Some((picker.saturation, picker.value)),
            )?;
            write_png(&buffer, &output)?;

            if let Some(path) = &hue_strip {
                write_png(&hue_strip_rgba(geometry.size, 24)?, path)?;
            }

            let bundle = state.bundle();
            if cli.json {
                let info = serde_json::json!({
                    "color": bundle,
                    "marker": geometry.marker(picker.saturation, picker.value),
                    "output": output.display().to_string(),
                    "hue_strip": hue_strip.as_ref().map(|p| p.display().to_string()),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print_bundle(&bundle, false)?;
                eprintln!(
                    "rendered picker ({0}x{0}, hue {1:.0}) -> {2}",
                    geometry.size,
                    picker.hue,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
