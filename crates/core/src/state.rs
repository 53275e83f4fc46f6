//! The synchronized color state.
//!
//! [`ColorState`] owns the canonical [`Rgb`] and keeps every view of it
//! (numeric fields, hex text, picker, hue slider, output panels) consistent.
//! Views propose changes through the `set_*` methods; each accepted proposal
//! commits a new canonical color and delivers exactly one [`ColorBundle`] to
//! every observer.
//!
//! Everything runs on one thread. Observers may call back into the state
//! while a bundle is being delivered (a widget whose programmatic update fires
//! its own change handler, say). Those re-entrant proposals are dropped by a
//! scoped [`PropagationGuard`], so a broadcast can never trigger another one.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tincture_core::{ColorState, Rgb};
//!
//! let state = Rc::new(ColorState::new());
//! let seen = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&seen);
//! state.subscribe(move |bundle| {
//!     assert_eq!(bundle.hex, "#0A141E");
//!     counter.set(counter.get() + 1);
//! });
//! state.set_from_rgb(10, 20, 30);
//! assert_eq!(state.rgb(), Rgb::new(10, 20, 30));
//! assert_eq!(seen.get(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::color::{Cmyk, Hsl, Hsv, Rgb, Yuv};
use crate::config::StateConfig;
use crate::harmony::{Harmony, Scheme};
use crate::model::{
    clamp_percent, cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, parse_hex, rgb_to_cmyk, rgb_to_hex,
    rgb_to_hsl, rgb_to_hsv, rgb_to_hsv_precise, rgb_to_yuv, wrap_hue, yuv_to_rgb,
};
use crate::picker::PickerGeometry;

/// What happened to a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Committed and broadcast.
    Applied,
    /// Rejected input (malformed hex text, picker press outside the active
    /// area). No state change, no broadcast.
    Ignored,
    /// Arrived while a broadcast was in progress and was dropped.
    Suppressed,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

/// Handle returned by [`ColorState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Picker-side view of the color: the explicit hue plus the marker's
/// saturation and value, all unrounded.
///
/// The hue survives achromatic colors (grays, black), whose RGB-derived hue
/// is undefined and would otherwise snap to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PickerState {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// Everything an observer needs to re-render, derived from one canonical color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBundle {
    pub rgb: Rgb,
    pub hex: String,
    pub hsv: Hsv,
    pub hsl: Hsl,
    pub cmyk: Cmyk,
    pub yuv: Yuv,
    pub picker: PickerState,
}

impl ColorBundle {
    /// Derives every representation of `rgb` in one step.
    pub fn derive(rgb: Rgb, picker: PickerState) -> Self {
        Self {
            rgb,
            hex: rgb_to_hex(rgb),
            hsv: rgb_to_hsv(rgb),
            hsl: rgb_to_hsl(rgb),
            cmyk: rgb_to_cmyk(rgb),
            yuv: rgb_to_yuv(rgb),
            picker,
        }
    }

    /// Slider position for the hue: the picker's hue, rounded.
    pub fn hue(&self) -> u16 {
        (self.picker.hue.round() as u16) % 360
    }
}

/// Marks the state as propagating for as long as it lives.
///
/// Released on drop, so early returns and panicking observers cannot leave
/// the state stuck.
struct PropagationGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> PropagationGuard<'a> {
    /// Returns `None` if a propagation is already in progress.
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self { flag })
        }
    }
}

impl Drop for PropagationGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

type Observer = Rc<dyn Fn(&ColorBundle)>;

/// Single source of truth for the current color.
///
/// All methods take `&self`; share the state with observers through an
/// `Rc<ColorState>` (or a `Weak`) when they need to propose changes.
pub struct ColorState {
    rgb: Cell<Rgb>,
    picker: Cell<PickerState>,
    geometry: PickerGeometry,
    propagating: Cell<bool>,
    revision: Cell<u64>,
    next_observer: Cell<u64>,
    observers: RefCell<Vec<(ObserverId, Observer)>>,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::with_config(StateConfig::default())
    }
}

impl ColorState {
    /// A state holding the session default, pure red.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StateConfig) -> Self {
        Self {
            rgb: Cell::new(config.initial),
            picker: Cell::new(picker_from_rgb(config.initial, 0.0)),
            geometry: config.picker,
            propagating: Cell::new(false),
            revision: Cell::new(0),
            next_observer: Cell::new(0),
            observers: RefCell::new(Vec::new()),
        }
    }

    // -- Observers --

    /// Registers an observer, called once per accepted proposal.
    pub fn subscribe(&self, observer: impl Fn(&ColorBundle) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer.get());
        self.next_observer.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(other, _)| *other != id);
        observers.len() != before
    }

    // -- Proposals --

    /// Accepts any integers, clamped to [0, 255] per channel.
    ///
    /// The picker hue follows the new color only when it is chromatic.
    pub fn set_from_rgb(&self, r: i64, g: i64, b: i64) -> Outcome {
        self.propose("rgb", || Some(Rgb::clamped(r, g, b)), |state, rgb| {
            state.picker_for_rgb(rgb)
        })
    }

    /// Accepts `#` followed by exactly six hex digits; anything else is ignored.
    ///
    /// Half-typed text such as `"#12"` is expected here and is not an error.
    pub fn set_from_hex(&self, text: &str) -> Outcome {
        self.propose(
            "hex",
            || {
                let parsed = text
                    .strip_prefix('#')
                    .filter(|digits| digits.len() == 6)
                    .and_then(|_| parse_hex(text).ok());
                if parsed.is_none() {
                    debug!(input = text, "ignoring incomplete hex proposal");
                }
                parsed
            },
            |state, rgb| state.picker_for_rgb(rgb),
        )
    }

    /// Sets hue, saturation and value together. The hue becomes the picker hue.
    pub fn set_from_hsv(&self, h: f64, s: f64, v: f64) -> Outcome {
        let picker = PickerState {
            hue: wrap_hue(h),
            saturation: clamp_percent(s),
            value: clamp_percent(v),
        };
        self.propose(
            "hsv",
            || Some(hsv_to_rgb(picker.hue, picker.saturation, picker.value)),
            |_, _| picker,
        )
    }

    /// Picks saturation and value from a pointer position on the picker.
    ///
    /// Uses the current picker hue. Positions outside the active area are ignored.
    pub fn set_from_picker_position(&self, x: f64, y: f64) -> Outcome {
        let Some((saturation, value)) = self.geometry.saturation_value(x, y) else {
            debug!(x, y, "ignoring picker press outside the active area");
            return Outcome::Ignored;
        };
        let hue = self.picker.get().hue;
        self.set_from_hsv(hue, saturation, value)
    }

    /// Rotates the hue, keeping the saturation and value of the current color.
    pub fn set_hue(&self, h: f64) -> Outcome {
        let (_, saturation, value) = rgb_to_hsv_precise(self.rgb.get());
        self.set_from_hsv(h, saturation, value)
    }

    pub fn set_from_hsl(&self, h: f64, s: f64, l: f64) -> Outcome {
        self.propose("hsl", || Some(hsl_to_rgb(h, s, l)), |state, rgb| {
            state.picker_for_rgb(rgb)
        })
    }

    pub fn set_from_cmyk(&self, c: f64, m: f64, y: f64, k: f64) -> Outcome {
        self.propose("cmyk", || Some(cmyk_to_rgb(c, m, y, k)), |state, rgb| {
            state.picker_for_rgb(rgb)
        })
    }

    pub fn set_from_yuv(&self, y: f64, u: f64, v: f64) -> Outcome {
        self.propose("yuv", || Some(yuv_to_rgb(y, u, v)), |state, rgb| {
            state.picker_for_rgb(rgb)
        })
    }

    /// Re-broadcasts the current color without changing it, e.g. so freshly
    /// built views can render their initial state.
    pub fn refresh(&self) -> Outcome {
        self.propose("refresh", || Some(self.rgb.get()), |state, _| state.picker.get())
    }

    // -- Snapshots --

    pub fn rgb(&self) -> Rgb {
        self.rgb.get()
    }

    /// Current picker hue in [0, 360).
    pub fn hue(&self) -> f64 {
        self.picker.get().hue
    }

    pub fn picker(&self) -> PickerState {
        self.picker.get()
    }

    pub fn geometry(&self) -> PickerGeometry {
        self.geometry
    }

    /// Number of broadcasts delivered so far.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    pub fn is_propagating(&self) -> bool {
        self.propagating.get()
    }

    pub fn bundle(&self) -> ColorBundle {
        ColorBundle::derive(self.rgb.get(), self.picker.get())
    }

    /// Harmony around the current color, rotating the picker hue so that
    /// grays still produce the hues the user last chose.
    pub fn harmony(&self, scheme: Scheme) -> Harmony {
        let hsv = rgb_to_hsv(self.rgb.get());
        let base = Hsv {
            h: (self.hue().round() as u16) % 360,
            ..hsv
        };
        Harmony::new(scheme, base)
    }

    // -- Internals --

    /// Runs one proposal: take the guard, compute the candidate color, commit,
    /// broadcast. `candidate` returning `None` means the input was rejected.
    fn propose(
        &self,
        source: &'static str,
        candidate: impl FnOnce() -> Option<Rgb>,
        picker: impl FnOnce(&Self, Rgb) -> PickerState,
    ) -> Outcome {
        let Some(_guard) = PropagationGuard::acquire(&self.propagating) else {
            debug!(source, "dropping re-entrant proposal during propagation");
            return Outcome::Suppressed;
        };
        let Some(rgb) = candidate() else {
            return Outcome::Ignored;
        };
        let picker = picker(self, rgb);
        self.rgb.set(rgb);
        self.picker.set(picker);
        self.broadcast(source);
        Outcome::Applied
    }

    fn picker_for_rgb(&self, rgb: Rgb) -> PickerState {
        picker_from_rgb(rgb, self.picker.get().hue)
    }

    fn broadcast(&self, source: &'static str) {
        let bundle = self.bundle();
        // Snapshot so observers may subscribe or unsubscribe while being called.
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        self.revision.set(self.revision.get() + 1);
        trace!(
            source,
            hex = %bundle.hex,
            observers = observers.len(),
            revision = self.revision.get(),
            "broadcasting color"
        );
        for observer in observers {
            observer(&bundle);
        }
    }
}

/// Picker state for `rgb`, keeping `last_hue` when the color is achromatic.
fn picker_from_rgb(rgb: Rgb, last_hue: f64) -> PickerState {
    let (h, saturation, value) = rgb_to_hsv_precise(rgb);
    let hue = if saturation > 0.0 { h } else { last_hue };
    PickerState {
        hue,
        saturation,
        value,
    }
}
