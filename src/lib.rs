//! # solid-color
//!
//! The color engine behind a multi-model color picker: parse a color in any of
//! hex, rgb, hsl, hsv, hwb or oklch, hold it in all six at once, edit one field
//! without drifting the others, and draw gamut-aware slider tracks.
//!
//! ## Usage
//!
//! ```rust
//! use solid_color::{create_color_object, generate_gradient, Component, Gamut};
//!
//! let color = create_color_object("oklch(0.444 0.173 282)", None)?;
//! let darker = color.set([(Component::OklchLightness, 0.1)], None);
//! assert_eq!(darker.oklch_chroma(), 0.173);
//!
//! let track = generate_gradient(&darker, Component::OklchHue, 72, Gamut::DisplayP3, true);
//! assert!(!track.is_empty());
//! # Ok::<(), solid_color::ColorError>(())
//! ```

mod color;
mod config;
mod constants;
mod convert;
mod error;
mod gamut;
mod gradient;
mod math;
mod model;
mod oklab;
mod parse;
#[cfg(feature = "random")]
mod random;

#[cfg(test)]
mod testing;

pub use color::SolidColor;
pub use config::{PickerConfig, PickerContext};
pub use constants::{GAP_PLACEHOLDER, OKLCH_MAX_CHROMA};
pub use convert::{from_rgb, is_achromatic_oklch, is_achromatic_srgb, to_rgb, Derived, HueHints};
pub use error::{ColorError, Result};
pub use gamut::{clamp_chroma, in_gamut, in_gamut_lch, smallest_gamut, Gamut};
pub use gradient::{
    generate_gradient, linear_gradient, oklch_gradient, rainbow_gradient, GradientStop, OklchAxis,
};
pub use model::{ColorModel, Component};
pub use oklab::{Oklab, Oklch};
pub use parse::{detect_model, parse, parse_components, valid_color, validate, Components};
#[cfg(feature = "random")]
pub use random::{random_color, random_hsl};

/// Parse `input` into a [`SolidColor`], detecting its model unless one is given.
pub fn create_color_object(input: &str, model: Option<ColorModel>) -> Result<SolidColor> {
    SolidColor::create(input, model)
}
