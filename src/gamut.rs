//! Gamut membership tests and chroma reduction for OKLCH coordinates.

use core::fmt;
use core::str::FromStr;

use tracing::trace;

use crate::constants::{CHROMA_SEARCH_PRECISION, GAMUT_EPSILON};
use crate::error::ColorError;
use crate::oklab::Oklch;

/// An RGB output space a color may or may not fit into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Gamut {
    #[default]
    #[cfg_attr(feature = "serialize", serde(rename = "sRGB", alias = "srgb"))]
    Srgb,
    #[cfg_attr(feature = "serialize", serde(rename = "P3", alias = "p3"))]
    DisplayP3,
}

impl Gamut {
    pub fn name(self) -> &'static str {
        match self {
            Gamut::Srgb => "sRGB",
            Gamut::DisplayP3 => "P3",
        }
    }

    fn linear_rgb(self, color: Oklch) -> [f64; 3] {
        let lab = color.to_oklab();
        match self {
            Gamut::Srgb => lab.to_linear_srgb(),
            Gamut::DisplayP3 => lab.to_linear_display_p3(),
        }
    }
}

impl fmt::Display for Gamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gamut {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "srgb" | "rgb" => Ok(Gamut::Srgb),
            "p3" | "display-p3" => Ok(Gamut::DisplayP3),
            _ => Err(ColorError::UnsupportedModel {
                model: s.to_string(),
            }),
        }
    }
}

/// Whether `color` maps to linear channels inside `[0, 1]` in `target`.
///
/// Linear and gamma-encoded channels share the unit interval, so the test
/// runs on linear values directly.
pub fn in_gamut(color: Oklch, target: Gamut) -> bool {
    let color = color.normalized();
    target
        .linear_rgb(color)
        .iter()
        .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c))
}

/// [`in_gamut`] taking loose coordinates.
pub fn in_gamut_lch(l: f64, c: f64, h: f64, target: Gamut) -> bool {
    in_gamut(Oklch::new(l, c, h), target)
}

/// Reduce chroma until `color` fits `target`, holding lightness and hue.
///
/// In-gamut input is returned unchanged. Lightness outside `[0, 1]` has no
/// in-gamut chroma and comes back with chroma zero.
pub fn clamp_chroma(color: Oklch, target: Gamut) -> Oklch {
    let color = color.normalized();
    if in_gamut(color, target) {
        return color;
    }

    let mut lo = 0.0;
    let mut hi = color.c.max(0.0);
    while hi - lo > CHROMA_SEARCH_PRECISION {
        let mid = (lo + hi) / 2.0;
        if in_gamut(color.with_c(mid), target) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    trace!(
        l = color.l,
        h = color.h,
        from = color.c,
        to = lo,
        gamut = %target,
        "clamped chroma"
    );
    color.with_c(lo)
}

/// Smallest gamut that holds `color`, or `None` when even Display-P3 cannot.
pub fn smallest_gamut(color: Oklch) -> Option<Gamut> {
    [Gamut::Srgb, Gamut::DisplayP3]
        .into_iter()
        .find(|g| in_gamut(color, *g))
}
