//! Conversions between the six models, pivoting through 8-bit RGB.
//!
//! Nothing here rounds except at the boundary: [`to_rgb`] quantizes to `u8`
//! and [`from_rgb`] rounds each derived field to its stored precision.

use tracing::trace;

use crate::constants::{
    ACHROMATIC_CHROMA, ACHROMATIC_LIGHTNESS, ACHROMATIC_LUMINOSITY, ACHROMATIC_SATURATION,
    OKLCH_DECIMALS, PERCENT_DECIMALS,
};
use crate::gamut::{clamp_chroma, Gamut};
use crate::math::{
    format_number, hsl_to_hsv, hsv_to_hsl, hsv_to_hwb, hsv_to_rgb, hwb_to_hsv, rgb_to_hsv,
    round_hue, round_to, to_u8,
};
use crate::model::ColorModel;
use crate::oklab::{linear_to_srgb, srgb_to_linear, Oklch};

/// Hues to fall back on when a derived color is too close to gray for its
/// recomputed hue to mean anything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HueHints {
    /// Shared hsl/hsv/hwb hue, in degrees.
    pub hue: Option<f64>,
    /// OKLCH hue, in degrees.
    pub oklch_hue: Option<f64>,
}

impl HueHints {
    /// Fill hues this set lacks from `fallback`.
    pub fn or(self, fallback: HueHints) -> HueHints {
        HueHints {
            hue: self.hue.or(fallback.hue),
            oklch_hue: self.oklch_hue.or(fallback.oklch_hue),
        }
    }
}

/// Every model's fields, computed from one RGB triple and rounded for storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    pub hue: f64,
    pub saturation: f64,
    pub luminosity: f64,
    pub hsv_saturation: f64,
    pub value: f64,
    pub whiteness: f64,
    pub blackness: f64,
    pub oklch: Oklch,
}

/// Whether an sRGB-family color has no usable hue.
///
/// Takes HSV saturation and HSL luminosity on the percent scale.
pub fn is_achromatic_srgb(hsv_saturation: f64, luminosity: f64) -> bool {
    hsv_saturation < ACHROMATIC_SATURATION
        || luminosity < ACHROMATIC_LUMINOSITY
        || luminosity > 100.0 - ACHROMATIC_LUMINOSITY
}

/// Whether an OKLCH color has no usable hue.
pub fn is_achromatic_oklch(color: Oklch) -> bool {
    color.c < ACHROMATIC_CHROMA
        || color.l < ACHROMATIC_LIGHTNESS
        || color.l > 1.0 - ACHROMATIC_LIGHTNESS
}

/// Gamma-encoded sRGB channels in 0.0–1.0 for a model's three components.
///
/// Components use their field scales: 0–255 channels, degrees, percents, and
/// unit OKLCH lightness. OKLCH input outside sRGB has its chroma reduced first.
pub fn to_srgb(model: ColorModel, [c1, c2, c3]: [f64; 3]) -> [f64; 3] {
    let (r, g, b) = match model {
        ColorModel::Hex | ColorModel::Rgb => (c1 / 255.0, c2 / 255.0, c3 / 255.0),
        ColorModel::Hsl => {
            let (h, s, v) = hsl_to_hsv(c1 / 360.0, c2 / 100.0, c3 / 100.0);
            hsv_to_rgb(h, s, v)
        }
        ColorModel::Hsv => hsv_to_rgb(c1 / 360.0, c2 / 100.0, c3 / 100.0),
        ColorModel::Hwb => {
            let (h, s, v) = hwb_to_hsv(c1 / 360.0, c2 / 100.0, c3 / 100.0);
            hsv_to_rgb(h, s, v)
        }
        ColorModel::Oklch => {
            let clamped = clamp_chroma(Oklch::new(c1, c2, c3), Gamut::Srgb);
            let [r, g, b] = clamped.to_linear_srgb().map(linear_to_srgb);
            (r, g, b)
        }
    };
    [r, g, b].map(|c| if c.is_finite() { c.clamp(0.0, 1.0) } else { 0.0 })
}

/// 8-bit RGB for a model's three components.
pub fn to_rgb(model: ColorModel, components: [f64; 3]) -> [u8; 3] {
    to_srgb(model, components).map(to_u8)
}

/// Derive hsl, hsv, hwb and OKLCH fields from 8-bit RGB.
///
/// Achromatic results take their hue from `hints` when one is given.
pub fn from_rgb(rgb: [u8; 3], hints: HueHints) -> Derived {
    let [r, g, b] = rgb.map(|c| f64::from(c) / 255.0);
    let (h, s_hsv, v) = rgb_to_hsv(r, g, b);
    let (_, s_hsl, l) = hsv_to_hsl(h, s_hsv, v);
    let (_, w, bk) = hsv_to_hwb(h, s_hsv, v);

    let percent = |x: f64| round_to(x * 100.0, PERCENT_DECIMALS);
    let hsv_saturation = percent(s_hsv);
    let luminosity = percent(l);

    let mut hue = round_hue(h * 360.0, PERCENT_DECIMALS);
    if is_achromatic_srgb(hsv_saturation, luminosity) {
        if let Some(carried) = hints.hue {
            trace!(recomputed = hue, carried, "carrying hue over achromatic rgb");
            hue = round_hue(carried, PERCENT_DECIMALS);
        }
    }

    let exact = Oklch::from_linear_srgb([r, g, b].map(srgb_to_linear));
    let mut oklch = Oklch::new(
        round_to(exact.l, OKLCH_DECIMALS),
        round_to(exact.c, OKLCH_DECIMALS),
        round_hue(exact.h, OKLCH_DECIMALS),
    );
    if is_achromatic_oklch(oklch) {
        match hints.oklch_hue {
            Some(carried) => {
                trace!(recomputed = oklch.h, carried, "carrying hue over achromatic oklch");
                oklch.h = round_hue(carried, OKLCH_DECIMALS);
            }
            // Hue of a zero vector is noise.
            None if oklch.c == 0.0 => oklch.h = 0.0,
            None => {}
        }
    }

    Derived {
        hue,
        saturation: percent(s_hsl),
        luminosity,
        hsv_saturation,
        value: percent(v),
        whiteness: percent(w),
        blackness: percent(bk),
        oklch,
    }
}

fn alpha_suffix(alpha: f64) -> String {
    if alpha < 1.0 {
        format!(" / {}", format_number(alpha))
    } else {
        String::new()
    }
}

/// `#rrggbb`, or `#rrggbbaa` when alpha is below one.
pub fn format_hex([r, g, b]: [u8; 3], alpha: f64) -> String {
    if alpha < 1.0 {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, to_u8(alpha))
    } else {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// `rgb(r g b)` with an optional `/ alpha`.
pub fn format_rgb([r, g, b]: [f64; 3], alpha: f64) -> String {
    format!(
        "rgb({} {} {}{})",
        format_number(r),
        format_number(g),
        format_number(b),
        alpha_suffix(alpha)
    )
}

/// `name(hue a% b%)` for hsl, hsv and hwb.
pub fn format_cylindrical(model: ColorModel, [h, x, y]: [f64; 3], alpha: f64) -> String {
    format!(
        "{}({} {}% {}%{})",
        model.name(),
        format_number(h),
        format_number(x),
        format_number(y),
        alpha_suffix(alpha)
    )
}

/// `oklch(l c h)` with an optional `/ alpha`.
pub fn format_oklch(color: Oklch, alpha: f64) -> String {
    format!(
        "oklch({} {} {}{})",
        format_number(color.l),
        format_number(color.c),
        format_number(color.h),
        alpha_suffix(alpha)
    )
}

/// Render components already rounded to their field precision.
///
/// Hex takes 0–255 channels like rgb.
pub fn format_model(model: ColorModel, components: [f64; 3], alpha: f64) -> String {
    match model {
        ColorModel::Hex => {
            format_hex(components.map(|c| c.clamp(0.0, 255.0).round() as u8), alpha)
        }
        ColorModel::Rgb => format_rgb(components, alpha),
        ColorModel::Hsl | ColorModel::Hsv | ColorModel::Hwb => {
            format_cylindrical(model, components, alpha)
        }
        ColorModel::Oklch => {
            let [l, c, h] = components;
            format_oklch(Oklch::new(l, c, h), alpha)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_from_every_model() {
        assert_eq!(to_rgb(ColorModel::Rgb, [255.0, 0.0, 0.0]), [255, 0, 0]);
        assert_eq!(to_rgb(ColorModel::Hsl, [0.0, 100.0, 50.0]), [255, 0, 0]);
        assert_eq!(to_rgb(ColorModel::Hsv, [0.0, 100.0, 100.0]), [255, 0, 0]);
        assert_eq!(to_rgb(ColorModel::Hwb, [0.0, 0.0, 0.0]), [255, 0, 0]);
        assert_eq!(to_rgb(ColorModel::Oklch, [1.0, 0.0, 0.0]), [255, 255, 255]);
    }

    #[test]
    fn out_of_gamut_oklch_still_maps_to_rgb() {
        let [_, g, _] = to_rgb(ColorModel::Oklch, [0.662, 0.278, 145.0]);
        assert!(g > 150);
    }

    #[test]
    fn derives_red() {
        let d = from_rgb([255, 0, 0], HueHints::default());
        assert_eq!((d.hue, d.saturation, d.luminosity), (0.0, 100.0, 50.0));
        assert_eq!((d.hsv_saturation, d.value), (100.0, 100.0));
        assert_eq!((d.whiteness, d.blackness), (0.0, 0.0));
        assert_eq!(d.oklch.l, 0.628);
        assert_eq!(d.oklch.c, 0.258);
        assert_eq!(d.oklch.h, 29.234);
    }

    #[test]
    fn black_carries_hints() {
        let hints = HueHints {
            hue: Some(90.0),
            oklch_hue: Some(120.5),
        };
        let d = from_rgb([0, 0, 0], hints);
        assert_eq!(d.hue, 90.0);
        assert_eq!(d.oklch.h, 120.5);
    }

    #[test]
    fn gray_without_hints_has_zero_hue() {
        let d = from_rgb([128, 128, 128], HueHints::default());
        assert_eq!(d.hue, 0.0);
        assert_eq!(d.oklch.c, 0.0);
        assert_eq!(d.oklch.h, 0.0);
    }

    #[test]
    fn hints_fill_only_missing_hues() {
        let edit = HueHints {
            hue: Some(10.0),
            oklch_hue: None,
        };
        let source = HueHints {
            hue: Some(90.0),
            oklch_hue: Some(95.0),
        };
        let merged = edit.or(source);
        assert_eq!(merged.hue, Some(10.0));
        assert_eq!(merged.oklch_hue, Some(95.0));
    }

    #[test]
    fn chromatic_colors_ignore_hints() {
        let hints = HueHints {
            hue: Some(200.0),
            oklch_hue: Some(200.0),
        };
        let d = from_rgb([0, 255, 0], hints);
        assert_eq!(d.hue, 120.0);
        assert!(d.oklch.h > 140.0 && d.oklch.h < 143.0);
    }

    #[test]
    fn achromatic_thresholds() {
        assert!(is_achromatic_srgb(0.05, 50.0));
        assert!(is_achromatic_srgb(50.0, 0.5));
        assert!(is_achromatic_srgb(50.0, 99.5));
        assert!(!is_achromatic_srgb(50.0, 50.0));
        assert!(is_achromatic_oklch(Oklch::new(0.5, 0.01, 0.0)));
        assert!(is_achromatic_oklch(Oklch::new(0.995, 0.1, 0.0)));
        assert!(!is_achromatic_oklch(Oklch::new(0.5, 0.1, 0.0)));
    }

    #[test]
    fn formats() {
        assert_eq!(format_hex([255, 0, 0], 1.0), "#ff0000");
        assert_eq!(format_hex([255, 0, 0], 0.5), "#ff000080");
        assert_eq!(format_rgb([0.0, 255.0, 0.0], 1.0), "rgb(0 255 0)");
        assert_eq!(format_rgb([0.0, 255.0, 0.0], 0.25), "rgb(0 255 0 / 0.25)");
        assert_eq!(
            format_cylindrical(ColorModel::Hsl, [0.0, 100.0, 50.0], 1.0),
            "hsl(0 100% 50%)"
        );
        assert_eq!(
            format_oklch(Oklch::new(0.444, 0.173, 282.0), 1.0),
            "oklch(0.444 0.173 282)"
        );
    }
}
