//! Slider track gradients: one color stop per step across a field's range.
//!
//! Stop positions are `value / range * 100`, the same formula that places a
//! slider handle, so gamut cutoffs line up with handle positions.

use crate::color::SolidColor;
use crate::constants::{
    GAP_PLACEHOLDER, OKLCH_DECIMALS, POSITION_DECIMALS, RAINBOW_LUMINOSITY, RAINBOW_SATURATION,
};
use crate::convert::{format_model, format_rgb, to_rgb};
use crate::gamut::{in_gamut, Gamut};
use crate::math::{format_number, round_to};
use crate::model::{ColorModel, Component};
use crate::oklab::{Oklab, Oklch};

/// A color at a position along a track, in percent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    pub color: String,
    pub position: f64,
}

impl GradientStop {
    pub fn new(color: impl Into<String>, position: f64) -> Self {
        Self {
            color: color.into(),
            position,
        }
    }
}

/// The OKLCH coordinate a gradient sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OklchAxis {
    Lightness,
    Chroma,
    Hue,
}

impl OklchAxis {
    pub fn from_component(component: Component) -> Option<Self> {
        match component {
            Component::OklchLightness => Some(OklchAxis::Lightness),
            Component::OklchChroma => Some(OklchAxis::Chroma),
            Component::OklchHue => Some(OklchAxis::Hue),
            _ => None,
        }
    }

    pub fn component(self) -> Component {
        match self {
            OklchAxis::Lightness => Component::OklchLightness,
            OklchAxis::Chroma => Component::OklchChroma,
            OklchAxis::Hue => Component::OklchHue,
        }
    }

    fn apply(self, color: Oklch, value: f64) -> Oklch {
        match self {
            OklchAxis::Lightness => color.with_l(value),
            OklchAxis::Chroma => color.with_c(value),
            OklchAxis::Hue => color.with_h(value),
        }
    }
}

/// Swept value and track position for step `i` of `steps`.
fn sweep(max: f64, i: usize, steps: usize) -> (f64, f64) {
    let value = max * i as f64 / steps as f64;
    (value, value / max * 100.0)
}

/// Stops for sweeping `component` of `color` across its range.
///
/// Emits `steps + 1` stops (at least two). OKLCH fields honor `gamut` and
/// `gamut_gaps`; sRGB-model fields can never leave sRGB and ignore both.
pub fn generate_gradient(
    color: &SolidColor,
    component: Component,
    steps: usize,
    gamut: Gamut,
    gamut_gaps: bool,
) -> Vec<GradientStop> {
    build_gradient(color, component, steps, gamut, gamut_gaps, GAP_PLACEHOLDER)
}

pub(crate) fn build_gradient(
    color: &SolidColor,
    component: Component,
    steps: usize,
    gamut: Gamut,
    gamut_gaps: bool,
    placeholder: &str,
) -> Vec<GradientStop> {
    let steps = steps.max(1);
    if let Some(axis) = OklchAxis::from_component(component) {
        return oklch_stops(
            color.to_oklch(),
            axis,
            steps,
            gamut,
            gamut_gaps,
            color.alpha(),
            placeholder,
        );
    }
    if component == Component::Alpha {
        return alpha_stops(color, steps);
    }
    srgb_stops(color, component, steps)
}

/// Stops for sweeping one OKLCH coordinate of `color`.
///
/// In smooth mode every step is emitted, in gamut or not, and the lightness
/// sweep interpolates in OKLab. With `gamut_gaps`, each out-of-gamut run is
/// painted with a neutral placeholder reaching from the last in-gamut step
/// to the next, with hard edges on both sides; when no step fits, the result
/// is a single placeholder stop.
pub fn oklch_gradient(
    color: Oklch,
    axis: OklchAxis,
    steps: usize,
    gamut: Gamut,
    gamut_gaps: bool,
) -> Vec<GradientStop> {
    oklch_stops(color, axis, steps.max(1), gamut, gamut_gaps, 1.0, GAP_PLACEHOLDER)
}

fn oklch_stops(
    color: Oklch,
    axis: OklchAxis,
    steps: usize,
    gamut: Gamut,
    gamut_gaps: bool,
    alpha: f64,
    placeholder: &str,
) -> Vec<GradientStop> {
    let color = color.normalized();
    let max = axis.component().max();

    if !gamut_gaps {
        let black = color.with_l(0.0).to_oklab();
        let white = Oklab { l: 1.0, ..black };
        return (0..=steps)
            .map(|i| {
                let (value, position) = sweep(max, i, steps);
                let stop = match axis {
                    OklchAxis::Lightness => black.mix(&white, value).to_oklch(),
                    _ => axis.apply(color, value),
                };
                GradientStop::new(format_stop(stop, alpha), position)
            })
            .collect();
    }

    // A gap runs from the last in-gamut stop to the next one. Its edges share
    // their neighbors' positions so CSS draws a hard edge instead of a fade.
    let mut stops: Vec<GradientStop> = Vec::new();
    let mut any_in_gamut = false;
    let mut in_gap = false;
    let mut last_position = 0.0;

    for i in 0..=steps {
        let (value, position) = sweep(max, i, steps);
        let stop = axis.apply(color, value);
        if in_gamut(stop, gamut) {
            if in_gap {
                in_gap = false;
                stops.push(GradientStop::new(placeholder, position));
            }
            stops.push(GradientStop::new(format_stop(stop, alpha), position));
            any_in_gamut = true;
        } else if !in_gap {
            let start = stops.last().map_or(position, |s| s.position);
            stops.push(GradientStop::new(placeholder, start));
            in_gap = true;
        }
        last_position = position;
    }

    if !any_in_gamut {
        return vec![GradientStop::new(placeholder, 0.0)];
    }
    if in_gap {
        stops.push(GradientStop::new(placeholder, last_position));
    }
    stops
}

/// `oklch(L C H)` with lightness and chroma at fixed three decimals.
fn format_stop(color: Oklch, alpha: f64) -> String {
    let hue = format_number(round_to(color.h, OKLCH_DECIMALS));
    if alpha < 1.0 {
        format!(
            "oklch({:.3} {:.3} {} / {})",
            color.l,
            color.c,
            hue,
            format_number(alpha)
        )
    } else {
        format!("oklch({:.3} {:.3} {})", color.l, color.c, hue)
    }
}

/// Model a non-OKLCH field is swept in. The shared hue follows the color's
/// own cylindrical model when it has one.
fn sweep_model(color: &SolidColor, component: Component) -> ColorModel {
    match (component, color.model()) {
        (Component::Hue, model @ (ColorModel::Hsl | ColorModel::Hsv | ColorModel::Hwb)) => {
            model
        }
        _ => component.native_model().unwrap_or(ColorModel::Rgb),
    }
}

/// Render `values` of `model` as a stop. hsv has no CSS form and goes out as rgb.
fn render(model: ColorModel, values: [f64; 3], alpha: f64) -> String {
    match model {
        ColorModel::Hsv => format_rgb(to_rgb(model, values).map(f64::from), alpha),
        _ => format_model(model, values, alpha),
    }
}

fn srgb_stops(color: &SolidColor, component: Component, steps: usize) -> Vec<GradientStop> {
    let model = sweep_model(color, component);
    let base = color.components_of(model);
    let slot = model.components()[..3]
        .iter()
        .position(|c| *c == component)
        .unwrap_or(0);

    (0..=steps)
        .map(|i| {
            let (value, position) = sweep(component.max(), i, steps);
            let mut values = base;
            values[slot] = round_to(value, component.decimals());
            GradientStop::new(render(model, values, color.alpha()), position)
        })
        .collect()
}

fn alpha_stops(color: &SolidColor, steps: usize) -> Vec<GradientStop> {
    let model = match color.model() {
        ColorModel::Hex => ColorModel::Rgb,
        model => model,
    };
    let values = color.components_of(model);
    (0..=steps)
        .map(|i| {
            let (alpha, position) = sweep(1.0, i, steps);
            let alpha = round_to(alpha, Component::Alpha.decimals());
            GradientStop::new(render(model, values, alpha), position)
        })
        .collect()
}

/// Hue track that stays readable whatever the current color is: hsl hue
/// sweep with saturation and luminosity pulled into a mid range.
pub fn rainbow_gradient(color: &SolidColor, steps: usize) -> Vec<GradientStop> {
    let steps = steps.max(1);
    let saturation = color
        .saturation()
        .clamp(RAINBOW_SATURATION.0, RAINBOW_SATURATION.1);
    let luminosity = color
        .luminosity()
        .clamp(RAINBOW_LUMINOSITY.0, RAINBOW_LUMINOSITY.1);
    (0..=steps)
        .map(|i| {
            let (hue, position) = sweep(Component::Hue.max(), i, steps);
            let hue = round_to(hue, Component::Hue.decimals());
            let css = format_model(ColorModel::Hsl, [hue, saturation, luminosity], 1.0);
            GradientStop::new(css, position)
        })
        .collect()
}

/// Render stops as a left-to-right CSS `linear-gradient`.
///
/// Positions are written with at most two decimals. A single stop is repeated
/// so the gradient stays valid CSS.
pub fn linear_gradient(stops: &[GradientStop]) -> String {
    let body = match stops {
        [] => return "none".to_string(),
        [only] => format!("{0}, {0}", only.color),
        _ => stops
            .iter()
            .map(|stop| {
                format!(
                    "{} {}%",
                    stop.color,
                    format_number(round_to(stop.position, POSITION_DECIMALS))
                )
            })
            .collect::<Vec<_>>()
            .join(", "),
    };
    format!("linear-gradient(to right, {body})")
}
