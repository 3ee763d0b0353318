//! SolidColor: one color held in all six models at once.
//!
//! The authoritative model's fields are stored as given (clamped and rounded);
//! every other model is derived from the 8-bit RGB pivot.

use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::convert::{self, HueHints};
use crate::error::{ColorError, Result};
use crate::gamut::{smallest_gamut, Gamut};
use crate::math::{round_hue, round_to};
use crate::model::{ColorModel, Component};
use crate::oklab::Oklch;
use crate::parse::{self, Components};

/// An immutable color with every model's fields precomputed.
///
/// Edits go through [`SolidColor::set`], which returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct SolidColor {
    model: ColorModel,
    red: u8,
    green: u8,
    blue: u8,
    hue: f64,
    saturation: f64,
    luminosity: f64,
    hsv_saturation: f64,
    value: f64,
    whiteness: f64,
    blackness: f64,
    oklch_lightness: f64,
    oklch_chroma: f64,
    oklch_hue: f64,
    alpha: f64,
}

impl SolidColor {
    /// Authoritative model, the one the color was last edited in.
    pub fn model(&self) -> ColorModel {
        self.model
    }
    /// Red channel (0–255).
    pub fn red(&self) -> u8 {
        self.red
    }
    /// Green channel (0–255).
    pub fn green(&self) -> u8 {
        self.green
    }
    /// Blue channel (0–255).
    pub fn blue(&self) -> u8 {
        self.blue
    }
    /// Hue shared by hsl, hsv and hwb (0–360).
    pub fn hue(&self) -> f64 {
        self.hue
    }
    /// HSL saturation (0–100).
    pub fn saturation(&self) -> f64 {
        self.saturation
    }
    /// HSL luminosity (0–100).
    pub fn luminosity(&self) -> f64 {
        self.luminosity
    }
    /// HSV saturation (0–100).
    pub fn hsv_saturation(&self) -> f64 {
        self.hsv_saturation
    }
    /// HSV value (0–100).
    pub fn value(&self) -> f64 {
        self.value
    }
    /// HWB whiteness (0–100).
    pub fn whiteness(&self) -> f64 {
        self.whiteness
    }
    /// HWB blackness (0–100).
    pub fn blackness(&self) -> f64 {
        self.blackness
    }
    /// OKLCH lightness (0.0–1.0).
    pub fn oklch_lightness(&self) -> f64 {
        self.oklch_lightness
    }
    /// OKLCH chroma (0.0–0.4).
    pub fn oklch_chroma(&self) -> f64 {
        self.oklch_chroma
    }
    /// OKLCH hue (0–360).
    pub fn oklch_hue(&self) -> f64 {
        self.oklch_hue
    }
    /// Alpha (0.0–1.0).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// 8-bit RGB channels.
    pub fn rgb8(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Stored OKLCH coordinates. Not clamped to any gamut.
    pub fn to_oklch(&self) -> Oklch {
        Oklch::new(self.oklch_lightness, self.oklch_chroma, self.oklch_hue)
    }

    /// Read any field by name.
    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::Red => f64::from(self.red),
            Component::Green => f64::from(self.green),
            Component::Blue => f64::from(self.blue),
            Component::Hue => self.hue,
            Component::Saturation => self.saturation,
            Component::Luminosity => self.luminosity,
            Component::HsvSaturation => self.hsv_saturation,
            Component::Value => self.value,
            Component::Whiteness => self.whiteness,
            Component::Blackness => self.blackness,
            Component::OklchLightness => self.oklch_lightness,
            Component::OklchChroma => self.oklch_chroma,
            Component::OklchHue => self.oklch_hue,
            Component::Alpha => self.alpha,
        }
    }

    /// The three non-alpha fields of `model`. Hex reports rgb channels.
    pub fn components_of(&self, model: ColorModel) -> [f64; 3] {
        let [a, b, c, _] = model.components();
        [self.get(a), self.get(b), self.get(c)]
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self::from_components(ColorModel::Rgb, [128.0, 128.0, 128.0], 1.0)
    }
}

/// Clamp a field into its range and round it to its stored precision.
///
/// Hues wrap instead of clamping. Non-finite values are read as zero.
pub(crate) fn store_field(component: Component, value: f64) -> f64 {
    let value = if value.is_finite() { value } else { 0.0 };
    if component.is_hue() {
        return round_hue(value, component.decimals());
    }
    let (min, max) = component.range();
    round_to(value.clamp(min, max), component.decimals())
}

impl SolidColor {
    /// Parse `input`, detecting its model unless `model` is given.
    ///
    /// With the `named-colors` feature, strings matching no grammar are looked
    /// up as CSS color names and produce an rgb-model color.
    pub fn create(input: &str, model: Option<ColorModel>) -> Result<Self> {
        let model = match model {
            Some(model) => model,
            None => match parse::detect_model(input) {
                Ok(model) => model,
                Err(err) => return Self::from_name(input).ok_or(err),
            },
        };
        let Components { values, alpha } = parse::parse_components(input, model)?;
        Ok(Self::from_components(model, values, alpha))
    }

    /// Build from raw components of `model`, in that model's field scales.
    pub fn from_components(model: ColorModel, values: [f64; 3], alpha: f64) -> Self {
        Self::build(model, values, alpha, HueHints::default())
    }

    #[cfg(feature = "named-colors")]
    fn from_name(input: &str) -> Option<Self> {
        let named = bigcolor::BigColor::new(input.trim());
        if !named.is_valid() {
            return None;
        }
        let hex = named.to_hex8_string(false);
        let hex = if hex.starts_with('#') {
            hex
        } else {
            format!("#{hex}")
        };
        let Components { values, alpha } = parse::parse_hex_str(&hex)?;
        debug!(input, %hex, "resolved named color");
        Some(Self::from_components(ColorModel::Rgb, values, alpha))
    }

    #[cfg(not(feature = "named-colors"))]
    fn from_name(_input: &str) -> Option<Self> {
        None
    }

    /// `hints` come from the color being edited and take priority over the
    /// hue the authoritative model states itself.
    fn build(model: ColorModel, values: [f64; 3], alpha: f64, hints: HueHints) -> Self {
        let fields = model.components();
        let stored = [0, 1, 2].map(|i| store_field(fields[i], values[i]));
        let own = match model {
            ColorModel::Hsl | ColorModel::Hsv | ColorModel::Hwb => HueHints {
                hue: None,
                oklch_hue: Some(stored[0]),
            },
            ColorModel::Oklch => HueHints {
                hue: Some(stored[2]),
                oklch_hue: None,
            },
            ColorModel::Hex | ColorModel::Rgb => HueHints::default(),
        };
        let [red, green, blue] = convert::to_rgb(model, stored);
        let derived = convert::from_rgb([red, green, blue], hints.or(own));

        let mut color = Self {
            model,
            red,
            green,
            blue,
            hue: derived.hue,
            saturation: derived.saturation,
            luminosity: derived.luminosity,
            hsv_saturation: derived.hsv_saturation,
            value: derived.value,
            whiteness: derived.whiteness,
            blackness: derived.blackness,
            oklch_lightness: derived.oklch.l,
            oklch_chroma: derived.oklch.c,
            oklch_hue: derived.oklch.h,
            alpha: store_field(Component::Alpha, alpha),
        };

        let [a, b, c] = stored;
        match model {
            ColorModel::Hex | ColorModel::Rgb => {}
            ColorModel::Hsl => {
                color.hue = a;
                color.saturation = b;
                color.luminosity = c;
            }
            ColorModel::Hsv => {
                color.hue = a;
                color.hsv_saturation = b;
                color.value = c;
            }
            ColorModel::Hwb => {
                color.hue = a;
                color.whiteness = b;
                color.blackness = c;
            }
            ColorModel::Oklch => {
                color.oklch_lightness = a;
                color.oklch_chroma = b;
                color.oklch_hue = c;
            }
        }
        color
    }

    /// Apply a partial edit and return the resulting color.
    ///
    /// `partial` is overlaid on this color's current fields for `model`
    /// (default: the authoritative model), which becomes the new authoritative
    /// model. Fields of the model the edit leaves alone keep their stored
    /// values exactly. Where the result is achromatic, derived hues are carried
    /// over from this color. Fields that are not part of `model` are ignored.
    pub fn set<I>(&self, partial: I, model: Option<ColorModel>) -> Self
    where
        I: IntoIterator<Item = (Component, f64)>,
    {
        let target = model.unwrap_or(self.model);
        let fields = target.components();
        let mut values = self.components_of(target);
        let mut alpha = self.alpha;

        for (component, value) in partial {
            if !component.belongs_to(target) {
                debug!(%component, model = %target, "ignoring component outside target model");
                continue;
            }
            match fields[..3].iter().position(|f| *f == component) {
                Some(i) => values[i] = value,
                None => alpha = value,
            }
        }

        let hints = HueHints {
            hue: Some(self.hue),
            oklch_hue: Some(self.oklch_hue),
        };
        Self::build(target, values, alpha, hints)
    }

    /// [`set`](Self::set) with string keys, as a UI layer would send them.
    pub fn set_named(&self, partial: &[(&str, f64)], model: Option<&str>) -> Result<Self> {
        let model = model.map(str::parse::<ColorModel>).transpose()?;
        let partial = partial
            .iter()
            .map(|(name, value)| Ok((name.parse::<Component>()?, *value)))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.set(partial, model))
    }

    /// Canonical string for `model`.
    pub fn format(&self, model: ColorModel) -> String {
        match model {
            ColorModel::Hex => convert::format_hex(self.rgb8(), self.alpha),
            ColorModel::Oklch => convert::format_oklch(self.to_oklch(), self.alpha),
            _ => convert::format_model(model, self.components_of(model), self.alpha),
        }
    }

    /// `#rrggbb` or `#rrggbbaa`.
    pub fn hex(&self) -> String {
        self.format(ColorModel::Hex)
    }
    pub fn rgb(&self) -> String {
        self.format(ColorModel::Rgb)
    }
    pub fn hsl(&self) -> String {
        self.format(ColorModel::Hsl)
    }
    pub fn hsv(&self) -> String {
        self.format(ColorModel::Hsv)
    }
    pub fn hwb(&self) -> String {
        self.format(ColorModel::Hwb)
    }
    pub fn oklch(&self) -> String {
        self.format(ColorModel::Oklch)
    }

    /// Compact form for a URL hash.
    ///
    /// OKLCH colors are written as `#L,C,H,A` so wide-gamut values survive;
    /// everything else uses the hex form.
    pub fn url_fragment(&self) -> String {
        match self.model {
            ColorModel::Oklch => format!(
                "#{:.3},{:.3},{:.3},{:.3}",
                self.oklch_lightness, self.oklch_chroma, self.oklch_hue, self.alpha
            ),
            _ => self.hex(),
        }
    }

    /// Read a fragment written by [`url_fragment`](Self::url_fragment).
    ///
    /// The leading `#` is optional. Alpha may be omitted from the OKLCH form.
    pub fn from_url_fragment(fragment: &str) -> Result<Self> {
        let body = fragment.trim();
        let body = body.strip_prefix('#').unwrap_or(body);
        if !body.contains(',') {
            return Self::create(&format!("#{body}"), Some(ColorModel::Hex))
                .map_err(|_| ColorError::invalid(fragment));
        }

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if !(3..=4).contains(&parts.len()) {
            return Err(ColorError::invalid(fragment));
        }
        let numbers = parts
            .iter()
            .map(|part| {
                part.parse::<f64>()
                    .map_err(|_| ColorError::parse(fragment, part))
            })
            .collect::<Result<Vec<_>>>()?;
        let alpha = numbers.get(3).copied().unwrap_or(1.0);
        Ok(Self::from_components(
            ColorModel::Oklch,
            [numbers[0], numbers[1], numbers[2]],
            alpha,
        ))
    }

    /// Smallest gamut the color needs, or `None` when even Display-P3 is too
    /// small. Colors authored in an sRGB model are always sRGB.
    pub fn display_gamut(&self) -> Option<Gamut> {
        if self.model.is_srgb_bound() {
            return Some(Gamut::Srgb);
        }
        smallest_gamut(self.to_oklch())
    }

    /// Whether sRGB cannot show this color.
    pub fn is_wide_gamut(&self) -> bool {
        self.display_gamut() != Some(Gamut::Srgb)
    }
}

impl fmt::Display for SolidColor {
    /// Writes the authoritative model's string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(self.model))
    }
}

impl FromStr for SolidColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::create(s, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(input: &str) -> SolidColor {
        SolidColor::create(input, None).unwrap()
    }

    #[test]
    fn red_in_every_model() {
        let red = color("rgb(255 0 0)");
        assert_eq!(red.model(), ColorModel::Rgb);
        assert_eq!(red.hsl(), "hsl(0 100% 50%)");
        assert_eq!(red.hwb(), "hwb(0 0% 0%)");
        assert_eq!(red.hsv(), "hsv(0 100% 100%)");
        assert_eq!(red.hex(), "#ff0000");
        assert_eq!(red.to_string(), "rgb(255 0 0)");
    }

    #[test]
    fn hex_edit_through_rgb() {
        let green = color("#ff0000").set(
            [(Component::Red, 0.0), (Component::Green, 255.0)],
            Some(ColorModel::Rgb),
        );
        assert_eq!(green.model(), ColorModel::Rgb);
        assert_eq!(green.rgb(), "rgb(0 255 0)");
        assert_eq!(green.hex(), "#00ff00");
    }

    #[test]
    fn lightness_edit_keeps_chroma_and_hue() {
        let c = color("oklch(0.444 0.173 282)");
        let dark = c.set([(Component::OklchLightness, 0.1)], None);
        assert_eq!(dark.oklch_lightness(), 0.1);
        assert_eq!(dark.oklch_chroma(), 0.173);
        assert_eq!(dark.oklch_hue(), 282.0);
        assert_eq!(dark.oklch(), "oklch(0.1 0.173 282)");
    }

    #[test]
    fn desaturating_keeps_hue() {
        let gray = color("hsl(90 80% 50%)").set([(Component::Saturation, 0.0)], None);
        assert_eq!(gray.hue(), 90.0);
        assert_eq!(gray.hsl(), "hsl(90 0% 50%)");
        assert_eq!(gray.rgb8(), [128, 128, 128]);
    }

    #[test]
    fn cross_model_edit_keeps_hue() {
        let c = color("hwb(200 20% 30%)");
        let gray = c.set([(Component::Saturation, 0.0)], Some(ColorModel::Hsl));
        assert_eq!(gray.model(), ColorModel::Hsl);
        assert_eq!(gray.hue(), 200.0);
        assert_eq!(gray.hwb(), format!("hwb(200 {}% {}%)", gray.whiteness(), gray.blackness()));
    }

    #[test]
    fn darkening_to_black_keeps_both_hues() {
        let c = color("hsl(200 80% 50%)");
        let black = c.set([(Component::Value, 0.0)], Some(ColorModel::Hsv));
        assert_eq!(black.rgb8(), [0, 0, 0]);
        assert_eq!(black.hue(), 200.0);
        assert_eq!(black.oklch_hue(), c.oklch_hue());
    }

    #[test]
    fn explicit_hue_wins() {
        let gray = color("hsl(90 0% 50%)");
        let moved = gray.set([(Component::Hue, 45.0)], None);
        assert_eq!(moved.hue(), 45.0);
        let spun = color("oklch(0.5 0 120)").set([(Component::OklchHue, 10.0)], None);
        assert_eq!(spun.oklch_hue(), 10.0);
    }

    #[test]
    fn foreign_components_are_ignored() {
        let c = color("hsl(120 50% 50%)");
        assert_eq!(c.set([(Component::Red, 0.0)], None), c);
        let faded = c.set([(Component::Red, 0.0), (Component::Alpha, 0.5)], None);
        assert_eq!(faded.hsl(), "hsl(120 50% 50% / 0.5)");
    }

    #[test]
    fn achromatic_source_hue_reaches_the_other_family() {
        let c = color("oklch(0.5 0 282)");
        assert_eq!(c.hue(), 282.0);
        assert_eq!(c.oklch_hue(), 282.0);

        let c = color("hsl(90 0% 50%)");
        assert_eq!(c.hue(), 90.0);
        assert_eq!(c.oklch_hue(), 90.0);

        let black = color("hwb(200 0% 100%)");
        assert_eq!(black.rgb8(), [0, 0, 0]);
        assert_eq!(black.oklch_hue(), 200.0);
    }

    #[test]
    fn chromatic_source_keeps_its_computed_hues() {
        let c = color("hsl(200 80% 50%)");
        assert_eq!(c.hue(), 200.0);
        assert!(c.oklch_hue() > 230.0 && c.oklch_hue() < 250.0);
        assert_eq!(color("rgb(128 128 128)").oklch_hue(), 0.0);
    }

    #[test]
    fn edited_color_hue_beats_the_new_model_hue() {
        let gray = color("oklch(0.5 0 282)");
        let spun = gray.set([(Component::Hue, 40.0)], Some(ColorModel::Hsl));
        assert_eq!(spun.hue(), 40.0);
        assert_eq!(spun.oklch_hue(), 282.0);
    }

    #[test]
    fn alpha_renders_everywhere() {
        let c = color("rgb(255 0 0 / 0.5)");
        assert_eq!(c.alpha(), 0.5);
        assert_eq!(c.hex(), "#ff000080");
        assert_eq!(c.rgb(), "rgb(255 0 0 / 0.5)");
        assert_eq!(c.hsl(), "hsl(0 100% 50% / 0.5)");
        let opaque = c.set([(Component::Alpha, 1.0)], None);
        assert_eq!(opaque.rgb(), "rgb(255 0 0)");
    }

    #[test]
    fn legacy_input_renders_canonically() {
        assert_eq!(
            color("hsla(120, 50%, 50%, 0.3)").to_string(),
            "hsl(120 50% 50% / 0.3)"
        );
        assert_eq!(color("#FF0000").to_string(), "#ff0000");
        assert_eq!(color("#FF0000").model(), ColorModel::Hex);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let c = color("rgb(300 -5 0)");
        assert_eq!(c.rgb8(), [255, 0, 0]);
        let c = color("hsl(400 120% 50%)");
        assert_eq!(c.hue(), 40.0);
        assert_eq!(c.saturation(), 100.0);
        let c = color("oklch(1.5 0.9 -30)");
        assert_eq!(c.to_oklch(), Oklch::new(1.0, 0.4, 330.0));
    }

    #[test]
    fn oklch_source_is_not_gamut_clamped() {
        let c = color("oklch(0.662 0.278 145)");
        assert_eq!(c.oklch(), "oklch(0.662 0.278 145)");
        assert_eq!(c.display_gamut(), Some(Gamut::DisplayP3));
        assert!(c.is_wide_gamut());
        assert_eq!(color("oklch(0.5 0.4 180)").display_gamut(), None);
        assert_eq!(color("rgb(0 255 0)").display_gamut(), Some(Gamut::Srgb));
    }

    #[test]
    fn errors() {
        assert_eq!(
            SolidColor::create("not a color", None),
            Err(ColorError::invalid("not a color"))
        );
        assert_eq!(
            SolidColor::create("rgb(1..2 0 0)", None),
            Err(ColorError::parse("rgb(1..2 0 0)", "1..2"))
        );
        let c = color("#ff0000");
        assert_eq!(
            c.set_named(&[("red", 1.0)], Some("lab")),
            Err(ColorError::UnsupportedModel {
                model: "lab".to_string()
            })
        );
        assert_eq!(
            c.set_named(&[("tint", 1.0)], None),
            Err(ColorError::UnknownComponent {
                name: "tint".to_string()
            })
        );
    }

    #[test]
    fn named_set_matches_typed_set() {
        let c = color("#ff0000");
        let named = c
            .set_named(&[("red", 0.0), ("green", 255.0)], Some("rgb"))
            .unwrap();
        let typed = c.set(
            [(Component::Red, 0.0), (Component::Green, 255.0)],
            Some(ColorModel::Rgb),
        );
        assert_eq!(named, typed);
    }

    #[test]
    fn url_fragments() {
        let c = color("oklch(0.444 0.173 282)");
        assert_eq!(c.url_fragment(), "#0.444,0.173,282.000,1.000");
        assert_eq!(SolidColor::from_url_fragment(&c.url_fragment()), Ok(c));

        let red = color("rgb(255 0 0)");
        assert_eq!(red.url_fragment(), "#ff0000");
        let back = SolidColor::from_url_fragment("ff0000").unwrap();
        assert_eq!(back.rgb8(), [255, 0, 0]);

        assert!(SolidColor::from_url_fragment("#1,2").is_err());
        assert_eq!(
            SolidColor::from_url_fragment("#0.5,x,3"),
            Err(ColorError::parse("#0.5,x,3", "x"))
        );
    }

    #[cfg(not(feature = "named-colors"))]
    #[test]
    fn names_need_the_feature() {
        assert!(SolidColor::create("red", None).is_err());
    }

    #[cfg(feature = "named-colors")]
    #[test]
    fn resolves_named_colors() {
        let c = color("rebeccapurple");
        assert_eq!(c.model(), ColorModel::Rgb);
        assert_eq!(c.hex(), "#663399");
    }
}
