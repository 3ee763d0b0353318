//! Model tags and the named numeric fields each model exposes.

use core::fmt;
use core::str::FromStr;

use crate::constants::{
    ALPHA_DECIMALS, OKLCH_DECIMALS, OKLCH_MAX_CHROMA, PERCENT_DECIMALS,
};
use crate::error::ColorError;

/// One of the six text representations a color can be edited in.
///
/// The tag on a [`SolidColor`](crate::SolidColor) marks which representation is
/// authoritative, i.e. the one the user is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorModel {
    Hex,
    Rgb,
    Hsl,
    Hsv,
    Hwb,
    Oklch,
}

impl ColorModel {
    /// All models, in the order strings are tested against their grammars.
    pub const ALL: [ColorModel; 6] = [
        ColorModel::Hex,
        ColorModel::Rgb,
        ColorModel::Hsl,
        ColorModel::Hsv,
        ColorModel::Hwb,
        ColorModel::Oklch,
    ];

    /// Lower-case tag, also the CSS function name for functional models.
    pub fn name(self) -> &'static str {
        match self {
            ColorModel::Hex => "hex",
            ColorModel::Rgb => "rgb",
            ColorModel::Hsl => "hsl",
            ColorModel::Hsv => "hsv",
            ColorModel::Hwb => "hwb",
            ColorModel::Oklch => "oklch",
        }
    }

    /// The editable fields of this model, alpha last.
    ///
    /// Hex edits go through the same channels as rgb.
    pub fn components(self) -> [Component; 4] {
        use Component::*;
        match self {
            ColorModel::Hex | ColorModel::Rgb => [Red, Green, Blue, Alpha],
            ColorModel::Hsl => [Hue, Saturation, Luminosity, Alpha],
            ColorModel::Hsv => [Hue, HsvSaturation, Value, Alpha],
            ColorModel::Hwb => [Hue, Whiteness, Blackness, Alpha],
            ColorModel::Oklch => [OklchLightness, OklchChroma, OklchHue, Alpha],
        }
    }

    /// True for models whose every color fits in sRGB.
    pub fn is_srgb_bound(self) -> bool {
        !matches!(self, ColorModel::Oklch)
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorModel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ColorModel::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| ColorError::UnsupportedModel {
                model: s.to_string(),
            })
    }
}

/// A single numeric field of a [`SolidColor`](crate::SolidColor).
///
/// `Hue` is shared by hsl, hsv and hwb; OKLCH keeps its own `OklchHue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum Component {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Luminosity,
    HsvSaturation,
    Value,
    Whiteness,
    Blackness,
    OklchLightness,
    OklchChroma,
    OklchHue,
    Alpha,
}

impl Component {
    pub const ALL: [Component; 14] = [
        Component::Red,
        Component::Green,
        Component::Blue,
        Component::Hue,
        Component::Saturation,
        Component::Luminosity,
        Component::HsvSaturation,
        Component::Value,
        Component::Whiteness,
        Component::Blackness,
        Component::OklchLightness,
        Component::OklchChroma,
        Component::OklchHue,
        Component::Alpha,
    ];

    /// Field name as the UI layer spells it (`oklchLightness`, `hsvSaturation`).
    pub fn name(self) -> &'static str {
        match self {
            Component::Red => "red",
            Component::Green => "green",
            Component::Blue => "blue",
            Component::Hue => "hue",
            Component::Saturation => "saturation",
            Component::Luminosity => "luminosity",
            Component::HsvSaturation => "hsvSaturation",
            Component::Value => "value",
            Component::Whiteness => "whiteness",
            Component::Blackness => "blackness",
            Component::OklchLightness => "oklchLightness",
            Component::OklchChroma => "oklchChroma",
            Component::OklchHue => "oklchHue",
            Component::Alpha => "alpha",
        }
    }

    /// Slider maximum. Every field starts at zero.
    pub fn max(self) -> f64 {
        match self {
            Component::Red | Component::Green | Component::Blue => 255.0,
            Component::Hue | Component::OklchHue => 360.0,
            Component::OklchLightness | Component::Alpha => 1.0,
            Component::OklchChroma => OKLCH_MAX_CHROMA,
            _ => 100.0,
        }
    }

    /// `(min, max)` slider range.
    pub fn range(self) -> (f64, f64) {
        (0.0, self.max())
    }

    /// Slider increment.
    pub fn step(self) -> f64 {
        match self {
            Component::Red | Component::Green | Component::Blue | Component::Hue => 1.0,
            Component::OklchLightness | Component::OklchChroma | Component::OklchHue => 0.001,
            Component::Alpha => 0.01,
            _ => 0.1,
        }
    }

    /// Decimal places the stored field is rounded to.
    pub fn decimals(self) -> u32 {
        match self {
            Component::Red | Component::Green | Component::Blue => 0,
            Component::OklchLightness | Component::OklchChroma | Component::OklchHue => {
                OKLCH_DECIMALS
            }
            Component::Alpha => ALPHA_DECIMALS,
            _ => PERCENT_DECIMALS,
        }
    }

    /// Step count used for a slider track gradient when none is configured.
    pub fn default_steps(self) -> usize {
        match self {
            Component::Hue => 360,
            Component::Red | Component::Green | Component::Blue => 255,
            Component::OklchHue => 72,
            Component::OklchLightness | Component::OklchChroma => 20,
            Component::Alpha => 1,
            _ => 2,
        }
    }

    pub fn is_hue(self) -> bool {
        matches!(self, Component::Hue | Component::OklchHue)
    }

    /// Whether the field is one of `model`'s editable fields.
    pub fn belongs_to(self, model: ColorModel) -> bool {
        model.components().contains(&self)
    }

    /// The model this field is native to, or `None` for alpha.
    pub fn native_model(self) -> Option<ColorModel> {
        match self {
            Component::Red | Component::Green | Component::Blue => Some(ColorModel::Rgb),
            Component::Hue | Component::Saturation | Component::Luminosity => {
                Some(ColorModel::Hsl)
            }
            Component::HsvSaturation | Component::Value => Some(ColorModel::Hsv),
            Component::Whiteness | Component::Blackness => Some(ColorModel::Hwb),
            Component::OklchLightness | Component::OklchChroma | Component::OklchHue => {
                Some(ColorModel::Oklch)
            }
            Component::Alpha => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Component {
    type Err = ColorError;

    /// Accepts the camelCase field names plus their snake_case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().chars().filter(|c| *c != '_').collect();
        Component::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ColorError::UnknownComponent {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_names_round_trip() {
        for model in ColorModel::ALL {
            assert_eq!(model.name().parse::<ColorModel>(), Ok(model));
        }
        assert_eq!("OKLCH".parse::<ColorModel>(), Ok(ColorModel::Oklch));
    }

    #[test]
    fn unknown_model_is_rejected() {
        assert_eq!(
            "lab".parse::<ColorModel>(),
            Err(ColorError::UnsupportedModel {
                model: "lab".to_string()
            })
        );
    }

    #[test]
    fn component_names_accept_both_spellings() {
        assert_eq!("oklchLightness".parse(), Ok(Component::OklchLightness));
        assert_eq!("oklch_lightness".parse(), Ok(Component::OklchLightness));
        assert_eq!("hsv_saturation".parse(), Ok(Component::HsvSaturation));
        assert!("tint".parse::<Component>().is_err());
    }

    #[test]
    fn hue_is_shared_by_cylindrical_srgb_models() {
        assert!(Component::Hue.belongs_to(ColorModel::Hsl));
        assert!(Component::Hue.belongs_to(ColorModel::Hsv));
        assert!(Component::Hue.belongs_to(ColorModel::Hwb));
        assert!(!Component::Hue.belongs_to(ColorModel::Oklch));
        assert!(Component::Red.belongs_to(ColorModel::Hex));
    }

    #[test]
    fn slider_metadata() {
        assert_eq!(Component::OklchChroma.range(), (0.0, OKLCH_MAX_CHROMA));
        assert_eq!(Component::Saturation.step(), 0.1);
        assert_eq!(Component::Red.decimals(), 0);
        assert_eq!(Component::OklchHue.decimals(), 3);
    }
}
