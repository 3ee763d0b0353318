//! Random starting colors.

use rand::Rng;

use crate::color::SolidColor;
use crate::model::ColorModel;

/// A fully saturated, mid-lightness hsl color with a random whole-degree hue.
pub fn random_hsl() -> String {
    let mut rng = rand::rng();
    let hue: u16 = rng.random_range(0..=360);
    format!("hsl({hue} 100% 50%)")
}

/// [`random_hsl`] as a color.
pub fn random_color() -> SolidColor {
    let mut rng = rand::rng();
    let hue = f64::from(rng.random_range(0..=360u16));
    SolidColor::from_components(ColorModel::Hsl, [hue, 100.0, 50.0], 1.0)
}
