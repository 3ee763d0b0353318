//! Thresholds, ranges, and defaults shared by the converter and gradients.

/// Upper bound of the OKLCH chroma slider and of stored chroma.
pub const OKLCH_MAX_CHROMA: f64 = 0.4;

/// HSV saturation (percent) below which the sRGB hue is unstable.
pub const ACHROMATIC_SATURATION: f64 = 0.1;

/// HSL luminosity (percent) margin at black and white where hue is unstable.
pub const ACHROMATIC_LUMINOSITY: f64 = 1.0;

/// OKLCH chroma below which the OKLCH hue is unstable.
pub const ACHROMATIC_CHROMA: f64 = 0.02;

/// OKLCH lightness margin at black and white where chroma and hue are unstable.
pub const ACHROMATIC_LIGHTNESS: f64 = 0.01;

/// Tolerance for linear RGB channels in gamut checks.
pub const GAMUT_EPSILON: f64 = 1e-6;

/// Chroma resolution at which the gamut boundary search stops.
pub const CHROMA_SEARCH_PRECISION: f64 = 1e-6;

/// Neutral color painted over out-of-gamut runs of a gradient.
pub const GAP_PLACEHOLDER: &str = "oklch(0.2 0 0)";

/// Saturation clamp for the rainbow hue track.
pub const RAINBOW_SATURATION: (f64, f64) = (35.0, 60.0);

/// Luminosity clamp for the rainbow hue track.
pub const RAINBOW_LUMINOSITY: (f64, f64) = (55.0, 70.0);

/// Decimal places kept for percent and degree fields.
pub const PERCENT_DECIMALS: u32 = 1;

/// Decimal places kept for OKLCH fields.
pub const OKLCH_DECIMALS: u32 = 3;

/// Decimal places kept for alpha.
pub const ALPHA_DECIMALS: u32 = 2;

/// Decimal places kept for gradient stop positions.
pub const POSITION_DECIMALS: u32 = 2;
