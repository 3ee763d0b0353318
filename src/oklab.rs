//! OKLab and its polar form OKLCH, with the linear RGB matrices needed to reach
//! sRGB and Display-P3.
//!
//! Matrices are Björn Ottosson's published OKLab coefficients; the
//! sRGB → Display-P3 matrix is the linear D65 primaries conversion.

/// Color in OKLab (Cartesian) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Perceptual lightness. [0.0, 1.0]
    pub l: f64,
    /// Green–red axis.
    pub a: f64,
    /// Blue–yellow axis.
    pub b: f64,
}

/// Color in OKLCH (polar OKLab) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    /// Perceptual lightness. [0.0, 1.0]
    pub l: f64,
    /// Distance from the neutral axis. [0.0, ~0.4]
    pub c: f64,
    /// Hue angle in degrees. [0.0, 360.0)
    pub h: f64,
}

impl Oklab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Linear sRGB (0.0–1.0 per channel) → OKLab.
    pub fn from_linear_srgb([r, g, b]: [f64; 3]) -> Self {
        let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
        let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
        let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Self {
            l: 0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_,
            a: 1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_,
            b: 0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_,
        }
    }

    /// OKLab → linear sRGB. Channels are not clamped.
    pub fn to_linear_srgb(self) -> [f64; 3] {
        let l_ = self.l + 0.396_337_777_4 * self.a + 0.215_803_757_3 * self.b;
        let m_ = self.l - 0.105_561_345_8 * self.a - 0.063_854_172_8 * self.b;
        let s_ = self.l - 0.089_484_177_5 * self.a - 1.291_485_548_0 * self.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        [
            4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
            -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
            -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
        ]
    }

    /// OKLab → linear Display-P3. Channels are not clamped.
    pub fn to_linear_display_p3(self) -> [f64; 3] {
        linear_srgb_to_linear_display_p3(self.to_linear_srgb())
    }

    /// Linear interpolation; `t` of 0.0 returns `self`.
    pub fn mix(&self, other: &Self, t: f64) -> Self {
        let n = 1.0 - t;
        Self {
            l: self.l * n + other.l * t,
            a: self.a * n + other.a * t,
            b: self.b * n + other.b * t,
        }
    }

    pub fn to_oklch(self) -> Oklch {
        let c = self.a.hypot(self.b);
        let h = self.b.atan2(self.a).to_degrees().rem_euclid(360.0);
        Oklch { l: self.l, c, h }
    }
}

impl Oklch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    pub fn to_oklab(self) -> Oklab {
        let h = self.h.to_radians();
        Oklab {
            l: self.l,
            a: self.c * h.cos(),
            b: self.c * h.sin(),
        }
    }

    pub fn from_linear_srgb(rgb: [f64; 3]) -> Self {
        Oklab::from_linear_srgb(rgb).to_oklch()
    }

    pub fn to_linear_srgb(self) -> [f64; 3] {
        self.to_oklab().to_linear_srgb()
    }

    /// Replace non-finite coordinates with zero.
    pub fn normalized(self) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            l: finite(self.l),
            c: finite(self.c),
            h: finite(self.h),
        }
    }

    pub const fn with_l(self, l: f64) -> Self {
        Self { l, ..self }
    }

    pub const fn with_c(self, c: f64) -> Self {
        Self { c, ..self }
    }

    pub const fn with_h(self, h: f64) -> Self {
        Self { h, ..self }
    }
}

impl From<Oklch> for Oklab {
    fn from(value: Oklch) -> Self {
        value.to_oklab()
    }
}

impl From<Oklab> for Oklch {
    fn from(value: Oklab) -> Self {
        value.to_oklch()
    }
}

const LINEAR_SRGB_TO_LINEAR_DISPLAY_P3: [[f64; 3]; 3] = [
    [0.822_462_120_9, 0.177_537_879_1, 0.0],
    [0.033_194_198_9, 0.966_805_801_1, 0.0],
    [0.017_082_630_7, 0.072_397_440_7, 0.910_519_928_6],
];

fn linear_srgb_to_linear_display_p3(rgb: [f64; 3]) -> [f64; 3] {
    let m = &LINEAR_SRGB_TO_LINEAR_DISPLAY_P3;
    [
        m[0][0] * rgb[0] + m[0][1] * rgb[1] + m[0][2] * rgb[2],
        m[1][0] * rgb[0] + m[1][1] * rgb[1] + m[1][2] * rgb[2],
        m[2][0] * rgb[0] + m[2][1] * rgb[1] + m[2][2] * rgb[2],
    ]
}

/// Decode a gamma-encoded sRGB channel (0.0–1.0) into linear light (IEC 61966-2-1).
pub(crate) fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear-light channel into gamma-encoded sRGB. Display-P3 shares the curve.
pub(crate) fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}
