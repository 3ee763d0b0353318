//! Color math for the sRGB cylindrical models, plus the rounding used at the
//! storage boundary.
//!
//! Conversion functions use normalized f64 in 0.0–1.0, hue included
//! (0.0–1.0 maps to 0°–360°). Callers scale to degrees and percents.

/// HSV → gamma-encoded RGB, used when an hsl, hsv or hwb color is quantized
/// to its 8-bit pivot. Hue arrives as degrees / 360 and may sit outside 0.0–1.0.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Gamma-encoded RGB → HSV, the first step of deriving every sRGB-family
/// field. Hue is 0.0 when the color has no chroma; callers decide whether a
/// carried hue replaces it.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, v)
}

/// HSL → HSV, with saturation and lightness taken from percents / 100.
pub(crate) fn hsl_to_hsv(h: f64, s_hsl: f64, l: f64) -> (f64, f64, f64) {
    let v = l + s_hsl * l.min(1.0 - l);
    let s_hsv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    (h, s_hsv, v)
}

/// HSV → HSL. Black and white come out with zero saturation.
pub(crate) fn hsv_to_hsl(h: f64, s_hsv: f64, v: f64) -> (f64, f64, f64) {
    let l = v * (1.0 - s_hsv / 2.0);
    let s_hsl = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    (h, s_hsl, l)
}

/// HWB → HSV. All values 0.0–1.0.
///
/// Whiteness and blackness summing past 1.0 are scaled down to a gray, as CSS
/// does.
pub(crate) fn hwb_to_hsv(h: f64, w: f64, b: f64) -> (f64, f64, f64) {
    let sum = w + b;
    if sum >= 1.0 {
        let gray = if sum == 0.0 { 0.0 } else { w / sum };
        return (h, 0.0, gray);
    }
    let v = 1.0 - b;
    let s = if v == 0.0 { 0.0 } else { 1.0 - w / v };
    (h, s, v)
}

/// HSV → HWB. All values 0.0–1.0.
pub(crate) fn hsv_to_hwb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    (h, (1.0 - s) * v, 1.0 - v)
}

/// Round to `decimals` places. Negative zero collapses to zero.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let p = 10f64.powi(decimals as i32);
    let rounded = (value * p).round() / p;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round a hue in degrees and wrap it into `[0, 360)`.
pub(crate) fn round_hue(degrees: f64, decimals: u32) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = round_to(degrees.rem_euclid(360.0), decimals);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Shortest decimal text for a value already rounded by [`round_to`].
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// 0.0–1.0 channel → 8-bit.
pub(crate) fn to_u8(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_approx_eq;

    #[test]
    fn hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        let (r, g, b) = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert_approx_eq!(r, 0.0, 1e-12);
        assert_approx_eq!(g, 1.0, 1e-12);
        assert_approx_eq!(b, 0.0, 1e-12);
        let (r, g, b) = hsv_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert_approx_eq!(r, 0.0, 1e-12);
        assert_approx_eq!(g, 0.0, 1e-12);
        assert_approx_eq!(b, 1.0, 1e-12);
    }

    #[test]
    fn hsv_gray_rounds_to_128() {
        let (r, g, b) = hsv_to_rgb(0.0, 0.0, 0.5);
        assert_eq!((to_u8(r), to_u8(g), to_u8(b)), (128, 128, 128));
    }

    #[test]
    fn rgb_to_hsv_round_trip() {
        let (r, g, b) = hsv_to_rgb(0.5, 0.75, 0.6);
        let (h, s, v) = rgb_to_hsv(r, g, b);
        assert_approx_eq!(h, 0.5, 1e-12);
        assert_approx_eq!(s, 0.75, 1e-12);
        assert_approx_eq!(v, 0.6, 1e-12);
    }

    #[test]
    fn hsl_hsv_round_trip() {
        let (h, s, v) = hsl_to_hsv(0.25, 0.8, 0.5);
        let (_, s_hsl, l) = hsv_to_hsl(h, s, v);
        assert_approx_eq!(s_hsl, 0.8, 1e-12);
        assert_approx_eq!(l, 0.5, 1e-12);
    }

    #[test]
    fn hwb_past_unity_becomes_gray() {
        let (_, s, v) = hwb_to_hsv(0.0, 0.6, 0.6);
        assert_eq!(s, 0.0);
        assert_approx_eq!(v, 0.5, 1e-12);
    }

    #[test]
    fn hwb_hsv_round_trip() {
        let (h, w, b) = hsv_to_hwb(0.1, 0.5, 0.8);
        let (h2, s, v) = hwb_to_hsv(h, w, b);
        assert_eq!(h2, 0.1);
        assert_approx_eq!(s, 0.5, 1e-12);
        assert_approx_eq!(v, 0.8, 1e-12);
    }

    #[test]
    fn rounding_is_idempotent() {
        let once = round_to(0.173_000_4, 3);
        assert_eq!(once, 0.173);
        assert_eq!(round_to(once, 3), once);
        assert_eq!(round_to(-0.000_01, 3), 0.0);
        assert!(round_to(-0.000_01, 3).is_sign_positive());
    }

    #[test]
    fn hue_wraps_after_rounding() {
        assert_eq!(round_hue(359.96, 1), 0.0);
        assert_eq!(round_hue(-30.0, 1), 330.0);
        assert_eq!(round_hue(720.0, 1), 0.0);
        assert_eq!(round_hue(f64::NAN, 1), 0.0);
    }

    #[test]
    fn numbers_format_without_trailing_zeros() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(50.2), "50.2");
        assert_eq!(format_number(0.173), "0.173");
        assert_eq!(format_number(-0.0), "0");
    }
}
