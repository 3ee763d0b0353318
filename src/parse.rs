//! Recognizes which of the six grammars a string belongs to and extracts its
//! raw components.
//!
//! Recognition is purely syntactic: `rgb(300 0 0)` parses, and range checks
//! live in [`validate`].

use tracing::debug;

use crate::constants::OKLCH_MAX_CHROMA;
use crate::error::{ColorError, Result};
use crate::model::ColorModel;

/// Raw numeric components in the scale of their model's fields, plus alpha.
///
/// Hex is reported as 0–255 channels, like rgb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Components {
    pub values: [f64; 3],
    /// Defaults to 1.0 when the input omits it.
    pub alpha: f64,
}

impl Components {
    pub const fn new(values: [f64; 3], alpha: f64) -> Self {
        Self { values, alpha }
    }

    /// Whether every component sits inside its field's slider range.
    pub fn is_in_range(&self, model: ColorModel) -> bool {
        let fields = model.components();
        self.values
            .iter()
            .chain(core::iter::once(&self.alpha))
            .zip(fields)
            .all(|(v, field)| {
                let (min, max) = field.range();
                (min..=max).contains(v)
            })
    }
}

/// How one positional argument may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Bare number, or a percentage scaled so that 100% equals the factor.
    NumberOrPercent(PercentScale),
    /// Percentage only, kept on the 0–100 scale.
    Percent,
    /// Bare number or `deg`-suffixed degrees.
    Angle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PercentScale {
    Channel,
    Unit,
    Chroma,
}

impl PercentScale {
    fn apply(self, percent: f64) -> f64 {
        match self {
            PercentScale::Channel => percent / 100.0 * 255.0,
            PercentScale::Unit => percent / 100.0,
            PercentScale::Chroma => percent / 100.0 * OKLCH_MAX_CHROMA,
        }
    }
}

/// Functional grammar for one model.
struct Grammar {
    model: ColorModel,
    /// Whether the legacy `<name>a(` spelling is accepted.
    legacy_alpha_name: bool,
    slots: [Slot; 3],
}

const GRAMMARS: [Grammar; 5] = [
    Grammar {
        model: ColorModel::Rgb,
        legacy_alpha_name: true,
        slots: [
            Slot::NumberOrPercent(PercentScale::Channel),
            Slot::NumberOrPercent(PercentScale::Channel),
            Slot::NumberOrPercent(PercentScale::Channel),
        ],
    },
    Grammar {
        model: ColorModel::Hsl,
        legacy_alpha_name: true,
        slots: [Slot::Angle, Slot::Percent, Slot::Percent],
    },
    Grammar {
        model: ColorModel::Hsv,
        legacy_alpha_name: true,
        slots: [Slot::Angle, Slot::Percent, Slot::Percent],
    },
    Grammar {
        model: ColorModel::Hwb,
        legacy_alpha_name: true,
        slots: [Slot::Angle, Slot::Percent, Slot::Percent],
    },
    Grammar {
        model: ColorModel::Oklch,
        legacy_alpha_name: false,
        slots: [
            Slot::NumberOrPercent(PercentScale::Unit),
            Slot::NumberOrPercent(PercentScale::Chroma),
            Slot::Angle,
        ],
    },
];

/// Why a grammar did not produce components.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Failure {
    /// The string does not have this grammar's shape.
    Mismatch,
    /// The shape matched but this token is not a number.
    Number(String),
}

type Matched<T> = core::result::Result<T, Failure>;

/// Detect which model `input` is written in.
///
/// Hex is tried first, then the functional grammars in [`ColorModel::ALL`]
/// order. Every grammar requires its own sigil or function name, so at most one
/// can match.
pub fn detect_model(input: &str) -> Result<ColorModel> {
    let model = ColorModel::ALL
        .into_iter()
        .find(|m| !matches!(recognize(input, *m), Err(Failure::Mismatch)))
        .ok_or_else(|| ColorError::invalid(input))?;
    debug!(input, %model, "detected color model");
    Ok(model)
}

/// Extract the components of `input` read as `model`.
pub fn parse_components(input: &str, model: ColorModel) -> Result<Components> {
    recognize(input, model).map_err(|failure| match failure {
        Failure::Mismatch => ColorError::invalid(input),
        Failure::Number(token) => ColorError::parse(input, &token),
    })
}

/// Detect the model and extract components in one pass.
pub fn parse(input: &str) -> Result<(ColorModel, Components)> {
    let model = detect_model(input)?;
    Ok((model, parse_components(input, model)?))
}

/// Whether `input` parses as `model` with every component in range.
pub fn validate(input: &str, model: ColorModel) -> bool {
    parse_components(input, model).is_ok_and(|c| c.is_in_range(model))
}

/// Whether `input` parses as any model with every component in range.
pub fn valid_color(input: &str) -> bool {
    parse(input).is_ok_and(|(model, c)| c.is_in_range(model))
}

fn recognize(input: &str, model: ColorModel) -> Matched<Components> {
    let input = input.trim();
    if model == ColorModel::Hex {
        return parse_hex(input);
    }
    let grammar = GRAMMARS
        .iter()
        .find(|g| g.model == model)
        .ok_or(Failure::Mismatch)?;
    let body = function_body(input, grammar)?;
    parse_arguments(&body, &grammar.slots)
}

/// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` into 0–255 channels.
#[cfg(feature = "named-colors")]
pub(crate) fn parse_hex_str(input: &str) -> Option<Components> {
    parse_hex(input.trim()).ok()
}

fn parse_hex(input: &str) -> Matched<Components> {
    let digits = input.strip_prefix('#').ok_or(Failure::Mismatch)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Failure::Mismatch);
    }
    let bytes: Vec<u8> = match digits.len() {
        3 | 4 => digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .map(|n| n as u8 * 17)
            .collect(),
        6 | 8 => (0..digits.len())
            .step_by(2)
            .filter_map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
            .collect(),
        _ => return Err(Failure::Mismatch),
    };
    let channel = |i: usize| f64::from(bytes[i]);
    let alpha = bytes.get(3).map_or(1.0, |a| f64::from(*a) / 255.0);
    Ok(Components::new([channel(0), channel(1), channel(2)], alpha))
}

/// Strip `name(` / `namea(` and `)`, returning the argument text.
fn function_body(input: &str, grammar: &Grammar) -> Matched<String> {
    let lower = input.to_ascii_lowercase();
    let rest = lower
        .strip_prefix(grammar.model.name())
        .ok_or(Failure::Mismatch)?;
    let rest = if grammar.legacy_alpha_name {
        rest.strip_prefix('a').unwrap_or(rest)
    } else {
        rest
    };
    let body = rest
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .ok_or(Failure::Mismatch)?;
    Ok(body.trim().to_string())
}

fn parse_arguments(body: &str, slots: &[Slot; 3]) -> Matched<Components> {
    let (main, slash_alpha) = match body.split_once('/') {
        Some((main, alpha)) => (main, Some(alpha.trim())),
        None => (body, None),
    };

    let mut tokens: Vec<&str> = if main.contains(',') {
        main.split(',').map(str::trim).collect()
    } else {
        main.split_whitespace().collect()
    };
    if tokens.iter().any(|t| t.is_empty() || t.contains(char::is_whitespace)) {
        return Err(Failure::Mismatch);
    }

    // Legacy comma syntax carries alpha as a fourth argument.
    let alpha_token = match (slash_alpha, tokens.len()) {
        (Some(a), 3) => Some(a),
        (None, 4) if main.contains(',') => tokens.pop(),
        (None, 3) => None,
        _ => return Err(Failure::Mismatch),
    };

    let mut values = [0.0; 3];
    for (value, (token, slot)) in values.iter_mut().zip(tokens.iter().zip(slots)) {
        *value = read_slot(token, *slot)?;
    }

    let alpha = match alpha_token {
        Some(token) => read_alpha(token)?,
        None => 1.0,
    };

    Ok(Components::new(values, alpha))
}

fn read_slot(token: &str, slot: Slot) -> Matched<f64> {
    let (number, percent) = split_percent(token);
    match slot {
        Slot::NumberOrPercent(scale) => {
            let n = read_number(number)?;
            Ok(if percent { scale.apply(n) } else { n })
        }
        Slot::Percent if percent => read_number(number),
        Slot::Percent => Err(Failure::Mismatch),
        Slot::Angle if percent => Err(Failure::Mismatch),
        Slot::Angle => read_number(number.strip_suffix("deg").unwrap_or(number)),
    }
}

fn read_alpha(token: &str) -> Matched<f64> {
    let (number, percent) = split_percent(token);
    let n = read_number(number)?;
    Ok(if percent { n / 100.0 } else { n })
}

fn split_percent(token: &str) -> (&str, bool) {
    match token.strip_suffix('%') {
        Some(number) => (number, true),
        None => (token, false),
    }
}

/// Numeric-looking tokens that fail to parse are a [`Failure::Number`];
/// anything else is a shape mismatch.
fn read_number(token: &str) -> Matched<f64> {
    let looks_numeric = token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !looks_numeric {
        return Err(Failure::Mismatch);
    }
    match token.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(Failure::Number(token.to_string())),
    }
}
