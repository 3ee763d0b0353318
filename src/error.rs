//! Error type shared by parsing, model lookup, and string-keyed edits.

use thiserror::Error;

/// Errors produced while turning text into a [`SolidColor`](crate::SolidColor).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input matches none of the six grammars and is not a known color name.
    #[error("invalid color: `{input}` matches no supported color format")]
    InvalidColor { input: String },

    /// A model tag outside `hex`, `rgb`, `hsl`, `hsv`, `hwb`, `oklch`.
    #[error("unsupported color model: `{model}`")]
    UnsupportedModel { model: String },

    /// The grammar matched but a numeric token could not be read.
    #[error("could not parse `{token}` in `{input}`")]
    Parse { input: String, token: String },

    /// A partial edit named a field no model has.
    #[error("unknown color component: `{name}`")]
    UnknownComponent { name: String },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidColor {
            input: input.to_string(),
        }
    }

    pub(crate) fn parse(input: &str, token: &str) -> Self {
        Self::Parse {
            input: input.to_string(),
            token: token.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = ColorError> = std::result::Result<T, E>;
