//! Host-facing configuration and the context built from it at startup.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::color::SolidColor;
use crate::constants::GAP_PLACEHOLDER;
use crate::gamut::Gamut;
use crate::gradient::{build_gradient, linear_gradient, rainbow_gradient, GradientStop};
use crate::model::Component;

/// Steps in the rainbow hue track, one stop per 36°.
const RAINBOW_STEPS: usize = 10;

/// Picker settings the host chooses once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PickerConfig {
    /// Gamut OKLCH tracks are checked against.
    pub gamut: Gamut,
    /// Paint out-of-gamut runs with `placeholder` instead of fading through them.
    pub gamut_gaps: bool,
    /// Color painted over out-of-gamut runs.
    pub placeholder: String,
    /// Per-field track step counts overriding [`Component::default_steps`].
    pub steps: HashMap<Component, usize>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            gamut: Gamut::Srgb,
            gamut_gaps: false,
            placeholder: GAP_PLACEHOLDER.to_string(),
            steps: HashMap::new(),
        }
    }
}

impl PickerConfig {
    /// Track step count for `component`.
    pub fn steps_for(&self, component: Component) -> usize {
        self.steps
            .get(&component)
            .copied()
            .unwrap_or_else(|| component.default_steps())
    }
}

/// Explicit replacement for a global store: the host builds one at startup
/// and routes initial color selection and track rendering through it.
#[derive(Debug, Clone, Default)]
pub struct PickerContext {
    config: PickerConfig,
}

impl PickerContext {
    pub fn new(config: PickerConfig) -> Self {
        debug!(gamut = %config.gamut, gamut_gaps = config.gamut_gaps, "picker context created");
        Self { config }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Color to start from: the URL fragment if it holds one, otherwise a
    /// fallback color.
    pub fn initial_color(&self, fragment: Option<&str>) -> SolidColor {
        let fragment = fragment.map(str::trim).filter(|f| !f.trim_start_matches('#').is_empty());
        let Some(fragment) = fragment else {
            return fallback_color();
        };
        match SolidColor::from_url_fragment(fragment) {
            Ok(color) => color,
            Err(err) => {
                warn!(fragment, %err, "ignoring unreadable color fragment");
                fallback_color()
            }
        }
    }

    /// Stops for the track of `component`, using the configured gamut, gap
    /// mode, placeholder, and step count.
    pub fn gradient(&self, color: &SolidColor, component: Component) -> Vec<GradientStop> {
        build_gradient(
            color,
            component,
            self.config.steps_for(component),
            self.config.gamut,
            self.config.gamut_gaps,
            &self.config.placeholder,
        )
    }

    /// [`gradient`](Self::gradient) rendered as CSS.
    pub fn track(&self, color: &SolidColor, component: Component) -> String {
        linear_gradient(&self.gradient(color, component))
    }

    /// The rainbow hue track rendered as CSS.
    pub fn rainbow_track(&self, color: &SolidColor) -> String {
        linear_gradient(&rainbow_gradient(color, RAINBOW_STEPS))
    }
}

#[cfg(feature = "random")]
fn fallback_color() -> SolidColor {
    crate::random::random_color()
}

#[cfg(not(feature = "random"))]
fn fallback_color() -> SolidColor {
    SolidColor::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorModel;

    #[test]
    fn default_config() {
        let config = PickerConfig::default();
        assert_eq!(config.gamut, Gamut::Srgb);
        assert!(!config.gamut_gaps);
        assert_eq!(config.placeholder, "oklch(0.2 0 0)");
        assert_eq!(config.steps_for(Component::Hue), 360);
        assert_eq!(config.steps_for(Component::OklchHue), 72);
    }

    #[test]
    fn step_overrides() {
        let mut config = PickerConfig::default();
        config.steps.insert(Component::OklchHue, 36);
        let context = PickerContext::new(config);
        let color = SolidColor::create("oklch(0.5 0.1 120)", None).unwrap();
        assert_eq!(context.gradient(&color, Component::OklchHue).len(), 37);
        assert_eq!(context.gradient(&color, Component::OklchLightness).len(), 21);
    }

    #[test]
    fn fragments_seed_the_initial_color() {
        let context = PickerContext::default();
        let color = context.initial_color(Some("#0.444,0.173,282.000,1.000"));
        assert_eq!(color.oklch(), "oklch(0.444 0.173 282)");
        let color = context.initial_color(Some("#00ff00"));
        assert_eq!(color.hex(), "#00ff00");
    }

    #[cfg(feature = "random")]
    #[test]
    fn bad_fragments_fall_back_to_random() {
        let context = PickerContext::default();
        for fragment in [None, Some(""), Some("#"), Some("#nope")] {
            let color = context.initial_color(fragment);
            assert_eq!(color.model(), ColorModel::Hsl);
            assert_eq!(color.saturation(), 100.0);
        }
    }

    #[cfg(not(feature = "random"))]
    #[test]
    fn bad_fragments_fall_back_to_gray() {
        let color = PickerContext::default().initial_color(Some("#nope"));
        assert_eq!(color.model(), ColorModel::Rgb);
        assert_eq!(color.rgb8(), [128, 128, 128]);
    }

    #[test]
    fn configured_placeholder_fills_gaps() {
        let config = PickerConfig {
            gamut_gaps: true,
            placeholder: "transparent".to_string(),
            ..PickerConfig::default()
        };
        let context = PickerContext::new(config);
        let color = SolidColor::create("oklch(0.662 0.278 348)", None).unwrap();
        let track = context.track(&color, Component::OklchHue);
        assert!(track.starts_with("linear-gradient(to right, "));
        assert!(track.contains("transparent"));
        assert!(!track.contains("oklch(0.2 0 0)"));
    }

    #[test]
    fn rainbow_track_has_eleven_stops() {
        let color = SolidColor::create("hsl(0 100% 50%)", None).unwrap();
        let track = PickerContext::default().rainbow_track(&color);
        assert_eq!(track.matches("hsl(").count(), 11);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn config_from_json() {
        let config: PickerConfig =
            serde_json::from_str(r#"{"gamut":"P3","gamut_gaps":true,"steps":{"oklchHue":36}}"#)
                .unwrap();
        assert_eq!(config.gamut, Gamut::DisplayP3);
        assert!(config.gamut_gaps);
        assert_eq!(config.placeholder, GAP_PLACEHOLDER);
        assert_eq!(config.steps_for(Component::OklchHue), 36);
    }
}
