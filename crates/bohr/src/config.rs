//! Configuration types for Bohr diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out, animated and styled. All types implement
//! [`serde::Deserialize`] for loading from TOML.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutOptions`] - Canvas size and nucleus/electron dimensions.
//! - [`AnimationConfig`] - Whether to animate, and the stagger timings.
//! - [`StyleConfig`] - Color theme and background color.
//!
//! # Example
//!
//! ```
//! # use bohr::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert!(config.animation().enabled());
//! ```

use serde::Deserialize;

use bohr_core::{color::Color, layout::LayoutOptions, timeline::TimingOptions};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutOptions,

    /// Animation configuration section.
    #[serde(default)]
    animation: AnimationConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutOptions, animation: AnimationConfig, style: StyleConfig) -> Self {
        Self {
            layout,
            animation,
            style,
        }
    }

    /// Returns the layout options.
    pub fn layout(&self) -> &LayoutOptions {
        &self.layout
    }

    /// Returns the animation configuration.
    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks every section.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first invalid section.
    pub fn validate(&self) -> Result<(), String> {
        self.layout
            .validate()
            .map_err(|err| format!("Invalid layout config: {err}"))?;
        self.animation
            .timing()
            .validate()
            .map_err(|err| format!("Invalid animation config: {err}"))?;
        self.style.background_color()?;
        Ok(())
    }
}

/// Animation settings.
///
/// The timing fields sit directly in the `[animation]` table:
///
/// ```toml
/// [animation]
/// enabled = true
/// shell_stagger_ms = 300
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    enabled: bool,

    #[serde(flatten)]
    timing: TimingOptions,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timing: TimingOptions::default(),
        }
    }
}

impl AnimationConfig {
    pub fn new(enabled: bool, timing: TimingOptions) -> Self {
        Self { enabled, timing }
    }

    /// When `false`, diagrams are rendered fully drawn with no keyframes.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn timing(&self) -> &TimingOptions {
        &self.timing
    }
}

/// Color theme of the rendered diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the color palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                shell_stroke: "#d1d5db",
                electron_fill: "#3b82f6",
                nucleus_fill: "#e5e7eb",
                nucleus_stroke: "#9ca3af",
                symbol_text: "#111827",
                atomic_number_text: "#374151",
                name_text: "#111827",
                summary_text: "#4b5563",
            },
            Self::Dark => Palette {
                shell_stroke: "#4b5563",
                electron_fill: "#60a5fa",
                nucleus_fill: "#374151",
                nucleus_stroke: "#6b7280",
                symbol_text: "#f3f4f6",
                atomic_number_text: "#d1d5db",
                name_text: "#ffffff",
                summary_text: "#9ca3af",
            },
        }
    }
}

/// CSS colors used for each part of a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub shell_stroke: &'static str,
    pub electron_fill: &'static str,
    pub nucleus_fill: &'static str,
    pub nucleus_stroke: &'static str,
    pub symbol_text: &'static str,
    pub atomic_number_text: &'static str,
    pub name_text: &'static str,
    pub summary_text: &'static str,
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    theme: Theme,

    /// Background [`Color`] as a color string. Transparent when unset.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn new(theme: Theme, background_color: Option<String>) -> Self {
        Self {
            theme,
            background_color,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.animation().enabled());
        assert_eq!(config.style().theme(), Theme::Light);
        assert_eq!(config.style().background_color(), Ok(None));
        assert_eq!(config.layout(), &LayoutOptions::default());
    }

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            canvas_size = 600.0
            margin = 30.0

            [animation]
            enabled = false
            shell_stagger_ms = 300
            electron_stagger_ms = 25

            [style]
            theme = "dark"
            background_color = "#1f2937"
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().canvas_size(), 600.0);
        assert_eq!(config.layout().margin(), 30.0);
        assert_eq!(config.layout().electron_marker_radius(), 5.0);

        assert!(!config.animation().enabled());
        let timing = config.animation().timing();
        assert_eq!(timing.shell_stagger(), Duration::from_millis(300));
        assert_eq!(timing.electron_stagger(), Duration::from_millis(25));
        assert_eq!(timing.base_delay(), Duration::from_millis(100));

        assert_eq!(config.style().theme(), Theme::Dark);
        assert!(config.style().background_color().unwrap().is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.animation().enabled());
        assert_eq!(config.animation().timing(), &TimingOptions::default());
    }

    #[test]
    fn test_validate_rejects_bad_sections() {
        let config: AppConfig = toml::from_str("[layout]\ncanvas_size = 10.0").unwrap();
        assert!(config.validate().unwrap_err().contains("layout"));

        let config: AppConfig =
            toml::from_str("[animation]\nelectron_start_offset_ms = 900").unwrap();
        assert!(config.validate().unwrap_err().contains("animation"));

        let config: AppConfig =
            toml::from_str("[style]\nbackground_color = \"not-a-color\"").unwrap();
        assert!(config.validate().unwrap_err().contains("background color"));
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[style]\ntheme = \"sepia\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert_eq!(Theme::Light.palette().electron_fill, "#3b82f6");
        assert_eq!(Theme::Dark.palette().electron_fill, "#60a5fa");
    }
}
