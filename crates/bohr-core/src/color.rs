//! Color handling for Bohr diagrams.
//!
//! [`Color`] wraps `DynamicColor` from the color crate so palettes can be
//! written as CSS color strings in configuration and emitted verbatim into
//! SVG attributes.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A CSS color value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#3b82f6"`,
    /// `"rgb(59, 130, 246)"` or `"white"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bohr_core::color::Color;
    ///
    /// let electron = Color::new("#3b82f6").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha (transparency) component, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}
