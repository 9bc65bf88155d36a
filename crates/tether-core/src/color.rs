//! Color handling for rendered frames
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and the default edge [`palette`].

use std::str::FromStr;

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use tether_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

/// CSS names of the colors edges cycle through by default.
pub const DEFAULT_PALETTE: [&str; 7] = [
    "black", "red", "lime", "blue", "yellow", "cyan", "magenta",
];

/// Returns the default edge palette as parsed colors.
pub fn palette() -> Vec<Color> {
    DEFAULT_PALETTE
        .iter()
        .map(|name| Color::new(name).expect("default palette holds valid CSS colors"))
        .collect()
}
