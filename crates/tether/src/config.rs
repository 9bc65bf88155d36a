//! Configuration types for Tether simulations.
//!
//! This module provides configuration structures that control the physics
//! of a layout run and the look of rendered frames. All types implement
//! [`serde::Deserialize`] for loading from external sources; every field is
//! optional and falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Spring constant, rest length and step count.
//! - [`StyleConfig`] - Canvas size, stroke widths and colors of rendered frames.
//!
//! # Example
//!
//! ```
//! # use tether::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.layout().iterations(), 100);
//! ```

use serde::Deserialize;

use tether_core::{
    color::{self, Color},
    geometry::Size,
};

use crate::{
    error::TetherError,
    graph::{DEFAULT_REST_LENGTH, DEFAULT_SPRING_CONSTANT},
};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Overrides the number of simulation steps.
    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.layout.iterations = iterations;
        self
    }

    /// Checks both sections.
    ///
    /// # Errors
    ///
    /// Returns [`TetherError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), TetherError> {
        self.layout.validate()?;
        self.style.validate()
    }
}

/// Largest accepted spring constant.
///
/// Both ends of an edge move, so a lone pair closes `2 * spring_constant` of
/// its distance from rest per step. Past 1 every step overshoots by more
/// than it corrects and the layout diverges.
pub const MAX_SPRING_CONSTANT: f32 = 1.0;

/// Physics parameters of a layout run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Proportionality between edge stretch and movement per step.
    spring_constant: f32,

    /// Edge length at which the spring exerts no force.
    rest_length: f32,

    /// Number of simulation steps.
    iterations: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spring_constant: DEFAULT_SPRING_CONSTANT,
            rest_length: DEFAULT_REST_LENGTH,
            iterations: 100,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(spring_constant: f32, rest_length: f32, iterations: usize) -> Self {
        Self {
            spring_constant,
            rest_length,
            iterations,
        }
    }

    pub fn spring_constant(&self) -> f32 {
        self.spring_constant
    }

    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Rejects non-finite or negative parameters, and spring constants
    /// above [`MAX_SPRING_CONSTANT`].
    ///
    /// # Errors
    ///
    /// Returns [`TetherError::Config`] naming the offending field.
    pub fn validate(&self) -> Result<(), TetherError> {
        check_non_negative("layout.spring_constant", self.spring_constant)?;
        if self.spring_constant > MAX_SPRING_CONSTANT {
            return Err(TetherError::Config(format!(
                "`layout.spring_constant` must be at most {MAX_SPRING_CONSTANT}, got {}",
                self.spring_constant
            )));
        }
        check_non_negative("layout.rest_length", self.rest_length)
    }
}

/// Visual styling configuration for rendered frames.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Canvas width in pixels.
    width: f32,

    /// Canvas height in pixels.
    height: f32,

    /// Stroke width of edges.
    line_width: f32,

    /// Radius of vertex dots.
    dot_size: f32,

    /// Background color as a CSS color string.
    background_color: String,

    /// Edge colors, cycled in edge order. `None` uses the default palette.
    palette: Option<Vec<String>>,

    /// Fit the view box to the vertices instead of the fixed canvas.
    fit_to_vertices: bool,

    /// Margin around the vertices when fitting.
    margin: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            line_width: 1.0,
            dot_size: 2.0,
            background_color: "white".to_string(),
            palette: None,
            fit_to_vertices: false,
            margin: 10.0,
        }
    }
}

impl StyleConfig {
    /// Canvas size of a rendered frame.
    pub fn canvas(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn dot_size(&self) -> f32 {
        self.dot_size
    }

    pub fn fit_to_vertices(&self) -> bool {
        self.fit_to_vertices
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed edge palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or holds an invalid color.
    pub fn palette(&self) -> Result<Vec<Color>, String> {
        let Some(names) = &self.palette else {
            return Ok(color::palette());
        };
        if names.is_empty() {
            return Err("Edge palette in config is empty".to_string());
        }
        names
            .iter()
            .map(|name| Color::new(name))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("Invalid palette color in config: {err}"))
    }

    /// Rejects non-positive canvas sizes, negative strokes and bad colors.
    ///
    /// # Errors
    ///
    /// Returns [`TetherError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), TetherError> {
        check_positive("style.width", self.width)?;
        check_positive("style.height", self.height)?;
        check_non_negative("style.line_width", self.line_width)?;
        check_non_negative("style.dot_size", self.dot_size)?;
        check_non_negative("style.margin", self.margin)?;
        self.background_color().map_err(TetherError::Config)?;
        self.palette().map_err(TetherError::Config)?;
        Ok(())
    }
}

fn check_non_negative(field: &str, value: f32) -> Result<(), TetherError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TetherError::Config(format!(
            "`{field}` must be a finite non-negative number, got {value}"
        )))
    }
}

fn check_positive(field: &str, value: f32) -> Result<(), TetherError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TetherError::Config(format!(
            "`{field}` must be a finite positive number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.layout().spring_constant(), 0.1);
        assert_eq!(config.layout().rest_length(), 100.0);
        assert_eq!(config.layout().iterations(), 100);
        assert_eq!(config.style().canvas(), Size::new(300.0, 300.0));
        assert_eq!(config.style().palette().unwrap().len(), 7);
        assert!(!config.style().fit_to_vertices());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            rest_length = 60.0

            [style]
            palette = ["navy", "#ff8800"]
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().rest_length(), 60.0);
        assert_eq!(config.layout().spring_constant(), 0.1);
        assert_eq!(config.layout().iterations(), 100);
        assert_eq!(config.style().line_width(), 1.0);
        assert_eq!(config.style().palette().unwrap().len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.style().dot_size(), 2.0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = toml::from_str::<AppConfig>("[layout]\nstiffness = 2.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_spring_constant_rejected() {
        let config = AppConfig::new(LayoutConfig::new(-0.1, 100.0, 10), StyleConfig::default());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("layout.spring_constant"));
    }

    #[test]
    fn test_unstable_spring_constant_rejected() {
        let err = LayoutConfig::new(5.0, 100.0, 10).validate().unwrap_err();
        assert!(err.to_string().contains("at most 1"));

        assert!(LayoutConfig::new(1.0, 100.0, 10).validate().is_ok());
    }

    #[test]
    fn test_nan_rest_length_rejected() {
        let layout = LayoutConfig::new(0.1, f32::NAN, 10);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_bad_colors_rejected() {
        let config: AppConfig = toml::from_str("[style]\nbackground_color = \"nope\"\n").unwrap();
        assert!(matches!(config.validate(), Err(TetherError::Config(_))));

        let config: AppConfig = toml::from_str("[style]\npalette = []\n").unwrap();
        assert!(config.style().palette().is_err());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_canvas_rejected() {
        let config: AppConfig = toml::from_str("[style]\nwidth = 0.0\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("style.width"));
    }

    #[test]
    fn test_set_iterations() {
        let mut config = AppConfig::default();
        config.set_iterations(7);
        assert_eq!(config.layout().iterations(), 7);
    }
}
