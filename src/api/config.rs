use serde::{Deserialize, Serialize};

use crate::core::{CountScaleMode, Viewport, scale::DEFAULT_NICE_TICK_COUNT};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Space between the viewport border and the square plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 120.0,
            right: 200.0,
            bottom: 80.0,
            left: 100.0,
        }
    }
}

/// Pixel bounds of the scatter plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        (self.left + self.right) * 0.5
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        (self.top + self.bottom) * 0.5
    }
}

/// How marginal histograms are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarginalStyle {
    /// One rectangle per non-empty bin.
    Bars,
    /// Smoothed filled area through bin midpoints.
    #[default]
    Curve,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginalConfig {
    pub style: MarginalStyle,
    pub count_scale_mode: CountScaleMode,
    /// Height of the top band and width of the right band.
    pub band_px: f64,
    pub x_bin_count: usize,
    pub y_bin_count: usize,
    pub opacity: f64,
}

impl Default for MarginalConfig {
    fn default() -> Self {
        Self {
            style: MarginalStyle::Curve,
            count_scale_mode: CountScaleMode::SharedVisible,
            band_px: 60.0,
            x_bin_count: 20,
            y_bin_count: 15,
            opacity: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub radius: f64,
    pub opacity: f64,
    pub stroke_width: f64,
    pub stroke_color: Color,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            radius: 4.0,
            opacity: 0.7,
            stroke_width: 1.0,
            stroke_color: Color::rgb(1.0, 1.0, 1.0),
        }
    }
}

/// Colors and font sizes for the plot chrome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChromeStyle {
    pub background_color: Color,
    pub grid_color: Color,
    pub axis_color: Color,
    pub text_color: Color,
    pub tick_length_px: f64,
    pub tick_font_size_px: f64,
    pub axis_label_font_size_px: f64,
    pub title_font_size_px: f64,
}

impl Default for ChromeStyle {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgb8(0xf0, 0xf0, 0xf5),
            grid_color: Color::rgb(1.0, 1.0, 1.0),
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            text_color: Color::rgb(0.0, 0.0, 0.0),
            tick_length_px: 6.0,
            tick_font_size_px: 12.0,
            axis_label_font_size_px: 16.0,
            title_font_size_px: 18.0,
        }
    }
}

/// Legend placement relative to the plot area's top-right corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub title: String,
    pub offset_x: f64,
    pub offset_y: f64,
    pub row_height_px: f64,
    pub hit_width_px: f64,
    pub font_size_px: f64,
    pub border_color: Color,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            title: "Condition".to_owned(),
            offset_x: 100.0,
            offset_y: 50.0,
            row_height_px: 30.0,
            hit_width_px: 160.0,
            font_size_px: 13.0,
            border_color: Color::from_rgb8(0x33, 0x33, 0x33),
        }
    }
}

/// Public plot configuration.
///
/// Serializable so hosts can keep plot setup in JSON files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_plot_size")]
    pub plot_size_px: f64,
    #[serde(default = "default_nice_tick_count")]
    pub nice_tick_count: usize,
    #[serde(default = "default_axis_tick_count")]
    pub axis_tick_count: usize,
    #[serde(default)]
    pub marginal: MarginalConfig,
    #[serde(default)]
    pub points: PointStyle,
    #[serde(default)]
    pub chrome: ChromeStyle,
    #[serde(default)]
    pub legend: LegendConfig,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new(Viewport::new(1000, 800))
    }
}

impl PlotConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            plot_size_px: default_plot_size(),
            nice_tick_count: default_nice_tick_count(),
            axis_tick_count: default_axis_tick_count(),
            marginal: MarginalConfig::default(),
            points: PointStyle::default(),
            chrome: ChromeStyle::default(),
            legend: LegendConfig::default(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            title: Some("Wing Disc Area vs Lambda".to_owned()),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_plot_size(mut self, plot_size_px: f64) -> Self {
        self.plot_size_px = plot_size_px;
        self
    }

    #[must_use]
    pub fn with_marginal_style(mut self, style: MarginalStyle) -> Self {
        self.marginal.style = style;
        self
    }

    #[must_use]
    pub fn with_count_scale_mode(mut self, mode: CountScaleMode) -> Self {
        self.marginal.count_scale_mode = mode;
        self
    }

    #[must_use]
    pub fn with_bin_counts(mut self, x_bin_count: usize, y_bin_count: usize) -> Self {
        self.marginal.x_bin_count = x_bin_count;
        self.marginal.y_bin_count = y_bin_count;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea {
            left: self.margins.left,
            top: self.margins.top,
            right: self.margins.left + self.plot_size_px,
            bottom: self.margins.top + self.plot_size_px,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.plot_size_px.is_finite() || self.plot_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "plot size must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("top", self.margins.top),
            ("right", self.margins.right),
            ("bottom", self.margins.bottom),
            ("left", self.margins.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        if self.nice_tick_count == 0 || self.axis_tick_count == 0 {
            return Err(PlotError::InvalidData(
                "tick counts must be > 0".to_owned(),
            ));
        }
        if self.marginal.x_bin_count == 0 || self.marginal.y_bin_count == 0 {
            return Err(PlotError::InvalidData(
                "marginal bin counts must be > 0".to_owned(),
            ));
        }
        if !self.marginal.band_px.is_finite() || self.marginal.band_px < 0.0 {
            return Err(PlotError::InvalidData(
                "marginal band must be finite and >= 0".to_owned(),
            ));
        }
        if !self.points.radius.is_finite() || self.points.radius <= 0.0 {
            return Err(PlotError::InvalidData(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("marginal", self.marginal.opacity),
            ("point", self.points.opacity),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "{name} opacity must be in [0, 1]"
                )));
            }
        }
        for color in [
            self.points.stroke_color,
            self.chrome.background_color,
            self.chrome.grid_color,
            self.chrome.axis_color,
            self.chrome.text_color,
            self.legend.border_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

fn default_plot_size() -> f64 {
    500.0
}

fn default_nice_tick_count() -> usize {
    DEFAULT_NICE_TICK_COUNT
}

fn default_axis_tick_count() -> usize {
    5
}

fn default_x_label() -> String {
    "Area".to_owned()
}

fn default_y_label() -> String {
    "Lambda".to_owned()
}
