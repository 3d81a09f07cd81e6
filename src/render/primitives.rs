use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(input: &str) -> PlotResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let invalid = || PlotError::InvalidData(format!("invalid hex color `{input}`"));
        let channel = |text: &str| u8::from_str_radix(text, 16).map_err(|_| invalid());

        if !digits.is_ascii() {
            return Err(invalid());
        }

        match digits.len() {
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |index: usize| channel(&digits[index..=index].repeat(2));
                Ok(Self::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// `#rrggbb` without alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Optional outline drawn around a filled shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
}

impl Stroke {
    #[must_use]
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }

    fn validate(self) -> PlotResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PlotError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(PlotError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(PlotError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub stroke: Option<Stroke>,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            stroke: None,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlotError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(PlotError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        self.fill_color.validate()
    }
}

/// Filled circle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
    pub stroke: Option<Stroke>,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill_color: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill_color,
            stroke: None,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(PlotError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PlotError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        self.fill_color.validate()
    }
}

/// One segment command of a path outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    CubicTo {
        c1: (f64, f64),
        c2: (f64, f64),
        end: (f64, f64),
    },
    Close,
}

impl PathCommand {
    fn is_finite(self) -> bool {
        let finite = |(x, y): (f64, f64)| x.is_finite() && y.is_finite();
        match self {
            Self::MoveTo(x, y) | Self::LineTo(x, y) => finite((x, y)),
            Self::CubicTo { c1, c2, end } => finite(c1) && finite(c2) && finite(end),
            Self::Close => true,
        }
    }
}

/// Filled outline in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub commands: Vec<PathCommand>,
    pub fill_color: Color,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(commands: Vec<PathCommand>, fill_color: Color) -> Self {
        Self {
            commands,
            fill_color,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        match self.commands.first() {
            Some(PathCommand::MoveTo(..)) => {}
            _ => {
                return Err(PlotError::InvalidData(
                    "path must start with a move command".to_owned(),
                ));
            }
        }
        if !self.commands.iter().all(|command| command.is_finite()) {
            return Err(PlotError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `rotation_deg` rotates the label clockwise around its anchor point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub bold: bool,
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            bold: false,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn rotated(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(PlotError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
