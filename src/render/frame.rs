use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one plot draw pass.
///
/// Backends paint rects, then lines, paths, circles and finally texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rects: Vec::new(),
            lines: Vec::new(),
            paths: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.rects.len() + self.lines.len() + self.paths.len() + self.circles.len() + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
