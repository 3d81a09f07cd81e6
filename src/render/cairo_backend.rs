use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use crate::error::{PlotError, PlotResult};
use crate::render::{Color, PathCommand, RenderFrame, Renderer, Stroke, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo offscreen renderer.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let mut file = File::create(path)?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| PlotError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            fill_and_stroke(context, rect.fill_color, rect.stroke)?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for path in &frame.paths {
            context.new_path();
            for command in &path.commands {
                match *command {
                    PathCommand::MoveTo(x, y) => context.move_to(x, y),
                    PathCommand::LineTo(x, y) => context.line_to(x, y),
                    PathCommand::CubicTo { c1, c2, end } => {
                        context.curve_to(c1.0, c1.1, c2.0, c2.1, end.0, end.1);
                    }
                    PathCommand::Close => context.close_path(),
                }
            }
            fill_and_stroke(context, path.fill_color, None)?;
            stats.paths_drawn += 1;
        }

        for circle in &frame.circles {
            context.new_sub_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
            fill_and_stroke(context, circle.fill_color, circle.stroke)?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let weight = if text.bold { " Bold" } else { "" };
            let font_description =
                FontDescription::from_string(&format!("Sans{weight} {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let offset_x = match text.h_align {
                TextHAlign::Left => 0.0,
                TextHAlign::Center => -f64::from(text_width) / 2.0,
                TextHAlign::Right => -f64::from(text_width),
            };

            context
                .save()
                .map_err(|err| map_backend_error("failed to save context", err))?;
            context.translate(text.x, text.y);
            context.rotate(text.rotation_deg.to_radians());
            apply_color(context, text.color);
            // Anchor on the baseline, like SVG text.
            context.move_to(offset_x, -f64::from(text_height) * 0.8);
            pangocairo::functions::show_layout(context, &layout);
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore context", err))?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn fill_and_stroke(context: &Context, fill: Color, stroke: Option<Stroke>) -> PlotResult<()> {
    apply_color(context, fill);
    match stroke {
        Some(stroke) => {
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill shape", err))?;
            apply_color(context, stroke.color);
            context.set_line_width(stroke.width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke shape outline", err))
        }
        None => context
            .fill()
            .map_err(|err| map_backend_error("failed to fill shape", err)),
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::InvalidData(format!("{prefix}: {err}"))
}
