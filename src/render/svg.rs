use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::PlotResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathCommand, PathPrimitive, RectPrimitive, RenderFrame,
    Renderer, Stroke, TextHAlign, TextPrimitive,
};

/// Renderer that serializes frames into standalone SVG documents.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    title: Option<String>,
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a `<title>` element in every rendered document.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Document produced by the most recent render, empty before the first.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        fs::write(path, &self.document)?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.document = frame_to_svg(frame, self.title.as_deref());
        Ok(())
    }
}

/// Serializes `frame` into an SVG document string.
///
/// Coordinates are written with two decimals.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame, title: Option<&str>) -> String {
    let mut out = String::new();
    let width = frame.viewport.width;
    let height = frame.viewport.height;

    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
    );
    if let Some(title) = title {
        let _ = writeln!(out, "  <title>{}</title>", xml_escape(title));
    }

    for rect in &frame.rects {
        write_rect(&mut out, rect);
    }
    for line in &frame.lines {
        write_line(&mut out, line);
    }
    for path in &frame.paths {
        write_path(&mut out, path);
    }
    for circle in &frame.circles {
        write_circle(&mut out, circle);
    }
    for text in &frame.texts {
        write_text(&mut out, text);
    }

    let _ = writeln!(out, "</svg>");
    out
}

fn write_rect(out: &mut String, rect: &RectPrimitive) {
    let _ = writeln!(
        out,
        r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" {}{}/>"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        fill_attrs(rect.fill_color),
        stroke_attrs(rect.stroke),
    );
}

fn write_line(out: &mut String, line: &LinePrimitive) {
    let _ = writeln!(
        out,
        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-opacity="{:.3}" stroke-width="{:.2}"/>"#,
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        line.color.to_hex(),
        line.color.alpha,
        line.stroke_width,
    );
}

fn write_path(out: &mut String, path: &PathPrimitive) {
    let _ = writeln!(
        out,
        r#"  <path d="{}" {}/>"#,
        path_data(&path.commands),
        fill_attrs(path.fill_color),
    );
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) {
    let _ = writeln!(
        out,
        r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" {}{}/>"#,
        circle.cx,
        circle.cy,
        circle.radius,
        fill_attrs(circle.fill_color),
        stroke_attrs(circle.stroke),
    );
}

fn write_text(out: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let mut attrs = format!(
        r#"x="{:.2}" y="{:.2}" font-size="{:.1}" text-anchor="{anchor}" {}"#,
        text.x,
        text.y,
        text.font_size_px,
        fill_attrs(text.color),
    );
    if text.bold {
        attrs.push_str(r#" font-weight="bold""#);
    }
    if text.rotation_deg != 0.0 {
        let _ = write!(
            attrs,
            r#" transform="rotate({:.1} {:.2} {:.2})""#,
            text.rotation_deg, text.x, text.y
        );
    }
    let _ = writeln!(out, "  <text {attrs}>{}</text>", xml_escape(&text.text));
}

fn fill_attrs(color: Color) -> String {
    if color.alpha >= 1.0 {
        format!(r#"fill="{}""#, color.to_hex())
    } else {
        format!(
            r#"fill="{}" fill-opacity="{:.3}""#,
            color.to_hex(),
            color.alpha
        )
    }
}

fn stroke_attrs(stroke: Option<Stroke>) -> String {
    match stroke {
        Some(stroke) => format!(
            r#" stroke="{}" stroke-opacity="{:.3}" stroke-width="{:.2}""#,
            stroke.color.to_hex(),
            stroke.color.alpha,
            stroke.width
        ),
        None => String::new(),
    }
}

fn path_data(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|command| match *command {
            PathCommand::MoveTo(x, y) => format!("M {x:.2} {y:.2}"),
            PathCommand::LineTo(x, y) => format!("L {x:.2} {y:.2}"),
            PathCommand::CubicTo { c1, c2, end } => format!(
                "C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                c1.0, c1.1, c2.0, c2.1, end.0, end.1
            ),
            PathCommand::Close => "Z".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;

    #[test]
    fn empty_frame_produces_bare_document() {
        let svg = frame_to_svg(&RenderFrame::new(Viewport::new(100, 50)), None);
        assert!(svg.contains(r#"viewBox="0 0 100 50""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_is_escaped() {
        let frame = RenderFrame::new(Viewport::new(10, 10)).with_text(TextPrimitive::new(
            "A & B",
            1.0,
            2.0,
            12.0,
            Color::rgb(0.0, 0.0, 0.0),
            TextHAlign::Left,
        ));
        assert!(frame_to_svg(&frame, None).contains("A &amp; B"));
    }
}
