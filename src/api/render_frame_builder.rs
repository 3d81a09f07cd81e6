use tracing::debug;

use crate::core::{
    Axis, MarginalBand, MarginalHistogram, project_marginal_areas, project_marginal_bars,
};
use crate::error::PlotResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, Renderer, Stroke,
    TextHAlign, TextPrimitive, basis_area,
};

use super::axis_ticks::axis_ticks;
use super::{MarginalStyle, ScatterPlotEngine};

impl<R: Renderer> ScatterPlotEngine<R> {
    /// Materializes the full scene for the current records and visibility.
    ///
    /// Axis scales come from the full record set; points and marginals only
    /// from visible conditions.
    pub fn build_render_frame(&self) -> PlotResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);

        self.push_background_and_grid(&mut frame);
        self.push_axes(&mut frame);

        let x_marginal = self.marginal_histogram(Axis::X)?;
        let y_marginal = self.marginal_histogram(Axis::Y)?;
        self.push_marginal(&mut frame, &x_marginal)?;
        self.push_marginal(&mut frame, &y_marginal)?;

        self.push_points(&mut frame)?;
        self.push_labels(&mut frame);
        self.push_legend(&mut frame);

        debug!(
            circles = frame.circles.len(),
            rects = frame.rects.len(),
            paths = frame.paths.len(),
            hidden = self.visibility.hidden_count(),
            "built render frame"
        );
        Ok(frame)
    }

    /// Pixel band for the marginal along `axis`, outside the plot area.
    #[must_use]
    pub fn marginal_band(&self, axis: Axis) -> MarginalBand {
        let area = self.config.plot_area();
        let edge = match axis {
            Axis::X => area.top,
            Axis::Y => area.right,
        };
        MarginalBand {
            edge,
            extent_px: self.config.marginal.band_px,
        }
    }

    fn push_background_and_grid(&self, frame: &mut RenderFrame) {
        let area = self.config.plot_area();
        let chrome = &self.config.chrome;

        frame.rects.push(RectPrimitive::new(
            area.left,
            area.top,
            area.width(),
            area.height(),
            chrome.background_color,
        ));

        let count = self.config.axis_tick_count;
        for tick in axis_ticks(self.x_scale, count) {
            frame.lines.push(LinePrimitive::new(
                tick.pixel,
                area.top,
                tick.pixel,
                area.bottom,
                1.0,
                chrome.grid_color,
            ));
        }
        for tick in axis_ticks(self.y_scale, count) {
            frame.lines.push(LinePrimitive::new(
                area.left,
                tick.pixel,
                area.right,
                tick.pixel,
                1.0,
                chrome.grid_color,
            ));
        }
    }

    fn push_axes(&self, frame: &mut RenderFrame) {
        let area = self.config.plot_area();
        let chrome = &self.config.chrome;
        let tick_length = chrome.tick_length_px;
        let count = self.config.axis_tick_count;

        frame.lines.push(LinePrimitive::new(
            area.left,
            area.bottom,
            area.right,
            area.bottom,
            1.0,
            chrome.axis_color,
        ));
        for tick in axis_ticks(self.x_scale, count) {
            frame.lines.push(LinePrimitive::new(
                tick.pixel,
                area.bottom,
                tick.pixel,
                area.bottom + tick_length,
                1.0,
                chrome.axis_color,
            ));
            frame.texts.push(TextPrimitive::new(
                tick.label,
                tick.pixel,
                area.bottom + tick_length + 3.0 + chrome.tick_font_size_px,
                chrome.tick_font_size_px,
                chrome.text_color,
                TextHAlign::Center,
            ));
        }

        frame.lines.push(LinePrimitive::new(
            area.left,
            area.top,
            area.left,
            area.bottom,
            1.0,
            chrome.axis_color,
        ));
        for tick in axis_ticks(self.y_scale, count) {
            frame.lines.push(LinePrimitive::new(
                area.left - tick_length,
                tick.pixel,
                area.left,
                tick.pixel,
                1.0,
                chrome.axis_color,
            ));
            frame.texts.push(TextPrimitive::new(
                tick.label,
                area.left - tick_length - 3.0,
                tick.pixel + chrome.tick_font_size_px * 0.32,
                chrome.tick_font_size_px,
                chrome.text_color,
                TextHAlign::Right,
            ));
        }
    }

    fn push_marginal(&self, frame: &mut RenderFrame, histogram: &MarginalHistogram) -> PlotResult<()> {
        let marginal = &self.config.marginal;
        let along = self.scale(histogram.axis);
        let band = self.marginal_band(histogram.axis);

        match marginal.style {
            MarginalStyle::Bars => {
                let bars = project_marginal_bars(histogram, along, band, marginal.count_scale_mode)?;
                for bar in bars {
                    let color = self.palette.color_for(&bar.condition);
                    frame.rects.push(RectPrimitive::new(
                        bar.x,
                        bar.y,
                        bar.width.max(0.0),
                        bar.height.max(0.0),
                        color.with_alpha(marginal.opacity),
                    ));
                }
            }
            MarginalStyle::Curve => {
                let areas =
                    project_marginal_areas(histogram, along, band, marginal.count_scale_mode)?;
                for area in areas {
                    let color = self.palette.color_for(&area.condition);
                    let commands =
                        basis_area(&area.points, area.baseline, area.axis == Axis::X);
                    if commands.is_empty() {
                        continue;
                    }
                    frame
                        .paths
                        .push(PathPrimitive::new(commands, color.with_alpha(marginal.opacity)));
                }
            }
        }
        Ok(())
    }

    fn push_points(&self, frame: &mut RenderFrame) -> PlotResult<()> {
        let style = &self.config.points;
        let stroke = (style.stroke_width > 0.0).then(|| {
            Stroke::new(
                style.stroke_width,
                style.stroke_color.with_alpha(style.opacity),
            )
        });

        for record in self.visible_records() {
            let cx = self.x_scale.to_pixel(record.x)?;
            let cy = self.y_scale.to_pixel(record.y)?;
            let fill = self
                .palette
                .color_for(&record.condition)
                .with_alpha(style.opacity);
            let mut circle = CirclePrimitive::new(cx, cy, style.radius, fill);
            circle.stroke = stroke;
            frame.circles.push(circle);
        }
        Ok(())
    }

    fn push_labels(&self, frame: &mut RenderFrame) {
        let area = self.config.plot_area();
        let chrome = &self.config.chrome;

        if !self.config.x_label.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    self.config.x_label.clone(),
                    area.center_x(),
                    area.bottom + 50.0,
                    chrome.axis_label_font_size_px,
                    chrome.text_color,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }
        if !self.config.y_label.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    self.config.y_label.clone(),
                    area.left - 60.0,
                    area.center_y(),
                    chrome.axis_label_font_size_px,
                    chrome.text_color,
                    TextHAlign::Center,
                )
                .bold()
                .rotated(-90.0),
            );
        }
        if let Some(title) = self.config.title.as_deref().filter(|title| !title.is_empty()) {
            frame.texts.push(
                TextPrimitive::new(
                    title,
                    area.center_x(),
                    40.0,
                    chrome.title_font_size_px,
                    chrome.text_color,
                    TextHAlign::Center,
                )
                .bold(),
            );
        }
    }
}
