use crate::core::Condition;
use crate::interaction::LegendHitBox;
use crate::render::{
    Color, RectPrimitive, RenderFrame, Renderer, Stroke, TextHAlign, TextPrimitive,
};

use super::ScatterPlotEngine;

/// Checkbox left edge relative to the row anchor; the hit box starts here too.
const CHECKBOX_INSET_PX: f64 = 20.0;
const CHECKBOX_SIZE_PX: f64 = 15.0;
const SWATCH_WIDTH_PX: f64 = 20.0;
const SWATCH_HEIGHT_PX: f64 = 12.0;
const HIDDEN_SWATCH_ALPHA: f64 = 0.3;
const HIDDEN_LABEL_ALPHA: f64 = 0.5;

/// Anchor of one legend row: the row's baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct LegendRow {
    pub condition: Condition,
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl<R: Renderer> ScatterPlotEngine<R> {
    pub(super) fn legend_origin(&self) -> (f64, f64) {
        let area = self.config.plot_area();
        (
            area.right + self.config.legend.offset_x,
            area.top + self.config.legend.offset_y,
        )
    }

    pub(super) fn legend_rows(&self) -> Vec<LegendRow> {
        let (origin_x, origin_y) = self.legend_origin();
        self.conditions
            .iter()
            .enumerate()
            .map(|(index, condition)| LegendRow {
                condition: condition.clone(),
                x: origin_x,
                y: origin_y + index as f64 * self.config.legend.row_height_px,
                visible: self.visibility.is_visible(condition.as_str()),
            })
            .collect()
    }

    /// Clickable legend rows, one per condition in legend order.
    #[must_use]
    pub fn legend_hit_boxes(&self) -> Vec<LegendHitBox> {
        let legend = &self.config.legend;
        self.legend_rows()
            .into_iter()
            .map(|row| LegendHitBox {
                condition: row.condition,
                x: row.x - CHECKBOX_INSET_PX,
                y: row.y - legend.row_height_px * 0.5,
                width: legend.hit_width_px,
                height: legend.row_height_px,
            })
            .collect()
    }

    pub(super) fn push_legend(&self, frame: &mut RenderFrame) {
        if self.conditions.is_empty() {
            return;
        }
        let legend = &self.config.legend;
        let text_color = self.config.chrome.text_color;
        let (origin_x, origin_y) = self.legend_origin();

        if !legend.title.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    legend.title.clone(),
                    origin_x,
                    origin_y - 20.0,
                    self.config.chrome.axis_label_font_size_px,
                    text_color,
                    TextHAlign::Left,
                )
                .bold(),
            );
        }

        for row in self.legend_rows() {
            let color = self.palette.color_for(&row.condition);
            let checkbox_fill = if row.visible {
                color
            } else {
                Color::rgb(1.0, 1.0, 1.0)
            };
            frame.rects.push(
                RectPrimitive::new(
                    row.x - CHECKBOX_INSET_PX,
                    row.y - 10.0,
                    CHECKBOX_SIZE_PX,
                    CHECKBOX_SIZE_PX,
                    checkbox_fill,
                )
                .with_stroke(Stroke::new(2.0, legend.border_color)),
            );

            let swatch_alpha = if row.visible { 1.0 } else { HIDDEN_SWATCH_ALPHA };
            frame.rects.push(RectPrimitive::new(
                row.x + 5.0,
                row.y - 8.0,
                SWATCH_WIDTH_PX,
                SWATCH_HEIGHT_PX,
                color.with_alpha(swatch_alpha),
            ));

            if row.condition.as_str().is_empty() {
                continue;
            }
            let label_alpha = if row.visible { 1.0 } else { HIDDEN_LABEL_ALPHA };
            frame.texts.push(TextPrimitive::new(
                row.condition.as_str(),
                row.x + 35.0,
                row.y + 2.0,
                legend.font_size_px,
                text_color.with_alpha(label_alpha),
                TextHAlign::Left,
            ));
        }
    }
}
