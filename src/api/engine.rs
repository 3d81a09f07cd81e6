use crate::core::{Axis, Condition, LinearScale, MarginalHistogram, Record, VisibilitySet};
use crate::error::PlotResult;
use crate::render::Renderer;

use super::{ConditionPalette, PlotConfig};

/// Main facade consumed by host applications.
///
/// `ScatterPlotEngine` owns the record set, the shared axis scales fit to
/// it, the per-condition visibility flags, and the renderer. Every render
/// pass rebuilds marginals and geometry from that state.
pub struct ScatterPlotEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PlotConfig,
    pub(super) palette: ConditionPalette,
    pub(super) records: Vec<Record>,
    pub(super) conditions: Vec<Condition>,
    pub(super) visibility: VisibilitySet,
    pub(super) x_scale: LinearScale,
    pub(super) y_scale: LinearScale,
}

impl<R: Renderer> ScatterPlotEngine<R> {
    pub fn new(renderer: R, config: PlotConfig) -> PlotResult<Self> {
        config.validate()?;
        let (x_scale, y_scale) = fit_scales(&config, &[])?;

        Ok(Self {
            renderer,
            config,
            palette: ConditionPalette::default(),
            records: Vec::new(),
            conditions: Vec::new(),
            visibility: VisibilitySet::new(),
            x_scale,
            y_scale,
        })
    }

    #[must_use]
    pub fn with_palette(mut self, palette: ConditionPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Replaces the config and refits the scales against the current records.
    pub fn set_config(&mut self, config: PlotConfig) -> PlotResult<()> {
        config.validate()?;
        let (x_scale, y_scale) = fit_scales(&config, &self.records)?;
        self.config = config;
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        Ok(())
    }

    #[must_use]
    pub fn palette(&self) -> &ConditionPalette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: ConditionPalette) {
        self.palette = palette;
    }

    /// Shared X scale, fit to every record regardless of visibility.
    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    /// Shared Y scale, fit to every record regardless of visibility.
    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn scale(&self, axis: Axis) -> LinearScale {
        match axis {
            Axis::X => self.x_scale,
            Axis::Y => self.y_scale,
        }
    }

    /// Marginal histogram along `axis` for the currently visible conditions.
    pub fn marginal_histogram(&self, axis: Axis) -> PlotResult<MarginalHistogram> {
        let bin_count = match axis {
            Axis::X => self.config.marginal.x_bin_count,
            Axis::Y => self.config.marginal.y_bin_count,
        };
        MarginalHistogram::compute(
            &self.records,
            &self.conditions,
            &self.visibility,
            axis,
            self.scale(axis),
            bin_count,
        )
    }

    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

/// Fits the shared scales to the full record set.
///
/// The Y range is inverted so larger values sit closer to the top.
pub(super) fn fit_scales(
    config: &PlotConfig,
    records: &[Record],
) -> PlotResult<(LinearScale, LinearScale)> {
    let area = config.plot_area();
    let x_scale = LinearScale::from_extent(
        records.iter().map(|record| record.x),
        (area.left, area.right),
        config.nice_tick_count,
    )?;
    let y_scale = LinearScale::from_extent(
        records.iter().map(|record| record.y),
        (area.bottom, area.top),
        config.nice_tick_count,
    )?;
    Ok((x_scale, y_scale))
}
