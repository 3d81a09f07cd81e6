mod axis_ticks;
mod config;
mod data_controller;
mod engine;
mod engine_snapshot;
mod json_contract;
mod legend_layout;
mod palette;
mod render_frame_builder;
mod visibility_controller;

pub use config::{
    ChromeStyle, LegendConfig, MarginalConfig, MarginalStyle, Margins, PlotArea, PlotConfig,
    PointStyle,
};
pub use engine::ScatterPlotEngine;
pub use engine_snapshot::PlotSnapshot;
pub use json_contract::{PLOT_SNAPSHOT_JSON_SCHEMA_V1, PlotSnapshotJsonContractV1};
pub use palette::ConditionPalette;
