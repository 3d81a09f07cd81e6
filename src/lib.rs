//! scatter-marginals: scatter plots with per-condition marginal histograms.
//!
//! Records tagged with a categorical condition are mapped through shared
//! "nice" linear scales; each visible condition is binned along both axes
//! against the same scale domains, so marginal bars and curves line up with
//! the scatter points. Output is a backend-agnostic `RenderFrame`.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PlotConfig, ScatterPlotEngine};
pub use error::{PlotError, PlotResult};
