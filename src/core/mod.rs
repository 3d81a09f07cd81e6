pub mod bins;
pub mod marginal;
pub mod scale;
pub mod types;
pub mod visibility;

pub use bins::{Bin, BinLayout, bin_values, max_count};
pub use marginal::{
    ConditionBins, CountScaleMode, MarginalArea, MarginalBand, MarginalBar, MarginalHistogram,
    project_marginal_areas, project_marginal_bars,
};
pub use scale::{LinearScale, PLACEHOLDER_DOMAIN, extent, nice_domain, ticks};
pub use types::{Axis, Condition, Record, Viewport, retain_finite};
pub use visibility::VisibilitySet;
