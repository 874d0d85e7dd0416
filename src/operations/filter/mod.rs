mod arrow_points;
mod duplicates;
mod spikes;

pub use arrow_points::RebuildArrowControlPoints;
pub use duplicates::RemoveDuplicatePoints;
pub use spikes::{min_spike_distance, FilterSpikes};
