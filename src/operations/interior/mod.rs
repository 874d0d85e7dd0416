mod direction;
mod interior_points;

pub use direction::{DirectionClassifier, PolygonInterior};
pub use interior_points::InteriorPoints;
