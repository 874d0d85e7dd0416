pub mod autoshape;
pub mod filter;
pub mod hatch;
pub mod interior;
pub mod line_array;
pub mod segment_color;
pub mod shape_properties;
pub mod validate;

pub use autoshape::AttachAutoshapeFill;
pub use hatch::BuildHatchFills;
pub use line_array::{BasicBuilders, LineArray, LineArrayOutput, LineArrayResult, ShapeBuilders};
pub use segment_color::BuildSegmentShapes;
pub use shape_properties::ShapeProperties;
pub use validate::ValidateSymbol;
