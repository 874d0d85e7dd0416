pub mod color;
pub mod point;
pub mod rect;
pub mod shape;

pub use color::Color;
pub use point::{PointList, TacPoint, PINNED_STYLE};
pub use rect::Rect2;
pub use shape::{FillStyle, HatchTile, LineCap, LineJoin, Shape, ShapeKind, Stroke};
