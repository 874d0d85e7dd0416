pub mod config;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod symbol;

pub use config::RendererSettings;
pub use convert::{AffineConversion, PointConversion};
pub use error::{InvalidSymbol, Result, TacError};
pub use render::{RenderOutput, Renderer};
