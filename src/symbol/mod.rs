mod descriptor;
pub mod lookup;
pub mod segment_colors;
pub mod symbol_type;

pub use descriptor::{FontSpec, LineStyle, Symbol};
pub use lookup::{DefaultLookup, SymbolInfo, SymbolLookup};
pub use segment_colors::SegmentColors;
pub use symbol_type::{DrawRule, ShapedAreaKind, SymbolType};
