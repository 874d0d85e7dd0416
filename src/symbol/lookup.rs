use super::symbol_type::{DrawRule, ShapedAreaKind, SymbolType};

/// Drawing metadata for one symbol type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    pub draw_rule: DrawRule,
    pub min_points: usize,
    /// `None` means unbounded.
    pub max_points: Option<usize>,
}

/// Symbol metadata source.
pub trait SymbolLookup {
    fn info(&self, symbol_type: SymbolType) -> SymbolInfo;
}

/// Metadata backed by the built-in symbol catalogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLookup;

impl SymbolLookup for DefaultLookup {
    fn info(&self, symbol_type: SymbolType) -> SymbolInfo {
        let draw_rule = symbol_type.draw_rule();
        let (min_points, max_points) = match draw_rule {
            DrawRule::ShapedArea(kind) => match kind {
                ShapedAreaKind::Rectangular => (2, Some(2)),
                ShapedAreaKind::Circular
                | ShapedAreaKind::RangeFan
                | ShapedAreaKind::Sector
                | ShapedAreaKind::RadarSearch => (1, Some(1)),
            },
            DrawRule::Area => (3, None),
            DrawRule::Arrow if symbol_type.downgrades_when_short() => (2, Some(2)),
            DrawRule::Channel if symbol_type.is_fixed_arrow() => (3, None),
            DrawRule::Line
            | DrawRule::Arrow
            | DrawRule::Channel
            | DrawRule::Route
            | DrawRule::Metoc => (2, None),
        };
        SymbolInfo {
            draw_rule,
            min_points,
            max_points,
        }
    }
}
