mod builders;
mod change1;
mod channel;

pub use builders::{BasicBuilders, LineArrayOutput, ShapeBuilders};
pub use change1::{geo_offset, ShapedArea};
pub use channel::ParallelOffset;

use crate::config::RendererSettings;
use crate::convert::PointConversion;
use crate::error::Result;
use crate::geometry::{Rect2, Shape};
use crate::symbol::{SegmentColors, Symbol, SymbolLookup, SymbolType};

use super::segment_color::BuildSegmentShapes;
use super::shape_properties::ShapeProperties;

/// Shapes and annotations produced for one symbol.
#[derive(Debug, Clone, Default)]
pub struct LineArrayResult {
    pub shapes: Vec<Shape>,
    pub modifiers: Vec<Shape>,
}

/// Picks the drawing routine for a symbol and assembles its shapes.
///
/// Stage failures are logged and degrade to partial output; they never
/// propagate to the caller.
pub struct LineArray<'a> {
    builders: &'a dyn ShapeBuilders,
    lookup: &'a dyn SymbolLookup,
    converter: &'a dyn PointConversion,
    settings: &'a RendererSettings,
}

/// Logs a failed stage and substitutes an empty result.
fn degrade<T: Default>(result: Result<T>, component: &'static str, method: &'static str) -> T {
    result.unwrap_or_else(|err| {
        tracing::warn!(component, method, %err, "stage failed, continuing with partial output");
        T::default()
    })
}

impl<'a> LineArray<'a> {
    #[must_use]
    pub fn new(
        builders: &'a dyn ShapeBuilders,
        lookup: &'a dyn SymbolLookup,
        converter: &'a dyn PointConversion,
        settings: &'a RendererSettings,
    ) -> Self {
        Self {
            builders,
            lookup,
            converter,
            settings,
        }
    }

    /// Builds the shapes of `symbol`, updating its points in place when a
    /// routine rebuilds them.
    ///
    /// Returns `None` when the symbol has no points.
    pub fn execute(&self, symbol: &mut Symbol, clip: Option<&Rect2>) -> Option<LineArrayResult> {
        if symbol.points.is_empty() {
            return None;
        }

        let original = symbol.symbol_type;
        if self.is_short_complex_arrow(symbol) {
            tracing::debug!(symbol = %original, "drawing short arrow as DIRATKSPT");
            symbol.symbol_type = SymbolType::DirAtkSpt;
        }
        if symbol.symbol_type == SymbolType::SingleC {
            symbol.points.reverse();
        }

        let current = symbol.symbol_type;
        let mut shapes = self.dispatch(symbol, clip);
        if !current.is_metoc() && !current.is_route() {
            ShapeProperties::new(symbol, self.settings).execute(&mut shapes);
        }

        symbol.symbol_type = original;

        let mut modifiers = degrade(
            self.builders.modifiers(symbol, &shapes),
            "line_array",
            "modifiers",
        );
        if symbol.symbol_type.is_boundary() {
            modifiers.extend(degrade(
                self.builders.line_break_text(symbol),
                "line_array",
                "line_break_text",
            ));
        }

        Some(LineArrayResult { shapes, modifiers })
    }

    fn is_short_complex_arrow(&self, symbol: &Symbol) -> bool {
        if !symbol.symbol_type.downgrades_when_short() {
            return false;
        }
        let (Some(p0), Some(p1)) = (symbol.points.get(0), symbol.points.get(1)) else {
            return false;
        };
        p0.pixel_distance(p1) < self.settings.downgrade_arrow_length * self.settings.dpi_scale()
    }

    fn dispatch(&self, symbol: &mut Symbol, clip: Option<&Rect2>) -> Vec<Shape> {
        let t = symbol.symbol_type;
        let info = self.lookup.info(t);

        if t.is_change1_area() && symbol.points.len() >= info.min_points {
            let anchors = std::mem::take(&mut symbol.points);
            return match self.builders.change1_area(symbol, &anchors, self.converter) {
                Ok(out) => {
                    symbol.points = out.points.unwrap_or(anchors);
                    out.shapes
                }
                Err(err) => {
                    tracing::warn!(
                        component = "line_array",
                        method = "change1_area",
                        %err,
                        "shaped area failed"
                    );
                    symbol.points = anchors;
                    Vec::new()
                }
            };
        }

        if t.is_metoc() {
            if symbol.points.len() < 2 {
                tracing::warn!(
                    component = "line_array",
                    method = "metoc",
                    points = symbol.points.len(),
                    "weather symbol needs at least 2 points"
                );
                return Vec::new();
            }
            return degrade(self.builders.metoc(symbol, clip), "line_array", "metoc");
        }

        let output = if t.is_channel() {
            degrade(
                self.builders.channel(symbol, self.settings, clip),
                "line_array",
                "channel",
            )
        } else if t.is_route() {
            let colors = symbol
                .segment_colors
                .as_deref()
                .map(SegmentColors::parse)
                .unwrap_or_default();
            LineArrayOutput::shapes(BuildSegmentShapes::new(symbol, &colors).execute())
        } else {
            degrade(
                self.builders.line_array(symbol, clip, self.converter),
                "line_array",
                "line_array",
            )
        };

        if let Some(points) = output.points {
            symbol.points = points;
        }
        output.shapes
    }
}
