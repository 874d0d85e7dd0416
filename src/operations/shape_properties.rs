use crate::config::RendererSettings;
use crate::geometry::{FillStyle, Shape, ShapeKind, Stroke};
use crate::symbol::Symbol;

use super::hatch::HatchParams;

/// Normalizes stroke and colors of freshly built shapes from the symbol.
///
/// Area shapes also receive the fill-style marker the hatch pass matches on.
pub struct ShapeProperties<'a> {
    symbol: &'a Symbol,
    settings: &'a RendererSettings,
}

impl<'a> ShapeProperties<'a> {
    #[must_use]
    pub fn new(symbol: &'a Symbol, settings: &'a RendererSettings) -> Self {
        Self { symbol, settings }
    }

    pub fn execute(&self, shapes: &mut [Shape]) {
        let width = if self.symbol.line_thickness > 0.0 {
            self.symbol.line_thickness
        } else {
            self.settings.default_line_width * self.settings.dpi_scale()
        };
        let hatch_style = HatchParams::effective_style(self.symbol);

        for shape in shapes {
            if shape.line_color.is_none() {
                shape.line_color = self.symbol.line_color;
            }
            shape.stroke = Stroke {
                dash: self.symbol.line_style.dash_array(width),
                ..Stroke::solid(width)
            };
            if shape.kind == ShapeKind::FilledArea {
                if shape.fill_color.is_none() {
                    shape.fill_color = self.symbol.fill_color;
                }
                if shape.fill_style == FillStyle::None {
                    shape.fill_style = hatch_style;
                }
            }
        }
    }
}
