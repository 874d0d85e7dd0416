use crate::config::RendererSettings;
use crate::convert::PointConversion;
use crate::error::{OperationError, Result};
use crate::geometry::{PointList, Rect2, Shape, ShapeKind};
use crate::math::clip_2d::clip_polyline_to_rect;
use crate::math::Point2;
use crate::symbol::{DrawRule, Symbol};

use super::change1::{outline_points, ShapedArea};
use super::channel::ParallelOffset;

/// Shapes produced by one drawing routine.
///
/// `points` replaces the symbol's points when the routine rebuilt them.
#[derive(Debug, Clone, Default)]
pub struct LineArrayOutput {
    pub points: Option<PointList>,
    pub shapes: Vec<Shape>,
}

impl LineArrayOutput {
    #[must_use]
    pub fn shapes(shapes: Vec<Shape>) -> Self {
        Self {
            points: None,
            shapes,
        }
    }
}

/// Drawing routines the dispatcher delegates to.
pub trait ShapeBuilders {
    /// Distance/azimuth shaped areas. `symbol.points` is empty on entry;
    /// `anchors` holds the original control points.
    ///
    /// # Errors
    ///
    /// Returns an error when the area cannot be built from its attributes.
    fn change1_area(
        &self,
        symbol: &Symbol,
        anchors: &PointList,
        converter: &dyn PointConversion,
    ) -> Result<LineArrayOutput>;

    /// Weather fronts and troughs.
    ///
    /// # Errors
    ///
    /// Returns an error when the glyph cannot be built.
    fn metoc(&self, symbol: &Symbol, clip: Option<&Rect2>) -> Result<Vec<Shape>>;

    /// Parallel-line corridors.
    ///
    /// # Errors
    ///
    /// Returns an error when the corridor cannot be built.
    fn channel(
        &self,
        symbol: &Symbol,
        settings: &RendererSettings,
        clip: Option<&Rect2>,
    ) -> Result<LineArrayOutput>;

    /// Everything else: plain lines, areas and arrows.
    ///
    /// # Errors
    ///
    /// Returns an error when the line cannot be built.
    fn line_array(
        &self,
        symbol: &Symbol,
        clip: Option<&Rect2>,
        converter: &dyn PointConversion,
    ) -> Result<LineArrayOutput>;

    /// Label and annotation shapes placed from the final points.
    ///
    /// # Errors
    ///
    /// Returns an error when placement fails.
    fn modifiers(&self, symbol: &Symbol, shapes: &[Shape]) -> Result<Vec<Shape>>;

    /// Label text broken along boundary lines.
    ///
    /// # Errors
    ///
    /// Returns an error when placement fails.
    fn line_break_text(&self, symbol: &Symbol) -> Result<Vec<Shape>>;
}

/// Plain geometric renditions without decorations or text.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicBuilders;

impl ShapeBuilders for BasicBuilders {
    fn change1_area(
        &self,
        symbol: &Symbol,
        anchors: &PointList,
        converter: &dyn PointConversion,
    ) -> Result<LineArrayOutput> {
        let DrawRule::ShapedArea(kind) = symbol.symbol_type.draw_rule() else {
            return Err(OperationError::Unsupported(format!(
                "{} is not a shaped area",
                symbol.symbol_type
            ))
            .into());
        };
        let shapes = ShapedArea::new(symbol, anchors, kind, converter).execute()?;
        Ok(LineArrayOutput {
            points: Some(outline_points(&shapes, converter)),
            shapes,
        })
    }

    fn metoc(&self, symbol: &Symbol, clip: Option<&Rect2>) -> Result<Vec<Shape>> {
        Ok(vec![open_line(&symbol.points.pixels(), clip)])
    }

    fn channel(
        &self,
        symbol: &Symbol,
        settings: &RendererSettings,
        clip: Option<&Rect2>,
    ) -> Result<LineArrayOutput> {
        let half = settings.channel_width * settings.dpi_scale() * 0.5;
        let pixels = symbol.points.pixels();
        let left = ParallelOffset::new(&pixels, half).execute()?;
        let right = ParallelOffset::new(&pixels, -half).execute()?;
        Ok(LineArrayOutput::shapes(vec![
            open_line(&left, clip),
            open_line(&right, clip),
        ]))
    }

    fn line_array(
        &self,
        symbol: &Symbol,
        clip: Option<&Rect2>,
        _converter: &dyn PointConversion,
    ) -> Result<LineArrayOutput> {
        let mut pixels = symbol.points.pixels();
        let shape = if symbol.symbol_type.draw_rule().is_closed() {
            if let Some(&first) = pixels.first() {
                if pixels.last() != Some(&first) {
                    pixels.push(first);
                }
            }
            Shape::area(pixels)
        } else {
            open_line(&pixels, clip)
        };
        Ok(LineArrayOutput::shapes(vec![shape]))
    }

    fn modifiers(&self, _symbol: &Symbol, _shapes: &[Shape]) -> Result<Vec<Shape>> {
        Ok(Vec::new())
    }

    fn line_break_text(&self, _symbol: &Symbol) -> Result<Vec<Shape>> {
        Ok(Vec::new())
    }
}

/// Polyline, clipped to `clip` when given.
fn open_line(pixels: &[Point2], clip: Option<&Rect2>) -> Shape {
    let mut shape = Shape::new(ShapeKind::Polyline);
    shape.rings = match clip {
        Some(rect) => clip_polyline_to_rect(pixels, &rect.min, &rect.max),
        None => vec![pixels.to_vec()],
    };
    shape
}
