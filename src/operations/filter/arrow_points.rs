use crate::convert::PointConversion;
use crate::error::Result;
use crate::geometry::TacPoint;
use crate::math::line_2d::extend_along;
use crate::symbol::Symbol;

/// Tail points closer than this to the previous kept point are dropped.
const TAIL_MIN_SPACING: f64 = 5.0;

/// Makes the arrowhead control vector of fixed-shape arrows long enough.
///
/// When the first two points are closer than `min_length`, a new second
/// point is synthesized `min_length` away from the anchor along the
/// original direction, following points still too close to the anchor are
/// skipped, and the tail is re-spaced. A pinned second point is left alone.
#[derive(Debug, Clone, Copy)]
pub struct RebuildArrowControlPoints {
    min_length: f64,
}

impl RebuildArrowControlPoints {
    #[must_use]
    pub fn new(min_length: f64) -> Self {
        Self { min_length }
    }

    /// Executes the rebuild in place. Returns `true` if points were changed.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if every point coincides with the
    /// anchor, leaving no direction to extend along.
    pub fn execute(&self, symbol: &mut Symbol, converter: &dyn PointConversion) -> Result<bool> {
        if !symbol.symbol_type.is_fixed_arrow() {
            return Ok(false);
        }
        let input = symbol.points.as_slice();
        if input.len() < 2 {
            return Ok(false);
        }
        let anchor = input[0];
        if input[1].is_pinned() || anchor.pixel_distance(&input[1]) >= self.min_length {
            return Ok(false);
        }

        // Extend along the original line; a coincident second point borrows
        // the direction of the first distinct later point.
        let through = input[1..]
            .iter()
            .find(|p| anchor.pixel_distance(p) > 0.0)
            .map_or(input[1].pixel, |p| p.pixel);
        let pixel = extend_along(&anchor.pixel, &through, self.min_length)?;
        let control = TacPoint::new(pixel, converter.pixels_to_geo(&pixel));

        let mut rebuilt = vec![anchor, control];
        let rest = input[2..]
            .iter()
            .skip_while(|p| !p.is_pinned() && anchor.pixel_distance(p) < self.min_length);
        for point in rest {
            let too_close = rebuilt
                .last()
                .is_some_and(|last| last.pixel_distance(point) < TAIL_MIN_SPACING);
            if !too_close || point.is_pinned() {
                rebuilt.push(*point);
            }
        }

        tracing::debug!(
            symbol = %symbol.symbol_type,
            before = input.len(),
            after = rebuilt.len(),
            "rebuilt arrow control points"
        );
        symbol.points = rebuilt.into();
        Ok(true)
    }
}
