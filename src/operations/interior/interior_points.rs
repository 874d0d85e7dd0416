use crate::error::{GeometryError, Result};
use crate::math::distance_2d::slope;
use crate::math::intersect_2d::line_intersection;
use crate::math::line_2d::extend_directed;
use crate::math::polygon_2d::open_ring;
use crate::math::{Point2, TOLERANCE};
use crate::symbol::SymbolType;

use super::direction::DirectionClassifier;

/// Computes the inset boundary of a closed ring.
///
/// Every edge is shifted `offset` towards the interior and consecutive
/// shifted edges are intersected, giving one interior point per input
/// vertex in the same order.
pub struct InteriorPoints<'a> {
    points: Vec<Point2>,
    symbol_type: SymbolType,
    offset: f64,
    classifier: &'a dyn DirectionClassifier,
}

impl<'a> InteriorPoints<'a> {
    /// Creates a new interior-point computation.
    #[must_use]
    pub fn new(
        points: Vec<Point2>,
        symbol_type: SymbolType,
        offset: f64,
        classifier: &'a dyn DirectionClassifier,
    ) -> Self {
        Self {
            points,
            symbol_type,
            offset,
            classifier,
        }
    }

    /// Executes the computation.
    ///
    /// An explicitly closed ring (last point equal to the first) yields an
    /// explicitly closed result of the same length.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` for rings with fewer than 3 distinct vertices.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let ring = open_ring(&self.points);
        let n = ring.len();
        if n < 3 {
            return Err(GeometryError::TooFewPoints {
                required: 3,
                actual: n,
            }
            .into());
        }

        let mut interior = Vec::with_capacity(self.points.len());
        for i in 0..n {
            let prev = &ring[(i + n - 1) % n];
            let cur = &ring[i];
            let next = &ring[(i + 1) % n];
            interior.push(self.interior_vertex(ring, prev, cur, next));
        }
        if self.points.len() > n {
            interior.push(interior[0]);
        }
        Ok(interior)
    }

    /// Offsets the edges `prev`→`cur` and `cur`→`next` and intersects them.
    fn interior_vertex(&self, ring: &[Point2], prev: &Point2, cur: &Point2, next: &Point2) -> Point2 {
        let incoming = self.offset_edge(ring, prev, cur);
        let outgoing = self.offset_edge(ring, cur, next);

        match (incoming, outgoing) {
            (Some((a0, a1)), Some((b0, b1))) => {
                if is_collinear(prev, cur, next) {
                    a1
                } else {
                    line_intersection(&a0, &a1, &b0, &b1).unwrap_or(a1)
                }
            }
            (Some((_, a1)), None) => a1,
            (None, Some((b0, _))) => b0,
            (None, None) => *cur,
        }
    }

    /// Edge shifted towards the interior, `None` for zero-length edges.
    fn offset_edge(&self, ring: &[Point2], a: &Point2, b: &Point2) -> Option<(Point2, Point2)> {
        let direction = self.classifier.inside_direction(a, b, ring, self.symbol_type);
        let p0 = extend_directed(a, b, a, direction, self.offset).ok()?;
        let p1 = extend_directed(a, b, b, direction, self.offset).ok()?;
        Some((p0, p1))
    }
}

/// Three points on one vertical line, or two edges with identical slopes.
fn is_collinear(prev: &Point2, cur: &Point2, next: &Point2) -> bool {
    if (prev.x - cur.x).abs() < TOLERANCE && (cur.x - next.x).abs() < TOLERANCE {
        return true;
    }
    match (slope(prev, cur), slope(cur, next)) {
        (Some(m1), Some(m2)) => (m1 - m2).abs() < TOLERANCE,
        _ => false,
    }
}
