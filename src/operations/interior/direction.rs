use crate::math::line_2d::{left_normal, unit_direction, Direction};
use crate::math::polygon_2d::point_in_polygon;
use crate::math::Point2;
use crate::symbol::SymbolType;

/// Decides which side of a polygon edge faces the polygon's interior.
pub trait DirectionClassifier {
    fn inside_direction(
        &self,
        a: &Point2,
        b: &Point2,
        polygon: &[Point2],
        symbol_type: SymbolType,
    ) -> Direction;
}

/// Probes a point just off the edge midpoint and tests it against the polygon.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonInterior;

impl DirectionClassifier for PolygonInterior {
    fn inside_direction(
        &self,
        a: &Point2,
        b: &Point2,
        polygon: &[Point2],
        _symbol_type: SymbolType,
    ) -> Direction {
        let Ok(dir) = unit_direction(a, b) else {
            return Direction::Below;
        };
        let normal = left_normal(&dir);
        let probe_len = ((b - a).norm() * 1e-3).max(1e-6);
        let probe = nalgebra::center(a, b) + normal * probe_len;
        let side = if point_in_polygon(&probe, polygon) {
            normal
        } else {
            -normal
        };
        Direction::of_vector(&side)
    }
}
