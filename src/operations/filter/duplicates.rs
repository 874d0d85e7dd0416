use crate::symbol::Symbol;

/// Points closer than this are considered duplicates.
const DUPLICATE_DISTANCE: f64 = 0.5;

/// Collapses consecutive near-coincident control points.
///
/// Never shrinks a closed symbol below 3 points or an open one below 2,
/// and never removes a pinned point. Fixed-shape arrows and multi-colored
/// routes are left alone: their coincident-looking points carry meaning.
#[derive(Debug, Clone, Copy)]
pub struct RemoveDuplicatePoints {
    tolerance: f64,
}

impl Default for RemoveDuplicatePoints {
    fn default() -> Self {
        Self {
            tolerance: DUPLICATE_DISTANCE,
        }
    }
}

impl RemoveDuplicatePoints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this filter runs for the given symbol at all.
    #[must_use]
    pub fn applies_to(symbol: &Symbol) -> bool {
        !symbol.symbol_type.is_fixed_arrow() && symbol.segment_color_tokens() <= 1
    }

    /// Executes the filter in place, returning the number of removed points.
    pub fn execute(&self, symbol: &mut Symbol) -> usize {
        if !Self::applies_to(symbol) {
            return 0;
        }
        let min_points = if symbol.symbol_type.draw_rule().is_closed() {
            3
        } else {
            2
        };

        let mut points = symbol.points.as_slice().to_vec();
        let mut removed = 0;
        let mut i = 0;
        while i + 1 < points.len() && points.len() > min_points {
            if points[i].pixel_distance(&points[i + 1]) >= self.tolerance {
                i += 1;
            } else if !points[i + 1].is_pinned() {
                points.remove(i + 1);
                removed += 1;
            } else if !points[i].is_pinned() {
                points.remove(i);
                removed += 1;
                i = i.saturating_sub(1);
            } else {
                i += 1;
            }
        }

        if removed > 0 {
            tracing::debug!(symbol = %symbol.symbol_type, removed, "removed duplicate points");
            symbol.points = points.into();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{PointList, TacPoint};
    use crate::math::Point2;
    use crate::symbol::SymbolType;

    fn symbol(symbol_type: SymbolType, coords: &[(f64, f64)]) -> Symbol {
        let points = coords
            .iter()
            .map(|&(x, y)| TacPoint::new(Point2::new(x, y), Point2::new(x / 10.0, y / 10.0)))
            .collect::<Vec<_>>();
        Symbol::new(symbol_type, PointList::new(points))
    }

    #[test]
    fn collapses_one_coincident_pair_in_polygon() {
        let mut s = symbol(
            SymbolType::GeneralArea,
            &[
                (0.0, 0.0),
                (50.0, 0.0),
                (100.0, 0.0),
                (100.1, 0.0),
                (100.0, 100.0),
                (0.0, 100.0),
            ],
        );
        let removed = RemoveDuplicatePoints::new().execute(&mut s);
        assert_eq!(removed, 1);
        assert_eq!(s.points.len(), 5);
        assert_eq!(s.points.pixels().len(), s.points.geos().len());
    }

    #[test]
    fn never_below_three_for_closed() {
        let mut s = symbol(SymbolType::GeneralArea, &[(1.0, 1.0); 6]);
        RemoveDuplicatePoints::new().execute(&mut s);
        assert_eq!(s.points.len(), 3);
    }

    #[test]
    fn never_below_two_for_open() {
        let mut s = symbol(SymbolType::GeneralLine, &[(1.0, 1.0); 5]);
        RemoveDuplicatePoints::new().execute(&mut s);
        assert_eq!(s.points.len(), 2);
    }

    #[test]
    fn keeps_pinned_point() {
        let mut s = symbol(SymbolType::GeneralLine, &[(0.0, 0.0), (10.0, 0.0), (10.2, 0.0), (20.0, 0.0)]);
        let mut points = s.points.clone().into_vec();
        points[2] = points[2].pinned();
        s.points = points.into();
        RemoveDuplicatePoints::new().execute(&mut s);
        assert_eq!(s.points.len(), 3);
        assert!(s.points.get(1).is_some_and(TacPoint::is_pinned));
        assert_eq!(s.points.get(1).map(|p| p.pixel), Some(Point2::new(10.2, 0.0)));
    }

    #[test]
    fn skips_fixed_arrows_and_multicolor_routes() {
        let mut arrow = symbol(SymbolType::Catk, &[(0.0, 0.0), (0.1, 0.0), (50.0, 0.0)]);
        assert_eq!(RemoveDuplicatePoints::new().execute(&mut arrow), 0);

        let mut route = symbol(SymbolType::Msr, &[(0.0, 0.0), (0.1, 0.0), (50.0, 0.0)]);
        route.segment_colors = Some("0:FF0000,1:0000FF".to_owned());
        assert_eq!(RemoveDuplicatePoints::new().execute(&mut route), 0);

        route.segment_colors = Some("0:FF0000".to_owned());
        assert_eq!(RemoveDuplicatePoints::new().execute(&mut route), 1);
    }
}
