use crate::geometry::{Shape, ShapeKind};
use crate::math::Point2;
use crate::symbol::{Symbol, SymbolType};

/// Point indices of the fill ring, before closing back to index 0.
fn fill_indices(symbol_type: SymbolType) -> Option<Vec<usize>> {
    match symbol_type {
        SymbolType::Retain | SymbolType::Secure | SymbolType::Occupy => Some((0..=25).collect()),
        SymbolType::CordonSearch | SymbolType::CordonKnock | SymbolType::Isolate => {
            Some((26..=46).chain(23..=25).collect())
        }
        SymbolType::Convoy | SymbolType::Hconvoy => Some((0..=3).collect()),
        _ => None,
    }
}

/// Replaces the fill of autoshape symbols with one purpose-built area.
///
/// Fill is stripped from every existing shape and the new area, built from
/// a fixed index range of the final points, is inserted first so it paints
/// underneath the outline.
pub struct AttachAutoshapeFill<'a> {
    symbol: &'a Symbol,
}

impl<'a> AttachAutoshapeFill<'a> {
    #[must_use]
    pub fn new(symbol: &'a Symbol) -> Self {
        Self { symbol }
    }

    /// Returns `true` when a fill shape was inserted.
    pub fn execute(&self, shapes: &mut Vec<Shape>) -> bool {
        let Some(indices) = fill_indices(self.symbol.symbol_type) else {
            return false;
        };
        let Some(fill_color) = self.symbol.fill_color else {
            return false;
        };

        let points = &self.symbol.points;
        let mut ring: Vec<Point2> = indices
            .iter()
            .filter_map(|&i| points.get(i).map(|p| p.pixel))
            .collect();
        if ring.len() < 3 {
            tracing::debug!(
                component = "autoshape",
                method = "execute",
                symbol = %self.symbol.symbol_type,
                available = points.len(),
                "not enough points for autoshape fill"
            );
            return false;
        }
        if let Some(first) = points.first() {
            ring.push(first.pixel);
        }

        for shape in shapes.iter_mut() {
            shape.fill_color = None;
        }
        shapes.insert(
            0,
            Shape {
                fill_color: Some(fill_color),
                ..Shape::area(ring)
            },
        );
        debug_assert_eq!(shapes[0].kind, ShapeKind::FilledArea);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Color, PointList, TacPoint};

    fn symbol(t: SymbolType, n: usize) -> Symbol {
        let points = (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let x = i as f64;
                TacPoint::new(Point2::new(x, x * x), Point2::new(x, 0.0))
            })
            .collect::<Vec<_>>();
        let mut s = Symbol::new(t, PointList::new(points));
        s.fill_color = Some(Color::RED);
        s
    }

    fn outline(color: Color) -> Shape {
        Shape {
            fill_color: Some(color),
            ..Shape::polyline(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)])
        }
    }

    #[test]
    fn retain_fill_goes_first() {
        let s = symbol(SymbolType::Retain, 30);
        let mut shapes = vec![outline(Color::BLUE), outline(Color::RED)];
        assert!(AttachAutoshapeFill::new(&s).execute(&mut shapes));

        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0].kind, ShapeKind::FilledArea);
        assert_eq!(shapes[0].fill_color, Some(Color::RED));
        let ring = &shapes[0].rings[0];
        assert_eq!(ring.len(), 27);
        assert_eq!(ring[25], s.points.pixels()[25]);
        assert_eq!(ring[26], ring[0]);
        assert!(shapes[1..].iter().all(|sh| sh.fill_color.is_none()));
    }

    #[test]
    fn cordon_uses_wrapped_index_plan() {
        let s = symbol(SymbolType::CordonSearch, 47);
        let mut shapes = vec![outline(Color::BLUE)];
        assert!(AttachAutoshapeFill::new(&s).execute(&mut shapes));
        let ring = &shapes[0].rings[0];
        let pixels = s.points.pixels();
        assert_eq!(ring.len(), 21 + 3 + 1);
        assert_eq!(ring[0], pixels[26]);
        assert_eq!(ring[20], pixels[46]);
        assert_eq!(ring[21], pixels[23]);
        assert_eq!(ring[23], pixels[25]);
        assert_eq!(ring[24], pixels[0]);
    }

    #[test]
    fn secure_and_occupy_share_the_retain_plan() {
        for t in [SymbolType::Secure, SymbolType::Occupy] {
            let s = symbol(t, 26);
            let mut shapes = vec![outline(Color::BLUE)];
            assert!(AttachAutoshapeFill::new(&s).execute(&mut shapes), "{t}");

            assert_eq!(shapes.len(), 2);
            assert_eq!(shapes[0].kind, ShapeKind::FilledArea);
            assert_eq!(shapes[0].fill_color, Some(Color::RED));
            let pixels = s.points.pixels();
            let mut expected = pixels.clone();
            expected.push(pixels[0]);
            assert_eq!(shapes[0].rings[0], expected);
            assert_eq!(shapes[1].fill_color, None);
        }
    }

    #[test]
    fn convoy_fills_the_first_four_points() {
        for t in [SymbolType::Convoy, SymbolType::Hconvoy] {
            let s = symbol(t, 7);
            let mut shapes = vec![outline(Color::BLUE), outline(Color::YELLOW)];
            assert!(AttachAutoshapeFill::new(&s).execute(&mut shapes), "{t}");

            assert_eq!(shapes.len(), 3);
            assert_eq!(shapes[0].kind, ShapeKind::FilledArea);
            let pixels = s.points.pixels();
            assert_eq!(
                shapes[0].rings[0],
                vec![pixels[0], pixels[1], pixels[2], pixels[3], pixels[0]]
            );
            assert!(shapes[1..].iter().all(|sh| sh.fill_color.is_none()));
        }
    }

    #[test]
    fn other_types_are_untouched() {
        let s = symbol(SymbolType::GeneralArea, 30);
        let mut shapes = vec![outline(Color::BLUE)];
        assert!(!AttachAutoshapeFill::new(&s).execute(&mut shapes));
        assert_eq!(shapes, vec![outline(Color::BLUE)]);
    }

    #[test]
    fn too_few_points_is_a_no_op() {
        let s = symbol(SymbolType::Isolate, 20);
        let mut shapes = vec![outline(Color::BLUE)];
        assert!(!AttachAutoshapeFill::new(&s).execute(&mut shapes));
        assert_eq!(shapes[0].fill_color, Some(Color::BLUE));
    }

    #[test]
    fn every_autoshape_has_an_index_plan() {
        for t in SymbolType::ALL {
            assert_eq!(t.is_autoshape(), fill_indices(*t).is_some(), "{t}");
        }
    }
}
