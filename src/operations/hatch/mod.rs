mod lattice;
mod params;
mod tile;

pub use lattice::HatchLattice;
pub use params::HatchParams;
pub use tile::hatch_tile;

use crate::config::RendererSettings;
use crate::geometry::{FillStyle, Rect2, Shape, ShapeKind, Stroke};
use crate::math::clip_2d::clip_segment_to_rings;
use crate::math::polygon_2d::point_in_rings;
use crate::math::Point2;
use crate::symbol::{Symbol, SymbolType};

use super::interior::{InteriorPoints, PolygonInterior};

/// Adds hatch fill geometry for areas whose fill style is a hatch.
///
/// The target is the first shape carrying the symbol's effective hatch
/// style. Range-fan symbols hatch every shape by that shape's own style.
pub struct BuildHatchFills<'a> {
    symbol: &'a Symbol,
    settings: &'a RendererSettings,
}

impl<'a> BuildHatchFills<'a> {
    #[must_use]
    pub fn new(symbol: &'a Symbol, settings: &'a RendererSettings) -> Self {
        Self { symbol, settings }
    }

    /// Appends hatch shapes to `shapes`, or attaches a tile in tile mode.
    ///
    /// Returns the number of hatch shapes (or tiles) produced.
    pub fn execute(&self, shapes: &mut Vec<Shape>) -> usize {
        let params = HatchParams::resolve(self.symbol, self.settings);
        let per_shape = self.symbol.symbol_type.is_range_fan_family();
        if !per_shape && !params.style.is_hatch() {
            return 0;
        }

        let existing = shapes.len();
        let produced = if self.settings.hatch_tile_mode {
            self.attach_tile(shapes, &params)
        } else {
            let hatches = self.lattice_shapes(shapes, &params);
            let n = hatches.len();
            shapes.extend(hatches);
            n
        };

        if params.remove_black_outlines {
            let hatches = shapes.split_off(existing);
            shapes.retain(|s| s.line_color.is_none_or(|c| c.rgb_value() != 0));
            shapes.extend(hatches);
        }

        tracing::debug!(
            component = "hatch",
            method = "execute",
            symbol = %self.symbol.symbol_type,
            style = ?params.style,
            produced,
            "hatch fill built"
        );
        produced
    }

    fn target_style(&self, shape: &Shape, params: &HatchParams) -> Option<FillStyle> {
        if self.symbol.symbol_type.is_range_fan_family() {
            shape.fill_style.is_hatch().then_some(shape.fill_style)
        } else {
            (shape.fill_style == params.style).then_some(params.style)
        }
    }

    fn attach_tile(&self, shapes: &mut [Shape], params: &HatchParams) -> usize {
        for shape in shapes.iter_mut() {
            let Some(style) = self.target_style(shape, params) else {
                continue;
            };
            shape.pattern = hatch_tile(&HatchParams { style, ..*params });
            return usize::from(shape.pattern.is_some());
        }
        0
    }

    fn lattice_shapes(&self, shapes: &[Shape], params: &HatchParams) -> Vec<Shape> {
        let per_shape = self.symbol.symbol_type.is_range_fan_family();
        let mut hatches = Vec::new();
        for shape in shapes {
            let Some(style) = self.target_style(shape, params) else {
                continue;
            };
            hatches.extend(hatch_shape(shape, style, params, self.symbol.symbol_type));
            if !per_shape {
                break;
            }
        }
        hatches
    }
}

/// Rings the lattice is clipped to: single-ring areas are inset by half
/// their stroke so hatching stops at the inner edge of the outline.
///
/// An inset that leaves the outline (thick strokes at sharp corners fold
/// the ring over itself) is discarded in favor of the outline.
fn hatch_rings(shape: &Shape, symbol_type: SymbolType) -> Vec<Vec<Point2>> {
    let half_stroke = shape.stroke.width * 0.5;
    match shape.rings.as_slice() {
        [ring] if ring.len() >= 3 && half_stroke > 0.0 => {
            match InteriorPoints::new(ring.clone(), symbol_type, half_stroke, &PolygonInterior)
                .execute()
            {
                Ok(inner) if inner.iter().all(|p| point_in_rings(p, &shape.rings)) => vec![inner],
                Ok(_) => {
                    tracing::debug!(
                        component = "hatch",
                        method = "hatch_rings",
                        "inset leaves the outline, using outline as hatch boundary"
                    );
                    shape.rings.clone()
                }
                Err(err) => {
                    tracing::debug!(
                        component = "hatch",
                        method = "hatch_rings",
                        %err,
                        "using outline as hatch boundary"
                    );
                    shape.rings.clone()
                }
            }
        }
        _ => shape.rings.clone(),
    }
}

/// Hatch polylines for one area; `Cross` yields a backward and a forward shape.
fn hatch_shape(
    shape: &Shape,
    style: FillStyle,
    params: &HatchParams,
    symbol_type: SymbolType,
) -> Vec<Shape> {
    let Some(bounds) = Rect2::bounding(shape.points()) else {
        return Vec::new();
    };
    let orientations: &[FillStyle] = match style {
        FillStyle::Cross => &[FillStyle::BackwardDiagonal, FillStyle::ForwardDiagonal],
        FillStyle::ForwardDiagonal => &[FillStyle::ForwardDiagonal],
        FillStyle::BackwardDiagonal => &[FillStyle::BackwardDiagonal],
        FillStyle::Vertical => &[FillStyle::Vertical],
        FillStyle::Horizontal => &[FillStyle::Horizontal],
        FillStyle::None | FillStyle::Solid => &[],
    };
    let rings = hatch_rings(shape, symbol_type);

    orientations
        .iter()
        .filter_map(|&o| HatchLattice::new(bounds, params.spacing, o))
        .map(|lattice| within_outline(&lattice.clip_to(&rings), &shape.rings))
        .filter(|runs| !runs.is_empty())
        .map(|runs| Shape {
            rings: runs,
            line_color: Some(params.color),
            stroke: Stroke::solid(params.width),
            ..Shape::new(ShapeKind::Polyline)
        })
        .collect()
}

/// Trims hatch runs to the original outline.
fn within_outline(runs: &[Vec<Point2>], outline: &[Vec<Point2>]) -> Vec<Vec<Point2>> {
    runs.iter()
        .flat_map(|run| run.windows(2))
        .flat_map(|w| clip_segment_to_rings(&w[0], &w[1], outline))
        .map(|(a, b)| vec![a, b])
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Color, PointList};

    fn square_area(fill: FillStyle, color: Color) -> Shape {
        let mut shape = Shape::area(vec![
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 100.0),
            Point2::new(0.0, 100.0),
            Point2::new(0.0, 0.0),
        ]);
        shape.fill_style = fill;
        shape.line_color = Some(color);
        shape
    }

    fn symbol(t: SymbolType, fill: FillStyle) -> Symbol {
        let mut s = Symbol::new(t, PointList::default());
        s.fill_style = fill;
        s
    }

    #[test]
    fn hatch_lines_stay_inside_area() {
        let s = symbol(SymbolType::GeneralArea, FillStyle::ForwardDiagonal);
        let settings = RendererSettings::default();
        let mut shapes = vec![square_area(FillStyle::ForwardDiagonal, Color::BLACK)];
        let n = BuildHatchFills::new(&s, &settings).execute(&mut shapes);
        assert_eq!(n, 1);
        let hatch = &shapes[1];
        assert!(!hatch.rings.is_empty());
        let area = &shapes[0].rings;
        for run in &hatch.rings {
            let mid = Point2::from((run[0].coords + run[1].coords) * 0.5);
            assert!(point_in_rings(&mid, area));
            for p in run {
                assert!((-1e-9..=100.0 + 1e-9).contains(&p.x));
                assert!((-1e-9..=100.0 + 1e-9).contains(&p.y));
            }
        }
    }

    #[test]
    fn wfz_hatch_is_gray_and_dense() {
        let s = symbol(SymbolType::Wfz, FillStyle::None);
        let settings = RendererSettings::default();
        let mut shapes = vec![square_area(FillStyle::BackwardDiagonal, Color::BLACK)];
        BuildHatchFills::new(&s, &settings).execute(&mut shapes);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[1].line_color, Some(Color::GRAY));

        let mut sparse = vec![square_area(FillStyle::BackwardDiagonal, Color::BLACK)];
        let plain = symbol(SymbolType::Nfa, FillStyle::None);
        BuildHatchFills::new(&plain, &settings).execute(&mut sparse);
        assert!(shapes[1].rings.len() > sparse[1].rings.len());
    }

    #[test]
    fn cross_yields_two_shapes() {
        let s = symbol(SymbolType::GeneralArea, FillStyle::Cross);
        let mut shapes = vec![square_area(FillStyle::Cross, Color::BLACK)];
        let n = BuildHatchFills::new(&s, &RendererSettings::default()).execute(&mut shapes);
        assert_eq!(n, 2);
        assert_eq!(shapes.len(), 3);
    }

    #[test]
    fn obsarea_drops_black_outline() {
        let s = symbol(SymbolType::ObsArea, FillStyle::None);
        let mut shapes = vec![square_area(FillStyle::BackwardDiagonal, Color::BLACK)];
        BuildHatchFills::new(&s, &RendererSettings::default()).execute(&mut shapes);
        assert!(shapes.iter().all(|sh| sh.kind == ShapeKind::Polyline));
        assert!(!shapes.is_empty());
    }

    #[test]
    fn obsarea_drops_black_polyline_but_keeps_colored_area() {
        let s = symbol(SymbolType::ObsArea, FillStyle::None);
        let black_line = Shape {
            line_color: Some(Color::BLACK),
            ..Shape::polyline(vec![Point2::new(0.0, 0.0), Point2::new(100.0, 100.0)])
        };
        let mut shapes = vec![square_area(FillStyle::BackwardDiagonal, Color::BLUE), black_line];
        let n = BuildHatchFills::new(&s, &RendererSettings::default()).execute(&mut shapes);

        assert_eq!(n, 1);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].kind, ShapeKind::FilledArea);
        assert_eq!(shapes[0].line_color, Some(Color::BLUE));
        // The remaining polyline is the hatch (still black), not the outline.
        assert_eq!(shapes[1].kind, ShapeKind::Polyline);
        assert!(shapes[1].rings.len() > 1);
    }

    #[test]
    fn thick_stroke_on_acute_triangle_stays_inside() {
        let s = symbol(SymbolType::GeneralArea, FillStyle::Vertical);
        let mut triangle = Shape::area(vec![
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 1.5),
            Point2::new(100.0, -1.5),
            Point2::new(0.0, 0.0),
        ]);
        triangle.fill_style = FillStyle::Vertical;
        triangle.stroke = Stroke::solid(8.0);
        let mut shapes = vec![triangle];
        let n = BuildHatchFills::new(&s, &RendererSettings::default()).execute(&mut shapes);

        assert_eq!(n, 1);
        let hatch = &shapes[1];
        assert!(!hatch.rings.is_empty());
        for p in hatch.points() {
            assert!((-1e-9..=100.0 + 1e-9).contains(&p.x));
            assert!(p.y.abs() <= 1.5 * p.x / 100.0 + 1e-9);
        }
    }

    #[test]
    fn range_fan_hatches_each_shape_by_own_style() {
        let s = symbol(SymbolType::RangeFanArea, FillStyle::None);
        let mut shapes = vec![
            square_area(FillStyle::Vertical, Color::BLACK),
            square_area(FillStyle::None, Color::BLACK),
            square_area(FillStyle::Horizontal, Color::BLACK),
        ];
        let n = BuildHatchFills::new(&s, &RendererSettings::default()).execute(&mut shapes);
        assert_eq!(n, 2);
    }

    #[test]
    fn tile_mode_attaches_pattern_only() {
        let s = symbol(SymbolType::GeneralArea, FillStyle::Horizontal);
        let settings = RendererSettings {
            hatch_tile_mode: true,
            ..RendererSettings::default()
        };
        let mut shapes = vec![square_area(FillStyle::Horizontal, Color::RED)];
        let n = BuildHatchFills::new(&s, &settings).execute(&mut shapes);
        assert_eq!(n, 1);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].pattern.as_ref().unwrap().style, FillStyle::Horizontal);
    }

    #[test]
    fn unhatched_symbol_is_untouched() {
        let s = symbol(SymbolType::GeneralArea, FillStyle::Solid);
        let mut shapes = vec![square_area(FillStyle::Solid, Color::BLACK)];
        assert_eq!(BuildHatchFills::new(&s, &RendererSettings::default()).execute(&mut shapes), 0);
        assert_eq!(shapes.len(), 1);
    }
}
