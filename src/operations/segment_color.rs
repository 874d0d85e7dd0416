use crate::geometry::{Color, Shape, ShapeKind, Stroke};
use crate::math::distance_2d::distance;
use crate::symbol::{SegmentColors, Symbol};

/// Interior default-colored points closer than this to the last drawn
/// point are skipped (except the final point of the line).
const DEFAULT_RUN_MIN_SPACING: f64 = 10.0;

/// A segment `start`→`start + 1` assigned to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRef {
    pub start: usize,
    /// Uncolored segment adjacent to a colored one.
    pub boundary: bool,
}

/// Segments drawn with one color; `color == None` is the default group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentGroup {
    pub color: Option<Color>,
    pub segments: Vec<SegmentRef>,
}

impl SegmentGroup {
    fn new(color: Option<Color>) -> Self {
        Self {
            color,
            segments: Vec::new(),
        }
    }
}

/// Assigns each of the `point_count - 1` segments to exactly one group.
///
/// Colored groups are emitted in the order their color runs end; a color
/// change closes the previous group. The default group always comes last.
#[must_use]
pub fn partition_segments(point_count: usize, colors: &SegmentColors) -> Vec<SegmentGroup> {
    let mut groups = Vec::new();
    let mut active: Option<SegmentGroup> = None;
    let mut default = SegmentGroup::new(None);

    for j in 0..point_count.saturating_sub(1) {
        if let Some(color) = colors.get(j) {
            if active.as_ref().is_some_and(|g| g.color != Some(color)) {
                groups.extend(active.take());
            }
            active
                .get_or_insert_with(|| SegmentGroup::new(Some(color)))
                .segments
                .push(SegmentRef {
                    start: j,
                    boundary: false,
                });
        } else {
            let boundary = colors.contains(j + 1) || (j > 0 && colors.contains(j - 1));
            default.segments.push(SegmentRef { start: j, boundary });
        }
    }

    groups.extend(active);
    groups.push(default);
    groups
}

/// Splits a route line (MSR/ASR/ROUTE) into one polyline per color run
/// plus a default-colored polyline.
pub struct BuildSegmentShapes<'a> {
    symbol: &'a Symbol,
    colors: &'a SegmentColors,
}

impl<'a> BuildSegmentShapes<'a> {
    #[must_use]
    pub fn new(symbol: &'a Symbol, colors: &'a SegmentColors) -> Self {
        Self { symbol, colors }
    }

    /// Executes the split. Shapes carry their final stroke and color.
    #[must_use]
    pub fn execute(&self) -> Vec<Shape> {
        let pixels = self.symbol.points.pixels();
        partition_segments(pixels.len(), self.colors)
            .into_iter()
            .map(|group| self.group_shape(&group, &pixels))
            .collect()
    }

    fn group_shape(&self, group: &SegmentGroup, pixels: &[crate::math::Point2]) -> Shape {
        let last_point = pixels.len().saturating_sub(1);
        let mut shape = Shape::new(ShapeKind::Polyline);
        let mut last_index = None;

        for seg in &group.segments {
            let end = seg.start + 1;
            if last_index != Some(seg.start) {
                shape.move_to(pixels[seg.start]);
            }
            let keep = group.color.is_some()
                || seg.boundary
                || end == last_point
                || shape
                    .current_point()
                    .is_none_or(|p| distance(&p, &pixels[end]) >= DEFAULT_RUN_MIN_SPACING);
            if keep {
                shape.line_to(pixels[end]);
            }
            last_index = Some(end);
        }

        shape.line_color = group.color.or(self.symbol.line_color);
        let width = self.symbol.line_thickness;
        shape.stroke = Stroke {
            dash: self.symbol.line_style.dash_array(width),
            ..Stroke::solid(width)
        };
        shape
    }
}
