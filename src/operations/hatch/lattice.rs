use std::f64::consts::FRAC_1_SQRT_2;

use crate::geometry::{FillStyle, Rect2};
use crate::math::clip_2d::clip_segment_to_rings;
use crate::math::line_2d::left_normal;
use crate::math::{Point2, Vector2};

/// Upper bound on lattice lines per orientation.
const MAX_LINES: usize = 20_000;

/// Zig-zag hatch lattice for a single line orientation.
///
/// The lattice covers a square twice the size of the target's
/// squared bounding box and overshoots its corners, so that only the
/// hatch lines remain once it is intersected with the target area.
#[derive(Debug, Clone, Copy)]
pub struct HatchLattice {
    bounds: Rect2,
    spacing: f64,
    direction: Vector2,
}

impl HatchLattice {
    /// Returns the lattice for a single-orientation style; `None` for
    /// `Cross`, `Solid` and `None`.
    #[must_use]
    pub fn new(bounds: Rect2, spacing: f64, style: FillStyle) -> Option<Self> {
        let direction = match style {
            // Screen coordinates: y grows downwards.
            FillStyle::ForwardDiagonal => Vector2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            FillStyle::BackwardDiagonal => Vector2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            FillStyle::Vertical => Vector2::new(0.0, 1.0),
            FillStyle::Horizontal => Vector2::new(1.0, 0.0),
            FillStyle::None | FillStyle::Solid | FillStyle::Cross => return None,
        };
        Some(Self {
            bounds,
            spacing,
            direction,
        })
    }

    /// The lattice as one zig-zag polyline.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        clippy::cast_possible_wrap
    )]
    pub fn zigzag(&self) -> Vec<Point2> {
        let side = self.bounds.width().max(self.bounds.height());
        if self.spacing <= 0.0 || side <= 0.0 {
            return Vec::new();
        }
        let lattice = self.bounds.squared().grown(side * 0.5);
        let center = lattice.center();
        let half_diagonal = lattice.width() * FRAC_1_SQRT_2;
        let reach = half_diagonal + self.spacing;
        let count = ((half_diagonal / self.spacing).ceil() as usize).min(MAX_LINES / 2);
        let normal = left_normal(&self.direction);

        let mut path = Vec::with_capacity(4 * count + 2);
        for (n, k) in (-(count as i64)..=count as i64).enumerate() {
            let base = center + normal * (k as f64 * self.spacing);
            let a = base - self.direction * reach;
            let b = base + self.direction * reach;
            if n % 2 == 0 {
                path.extend([a, b]);
            } else {
                path.extend([b, a]);
            }
        }
        path
    }

    /// Intersects the lattice with an area given as even-odd rings.
    ///
    /// Each visible piece becomes a two-point run.
    #[must_use]
    pub fn clip_to(&self, rings: &[Vec<Point2>]) -> Vec<Vec<Point2>> {
        self.zigzag()
            .windows(2)
            .flat_map(|w| clip_segment_to_rings(&w[0], &w[1], rings))
            .map(|(a, b)| vec![a, b])
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rect() -> Rect2 {
        Rect2::new(0.0, 0.0, 100.0, 50.0)
    }

    #[test]
    fn cross_has_no_single_lattice() {
        assert!(HatchLattice::new(rect(), 10.0, FillStyle::Cross).is_none());
        assert!(HatchLattice::new(rect(), 10.0, FillStyle::None).is_none());
    }

    #[test]
    fn zigzag_overshoots_the_bounds() {
        let lattice = HatchLattice::new(rect(), 10.0, FillStyle::BackwardDiagonal).unwrap();
        let path = lattice.zigzag();
        assert!(!path.is_empty());
        let outer = Rect2::bounding(&path).unwrap();
        // Twice the squared box (200 wide) plus the overshoot.
        assert!(outer.width() > 200.0);
        assert!(outer.contains(&rect().min) && outer.contains(&rect().max));
    }

    #[test]
    fn vertical_lines_inside_square() {
        let ring = vec![vec![
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 100.0),
            Point2::new(0.0, 100.0),
        ]];
        let bounds = Rect2::bounding(&ring[0]).unwrap();
        let runs = HatchLattice::new(bounds, 10.0, FillStyle::Vertical)
            .unwrap()
            .clip_to(&ring);
        // Lines at x = 10, 20, ..., 90 cross the interior; x = 0 and 100 lie on the edges.
        assert!(runs.len() >= 9);
        for run in &runs {
            assert!((run[0].x - run[1].x).abs() < 1e-9, "run must be vertical");
            for p in run {
                assert!(bounds.grown(1e-9).contains(p));
            }
        }
    }

    #[test]
    fn degenerate_bounds_give_nothing() {
        let lattice =
            HatchLattice::new(Rect2::new(5.0, 5.0, 0.0, 0.0), 10.0, FillStyle::Horizontal).unwrap();
        assert!(lattice.zigzag().is_empty());
    }
}
