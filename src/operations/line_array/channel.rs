use crate::error::{OperationError, Result};
use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::line_2d::{left_normal, unit_direction};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Below this cosine between consecutive segments (a near reversal) the
/// corner gets a flat cap instead of a miter.
const FLAT_CAP_COS: f64 = -0.98;

/// Maximum miter length as a multiple of `|distance|` before beveling.
const MITER_LIMIT: f64 = 4.0;

/// One-sided parallel offset of an open polyline.
///
/// Positive distances offset to the left of the walking direction, which
/// is upwards on screen for a line drawn left to right.
#[derive(Debug)]
pub struct ParallelOffset<'a> {
    points: &'a [Point2],
    distance: f64,
}

impl<'a> ParallelOffset<'a> {
    #[must_use]
    pub fn new(points: &'a [Point2], distance: f64) -> Self {
        Self { points, distance }
    }

    /// Executes the offset.
    ///
    /// Coincident consecutive points are skipped. Corners are mitered, and
    /// beveled beyond the miter limit.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than 2 distinct
    /// points remain.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let mut distinct: Vec<Point2> = Vec::with_capacity(self.points.len());
        for p in self.points {
            if distinct.last().is_none_or(|last| (p - last).norm() >= TOLERANCE) {
                distinct.push(*p);
            }
        }
        if distinct.len() < 2 {
            return Err(OperationError::InvalidInput(
                "at least 2 distinct points are required for a parallel offset".to_owned(),
            )
            .into());
        }
        if self.distance.abs() < TOLERANCE {
            return Ok(distinct);
        }

        let mut segments = Vec::with_capacity(distinct.len() - 1);
        let mut directions = Vec::with_capacity(distinct.len() - 1);
        for pair in distinct.windows(2) {
            let dir = unit_direction(&pair[0], &pair[1])?;
            // Screen y grows downwards, so the visual left is the negated math normal.
            let shift = -left_normal(&dir) * self.distance;
            segments.push((pair[0] + shift, pair[1] + shift));
            directions.push(dir);
        }

        let mut out = Vec::with_capacity(distinct.len() * 2);
        out.push(segments[0].0);
        for i in 1..segments.len() {
            self.push_corner(
                &mut out,
                &segments[i - 1],
                &segments[i],
                &directions[i - 1],
                &directions[i],
                &distinct[i],
            );
        }
        if let Some(last) = segments.last() {
            out.push(last.1);
        }
        Ok(out)
    }

    fn push_corner(
        &self,
        out: &mut Vec<Point2>,
        prev: &(Point2, Point2),
        next: &(Point2, Point2),
        dir_prev: &Vector2,
        dir_next: &Vector2,
        corner: &Point2,
    ) {
        if dir_prev.dot(dir_next) < FLAT_CAP_COS {
            out.extend([prev.1, next.0]);
            return;
        }
        let d_prev = prev.1 - prev.0;
        let d_next = next.1 - next.0;
        let Some((t, _)) = line_line_intersect_2d(&prev.1, &d_prev, &next.0, &d_next) else {
            // Parallel: both offset segments meet at the shifted corner.
            out.push(prev.1);
            return;
        };
        let miter = point_at(&prev.1, &d_prev, t);
        if (miter - corner).norm() > MITER_LIMIT * self.distance.abs() {
            out.extend([prev.1, next.0]);
        } else {
            out.push(miter);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn straight_line_shifts_up_on_screen() {
        let pts = [Point2::new(0.0, 50.0), Point2::new(100.0, 50.0)];
        let left = ParallelOffset::new(&pts, 10.0).execute().unwrap();
        assert_eq!(left.len(), 2);
        assert_abs_diff_eq!(left[0].y, 40.0, epsilon = 1e-9);
        let right = ParallelOffset::new(&pts, -10.0).execute().unwrap();
        assert_abs_diff_eq!(right[1].y, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn right_angle_gets_a_miter() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 100.0),
        ];
        let out = ParallelOffset::new(&pts, -10.0).execute().unwrap();
        assert_eq!(out.len(), 3);
        assert_abs_diff_eq!(out[1].x, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out[1].y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn sharp_turn_is_beveled() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(0.0, 5.0),
        ];
        let out = ParallelOffset::new(&pts, 10.0).execute().unwrap();
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn collinear_vertex_and_duplicates() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(50.0, 0.0),
            Point2::new(100.0, 0.0),
        ];
        let out = ParallelOffset::new(&pts, 5.0).execute().unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|p| (p.y + 5.0).abs() < 1e-9));
    }

    #[test]
    fn single_point_is_rejected() {
        let pts = [Point2::new(1.0, 1.0), Point2::new(1.0, 1.0)];
        assert!(ParallelOffset::new(&pts, 5.0).execute().is_err());
    }
}
