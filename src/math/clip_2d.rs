use super::intersect_2d::segment_segment_intersect_2d;
use super::polygon_2d::point_in_rings;
use super::{Point2, TOLERANCE};

/// Clips the segment `a`→`b` against an area given as even-odd rings.
///
/// Returns the pieces of the segment that lie inside the area, in order
/// along the segment. Touching pieces are merged.
#[must_use]
pub fn clip_segment_to_rings(a: &Point2, b: &Point2, rings: &[Vec<Point2>]) -> Vec<(Point2, Point2)> {
    let d = b - a;
    if d.norm() < TOLERANCE {
        return Vec::new();
    }

    // Collect crossing parameters along the segment.
    let mut params = vec![0.0, 1.0];
    for ring in rings {
        let n = ring.len();
        if n < 3 {
            continue;
        }
        for i in 0..n {
            let j = (i + 1) % n;
            if let Some((_, t, _)) = segment_segment_intersect_2d(a, b, &ring[i], &ring[j]) {
                params.push(t);
            }
        }
    }
    params.sort_by(f64::total_cmp);
    params.dedup_by(|x, y| (*x - *y).abs() < TOLERANCE);

    let mut pieces: Vec<(Point2, Point2)> = Vec::new();
    for pair in params.windows(2) {
        let (t0, t1) = (pair[0], pair[1]);
        let mid = a + d * ((t0 + t1) * 0.5);
        if !point_in_rings(&mid, rings) {
            continue;
        }
        let p0 = a + d * t0;
        let p1 = a + d * t1;
        match pieces.last_mut() {
            Some(last) if (last.1 - p0).norm() < TOLERANCE => last.1 = p1,
            _ => pieces.push((p0, p1)),
        }
    }
    pieces
}

/// Clips the segment `a`→`b` to the axis-aligned rectangle `min`..`max`
/// (Liang-Barsky). Returns `None` when the segment lies fully outside.
#[must_use]
pub fn clip_segment_to_rect(
    a: &Point2,
    b: &Point2,
    min: &Point2,
    max: &Point2,
) -> Option<(Point2, Point2)> {
    let d = b - a;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    let checks = [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ];
    for (p, q) in checks {
        if p.abs() < TOLERANCE {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((a + d * t0, a + d * t1))
}

/// Clips an open polyline to a rectangle, returning the visible runs.
#[must_use]
pub fn clip_polyline_to_rect(points: &[Point2], min: &Point2, max: &Point2) -> Vec<Vec<Point2>> {
    let mut runs: Vec<Vec<Point2>> = Vec::new();
    for pair in points.windows(2) {
        let Some((p0, p1)) = clip_segment_to_rect(&pair[0], &pair[1], min, max) else {
            continue;
        };
        match runs.last_mut() {
            Some(run) if run.last().is_some_and(|last| (last - p0).norm() < TOLERANCE) => {
                run.push(p1);
            }
            _ => runs.push(vec![p0, p1]),
        }
    }
    runs
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square(size: f64) -> Vec<Vec<Point2>> {
        vec![vec![
            Point2::new(0.0, 0.0),
            Point2::new(size, 0.0),
            Point2::new(size, size),
            Point2::new(0.0, size),
        ]]
    }

    #[test]
    fn segment_through_square_is_trimmed() {
        let pieces = clip_segment_to_rings(
            &Point2::new(-5.0, 5.0),
            &Point2::new(15.0, 5.0),
            &square(10.0),
        );
        assert_eq!(pieces.len(), 1);
        assert_abs_diff_eq!(pieces[0].0.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pieces[0].1.x, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn segment_outside_is_dropped() {
        let pieces = clip_segment_to_rings(
            &Point2::new(-5.0, -5.0),
            &Point2::new(-1.0, 20.0),
            &square(10.0),
        );
        assert!(pieces.is_empty());
    }

    #[test]
    fn concave_shape_splits_segment() {
        // U shape open at the top.
        let u = vec![vec![
            Point2::new(0.0, 0.0),
            Point2::new(30.0, 0.0),
            Point2::new(30.0, 30.0),
            Point2::new(20.0, 30.0),
            Point2::new(20.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 30.0),
            Point2::new(0.0, 30.0),
        ]];
        let pieces = clip_segment_to_rings(&Point2::new(-5.0, 20.0), &Point2::new(35.0, 20.0), &u);
        assert_eq!(pieces.len(), 2);
    }

    #[test]
    fn rect_clip_partial() {
        let (p0, p1) = clip_segment_to_rect(
            &Point2::new(-10.0, 5.0),
            &Point2::new(5.0, 5.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 10.0),
        )
        .unwrap();
        assert_abs_diff_eq!(p0.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p1.x, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn rect_clip_outside() {
        let r = clip_segment_to_rect(
            &Point2::new(-10.0, -5.0),
            &Point2::new(-1.0, -5.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(10.0, 10.0),
        );
        assert!(r.is_none());
    }

    #[test]
    fn polyline_leaving_and_reentering_rect_splits() {
        let line = vec![
            Point2::new(1.0, 1.0),
            Point2::new(5.0, 20.0),
            Point2::new(9.0, 1.0),
        ];
        let runs = clip_polyline_to_rect(&line, &Point2::new(0.0, 0.0), &Point2::new(10.0, 10.0));
        assert_eq!(runs.len(), 2);
    }
}
