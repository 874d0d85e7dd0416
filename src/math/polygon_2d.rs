use super::{Point2, TOLERANCE};

/// Even-odd point-in-polygon test by ray casting.
#[must_use]
pub fn point_in_polygon(p: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&polygon[i], &polygon[j]);
        if (pi.y > p.y) != (pj.y > p.y) && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Even-odd test against several rings (outer boundary plus holes).
#[must_use]
pub fn point_in_rings(p: &Point2, rings: &[Vec<Point2>]) -> bool {
    rings
        .iter()
        .filter(|ring| point_in_polygon(p, ring))
        .count()
        % 2
        == 1
}

/// Returns `(min, max)` corners of the axis-aligned bounds, or `None` when empty.
#[must_use]
pub fn bounds<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<(Point2, Point2)> {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let (mut min, mut max) = (*first, *first);
    for p in iter {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// Drops a trailing vertex equal to the first one (explicitly closed ring).
#[must_use]
pub fn open_ring(points: &[Point2]) -> &[Point2] {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && (first - last).norm() < TOLERANCE => {
            &points[..points.len() - 1]
        }
        _ => points,
    }
}
