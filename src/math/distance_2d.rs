use super::Point2;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Slope `dy/dx` of the line through `a` and `b`, or `None` for vertical lines.
#[must_use]
pub fn slope(a: &Point2, b: &Point2) -> Option<f64> {
    let dx = b.x - a.x;
    if dx.abs() < super::TOLERANCE {
        None
    } else {
        Some((b.y - a.y) / dx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distance_three_four_five() {
        let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn slope_of_vertical_is_none() {
        assert!(slope(&Point2::new(1.0, 0.0), &Point2::new(1.0, 5.0)).is_none());
        let m = slope(&Point2::new(0.0, 0.0), &Point2::new(2.0, 1.0));
        assert_eq!(m, Some(0.5));
    }
}
