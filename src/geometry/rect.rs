use crate::math::polygon_2d::bounds;
use crate::math::Point2;

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    pub min: Point2,
    pub max: Point2,
}

impl Rect2 {
    /// Creates a rectangle from its origin and size.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            min: Point2::new(x, y),
            max: Point2::new(x + width, y + height),
        }
    }

    /// Bounding rectangle of a point set, `None` if empty.
    #[must_use]
    pub fn bounding<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<Self> {
        bounds(points).map(|(min, max)| Self { min, max })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns the rectangle grown by `amount` on every side.
    #[must_use]
    pub fn grown(&self, amount: f64) -> Self {
        Self {
            min: Point2::new(self.min.x - amount, self.min.y - amount),
            max: Point2::new(self.max.x + amount, self.max.y + amount),
        }
    }

    /// Square with side `max(width, height)` sharing this rectangle's center.
    #[must_use]
    pub fn squared(&self) -> Self {
        let half = self.width().max(self.height()) * 0.5;
        let c = self.center();
        Self {
            min: Point2::new(c.x - half, c.y - half),
            max: Point2::new(c.x + half, c.y + half),
        }
    }

    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn squared_keeps_center() {
        let r = Rect2::new(0.0, 0.0, 40.0, 10.0);
        let s = r.squared();
        assert_abs_diff_eq!(s.width(), 40.0);
        assert_abs_diff_eq!(s.height(), 40.0);
        assert_eq!(s.center(), r.center());
    }

    #[test]
    fn bounding_and_contains() {
        let pts = [Point2::new(1.0, 2.0), Point2::new(5.0, -3.0)];
        let r = Rect2::bounding(&pts).unwrap();
        assert!(r.contains(&Point2::new(3.0, 0.0)));
        assert!(!r.contains(&Point2::new(6.0, 0.0)));
        assert!(r.grown(1.0).contains(&Point2::new(6.0, 0.0)));
    }
}
