use crate::math::Point2;

/// Maps geographic points (x = longitude, y = latitude) to pixels and back.
///
/// Must stay consistent for the duration of one render call.
pub trait PointConversion {
    fn geo_to_pixels(&self, geo: &Point2) -> Point2;
    fn pixels_to_geo(&self, pixel: &Point2) -> Point2;
}

/// Linear map view: `origin` is the geographic top-left corner, `scale`
/// is pixels per degree. Pixel y grows downwards.
#[derive(Debug, Clone, Copy)]
pub struct AffineConversion {
    origin: Point2,
    scale: f64,
}

impl AffineConversion {
    #[must_use]
    pub fn new(origin: Point2, scale: f64) -> Self {
        Self { origin, scale }
    }
}

impl PointConversion for AffineConversion {
    fn geo_to_pixels(&self, geo: &Point2) -> Point2 {
        Point2::new(
            (geo.x - self.origin.x) * self.scale,
            (self.origin.y - geo.y) * self.scale,
        )
    }

    fn pixels_to_geo(&self, pixel: &Point2) -> Point2 {
        Point2::new(
            self.origin.x + pixel.x / self.scale,
            self.origin.y - pixel.y / self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_trip() {
        let conv = AffineConversion::new(Point2::new(-10.0, 50.0), 100.0);
        let geo = Point2::new(-9.5, 49.25);
        let px = conv.geo_to_pixels(&geo);
        assert_relative_eq!(px.x, 50.0);
        assert_relative_eq!(px.y, 75.0);
        let back = conv.pixels_to_geo(&px);
        assert_relative_eq!(back.x, geo.x);
        assert_relative_eq!(back.y, geo.y);
    }
}
