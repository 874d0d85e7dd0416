use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// Style tag for points that filtering must never remove.
pub const PINNED_STYLE: i32 = -1;

/// A control point: pixel position, geographic position and style tag.
///
/// Keeping both coordinates in one value means every insertion, removal or
/// reorder applies to pixel and geographic sequences alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TacPoint {
    pub pixel: Point2,
    pub geo: Point2,
    pub style: i32,
}

impl TacPoint {
    #[must_use]
    pub fn new(pixel: Point2, geo: Point2) -> Self {
        Self {
            pixel,
            geo,
            style: 0,
        }
    }

    /// Returns a copy tagged as pinned (never filtered).
    #[must_use]
    pub fn pinned(mut self) -> Self {
        self.style = PINNED_STYLE;
        self
    }

    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.style == PINNED_STYLE
    }

    /// Pixel distance to another point.
    #[must_use]
    pub fn pixel_distance(&self, other: &TacPoint) -> f64 {
        (other.pixel - self.pixel).norm()
    }
}

/// Ordered control points of a symbol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointList {
    points: Vec<TacPoint>,
}

impl PointList {
    #[must_use]
    pub fn new(points: Vec<TacPoint>) -> Self {
        Self { points }
    }

    /// Pairs parallel pixel and geographic sequences.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::LengthMismatch` if the sequences differ in length.
    pub fn from_parts(pixels: &[Point2], geos: &[Point2]) -> Result<Self> {
        if pixels.len() != geos.len() {
            return Err(GeometryError::LengthMismatch {
                pixels: pixels.len(),
                geos: geos.len(),
            }
            .into());
        }
        Ok(Self {
            points: pixels
                .iter()
                .zip(geos)
                .map(|(p, g)| TacPoint::new(*p, *g))
                .collect(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TacPoint] {
        &self.points
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TacPoint> {
        self.points.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&TacPoint> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TacPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TacPoint> {
        self.points.iter()
    }

    /// Pixel coordinates in order.
    #[must_use]
    pub fn pixels(&self) -> Vec<Point2> {
        self.points.iter().map(|p| p.pixel).collect()
    }

    /// Geographic coordinates in order.
    #[must_use]
    pub fn geos(&self) -> Vec<Point2> {
        self.points.iter().map(|p| p.geo).collect()
    }

    pub fn push(&mut self, point: TacPoint) {
        self.points.push(point);
    }

    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    pub fn into_vec(self) -> Vec<TacPoint> {
        self.points
    }
}

impl From<Vec<TacPoint>> for PointList {
    fn from(points: Vec<TacPoint>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a PointList {
    type Item = &'a TacPoint;
    type IntoIter = std::slice::Iter<'a, TacPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_pairs_coordinates() {
        let pixels = [Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)];
        let geos = [Point2::new(10.0, 20.0), Point2::new(30.0, 40.0)];
        let list = PointList::from_parts(&pixels, &geos).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().geo, Point2::new(30.0, 40.0));
        assert_eq!(list.pixels(), pixels.to_vec());
    }

    #[test]
    fn from_parts_rejects_mismatch() {
        let pixels = [Point2::new(1.0, 2.0)];
        assert!(PointList::from_parts(&pixels, &[]).is_err());
    }

    #[test]
    fn reverse_keeps_pairs_together() {
        let mut list = PointList::new(vec![
            TacPoint::new(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0)),
            TacPoint::new(Point2::new(1.0, 1.0), Point2::new(6.0, 6.0)).pinned(),
        ]);
        list.reverse();
        let first = list.first().unwrap();
        assert_eq!(first.pixel, Point2::new(1.0, 1.0));
        assert_eq!(first.geo, Point2::new(6.0, 6.0));
        assert!(first.is_pinned());
    }
}
