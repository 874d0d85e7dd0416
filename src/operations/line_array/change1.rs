use crate::convert::PointConversion;
use crate::error::{OperationError, Result};
use crate::geometry::{PointList, Shape, TacPoint};
use crate::math::distance_2d::distance;
use crate::math::line_2d::{left_normal, unit_direction};
use crate::math::Point2;
use crate::symbol::{ShapedAreaKind, Symbol};

/// Equirectangular estimate of meters per degree of latitude.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Angular step of arcs and circles, in degrees.
const ARC_STEP: f64 = 5.0;

/// Geographic point `meters` away from `origin` along `azimuth`
/// (degrees clockwise from north).
#[must_use]
pub fn geo_offset(origin: &Point2, meters: f64, azimuth: f64) -> Point2 {
    let az = azimuth.to_radians();
    let cos_lat = origin.y.to_radians().cos().abs().max(1e-6);
    let dlat = meters * az.cos() / METERS_PER_DEGREE;
    let dlon = meters * az.sin() / (METERS_PER_DEGREE * cos_lat);
    Point2::new(origin.x + dlon, origin.y + dlat)
}

/// Shapes of a distance/azimuth defined area around its anchor points.
pub struct ShapedArea<'a> {
    symbol: &'a Symbol,
    anchors: &'a PointList,
    kind: ShapedAreaKind,
    converter: &'a dyn PointConversion,
}

impl<'a> ShapedArea<'a> {
    #[must_use]
    pub fn new(
        symbol: &'a Symbol,
        anchors: &'a PointList,
        kind: ShapedAreaKind,
        converter: &'a dyn PointConversion,
    ) -> Self {
        Self {
            symbol,
            anchors,
            kind,
            converter,
        }
    }

    /// Builds one closed area per ring; the first shape is the outermost
    /// outline for circles and rectangles, the innermost band for fans.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` when anchors, distances or
    /// azimuths are missing.
    pub fn execute(&self) -> Result<Vec<Shape>> {
        let center = self
            .anchors
            .first()
            .ok_or_else(|| OperationError::InvalidInput("shaped area has no anchor".to_owned()))?;
        let distances = &self.symbol.distances;
        let first_distance = *distances.first().ok_or_else(|| {
            OperationError::InvalidInput(format!("{} requires a distance", self.symbol.symbol_type))
        })?;

        let rings = match self.kind {
            ShapedAreaKind::Circular => vec![self.arc(&center.geo, first_distance, 0.0, 360.0)],
            ShapedAreaKind::Rectangular => {
                let end = self.anchors.get(1).ok_or_else(|| {
                    OperationError::InvalidInput("rectangle requires two points".to_owned())
                })?;
                vec![self.rectangle(center, end, first_distance)?]
            }
            ShapedAreaKind::RangeFan => {
                let mut sorted = distances.clone();
                sorted.sort_by(f64::total_cmp);
                sorted
                    .iter()
                    .map(|&r| self.arc(&center.geo, r, 0.0, 360.0))
                    .collect()
            }
            ShapedAreaKind::Sector | ShapedAreaKind::RadarSearch => {
                self.sectors(&center.geo, distances)?
            }
        };

        Ok(rings
            .into_iter()
            .map(|ring| Shape {
                fill_style: self.symbol.fill_style,
                ..Shape::area(ring)
            })
            .collect())
    }

    /// Pixel arc of radius `meters`, clockwise from `from` to `to`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn arc(&self, center: &Point2, meters: f64, from: f64, to: f64) -> Vec<Point2> {
        let mut sweep = (to - from).rem_euclid(360.0);
        if sweep <= 0.0 {
            sweep = 360.0;
        }
        let steps = (sweep / ARC_STEP).ceil().max(1.0) as usize;
        (0..=steps)
            .map(|i| {
                let az = from + sweep * i as f64 / steps as f64;
                self.converter.geo_to_pixels(&geo_offset(center, meters, az))
            })
            .collect()
    }

    fn rectangle(&self, start: &TacPoint, end: &TacPoint, width: f64) -> Result<Vec<Point2>> {
        let edge = self
            .converter
            .geo_to_pixels(&geo_offset(&start.geo, width * 0.5, 0.0));
        let half = distance(&start.pixel, &edge);
        let n = left_normal(&unit_direction(&start.pixel, &end.pixel)?) * half;
        let (a, b) = (start.pixel, end.pixel);
        Ok(vec![a + n, b + n, b - n, a - n, a + n])
    }

    /// One annular sector per distance; azimuths come in left/right pairs.
    fn sectors(&self, center: &Point2, distances: &[f64]) -> Result<Vec<Vec<Point2>>> {
        let azimuths = &self.symbol.azimuths;
        let center_px = self.converter.geo_to_pixels(center);
        let mut inner = 0.0;
        let mut rings = Vec::with_capacity(distances.len());
        for (i, &outer) in distances.iter().enumerate() {
            let (Some(&left), Some(&right)) = (azimuths.get(2 * i), azimuths.get(2 * i + 1)) else {
                return Err(OperationError::InvalidInput(format!(
                    "sector {i} is missing its azimuth pair"
                ))
                .into());
            };
            let mut ring = self.arc(center, outer, left, right);
            if inner > 0.0 {
                ring.extend(self.arc(center, inner, left, right).into_iter().rev());
            } else {
                ring.push(center_px);
            }
            ring.push(ring[0]);
            rings.push(ring);
            inner = outer;
        }
        Ok(rings)
    }
}

/// Outline points of the first ring, paired with their geographic position.
#[must_use]
pub fn outline_points(shapes: &[Shape], converter: &dyn PointConversion) -> PointList {
    shapes
        .first()
        .and_then(|s| s.rings.first())
        .map(|ring| {
            ring.iter()
                .map(|p| TacPoint::new(*p, converter.pixels_to_geo(p)))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default()
        .into()
}
