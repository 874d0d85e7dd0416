use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// One of the four canonical screen directions (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Above,
    Below,
    Left,
    Right,
}

impl Direction {
    /// Classifies a vector by its dominant screen direction.
    ///
    /// Non-horizontal vectors are classified as above/below; pure horizontal
    /// ones as left/right.
    #[must_use]
    pub fn of_vector(v: &Vector2) -> Self {
        if v.y.abs() > TOLERANCE {
            if v.y < 0.0 {
                Self::Above
            } else {
                Self::Below
            }
        } else if v.x < 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Computes the normalized direction from `a` to `b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the points coincide.
pub fn unit_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    (b - a)
        .try_normalize(TOLERANCE)
        .ok_or_else(|| GeometryError::ZeroVector.into())
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the point `dist` away from `from`, heading towards `through`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `from` and `through` coincide.
pub fn extend_along(from: &Point2, through: &Point2, dist: f64) -> Result<Point2> {
    Ok(from + unit_direction(from, through)? * dist)
}

/// Offsets `at` perpendicular to the line `a`→`b` by `dist`, on the side
/// given by `direction`.
///
/// For vertical lines `Above`/`Below` fall back to `Left`/`Right`; for
/// horizontal lines `Left`/`Right` fall back to `Above`/`Below`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `a` and `b` coincide.
pub fn extend_directed(
    a: &Point2,
    b: &Point2,
    at: &Point2,
    direction: Direction,
    dist: f64,
) -> Result<Point2> {
    let normal = left_normal(&unit_direction(a, b)?);
    let wants_negative = match direction {
        Direction::Above | Direction::Left => true,
        Direction::Below | Direction::Right => false,
    };
    let component = match direction {
        Direction::Above | Direction::Below if normal.y.abs() > TOLERANCE => normal.y,
        Direction::Left | Direction::Right if normal.x.abs() > TOLERANCE => normal.x,
        Direction::Above | Direction::Below => normal.x,
        Direction::Left | Direction::Right => normal.y,
    };
    let sign = if (component < 0.0) == wants_negative {
        1.0
    } else {
        -1.0
    };
    Ok(at + normal * (sign * dist))
}
