use crate::geometry::{FillStyle, HatchTile};
use crate::math::Point2;

use super::params::HatchParams;

/// Builds a square tile of side `params.spacing` that repeats seamlessly.
///
/// Diagonals run corner to corner so neighbouring tiles join up.
#[must_use]
pub fn hatch_tile(params: &HatchParams) -> Option<HatchTile> {
    let s = params.spacing;
    if s <= 0.0 || !params.style.is_hatch() {
        return None;
    }
    let forward = (Point2::new(0.0, s), Point2::new(s, 0.0));
    let backward = (Point2::new(0.0, 0.0), Point2::new(s, s));
    let segments = match params.style {
        FillStyle::ForwardDiagonal => vec![forward],
        FillStyle::BackwardDiagonal => vec![backward],
        FillStyle::Cross => vec![backward, forward],
        FillStyle::Vertical => vec![(Point2::new(s * 0.5, 0.0), Point2::new(s * 0.5, s))],
        FillStyle::Horizontal => vec![(Point2::new(0.0, s * 0.5), Point2::new(s, s * 0.5))],
        FillStyle::None | FillStyle::Solid => return None,
    };
    Some(HatchTile {
        style: params.style,
        size: s,
        segments,
        color: params.color,
        width: params.width,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Color;

    fn params(style: FillStyle) -> HatchParams {
        HatchParams {
            style,
            spacing: 8.0,
            color: Color::RED,
            width: 1.0,
            remove_black_outlines: false,
        }
    }

    #[test]
    fn cross_tile_has_both_diagonals() {
        let tile = hatch_tile(&params(FillStyle::Cross)).unwrap();
        approx::assert_relative_eq!(tile.size, 8.0);
        assert_eq!(tile.segments.len(), 2);
        assert_eq!(tile.color, Color::RED);
    }

    #[test]
    fn solid_has_no_tile() {
        assert!(hatch_tile(&params(FillStyle::Solid)).is_none());
    }
}
