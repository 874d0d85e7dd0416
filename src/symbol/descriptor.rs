use crate::convert::PointConversion;
use crate::geometry::{Color, FillStyle, PointList, TacPoint};
use crate::math::Point2;

use super::segment_colors::token_count;
use super::SymbolType;

/// Line pattern of the symbol outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// Dash array for a stroke of the given width, `None` for solid lines.
    #[must_use]
    pub fn dash_array(self, width: f64) -> Option<Vec<f64>> {
        let w = width.max(1.0);
        match self {
            Self::Solid => None,
            Self::Dashed => Some(vec![4.0 * w, 2.0 * w]),
            Self::Dotted => Some(vec![w, w]),
            Self::DashDot => Some(vec![4.0 * w, 2.0 * w, w, 2.0 * w]),
        }
    }
}

/// Font used by label collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub name: String,
    pub size: f64,
}

/// A multipoint tactical graphic to be rendered.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub symbol_type: SymbolType,
    pub points: PointList,
    pub line_style: LineStyle,
    pub line_thickness: f64,
    pub line_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub fill_style: FillStyle,
    pub font: Option<FontSpec>,
    /// Per-segment color attribute ("H"), e.g. `"0:FF0000,3:0000FF"`.
    pub segment_colors: Option<String>,
    /// Distances in meters ("AM").
    pub distances: Vec<f64>,
    /// Azimuths in degrees ("AN").
    pub azimuths: Vec<f64>,
}

impl Symbol {
    /// Creates a symbol with default styling.
    #[must_use]
    pub fn new(symbol_type: SymbolType, points: PointList) -> Self {
        Self {
            symbol_type,
            points,
            line_style: LineStyle::Solid,
            line_thickness: 2.0,
            line_color: Some(Color::BLACK),
            fill_color: None,
            fill_style: FillStyle::None,
            font: None,
            segment_colors: None,
            distances: Vec::new(),
            azimuths: Vec::new(),
        }
    }

    /// Builds a symbol from geographic control points, deriving pixels.
    #[must_use]
    pub fn from_geo(
        symbol_type: SymbolType,
        geos: &[Point2],
        converter: &dyn PointConversion,
    ) -> Self {
        let points = geos
            .iter()
            .map(|g| TacPoint::new(converter.geo_to_pixels(g), *g))
            .collect::<Vec<_>>();
        Self::new(symbol_type, points.into())
    }

    /// Number of comma-delimited tokens in the segment color attribute.
    #[must_use]
    pub fn segment_color_tokens(&self) -> usize {
        self.segment_colors.as_deref().map_or(0, token_count)
    }
}
