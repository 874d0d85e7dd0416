use crate::math::Point2;

use super::color::Color;

/// Whether a shape is stroked only or also filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Polyline,
    FilledArea,
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroke description attached to a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    /// Dash lengths, `None` for a solid line.
    pub dash: Option<Vec<f64>>,
}

impl Stroke {
    #[must_use]
    pub fn solid(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            dash: None,
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::solid(1.0)
    }
}

/// Fill-style marker, also used to request hatch fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillStyle {
    #[default]
    None,
    Solid,
    ForwardDiagonal,
    BackwardDiagonal,
    Vertical,
    Horizontal,
    Cross,
}

impl FillStyle {
    /// Numeric fill-style code used by symbol attributes.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Solid => 1,
            Self::ForwardDiagonal => 2,
            Self::BackwardDiagonal => 3,
            Self::Vertical => 4,
            Self::Horizontal => 5,
            Self::Cross => 8,
        }
    }

    /// Inverse of [`FillStyle::code`]; unknown codes map to `None`.
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Solid,
            2 => Self::ForwardDiagonal,
            3 => Self::BackwardDiagonal,
            4 => Self::Vertical,
            5 => Self::Horizontal,
            8 => Self::Cross,
            _ => Self::None,
        }
    }

    /// Whether this style is drawn as line hatching.
    #[must_use]
    pub fn is_hatch(self) -> bool {
        !matches!(self, Self::None | Self::Solid)
    }
}

/// A small repeatable hatch tile used instead of explicit lattice geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct HatchTile {
    pub style: FillStyle,
    /// Side length of the square tile.
    pub size: f64,
    pub segments: Vec<(Point2, Point2)>,
    pub color: Color,
    pub width: f64,
}

/// One renderable primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub rings: Vec<Vec<Point2>>,
    pub line_color: Option<Color>,
    pub fill_color: Option<Color>,
    pub stroke: Stroke,
    pub fill_style: FillStyle,
    pub pattern: Option<HatchTile>,
}

impl Shape {
    /// Creates an empty shape of the given kind.
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            rings: Vec::new(),
            line_color: None,
            fill_color: None,
            stroke: Stroke::default(),
            fill_style: FillStyle::None,
            pattern: None,
        }
    }

    /// Single-ring polyline.
    #[must_use]
    pub fn polyline(points: Vec<Point2>) -> Self {
        let mut shape = Self::new(ShapeKind::Polyline);
        shape.rings.push(points);
        shape
    }

    /// Single-ring filled area.
    #[must_use]
    pub fn area(points: Vec<Point2>) -> Self {
        let mut shape = Self::new(ShapeKind::FilledArea);
        shape.rings.push(points);
        shape
    }

    /// Starts a new ring at `p`.
    pub fn move_to(&mut self, p: Point2) {
        self.rings.push(vec![p]);
    }

    /// Extends the current ring to `p`, starting one if needed.
    pub fn line_to(&mut self, p: Point2) {
        match self.rings.last_mut() {
            Some(ring) => ring.push(p),
            None => self.rings.push(vec![p]),
        }
    }

    /// Last point of the current ring.
    #[must_use]
    pub fn current_point(&self) -> Option<Point2> {
        self.rings.last().and_then(|ring| ring.last()).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.iter().all(Vec::is_empty)
    }

    /// All points of all rings.
    pub fn points(&self) -> impl Iterator<Item = &Point2> {
        self.rings.iter().flatten()
    }
}
