use std::fmt;
use std::str::FromStr;

use crate::error::{SymbolError, TacError};

/// Geometry of a shaped ("Change1") area, built from distances and azimuths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapedAreaKind {
    Circular,
    Rectangular,
    RangeFan,
    Sector,
    RadarSearch,
}

/// Draw-rule classification deciding which shape builder applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawRule {
    /// Open polyline.
    Line,
    /// Closed polygon.
    Area,
    /// Fixed-shape arrow drawn by the generic builder.
    Arrow,
    /// Decorated parallel-line corridor.
    Channel,
    /// Route line with per-segment colors.
    Route,
    /// Weather front or other METOC glyph line.
    Metoc,
    /// Area built from distance/azimuth attributes.
    ShapedArea(ShapedAreaKind),
}

impl DrawRule {
    /// Whether shapes of this rule are closed polygons.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Area | Self::ShapedArea(_))
    }
}

macro_rules! symbol_types {
    ($($variant:ident => $code:literal, $rule:expr;)+) => {
        /// Tactical graphic symbol types known to the engine.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SymbolType {
            $($variant,)+
        }

        impl SymbolType {
            /// Every known symbol type.
            pub const ALL: &'static [SymbolType] = &[$(SymbolType::$variant,)+];

            /// Compact symbol code, e.g. `"RETAIN"`.
            #[must_use]
            pub fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Draw rule for this type.
            #[must_use]
            pub fn draw_rule(self) -> DrawRule {
                match self {
                    $(Self::$variant => $rule,)+
                }
            }
        }
    };
}

use DrawRule::{Area, Arrow, Channel, Line, Metoc, Route, ShapedArea};
use ShapedAreaKind::{Circular, RadarSearch, RangeFan, Rectangular, Sector};

symbol_types! {
    GeneralLine => "LINE", Line;
    GeneralArea => "AREA", Area;
    PhaseLine => "PL", Line;
    Boundary => "BOUNDARY", Line;
    Block => "BLOCK", Line;
    Contain => "CONTAIN", Line;
    Fortl => "FORTL", Line;
    Zone => "ZONE", Area;
    AtDitch => "ATDITCH", Line;
    AtDitchC => "ATDITCHC", Line;
    Lc => "LC", Line;
    Catk => "CATK", Arrow;
    CatkByFire => "CATKBYFIRE", Arrow;
    DirAtkSpt => "DIRATKSPT", Arrow;
    Folla => "FOLLA", Arrow;
    Folsp => "FOLSP", Arrow;
    Convoy => "CONVOY", Arrow;
    Hconvoy => "HCONVOY", Arrow;
    Airaoa => "AIRAOA", Channel;
    Aaaaa => "AAAAA", Channel;
    Spt => "SPT", Channel;
    Main => "MAIN", Channel;
    SingleC => "SINGLEC", Channel;
    DoubleC => "DOUBLEC", Channel;
    Msr => "MSR", Route;
    Asr => "ASR", Route;
    Route => "ROUTE", Route;
    Retain => "RETAIN", Area;
    Secure => "SECURE", Area;
    Occupy => "OCCUPY", Area;
    CordonSearch => "CORDONSEARCH", Area;
    CordonKnock => "CORDONKNOCK", Area;
    Isolate => "ISOLATE", Area;
    Nfa => "NFA", Area;
    NfaCircular => "NFA_CIRCULAR", ShapedArea(Circular);
    NfaRectangular => "NFA_RECTANGULAR", ShapedArea(Rectangular);
    Laa => "LAA", Area;
    Bio => "BIO", Area;
    Chem => "CHEM", Area;
    Nuc => "NUC", Area;
    Rad => "RAD", Area;
    Wfz => "WFZ", Area;
    ObsArea => "OBSAREA", Area;
    CircularArea => "CIRCULAR", ShapedArea(Circular);
    RectangularArea => "RECTANGULAR", ShapedArea(Rectangular);
    RangeFanArea => "RANGE_FAN", ShapedArea(RangeFan);
    RangeFanSector => "RANGE_FAN_SECTOR", ShapedArea(Sector);
    RadarSearchArea => "RADAR_SEARCH", ShapedArea(RadarSearch);
    ColdFront => "CF", Metoc;
    WarmFront => "WF", Metoc;
    OccludedFront => "OCCLUDED", Metoc;
    StationaryFront => "SF", Metoc;
    Trough => "TROUGH", Metoc;
}

impl SymbolType {
    /// Arrows whose first control points have a fixed meaning.
    #[must_use]
    pub fn is_fixed_arrow(self) -> bool {
        matches!(
            self,
            Self::Catk | Self::CatkByFire | Self::Airaoa | Self::Aaaaa | Self::Spt | Self::Main
        )
    }

    /// Arrows that collapse to [`SymbolType::DirAtkSpt`] when drawn too small.
    #[must_use]
    pub fn downgrades_when_short(self) -> bool {
        matches!(self, Self::Folla | Self::Folsp | Self::Convoy)
    }

    #[must_use]
    pub fn is_route(self) -> bool {
        matches!(self.draw_rule(), DrawRule::Route)
    }

    #[must_use]
    pub fn is_channel(self) -> bool {
        matches!(self.draw_rule(), DrawRule::Channel)
    }

    #[must_use]
    pub fn is_metoc(self) -> bool {
        matches!(self.draw_rule(), DrawRule::Metoc)
    }

    /// Shaped areas rebuilt from distance/azimuth attributes.
    #[must_use]
    pub fn is_change1_area(self) -> bool {
        matches!(self.draw_rule(), DrawRule::ShapedArea(_))
    }

    /// Range fans, sectors and radar search areas: every shape carries its own fill.
    #[must_use]
    pub fn is_range_fan_family(self) -> bool {
        matches!(
            self,
            Self::RangeFanArea | Self::RangeFanSector | Self::RadarSearchArea
        )
    }

    #[must_use]
    pub fn is_nfa_laa_family(self) -> bool {
        matches!(
            self,
            Self::Nfa | Self::NfaCircular | Self::NfaRectangular | Self::Laa
        )
    }

    #[must_use]
    pub fn is_cbrn_family(self) -> bool {
        matches!(self, Self::Bio | Self::Chem | Self::Nuc | Self::Rad)
    }

    /// Symbols whose fill is a fixed sub-polygon of their outline points.
    #[must_use]
    pub fn is_autoshape(self) -> bool {
        matches!(
            self,
            Self::Retain
                | Self::Secure
                | Self::Occupy
                | Self::Convoy
                | Self::Hconvoy
                | Self::CordonSearch
                | Self::CordonKnock
                | Self::Isolate
        )
    }

    /// Lines whose labels are broken into text shapes along the line.
    #[must_use]
    pub fn is_boundary(self) -> bool {
        matches!(self, Self::Boundary)
    }
}

impl FromStr for SymbolType {
    type Err = TacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| SymbolError::UnknownCode(code.to_owned()).into())
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_back() {
        for t in SymbolType::ALL {
            assert_eq!(t.code().parse::<SymbolType>().unwrap(), *t);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("retain".parse::<SymbolType>().unwrap(), SymbolType::Retain);
        assert!("NOPE".parse::<SymbolType>().is_err());
    }

    #[test]
    fn families() {
        assert!(SymbolType::Msr.is_route());
        assert!(SymbolType::SingleC.is_channel());
        assert!(SymbolType::RangeFanArea.is_change1_area());
        assert!(SymbolType::ColdFront.is_metoc());
        assert!(SymbolType::Catk.is_fixed_arrow());
        assert!(!SymbolType::Folla.is_fixed_arrow());
        assert!(DrawRule::ShapedArea(ShapedAreaKind::Circular).is_closed());
        assert!(!SymbolType::Lc.draw_rule().is_closed());
    }
}
