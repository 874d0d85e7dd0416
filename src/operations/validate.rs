use crate::error::InvalidSymbol;
use crate::symbol::{DrawRule, ShapedAreaKind, Symbol, SymbolInfo};

/// Rejects symbols that cannot be drawn, before any geometry is built.
pub struct ValidateSymbol<'a> {
    symbol: &'a Symbol,
    info: SymbolInfo,
}

impl<'a> ValidateSymbol<'a> {
    #[must_use]
    pub fn new(symbol: &'a Symbol, info: SymbolInfo) -> Self {
        Self { symbol, info }
    }

    /// Checks point counts and the distance/azimuth attributes of shaped areas.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSymbol`] with a reason suitable for end users.
    pub fn execute(&self) -> Result<(), InvalidSymbol> {
        self.check_point_count()?;
        if let DrawRule::ShapedArea(kind) = self.info.draw_rule {
            self.check_shaped_area(kind)?;
        }
        Ok(())
    }

    fn reject(&self, reason: String) -> InvalidSymbol {
        InvalidSymbol::new(self.symbol.symbol_type.code(), reason)
    }

    fn check_point_count(&self) -> Result<(), InvalidSymbol> {
        let n = self.symbol.points.len();
        if n < self.info.min_points {
            return Err(self.reject(format!(
                "requires at least {} points, got {n}",
                self.info.min_points
            )));
        }
        Ok(())
    }

    fn check_shaped_area(&self, kind: ShapedAreaKind) -> Result<(), InvalidSymbol> {
        let distances = &self.symbol.distances;
        let azimuths = &self.symbol.azimuths;
        if distances.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(self.reject("distances (AM) must be positive".to_owned()));
        }
        match kind {
            ShapedAreaKind::Circular => {
                if distances.is_empty() {
                    return Err(self.reject("requires a radius (AM)".to_owned()));
                }
            }
            ShapedAreaKind::Rectangular => {
                if distances.is_empty() {
                    return Err(self.reject("requires a width (AM)".to_owned()));
                }
            }
            ShapedAreaKind::RangeFan => {
                if distances.is_empty() {
                    return Err(self.reject("requires at least one range (AM)".to_owned()));
                }
            }
            ShapedAreaKind::Sector | ShapedAreaKind::RadarSearch => {
                if distances.is_empty() {
                    return Err(self.reject("requires at least one range (AM)".to_owned()));
                }
                let required = distances.len() * 2;
                if azimuths.len() < required {
                    return Err(self.reject(format!(
                        "requires {required} azimuths (AN) for {} ranges, got {}",
                        distances.len(),
                        azimuths.len()
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{PointList, TacPoint};
    use crate::math::Point2;
    use crate::symbol::{DefaultLookup, SymbolLookup, SymbolType};

    fn symbol(t: SymbolType, n: usize) -> Symbol {
        let p = TacPoint::new(Point2::origin(), Point2::origin());
        Symbol::new(t, PointList::new(vec![p; n]))
    }

    fn validate(s: &Symbol) -> Result<(), InvalidSymbol> {
        ValidateSymbol::new(s, DefaultLookup.info(s.symbol_type)).execute()
    }

    #[test]
    fn too_few_points_for_area() {
        let err = validate(&symbol(SymbolType::Retain, 2)).unwrap_err();
        assert_eq!(err.symbol, "RETAIN");
        assert!(err.reason.contains("at least 3"));
        assert!(validate(&symbol(SymbolType::Retain, 3)).is_ok());
    }

    #[test]
    fn circle_needs_radius() {
        let mut s = symbol(SymbolType::CircularArea, 1);
        assert!(validate(&s).is_err());
        s.distances = vec![500.0];
        assert!(validate(&s).is_ok());
        s.distances = vec![-1.0];
        assert!(validate(&s).is_err());
    }

    #[test]
    fn sector_needs_two_azimuths_per_range() {
        let mut s = symbol(SymbolType::RangeFanSector, 1);
        s.distances = vec![1000.0, 2000.0];
        s.azimuths = vec![0.0, 45.0, 10.0];
        let err = validate(&s).unwrap_err();
        assert!(err.reason.contains("4 azimuths"));
        s.azimuths.push(60.0);
        assert!(validate(&s).is_ok());
    }

    #[test]
    fn range_fan_needs_one_range() {
        let mut s = symbol(SymbolType::RangeFanArea, 1);
        assert!(validate(&s).is_err());
        s.distances = vec![1000.0];
        assert!(validate(&s).is_ok());
    }
}
