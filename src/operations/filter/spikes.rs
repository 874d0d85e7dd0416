use crate::geometry::TacPoint;
use crate::symbol::{Symbol, SymbolType};

/// Minimum spacing between consecutive control points, per symbol type.
///
/// These values are tuned per symbol family and kept as-is.
#[must_use]
pub fn min_spike_distance(symbol_type: SymbolType) -> Option<f64> {
    match symbol_type {
        SymbolType::Lc => Some(40.0),
        SymbolType::AtDitch | SymbolType::AtDitchC => Some(35.0),
        SymbolType::Fortl => Some(25.0),
        SymbolType::Zone => Some(60.0),
        _ => None,
    }
}

/// Drops control points that sit too close to the previously kept point.
///
/// The final point is always kept. For `LC` a final point that fails the
/// spacing test replaces the previously kept point instead.
#[derive(Debug, Clone, Copy)]
pub struct FilterSpikes {
    min_distance: f64,
    replace_previous_at_end: bool,
}

impl FilterSpikes {
    /// Returns the filter for this symbol type, or `None` if it has no spacing rule.
    #[must_use]
    pub fn for_type(symbol_type: SymbolType) -> Option<Self> {
        min_spike_distance(symbol_type).map(|min_distance| Self {
            min_distance,
            replace_previous_at_end: symbol_type == SymbolType::Lc,
        })
    }

    /// Executes the filter in place, returning the number of removed points.
    ///
    /// Leaves the symbol untouched if filtering would drop it below its
    /// minimum point count.
    pub fn execute(&self, symbol: &mut Symbol) -> usize {
        let input = symbol.points.as_slice();
        let n = input.len();
        if n < 3 {
            return 0;
        }

        let mut kept: Vec<TacPoint> = Vec::with_capacity(n);
        kept.push(input[0]);
        for (i, point) in input.iter().enumerate().skip(1) {
            let is_last = i == n - 1;
            let far_enough = kept
                .last()
                .is_none_or(|last| last.pixel_distance(point) >= self.min_distance);

            if far_enough || point.is_pinned() {
                kept.push(*point);
            } else if is_last {
                let can_replace = self.replace_previous_at_end
                    && kept.len() > 1
                    && kept.last().is_some_and(|last| !last.is_pinned());
                if can_replace {
                    kept.pop();
                }
                kept.push(*point);
            }
        }

        let min_points = if symbol.symbol_type.draw_rule().is_closed() {
            3
        } else {
            2
        };
        let removed = n - kept.len();
        if removed == 0 || kept.len() < min_points {
            return 0;
        }

        tracing::debug!(symbol = %symbol.symbol_type, removed, "filtered spike points");
        symbol.points = kept.into();
        removed
    }
}
