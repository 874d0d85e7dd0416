use crate::config::RendererSettings;
use crate::geometry::{Color, FillStyle};
use crate::symbol::{Symbol, SymbolType};

/// Resolved hatch parameters for one symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HatchParams {
    pub style: FillStyle,
    /// Perpendicular distance between hatch lines.
    pub spacing: f64,
    pub color: Color,
    /// Hatch stroke width.
    pub width: f64,
    /// Drop shapes whose line color is black (RGB 0) once hatched.
    pub remove_black_outlines: bool,
}

impl HatchParams {
    /// Fill style after symbol-type overrides.
    #[must_use]
    pub fn effective_style(symbol: &Symbol) -> FillStyle {
        let t = symbol.symbol_type;
        if t.is_nfa_laa_family()
            || t.is_cbrn_family()
            || matches!(t, SymbolType::Wfz | SymbolType::ObsArea)
        {
            FillStyle::BackwardDiagonal
        } else {
            symbol.fill_style
        }
    }

    /// Resolves style, spacing and color for the symbol.
    ///
    /// - NFA/LAA family: backward diagonal.
    /// - CBRN family: backward diagonal in yellow, full line thickness for
    ///   both the hatch stroke and the extra gap between lines.
    /// - WFZ: backward diagonal at half spacing, black becomes gray.
    /// - OBSAREA: backward diagonal at 1.25× spacing, black outlines removed.
    #[must_use]
    pub fn resolve(symbol: &Symbol, settings: &RendererSettings) -> Self {
        let base_spacing = settings.hatch_spacing * settings.dpi_scale();
        let thickness = symbol.line_thickness.max(1.0);
        let mut params = Self {
            style: Self::effective_style(symbol),
            spacing: base_spacing,
            color: symbol.line_color.unwrap_or(Color::BLACK),
            width: (thickness * 0.5).max(1.0),
            remove_black_outlines: false,
        };

        let t = symbol.symbol_type;
        if t.is_cbrn_family() {
            params.color = Color::YELLOW;
            params.width = thickness;
            params.spacing = base_spacing + thickness;
        } else if t == SymbolType::Wfz {
            params.spacing = base_spacing * 0.5;
            if params.color.rgb_value() == 0 {
                params.color = Color::GRAY;
            }
        } else if t == SymbolType::ObsArea {
            params.spacing = base_spacing * 1.25;
            params.remove_black_outlines = true;
        }
        params
    }
}
