use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Reference resolution that all pixel constants are tuned for.
pub const BASE_DPI: f64 = 96.0;

/// Renderer-wide defaults, passed explicitly into every render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    /// Output device resolution.
    pub dpi: f64,
    /// Stroke width used when a symbol does not set one.
    pub default_line_width: f64,
    /// Distance between hatch lines at [`BASE_DPI`].
    pub hatch_spacing: f64,
    /// Emit one repeatable hatch tile instead of explicit lattice geometry.
    pub hatch_tile_mode: bool,
    /// Minimum arrowhead length for fixed-shape arrows at [`BASE_DPI`].
    pub arrow_min_length: f64,
    /// Corridor width of channel symbols at [`BASE_DPI`].
    pub channel_width: f64,
    /// Below this first-segment length complex arrows are drawn as simple ones.
    pub downgrade_arrow_length: f64,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            dpi: BASE_DPI,
            default_line_width: 2.0,
            hatch_spacing: 10.0,
            hatch_tile_mode: false,
            arrow_min_length: 20.0,
            channel_width: 20.0,
            downgrade_arrow_length: 30.0,
        }
    }
}

impl RendererSettings {
    /// Loads settings from a JSON object; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::NotPositive` for non-positive sizes.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks that every size setting is positive.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotPositive` naming the first offending setting.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("dpi", self.dpi),
            ("default_line_width", self.default_line_width),
            ("hatch_spacing", self.hatch_spacing),
            ("arrow_min_length", self.arrow_min_length),
            ("channel_width", self.channel_width),
            ("downgrade_arrow_length", self.downgrade_arrow_length),
        ];
        for (name, value) in sizes {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value }.into());
            }
        }
        Ok(())
    }

    /// Scale factor from [`BASE_DPI`] to the output resolution.
    #[must_use]
    pub fn dpi_scale(&self) -> f64 {
        self.dpi / BASE_DPI
    }
}
