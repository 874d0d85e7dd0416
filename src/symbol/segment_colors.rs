use std::collections::BTreeMap;

use crate::error::SymbolError;
use crate::geometry::Color;

/// Number of comma-delimited tokens in a segment color attribute.
#[must_use]
pub fn token_count(attr: &str) -> usize {
    attr.split(',').filter(|t| !t.trim().is_empty()).count()
}

/// Point index → color map parsed from the "H" attribute.
///
/// The attribute is a comma-delimited list of `index:color` tokens, e.g.
/// `"0:FF0000,3:0000FF"`. Index `j` colors the segment from point `j` to
/// point `j + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentColors {
    colors: BTreeMap<usize, Color>,
}

impl SegmentColors {
    #[must_use]
    pub fn new(colors: BTreeMap<usize, Color>) -> Self {
        Self { colors }
    }

    /// Parses the attribute, skipping (and logging) malformed tokens.
    #[must_use]
    pub fn parse(attr: &str) -> Self {
        let mut colors = BTreeMap::new();
        for token in attr.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match parse_token(token) {
                Ok((index, color)) => {
                    colors.insert(index, color);
                }
                Err(err) => {
                    tracing::debug!(component = "SegmentColors", method = "parse", %err, "skipping token");
                }
            }
        }
        Self { colors }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(&index).copied()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.colors.contains_key(&index)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

fn parse_token(token: &str) -> Result<(usize, Color), SymbolError> {
    let invalid = || SymbolError::InvalidSegmentColor(token.to_owned());
    let (index, color) = token.split_once(':').ok_or_else(invalid)?;
    let index = index.trim().parse::<usize>().map_err(|_| invalid())?;
    let color = Color::from_hex(color)?;
    Ok((index, color))
}
