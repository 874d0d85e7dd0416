use crate::config::RendererSettings;
use crate::convert::PointConversion;
use crate::error::InvalidSymbol;
use crate::geometry::{PointList, Rect2, Shape};
use crate::operations::filter::{FilterSpikes, RebuildArrowControlPoints, RemoveDuplicatePoints};
use crate::operations::{
    AttachAutoshapeFill, BasicBuilders, BuildHatchFills, LineArray, ShapeBuilders, ValidateSymbol,
};
use crate::symbol::{DefaultLookup, Symbol, SymbolLookup};

/// Everything produced for one symbol.
#[derive(Debug, Clone, Default)]
pub struct RenderOutput {
    /// Geometry in paint order.
    pub shapes: Vec<Shape>,
    /// Label and annotation shapes.
    pub modifiers: Vec<Shape>,
    /// Final control points after filtering and dispatch.
    pub points: PointList,
}

/// Renders symbols with fixed settings and collaborators.
///
/// A renderer holds no mutable state; one instance may serve any number
/// of render calls.
pub struct Renderer<'a> {
    settings: RendererSettings,
    converter: &'a dyn PointConversion,
    lookup: &'a dyn SymbolLookup,
    builders: &'a dyn ShapeBuilders,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer with the built-in lookup and builders.
    #[must_use]
    pub fn new(settings: RendererSettings, converter: &'a dyn PointConversion) -> Self {
        Self {
            settings,
            converter,
            lookup: &DefaultLookup,
            builders: &BasicBuilders,
        }
    }

    #[must_use]
    pub fn with_lookup(mut self, lookup: &'a dyn SymbolLookup) -> Self {
        self.lookup = lookup;
        self
    }

    #[must_use]
    pub fn with_builders(mut self, builders: &'a dyn ShapeBuilders) -> Self {
        self.builders = builders;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// Renders one symbol.
    ///
    /// Runs validation, point filtering, line-array dispatch, hatch fills
    /// and autoshape fill, in that order. Failures after validation are
    /// logged and yield partial output.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSymbol`] when the symbol cannot be drawn at all.
    pub fn render(
        &self,
        mut symbol: Symbol,
        clip: Option<&Rect2>,
    ) -> Result<RenderOutput, InvalidSymbol> {
        let info = self.lookup.info(symbol.symbol_type);
        ValidateSymbol::new(&symbol, info).execute()?;

        self.preprocess(&mut symbol);

        let dispatcher = LineArray::new(self.builders, self.lookup, self.converter, &self.settings);
        let Some(result) = dispatcher.execute(&mut symbol, clip) else {
            return Ok(RenderOutput {
                points: symbol.points,
                ..RenderOutput::default()
            });
        };

        let mut shapes = result.shapes;
        BuildHatchFills::new(&symbol, &self.settings).execute(&mut shapes);
        AttachAutoshapeFill::new(&symbol).execute(&mut shapes);

        Ok(RenderOutput {
            shapes,
            modifiers: result.modifiers,
            points: symbol.points,
        })
    }

    fn preprocess(&self, symbol: &mut Symbol) {
        RemoveDuplicatePoints::new().execute(symbol);

        let arrow_min = self.settings.arrow_min_length * self.settings.dpi_scale();
        if let Err(err) = RebuildArrowControlPoints::new(arrow_min).execute(symbol, self.converter) {
            tracing::warn!(
                component = "renderer",
                method = "rebuild_arrow_control_points",
                %err,
                "keeping original control points"
            );
        }

        if let Some(filter) = FilterSpikes::for_type(symbol.symbol_type) {
            filter.execute(symbol);
        }
    }
}
