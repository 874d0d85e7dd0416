use thiserror::Error;

/// Top-level error type for the tactical graphic engine.
#[derive(Debug, Error)]
pub enum TacError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Symbol(#[from] SymbolError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("at least {required} points are required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("pixel and geographic point lists differ in length ({pixels} vs {geos})")]
    LengthMismatch { pixels: usize, geos: usize },
}

/// Errors related to symbol codes and symbol attributes.
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("unknown symbol code: {0}")]
    UnknownCode(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid segment color token: {0}")]
    InvalidSegmentColor(String),
}

/// Errors raised while building shapes.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),

    #[error("unsupported symbol for this handler: {0}")]
    Unsupported(String),
}

/// Errors related to renderer settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("setting {name} = {value} must be positive")]
    NotPositive { name: &'static str, value: f64 },
}

/// A symbol rejected before dispatch, with a reason suitable for end users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{symbol}: {reason}")]
pub struct InvalidSymbol {
    pub symbol: String,
    pub reason: String,
}

impl InvalidSymbol {
    #[must_use]
    pub fn new(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for results using [`TacError`].
pub type Result<T> = std::result::Result<T, TacError>;
