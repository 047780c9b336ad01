use thiserror::Error;

/// Top-level error type for segclip.
///
/// Clipping itself never fails; only the layers around it (input parsing,
/// viewport setup) report errors.
#[derive(Debug, Error)]
pub enum SegclipError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while reading the textual clip input.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("input has too few lines")]
    MissingLines,

    #[error("invalid segment count: {value:?}")]
    InvalidCount { value: String },

    #[error("expected {expected} data lines, found {found}")]
    InsufficientData { expected: usize, found: usize },

    #[error("malformed segment on line {index}")]
    InvalidSegment { index: usize },

    #[error("malformed clip window")]
    InvalidWindow,

    #[error("malformed vertex: {token:?}")]
    InvalidVertex { token: String },
}

/// Errors related to geometric setup outside the clippers.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite coordinate")]
    NonFinite,
}

/// Convenience type alias for results using [`SegclipError`].
pub type Result<T> = std::result::Result<T, SegclipError>;
