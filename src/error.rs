use enough::StopReason;

use crate::pixel::PixelKind;

/// Errors from Netpbm decoding, encoding, transforms and drawing.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("invalid max value: {0}")]
    InvalidMaxValue(String),

    #[error("row {row} has {actual} samples, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("invalid scale: max value {0} must be in 1..=255")]
    InvalidScale(u32),

    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("pixel kind mismatch: expected {expected:?}, got {actual:?}")]
    KindMismatch {
        expected: PixelKind,
        actual: PixelKind,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PnmError {
    fn from(r: StopReason) -> Self {
        PnmError::Cancelled(r)
    }
}
