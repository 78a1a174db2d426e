use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipperError {
    #[error("Coordinate out of range: ({x}, {y}) exceeds the supported magnitude")]
    CoordinateOutOfRange { x: i64, y: i64 },

    #[error("Scaled coordinate out of range: {value}")]
    ScaledCoordinateOutOfRange { value: f64 },

    #[error("Precision out of range: {precision} (expected -8..=8)")]
    PrecisionOutOfRange { precision: i8 },

    #[error("Open paths can only be added as subjects")]
    OpenClipPath,

    #[error("Failed to order edge intersections at y = {y}")]
    IntersectionOrder { y: i64 },

    #[error("Unpaired local maximum at ({x}, {y})")]
    MaximaPairing { x: i64, y: i64 },
}

pub type ClipperResult<T> = Result<T, ClipperError>;
