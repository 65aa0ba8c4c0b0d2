//! Contract-violation error types.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CameraError {
    /// Zoom must be a positive finite number (screen units per scene unit).
    #[error("invalid zoom level: {zoom} (must be positive and finite)")]
    InvalidZoom { zoom: f64 },

    /// A ZoomSpace `w` of zero corresponds to infinite zoom; negative or
    /// non-finite `w` has no camera counterpart either.
    #[error("degenerate ZoomSpace coordinate: w = {w} (must be positive and finite)")]
    DegenerateZoomSpace { w: f64 },
}
