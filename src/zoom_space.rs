//! ZoomSpace: the (x, y, 1/zoom) reparameterization of camera state.
//!
//! Interpolating (x, y, zoom) linearly makes pan and zoom feel decoupled,
//! because zoom behaves like an inverse distance (a camera height above the
//! scene plane). Reparameterizing height as `w = 1/zoom` and interpolating
//! (x, y, w) linearly instead is the classic dolly linearization: the motion
//! matches a camera travelling in a straight line through 3D space.
//!
//! ZoomSpace points are transient. An external animation scheduler converts
//! the endpoint cameras once, lerps per frame, and converts back; no timing
//! or animation state lives in this crate.

use crate::camera::Camera;
use crate::error::CameraError;
use crate::points::Point;
use serde::{Deserialize, Serialize};

/// A camera reparameterized as a point in ZoomSpace: the origin's scene
/// coordinates plus `w = 1 / zoom_level`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomSpacePoint {
    pub x: f64,
    pub y: f64,
    pub w: f64,
}

impl ZoomSpacePoint {
    pub fn new(x: f64, y: f64, w: f64) -> Self {
        Self { x, y, w }
    }

    /// Linear interpolation, each coordinate independently. `t = 0` gives
    /// `self`, `t = 1` gives `other`; `t` is not clamped.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
            w: self.w + t * (other.w - self.w),
        }
    }
}

impl Camera {
    /// Reparameterize this camera as a ZoomSpace point.
    pub fn to_zoom_space(&self) -> ZoomSpacePoint {
        let origin = self.origin();
        ZoomSpacePoint::new(origin.x(), origin.y(), 1.0 / self.zoom_level())
    }

    /// Rebuild a camera from a ZoomSpace point.
    ///
    /// `w == 0` corresponds to infinite zoom and is rejected with
    /// `CameraError::DegenerateZoomSpace`, as are negative and non-finite
    /// `w` values, which have no camera counterpart.
    pub fn from_zoom_space(point: ZoomSpacePoint) -> Result<Self, CameraError> {
        if !(point.w.is_finite() && point.w > 0.0) {
            return Err(CameraError::DegenerateZoomSpace { w: point.w });
        }
        Camera::new(Point::new(point.x, point.y), 1.0 / point.w)
    }

    /// Camera at fraction `t` along the visually linear path from `self`
    /// (`t = 0`) to `target` (`t = 1`).
    ///
    /// Both endpoints are converted to ZoomSpace, lerped coordinate-wise,
    /// and converted back, so the pan+zoom motion is uniform to the eye.
    /// Exact at the endpoints up to the forward/back conversion rounding.
    pub fn interpolate(&self, target: &Camera, t: f64) -> Result<Camera, CameraError> {
        let from = self.to_zoom_space();
        let to = target.to_zoom_space();
        Camera::from_zoom_space(from.lerp(&to, t))
    }
}
