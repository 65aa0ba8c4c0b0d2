use crate::error::CameraError;
use crate::points::{Point, Rect, Scene, Screen, Vector};
use log::trace;
use serde::{Deserialize, Serialize};

/// A 2D camera over a scene: an origin in scene coordinates plus an isotropic
/// zoom ratio (screen units per scene unit).
///
/// A camera fully determines the translation + uniform-scale mapping between
/// scene and screen space, given a viewport rectangle supplied per call. The
/// viewport's center always corresponds to the camera's origin; the camera
/// itself does not know where on screen it is drawn.
///
/// Cameras are immutable values: every mutator returns a new `Camera`.
/// Concurrent readers can freely share one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    origin: Point<Scene>,
    zoom_level: f64,
}

fn check_zoom(zoom_level: f64) -> Result<f64, CameraError> {
    if zoom_level.is_finite() && zoom_level > 0.0 {
        Ok(zoom_level)
    } else {
        Err(CameraError::InvalidZoom { zoom: zoom_level })
    }
}

impl Camera {
    /// Create a camera looking at `origin` with the given zoom ratio.
    ///
    /// Fails with `CameraError::InvalidZoom` if `zoom_level` is zero,
    /// negative, or non-finite: a degenerate zoom would later surface as
    /// division-by-zero or infinities deep inside the mapping functions, so
    /// it is rejected at the boundary instead.
    pub fn new(origin: Point<Scene>, zoom_level: f64) -> Result<Self, CameraError> {
        Ok(Self {
            origin,
            zoom_level: check_zoom(zoom_level)?,
        })
    }

    pub fn origin(&self) -> Point<Scene> {
        self.origin
    }

    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    /// Same camera, looking at a different scene point.
    pub fn with_origin(&self, origin: Point<Scene>) -> Self {
        Self { origin, ..*self }
    }

    /// Same camera with a new zoom level; the origin is unchanged, so the
    /// zoom is visually centered on the viewport center. Use
    /// [`Camera::with_zoom_at_screen_point`] to anchor it elsewhere.
    pub fn with_zoom(&self, zoom_level: f64) -> Result<Self, CameraError> {
        Ok(Self {
            zoom_level: check_zoom(zoom_level)?,
            ..*self
        })
    }

    /// Shift the origin by a vector in scene units.
    pub fn translated_by(&self, delta: Vector<Scene>) -> Self {
        self.with_origin(self.origin + delta)
    }

    /// Shift the origin by a vector in screen units.
    ///
    /// Screen distance divided by zoom is scene distance, so this is the
    /// natural primitive for drag-to-pan gestures, where pointer deltas
    /// arrive in screen units.
    pub fn translated_by_screen(&self, delta: Vector<Screen>) -> Self {
        self.translated_by(self.vector_to_scene(delta))
    }

    /// Change zoom while keeping the scene content under `screen_point`
    /// visually fixed ("zoom under the cursor").
    ///
    /// Zoom-then-correct: map the anchor into the scene with the old camera,
    /// apply the plain zoom, map the same screen point again, and translate
    /// by the difference. Two extra transform evaluations per call, but the
    /// anchor stays exact under whatever `point_to_scene` does, and this is
    /// only invoked on discrete zoom gestures, never per animation frame.
    ///
    /// When `screen_point` is the viewport center the correction vector is
    /// zero and this degenerates to a plain `with_zoom`.
    pub fn with_zoom_at_screen_point(
        &self,
        zoom_level: f64,
        screen_point: Point<Screen>,
        viewport: &Rect<Screen>,
    ) -> Result<Self, CameraError> {
        let before = self.point_to_scene(viewport, screen_point);
        let zoomed = self.with_zoom(zoom_level)?;
        let after = zoomed.point_to_scene(viewport, screen_point);
        let correction = after.vector_to(&before);
        trace!(
            "anchored zoom {} -> {} at screen ({}, {}): correcting origin by ({}, {})",
            self.zoom_level,
            zoom_level,
            screen_point.x(),
            screen_point.y(),
            correction.x(),
            correction.y()
        );
        Ok(zoomed.translated_by(correction))
    }

    /// Map a scene point to screen coordinates, given the viewport rectangle
    /// the camera is rendered into.
    ///
    /// The scene offset from the origin is scaled by the zoom level and
    /// re-expressed relative to the viewport's center.
    pub fn point_to_screen(
        &self,
        viewport: &Rect<Screen>,
        scene_point: Point<Scene>,
    ) -> Point<Screen> {
        viewport.center() + self.vector_to_screen(scene_point - self.origin)
    }

    /// Inverse of [`Camera::point_to_screen`].
    pub fn point_to_scene(
        &self,
        viewport: &Rect<Screen>,
        screen_point: Point<Screen>,
    ) -> Point<Scene> {
        self.origin + self.vector_to_scene(screen_point - viewport.center())
    }

    /// Map a free scene vector to screen units. Vectors carry no position,
    /// so only the zoom level applies; the viewport rectangle is irrelevant.
    pub fn vector_to_screen(&self, scene_vector: Vector<Scene>) -> Vector<Screen> {
        Vector::new(
            scene_vector.x() * self.zoom_level,
            scene_vector.y() * self.zoom_level,
        )
    }

    /// Inverse of [`Camera::vector_to_screen`].
    pub fn vector_to_scene(&self, screen_vector: Vector<Screen>) -> Vector<Scene> {
        Vector::new(
            screen_vector.x() / self.zoom_level,
            screen_vector.y() / self.zoom_level,
        )
    }
}
