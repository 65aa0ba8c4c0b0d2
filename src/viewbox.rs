use crate::camera::Camera;
use crate::points::{Rect, Screen};
use serde::{Deserialize, Serialize};

/// The scene-space rectangle visible through a screen viewport, in the
/// x/y/width/height form an SVG `viewBox` attribute takes.
///
/// Values are kept in full f64 precision; rounding happens only at the
/// attribute boundary via [`ViewBox::rounded`] / [`ViewBox::to_attribute`],
/// since the SVG consumer does not need fractional precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Components rounded to the nearest integer, for the SVG attribute.
    pub fn rounded(&self) -> (i64, i64, i64, i64) {
        (
            self.x.round() as i64,
            self.y.round() as i64,
            self.width.round() as i64,
            self.height.round() as i64,
        )
    }

    /// Rounded `"x y width height"` string for an SVG `viewBox` attribute.
    pub fn to_attribute(&self) -> String {
        let (x, y, width, height) = self.rounded();
        format!("{} {} {} {}", x, y, width, height)
    }
}

impl Camera {
    /// The scene-space rectangle this camera currently shows through
    /// `viewport`: top-left corner via `point_to_scene` of the viewport's
    /// top-left screen corner, dimensions = viewport dimensions / zoom.
    pub fn view_box_for(&self, viewport: &Rect<Screen>) -> ViewBox {
        self.view_box_for_focus(viewport, viewport)
    }

    /// Variant for a logical viewport that is a sub-region of a larger
    /// rendering surface (e.g. on-screen chrome that does not pan or zoom
    /// with the scene). The camera is centered on `focus`, but the returned
    /// rectangle covers all of `render`: the top-left probe is `render`'s
    /// corner mapped through `focus`, and the dimensions are `render`'s.
    pub fn view_box_for_focus(&self, focus: &Rect<Screen>, render: &Rect<Screen>) -> ViewBox {
        let top_left = self.point_to_scene(focus, render.top_left());
        ViewBox::new(
            top_left.x(),
            top_left.y(),
            render.width() / self.zoom_level(),
            render.height() / self.zoom_level(),
        )
    }
}
