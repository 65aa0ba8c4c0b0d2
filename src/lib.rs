pub mod camera;
pub mod error;
pub mod points;
pub mod viewbox;
pub mod zoom_space;

pub use camera::Camera;
pub use error::CameraError;
pub use points::{Point, Rect, Scene, Screen, Vector};
pub use viewbox::ViewBox;
pub use zoom_space::ZoomSpacePoint;
