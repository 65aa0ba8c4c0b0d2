use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Marker for scene space: the coordinate system of the drawing content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scene;

/// Marker for screen space: the coordinate system of the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen;

/// A 2D point tagged with the coordinate space it lives in.
///
/// The tag has no runtime representation; it exists so that a scene point
/// cannot be passed where a screen point is expected. Crossing spaces goes
/// through the camera's named conversion functions, never through arithmetic.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Point<S> {
    x: f64,
    y: f64,
    #[serde(skip)]
    _space: PhantomData<S>,
}

// Manual impls: the space tag is phantom, so none of these need `S` bounds
// (a derive would demand `S: Clone` etc. and poison generic callers).
impl<S> Clone for Point<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Point<S> {}

impl<S> PartialEq for Point<S> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// A free 2D vector (direction + magnitude, no position) tagged with its space.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Vector<S> {
    x: f64,
    y: f64,
    #[serde(skip)]
    _space: PhantomData<S>,
}

impl<S> Clone for Vector<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Vector<S> {}

impl<S> PartialEq for Vector<S> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<S> Point<S> {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn into_parts(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// The vector that carries `self` onto `other`.
    pub fn vector_to(&self, other: &Self) -> Vector<S> {
        *other - *self
    }
}

impl<S> Vector<S> {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn into_parts(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl<S> Add<Vector<S>> for Point<S> {
    type Output = Point<S>;

    fn add(self, v: Vector<S>) -> Point<S> {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

impl<S> Sub<Vector<S>> for Point<S> {
    type Output = Point<S>;

    fn sub(self, v: Vector<S>) -> Point<S> {
        Point::new(self.x - v.x, self.y - v.y)
    }
}

impl<S> Sub<Point<S>> for Point<S> {
    type Output = Vector<S>;

    fn sub(self, other: Point<S>) -> Vector<S> {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl<S> Add<Vector<S>> for Vector<S> {
    type Output = Vector<S>;

    fn add(self, other: Vector<S>) -> Vector<S> {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl<S> Sub<Vector<S>> for Vector<S> {
    type Output = Vector<S>;

    fn sub(self, other: Vector<S>) -> Vector<S> {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl<S> Neg for Vector<S> {
    type Output = Vector<S>;

    fn neg(self) -> Vector<S> {
        Vector::new(-self.x, -self.y)
    }
}

impl<S> Mul<f64> for Vector<S> {
    type Output = Vector<S>;

    fn mul(self, scalar: f64) -> Vector<S> {
        Vector::new(self.x * scalar, self.y * scalar)
    }
}

impl<S> Div<f64> for Vector<S> {
    type Output = Vector<S>;

    fn div(self, scalar: f64) -> Vector<S> {
        Vector::new(self.x / scalar, self.y / scalar)
    }
}

/// An axis-aligned rectangle in a tagged coordinate space.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Rect<S> {
    pub min: Point<S>,
    pub max: Point<S>,
}

impl<S> Clone for Rect<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Rect<S> {}

impl<S> PartialEq for Rect<S> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl<S> Rect<S> {
    pub fn new(min: Point<S>, max: Point<S>) -> Self {
        Self { min, max }
    }

    /// Build a rectangle from its top-left corner and dimensions.
    pub fn from_origin_size(origin: Point<S>, width: f64, height: f64) -> Self {
        Self {
            min: origin,
            max: Point::new(origin.x() + width, origin.y() + height),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point<S> {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Top-left corner (screen axes: +y points down, so this is `min`).
    pub fn top_left(&self) -> Point<S> {
        self.min
    }

    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_construction_and_accessors() {
        let point: Point<Scene> = Point::new(10.5, 20.5);
        assert_eq!(point.x(), 10.5);
        assert_eq!(point.y(), 20.5);
    }

    #[test]
    fn test_point_into_parts() {
        let point: Point<Screen> = Point::new(10.5, 20.5);
        let (x, y) = point.into_parts();
        assert_eq!(x, 10.5);
        assert_eq!(y, 20.5);
    }

    #[test]
    fn test_point_minus_point_is_vector() {
        let a: Point<Scene> = Point::new(5.0, 7.0);
        let b: Point<Scene> = Point::new(2.0, 3.0);
        let v = a - b;
        assert_eq!(v.x(), 3.0);
        assert_eq!(v.y(), 4.0);
    }

    #[test]
    fn test_point_plus_vector() {
        let p: Point<Scene> = Point::new(1.0, 2.0);
        let v: Vector<Scene> = Vector::new(3.0, 4.0);
        let moved = p + v;
        assert_eq!(moved.x(), 4.0);
        assert_eq!(moved.y(), 6.0);
    }

    #[test]
    fn test_point_minus_vector() {
        let p: Point<Scene> = Point::new(1.0, 2.0);
        let v: Vector<Scene> = Vector::new(3.0, 4.0);
        let moved = p - v;
        assert_eq!(moved.x(), -2.0);
        assert_eq!(moved.y(), -2.0);
    }

    #[test]
    fn test_vector_to() {
        let a: Point<Scene> = Point::new(1.0, 1.0);
        let b: Point<Scene> = Point::new(4.0, -1.0);
        let v = a.vector_to(&b);
        assert_eq!(v.x(), 3.0);
        assert_eq!(v.y(), -2.0);
        // Carrying a onto b along v lands exactly on b.
        assert_eq!(a + v, b);
    }

    #[test]
    fn test_vector_arithmetic() {
        let v: Vector<Screen> = Vector::new(2.0, -3.0);
        let w: Vector<Screen> = Vector::new(1.0, 1.0);
        assert_eq!((v + w).into_parts(), (3.0, -2.0));
        assert_eq!((v - w).into_parts(), (1.0, -4.0));
        assert_eq!((-v).into_parts(), (-2.0, 3.0));
    }

    #[test]
    fn test_vector_scalar_mul_div() {
        let v: Vector<Scene> = Vector::new(2.0, 3.0);
        let scaled = v * 2.5;
        assert_eq!(scaled.x(), 5.0);
        assert_eq!(scaled.y(), 7.5);
        let divided = scaled / 2.5;
        assert_eq!(divided.x(), 2.0);
        assert_eq!(divided.y(), 3.0);
    }

    #[test]
    fn test_rect_dimensions() {
        let rect: Rect<Screen> = Rect::new(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);
    }

    #[test]
    fn test_rect_center() {
        let rect: Rect<Screen> = Rect::new(Point::new(0.0, 0.0), Point::new(400.0, 400.0));
        assert_eq!(rect.center(), Point::new(200.0, 200.0));
    }

    #[test]
    fn test_rect_center_offset_rect() {
        let rect: Rect<Screen> = Rect::new(Point::new(100.0, -50.0), Point::new(300.0, 150.0));
        assert_eq!(rect.center(), Point::new(200.0, 50.0));
    }

    #[test]
    fn test_rect_from_origin_size() {
        let rect: Rect<Screen> = Rect::from_origin_size(Point::new(10.0, 20.0), 200.0, 100.0);
        assert_eq!(rect.min, Point::new(10.0, 20.0));
        assert_eq!(rect.max, Point::new(210.0, 120.0));
        assert_eq!(rect.top_left(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_rect_is_valid_for_valid_rect() {
        let rect: Rect<Screen> = Rect::new(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
        assert!(rect.is_valid());
    }

    #[test]
    fn test_rect_is_valid_for_inverted_x() {
        let rect: Rect<Screen> = Rect::new(Point::new(100.0, 0.0), Point::new(0.0, 50.0));
        assert!(!rect.is_valid());
    }

    #[test]
    fn test_rect_is_valid_for_zero_size() {
        let rect: Rect<Screen> = Rect::new(Point::new(50.0, 50.0), Point::new(50.0, 50.0));
        assert!(rect.is_valid()); // a point is a degenerate but valid rect
    }

    #[test]
    fn test_point_serialization_roundtrip() {
        let original: Point<Scene> = Point::new(-12.25, 7.5);
        let json = serde_json::to_string(&original).unwrap();
        let restored: Point<Scene> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_rect_serialization_roundtrip() {
        let original: Rect<Screen> = Rect::new(Point::new(0.0, 0.0), Point::new(640.0, 480.0));
        let json = serde_json::to_string(&original).unwrap();
        let restored: Rect<Screen> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
