//! Rectangle (quad) representation, convertible into a [`Polygon`].

use nalgebra::{Point3, Vector3};

use crate::error::CsgError;
use crate::plane::Plane;
use crate::polygon::Polygon;
use crate::vector::unit_or_zero;
use crate::vertex::Vertex;

/// A rectangle (quad) in 3D space, defined by a corner and two edge vectors.
///
/// The four vertices are:
/// - `origin`
/// - `origin + u`
/// - `origin + u + v`
/// - `origin + v`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    origin: Point3<f32>,
    u: Vector3<f32>,
    v: Vector3<f32>,
}

impl Rectangle {
    /// Creates a new rectangle from an origin corner and two edge vectors.
    ///
    /// The vertices will be: origin, origin+u, origin+u+v, origin+v (counter-clockwise).
    pub fn new(origin: Point3<f32>, u: Vector3<f32>, v: Vector3<f32>) -> Self {
        Self { origin, u, v }
    }

    /// Creates a rectangle from four corner points.
    ///
    /// The winding order should be: a -> b -> c -> d (counter-clockwise).
    /// Internally computes u = b - a and v = d - a; coplanarity of `c` is
    /// not checked here (use [`Polygon::new`] afterward if that matters).
    pub fn from_corners(a: Point3<f32>, b: Point3<f32>, _c: Point3<f32>, d: Point3<f32>) -> Self {
        let u = b - a;
        let v = d - a;
        Self { origin: a, u, v }
    }

    /// Returns the origin corner of the rectangle.
    #[inline]
    pub fn origin(&self) -> Point3<f32> {
        self.origin
    }

    /// Returns the first edge vector.
    #[inline]
    pub fn u(&self) -> Vector3<f32> {
        self.u
    }

    /// Returns the second edge vector.
    #[inline]
    pub fn v(&self) -> Vector3<f32> {
        self.v
    }

    /// Returns the four vertices of the rectangle.
    ///
    /// Order: origin, origin+u, origin+u+v, origin+v (counter-clockwise).
    pub fn vertices(&self) -> [Point3<f32>; 4] {
        [
            self.origin,
            self.origin + self.u,
            self.origin + self.u + self.v,
            self.origin + self.v,
        ]
    }

    /// Computes the (unnormalized) normal vector of the rectangle.
    ///
    /// The direction follows the right-hand rule: u x v.
    pub fn normal(&self) -> Vector3<f32> {
        self.u.cross(&self.v)
    }

    /// Computes the unit normal vector, or the zero vector if the
    /// rectangle is degenerate (zero area).
    pub fn unit_normal(&self) -> Vector3<f32> {
        unit_or_zero(self.normal())
    }

    /// Returns the plane that this rectangle lies on.
    pub fn plane(&self) -> Result<Plane, CsgError> {
        Plane::from_point_and_normal(self.origin, self.normal())
    }

    /// Computes the centroid (center) of the rectangle.
    pub fn centroid(&self) -> Point3<f32> {
        self.origin + (self.u + self.v) * 0.5
    }

    /// Computes the area of the rectangle.
    pub fn area(&self) -> f32 {
        self.normal().norm()
    }
}

impl TryFrom<Rectangle> for Polygon {
    type Error = CsgError;

    fn try_from(rectangle: Rectangle) -> Result<Self, Self::Error> {
        Polygon::try_from(&rectangle)
    }
}

impl TryFrom<&Rectangle> for Polygon {
    type Error = CsgError;

    fn try_from(rectangle: &Rectangle) -> Result<Self, Self::Error> {
        let normal = rectangle.unit_normal();
        let normal = if normal == Vector3::zeros() { None } else { Some(normal) };
        let vertices = rectangle
            .vertices()
            .into_iter()
            .map(|p| match normal {
                Some(n) => Vertex::new(p, n),
                None => Vertex::without_normal(p),
            })
            .collect();
        Polygon::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_to_polygon_has_four_vertices_with_shared_normal() {
        let rect = Rectangle::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let polygon = Polygon::try_from(rect).unwrap();
        assert_eq!(polygon.vertices().len(), 4);
        assert_eq!(polygon.vertices()[0].normal, Some(Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn area_of_unit_square_is_one() {
        let rect = Rectangle::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(rect.area(), 1.0);
    }
}
