//! Generic polygon representation for BSP trees.

use nalgebra::{Point3, Vector3};

use crate::error::CsgError;
use crate::plane::{Classification, Plane};
use crate::vertex::Vertex;

/// A convex polygon in 3D space, defined by an ordered list of vertices.
///
/// Vertices should be coplanar and in counter-clockwise winding order
/// when viewed from the front (the direction the normal points).
///
/// Construction is the fail-fast boundary for this crate: a [`Polygon`]
/// that exists is guaranteed to have at least 3 vertices and a
/// well-defined plane. Degeneracy encountered later, while cutting an
/// already-valid polygon against a [`Plane`], is not reported through
/// this type — see [`Plane::split_polygon`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    plane: Plane,
}

impl Polygon {
    /// Creates a new polygon from a list of vertices.
    ///
    /// Fails if fewer than 3 vertices are supplied, or if the first three
    /// vertices are collinear (no well-defined plane). Later vertices are
    /// not checked for coplanarity; callers that build polygons directly
    /// from triangulated data get this for free.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self, CsgError> {
        if vertices.len() < 3 {
            return Err(CsgError::DegeneratePolygon(vertices.len()));
        }
        let plane = Plane::from_three_points(vertices[0].position, vertices[1].position, vertices[2].position)?;
        Ok(Self { vertices, plane })
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: a [`Polygon`] cannot be constructed with zero vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the plane this polygon lies on, computed once at
    /// construction time from its first three vertices.
    #[inline]
    pub fn plane(&self) -> Plane {
        self.plane
    }

    /// Computes the centroid (center of mass) of the polygon's vertices.
    pub fn centroid(&self) -> Point3<f32> {
        let sum: Vector3<f32> = self.vertices.iter().map(|v| v.position.coords).sum();
        Point3::from(sum / self.vertices.len() as f32)
    }

    /// Reverses winding order and flips the plane and every vertex normal,
    /// turning the polygon inside out.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
    }

    /// Classifies this polygon relative to `plane`. Delegates to
    /// [`Plane::classify_polygon`].
    pub fn classify(&self, plane: &Plane) -> Classification {
        plane.classify_polygon(self)
    }

    /// Translates every vertex position by `offset` in place. Normals are
    /// untouched: translation is not a linear map on directions. The
    /// cached plane is translated the same way, so it stays consistent
    /// with the moved vertices without being recomputed from scratch.
    pub fn translate(&mut self, offset: Vector3<f32>) {
        for v in &mut self.vertices {
            v.position += offset;
        }
        self.plane.translate(offset);
    }

    /// Rotates every vertex position (and, when present, normal) about the
    /// origin in place by applying `rotate` to each. The cached plane's
    /// normal is rotated the same way rather than re-derived from the
    /// rotated vertices, so a plane that happens to sit right at the
    /// collinearity threshold can never push this operation into the
    /// fallible constructor.
    pub fn rotate(&mut self, rotate: impl Fn(Vector3<f32>) -> Vector3<f32>) {
        for v in &mut self.vertices {
            v.position = Point3::from(rotate(v.position.coords));
            v.normal = v.normal.map(&rotate);
        }
        self.plane.rotate(rotate);
    }
}
