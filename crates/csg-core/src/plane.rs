//! Plane representation, classification, and the polygon-splitting
//! primitive the whole BSP tree is built on.

use log::debug;
use nalgebra::{Point3, Vector3};

use crate::error::CsgError;
use crate::polygon::Polygon;

/// Default epsilon for plane classification.
/// Points within this distance of the plane are considered "on" the plane.
pub const PLANE_EPSILON: f32 = 1e-5;

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Point is in front of the plane (positive side of normal)
    Front,
    /// Point is behind the plane (negative side of normal)
    Back,
    /// Point lies on the plane (within epsilon tolerance)
    OnPlane,
}

/// Classification of a whole polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// All vertices are in front of the plane
    Front,
    /// All vertices are behind the plane
    Back,
    /// All vertices are on the plane (coplanar)
    Coplanar,
    /// Vertices are on both sides (spans the plane)
    Spanning,
}

/// A plane in 3D space, represented as `normal · point = offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3<f32>,
    offset: f32,
}

impl Plane {
    /// Creates a new plane from a normal vector and offset.
    /// The normal is normalized automatically.
    pub fn new(normal: Vector3<f32>, offset: f32) -> Result<Self, CsgError> {
        let norm = normal.norm();
        if norm <= f32::EPSILON {
            return Err(CsgError::DegeneratePlane);
        }
        Ok(Self {
            normal: normal / norm,
            offset: offset / norm,
        })
    }

    /// Creates a plane from a point on the plane and a normal vector.
    pub fn from_point_and_normal(point: Point3<f32>, normal: Vector3<f32>) -> Result<Self, CsgError> {
        let norm = normal.norm();
        if norm <= f32::EPSILON {
            return Err(CsgError::DegeneratePlane);
        }
        let unit_normal = normal / norm;
        let offset = unit_normal.dot(&point.coords);
        Ok(Self {
            normal: unit_normal,
            offset,
        })
    }

    /// Creates a plane from three non-collinear points.
    /// The normal direction follows the right-hand rule: (b - a) × (c - a).
    pub fn from_three_points(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Result<Self, CsgError> {
        let ab = b - a;
        let ac = c - a;
        let normal = ab.cross(&ac);
        Self::from_point_and_normal(a, normal)
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> Vector3<f32> {
        self.normal
    }

    /// Returns the signed distance from the origin to the plane along the normal.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Computes the signed distance from a point to the plane.
    /// - Positive: point is in front (same side as normal)
    /// - Negative: point is behind (opposite side from normal)
    /// - Zero: point is on the plane
    #[inline]
    pub fn signed_distance(&self, point: Point3<f32>) -> f32 {
        self.normal.dot(&point.coords) - self.offset
    }

    /// Classifies which side of the plane a point lies on, using
    /// [`PLANE_EPSILON`].
    #[inline]
    pub fn classify_point(&self, point: Point3<f32>) -> PlaneSide {
        let dist = self.signed_distance(point);
        if dist > PLANE_EPSILON {
            PlaneSide::Front
        } else if dist < -PLANE_EPSILON {
            PlaneSide::Back
        } else {
            PlaneSide::OnPlane
        }
    }

    /// Returns a new plane with the normal flipped (facing the opposite direction).
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// Negates this plane's normal and offset in place.
    #[inline]
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.offset = -self.offset;
    }

    /// Shifts the plane by `offset` in place: `n·p = w` becomes `n·(p +
    /// offset) = w + n·offset`, so only the scalar offset moves.
    #[inline]
    pub fn translate(&mut self, offset: Vector3<f32>) {
        self.offset += self.normal.dot(&offset);
    }

    /// Rotates the plane about the origin in place by applying `rotate` to
    /// its normal. `offset` is unchanged: `n·p = w` is dot-product
    /// invariant under simultaneously rotating both `n` and `p`, and
    /// `rotate` is assumed to be exactly that rotation.
    #[inline]
    pub fn rotate(&mut self, rotate: impl Fn(Vector3<f32>) -> Vector3<f32>) {
        self.normal = rotate(self.normal);
    }

    /// Classifies a whole polygon relative to this plane.
    pub fn classify_polygon(&self, polygon: &Polygon) -> Classification {
        let mut front = 0;
        let mut back = 0;
        let mut on_plane = 0;
        for v in polygon.vertices() {
            match self.classify_point(v.position) {
                PlaneSide::Front => front += 1,
                PlaneSide::Back => back += 1,
                PlaneSide::OnPlane => on_plane += 1,
            }
        }

        if on_plane == polygon.vertices().len() {
            Classification::Coplanar
        } else if back == 0 {
            Classification::Front
        } else if front == 0 {
            Classification::Back
        } else {
            Classification::Spanning
        }
    }

    /// Splits `polygon` against this plane, appending the result into the
    /// appropriate bucket(s).
    ///
    /// This is the polygon-split dispatcher: classify each vertex,
    /// OR the tags together, and dispatch on the combined tag.
    /// `coplanar_front`/`coplanar_back` receive whole, unsplit polygons
    /// (facing the same or the opposite direction as this plane);
    /// `front`/`back` receive whole polygons entirely on one side, or the
    /// two pieces of a spanning polygon after it is cut.
    ///
    /// A spanning cut whose resulting piece has fewer than 3 vertices, or
    /// whose leading three vertices turn out to be collinear, is dropped
    /// silently (and logged at `debug`) rather than surfaced as an error —
    /// this is the one place "discard the degenerate polygon" actually
    /// happens.
    pub fn split_polygon(
        &self,
        polygon: &Polygon,
        coplanar_front: &mut Vec<Polygon>,
        coplanar_back: &mut Vec<Polygon>,
        front: &mut Vec<Polygon>,
        back: &mut Vec<Polygon>,
    ) {
        match self.classify_polygon(polygon) {
            Classification::Coplanar => {
                if self.normal.dot(&polygon.plane().normal()) > 0.0 {
                    coplanar_front.push(polygon.clone());
                } else {
                    coplanar_back.push(polygon.clone());
                }
            }
            Classification::Front => front.push(polygon.clone()),
            Classification::Back => back.push(polygon.clone()),
            Classification::Spanning => self.split_spanning(polygon, front, back),
        }
    }

    fn split_spanning(&self, polygon: &Polygon, front: &mut Vec<Polygon>, back: &mut Vec<Polygon>) {
        let vertices = polygon.vertices();
        let n = vertices.len();
        let mut front_verts = Vec::with_capacity(n + 1);
        let mut back_verts = Vec::with_capacity(n + 1);

        for i in 0..n {
            let j = (i + 1) % n;
            let vi = vertices[i];
            let vj = vertices[j];
            let ti = self.classify_point(vi.position);
            let tj = self.classify_point(vj.position);

            if ti != PlaneSide::Back {
                front_verts.push(vi);
            }
            if ti != PlaneSide::Front {
                back_verts.push(vi);
            }

            let spans = matches!(
                (ti, tj),
                (PlaneSide::Front, PlaneSide::Back) | (PlaneSide::Back, PlaneSide::Front)
            );
            if spans {
                let denom = self.normal.dot(&(vj.position - vi.position));
                let t = (self.offset - self.normal.dot(&vi.position.coords)) / denom;
                let v = vi.interpolate(&vj, t);
                front_verts.push(v);
                back_verts.push(v);
            }
        }

        if front_verts.len() >= 3 {
            match Polygon::new(front_verts) {
                Ok(p) => front.push(p),
                Err(e) => debug!("dropping degenerate front split of spanning polygon: {e}"),
            }
        }
        if back_verts.len() >= 3 {
            match Polygon::new(back_verts) {
                Ok(p) => back.push(p),
                Err(e) => debug!("dropping degenerate back split of spanning polygon: {e}"),
            }
        }
    }
}
