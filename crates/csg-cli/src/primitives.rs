//! Primitive mesh constructors: cube, sphere, cylinder, cone.
//!
//! Ported from `CSG.cube`/`CSG.sphere`/`CSG.cylinder`/`CSG.cone` in the
//! reference Python implementation this crate's Boolean algebra is
//! grounded in, using explicit parameter structs instead of a kwargs
//! dict and `nalgebra` throughout instead of hand-rolled vector math.

use std::f32::consts::PI;

use csg_core::{CsgError, Polygon, Rectangle, Solid, Vertex};
use nalgebra::{Point3, Vector3};

/// An axis-aligned cuboid. Each face is built as a [`Rectangle`] (cube
/// faces are always exact planar rectangles), so every vertex carries the
/// rectangle's flat per-face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    pub center: Point3<f32>,
    pub radius: Vector3<f32>,
}

impl Default for Cube {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            radius: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Cube {
    /// Builds the six face polygons of this cube into a [`Solid`].
    pub fn build(self) -> Result<Solid, CsgError> {
        let c = self.center;
        let r = self.radius;
        if r.x <= 0.0 || r.y <= 0.0 || r.z <= 0.0 {
            return Err(CsgError::InvalidPrimitiveParameter("cube radius must be positive on every axis"));
        }

        // Corner `i` selects ±1 on each axis from bits 0 (x), 1 (y), 2 (z).
        let corner = |i: u8| -> Point3<f32> {
            let sign = |bit: u8| if i & bit != 0 { 1.0 } else { -1.0 };
            Point3::new(c.x + r.x * sign(1), c.y + r.y * sign(2), c.z + r.z * sign(4))
        };

        // Four corner indices per face, in counter-clockwise winding
        // order when viewed from outside.
        const FACES: [[u8; 4]; 6] = [
            [0, 4, 6, 2], // -X
            [1, 3, 7, 5], // +X
            [0, 1, 5, 4], // -Y
            [2, 6, 7, 3], // +Y
            [0, 2, 3, 1], // -Z
            [4, 5, 7, 6], // +Z
        ];

        let mut polygons = Vec::with_capacity(6);
        for [i0, i1, i2, i3] in FACES {
            let rectangle = Rectangle::from_corners(corner(i0), corner(i1), corner(i2), corner(i3));
            polygons.push(Polygon::try_from(rectangle)?);
        }
        Ok(Solid::from_polygons(polygons))
    }
}

/// A UV-tessellated sphere with per-vertex radial normals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3<f32>,
    pub radius: f32,
    pub slices: u32,
    pub stacks: u32,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            radius: 1.0,
            slices: 16,
            stacks: 8,
        }
    }
}

impl Sphere {
    pub fn build(self) -> Result<Solid, CsgError> {
        if self.slices < 3 || self.stacks < 2 {
            return Err(CsgError::InvalidPrimitiveParameter("sphere needs at least 3 slices and 2 stacks"));
        }
        if self.radius <= 0.0 {
            return Err(CsgError::InvalidPrimitiveParameter("sphere radius must be positive"));
        }

        let d_theta = 2.0 * PI / self.slices as f32;
        let d_phi = PI / self.stacks as f32;

        let vertex_at = |theta: f32, phi: f32| -> Vertex {
            let direction = Vector3::new(theta.cos() * phi.sin(), phi.cos(), theta.sin() * phi.sin());
            Vertex::new(self.center + direction * self.radius, direction)
        };

        let mut polygons = Vec::new();
        for i in 0..self.slices {
            for j in 0..self.stacks {
                let mut vertices = Vec::with_capacity(4);
                vertices.push(vertex_at(i as f32 * d_theta, j as f32 * d_phi));
                let i1 = (i + 1) % self.slices;
                let j1 = j + 1;
                if j > 0 {
                    vertices.push(vertex_at(i1 as f32 * d_theta, j as f32 * d_phi));
                }
                if j < self.stacks - 1 {
                    vertices.push(vertex_at(i1 as f32 * d_theta, j1 as f32 * d_phi));
                }
                vertices.push(vertex_at(i as f32 * d_theta, j1 as f32 * d_phi));
                polygons.push(Polygon::new(vertices)?);
            }
        }
        Ok(Solid::from_polygons(polygons))
    }
}

/// Returns an orthonormal (axisX, axisY, axisZ) frame with `axisZ` along
/// `ray`'s direction, matching the reference implementation's choice of
/// a stable perpendicular axis.
fn axis_frame(ray: Vector3<f32>) -> (Vector3<f32>, Vector3<f32>, Vector3<f32>) {
    let axis_z = ray.normalize();
    let is_y = axis_z.y.abs() > 0.5;
    let seed = Vector3::new(if is_y { 1.0 } else { 0.0 }, if is_y { 0.0 } else { 1.0 }, 0.0);
    let axis_x = seed.cross(&axis_z).normalize();
    let axis_y = axis_x.cross(&axis_z).normalize();
    (axis_x, axis_y, axis_z)
}

/// A cylinder between two points, with flat caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
    pub radius: f32,
    pub slices: u32,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            start: Point3::new(0.0, -1.0, 0.0),
            end: Point3::new(0.0, 1.0, 0.0),
            radius: 1.0,
            slices: 16,
        }
    }
}

impl Cylinder {
    pub fn build(self) -> Result<Solid, CsgError> {
        if self.slices < 3 {
            return Err(CsgError::InvalidPrimitiveParameter("cylinder needs at least 3 slices"));
        }
        let ray = self.end - self.start;
        if ray.norm() <= f32::EPSILON {
            return Err(CsgError::InvalidPrimitiveParameter("cylinder start and end must differ"));
        }
        if self.radius <= 0.0 {
            return Err(CsgError::InvalidPrimitiveParameter("cylinder radius must be positive"));
        }

        let (axis_x, axis_y, axis_z) = axis_frame(ray);
        let start_vertex = Vertex::new(self.start, -axis_z);
        let end_vertex = Vertex::new(self.end, axis_z);

        let point = |stack: f32, angle: f32, normal_blend: f32| -> Vertex {
            let out = axis_x * angle.cos() + axis_y * angle.sin();
            let pos = self.start + ray * stack + out * self.radius;
            let normal = out * (1.0 - normal_blend.abs()) + axis_z * normal_blend;
            Vertex::new(pos, normal)
        };

        let dt = 2.0 * PI / self.slices as f32;
        let mut polygons = Vec::with_capacity(self.slices as usize * 3);
        for i in 0..self.slices {
            let t0 = i as f32 * dt;
            let i1 = (i + 1) % self.slices;
            let t1 = i1 as f32 * dt;

            polygons.push(Polygon::new(vec![start_vertex, point(0.0, t0, -1.0), point(0.0, t1, -1.0)])?);
            polygons.push(Polygon::new(vec![
                point(0.0, t1, 0.0),
                point(0.0, t0, 0.0),
                point(1.0, t0, 0.0),
                point(1.0, t1, 0.0),
            ])?);
            polygons.push(Polygon::new(vec![end_vertex, point(1.0, t1, 1.0), point(1.0, t0, 1.0)])?);
        }
        Ok(Solid::from_polygons(polygons))
    }
}

/// A cone between two points: a disk at `start`, tapering to a point at `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
    pub radius: f32,
    pub slices: u32,
}

impl Default for Cone {
    fn default() -> Self {
        Self {
            start: Point3::new(0.0, -1.0, 0.0),
            end: Point3::new(0.0, 1.0, 0.0),
            radius: 1.0,
            slices: 16,
        }
    }
}

impl Cone {
    pub fn build(self) -> Result<Solid, CsgError> {
        if self.slices < 3 {
            return Err(CsgError::InvalidPrimitiveParameter("cone needs at least 3 slices"));
        }
        let ray = self.end - self.start;
        let ray_length = ray.norm();
        if ray_length <= f32::EPSILON {
            return Err(CsgError::InvalidPrimitiveParameter("cone start and end must differ"));
        }
        if self.radius <= 0.0 {
            return Err(CsgError::InvalidPrimitiveParameter("cone radius must be positive"));
        }

        let (axis_x, axis_y, axis_z) = axis_frame(ray);
        let start_normal = -axis_z;
        let start_vertex = Vertex::new(self.start, start_normal);

        let taper_angle = self.radius.atan2(ray_length);
        let (sin_taper, cos_taper) = taper_angle.sin_cos();

        let point = |angle: f32| -> (Point3<f32>, Vector3<f32>) {
            let out = axis_x * angle.cos() + axis_y * angle.sin();
            let pos = self.start + out * self.radius;
            let normal = out * cos_taper + axis_z * sin_taper;
            (pos, normal)
        };

        let dt = 2.0 * PI / self.slices as f32;
        let mut polygons = Vec::with_capacity(self.slices as usize * 2);
        for i in 0..self.slices {
            let t0 = i as f32 * dt;
            let i1 = (i + 1) % self.slices;
            let t1 = i1 as f32 * dt;

            let (p0, n0) = point(t0);
            let (p1, n1) = point(t1);
            let tip_normal = (n0 + n1) * 0.5;

            polygons.push(Polygon::new(vec![
                start_vertex,
                Vertex::new(p0, start_normal),
                Vertex::new(p1, start_normal),
            ])?);
            polygons.push(Polygon::new(vec![Vertex::new(p0, n0), Vertex::new(self.end, tip_normal), Vertex::new(p1, n1)])?);
        }
        Ok(Solid::from_polygons(polygons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cube_has_six_quad_faces() {
        let solid = Cube::default().build().unwrap();
        assert_eq!(solid.polygons().len(), 6);
        assert!(solid.polygons().iter().all(|p| p.len() == 4));
    }

    #[test]
    fn cube_rejects_non_positive_radius() {
        let cube = Cube {
            radius: Vector3::new(0.0, 1.0, 1.0),
            ..Cube::default()
        };
        assert!(cube.build().is_err());
    }

    #[test]
    fn default_sphere_builds_expected_face_count() {
        let sphere = Sphere::default();
        let solid = sphere.build().unwrap();
        // Two triangle caps per slice (at the top and bottom stacks) plus
        // quads for every other stack row.
        let expected = sphere.slices as usize * sphere.stacks as usize;
        assert_eq!(solid.polygons().len(), expected);
    }

    #[test]
    fn sphere_rejects_too_few_slices() {
        let sphere = Sphere { slices: 2, ..Sphere::default() };
        assert!(sphere.build().is_err());
    }

    #[test]
    fn default_cylinder_has_three_faces_per_slice() {
        let cylinder = Cylinder::default();
        let solid = cylinder.build().unwrap();
        assert_eq!(solid.polygons().len(), cylinder.slices as usize * 3);
    }

    #[test]
    fn default_cone_has_two_faces_per_slice() {
        let cone = Cone::default();
        let solid = cone.build().unwrap();
        assert_eq!(solid.polygons().len(), cone.slices as usize * 2);
    }
}
