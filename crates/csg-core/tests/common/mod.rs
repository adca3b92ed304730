//! Shared fixtures for the crate-level integration tests.

use csg_core::{Solid, Vertex};
use nalgebra::{Point3, Vector3};

/// Builds an axis-aligned cube `Solid` centered at `center` with the given
/// half-extent along every axis, triangulated two triangles per face.
pub fn cube_solid(center: Point3<f32>, half: f32) -> Solid {
    let c = |x: f32, y: f32, z: f32| Point3::new(center.x + x * half, center.y + y * half, center.z + z * half);

    let c000 = c(-1.0, -1.0, -1.0);
    let c001 = c(-1.0, -1.0, 1.0);
    let c010 = c(-1.0, 1.0, -1.0);
    let c011 = c(-1.0, 1.0, 1.0);
    let c100 = c(1.0, -1.0, -1.0);
    let c101 = c(1.0, -1.0, 1.0);
    let c110 = c(1.0, 1.0, -1.0);
    let c111 = c(1.0, 1.0, 1.0);

    let faces = [
        [c000, c001, c011, c010], // -X
        [c100, c110, c111, c101], // +X
        [c000, c100, c101, c001], // -Y
        [c010, c011, c111, c110], // +Y
        [c000, c010, c110, c100], // -Z
        [c001, c101, c111, c011], // +Z
    ];

    let mut polygons = Vec::with_capacity(12);
    for [v0, v1, v2, v3] in faces {
        polygons.push(triangle_polygon(v0, v1, v2));
        polygons.push(triangle_polygon(v0, v2, v3));
    }
    Solid::from_polygons(polygons)
}

fn triangle_polygon(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> csg_core::Polygon {
    csg_core::Polygon::new(vec![
        Vertex::without_normal(a),
        Vertex::without_normal(b),
        Vertex::without_normal(c),
    ])
    .expect("non-degenerate test fixture triangle")
}

/// Approximates a solid's volume via the divergence theorem: each polygon
/// is fan-triangulated from its first vertex, and each triangle contributes
/// its signed tetrahedron volume with the origin.
pub fn solid_volume(solid: &Solid) -> f32 {
    let mut total = 0.0;
    for polygon in solid.polygons() {
        let verts = polygon.vertices();
        let origin = verts[0].position;
        for i in 1..verts.len() - 1 {
            let a = origin.coords;
            let b = verts[i].position.coords;
            let c = verts[i + 1].position.coords;
            total += a.dot(&b.cross(&c));
        }
    }
    (total / 6.0).abs()
}

/// Sum of (unsigned) polygon areas across the whole solid, via
/// fan-triangulation.
pub fn solid_surface_area(solid: &Solid) -> f32 {
    let mut total = 0.0;
    for polygon in solid.polygons() {
        let verts = polygon.vertices();
        let origin = verts[0].position;
        let mut normal_sum = Vector3::zeros();
        for i in 1..verts.len() - 1 {
            let a = verts[i].position - origin;
            let b = verts[i + 1].position - origin;
            normal_sum += a.cross(&b);
        }
        total += normal_sum.norm() * 0.5;
    }
    total
}

/// Builds an octahedron `Solid` (8 triangular faces, vertices on the
/// coordinate axes at distance `radius` from `center`) — a minimal
/// bounded, strictly-convex, non-axis-aligned-faced fixture for
/// scenario tests that want something rounder than a cube without the
/// bookkeeping of a full UV-sphere tessellation.
pub fn octahedron_solid(center: Point3<f32>, radius: f32) -> Solid {
    let axis = |sign: f32, unit: Vector3<f32>| center + unit * (sign * radius);
    let x = |s: f32| axis(s, Vector3::x());
    let y = |s: f32| axis(s, Vector3::y());
    let z = |s: f32| axis(s, Vector3::z());

    let mut polygons = Vec::with_capacity(8);
    for &sx in &[1.0_f32, -1.0] {
        for &sy in &[1.0_f32, -1.0] {
            for &sz in &[1.0_f32, -1.0] {
                let (a, b, c) = (x(sx), y(sy), z(sz));
                // (a, b, c) is outward-winding only when sx*sy*sz > 0;
                // otherwise swap the last two vertices.
                if sx * sy * sz > 0.0 {
                    polygons.push(triangle_polygon(a, b, c));
                } else {
                    polygons.push(triangle_polygon(a, c, b));
                }
            }
        }
    }
    Solid::from_polygons(polygons)
}
