//! Affine transforms on an already-built [`Solid`].
//!
//! Ported from `CSG.translate`/`CSG.rotate` in the reference Python
//! implementation, using `nalgebra`'s rotation types in place of the
//! original's hand-rolled axis-decomposition trig. Both mutate vertex
//! positions and normals in place on the existing polygons rather than
//! rebuilding them, so a rotation that happens to nudge an already
//! near-degenerate triangle across the collinearity threshold can never
//! panic: there is no fallible reconstruction in the loop at all.

use csg_core::Solid;
use nalgebra::{UnitQuaternion, Vector3};

/// Translates every vertex position of `solid` by `offset`. Normals are
/// untouched: translation is not a linear map on directions.
pub fn translate(solid: &mut Solid, offset: Vector3<f32>) {
    for polygon in solid.polygons_mut() {
        polygon.translate(offset);
    }
}

/// Rotates every vertex position of `solid` about `axis` (through the
/// origin) by `angle_degrees`, carrying any present normal along with
/// the same rotation. Rotation preserves length, so a unit normal stays
/// unit without renormalizing.
pub fn rotate(solid: &mut Solid, axis: Vector3<f32>, angle_degrees: f32) {
    let rotation = UnitQuaternion::from_axis_angle(&nalgebra::Unit::new_normalize(axis), angle_degrees.to_radians());
    for polygon in solid.polygons_mut() {
        polygon.rotate(|v| rotation * v);
    }
}
