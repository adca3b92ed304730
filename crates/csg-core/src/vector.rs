//! Thin helpers on top of `nalgebra`'s vector/point types.
//!
//! This crate does not define its own 3D vector type: `nalgebra::Point3<f32>`
//! and `nalgebra::Vector3<f32>` already provide addition, subtraction,
//! scalar multiplication, negation, dot and cross products, and length with
//! IEEE-754 semantics. The one operation `nalgebra` deliberately leaves to
//! the caller is what to do with a zero-length vector's direction.

use nalgebra::Vector3;

/// Tolerance below which a vector's length is treated as zero.
pub const LENGTH_EPSILON: f32 = 1e-8;

/// Returns the unit vector in the direction of `v`, or the zero vector if
/// `v` is shorter than [`LENGTH_EPSILON`].
///
/// This resolves the "behavior at length 0 is an implementer choice"
/// clause: callers that need to distinguish "no direction" from "unit
/// vector" should check the input length themselves before calling this.
#[inline]
pub fn unit_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    let len = v.norm();
    if len > LENGTH_EPSILON {
        v / len
    } else {
        Vector3::zeros()
    }
}
