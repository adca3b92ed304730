//! A mesh vertex: a position plus an optional normal.

use nalgebra::{Point3, Vector3};

/// A vertex carrying a position and an optional normal.
///
/// The normal is `None` when the vertex carries no normal information
/// (spec's "zero vector means no normal" sentinel, represented here as an
/// `Option` instead so [`Vertex::interpolate`] can skip normal arithmetic
/// entirely when neither endpoint has one).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
    pub normal: Option<Vector3<f32>>,
}

impl Vertex {
    /// Creates a vertex with a normal.
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self {
            position,
            normal: Some(normal),
        }
    }

    /// Creates a vertex with no normal.
    pub fn without_normal(position: Point3<f32>) -> Self {
        Self {
            position,
            normal: None,
        }
    }

    /// Linearly interpolates position and normal between `self` and
    /// `other` at parameter `t`. Neither is renormalized afterward.
    ///
    /// When only one side carries a normal, the other is treated as the
    /// zero vector for the lerp, preserving the original sentinel's
    /// arithmetic while keeping `None` meaning "truly absent" when both
    /// sides lack a normal.
    pub fn interpolate(&self, other: &Vertex, t: f32) -> Vertex {
        let position = self.position + (other.position - self.position) * t;
        let normal = match (self.normal, other.normal) {
            (None, None) => None,
            (a, b) => {
                let a = a.unwrap_or_else(Vector3::zeros);
                let b = b.unwrap_or_else(Vector3::zeros);
                Some(a + (b - a) * t)
            }
        };
        Vertex { position, normal }
    }

    /// Negates the normal in place, if present.
    pub fn flip(&mut self) {
        self.normal = self.normal.map(|n| -n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_midpoint() {
        let a = Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let b = Vertex::new(Point3::new(2.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.position, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(mid.normal, Some(Vector3::new(0.5, 0.5, 0.0)));
    }

    #[test]
    fn interpolate_without_normals() {
        let a = Vertex::without_normal(Point3::new(0.0, 0.0, 0.0));
        let b = Vertex::without_normal(Point3::new(1.0, 1.0, 1.0));
        let mid = a.interpolate(&b, 0.5);
        assert_eq!(mid.normal, None);
    }

    #[test]
    fn flip_negates_normal() {
        let mut v = Vertex::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0));
        v.flip();
        assert_eq!(v.normal, Some(Vector3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn flip_without_normal_is_noop() {
        let mut v = Vertex::without_normal(Point3::origin());
        v.flip();
        assert_eq!(v.normal, None);
    }
}
