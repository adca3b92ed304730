//! A solid: a closed polygon mesh, and the Boolean operations over it.

use log::trace;
use nalgebra::Point3;

use crate::bsp::BspNode;
use crate::polygon::Polygon;

/// A solid represented as a flat list of polygons, without any
/// acceleration structure of its own. Each Boolean operation builds a
/// fresh [`BspNode`] tree internally and tears it back down into a
/// polygon list before returning.
///
/// Once a [`Solid`] exists (built from already-valid [`Polygon`]s), every
/// operation here is pure and total: degenerate slivers produced while
/// clipping are dropped and logged, never surfaced as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    polygons: Vec<Polygon>,
}

impl Solid {
    /// Builds a solid directly from a polygon list.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Returns this solid's polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns this solid's polygons, mutably — for in-place affine
    /// transforms that mutate vertex positions/normals and the cached
    /// plane on each [`Polygon`] directly, instead of reconstructing
    /// through the fallible constructor.
    pub fn polygons_mut(&mut self) -> &mut [Polygon] {
        &mut self.polygons
    }

    /// Consumes the solid, returning its polygons.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    /// Returns the union of `self` and `other`: the space occupied by
    /// either solid.
    pub fn union(&self, other: &Solid) -> Solid {
        trace!("union: {} + {} polygons", self.polygons.len(), other.polygons.len());
        let mut a = BspNode::from_polygons(self.polygons.clone());
        let mut b = BspNode::from_polygons(other.polygons.clone());

        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());

        Solid::from_polygons(a.all_polygons())
    }

    /// Returns `self` minus `other`: the space occupied by `self` but
    /// not `other`.
    pub fn subtract(&self, other: &Solid) -> Solid {
        trace!("subtract: {} - {} polygons", self.polygons.len(), other.polygons.len());
        let mut a = BspNode::from_polygons(self.polygons.clone());
        let mut b = BspNode::from_polygons(other.polygons.clone());

        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());
        a.invert();

        Solid::from_polygons(a.all_polygons())
    }

    /// Returns the intersection of `self` and `other`: the space
    /// occupied by both solids.
    pub fn intersect(&self, other: &Solid) -> Solid {
        trace!("intersect: {} * {} polygons", self.polygons.len(), other.polygons.len());
        let mut a = BspNode::from_polygons(self.polygons.clone());
        let mut b = BspNode::from_polygons(other.polygons.clone());

        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(b.all_polygons());
        a.invert();

        Solid::from_polygons(a.all_polygons())
    }

    /// Returns this solid with every polygon's winding and normal
    /// flipped, turning it inside out.
    pub fn inverse(&self) -> Solid {
        let polygons = self
            .polygons
            .iter()
            .cloned()
            .map(|mut p| {
                p.flip();
                p
            })
            .collect();
        Solid::from_polygons(polygons)
    }

    /// Deduplicates vertex positions across the whole solid and returns
    /// `(vertices, faces)`, where each face is a list of indices into
    /// `vertices`. Positions are deduplicated by exact equality, in
    /// first-seen order, matching the original tool's `toVerticesAndPolygons`.
    pub fn to_vertices_and_polygons(&self) -> (Vec<Point3<f32>>, Vec<Vec<usize>>) {
        let mut vertices: Vec<Point3<f32>> = Vec::new();
        let mut index_of: Vec<(Point3<f32>, usize)> = Vec::new();
        let mut faces = Vec::with_capacity(self.polygons.len());

        for polygon in &self.polygons {
            let mut face = Vec::with_capacity(polygon.len());
            for vertex in polygon.vertices() {
                let position = vertex.position;
                let index = match index_of.iter().find(|(p, _)| *p == position) {
                    Some((_, idx)) => *idx,
                    None => {
                        let idx = vertices.len();
                        vertices.push(position);
                        index_of.push((position, idx));
                        idx
                    }
                };
                face.push(index);
            }
            faces.push(face);
        }

        (vertices, faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Vertex;

    fn tri(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Polygon {
        Polygon::new(vec![
            Vertex::without_normal(Point3::new(a[0], a[1], a[2])),
            Vertex::without_normal(Point3::new(b[0], b[1], b[2])),
            Vertex::without_normal(Point3::new(c[0], c[1], c[2])),
        ])
        .unwrap()
    }

    fn single_triangle_solid() -> Solid {
        Solid::from_polygons(vec![tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])])
    }

    #[test]
    fn inverse_is_an_involution() {
        let solid = single_triangle_solid();
        let double = solid.inverse().inverse();
        assert_eq!(double.polygons().len(), solid.polygons().len());
    }

    #[test]
    fn union_with_self_does_not_duplicate_unboundedly() {
        let solid = single_triangle_solid();
        let unioned = solid.union(&solid);
        assert!(!unioned.polygons().is_empty());
    }

    #[test]
    fn to_vertices_and_polygons_deduplicates_shared_positions() {
        let solid = single_triangle_solid();
        let (vertices, faces) = solid.to_vertices_and_polygons();
        assert_eq!(vertices.len(), 3);
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0], vec![0, 1, 2]);
    }
}
