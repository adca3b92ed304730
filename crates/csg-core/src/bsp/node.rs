//! BSP tree node implementation: the recursive structure Boolean
//! operations on [`crate::Solid`] are built on.

use std::mem;

use log::trace;

use crate::plane::Plane;
use crate::polygon::Polygon;

/// A node in the BSP tree.
///
/// Each node partitions space using a splitting plane and stores polygons
/// that are coplanar with that plane. Polygons in front of or behind the
/// plane are stored in the respective child subtrees. A node with no
/// plane (`plane: None`) is an empty leaf: the tree for an empty solid.
///
/// # Coplanar Polygon Storage
///
/// Coplanar polygons are separated by their facing direction relative to
/// the splitting plane's normal:
/// - `coplanar_front`: polygons whose normal points the same direction as the plane normal
/// - `coplanar_back`: polygons whose normal points opposite to the plane normal
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    plane: Option<Plane>,
    coplanar_front: Vec<Polygon>,
    coplanar_back: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// The empty tree: no plane, no polygons, no children.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a new tree from a flat list of polygons.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::empty();
        node.build(polygons);
        node
    }

    /// Returns a reference to the splitting plane, if this node is not an
    /// empty leaf.
    #[inline]
    pub fn plane(&self) -> Option<&Plane> {
        self.plane.as_ref()
    }

    /// Returns a reference to the front child subtree.
    #[inline]
    pub fn front(&self) -> Option<&BspNode> {
        self.front.as_deref()
    }

    /// Returns a reference to the back child subtree.
    #[inline]
    pub fn back(&self) -> Option<&BspNode> {
        self.back.as_deref()
    }

    /// Checks if this node has no children (it may still hold coplanar
    /// polygons).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    /// Checks if this tree represents the empty solid: no plane and no
    /// polygons anywhere in the subtree.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.plane.is_none()
    }

    /// Returns the total number of polygons in this subtree (including all descendants).
    pub fn polygon_count(&self) -> usize {
        let mut count = self.coplanar_front.len() + self.coplanar_back.len();
        if let Some(front) = &self.front {
            count += front.polygon_count();
        }
        if let Some(back) = &self.back {
            count += back.polygon_count();
        }
        count
    }

    /// Returns the depth of this subtree (1 for a leaf node, 0 for an
    /// empty tree with no plane).
    pub fn depth(&self) -> usize {
        if self.plane.is_none() {
            return 0;
        }
        let front_depth = self.front.as_ref().map_or(0, |n| n.depth());
        let back_depth = self.back.as_ref().map_or(0, |n| n.depth());
        1 + front_depth.max(back_depth)
    }

    /// Recursively converts this BSP tree to a convex solid by flipping
    /// the normal of all polygons and swapping the front and back
    /// subtrees at every node.
    pub fn invert(&mut self) {
        for polygon in self.coplanar_front.iter_mut().chain(self.coplanar_back.iter_mut()) {
            polygon.flip();
        }
        if let Some(plane) = &mut self.plane {
            plane.flip();
        }
        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
        mem::swap(&mut self.front, &mut self.back);
    }

    /// Recursively removes all polygons in `polygons` that are inside
    /// this BSP tree.
    pub fn clip_polygons(&self, polygons: &[Polygon]) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons.to_vec();
        };

        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();
        for polygon in polygons {
            plane.split_polygon(polygon, &mut coplanar_front, &mut coplanar_back, &mut front, &mut back);
        }
        front.extend(coplanar_front);
        back.extend(coplanar_back);

        let mut front = match &self.front {
            Some(node) => node.clip_polygons(&front),
            None => front,
        };
        let back = match &self.back {
            Some(node) => node.clip_polygons(&back),
            None => Vec::new(),
        };
        front.extend(back);
        front
    }

    /// Recursively clips this tree's own polygons against `other`,
    /// removing the parts that lie inside it.
    pub fn clip_to(&mut self, other: &BspNode) {
        self.coplanar_front = other.clip_polygons(&self.coplanar_front);
        self.coplanar_back = other.clip_polygons(&self.coplanar_back);
        if let Some(front) = &mut self.front {
            front.clip_to(other);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(other);
        }
    }

    /// Returns every polygon stored in this tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut polygons: Vec<Polygon> = self
            .coplanar_front
            .iter()
            .cloned()
            .chain(self.coplanar_back.iter().cloned())
            .collect();
        if let Some(front) = &self.front {
            polygons.extend(front.all_polygons());
        }
        if let Some(back) = &self.back {
            polygons.extend(back.all_polygons());
        }
        polygons
    }

    /// Adds a list of polygons to the tree, splitting and recursing as
    /// necessary. The splitting plane for a fresh node is taken from the
    /// first polygon in `polygons`.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        self.build_at_depth(0, polygons);
    }

    /// Recursion workhorse behind [`Self::build`]; `depth` is only used for
    /// `trace!` logging, so diagnosing a pathologically deep tree doesn't
    /// require instrumenting call sites by hand.
    fn build_at_depth(&mut self, depth: usize, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        trace!("bsp build at depth {depth}: {} polygons", polygons.len());

        let plane = match self.plane {
            Some(plane) => plane,
            None => {
                let plane = polygons[0].plane();
                self.plane = Some(plane);
                plane
            }
        };

        let mut front = Vec::new();
        let mut back = Vec::new();
        for polygon in &polygons {
            plane.split_polygon(polygon, &mut self.coplanar_front, &mut self.coplanar_back, &mut front, &mut back);
        }

        if !front.is_empty() {
            trace!("bsp build at depth {depth}: {} polygons to front child", front.len());
            self.front
                .get_or_insert_with(|| Box::new(BspNode::empty()))
                .build_at_depth(depth + 1, front);
        }
        if !back.is_empty() {
            trace!("bsp build at depth {depth}: {} polygons to back child", back.len());
            self.back
                .get_or_insert_with(|| Box::new(BspNode::empty()))
                .build_at_depth(depth + 1, back);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::Vertex;
    use nalgebra::Point3;

    fn make_triangle(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Polygon {
        Polygon::new(vec![
            Vertex::without_normal(Point3::new(a[0], a[1], a[2])),
            Vertex::without_normal(Point3::new(b[0], b[1], b[2])),
            Vertex::without_normal(Point3::new(c[0], c[1], c[2])),
        ])
        .unwrap()
    }

    fn scattered_triangles() -> Vec<Polygon> {
        vec![
            make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            make_triangle([0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]),
            make_triangle([0.0, 0.0, 2.0], [0.0, 1.0, 2.0], [1.0, 0.0, 2.0]),
            make_triangle([2.0, 0.0, 0.0], [2.0, 1.0, 0.0], [2.0, 0.0, 1.0]),
        ]
    }

    #[test]
    fn empty_tree_has_no_polygons() {
        let node = BspNode::empty();
        assert!(node.is_leaf());
        assert_eq!(node.polygon_count(), 0);
        assert_eq!(node.depth(), 0);
    }

    #[test]
    fn build_then_all_polygons_round_trips_count() {
        let polygons = scattered_triangles();
        let expected = polygons.len();
        let tree = BspNode::from_polygons(polygons);
        assert_eq!(tree.all_polygons().len(), expected);
    }

    #[test]
    fn invert_is_an_involution_on_polygon_count() {
        let polygons = scattered_triangles();
        let mut tree = BspNode::from_polygons(polygons.clone());
        tree.invert();
        tree.invert();
        assert_eq!(tree.all_polygons().len(), polygons.len());
    }

    #[test]
    fn clip_to_self_conserving_tree_is_idempotent() {
        let polygons = scattered_triangles();
        let a = BspNode::from_polygons(polygons.clone());
        let mut b = BspNode::from_polygons(polygons);
        b.clip_to(&a);
        let once = b.all_polygons().len();
        b.clip_to(&a);
        let twice = b.all_polygons().len();
        assert_eq!(once, twice);
    }

    #[test]
    fn single_triangle_tree_has_depth_one() {
        let poly = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let tree = BspNode::from_polygons(vec![poly]);
        assert_eq!(tree.depth(), 1);
        assert!(tree.is_leaf());
    }

    /// Every polygon stored at `node` (and recursively in its children)
    /// must lie on that node's own splitting plane within
    /// [`crate::plane::PLANE_EPSILON`].
    fn assert_every_polygon_lies_on_its_node_plane(node: &BspNode) {
        if let Some(plane) = node.plane() {
            for polygon in node.coplanar_front.iter().chain(node.coplanar_back.iter()) {
                for vertex in polygon.vertices() {
                    assert!(
                        plane.signed_distance(vertex.position).abs() < crate::plane::PLANE_EPSILON,
                        "vertex {:?} is off its node's plane",
                        vertex.position,
                    );
                }
            }
        }
        if let Some(front) = &node.front {
            assert_every_polygon_lies_on_its_node_plane(front);
        }
        if let Some(back) = &node.back {
            assert_every_polygon_lies_on_its_node_plane(back);
        }
    }

    #[test]
    fn built_tree_maintains_plane_membership_invariant() {
        // Polygons spanning several of each other's planes force real
        // splits, so this exercises the invariant on split-produced
        // vertices too, not just the unsplit inputs.
        let polygons = vec![
            make_triangle([-1.0, -1.0, 0.0], [1.0, -1.0, 0.0], [0.0, 1.0, 0.0]),
            make_triangle([0.0, 0.0, -1.0], [0.0, 0.0, 1.0], [0.0, 2.0, 0.0]),
            make_triangle([-1.0, 0.0, -1.0], [1.0, 0.0, -1.0], [0.0, 0.0, 1.0]),
        ];
        let tree = BspNode::from_polygons(polygons);
        assert_every_polygon_lies_on_its_node_plane(&tree);
    }
}
