//! Binary Space Partitioning tree over convex polygons.
//!
//! A [`BspNode`] recursively partitions space using planes derived from
//! its input polygons. Boolean combination of solids ([`crate::Solid`])
//! is built entirely on four tree operations:
//!
//! - [`BspNode::build`]: insert polygons into the tree
//! - [`BspNode::invert`]: turn the solid the tree represents inside out
//! - [`BspNode::clip_to`]/[`BspNode::clip_polygons`]: remove the parts of
//!   one tree (or an arbitrary polygon list) that lie inside another
//! - [`BspNode::all_polygons`]: flatten the tree back into a polygon list

mod node;

pub use node::BspNode;
