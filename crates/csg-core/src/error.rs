//! Error type for the fail-fast construction boundary.
//!
//! Boolean operations on already-valid [`crate::Solid`]s are pure and total
//! and never return [`CsgError`] — degeneracy there is handled by silently
//! dropping the offending sub-polygon (see [`crate::bsp::BspNode::build`]),
//! not by propagating an error through `union`/`subtract`/`intersect`.

/// Errors raised at polygon and plane construction time.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CsgError {
    /// Fewer than 3 vertices were supplied to [`crate::Polygon::new`].
    #[error("polygon must have at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),

    /// The plane normal had sub-epsilon length (collinear or coincident
    /// input points).
    #[error("plane is degenerate: three (or fewer) collinear/coincident points")]
    DegeneratePlane,

    /// A primitive constructor (cube, sphere, cylinder, cone) received a
    /// parameter it cannot tessellate, such as zero slices.
    #[error("primitive constructor received an invalid parameter: {0}")]
    InvalidPrimitiveParameter(&'static str),
}
