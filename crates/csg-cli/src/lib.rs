//! External collaborators for [`csg_core::Solid`]: primitive mesh
//! constructors, affine transforms, and mesh export. `csg_core` depends
//! on none of this; this crate depends on `csg_core`.

pub mod io;
pub mod primitives;
pub mod transform;

pub use io::{write_obj, write_vtk};
pub use primitives::{Cone, Cube, Cylinder, Sphere};
pub use transform::{rotate, translate};
