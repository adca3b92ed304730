//! Unions an axis-aligned cube with a cylinder standing on one of its
//! faces, translated into place, and exports the result.

use std::fs::File;
use std::io::BufWriter;

use csg_cli::{translate, write_vtk, Cube, Cylinder};
use nalgebra::Vector3;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cube = Cube::default().build()?;
    let mut cylinder = Cylinder {
        radius: 0.5,
        ..Cylinder::default()
    }
    .build()?;
    translate(&mut cylinder, Vector3::new(0.0, 1.0, 0.0));

    let result = cube.union(&cylinder);
    log::info!("union has {} polygons", result.polygons().len());

    let file = BufWriter::new(File::create("union_demo.vtk")?);
    write_vtk(&result, file)?;
    println!("wrote union_demo.vtk");

    Ok(())
}
