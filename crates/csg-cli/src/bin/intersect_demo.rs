//! Intersects two overlapping cubes offset along the diagonal, exercising
//! the same split/clip machinery as the union and subtract demos from a
//! different Boolean operation, and exports the result.

use std::fs::File;
use std::io::BufWriter;

use csg_cli::{rotate, translate, write_vtk, Cube};
use nalgebra::Vector3;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let a = Cube::default().build()?;
    let mut b = Cube::default().build()?;
    translate(&mut b, Vector3::new(1.0, 1.0, 1.0));
    rotate(&mut b, Vector3::y(), 30.0);

    let result = a.intersect(&b);
    log::info!("intersection has {} polygons", result.polygons().len());

    let file = BufWriter::new(File::create("intersect_demo.vtk")?);
    write_vtk(&result, file)?;
    println!("wrote intersect_demo.vtk");

    Ok(())
}
