//! Cube-minus-sphere demo: builds two primitives, subtracts one from the
//! other, and writes the result out as VTK or OBJ.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use csg_cli::{write_obj, write_vtk, Cube, Sphere};
use csg_core::Solid;

#[derive(Parser, Debug)]
#[command(about = "Subtracts a sphere from a cube and exports the result")]
struct Args {
    /// Cube half-extent on every axis.
    #[arg(long, default_value_t = 1.0)]
    cube_radius: f32,

    /// Sphere radius.
    #[arg(long, default_value_t = 1.2)]
    sphere_radius: f32,

    /// Sphere tessellation: longitude slices.
    #[arg(long, default_value_t = 16)]
    slices: u32,

    /// Sphere tessellation: latitude stacks.
    #[arg(long, default_value_t = 8)]
    stacks: u32,

    /// Output path. The extension (.obj or .vtk) selects the format;
    /// defaults to VTK.
    #[arg(long, default_value = "cube_minus_sphere.vtk")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cube = Cube {
        radius: nalgebra::Vector3::new(args.cube_radius, args.cube_radius, args.cube_radius),
        ..Cube::default()
    }
    .build()?;
    let sphere = Sphere {
        radius: args.sphere_radius,
        slices: args.slices,
        stacks: args.stacks,
        ..Sphere::default()
    }
    .build()?;

    let result: Solid = cube.subtract(&sphere);
    log::info!(
        "cube ({} polys) - sphere ({} polys) = {} polys",
        cube.polygons().len(),
        sphere.polygons().len(),
        result.polygons().len()
    );

    let file = BufWriter::new(File::create(&args.out)?);
    if args.out.extension().and_then(|e| e.to_str()) == Some("obj") {
        write_obj(&result, file)?;
    } else {
        write_vtk(&result, file)?;
    }
    println!("wrote {}", args.out.display());

    Ok(())
}
