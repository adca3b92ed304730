//! Mesh export: VTK POLYDATA ASCII (the format spec names) plus a
//! supplemental OBJ exporter for eyeballing results in any 3D viewer.
//!
//! Ported from `CSG.saveVTK` in the reference Python implementation.

use std::io::{self, Write};

use csg_core::Solid;

/// Writes `solid` as an ASCII VTK POLYDATA file.
pub fn write_vtk(solid: &Solid, mut out: impl Write) -> io::Result<()> {
    let (vertices, polygons) = solid.to_vertices_and_polygons();

    writeln!(out, "# vtk DataFile Version 3.0")?;
    writeln!(out, "csg-cli export")?;
    writeln!(out, "ASCII")?;
    writeln!(out, "DATASET POLYDATA")?;

    writeln!(out, "POINTS {} float", vertices.len())?;
    for v in &vertices {
        writeln!(out, "{} {} {}", v.x, v.y, v.z)?;
    }

    let index_count: usize = polygons.iter().map(|p| p.len()).sum();
    writeln!(out, "POLYGONS {} {}", polygons.len(), index_count + polygons.len())?;
    for polygon in &polygons {
        write!(out, "{}", polygon.len())?;
        for index in polygon {
            write!(out, " {index}")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Writes `solid` as an ASCII Wavefront OBJ file (1-indexed faces).
pub fn write_obj(solid: &Solid, mut out: impl Write) -> io::Result<()> {
    let (vertices, polygons) = solid.to_vertices_and_polygons();

    for v in &vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for polygon in &polygons {
        write!(out, "f")?;
        for index in polygon {
            write!(out, " {}", index + 1)?;
        }
        writeln!(out)?;
    }

    Ok(())
}
