#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
//! Active-array bookkeeping demonstration.
//!
//! This demo shows:
//! - Length-based array placement on a small surface
//! - Lazy resolution of the active scalars
//! - Rename and removal keeping the designation consistent
//! - Saving and reloading through the legacy VTK format
//!
//! Run with: cargo run --example `active_scalars_demo`

use gridviz::*;

fn main() -> Result<()> {
    env_logger::init();

    // A small height-field surface: a grid of points with quad faces.
    let n = 5;
    let mut points = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            let x = i as f32 / (n - 1) as f32;
            let y = j as f32 / (n - 1) as f32;
            points.push(Vec3::new(x, y, (x * 6.0).sin() * 0.1));
        }
    }
    let mut faces = Vec::new();
    for j in 0..n - 1 {
        for i in 0..n - 1 {
            let a = (j * n + i) as u32;
            faces.push(vec![a, a + 1, a + 1 + n as u32, a + n as u32]);
        }
    }
    let mut surface = PolyData::from_polygons(points, faces)?;
    println!("{}", surface.head());

    // Arrays land by length: 25 values match the points, 16 the cells.
    let heights: Vec<f32> = surface.points().iter().map(|p| p.z).collect();
    surface.set_array("height", heights)?;
    surface.set_array("face_id", (0..16).collect::<Vec<i32>>())?;
    surface.set_field_array("year", vec![2026i32]);

    // Nothing was activated, so the first usable point array wins.
    let info = surface.active_scalars_info();
    println!("active scalars: {:?} ({})", info.name, info.association);

    // The designation follows renames and survives a trip through a file.
    surface.rename_array("height", "elevation", Association::Point)?;
    println!("after rename: {:?}", surface.active_scalars_info().name);

    let path = std::env::temp_dir().join("active_scalars_demo.vtk");
    surface.save(&path, false)?;
    let mut reloaded = PolyData::read(&path)?;
    std::fs::remove_file(&path).ok();
    println!(
        "reloaded, resolves to: {:?}",
        reloaded.active_scalars_info().name
    );

    // Removal of the active array clears the designation.
    reloaded.remove_array(Association::Point, "elevation")?;
    println!("after removal: {:?}", reloaded.active_scalars_info().name);

    // A scene light, just data until a renderer wants it.
    let mut key_light = Light::new().with_color(Vec3::new(1.0, 0.95, 0.9));
    key_light.set_direction_angle(30.0, 45.0);
    println!("key light at {:?}", key_light.position());

    Ok(())
}
