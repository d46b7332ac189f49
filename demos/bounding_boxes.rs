//! Bounding box demo

use anyhow::Result;
use sceneviz::prelude::*;
use std::f32::consts::PI;

fn main() -> Result<()> {
    env_logger::init();
    let mut scene = Scene::new();

    scene.add_bounding_box(
        "Box_1",
        Point3f::new(0.0, 0.0, 1.0),
        Vector3f::new(1.0, 1.0, 2.0),
        CuboidOptions::default(),
    )?;

    scene.add_bounding_box(
        "Box_2",
        Point3f::new(-1.0, 1.0, 0.0),
        Vector3f::new(1.0, 2.0, 1.0),
        CuboidOptions {
            orientation: euler_to_quaternion(PI / 3.0, 0.0, 0.0),
            color: [30, 255, 50],
            ..CuboidOptions::default()
        },
    )?;

    // semi transparent
    scene.add_bounding_box(
        "Box_3",
        Point3f::new(1.0, 0.0, 0.0),
        Vector3f::new(2.0, 1.0, 0.1),
        CuboidOptions {
            orientation: euler_to_quaternion(PI / 6.0, 0.0, 0.0),
            color: [0, 0, 255],
            alpha: 0.5,
            ..CuboidOptions::default()
        },
    )?;

    // one layer with four boxes spun about z
    for i in 0..4 {
        scene.add_bounding_box(
            &format!("Turntable:{}", i),
            Point3f::new(1.0, 1.0, 0.0),
            Vector3f::new(1.0, 2.0, 0.5),
            CuboidOptions {
                orientation: euler_to_quaternion(0.0, 0.0, i as f32 * PI / 4.0),
                color: [255, 255, 0],
                alpha: 0.1,
                edge_width: 0.02,
                ..CuboidOptions::default()
            },
        )?;
    }

    let summary = ManifestExporter::export(&scene, &ExportContext::new("demo_output/bounding_boxes"))?;
    println!("Wrote {} elements to {:?}", scene.len(), summary.manifest_path);
    Ok(())
}
