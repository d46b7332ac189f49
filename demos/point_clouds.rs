//! Point cloud demo
//!
//! Exports a noisy sphere with per-point colors and normals, a plain gray
//! cloud, and line segments showing a few of the normals.

use anyhow::Result;
use rand::Rng;
use sceneviz::prelude::*;

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = rand::thread_rng();

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut colors = Vec::new();
    for _ in 0..2000 {
        let direction = Vector3f::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let Some(normal) = direction.try_normalize(1e-6) else {
            continue;
        };
        let radius = 1.0 + rng.gen_range(-0.02..0.02);
        positions.push(Point3f::from(normal * radius));
        normals.push(normal);
        colors.push([
            (127.5 * (normal.x + 1.0)) as u8,
            (127.5 * (normal.y + 1.0)) as u8,
            (127.5 * (normal.z + 1.0)) as u8,
        ]);
    }

    let mut scene = Scene::new();
    scene.set_camera(Camera::new(Point3f::new(4.0, 4.0, 3.0), Point3f::origin()));

    let starts: Vec<Point3f> = positions.iter().step_by(20).copied().collect();
    let ends: Vec<Point3f> = positions
        .iter()
        .zip(&normals)
        .step_by(20)
        .map(|(p, n)| p + n * 0.2)
        .collect();

    scene.add_points(
        "Sphere",
        positions,
        Some(colors),
        Some(normals),
        PointsOptions {
            point_size: 15.0,
            ..PointsOptions::default()
        },
    )?;
    scene.add_lines("Sphere;normals", &starts, &ends, None, false)?;

    let plane: Vec<Point3f> = (0..500)
        .map(|_| Point3f::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0), -1.2))
        .collect();
    scene.add_points("Ground", plane, None, None, PointsOptions::default())?;

    let summary = ManifestExporter::export(&scene, &ExportContext::new("demo_output/point_clouds"))?;
    println!(
        "Wrote {:?} with {} payload files",
        summary.manifest_path,
        summary.binary_files.len()
    );
    Ok(())
}
