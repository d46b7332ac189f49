//! Superquadric demo
//!
//! Builds a few deformed superquadrics, exports them for the web viewer and
//! writes a Blender bundle with tessellated meshes and a fly-around camera.

use anyhow::Result;
use sceneviz::prelude::*;
use std::f32::consts::PI;

/// `n` evenly spread hues as RGB
fn distinct_colors(n: usize, saturation: f32, value: f32) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let h = i as f32 / n as f32 * 6.0;
            let c = value * saturation;
            let x = c * (1.0 - (h % 2.0 - 1.0).abs());
            let m = value - c;
            let (r, g, b) = match h as u32 {
                0 => (c, x, 0.0),
                1 => (x, c, 0.0),
                2 => (0.0, c, x),
                3 => (0.0, x, c),
                4 => (x, 0.0, c),
                _ => (c, 0.0, x),
            };
            [
                ((r + m) * 255.0) as u8,
                ((g + m) * 255.0) as u8,
                ((b + m) * 255.0) as u8,
            ]
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let mut scene = Scene::new();
    let colors = distinct_colors(4, 0.65, 0.9);

    scene.add_superquadric(
        "Superquadrics:octahedron",
        Vector3f::new(0.25, 0.75, 0.25),
        Vector3f::new(1.0, 1.0, 1.0),
        SuperquadricOptions {
            translation: Vector3f::new(0.0, -1.25, 0.0),
            color: colors[0],
            resolution: 100,
            wireframe: true,
            ..SuperquadricOptions::default()
        },
    )?;

    scene.add_superquadric(
        "Superquadrics:tapered box",
        Vector3f::new(0.5, 0.125, 0.75),
        Vector3f::new(6.0, 6.0, 6.0),
        SuperquadricOptions {
            translation: Vector3f::new(1.25, 0.0, 0.0),
            tapering: [0.5, 0.3],
            color: colors[1],
            alpha: 0.8,
            resolution: 300,
            ..SuperquadricOptions::default()
        },
    )?;

    scene.add_superquadric(
        "Superquadrics:bent",
        Vector3f::new(0.25, 0.25, 0.5),
        Vector3f::new(1.0, 1.0, 1.0),
        SuperquadricOptions {
            translation: Vector3f::new(0.75, 1.25, 0.25),
            bending: [0.5, 0.0, 0.0, 0.0, 0.0, 0.0],
            color: colors[2],
            resolution: 200,
            ..SuperquadricOptions::default()
        },
    )?;

    // z up in the local frame becomes y up in the world
    scene.add_superquadric(
        "Superquadrics:rotated",
        Vector3f::new(0.375, 0.375, 0.625),
        Vector3f::new(8.0, 2.0, 8.0),
        SuperquadricOptions {
            translation: Vector3f::new(-0.75, 0.0, 0.25),
            rotation_matrix: Some([[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]]),
            tapering: [0.3, 0.3],
            bending: [0.3, PI / 4.0, 0.0, 0.0, 0.0, 0.0],
            color: colors[3],
            alpha: 0.9,
            resolution: 400,
            ..SuperquadricOptions::default()
        },
    )?;

    scene.add_bounding_box(
        "Ground plane",
        Point3f::new(0.0, 0.0, -0.5),
        Vector3f::new(5.0, 5.0, 0.001),
        CuboidOptions {
            color: [200, 200, 200],
            ..CuboidOptions::default()
        },
    )?;

    for (name, element) in scene.elements() {
        if let Some(superquadric) = element.as_superquadric() {
            let tessellation = tessellate(superquadric);
            println!(
                "{}: {}x{} grid, {} triangles",
                name,
                tessellation.grid.nu(),
                tessellation.grid.nv(),
                tessellation.mesh.face_count()
            );
        }
    }

    ManifestExporter::export(&scene, &ExportContext::new("demo_output/superquadrics"))?;

    let config = BlenderConfig {
        animation: true,
        animation_length: 50,
        animation_circle_radius: 3.0,
        animation_circle_center: [0.0, 0.0, 1.0],
        animation_circle_rotation: [PI / 8.0, 0.0, 0.0],
        animation_look_at_target: Some([0.0, 0.0, 0.0]),
        cycles_samples: 50,
        render_film_transparent: false,
        output_prefix: "video_superquadrics_".to_string(),
        ..BlenderConfig::new("blender")
    };
    let bundle = BlenderExporter::export(&scene, &ExportContext::new("demo_output/superquadrics_blender"), &config)?;
    println!(
        "Blender bundle: {} meshes, settings in {:?}",
        bundle.meshes.len(),
        bundle.config_path
    );
    Ok(())
}
