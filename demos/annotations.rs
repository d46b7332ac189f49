//! Arrows, polylines, labels, 2D circles and motion hints in one scene

use anyhow::Result;
use sceneviz::prelude::*;

fn main() -> Result<()> {
    env_logger::init();
    let mut scene = Scene::new();

    scene.add_arrow(
        "Arrows:x",
        Point3f::new(0.0, 0.2, 0.0),
        Point3f::new(1.0, 0.2, 0.0),
        ArrowOptions::default(),
    )?;
    scene.add_arrow(
        "Arrows:diagonal",
        Point3f::new(0.0, 1.0, 0.0),
        Point3f::new(1.0, 1.0, 1.0),
        ArrowOptions {
            color: [30, 255, 50],
            alpha: 0.5,
            stroke_width: 0.04,
            head_width: 0.1,
            ..ArrowOptions::default()
        },
    )?;

    let helix: Vec<Point3f> = (0..100)
        .map(|i| {
            let t = i as f32 * 0.15;
            Point3f::new(t.cos(), t.sin(), 0.03 * i as f32)
        })
        .collect();
    scene.add_polyline(
        "Helix",
        helix,
        PolylineOptions {
            color: [255, 128, 0],
            edge_width: 0.02,
            ..PolylineOptions::default()
        },
    )?;

    let corners = vec![
        Point3f::new(-1.0, -1.0, 0.0),
        Point3f::new(1.0, -1.0, 0.0),
        Point3f::new(1.0, 1.0, 0.0),
    ];
    let names: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    scene.add_labels("Corners", names.clone(), corners.clone(), vec![[0, 0, 0]; 3], true)?;
    scene.add_circles_2d(
        "Corner markers",
        names,
        corners,
        vec![[0, 0, 0]; 3],
        vec![[255, 255, 255]; 3],
        true,
    )?;

    scene.add_motion(
        "Drawer",
        MotionType::Translation,
        Vector3f::new(1.0, 0.0, 0.0),
        Point3f::new(0.0, -1.0, 0.5),
        MotionOptions::default(),
    )?;
    scene.add_motion(
        "Door hinge",
        MotionType::Rotation,
        Vector3f::new(0.0, 0.0, 1.0),
        Point3f::new(-1.0, 1.0, 0.0),
        MotionOptions {
            orientation: MotionOrientation::Inwards,
            ..MotionOptions::default()
        },
    )?;

    ManifestExporter::export(&scene, &ExportContext::new("demo_output/annotations"))?;
    for (name, element) in scene.elements() {
        println!("{:<20} {}", name, element.kind());
    }
    Ok(())
}
