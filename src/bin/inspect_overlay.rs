//! CLI tool for inspecting rubber band construction without the canvas
//!
//! Builds representative overlays (line, degenerate polygon, square polygon)
//! and prints per-drawable vertex statistics.
//!
//! Usage:
//!   cargo run --bin inspect_overlay [json_output_path]
//!
//! When an output path is given, the square-polygon overlay is also written
//! there in the frontend's JSON format.

use std::env;

use anyhow::Context;

use rubberband::{color_from_u8, DrawingMode, GeometryKind, MapPoint, OverlayJson, Rubberband};

fn print_band(label: &str, band: &Rubberband) {
    println!("{}:", label);
    if band.is_empty() {
        println!("  (no drawables)");
        return;
    }
    for (i, node) in band.nodes().iter().enumerate() {
        let geometry = node.geometry();
        match geometry.mode() {
            DrawingMode::LineStrip => println!(
                "  [{}] line strip: {} vertices, width {}",
                i,
                geometry.vertex_count(),
                geometry.line_width()
            ),
            DrawingMode::Triangles => println!(
                "  [{}] triangles: {} vertices ({} triangles)",
                i,
                geometry.vertex_count(),
                geometry.vertex_count() / 3
            ),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let color = color_from_u8(255, 0, 0, 128);

    let line = [
        MapPoint::new(0.0, 0.0),
        MapPoint::new(10.0, 0.0),
        MapPoint::new(10.0, 5.0),
    ];
    print_band(
        "line",
        &Rubberband::new(&line, GeometryKind::Line, color, 2.0),
    );

    let degenerate = [MapPoint::new(0.0, 0.0), MapPoint::new(4.0, 0.0)];
    print_band(
        "degenerate polygon (2 points)",
        &Rubberband::new(&degenerate, GeometryKind::Polygon, color, 2.0),
    );

    let square = [
        MapPoint::new(0.0, 0.0),
        MapPoint::new(4.0, 0.0),
        MapPoint::new(4.0, 4.0),
        MapPoint::new(0.0, 4.0),
    ];
    let band = Rubberband::new(&square, GeometryKind::Polygon, color, 2.0);
    print_band("square polygon", &band);

    if let Some(path) = env::args().nth(1) {
        let json = serde_json::to_string_pretty(&OverlayJson::from_rubberband(&band))?;
        std::fs::write(&path, json).with_context(|| format!("failed to write {}", path))?;
        println!("wrote overlay JSON to {}", path);
    }

    Ok(())
}
