use std::env;
use std::path::Path;
use surface_detector::config::load_config;
use surface_detector::image::io::{load_rgb_image, write_json_file};
use surface_detector::SurfaceDetector;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let frame = load_rgb_image(&config.input)?;
    let detector = SurfaceDetector::new(config.detector);
    let report = detector.detect_with_report(frame.as_view());

    println!(
        "{}x{}: {} edge points, {} cells, {} candidates, surface={}",
        report.input.width,
        report.input.height,
        report.edge_points.len(),
        report.cells_scanned,
        report.candidates.len(),
        report.result.surface.is_some()
    );
    if let Some(surface) = &report.result.surface {
        println!(
            "  at ({:.1}%, {:.1}%) {:.0}x{:.0}px confidence={:.3}",
            surface.x_pct, surface.y_pct, surface.width_px, surface.height_px, surface.confidence
        );
    }

    write_json_file(&config.output.report_json, &report)?;
    Ok(())
}

fn usage() -> String {
    "Usage: surface_demo <config.json>".to_string()
}
