use surface_detector::{DetectorParams, FrameRgb8, SurfaceDetector};

fn main() {
    // Demo stub: creates a fake RGB buffer and runs the detector
    let w = 640usize;
    let h = 480usize;
    let rgb = vec![0u8; w * h * 3];
    let frame = FrameRgb8 {
        w,
        h,
        stride: w * 3,
        data: &rgb,
    };

    let detector = SurfaceDetector::new(DetectorParams::default());
    let result = detector.detect(frame);
    println!(
        "surface={} edges={} latency_ms={:.3}",
        result.surface.is_some(),
        result.edge_count,
        result.latency_ms
    );
}
