#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod image;
pub mod normalize;
pub mod sampler;
pub mod types;

// Lower-level building blocks, public for tooling and tests.
pub mod config;
pub mod edges;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{DetectorParams, ScanOptions, SurfaceDetector};
pub use crate::types::{CandidateSurface, DetectionResult, SurfaceOverlay};

// The capture loop and its collaborators.
pub use crate::sampler::{FrameSampler, FrameSource, ResultHandle, SamplerOptions, TickOutcome};

// Frame views.
pub use crate::image::{FrameBuffer, FrameRgb8};

// Structured diagnostics returned by `detect_with_report`.
pub use crate::diagnostics::DetectionReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use surface_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let rgb = vec![0u8; w * h * 3];
/// let frame = FrameRgb8 { w, h, stride: w * 3, data: &rgb };
///
/// let detector = SurfaceDetector::new(DetectorParams::default());
/// let result = detector.detect(frame);
/// println!(
///     "surface={} latency_ms={:.3}",
///     result.surface.is_some(),
///     result.latency_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{FrameBuffer, FrameRgb8};
    pub use crate::{DetectionResult, DetectorParams, SurfaceDetector};
}
