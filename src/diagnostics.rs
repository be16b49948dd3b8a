//! Structured diagnostics for one detection pass.
//!
//! [`DetectionReport`] keeps the intermediate products the plain
//! [`DetectionResult`](crate::types::DetectionResult) drops: the extracted
//! edge points, every candidate that survived the cell gates, and per-stage
//! timings. Everything serializes to JSON for offline inspection (see the
//! `surface_demo` binary).
use crate::edges::EdgePoint;
use crate::types::{CandidateSurface, DetectionResult};
use serde::Serialize;

/// Dimensions of the processed frame.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Wall-clock stage timings in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct StageTiming {
    pub edge_ms: f64,
    pub scan_ms: f64,
    pub total_ms: f64,
}

/// Full record of a detection pass.
#[derive(Clone, Debug, Serialize)]
pub struct DetectionReport {
    pub input: InputDescriptor,
    pub result: DetectionResult,
    /// Edge points fed into the cell scan.
    pub edge_points: Vec<EdgePoint>,
    /// Candidates that passed the density and rectangularity gates.
    pub candidates: Vec<CandidateSurface>,
    pub cells_scanned: usize,
    pub timing: StageTiming,
}

impl DetectionReport {
    /// Report for a pass that ended before the cell scan.
    pub(crate) fn empty(input: InputDescriptor, total_ms: f64) -> Self {
        Self {
            input,
            result: DetectionResult {
                surface: None,
                edge_count: 0,
                latency_ms: total_ms,
            },
            edge_points: Vec::new(),
            candidates: Vec::new(),
            cells_scanned: 0,
            timing: StageTiming {
                total_ms,
                ..Default::default()
            },
        }
    }
}
