//! Detection pipeline: cell scan, rectangularity scoring, selection.
//!
//! The [`SurfaceDetector`] exposes a small API: feed an RGB frame view and
//! get at most one normalized surface candidate back. Internally it runs the
//! gradient pass, covers the frame with overlapping square cells sized
//! relative to `min(W, H)`, gates each cell on edge-point density and on a
//! rectangular-outline test, scores survivors, and keeps the single best.
//!
//! Every pass is pure and independent: identical pixel data produces a
//! bit-identical result, and nothing is carried over between frames.
//!
//! Typical usage:
//! ```no_run
//! use surface_detector::{DetectorParams, FrameRgb8, SurfaceDetector};
//!
//! # fn example(frame: FrameRgb8) {
//! let detector = SurfaceDetector::new(DetectorParams::default());
//! let result = detector.detect(frame);
//! if let Some(surface) = result.surface {
//!     println!("confidence: {:.3}", surface.confidence);
//! }
//! # }
//! ```

use super::params::{DetectorParams, ScanOptions};
use crate::diagnostics::{DetectionReport, InputDescriptor, StageTiming};
use crate::edges::{extract_edge_points, EdgePoint};
use crate::image::FrameRgb8;
use crate::normalize::normalize_surface;
use crate::types::{CandidateSurface, DetectionResult};
use log::debug;
use std::time::Instant;

/// Divisor bringing rectangularity onto the same scale as confidence when
/// ranking candidates.
const RECTANGULARITY_NORM: f32 = 10.0;

/// Stateless single-surface detector.
pub struct SurfaceDetector {
    params: DetectorParams,
}

impl SurfaceDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Update the viewport the overlay is sized against (device rotation,
    /// window resize).
    pub fn set_viewport(&mut self, viewport: crate::normalize::Viewport) {
        self.params.viewport = viewport;
    }

    /// Run one detection pass.
    pub fn detect(&self, frame: FrameRgb8) -> DetectionResult {
        self.detect_with_report(frame).result
    }

    /// Run one detection pass and keep the intermediate products for tooling.
    pub fn detect_with_report(&self, frame: FrameRgb8) -> DetectionReport {
        let total_start = Instant::now();
        let input = InputDescriptor {
            width: frame.w,
            height: frame.h,
        };

        if frame.is_empty() {
            debug!("SurfaceDetector::detect degenerate frame, skipping");
            return DetectionReport::empty(input, total_start.elapsed().as_secs_f64() * 1000.0);
        }

        let edge_start = Instant::now();
        let edge_points = extract_edge_points(&frame, &self.params.edge);
        let edge_ms = edge_start.elapsed().as_secs_f64() * 1000.0;

        if edge_points.len() < self.params.scan.min_total_edges {
            debug!(
                "SurfaceDetector::detect only {} edge points, below the global floor",
                edge_points.len()
            );
            let mut report =
                DetectionReport::empty(input, total_start.elapsed().as_secs_f64() * 1000.0);
            report.result.edge_count = edge_points.len();
            report.timing.edge_ms = edge_ms;
            report.edge_points = edge_points;
            return report;
        }

        let scan_start = Instant::now();
        let scan = scan_cells(&edge_points, frame.w, frame.h, &self.params.scan);
        let best = select_best(&scan.candidates, &self.params.scan);
        let scan_ms = scan_start.elapsed().as_secs_f64() * 1000.0;

        let surface = best.map(|c| {
            normalize_surface(
                &c,
                frame.w,
                frame.h,
                self.params.viewport,
                &self.params.normalize,
            )
        });
        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "SurfaceDetector::detect edges={} cells={} candidates={} found={}",
            edge_points.len(),
            scan.cells_scanned,
            scan.candidates.len(),
            surface.is_some()
        );

        DetectionReport {
            input,
            result: DetectionResult {
                surface,
                edge_count: edge_points.len(),
                latency_ms: total_ms,
            },
            edge_points,
            candidates: scan.candidates,
            cells_scanned: scan.cells_scanned,
            timing: StageTiming {
                edge_ms,
                scan_ms,
                total_ms,
            },
        }
    }
}

pub(crate) struct CellScan {
    pub candidates: Vec<CandidateSurface>,
    pub cells_scanned: usize,
}

/// Cover the frame with overlapping square cells and score the ones that
/// look like a rectangular outline.
pub(crate) fn scan_cells(
    points: &[EdgePoint],
    width: usize,
    height: usize,
    opts: &ScanOptions,
) -> CellScan {
    let w = width as f32;
    let h = height as f32;
    let cell = opts.cell_frac * w.min(h);
    let step = ((cell * opts.step_frac).floor() as usize).max(1);

    let mut candidates = Vec::new();
    let mut cells_scanned = 0usize;

    let mut y = 0usize;
    while (y as f32) < h - cell {
        let mut x = 0usize;
        while (x as f32) < w - cell {
            cells_scanned += 1;
            if let Some(candidate) = score_cell(points, x as f32, y as f32, cell, opts) {
                candidates.push(candidate);
            }
            x += step;
        }
        y += step;
    }

    CellScan {
        candidates,
        cells_scanned,
    }
}

fn score_cell(
    points: &[EdgePoint],
    cx: f32,
    cy: f32,
    cell: f32,
    opts: &ScanOptions,
) -> Option<CandidateSurface> {
    let inside: Vec<&EdgePoint> = points
        .iter()
        .filter(|p| {
            let px = p.x as f32;
            let py = p.y as f32;
            px >= cx && px < cx + cell && py >= cy && py < cy + cell
        })
        .collect();

    if inside.len() <= opts.min_cell_edges || inside.len() >= opts.max_cell_edges {
        return None;
    }

    let margin = opts.boundary_margin;
    let near = |v: f32, boundary: f32| (v - boundary).abs() < margin;
    let left = inside.iter().filter(|p| near(p.x as f32, cx)).count();
    let right = inside.iter().filter(|p| near(p.x as f32, cx + cell)).count();
    let top = inside.iter().filter(|p| near(p.y as f32, cy)).count();
    let bottom = inside
        .iter()
        .filter(|p| near(p.y as f32, cy + cell))
        .count();

    let has_vertical = left > opts.min_boundary_edges || right > opts.min_boundary_edges;
    let has_horizontal = top > opts.min_boundary_edges || bottom > opts.min_boundary_edges;
    if !has_vertical || !has_horizontal {
        return None;
    }

    let mean_strength =
        inside.iter().map(|p| p.strength).sum::<f32>() / inside.len() as f32;

    Some(CandidateSurface {
        cx: cx + cell / 2.0,
        cy: cy + cell / 2.0,
        width: cell * opts.width_inflate,
        height: cell * opts.height_inflate,
        confidence: (mean_strength / opts.strength_scale).min(opts.confidence_cap),
        edge_count: inside.len(),
        rectangularity: (left + right + top + bottom) as f32 / 4.0,
    })
}

fn ranking_score(candidate: &CandidateSurface, opts: &ScanOptions) -> f32 {
    candidate.confidence * opts.confidence_weight
        + (candidate.rectangularity / RECTANGULARITY_NORM) * opts.rectangularity_weight
}

/// Keep the highest-scoring candidate; ties resolve to scan order so the
/// result is reproducible.
pub(crate) fn select_best(
    candidates: &[CandidateSurface],
    opts: &ScanOptions,
) -> Option<CandidateSurface> {
    let mut best: Option<(f32, &CandidateSurface)> = None;
    for candidate in candidates {
        let score = ranking_score(candidate, opts);
        match best {
            Some((best_score, _)) if score <= best_score => {}
            _ => best = Some((score, candidate)),
        }
    }
    best.map(|(_, c)| *c)
}
