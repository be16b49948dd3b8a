//! Parameter types configuring the detector stages.
//!
//! Knobs are grouped by stage: gradient extraction, cell scan, and the
//! presentation-space mapping. Defaults are tuned for handheld camera frames
//! around 640x480; for tuning, start with the magnitude threshold and the
//! density band.

use crate::edges::EdgeOptions;
use crate::normalize::{NormalizeOptions, Viewport};
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Gradient pass options.
    pub edge: EdgeOptions,
    /// Cell scan and scoring options.
    pub scan: ScanOptions,
    /// Overlay clamping policy.
    pub normalize: NormalizeOptions,
    /// Presentation viewport the overlay is sized against.
    pub viewport: Viewport,
}

/// Options for the overlapping-cell scan and candidate scoring.
///
/// The density band is the heart of the heuristic: a cell with too few edge
/// points has no feature, one with too many is textured clutter. Both bounds
/// are exclusive. The boundary test then requires edge points to concentrate
/// near at least one vertical and one horizontal cell side, which separates a
/// rectangular outline from scattered texture.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Cell side as a fraction of `min(W, H)`.
    pub cell_frac: f32,
    /// Scan step as a fraction of the cell side (< 1 so cells overlap).
    pub step_frac: f32,
    /// Density band lower bound (exclusive).
    pub min_cell_edges: usize,
    /// Density band upper bound (exclusive).
    pub max_cell_edges: usize,
    /// Distance from a cell side that counts as "near the boundary" (pixels).
    pub boundary_margin: f32,
    /// Boundary group population floor (exclusive).
    pub min_boundary_edges: usize,
    /// Footprint width as a multiple of the cell side.
    pub width_inflate: f32,
    /// Footprint height as a multiple of the cell side.
    pub height_inflate: f32,
    /// Hard cap on the confidence score.
    pub confidence_cap: f32,
    /// Mean edge strength divisor when deriving confidence.
    pub strength_scale: f32,
    /// Global edge-point floor below which no detection is trusted.
    pub min_total_edges: usize,
    /// Ranking weight on confidence.
    pub confidence_weight: f32,
    /// Ranking weight on (normalized) rectangularity.
    pub rectangularity_weight: f32,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            cell_frac: 0.2,
            step_frac: 0.7,
            min_cell_edges: 8,
            max_cell_edges: 40,
            boundary_margin: 15.0,
            min_boundary_edges: 2,
            width_inflate: 1.2,
            height_inflate: 1.5,
            confidence_cap: 0.95,
            strength_scale: 100.0,
            min_total_edges: 10,
            confidence_weight: 0.6,
            rectangularity_weight: 0.4,
        }
    }
}
