//! Presentation-space mapping for the winning candidate.
//!
//! Detection works in frame pixels; overlay rendering works in viewport
//! coordinates. This module owns the mapping policy: center as percentages of
//! the frame, size rescaled against the viewport and clamped into a band that
//! keeps the overlay visible without covering the whole screen. The clamps are
//! a rendering policy, not part of detection correctness.
use crate::types::{CandidateSurface, SurfaceOverlay};
use serde::{Deserialize, Serialize};

/// Presentation viewport dimensions in device pixels.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Size-clamping policy for the overlay.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Fraction of the viewport width the frame-relative width maps onto.
    pub width_gain: f32,
    /// Overlay width floor in viewport pixels.
    pub min_width_px: f32,
    /// Overlay width ceiling as a fraction of the viewport width.
    pub max_width_frac: f32,
    pub height_gain: f32,
    pub min_height_px: f32,
    pub max_height_frac: f32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            width_gain: 0.4,
            min_width_px: 120.0,
            max_width_frac: 0.6,
            height_gain: 0.3,
            min_height_px: 160.0,
            max_height_frac: 0.4,
        }
    }
}

/// Map a pixel-space candidate into viewport coordinates.
///
/// `frame_w`/`frame_h` are the dimensions of the frame the candidate was
/// detected in; they are guaranteed nonzero by the caller (the detector
/// rejects degenerate frames before the scan runs).
pub fn normalize_surface(
    candidate: &CandidateSurface,
    frame_w: usize,
    frame_h: usize,
    viewport: Viewport,
    opts: &NormalizeOptions,
) -> SurfaceOverlay {
    let fw = frame_w as f32;
    let fh = frame_h as f32;

    let width_px = (candidate.width / fw * viewport.width * opts.width_gain)
        .max(opts.min_width_px)
        .min(viewport.width * opts.max_width_frac);
    let height_px = (candidate.height / fh * viewport.height * opts.height_gain)
        .max(opts.min_height_px)
        .min(viewport.height * opts.max_height_frac);

    SurfaceOverlay {
        x_pct: candidate.cx / fw * 100.0,
        y_pct: candidate.cy / fh * 100.0,
        width_px,
        height_px,
        confidence: candidate.confidence,
    }
}
