//! Single-surface detector.
//!
//! Overview
//! - Extracts edge points with a subsampled Sobel pass (`crate::edges`).
//! - Covers the frame with overlapping square cells sized relative to
//!   `min(W, H)` and stepped at a fraction of the cell side, so a surface
//!   spanning a cell boundary is still found.
//! - Gates each cell on edge-point density (too few: no feature; too many:
//!   textured clutter) and on a rectangular-outline test (points concentrated
//!   near the cell sides).
//! - Scores survivors by capped mean edge strength plus rectangularity and
//!   keeps the single best, or none.
//! - Maps the winner into presentation space (`crate::normalize`).
//!
//! Modules
//! - [`params`] – configuration types used by the detector and tooling.
//! - `pipeline` – the [`SurfaceDetector`] implementation.
//!
//! A pass never fails: malformed or degenerate frames, blank walls, and noisy
//! scenes all degrade to "no surface", which downstream treats as a normal
//! outcome.

pub mod params;
mod pipeline;

pub use params::{DetectorParams, ScanOptions};
pub use pipeline::SurfaceDetector;
