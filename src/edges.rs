//! Edge-point extraction on a subsampled pixel grid.
//!
//! Computes Sobel gradients on per-pixel mean intensity and keeps locations
//! whose magnitude exceeds a threshold. Evaluation runs on a stride-2 grid of
//! interior pixels so the cost stays bounded on large frames; the outermost
//! margin is excluded so neighbor lookups never leave the buffer.
//!
//! The output is a sparse list of [`EdgePoint`]s. Downstream, the cell scan
//! only cares about point positions and strengths, so no magnitude image or
//! orientation map is retained.
use crate::image::FrameRgb8;
use serde::{Deserialize, Serialize};

/// A high-gradient sample kept for the cell scan.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgePoint {
    /// X coordinate in frame pixels
    pub x: u32,
    /// Y coordinate in frame pixels
    pub y: u32,
    /// Gradient magnitude at (x, y)
    pub strength: f32,
}

/// Options for the gradient pass.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Magnitude threshold on the 8-bit intensity scale.
    pub mag_thresh: f32,
    /// Sampling stride in both axes (>= 1).
    pub stride: usize,
    /// Border exclusion in pixels (>= 1, keeps the 3x3 window in bounds).
    pub margin: usize,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            mag_thresh: 40.0,
            stride: 2,
            margin: 2,
        }
    }
}

/// Extract edge points from `frame` on the subsampled interior grid.
///
/// Returns an empty vector for frames too small to hold the 3x3 gradient
/// window inside the margin; no input faults.
pub fn extract_edge_points(frame: &FrameRgb8, opts: &EdgeOptions) -> Vec<EdgePoint> {
    let w = frame.w;
    let h = frame.h;
    let margin = opts.margin.max(1);
    let stride = opts.stride.max(1);
    if w <= 2 * margin || h <= 2 * margin {
        return Vec::new();
    }

    let cols = (w - 2 * margin).div_ceil(stride);
    let rows = (h - 2 * margin).div_ceil(stride);
    let mut points = Vec::with_capacity(cols * rows / 8 + 1);

    let mut y = margin;
    while y < h - margin {
        let mut x = margin;
        while x < w - margin {
            let tl = frame.intensity(x - 1, y - 1);
            let tc = frame.intensity(x, y - 1);
            let tr = frame.intensity(x + 1, y - 1);
            let ml = frame.intensity(x - 1, y);
            let mr = frame.intensity(x + 1, y);
            let bl = frame.intensity(x - 1, y + 1);
            let bc = frame.intensity(x, y + 1);
            let br = frame.intensity(x + 1, y + 1);

            let gx = (tr + 2.0 * mr + br) - (tl + 2.0 * ml + bl);
            let gy = (bl + 2.0 * bc + br) - (tl + 2.0 * tc + tr);
            let magnitude = (gx * gx + gy * gy).sqrt();

            if magnitude > opts.mag_thresh {
                points.push(EdgePoint {
                    x: x as u32,
                    y: y as u32,
                    strength: magnitude,
                });
            }
            x += stride;
        }
        y += stride;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::FrameBuffer;

    fn vertical_step_frame(w: usize, h: usize, split: usize) -> FrameBuffer {
        let mut frame = FrameBuffer::filled(w, h, [255, 255, 255]);
        for y in 0..h {
            for x in split..w {
                frame.put(x, y, [0, 0, 0]);
            }
        }
        frame
    }

    #[test]
    fn uniform_frame_has_no_edges() {
        let frame = FrameBuffer::filled(64, 48, [128, 128, 128]);
        let points = extract_edge_points(&frame.as_view(), &EdgeOptions::default());
        assert!(points.is_empty());
    }

    #[test]
    fn step_edge_produces_points_along_the_boundary() {
        let frame = vertical_step_frame(64, 48, 32);
        let points = extract_edge_points(&frame.as_view(), &EdgeOptions::default());
        assert!(!points.is_empty());
        for p in &points {
            assert!(
                (p.x as i64 - 32).unsigned_abs() <= 1,
                "edge point at x={} far from the step at 32",
                p.x
            );
            assert!(p.strength > 40.0);
        }
    }

    #[test]
    fn raising_the_threshold_never_adds_points() {
        let frame = vertical_step_frame(64, 48, 32);
        let view = frame.as_view();
        let low = extract_edge_points(
            &view,
            &EdgeOptions {
                mag_thresh: 40.0,
                ..Default::default()
            },
        );
        let high = extract_edge_points(
            &view,
            &EdgeOptions {
                mag_thresh: 400.0,
                ..Default::default()
            },
        );
        assert!(high.len() <= low.len());
        let very_high = extract_edge_points(
            &view,
            &EdgeOptions {
                mag_thresh: 1e6,
                ..Default::default()
            },
        );
        assert!(very_high.is_empty());
    }

    #[test]
    fn tiny_frames_are_safe() {
        let frame = FrameBuffer::filled(5, 5, [0, 0, 0]);
        let points = extract_edge_points(&frame.as_view(), &EdgeOptions::default());
        assert!(points.is_empty());

        let empty = FrameBuffer::new(0, 0, Vec::new());
        let points = extract_edge_points(&empty.as_view(), &EdgeOptions::default());
        assert!(points.is_empty());
    }
}
