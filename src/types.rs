use serde::Serialize;

/// A scored rectangular region in frame-pixel space.
///
/// Produced by the cell scan; at most one survives selection per pass.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSurface {
    /// Center X in frame pixels
    pub cx: f32,
    /// Center Y in frame pixels
    pub cy: f32,
    /// Footprint width in frame pixels (inflated past the scan cell)
    pub width: f32,
    /// Footprint height in frame pixels
    pub height: f32,
    /// Detection strength in [0, 0.95]
    pub confidence: f32,
    /// Edge points inside the originating cell
    pub edge_count: usize,
    /// Mean boundary-group population (higher = cleaner outline)
    pub rectangularity: f32,
}

/// Presentation-space description of the winning surface.
///
/// Center is expressed as percentages of the frame, size in viewport pixels
/// after policy clamping (see [`crate::normalize`]).
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceOverlay {
    pub x_pct: f32,
    pub y_pct: f32,
    pub width_px: f32,
    pub height_px: f32,
    pub confidence: f32,
}

/// Output of one detection pass.
///
/// Replaced wholesale on every tick; `surface` is `None` when the frame has
/// no trustworthy candidate, which is a normal outcome rather than an error.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DetectionResult {
    pub surface: Option<SurfaceOverlay>,
    pub edge_count: usize,
    pub latency_ms: f64,
}
