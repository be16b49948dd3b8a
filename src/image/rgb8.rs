//! Frame views over interleaved 8-bit RGB data.
//!
//! The detector only ever borrows pixel data: `FrameRgb8` is a read-only view
//! into a caller-owned buffer, `FrameBuffer` is the owned counterpart used by
//! frame sources and the I/O helpers.

/// Borrowed view of an interleaved RGB frame (3 bytes per pixel).
#[derive(Clone, Debug)]
pub struct FrameRgb8<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between consecutive rows (>= `3 * w`).
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> FrameRgb8<'a> {
    /// Raw RGB triple at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + 3 * x;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Scalar intensity at (x, y): mean of the three channels.
    #[inline]
    pub fn intensity(&self, x: usize, y: usize) -> f32 {
        let [r, g, b] = self.get(x, y);
        (r as f32 + g as f32 + b as f32) * (1.0 / 3.0)
    }

    /// True when the view has no addressable pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// Owned RGB frame buffer with tightly packed rows.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Construct from raw interleaved RGB bytes (`3 * width * height`).
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), 3 * width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Solid-color frame, mostly useful in tests and demos.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(3 * width * height);
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Overwrite the pixel at (x, y). Ignores out-of-range coordinates.
    pub fn put(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = 3 * (y * self.width + x);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Borrow as a read-only `FrameRgb8` view.
    pub fn as_view(&self) -> FrameRgb8<'_> {
        FrameRgb8 {
            w: self.width,
            h: self.height,
            stride: 3 * self.width,
            data: &self.data,
        }
    }
}
