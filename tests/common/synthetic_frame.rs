use surface_detector::FrameBuffer;

pub const WHITE: [u8; 3] = [255, 255, 255];
pub const BLACK: [u8; 3] = [0, 0, 0];

/// Uniformly colored frame: zero gradient everywhere.
pub fn uniform_frame(width: usize, height: usize, rgb: [u8; 3]) -> FrameBuffer {
    FrameBuffer::filled(width, height, rgb)
}

/// Stamp a 3x3 dark dot with its top-left corner at (x, y).
fn stamp_dot(frame: &mut FrameBuffer, x: usize, y: usize) {
    for dy in 0..3 {
        for dx in 0..3 {
            frame.put(x + dx, y + dy, BLACK);
        }
    }
}

/// White frame carrying a dotted rectangular outline inside one scan cell.
///
/// The frame is `200*scale x 150*scale`, which puts the cell side at
/// `30*scale` and the scan step at `21*scale`, so the cell anchored at
/// `(21*scale, 21*scale)` exists at every scale. Three dots sit just inside
/// the cell's left boundary and three just inside its top boundary, spread at
/// fixed fractions of the cell side. Dot size stays 3x3 and dot coordinates
/// are forced even so each dot contributes exactly four stride-2 edge
/// points: 24 points in the cell, inside the density band, with both
/// boundary groups populated.
pub fn dotted_outline_frame(scale: usize) -> FrameBuffer {
    assert!(scale >= 1);
    let width = 200 * scale;
    let height = 150 * scale;
    let mut frame = FrameBuffer::filled(width, height, WHITE);

    let cell = 30 * scale; // 0.2 * min(W, H)
    let origin = 21 * scale; // one scan step from the frame corner
    let even = |v: usize| v & !1;

    for i in 0..3 {
        let along = even(origin + cell * (25 + 25 * i) / 100);
        // left boundary: fixed 4-px inset keeps the dot inside the 15-px band
        stamp_dot(&mut frame, even(origin + 4), along);
        // top boundary
        stamp_dot(&mut frame, along, even(origin + 4));
    }

    frame
}
