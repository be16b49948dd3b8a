pub mod io;
pub mod rgb8;

pub use self::rgb8::{FrameBuffer, FrameRgb8};
