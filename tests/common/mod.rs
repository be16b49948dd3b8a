// Each integration test binary compiles its own copy; not every helper is
// used by every binary.
#![allow(dead_code)]

pub mod synthetic_frame;
