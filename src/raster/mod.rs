//! Stroke-to-bitmap software rasterizer
//!
//! Converts one drawing (an ordered list of polyline strokes) into a
//! fixed 256x256 binary canvas:
//! - Vertical segments take a dedicated column-fill path
//! - Everything else is a slope-intercept scan that marks six rounding
//!   candidates per column, deliberately over-inclusive so rounding
//!   never leaves 1-pixel gaps in the line

mod canvas;
mod draw;

pub use canvas::*;
pub use draw::*;

/// Canvas dimensions (fixed, the dataset format depends on them)
pub const WIDTH: usize = 256;
pub const HEIGHT: usize = 256;
