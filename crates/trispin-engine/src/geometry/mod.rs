//! CPU-side triangle data and the per-frame rotation.

mod rotate;
mod vertex;

pub use rotate::{advance, FrameUpdater};
pub use vertex::{ColorSet, Rgb, Vertex, VertexSet, INITIAL_COLORS, INITIAL_TRIANGLE};
