//! GPU rendering.
//!
//! Renderers own their GPU resources (pipeline, buffers); everything is
//! released when the renderer drops.

mod ctx;
mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangle::TriangleRenderer;
