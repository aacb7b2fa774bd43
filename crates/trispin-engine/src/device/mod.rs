//! GPU device + surface management.
//!
//! Owns the wgpu Device/Queue and the window Surface, and hands out one
//! `GpuFrame` (encoder + target view) per presented frame.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
