//! trispin engine crate.
//!
//! Platform + GPU runtime pieces for the triangle lab: window loop, wgpu
//! device, shader program building, and the rotating-triangle geometry.

pub mod core;
pub mod device;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod render;
pub mod shader;
pub mod window;
