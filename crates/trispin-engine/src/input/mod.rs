//! Keyboard input.
//!
//! The public types do not expose winit; `platform::winit` translates
//! window events into `KeyEvent`s for the runtime.

pub mod platform;
mod types;

pub use types::{Key, KeyEvent, KeyState};
