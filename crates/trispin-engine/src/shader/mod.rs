//! Shader program building.
//!
//! A program is built in three steps, each of which can fail terminally:
//!
//! | Step | Type produced | Failure |
//! |------|---------------|---------|
//! | load both source files | [`ShaderSources`] | [`ShaderError::SourceMissing`] |
//! | compile each stage (GLSL parse + validate) | [`CompiledStage`] | [`ShaderError::Compile`] |
//! | link the stages, then create the GPU pipeline | [`LinkedProgram`], [`CompiledProgram`] | [`ShaderError::Link`] |
//!
//! [`ShaderProgramBuilder`] runs the whole sequence. Compile and link run on
//! the CPU through naga, so everything up to [`LinkedProgram`] works without
//! a device.

mod builder;
mod compile;
mod error;
mod link;
mod program;
mod source;
mod stage;

pub use builder::ShaderProgramBuilder;
pub use compile::{compile_stage, CompiledStage};
pub use error::ShaderError;
pub use link::{link, InterfaceVar, LinkedProgram};
pub use program::{CompiledProgram, ProgramTarget};
pub use source::ShaderSources;
pub use stage::ShaderStage;

#[cfg(test)]
pub(crate) use compile::tests::{FRAGMENT, VERTEX};
#[cfg(test)]
pub(crate) use program::tests::noop_device;
