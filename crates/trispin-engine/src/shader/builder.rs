use std::path::PathBuf;

use super::compile::compile_all;
use super::{link, CompiledProgram, LinkedProgram, ProgramTarget, ShaderError, ShaderSources};

/// Builds a program from a vertex + fragment source file pair.
///
/// ```rust,ignore
/// let program = ShaderProgramBuilder::new("shaders/tri.vert", "shaders/tri.frag")
///     .build(gpu.device(), &target)?;
/// ```
#[derive(Debug, Clone)]
pub struct ShaderProgramBuilder {
    vertex_path: PathBuf,
    fragment_path: PathBuf,
}

impl ShaderProgramBuilder {
    pub fn new(vertex_path: impl Into<PathBuf>, fragment_path: impl Into<PathBuf>) -> Self {
        Self {
            vertex_path: vertex_path.into(),
            fragment_path: fragment_path.into(),
        }
    }

    /// Loads, compiles and links both stages without touching the GPU.
    pub fn link(&self) -> Result<LinkedProgram, ShaderError> {
        let sources = ShaderSources::load(&self.vertex_path, &self.fragment_path)?;
        let (vertex, fragment) = compile_all(&sources)?;

        log::info!("linking program");
        link(vertex, fragment).inspect_err(|err| log::error!("{err}"))
    }

    /// Full build: [`link`](Self::link), then pipeline creation on `device`.
    pub fn build(
        &self,
        device: &wgpu::Device,
        target: &ProgramTarget<'_>,
    ) -> Result<CompiledProgram, ShaderError> {
        let linked = self.link()?;
        CompiledProgram::create(device, linked, target).inspect_err(|err| log::error!("{err}"))
    }
}
