use naga::front::glsl;
use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::{ShaderError, ShaderSources, ShaderStage};

/// A single stage that parsed and validated on its own.
///
/// Only lives until [`link`](super::link) consumes it.
#[derive(Debug)]
pub struct CompiledStage {
    pub(crate) stage: ShaderStage,
    pub(crate) module: naga::Module,
}

impl CompiledStage {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn module(&self) -> &naga::Module {
        &self.module
    }
}

/// Compiles one GLSL stage: front-end parse, then IR validation.
///
/// Diagnostics are rendered against the source text, so the returned log
/// points at the offending line.
pub fn compile_stage(stage: ShaderStage, source: &str) -> Result<CompiledStage, ShaderError> {
    let mut frontend = glsl::Frontend::default();

    let module = frontend
        .parse(&glsl::Options::from(stage.to_naga()), source)
        .map_err(|errors| {
            let log = non_empty(errors.emit_to_string(source), || errors.to_string(), stage);
            ShaderError::Compile { stage, log }
        })?;

    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::empty());
    validator.validate(&module).map_err(|error| {
        let log = non_empty(error.emit_to_string(source), || error.to_string(), stage);
        ShaderError::Compile { stage, log }
    })?;

    Ok(CompiledStage { stage, module })
}

/// Compiles both stages, vertex first.
pub(crate) fn compile_all(
    sources: &ShaderSources,
) -> Result<(CompiledStage, CompiledStage), ShaderError> {
    let compile = |stage: ShaderStage| {
        log::info!("compiling {stage} shader: {}", sources.path(stage).display());
        compile_stage(stage, sources.text(stage)).inspect_err(|err| log::error!("{err}"))
    };

    let vertex = compile(ShaderStage::Vertex)?;
    let fragment = compile(ShaderStage::Fragment)?;
    Ok((vertex, fragment))
}

fn non_empty(primary: String, fallback: impl FnOnce() -> String, stage: ShaderStage) -> String {
    if !primary.trim().is_empty() {
        return primary;
    }
    let fallback = fallback();
    if !fallback.trim().is_empty() {
        return fallback;
    }
    format!("{stage} shader rejected without a diagnostic")
}
