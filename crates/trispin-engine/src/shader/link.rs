use std::fmt::Write as _;

use naga::{Binding, Module, TypeInner};

use super::{CompiledStage, ShaderError, ShaderStage};

/// One location-bound value crossing a stage boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceVar {
    pub location: u32,
    pub name: Option<String>,
    pub ty: TypeInner,
}

/// A linked stage: its module, entry point, and location interface.
#[derive(Debug)]
pub(crate) struct LinkedStage {
    pub(crate) module: Module,
    pub(crate) entry_point: String,
    pub(crate) inputs: Vec<InterfaceVar>,
    pub(crate) outputs: Vec<InterfaceVar>,
}

/// Vertex + fragment stages whose interfaces agree.
///
/// Not bound to any device yet; see [`CompiledProgram`](super::CompiledProgram).
#[derive(Debug)]
pub struct LinkedProgram {
    pub(crate) vertex: LinkedStage,
    pub(crate) fragment: LinkedStage,
}

impl LinkedProgram {
    /// Vertex attributes the program expects, sorted by location.
    pub fn vertex_inputs(&self) -> &[InterfaceVar] {
        &self.vertex.inputs
    }

    /// Values the vertex stage hands to the fragment stage.
    pub fn varyings(&self) -> &[InterfaceVar] {
        &self.fragment.inputs
    }

    /// Fragment color outputs, sorted by location.
    pub fn fragment_outputs(&self) -> &[InterfaceVar] {
        &self.fragment.outputs
    }
}

/// Links a compiled vertex stage with a compiled fragment stage.
///
/// Every fragment input must be written by the vertex stage at the same
/// location with the same type. Both stages are consumed; they are released
/// here whether linking succeeds or not.
pub fn link(vertex: CompiledStage, fragment: CompiledStage) -> Result<LinkedProgram, ShaderError> {
    if vertex.stage != ShaderStage::Vertex || fragment.stage != ShaderStage::Fragment {
        return Err(ShaderError::link(format!(
            "expected vertex + fragment stages, got {} + {}",
            vertex.stage, fragment.stage
        )));
    }

    let vertex = linked_stage(vertex)?;
    let fragment = linked_stage(fragment)?;

    let mut log = String::new();
    for input in &fragment.inputs {
        match vertex.outputs.iter().find(|o| o.location == input.location) {
            None => {
                let _ = writeln!(
                    log,
                    "fragment input {} at location {} is not written by the vertex stage",
                    display_name(input),
                    input.location
                );
            }
            Some(output) if output.ty != input.ty => {
                let _ = writeln!(
                    log,
                    "type mismatch at location {}: vertex writes {:?}, fragment reads {:?}",
                    input.location, output.ty, input.ty
                );
            }
            Some(_) => {}
        }
    }

    if !log.is_empty() {
        return Err(ShaderError::link(log.trim_end()));
    }

    Ok(LinkedProgram { vertex, fragment })
}

fn linked_stage(compiled: CompiledStage) -> Result<LinkedStage, ShaderError> {
    let CompiledStage { stage, module } = compiled;
    let naga_stage = stage.to_naga();

    let mut entry_points = module.entry_points.iter().filter(|ep| ep.stage == naga_stage);
    let (Some(ep), None) = (entry_points.next(), entry_points.next()) else {
        return Err(ShaderError::link(format!(
            "{stage} stage must have exactly one {stage} entry point"
        )));
    };

    let mut inputs = Vec::new();
    for arg in &ep.function.arguments {
        collect_located(&module, arg.ty, arg.binding.as_ref(), arg.name.clone(), &mut inputs);
    }

    let mut outputs = Vec::new();
    if let Some(result) = &ep.function.result {
        collect_located(&module, result.ty, result.binding.as_ref(), None, &mut outputs);
    }

    inputs.sort_by_key(|v| v.location);
    outputs.sort_by_key(|v| v.location);

    let entry_point = ep.name.clone();
    Ok(LinkedStage {
        module,
        entry_point,
        inputs,
        outputs,
    })
}

/// Flattens one argument/result into location-bound values. Built-ins are
/// skipped; unbound structs contribute their bound members.
fn collect_located(
    module: &Module,
    ty: naga::Handle<naga::Type>,
    binding: Option<&Binding>,
    name: Option<String>,
    out: &mut Vec<InterfaceVar>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => out.push(InterfaceVar {
            location: *location,
            name,
            ty: module.types[ty].inner.clone(),
        }),
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_located(
                        module,
                        member.ty,
                        member.binding.as_ref(),
                        member.name.clone(),
                        out,
                    );
                }
            }
        }
    }
}

fn display_name(var: &InterfaceVar) -> &str {
    var.name.as_deref().unwrap_or("<unnamed>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::compile::tests::{FRAGMENT, VERTEX};
    use crate::shader::compile_stage;

    fn stages(vs: &str, fs: &str) -> (CompiledStage, CompiledStage) {
        (
            compile_stage(ShaderStage::Vertex, vs).unwrap(),
            compile_stage(ShaderStage::Fragment, fs).unwrap(),
        )
    }

    #[test]
    fn matching_interfaces_link() {
        let (vs, fs) = stages(VERTEX, FRAGMENT);
        let program = link(vs, fs).unwrap();

        let locations: Vec<u32> = program.vertex_inputs().iter().map(|v| v.location).collect();
        assert_eq!(locations, vec![0, 1]);
        assert_eq!(program.varyings().len(), 1);
        assert_eq!(program.fragment_outputs()[0].location, 0);
    }

    #[test]
    fn unwritten_varying_fails_link() {
        let fs = r#"#version 450 core
layout(location = 3) in vec3 tint;
layout(location = 0) out vec4 finalColor;

void main() {
    finalColor = vec4(tint, 1.0);
}
"#;
        let (vs, fs) = stages(VERTEX, fs);
        let err = link(vs, fs).unwrap_err();

        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(err.diagnostic_log().contains("location 3"));
    }

    #[test]
    fn varying_type_mismatch_fails_link() {
        let fs = r#"#version 450 core
layout(location = 0) in vec2 color;
layout(location = 0) out vec4 finalColor;

void main() {
    finalColor = vec4(color, 0.0, 1.0);
}
"#;
        let (vs, fs) = stages(VERTEX, fs);
        let err = link(vs, fs).unwrap_err();
        assert!(err.diagnostic_log().contains("type mismatch"));
    }

    #[test]
    fn swapped_stages_fail_link() {
        let (vs, fs) = stages(VERTEX, FRAGMENT);
        assert!(matches!(link(fs, vs), Err(ShaderError::Link { .. })));
    }
}
