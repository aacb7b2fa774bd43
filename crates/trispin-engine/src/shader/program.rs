use std::borrow::Cow;

use naga::{Scalar, TypeInner, VectorSize};

use super::{LinkedProgram, ShaderError};

/// Fixed-function state a program is created against.
#[derive(Debug, Clone)]
pub struct ProgramTarget<'a> {
    pub label: &'a str,
    /// Buffer layouts bound at draw time, in slot order.
    pub vertex_buffers: &'a [wgpu::VertexBufferLayout<'a>],
    pub color_format: wgpu::TextureFormat,
    pub topology: wgpu::PrimitiveTopology,
}

/// A program the GPU can bind: the render pipeline built from a linked
/// vertex + fragment pair.
///
/// Only constructed on full success; the pipeline is released on drop.
pub struct CompiledProgram {
    label: String,
    pipeline: wgpu::RenderPipeline,
}

impl CompiledProgram {
    /// Creates the GPU pipeline for `linked`.
    ///
    /// Vertex inputs are checked against `target.vertex_buffers` and the
    /// fragment stage must write the color target at location 0. Those
    /// failures, and any validation error the device raises while creating
    /// the modules or the pipeline, are link errors. The stage modules are
    /// consumed.
    pub fn create(
        device: &wgpu::Device,
        linked: LinkedProgram,
        target: &ProgramTarget<'_>,
    ) -> Result<Self, ShaderError> {
        check_vertex_buffers(&linked, target.vertex_buffers)?;

        if !linked.fragment_outputs().iter().any(|o| o.location == 0) {
            return Err(ShaderError::link(
                "fragment stage does not write a color output at location 0",
            ));
        }

        let LinkedProgram { vertex, fragment } = linked;

        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let vs_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(target.label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(vertex.module)),
        });
        let fs_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(target.label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(fragment.module)),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(target.label),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(target.label),
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(&vertex.entry_point),
                compilation_options: Default::default(),
                buffers: target.vertex_buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: &fs_module,
                entry_point: Some(&fragment.entry_point),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target.color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: target.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(scope.pop()) {
            return Err(ShaderError::link(format!(
                "device rejected program '{}': {err}",
                target.label
            )));
        }

        // Stage modules drop here; the pipeline keeps what it needs.
        Ok(Self {
            label: target.label.to_string(),
            pipeline,
        })
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}

impl Drop for CompiledProgram {
    fn drop(&mut self) {
        log::debug!("releasing program '{}'", self.label);
    }
}

/// Every vertex input must be fed by exactly one attribute whose format
/// matches the declared type.
fn check_vertex_buffers(
    linked: &LinkedProgram,
    buffers: &[wgpu::VertexBufferLayout<'_>],
) -> Result<(), ShaderError> {
    let mut problems = Vec::new();

    for input in linked.vertex_inputs() {
        let mut feeding = buffers
            .iter()
            .flat_map(|b| b.attributes.iter())
            .filter(|a| a.shader_location == input.location);

        match (feeding.next(), feeding.next()) {
            (None, _) => problems.push(format!(
                "vertex input at location {} has no buffer attribute",
                input.location
            )),
            (Some(_), Some(_)) => problems.push(format!(
                "vertex input at location {} is fed by more than one attribute",
                input.location
            )),
            (Some(attr), None) => match vertex_format_type(attr.format) {
                Some(ty) if ty == input.ty => {}
                Some(ty) => problems.push(format!(
                    "vertex input at location {} is {:?} but the buffer provides {:?} ({:?})",
                    input.location, input.ty, ty, attr.format
                )),
                None => problems.push(format!(
                    "vertex format {:?} at location {} is not supported",
                    attr.format, input.location
                )),
            },
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ShaderError::link(problems.join("\n")))
    }
}

/// Shader-side type a vertex format is read as.
fn vertex_format_type(format: wgpu::VertexFormat) -> Option<TypeInner> {
    use wgpu::VertexFormat as F;

    let (scalar, size) = match format {
        F::Float32 => (Scalar::F32, None),
        F::Float32x2 => (Scalar::F32, Some(VectorSize::Bi)),
        F::Float32x3 => (Scalar::F32, Some(VectorSize::Tri)),
        F::Float32x4 => (Scalar::F32, Some(VectorSize::Quad)),
        F::Uint32 => (Scalar::U32, None),
        F::Uint32x2 => (Scalar::U32, Some(VectorSize::Bi)),
        F::Uint32x3 => (Scalar::U32, Some(VectorSize::Tri)),
        F::Uint32x4 => (Scalar::U32, Some(VectorSize::Quad)),
        F::Sint32 => (Scalar::I32, None),
        F::Sint32x2 => (Scalar::I32, Some(VectorSize::Bi)),
        F::Sint32x3 => (Scalar::I32, Some(VectorSize::Tri)),
        F::Sint32x4 => (Scalar::I32, Some(VectorSize::Quad)),
        _ => return None,
    };

    Some(match size {
        None => TypeInner::Scalar(scalar),
        Some(size) => TypeInner::Vector { size, scalar },
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shader::compile::tests::{FRAGMENT, VERTEX};
    use crate::shader::{compile_stage, link, ShaderStage};

    fn linked() -> LinkedProgram {
        link(
            compile_stage(ShaderStage::Vertex, VERTEX).unwrap(),
            compile_stage(ShaderStage::Fragment, FRAGMENT).unwrap(),
        )
        .unwrap()
    }

    const POSITION: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
    const COLOR: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

    fn layout(attributes: &[wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: 12,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }

    /// CPU-only device; validation still runs, nothing is drawn.
    pub(crate) fn noop_device() -> (wgpu::Device, wgpu::Queue) {
        wgpu::Device::noop(&wgpu::DeviceDescriptor::default())
    }

    fn target<'a>(buffers: &'a [wgpu::VertexBufferLayout<'a>]) -> ProgramTarget<'a> {
        ProgramTarget {
            label: "test program",
            vertex_buffers: buffers,
            color_format: wgpu::TextureFormat::Rgba8UnormSrgb,
            topology: wgpu::PrimitiveTopology::TriangleList,
        }
    }

    #[test]
    fn matching_buffers_pass() {
        let buffers = [layout(&POSITION), layout(&COLOR)];
        check_vertex_buffers(&linked(), &buffers).unwrap();
    }

    #[test]
    fn missing_attribute_is_link_error() {
        let buffers = [layout(&POSITION)];
        let err = check_vertex_buffers(&linked(), &buffers).unwrap_err();
        assert!(err.diagnostic_log().contains("location 1"));
    }

    #[test]
    fn wrong_component_count_is_link_error() {
        let narrow: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x2];
        let buffers = [layout(&POSITION), layout(&narrow)];
        assert!(matches!(
            check_vertex_buffers(&linked(), &buffers),
            Err(ShaderError::Link { .. })
        ));
    }

    #[test]
    fn float_formats_map_to_vectors() {
        assert_eq!(
            vertex_format_type(wgpu::VertexFormat::Float32x3),
            Some(TypeInner::Vector { size: VectorSize::Tri, scalar: Scalar::F32 })
        );
        assert_eq!(vertex_format_type(wgpu::VertexFormat::Unorm8x4), None);
    }

    #[test]
    fn creates_pipeline_on_device() {
        let (device, _queue) = noop_device();
        let buffers = [layout(&POSITION), layout(&COLOR)];

        let program = CompiledProgram::create(&device, linked(), &target(&buffers)).unwrap();
        assert_eq!(program.label, "test program");
    }

    #[test]
    fn integer_color_output_is_rejected_by_device() {
        // Interface matches, but an ivec4 cannot be written to a float target.
        let fragment = FRAGMENT
            .replace("out vec4 finalColor", "out ivec4 finalColor")
            .replace("vec4(color, 1.0)", "ivec4(1)");
        let linked = link(
            compile_stage(ShaderStage::Vertex, VERTEX).unwrap(),
            compile_stage(ShaderStage::Fragment, &fragment).unwrap(),
        )
        .unwrap();

        let (device, _queue) = noop_device();
        let buffers = [layout(&POSITION), layout(&COLOR)];
        let Err(err) = CompiledProgram::create(&device, linked, &target(&buffers)) else {
            panic!("pipeline with an integer color output was accepted");
        };

        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(err.diagnostic_log().contains("test program"));
    }
}
