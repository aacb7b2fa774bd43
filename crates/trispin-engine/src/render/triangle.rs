use wgpu::util::DeviceExt;

use crate::geometry::{ColorSet, Rgb, Vertex, VertexSet};
use crate::render::{RenderCtx, RenderTarget};
use crate::shader::{CompiledProgram, ProgramTarget, ShaderError, ShaderProgramBuilder};

/// Draws one colored triangle whose positions are re-uploaded each frame.
///
/// Owns the program and both vertex buffers.
pub struct TriangleRenderer {
    program: CompiledProgram,
    position_vbo: wgpu::Buffer,
    color_vbo: wgpu::Buffer,
}

impl TriangleRenderer {
    /// Builds the program from `shaders` and uploads the initial data.
    ///
    /// Shader failures are returned untouched so startup can report them.
    pub fn new(
        ctx: &RenderCtx<'_>,
        shaders: &ShaderProgramBuilder,
        vertices: &VertexSet,
        colors: &ColorSet,
    ) -> Result<Self, ShaderError> {
        let position_vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trispin triangle positions"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let color_vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("trispin triangle colors"),
            contents: bytemuck::cast_slice(colors),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let buffers = [Vertex::layout(), Rgb::layout()];
        let program = shaders.build(
            ctx.device,
            &ProgramTarget {
                label: "trispin triangle program",
                vertex_buffers: &buffers,
                color_format: ctx.surface_format,
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
        )?;

        Ok(Self {
            program,
            position_vbo,
            color_vbo,
        })
    }

    /// Replaces the GPU copy of the positions.
    pub fn upload(&self, ctx: &RenderCtx<'_>, vertices: &VertexSet) {
        ctx.queue
            .write_buffer(&self.position_vbo, 0, bytemuck::cast_slice(vertices));
    }

    /// Draws the triangle over whatever the target already holds.
    pub fn render(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trispin triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(self.program.pipeline());
        rpass.set_vertex_buffer(0, self.position_vbo.slice(..));
        rpass.set_vertex_buffer(1, self.color_vbo.slice(..));
        rpass.draw(0..3, 0..1);
    }
}
