use anyhow::{Context, Result};

use trispin_engine::core::{App, AppControl, FrameCtx, InitCtx};
use trispin_engine::geometry::{FrameUpdater, VertexSet, INITIAL_COLORS, INITIAL_TRIANGLE};
use trispin_engine::input::KeyEvent;
use trispin_engine::render::TriangleRenderer;
use trispin_engine::shader::ShaderProgramBuilder;
use trispin_engine::window::Runtime;

use crate::config::LabConfig;
use crate::controls::{Controls, KeyAction};

/// The rotating-triangle lab.
pub struct LabApp {
    shaders: ShaderProgramBuilder,
    clear_color: wgpu::Color,

    vertices: VertexSet,
    updater: FrameUpdater,
    controls: Controls,

    /// Created in `init`, once a device exists.
    renderer: Option<TriangleRenderer>,
}

impl LabApp {
    pub fn new(config: &LabConfig) -> Self {
        Self {
            shaders: ShaderProgramBuilder::new(&config.vertex_shader, &config.fragment_shader),
            clear_color: config.clear_color,
            vertices: INITIAL_TRIANGLE,
            updater: FrameUpdater::new(config.angle_step),
            controls: Controls::default(),
            renderer: None,
        }
    }

    /// Opens the window and runs until Escape or close.
    pub fn run(config: LabConfig) -> Result<()> {
        let app = Self::new(&config);
        Runtime::run(config.runtime, config.gpu, app)
    }

    pub fn vertices(&self) -> &VertexSet {
        &self.vertices
    }
}

impl App for LabApp {
    fn init(&mut self, ctx: &InitCtx<'_, '_>) -> Result<()> {
        let renderer = TriangleRenderer::new(
            &ctx.render_ctx(),
            &self.shaders,
            &self.vertices,
            &INITIAL_COLORS,
        )
        .context("failed to load shaders")?;

        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_key(&mut self, event: KeyEvent) -> AppControl {
        match self.controls.handle(event) {
            KeyAction::Cancelled => AppControl::Exit,
            KeyAction::Announced(_) | KeyAction::Ignored => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !self.controls.running() {
            return AppControl::Exit;
        }
        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };

        self.updater.advance(&mut self.vertices);
        log::trace!("frame {}: v0 = {:?}", ctx.frame_index, self.vertices[0]);

        let vertices = &self.vertices;
        ctx.render(self.clear_color, |rctx, target| {
            renderer.upload(rctx, vertices);
            renderer.render(target);
        })
    }
}
