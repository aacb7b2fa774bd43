use std::path::{Path, PathBuf};

use trispin_engine::device::GpuInit;
use trispin_engine::logging::LoggingConfig;
use trispin_engine::window::RuntimeConfig;

/// Radians the triangle turns (clockwise) every frame.
pub const DEFAULT_ANGLE_STEP: f32 = 0.0005;

/// Everything the lab needs to start. No file or CLI input; adjust with the
/// setters before calling `LabApp::run`.
#[derive(Debug, Clone)]
pub struct LabConfig {
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub logging: LoggingConfig,
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    pub angle_step: f32,
    pub clear_color: wgpu::Color,
}

impl Default for LabConfig {
    fn default() -> Self {
        let shaders = Path::new(env!("CARGO_MANIFEST_DIR")).join("shaders");
        Self {
            runtime: RuntimeConfig::default().title("Lab 0").size(1024.0, 768.0),
            gpu: GpuInit::default(),
            logging: LoggingConfig::default(),
            vertex_shader: shaders.join("triangle.vert"),
            fragment_shader: shaders.join("triangle.frag"),
            angle_step: DEFAULT_ANGLE_STEP,
            clear_color: wgpu::Color {
                r: 0.2,
                g: 0.2,
                b: 0.25,
                a: 0.0,
            },
        }
    }
}

impl LabConfig {
    pub fn shaders(mut self, vertex: impl Into<PathBuf>, fragment: impl Into<PathBuf>) -> Self {
        self.vertex_shader = vertex.into();
        self.fragment_shader = fragment.into();
        self
    }

    pub fn angle_step(mut self, radians: f32) -> Self {
        self.angle_step = radians;
        self
    }

    pub fn clear_color(mut self, color: wgpu::Color) -> Self {
        self.clear_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_lab() {
        let config = LabConfig::default();
        assert_eq!(config.runtime.title, "Lab 0");
        assert_eq!(config.runtime.initial_size.width, 1024.0);
        assert_eq!(config.runtime.initial_size.height, 768.0);
        assert_eq!(config.angle_step, 0.0005);
        assert_eq!(config.clear_color.b, 0.25);
    }

    #[test]
    fn default_shader_files_exist() {
        let config = LabConfig::default();
        assert!(config.vertex_shader.is_file());
        assert!(config.fragment_shader.is_file());
    }

    #[test]
    fn setters_override() {
        let config = LabConfig::default()
            .shaders("a.vert", "b.frag")
            .angle_step(0.01)
            .clear_color(wgpu::Color::BLACK);
        assert_eq!(config.vertex_shader, PathBuf::from("a.vert"));
        assert_eq!(config.fragment_shader, PathBuf::from("b.frag"));
        assert_eq!(config.angle_step, 0.01);
        assert_eq!(config.clear_color, wgpu::Color::BLACK);
    }
}
