use bytemuck::{Pod, Zeroable};

/// Vertex position in clip space.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance from the origin.
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub(crate) const ATTRS: [wgpu::VertexAttribute; 1] =
        wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Straight (non-premultiplied) RGB color, one per vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub(crate) const ATTRS: [wgpu::VertexAttribute; 1] =
        wgpu::vertex_attr_array![1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Rgb>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// The three triangle corners, mutated in place every frame.
pub type VertexSet = [Vertex; 3];

/// One color per corner; never changes after upload.
pub type ColorSet = [Rgb; 3];

pub const INITIAL_TRIANGLE: VertexSet = [
    Vertex::new(-0.5, -0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
    Vertex::new(0.0, 0.5, 0.0),
];

/// Red, green, blue.
pub const INITIAL_COLORS: ColorSet = [
    Rgb::new(1.0, 0.0, 0.0),
    Rgb::new(0.0, 1.0, 0.0),
    Rgb::new(0.0, 0.0, 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tightly_packed_for_upload() {
        assert_eq!(std::mem::size_of::<VertexSet>(), 9 * 4);
        assert_eq!(std::mem::size_of::<ColorSet>(), 9 * 4);

        let floats: &[f32] = bytemuck::cast_slice(&INITIAL_TRIANGLE);
        assert_eq!(floats, &[-0.5, -0.5, 0.0, 0.5, -0.5, 0.0, 0.0, 0.5, 0.0]);
    }

    #[test]
    fn layouts_use_distinct_locations() {
        assert_eq!(Vertex::layout().attributes[0].shader_location, 0);
        assert_eq!(Rgb::layout().attributes[0].shader_location, 1);
        assert_eq!(Vertex::layout().array_stride, 12);
    }
}
