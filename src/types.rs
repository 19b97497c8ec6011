use glam::Mat4;

/// Which shader pair a demo draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Simple,
    Phong,
    Textured,
}

/// RGBA8 texture pixels ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Vertex data shared by every demo: position, normal, texture coordinates,
/// and a per-vertex color. Each shader reads the attributes it needs.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x2,
        3 => Float32x3,
    ];

    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2], color: [f32; 3]) -> Self {
        Self {
            position,
            normal,
            uv,
            color,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// The MVP matrix uniform, written once per draw call.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformUniform {
    pub mvp: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn new(mvp: Mat4) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
        }
    }
}

/// Scene parameters uniform: light, material, and effect state.
/// Fields are grouped in vec4-sized blocks for WGSL alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub light_pos: [f32; 3],
    pub time: f32,
    pub view_pos: [f32; 3],
    pub light_intensity: f32,
    pub object_color: [f32; 3],
    pub ambient_strength: f32,
    pub light_color: [f32; 3],
    pub specular_strength: f32,
    pub shininess: f32,
    pub brightness: f32,
    pub effect: u32,
    pub _pad: f32,
}

impl Default for SceneUniform {
    fn default() -> Self {
        Self {
            light_pos: [1.0, 1.0, 2.0],
            time: 0.0,
            view_pos: [0.0, 0.0, 3.0],
            light_intensity: 1.0,
            object_color: [1.0, 1.0, 1.0],
            ambient_strength: 0.3,
            light_color: [1.0, 1.0, 1.0],
            specular_strength: 0.0,
            shininess: 32.0,
            brightness: 1.0,
            effect: 0,
            _pad: 0.0,
        }
    }
}
