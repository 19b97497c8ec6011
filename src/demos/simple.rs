use super::{Demo, DemoConfig};
use crate::types::{SceneUniform, ShaderKind, Vertex};

const CONFIG: DemoConfig = DemoConfig {
    title: "Triangle Demo",
    window_width: 800,
    window_height: 600,
    shader: ShaderKind::Simple,
    clear_color: [0.2, 0.3, 0.3],
    spin_speed: 0.0,
    base_distance: 3.0,
    orbit_controls: false,
    controls: &["ESC - Exit"],
};

const VERTICES: [Vertex; 3] = [
    Vertex::new([-0.5, -0.5, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0], [1.0, 0.0, 0.0]),
    Vertex::new([0.5, -0.5, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0], [0.0, 1.0, 0.0]),
    Vertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0], [0.0, 0.0, 1.0]),
];

/// The hello-triangle baseline: one static triangle with per-vertex
/// colors, drawn directly in clip space.
pub struct SimpleDemo;

impl SimpleDemo {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for SimpleDemo {
    fn config(&self) -> &DemoConfig {
        &CONFIG
    }

    fn vertices(&self) -> &[Vertex] {
        &VERTICES
    }

    fn scene_uniform(&self, time: f32) -> SceneUniform {
        SceneUniform {
            time,
            ..Default::default()
        }
    }
}
