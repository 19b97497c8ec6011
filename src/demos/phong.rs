use std::collections::hash_map::RandomState;
use std::f32::consts::TAU;
use std::hash::{BuildHasher, Hash, Hasher};

use super::{Demo, DemoConfig};
use crate::core::Button;
use crate::types::{SceneUniform, ShaderKind, Vertex};

pub const LIGHT_STEP: f32 = 0.1;
pub const LIGHT_MIN: f32 = 0.1;
pub const LIGHT_MAX: f32 = 2.0;

const LIGHT_POS: [f32; 3] = [1.0, 1.0, 2.0];
const VIEW_POS: [f32; 3] = [0.0, 0.0, 3.0];

/// Phong material parameters fed into the scene uniform.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub color: [f32; 3],
    pub ambient: f32,
    pub specular: f32,
    pub shininess: f32,
}

const MATERIALS: [Material; 3] = [
    Material {
        color: [0.8, 0.2, 0.2],
        ambient: 0.3,
        specular: 0.8,
        shininess: 32.0,
    },
    Material {
        color: [0.2, 0.8, 0.2],
        ambient: 0.2,
        specular: 0.9,
        shininess: 64.0,
    },
    Material {
        color: [0.2, 0.2, 0.8],
        ambient: 0.4,
        specular: 0.6,
        shininess: 16.0,
    },
];

/// Front-facing pseudo-random normal from the std hasher, the same
/// trick the scaffold uses elsewhere instead of pulling in a rand crate.
fn random_forward_normal(hasher_builder: &RandomState, seed: usize) -> [f32; 3] {
    let mut hasher = hasher_builder.build_hasher();
    seed.hash(&mut hasher);
    let hash = hasher.finish();

    let nx = ((hash % 1000) as f32 / 1000.0) * 2.0 - 1.0;
    let ny = (((hash >> 10) % 1000) as f32 / 1000.0) * 2.0 - 1.0;
    // Z stays positive so the normal keeps facing the viewer.
    let nz = ((hash >> 20) % 1000) as f32 / 1000.0;

    let length = (nx * nx + ny * ny + nz * nz).sqrt().max(1e-4);
    [nx / length, ny / length, nz / length]
}

// === Single-triangle Phong demo ===

const PHONG_CONFIG: DemoConfig = DemoConfig {
    title: "Phong Triangle",
    window_width: 800,
    window_height: 600,
    shader: ShaderKind::Phong,
    clear_color: [0.2, 0.3, 0.5],
    spin_speed: 0.5,
    base_distance: 3.0,
    orbit_controls: false,
    controls: &["R - Randomize normals", "ESC - Exit"],
};

fn phong_vertices() -> Vec<Vertex> {
    vec![
        Vertex::new([-0.5, -0.5, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0], [1.0; 3]),
        Vertex::new([0.5, -0.5, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0], [1.0; 3]),
        Vertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0], [1.0; 3]),
    ]
}

/// One lit triangle spinning in place. `R` rerolls the vertex normals,
/// which is the whole lesson: lighting follows the normals, not the shape.
pub struct PhongDemo {
    vertices: Vec<Vertex>,
    dirty: bool,
}

impl PhongDemo {
    pub fn new() -> Self {
        Self {
            vertices: phong_vertices(),
            dirty: false,
        }
    }

    fn randomize_normals(&mut self) {
        let hasher_builder = RandomState::new();
        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            vertex.normal = random_forward_normal(&hasher_builder, i);
            println!(
                "Vertex {}: Normal = ({:.3}, {:.3}, {:.3})",
                i, vertex.normal[0], vertex.normal[1], vertex.normal[2]
            );
        }
        self.dirty = true;
    }
}

impl Default for PhongDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for PhongDemo {
    fn config(&self) -> &DemoConfig {
        &PHONG_CONFIG
    }

    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn take_vertices_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn handle_press(&mut self, button: Button) {
        if button == Button::KeyR {
            self.randomize_normals();
        }
    }

    fn scene_uniform(&self, time: f32) -> SceneUniform {
        SceneUniform {
            light_pos: LIGHT_POS,
            time,
            view_pos: VIEW_POS,
            light_intensity: 1.0,
            object_color: [0.8, 0.2, 0.2],
            ambient_strength: 0.3,
            light_color: [1.0, 1.0, 1.0],
            // Diffuse-only shading for the basic demo.
            specular_strength: 0.0,
            ..Default::default()
        }
    }
}

// === Three-triangle orbit demo ===

const ORBIT_CONFIG: DemoConfig = DemoConfig {
    title: "Advanced Phong Demo",
    window_width: 1000,
    window_height: 800,
    shader: ShaderKind::Phong,
    clear_color: [0.1, 0.1, 0.3],
    spin_speed: 0.3,
    base_distance: 5.0,
    orbit_controls: true,
    controls: &[
        "R - Randomize normals",
        "M - Switch material",
        "UP/DOWN - Adjust light intensity",
        "Mouse drag - Rotate camera",
        "Mouse scroll - Zoom",
        "ESC - Exit",
    ],
};

/// Three triangles side by side with deliberately different normal
/// configurations: random, smooth, and a cone-like spread.
pub struct OrbitPhongDemo {
    vertices: Vec<Vertex>,
    dirty: bool,
    current_material: usize,
    light_intensity: f32,
}

impl OrbitPhongDemo {
    pub fn new() -> Self {
        let mut demo = Self {
            vertices: Vec::new(),
            dirty: false,
            current_material: 0,
            light_intensity: 1.0,
        };
        demo.generate_triangles();
        demo.dirty = false;
        demo
    }

    fn generate_triangles(&mut self) {
        let white = [1.0; 3];

        // Left triangle: random normals.
        let hasher_builder = RandomState::new();
        let mut left = [
            Vertex::new([-1.0, -0.5, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0], white),
            Vertex::new([0.0, -0.5, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0], white),
            Vertex::new([-0.5, 0.5, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0], white),
        ];
        for (i, vertex) in left.iter_mut().enumerate() {
            vertex.normal = random_forward_normal(&hasher_builder, i);
        }

        // Middle triangle: smooth forward normals.
        let middle = [
            Vertex::new([0.0, -0.5, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0], white),
            Vertex::new([1.0, -0.5, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0], white),
            Vertex::new([0.5, 0.5, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0], white),
        ];

        // Top triangle: normals spread on a forward-leaning cone.
        let mut top = [
            Vertex::new([-0.5, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0], white),
            Vertex::new([0.5, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0], white),
            Vertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0], white),
        ];
        for (i, vertex) in top.iter_mut().enumerate() {
            let angle = i as f32 * TAU / 3.0;
            let nx = angle.cos() * 0.5;
            let ny = angle.sin() * 0.5;
            let nz = 0.8f32;
            let length = (nx * nx + ny * ny + nz * nz).sqrt();
            vertex.normal = [nx / length, ny / length, nz / length];
        }

        self.vertices.clear();
        self.vertices.extend(left);
        self.vertices.extend(middle);
        self.vertices.extend(top);
        self.dirty = true;
    }
}

impl Default for OrbitPhongDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for OrbitPhongDemo {
    fn config(&self) -> &DemoConfig {
        &ORBIT_CONFIG
    }

    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    fn take_vertices_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn handle_press(&mut self, button: Button) {
        match button {
            Button::KeyR => {
                self.generate_triangles();
                println!("Generated new random normals for all triangles");
            }
            Button::KeyM => {
                self.current_material = (self.current_material + 1) % MATERIALS.len();
                println!("Switched to material {}", self.current_material + 1);
            }
            Button::ArrowUp => {
                self.light_intensity = (self.light_intensity + LIGHT_STEP).min(LIGHT_MAX);
                println!("Light intensity: {:.1}", self.light_intensity);
            }
            Button::ArrowDown => {
                self.light_intensity = (self.light_intensity - LIGHT_STEP).max(LIGHT_MIN);
                println!("Light intensity: {:.1}", self.light_intensity);
            }
            _ => {}
        }
    }

    fn scene_uniform(&self, time: f32) -> SceneUniform {
        let material = MATERIALS[self.current_material];
        SceneUniform {
            light_pos: LIGHT_POS,
            time,
            view_pos: VIEW_POS,
            light_intensity: self.light_intensity,
            object_color: material.color,
            ambient_strength: material.ambient,
            light_color: [1.0, 1.0, 1.0],
            specular_strength: material.specular,
            shininess: material.shininess,
            ..Default::default()
        }
    }
}
