use super::{Demo, DemoConfig};
use crate::core::Button;
use crate::types::{SceneUniform, ShaderKind, TextureData, Vertex};

pub const BRIGHTNESS_STEP: f32 = 0.1;
pub const BRIGHTNESS_MIN: f32 = 0.1;
pub const BRIGHTNESS_MAX: f32 = 2.0;

const EFFECT_NAMES: [&str; 4] = ["Normal", "Wave", "Pulse", "Rainbow"];

// === Single textured triangle ===

const TEXTURED_CONFIG: DemoConfig = DemoConfig {
    title: "Textured Triangle",
    window_width: 800,
    window_height: 600,
    shader: ShaderKind::Textured,
    clear_color: [0.2, 0.3, 0.5],
    spin_speed: 0.5,
    base_distance: 3.0,
    orbit_controls: false,
    controls: &["ESC - Exit"],
};

const TEXTURED_VERTICES: [Vertex; 3] = [
    Vertex::new([-0.5, -0.5, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0], [1.0; 3]),
    Vertex::new([0.5, -0.5, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0], [1.0; 3]),
    Vertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0], [1.0; 3]),
];

/// One texture-mapped triangle with a gentle time-driven brightness pulse.
pub struct TexturedDemo {
    texture: TextureData,
}

impl TexturedDemo {
    pub fn new(texture: TextureData) -> Self {
        Self { texture }
    }
}

impl Demo for TexturedDemo {
    fn config(&self) -> &DemoConfig {
        &TEXTURED_CONFIG
    }

    fn vertices(&self) -> &[Vertex] {
        &TEXTURED_VERTICES
    }

    fn texture(&self) -> Option<&TextureData> {
        Some(&self.texture)
    }

    fn scene_uniform(&self, time: f32) -> SceneUniform {
        SceneUniform {
            time,
            brightness: (time * 2.0).sin() * 0.1 + 0.9,
            ..Default::default()
        }
    }
}

// === Three textured triangles with shader effects ===

const ORBIT_CONFIG: DemoConfig = DemoConfig {
    title: "Advanced Textured Demo",
    window_width: 1000,
    window_height: 800,
    shader: ShaderKind::Textured,
    clear_color: [0.1, 0.1, 0.2],
    spin_speed: 0.3,
    base_distance: 5.0,
    orbit_controls: true,
    controls: &[
        "E - Cycle effect",
        "UP/DOWN - Adjust brightness",
        "Mouse drag - Rotate camera",
        "Mouse scroll - Zoom",
        "ESC - Exit",
    ],
};

const ORBIT_VERTICES: [Vertex; 9] = [
    // Left: plain mapping.
    Vertex::new([-1.0, -0.5, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0], [1.0; 3]),
    Vertex::new([0.0, -0.5, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0], [1.0; 3]),
    Vertex::new([-0.5, 0.5, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0], [1.0; 3]),
    // Middle: mirrored horizontally.
    Vertex::new([0.0, -0.5, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0], [1.0; 3]),
    Vertex::new([1.0, -0.5, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0], [1.0; 3]),
    Vertex::new([0.5, 0.5, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0], [1.0; 3]),
    // Top: flipped vertically.
    Vertex::new([-0.5, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0], [1.0; 3]),
    Vertex::new([0.5, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 1.0], [1.0; 3]),
    Vertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.5, 0.0], [1.0; 3]),
];

/// Three differently-mapped textured triangles with cyclable shader
/// effects and adjustable brightness.
pub struct OrbitTexturedDemo {
    texture: TextureData,
    effect: u32,
    brightness: f32,
}

impl OrbitTexturedDemo {
    pub fn new(texture: TextureData) -> Self {
        Self {
            texture,
            effect: 0,
            brightness: 1.0,
        }
    }
}

impl Demo for OrbitTexturedDemo {
    fn config(&self) -> &DemoConfig {
        &ORBIT_CONFIG
    }

    fn vertices(&self) -> &[Vertex] {
        &ORBIT_VERTICES
    }

    fn texture(&self) -> Option<&TextureData> {
        Some(&self.texture)
    }

    fn handle_press(&mut self, button: Button) {
        match button {
            Button::KeyE => {
                self.effect = (self.effect + 1) % EFFECT_NAMES.len() as u32;
                println!("Effect: {}", EFFECT_NAMES[self.effect as usize]);
            }
            Button::ArrowUp => {
                self.brightness = (self.brightness + BRIGHTNESS_STEP).min(BRIGHTNESS_MAX);
                println!("Brightness: {:.1}", self.brightness);
            }
            Button::ArrowDown => {
                self.brightness = (self.brightness - BRIGHTNESS_STEP).max(BRIGHTNESS_MIN);
                println!("Brightness: {:.1}", self.brightness);
            }
            _ => {}
        }
    }

    fn scene_uniform(&self, time: f32) -> SceneUniform {
        SceneUniform {
            time,
            brightness: self.brightness,
            effect: self.effect,
            ..Default::default()
        }
    }
}
