mod phong;
mod simple;
mod texture;
mod textured;

pub use phong::{OrbitPhongDemo, PhongDemo};
pub use simple::SimpleDemo;
pub use texture::{checkerboard, load_texture};
pub use textured::{OrbitTexturedDemo, TexturedDemo};

use std::path::Path;

use crate::core::{Button, InitError};
use crate::types::{SceneUniform, ShaderKind, TextureData, Vertex};

/// Demo selection for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoKind {
    Simple,
    Phong,
    Textured,
    OrbitPhong,
    OrbitTextured,
}

/// Static per-demo configuration consumed by the scaffold at startup.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: &'static str,
    pub window_width: u32,
    pub window_height: u32,
    pub shader: ShaderKind,
    pub clear_color: [f64; 3],
    /// Spin in rad/s applied to the model from elapsed time.
    pub spin_speed: f32,
    /// Camera distance at zoom 1.
    pub base_distance: f32,
    /// Whether drag/scroll orbit input is wired up.
    pub orbit_controls: bool,
    pub controls: &'static [&'static str],
}

/// A demo: triangle data plus the interaction rules that mutate it.
pub trait Demo {
    fn config(&self) -> &DemoConfig;

    fn vertices(&self) -> &[Vertex];

    /// Take the dirty flag; true means the vertex buffer must be re-uploaded.
    fn take_vertices_dirty(&mut self) -> bool {
        false
    }

    /// Texture bound by `ShaderKind::Textured` pipelines.
    fn texture(&self) -> Option<&TextureData> {
        None
    }

    /// React to a button press edge.
    fn handle_press(&mut self, _button: Button) {}

    /// Scene parameters for this frame.
    fn scene_uniform(&self, time: f32) -> SceneUniform;
}

/// Build the selected demo. Textured demos decode `texture` when given and
/// fall back to the built-in checkerboard otherwise.
pub fn create(kind: DemoKind, texture: Option<&Path>) -> Result<Box<dyn Demo>, InitError> {
    Ok(match kind {
        DemoKind::Simple => Box::new(SimpleDemo::new()),
        DemoKind::Phong => Box::new(PhongDemo::new()),
        DemoKind::Textured => Box::new(TexturedDemo::new(demo_texture(texture)?)),
        DemoKind::OrbitPhong => Box::new(OrbitPhongDemo::new()),
        DemoKind::OrbitTextured => Box::new(OrbitTexturedDemo::new(demo_texture(texture)?)),
    })
}

fn demo_texture(path: Option<&Path>) -> Result<TextureData, InitError> {
    match path {
        Some(path) => load_texture(path),
        None => Ok(checkerboard(256, 32)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_builds_every_demo() {
        for kind in [
            DemoKind::Simple,
            DemoKind::Phong,
            DemoKind::Textured,
            DemoKind::OrbitPhong,
            DemoKind::OrbitTextured,
        ] {
            let demo = create(kind, None).unwrap();
            assert!(!demo.vertices().is_empty());
            assert_eq!(demo.vertices().len() % 3, 0);
        }
    }

    #[test]
    fn textured_demos_carry_a_texture() {
        let demo = create(DemoKind::Textured, None).unwrap();
        assert!(demo.texture().is_some());

        let demo = create(DemoKind::Phong, None).unwrap();
        assert!(demo.texture().is_none());
    }

    #[test]
    fn missing_texture_file_fails_startup() {
        let result = create(
            DemoKind::Textured,
            Some(Path::new("/definitely/not/here.png")),
        );
        assert!(matches!(result, Err(InitError::Texture { .. })));
    }
}
