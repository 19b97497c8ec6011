use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use triangle_demos::camera::OrbitCamera;
use triangle_demos::cli::Cli;
use triangle_demos::core::{Button, Clock, Controller, Renderer, WinitController};
use triangle_demos::demos::{self, Demo};
use triangle_demos::transform::{self, Projection};

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

/// Buttons that are forwarded to the demo as press edges.
const DEMO_BUTTONS: [Button; 5] = [
    Button::KeyR,
    Button::KeyM,
    Button::KeyE,
    Button::ArrowUp,
    Button::ArrowDown,
];

struct App {
    demo: Box<dyn Demo>,
    camera: OrbitCamera,
    projection: Projection,
    controller: WinitController,
    clock: Clock,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    frame_count: u32,
    fps_update_timer: f32,
}

impl App {
    fn new(demo: Box<dyn Demo>, fov: f32) -> Self {
        let config = demo.config();
        let camera = OrbitCamera::new(config.spin_speed, config.base_distance);
        let projection = Projection::new(
            fov,
            config.window_width as f32 / config.window_height as f32,
            NEAR_PLANE,
            FAR_PLANE,
        );

        Self {
            demo,
            camera,
            projection,
            controller: WinitController::new(),
            clock: Clock::new(),
            window: None,
            renderer: None,
            frame_count: 0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_update_timer;
            println!("FPS: {:.1}", fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        self.update_fps(delta);

        for button in DEMO_BUTTONS {
            if self.controller.was_pressed(button) {
                self.demo.handle_press(button);
            }
        }

        if self.demo.config().orbit_controls {
            let (dx, dy) = self.controller.drag_delta();
            if dx != 0.0 || dy != 0.0 {
                self.camera.drag(dx, dy);
            }
            let scroll = self.controller.scroll_delta();
            if scroll != 0.0 {
                self.camera.scroll(scroll);
            }
        }
        self.controller.reset_frame();

        let time = self.clock.elapsed();
        self.camera.advance(time);

        let mvp = transform::mvp_matrix(&self.camera, &self.projection);
        let scene = self.demo.scene_uniform(time);
        let vertices_dirty = self.demo.take_vertices_dirty();

        if let Some(renderer) = &mut self.renderer {
            let vertices = if vertices_dirty {
                Some(self.demo.vertices())
            } else {
                None
            };
            if let Err(e) = renderer.render(mvp, scene, vertices) {
                eprintln!("Render error: {}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let config = self.demo.config().clone();
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(config.title)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        config.window_width,
                        config.window_height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match Renderer::new(
                window.clone(),
                config.shader,
                self.demo.vertices(),
                self.demo.texture(),
                config.clear_color,
            ) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            // The physical size can differ from the logical request on
            // HiDPI displays; the projection follows the real framebuffer.
            let size = window.inner_size();
            self.projection.resize(size.width, size.height);

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.projection.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => self.controller.process_event(&other),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let demo = demos::create(cli.demo, cli.texture.as_deref())
        .context("demo initialization failed")?;

    println!("{}", demo.config().title);
    println!("Controls:");
    for line in demo.config().controls {
        println!("  {}", line);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(demo, cli.fov);
    event_loop.run_app(&mut app)?;

    Ok(())
}
