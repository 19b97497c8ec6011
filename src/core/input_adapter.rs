use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// One pixel-scroll notch; winit reports trackpad scrolling in pixels
/// while mouse wheels report whole lines.
const PIXELS_PER_SCROLL_LINE: f32 = 50.0;

/// Adapter that bridges Winit events to the Controller trait
///
/// Pointer-drag deltas accumulate only while the primary button is held,
/// so a frame consuming them sees exactly the gated orbit input.
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently held buttons
    held: HashSet<Button>,
    /// Buttons pressed since the last frame reset (includes key repeats)
    pressed: HashSet<Button>,
    /// Last observed cursor position (window-relative)
    cursor_position: Option<(f32, f32)>,
    /// Drag delta accumulated while MouseLeft is held
    drag_delta: (f32, f32),
    /// Signed scroll delta in wheel lines
    scroll_delta: f32,
}

impl WinitController {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            pressed: HashSet::new(),
            cursor_position: None,
            drag_delta: (0.0, 0.0),
            scroll_delta: 0.0,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        match event.state {
                            ElementState::Pressed => {
                                self.held.insert(button);
                                self.pressed.insert(button);
                            }
                            ElementState::Released => {
                                self.held.remove(&button);
                            }
                        }
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    match state {
                        ElementState::Pressed => {
                            self.held.insert(btn);
                            self.pressed.insert(btn);
                        }
                        ElementState::Released => {
                            self.held.remove(&btn);
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = (position.x as f32, position.y as f32);
                if let Some(old_pos) = self.cursor_position {
                    if self.is_down(Button::MouseLeft) {
                        self.drag_delta.0 += new_pos.0 - old_pos.0;
                        self.drag_delta.1 += new_pos.1 - old_pos.1;
                    }
                }
                self.cursor_position = Some(new_pos);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_SCROLL_LINE,
                };
            }
            _ => {}
        }
    }

    /// Reset per-frame state (drag/scroll deltas and press edges)
    /// Call this at the end of each frame after processing input
    pub fn reset_frame(&mut self) {
        self.drag_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
        self.pressed.clear();
    }

    /// Accumulated drag delta since the last reset (primary button held)
    pub fn drag_delta(&self) -> (f32, f32) {
        self.drag_delta
    }

    /// Accumulated scroll delta since the last reset
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyR => Some(Button::KeyR),
            KeyCode::KeyM => Some(Button::KeyM),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn was_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}
