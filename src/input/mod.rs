use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, KeyEvent, WindowEvent};
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;
use winit::keyboard::PhysicalKey;

/// Raw pointer and keyboard state for a single tick.
///
/// `*_pressed` and `*_released` are edges: they hold only for the tick in
/// which the transition happened and are wiped by [`InputState::end_frame`].
/// `*_held` is level-triggered.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    pub keys_released: HashSet<KeyCode>,

    pub pointer: Vec2,
    pub mouse_held: HashSet<MouseButton>,
    pub mouse_pressed: HashSet<MouseButton>,
    pub mouse_released: HashSet<MouseButton>,

    /// False while the pointer is outside the window/canvas.
    pub pointer_inside: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop edge state once the tick has consumed it.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.keys_pressed.contains(&key) }
    pub fn is_key_released(&self, key: KeyCode) -> bool { self.keys_released.contains(&key) }

    pub fn is_mouse_held(&self, button: MouseButton) -> bool { self.mouse_held.contains(&button) }
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool { self.mouse_pressed.contains(&button) }
    pub fn is_mouse_released(&self, button: MouseButton) -> bool { self.mouse_released.contains(&button) }

    pub fn pointer(&self) -> Vec2 { self.pointer }

    // ── Event feeding ───────────────────────────────────────────────────────

    pub fn move_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
        self.pointer_inside = true;
    }

    /// Record a button going down. Repeats while already held do not
    /// produce a second press edge.
    pub fn press_mouse(&mut self, button: MouseButton) {
        if self.mouse_held.insert(button) {
            self.mouse_pressed.insert(button);
        }
    }

    pub fn release_mouse(&mut self, button: MouseButton) {
        if self.mouse_held.remove(&button) {
            self.mouse_released.insert(button);
        }
    }

    pub fn press_key(&mut self, key: KeyCode) {
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release_key(&mut self, key: KeyCode) {
        if self.keys_held.remove(&key) {
            self.keys_released.insert(key);
        }
    }

    /// Fold a winit window event into this state. Returns `true` if the
    /// event was an input event this state tracks.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.move_pointer(Vec2::new(position.x as f32, position.y as f32));
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer_inside = false;
                true
            }
            WindowEvent::CursorEntered { .. } => {
                self.pointer_inside = true;
                true
            }
            WindowEvent::MouseInput { button, state, .. } => {
                match state {
                    ElementState::Pressed => self.press_mouse(*button),
                    ElementState::Released => self.release_mouse(*button),
                }
                true
            }
            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key: PhysicalKey::Code(code), state, .. },
                ..
            } => {
                match state {
                    ElementState::Pressed => self.press_key(*code),
                    ElementState::Released => self.release_key(*code),
                }
                true
            }
            _ => false,
        }
    }
}
