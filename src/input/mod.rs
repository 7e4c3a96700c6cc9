pub mod bindings;

pub use bindings::{movement_intent, tile_action_for_key, voxel_actions, MoveIntent, TileAction, VoxelAction};

use std::collections::HashSet;
use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;

/// Raw keyboard and mouse state for one window
///
/// Held keys persist until released. Presses, wheel and mouse motion
/// accumulate until `end_frame` is called.
#[derive(Debug, Default)]
pub struct InputState {
    keys_pressed: HashSet<KeyCode>,
    keys_just_pressed: HashSet<KeyCode>,
    mouse_buttons_pressed: HashSet<MouseButton>,
    mouse_buttons_just_pressed: HashSet<MouseButton>,
    mouse_delta: (f32, f32),
    wheel_delta: f32,
    cursor_locked: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.keys_pressed.insert(key) {
                    self.keys_just_pressed.insert(key);
                }
            }
            ElementState::Released => {
                self.keys_pressed.remove(&key);
            }
        }
    }

    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.mouse_buttons_pressed.insert(button) {
                    self.mouse_buttons_just_pressed.insert(button);
                }
            }
            ElementState::Released => {
                self.mouse_buttons_pressed.remove(&button);
            }
        }
    }

    pub fn process_mouse_motion(&mut self, delta: (f64, f64)) {
        self.mouse_delta.0 += delta.0 as f32;
        self.mouse_delta.1 += delta.1 as f32;
    }

    /// Accumulate vertical wheel movement; positive scrolls down
    pub fn process_mouse_wheel(&mut self, delta_y: f32) {
        self.wheel_delta += delta_y;
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Whether `key` went down since the last `end_frame`
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed.contains(&button)
    }

    pub fn is_mouse_button_just_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_just_pressed.contains(&button)
    }

    pub fn get_mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    pub fn get_wheel_delta(&self) -> f32 {
        self.wheel_delta
    }

    /// Drop per-frame accumulators; held keys stay down
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.mouse_buttons_just_pressed.clear();
        self.mouse_delta = (0.0, 0.0);
        self.wheel_delta = 0.0;
    }

    pub fn set_cursor_locked(&mut self, locked: bool) {
        self.cursor_locked = locked;
        if !locked {
            // Held keys would otherwise stick after focus loss
            self.keys_pressed.clear();
            self.mouse_buttons_pressed.clear();
            self.mouse_delta = (0.0, 0.0);
        }
    }

    pub fn is_cursor_locked(&self) -> bool {
        self.cursor_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_pressed_fires_once_per_press() {
        let mut input = InputState::new();
        input.process_key(KeyCode::KeyE, ElementState::Pressed);
        assert!(input.is_key_just_pressed(KeyCode::KeyE));

        input.end_frame();
        // Key repeat while held does not re-trigger
        input.process_key(KeyCode::KeyE, ElementState::Pressed);
        assert!(!input.is_key_just_pressed(KeyCode::KeyE));
        assert!(input.is_key_pressed(KeyCode::KeyE));

        input.process_key(KeyCode::KeyE, ElementState::Released);
        assert!(!input.is_key_pressed(KeyCode::KeyE));
    }

    #[test]
    fn test_end_frame_clears_accumulators() {
        let mut input = InputState::new();
        input.process_mouse_motion((3.0, -2.0));
        input.process_mouse_motion((1.0, 1.0));
        input.process_mouse_wheel(120.0);
        assert_eq!(input.get_mouse_delta(), (4.0, -1.0));
        assert_eq!(input.get_wheel_delta(), 120.0);

        input.end_frame();
        assert_eq!(input.get_mouse_delta(), (0.0, 0.0));
        assert_eq!(input.get_wheel_delta(), 0.0);
    }

    #[test]
    fn test_unlocking_releases_held_input() {
        let mut input = InputState::new();
        input.set_cursor_locked(true);
        input.process_key(KeyCode::KeyW, ElementState::Pressed);
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);

        input.set_cursor_locked(false);
        assert!(!input.is_cursor_locked());
        assert!(!input.is_key_pressed(KeyCode::KeyW));
        assert!(!input.is_mouse_button_pressed(MouseButton::Left));
    }
}
