//! Key and button bindings for both sandboxes

use super::{InputState, KeyCode};
use crate::constants::inventory::HOTBAR_SIZE;
use winit::event::MouseButton;

/// Continuous movement requested this frame, in camera space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    /// +1 forward, -1 back
    pub forward: f32,
    /// +1 right, -1 left
    pub right: f32,
    pub jump: bool,
    pub sneak: bool,
}

/// Discrete voxel sandbox actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoxelAction {
    /// Click while the cursor is free; the host should grab the pointer
    RequestCapture,
    Break,
    Place,
    SelectSlot(usize),
    CycleSlot { forward: bool },
}

/// Discrete tile sandbox actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAction {
    Move { dx: i32, dy: i32 },
    ToggleInventory,
    OpenMenu,
}

fn axis(input: &InputState, positive: KeyCode, negative: KeyCode) -> f32 {
    let mut value = 0.0;
    if input.is_key_pressed(positive) {
        value += 1.0;
    }
    if input.is_key_pressed(negative) {
        value -= 1.0;
    }
    value
}

/// Pure function - WASD, Space and ShiftLeft as a movement request
///
/// Nothing moves while the cursor is free.
pub fn movement_intent(input: &InputState) -> MoveIntent {
    if !input.is_cursor_locked() {
        return MoveIntent::default();
    }
    MoveIntent {
        forward: axis(input, KeyCode::KeyW, KeyCode::KeyS),
        right: axis(input, KeyCode::KeyD, KeyCode::KeyA),
        jump: input.is_key_pressed(KeyCode::Space),
        sneak: input.is_key_pressed(KeyCode::ShiftLeft),
    }
}

const SLOT_KEYS: [KeyCode; HOTBAR_SIZE] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Pure function - discrete voxel actions triggered since the last frame
pub fn voxel_actions(input: &InputState) -> Vec<VoxelAction> {
    let mut actions = Vec::new();

    if !input.is_cursor_locked() {
        if input.is_mouse_button_just_pressed(MouseButton::Left) {
            actions.push(VoxelAction::RequestCapture);
        }
        return actions;
    }

    if input.is_mouse_button_just_pressed(MouseButton::Left) {
        actions.push(VoxelAction::Break);
    }
    if input.is_mouse_button_just_pressed(MouseButton::Right) {
        actions.push(VoxelAction::Place);
    }

    for (slot, key) in SLOT_KEYS.iter().enumerate() {
        if input.is_key_just_pressed(*key) {
            actions.push(VoxelAction::SelectSlot(slot));
        }
    }

    let wheel = input.get_wheel_delta();
    if wheel != 0.0 {
        actions.push(VoxelAction::CycleSlot { forward: wheel > 0.0 });
    }

    actions
}

/// Pure function - tile sandbox binding for a single key press
///
/// Screen rows grow downward, so "up" is a negative dy.
pub fn tile_action_for_key(key: KeyCode) -> Option<TileAction> {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(TileAction::Move { dx: 0, dy: -1 }),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(TileAction::Move { dx: 0, dy: 1 }),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(TileAction::Move { dx: -1, dy: 0 }),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(TileAction::Move { dx: 1, dy: 0 }),
        KeyCode::KeyE => Some(TileAction::ToggleInventory),
        KeyCode::Escape => Some(TileAction::OpenMenu),
        _ => None,
    }
}
