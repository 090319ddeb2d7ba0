//! Input state management

use glam::Vec2;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Mouse button index that places particles and emitters
pub const PRIMARY_BUTTON: u32 = 0;

/// The abstract input signals seen by one simulation tick.
///
/// `click`, `toggle_mode` and `place_emitter` are true for exactly the one
/// tick following the event that raised them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Index of this tick, monotonically increasing
    pub frame: u64,
    /// Pointer location in scene coordinates
    pub pointer: Vec2,
    /// A discrete click happened since the last tick
    pub click: bool,
    /// Advance the spawn mode
    pub toggle_mode: bool,
    /// Place an emitter at the pointer
    pub place_emitter: bool,
}

impl FrameInput {
    /// Input with the pointer at `pointer` and no signals raised
    pub fn at(frame: u64, pointer: Vec2) -> Self {
        Self {
            frame,
            pointer,
            ..Self::default()
        }
    }

    pub fn with_click(mut self) -> Self {
        self.click = true;
        self
    }

    pub fn with_toggle(mut self) -> Self {
        self.toggle_mode = true;
        self
    }

    pub fn with_emitter(mut self) -> Self {
        self.place_emitter = true;
        self
    }
}

/// Tracks keyboard and mouse input between ticks
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<KeyCode>,
    /// Keys pressed since the last tick
    keys_just_pressed: HashSet<KeyCode>,

    /// Mouse button state (button index -> pressed)
    mouse_buttons_down: HashSet<u32>,
    /// Mouse buttons pressed since the last tick
    mouse_buttons_just_pressed: HashSet<u32>,

    /// Current pointer position in scene coordinates
    pointer: Vec2,

    /// Keys that advance the spawn mode
    toggle_keys: Vec<KeyCode>,
    /// Whether a primary click also requests an emitter
    click_places_emitter: bool,
    /// Emitter requested programmatically since the last tick
    emitter_requested: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_just_pressed: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_buttons_just_pressed: HashSet::new(),
            pointer: Vec2::ZERO,
            toggle_keys: vec![KeyCode::Space],
            click_places_emitter: true,
            emitter_requested: false,
        }
    }

    /// Replace the keys that advance the spawn mode
    pub fn bind_mode_toggle(&mut self, keys: Vec<KeyCode>) {
        self.toggle_keys = keys;
    }

    /// First key bound to the mode toggle, if any
    pub fn toggle_key(&self) -> Option<KeyCode> {
        self.toggle_keys.first().copied()
    }

    pub fn set_click_places_emitter(&mut self, enabled: bool) {
        self.click_places_emitter = enabled;
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: KeyCode) {
        if !self.keys_down.contains(&key) {
            self.keys_just_pressed.insert(key);
        }
        self.keys_down.insert(key);
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Process mouse button press
    pub fn process_mouse_button_down(&mut self, button: u32) {
        if !self.mouse_buttons_down.contains(&button) {
            self.mouse_buttons_just_pressed.insert(button);
        }
        self.mouse_buttons_down.insert(button);
    }

    /// Process mouse button release
    pub fn process_mouse_button_up(&mut self, button: u32) {
        self.mouse_buttons_down.remove(&button);
    }

    /// Process pointer movement, already mapped to scene coordinates
    pub fn process_mouse_move(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Ask for an emitter at the pointer on the next tick
    pub fn request_emitter(&mut self) {
        self.emitter_requested = true;
    }

    /// Latch everything seen since the last tick into a `FrameInput` and
    /// clear the one-tick signals.
    pub fn take_frame(&mut self, frame: u64) -> FrameInput {
        let click = self.mouse_buttons_just_pressed.contains(&PRIMARY_BUTTON);
        let toggle_mode = self
            .toggle_keys
            .iter()
            .any(|k| self.keys_just_pressed.contains(k));
        let place_emitter = self.emitter_requested || (click && self.click_places_emitter);

        self.keys_just_pressed.clear();
        self.mouse_buttons_just_pressed.clear();
        self.emitter_requested = false;

        FrameInput {
            frame,
            pointer: self.pointer,
            click,
            toggle_mode,
            place_emitter,
        }
    }

    // --- Query methods ---

    /// Is a key currently held down?
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Is a mouse button currently held?
    pub fn is_mouse_button_down(&self, button: u32) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }
}
