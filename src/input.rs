use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Escape,
    Tab,
}

impl Key {
    pub const COUNT: usize = 8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    pub const COUNT: usize = 2;
}

/// Device state for the current poll plus a copy of the previous one.
#[derive(Debug, Clone)]
pub struct UserInput {
    key_state: [bool; Key::COUNT],
    key_state_prev: [bool; Key::COUNT],
    mouse_button_state: [bool; MouseButton::COUNT],
    mouse_pos: Vec2,
    mouse_pos_prev: Vec2,
}

impl UserInput {
    pub fn new() -> Self {
        UserInput {
            key_state: [false; Key::COUNT],
            key_state_prev: [false; Key::COUNT],
            mouse_button_state: [false; MouseButton::COUNT],
            mouse_pos: Vec2::ZERO,
            mouse_pos_prev: Vec2::ZERO,
        }
    }

    /// Starts a new poll. Call before feeding this frame's events.
    pub fn new_frame(&mut self) {
        self.key_state_prev = self.key_state;
        self.mouse_pos_prev = self.mouse_pos;
    }

    pub fn set_key(&mut self, key: Key, down: bool) {
        self.key_state[key as usize] = down;
    }

    pub fn set_mouse_button(&mut self, button: MouseButton, down: bool) {
        self.mouse_button_state[button as usize] = down;
    }

    pub fn set_mouse_pos(&mut self, pos: Vec2) {
        self.mouse_pos = pos;
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.key_state[key as usize]
    }

    /// True only on the poll where `key` went from up to down.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        !self.key_state_prev[key as usize] && self.key_state[key as usize]
    }

    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_button_state[button as usize]
    }

    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Cursor movement since the previous poll, whether or not a button is held.
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_pos - self.mouse_pos_prev
    }
}

impl Default for UserInput {
    fn default() -> Self {
        Self::new()
    }
}
