use glam::Vec3;
use log::debug;

use crate::input::{Key, MouseButton, UserInput};

/// Immediate-mode widgets. Each call reads and writes the bound value in place
/// and reports whether it changed this frame.
pub trait Ui {
    fn begin(&mut self, title: &str);
    fn end(&mut self);
    fn text(&mut self, text: &str);
    fn separator(&mut self);
    /// Drags a single value; the result never goes below `min`.
    fn drag_float(&mut self, label: &str, value: &mut f32, speed: f32, min: f32) -> bool;
    fn drag_float3(&mut self, label: &str, value: &mut Vec3, speed: f32) -> bool;
}

const COMPONENTS: [&str; 3] = ["x", "y", "z"];

/// Window-backed [`Ui`]: every float component is a field, Tab focuses the
/// next one and dragging with the left button held edits it. Labels and text
/// end up in [`DragPanel::caption`].
pub struct DragPanel {
    title: String,
    lines: Vec<String>,
    focused: usize,
    focused_label: String,
    field_count: usize,
    cursor: usize,
    drag: f32,
}

impl DragPanel {
    pub fn new() -> Self {
        DragPanel {
            title: String::new(),
            lines: Vec::new(),
            focused: 0,
            focused_label: String::new(),
            field_count: 0,
            cursor: 0,
            drag: 0.0,
        }
    }

    /// Reads this frame's focus and drag gestures. Call once before the
    /// widgets are declared.
    pub fn begin_frame(&mut self, input: &UserInput) {
        if input.is_key_pressed(Key::Tab) && self.field_count > 0 {
            self.focused = (self.focused + 1) % self.field_count;
            debug!("panel focus moved to field {}", self.focused);
        }
        self.drag = if input.is_mouse_down(MouseButton::Left) {
            input.mouse_delta().x
        } else {
            0.0
        };
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// One line summary of the last declared panel.
    pub fn caption(&self) -> String {
        let mut parts = Vec::with_capacity(self.lines.len() + 2);
        if !self.title.is_empty() {
            parts.push(self.title.clone());
        }
        parts.extend(self.lines.iter().cloned());
        if !self.focused_label.is_empty() {
            parts.push(format!("[{}]", self.focused_label));
        }
        parts.join(" | ")
    }

    fn field(&mut self, label: &str, value: &mut f32, speed: f32, min: f32) -> bool {
        let index = self.cursor;
        self.cursor += 1;
        if index != self.focused {
            return false;
        }

        let old = *value;
        if self.drag != 0.0 {
            *value += self.drag * speed;
        }
        *value = value.max(min);
        self.focused_label = format!("{label} = {:.2}", *value);
        *value != old
    }
}

impl Default for DragPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for DragPanel {
    fn begin(&mut self, title: &str) {
        self.title = title.to_string();
        self.lines.clear();
        self.cursor = 0;
    }

    fn end(&mut self) {
        self.field_count = self.cursor;
        if self.focused >= self.field_count {
            self.focused = 0;
        }
    }

    fn text(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn separator(&mut self) {}

    fn drag_float(&mut self, label: &str, value: &mut f32, speed: f32, min: f32) -> bool {
        self.field(label, value, speed, min)
    }

    fn drag_float3(&mut self, label: &str, value: &mut Vec3, speed: f32) -> bool {
        let mut changed = false;
        for (i, component) in COMPONENTS.iter().enumerate() {
            let label = format!("{label}.{component}");
            changed |= self.field(&label, &mut value[i], speed, f32::NEG_INFINITY);
        }
        changed
    }
}
