use std::f32::consts::PI;

use glam::{Mat4, Vec3};

use crate::{
    config::CameraConfig,
    input::{Key, MouseButton, UserInput},
    matrix,
};

/// Pitch stays just short of straight up/down so the view never flips.
pub const PITCH_LIMIT: f32 = PI * 0.49;

pub struct Camera {
    pub position: Vec3,
    /// Pitch, yaw and an unused roll, in radians.
    pub rotation: Vec3,
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        Camera {
            position: config.position,
            rotation: config.rotation,
            move_speed: config.move_speed,
            mouse_sensitivity: config.mouse_sensitivity,
        }
    }

    pub fn pitch(&self) -> f32 {
        self.rotation.x
    }

    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }

    pub fn update(&mut self, input: &UserInput) {
        // Fixed step along the world axes while a key is held
        if input.is_key_down(Key::W) {
            self.position.z += self.move_speed;
        }
        if input.is_key_down(Key::S) {
            self.position.z -= self.move_speed;
        }
        if input.is_key_down(Key::A) {
            self.position.x -= self.move_speed;
        }
        if input.is_key_down(Key::D) {
            self.position.x += self.move_speed;
        }
        if input.is_key_down(Key::Up) {
            self.position.y += self.move_speed;
        }
        if input.is_key_down(Key::Down) {
            self.position.y -= self.move_speed;
        }

        // Mouse rotation
        if input.is_mouse_down(MouseButton::Right) {
            let delta = input.mouse_delta();
            self.rotation.y += delta.x * self.mouse_sensitivity;
            self.rotation.x += delta.y * self.mouse_sensitivity;
            self.rotation.x = self.rotation.x.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    /// `rotate_y(-yaw) × rotate_x(-pitch) × translate(-position)`.
    pub fn view_matrix(&self) -> Mat4 {
        matrix::multiply(
            matrix::rotate_y(-self.yaw()),
            matrix::multiply(
                matrix::rotate_x(-self.pitch()),
                matrix::translate(-self.position),
            ),
        )
    }
}
