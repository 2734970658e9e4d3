use glam::{vec3, Vec3};

use crate::sphere::Sphere;

/// Packed `0xRRGGBBAA`.
pub type Color = u32;

pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

pub struct CameraConfig {
    pub position: Vec3,
    /// Pitch, yaw and an unused roll, in radians.
    pub rotation: Vec3,
    /// World units per frame while a movement key is held.
    pub move_speed: f32,
    /// Radians per pixel of cursor movement while rotating.
    pub mouse_sensitivity: f32,
}

pub struct ProjectionConfig {
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

pub struct GridConfig {
    pub half_extent: f32,
    pub divisions: u32,
    pub color: Color,
}

pub struct WireframeConfig {
    pub latitude_divisions: u32,
    pub longitude_divisions: u32,
}

pub struct Palette {
    pub hit: Color,
    pub spheres: [Color; 2],
}

pub struct UiConfig {
    pub drag_speed: f32,
    pub min_radius: f32,
}

/// Every constant the demo runs with. Nothing here is read from disk or the
/// environment.
pub struct Config {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionConfig,
    pub grid: GridConfig,
    pub wireframe: WireframeConfig,
    pub palette: Palette,
    pub ui: UiConfig,
    pub spheres: [Sphere; 2],
}

impl Config {
    pub fn aspect(&self) -> f32 {
        self.window.width as f32 / self.window.height as f32
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window: WindowConfig {
                width: 1280,
                height: 720,
                title: "Sphere Collision".to_string(),
            },
            camera: CameraConfig {
                position: vec3(0.0, 2.0, -8.0),
                rotation: Vec3::ZERO,
                move_speed: 0.05,
                mouse_sensitivity: 0.005,
            },
            projection: ProjectionConfig {
                fov_y: 0.45,
                near: 0.1,
                far: 100.0,
                min_depth: 0.0,
                max_depth: 1.0,
            },
            grid: GridConfig {
                half_extent: 4.0,
                divisions: 20,
                color: 0x444444FF,
            },
            wireframe: WireframeConfig {
                latitude_divisions: 12,
                longitude_divisions: 24,
            },
            palette: Palette {
                hit: 0xFF4444FF,
                spheres: [0x4444FFFF, 0xFFFFFFFF],
            },
            ui: UiConfig {
                drag_speed: 0.01,
                min_radius: 0.01,
            },
            spheres: [
                Sphere::new(vec3(-1.5, 0.5, 0.0), 1.0),
                Sphere::new(vec3(1.0, 0.5, 0.5), 1.2),
            ],
        }
    }
}
