pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod matrix;
pub mod pipeline;
pub mod scene;
pub mod sphere;
pub mod ui;

#[cfg(feature = "window")]
pub mod graphics;
#[cfg(feature = "window")]
pub mod shader;
