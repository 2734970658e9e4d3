//! Line-segment generators for the reference grid and sphere wireframes.
//!
//! Everything here stays in world space. Projection and drawing happen in
//! [`crate::pipeline`].

use std::f32::consts::PI;

use glam::{vec3, Vec3};

use crate::sphere::Sphere;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Segment { start, end }
    }
}

/// Square grid on the y = 0 plane spanning `[-half_extent, half_extent]` on x
/// and z. Each step yields one line along z and one along x, so there are
/// `2 * (divisions + 1)` segments. Zero divisions behaves like one.
pub fn grid(half_extent: f32, divisions: u32) -> impl Iterator<Item = Segment> {
    let divisions = divisions.max(1);
    let step = (half_extent * 2.0) / divisions as f32;
    (0..=divisions).flat_map(move |i| {
        let offset = -half_extent + i as f32 * step;
        [
            Segment::new(
                vec3(offset, 0.0, -half_extent),
                vec3(offset, 0.0, half_extent),
            ),
            Segment::new(
                vec3(-half_extent, 0.0, offset),
                vec3(half_extent, 0.0, offset),
            ),
        ]
    })
}

/// Latitude rings of a sphere, pole to pole, each split into
/// `longitude_divisions` segments.
pub fn sphere_wireframe(
    sphere: Sphere,
    latitude_divisions: u32,
    longitude_divisions: u32,
) -> impl Iterator<Item = Segment> {
    let latitude_divisions = latitude_divisions.max(1);
    (0..=latitude_divisions).flat_map(move |lat| {
        let lat_angle = (-0.5 + lat as f32 / latitude_divisions as f32) * PI;
        (0..longitude_divisions).map(move |lon| {
            let lon_a = 2.0 * PI * lon as f32 / longitude_divisions as f32;
            let lon_b = 2.0 * PI * (lon + 1) as f32 / longitude_divisions as f32;
            Segment::new(
                surface_point(&sphere, lat_angle, lon_a),
                surface_point(&sphere, lat_angle, lon_b),
            )
        })
    })
}

fn surface_point(sphere: &Sphere, lat: f32, lon: f32) -> Vec3 {
    let r = sphere.radius;
    vec3(
        r * lat.cos() * lon.cos(),
        r * lat.sin(),
        r * lat.cos() * lon.sin(),
    ) + sphere.center
}
