//! World space to screen space: view, projection and viewport.

use glam::{Mat4, Vec3, Vec4};

use crate::{
    camera::Camera,
    config::{Color, Config},
    geometry::Segment,
    matrix,
};

/// The backend's line primitive: pixel endpoints plus a packed RGBA color.
pub trait LineRenderer {
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);
}

/// Right-handed perspective projection.
///
/// `near == far` divides by zero; callers pass fixed constants.
pub fn perspective_projection(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let s = 1.0 / (fov_y * 0.5).tan();
    let depth = far / (near - far);
    Mat4::from_cols(
        Vec4::new(s / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, s, 0.0, 0.0),
        Vec4::new(0.0, 0.0, depth, -1.0),
        Vec4::new(0.0, 0.0, near * depth, 0.0),
    )
}

/// Maps normalized device coordinates onto the pixel rectangle and depth range.
pub fn viewport(
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    min_depth: f32,
    max_depth: f32,
) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(width * 0.5, 0.0, 0.0, 0.0),
        Vec4::new(0.0, height * 0.5, 0.0, 0.0),
        Vec4::new(0.0, 0.0, max_depth - min_depth, 0.0),
        Vec4::new(left + width * 0.5, top + height * 0.5, min_depth, 1.0),
    )
}

pub struct Pipeline {
    pub view_projection: Mat4,
    pub viewport: Mat4,
}

impl Pipeline {
    pub fn new(view: Mat4, projection: Mat4, viewport: Mat4) -> Self {
        Pipeline {
            view_projection: matrix::multiply(view, projection),
            viewport,
        }
    }

    /// Rebuilds the matrices for this frame's camera.
    pub fn for_camera(camera: &Camera, config: &Config) -> Self {
        let projection = &config.projection;
        Pipeline::new(
            camera.view_matrix(),
            perspective_projection(
                projection.fov_y,
                config.aspect(),
                projection.near,
                projection.far,
            ),
            viewport(
                0.0,
                0.0,
                config.window.width as f32,
                config.window.height as f32,
                projection.min_depth,
                projection.max_depth,
            ),
        )
    }

    /// World point to pixel coordinates plus depth.
    pub fn to_screen(&self, world: Vec3) -> Vec3 {
        matrix::transform(matrix::transform(world, self.view_projection), self.viewport)
    }

    pub fn draw<I, R>(&self, segments: I, color: Color, renderer: &mut R)
    where
        I: IntoIterator<Item = Segment>,
        R: LineRenderer + ?Sized,
    {
        for segment in segments {
            let a = self.to_screen(segment.start);
            let b = self.to_screen(segment.end);
            renderer.draw_line(a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use float_cmp::approx_eq;

    const EPSILON: f32 = 1e-4;

    #[derive(Default)]
    struct Lines(Vec<(i32, i32, i32, i32, Color)>);

    impl LineRenderer for Lines {
        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
            self.0.push((x0, y0, x1, y1, color));
        }
    }

    #[test]
    fn perspective_layout() {
        let m = perspective_projection(0.45, 16.0 / 9.0, 0.1, 100.0).to_cols_array_2d();
        let s = 1.0 / 0.225_f32.tan();
        assert!(approx_eq!(f32, m[0][0], s * 9.0 / 16.0, epsilon = EPSILON));
        assert!(approx_eq!(f32, m[1][1], s, epsilon = EPSILON));
        assert!(approx_eq!(f32, m[2][2], 100.0 / (0.1 - 100.0), epsilon = EPSILON));
        assert_eq!(m[2][3], -1.0);
        assert!(approx_eq!(f32, m[3][2], (0.1 * 100.0) / (0.1 - 100.0), epsilon = EPSILON));
        assert_eq!(m[3][3], 0.0);
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let m = perspective_projection(1.0, 1.0, 0.1, 100.0);
        // Right-handed: the camera looks down -z.
        let near = matrix::transform(Vec3::new(0.0, 0.0, -0.1), m);
        let far = matrix::transform(Vec3::new(0.0, 0.0, -100.0), m);
        assert!(approx_eq!(f32, near.z, 0.0, epsilon = EPSILON));
        assert!(approx_eq!(f32, far.z, 1.0, epsilon = EPSILON));
    }

    #[test]
    fn viewport_maps_ndc_corners() {
        let m = viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0);
        assert_eq!(matrix::transform(Vec3::ZERO, m), Vec3::new(640.0, 360.0, 0.0));
        assert_eq!(
            matrix::transform(Vec3::new(1.0, 1.0, 1.0), m),
            Vec3::new(1280.0, 720.0, 1.0)
        );
        assert_eq!(
            matrix::transform(Vec3::new(-1.0, -1.0, 0.5), m),
            Vec3::new(0.0, 0.0, 0.5)
        );
    }

    #[test]
    fn viewport_offsets_and_depth_range() {
        let m = viewport(10.0, 20.0, 100.0, 50.0, 0.25, 0.75);
        let p = matrix::transform(Vec3::new(0.0, 0.0, 1.0), m);
        assert_eq!(p, Vec3::new(60.0, 45.0, 0.75));
    }

    #[test]
    fn point_ahead_of_camera_lands_in_center() {
        let pipeline = Pipeline::new(
            matrix::identity(),
            perspective_projection(0.45, 1280.0 / 720.0, 0.1, 100.0),
            viewport(0.0, 0.0, 1280.0, 720.0, 0.0, 1.0),
        );
        let p = pipeline.to_screen(Vec3::new(0.0, 0.0, -10.0));
        assert!(approx_eq!(f32, p.x, 640.0, epsilon = EPSILON));
        assert!(approx_eq!(f32, p.y, 360.0, epsilon = EPSILON));
        assert!(p.z > 0.0 && p.z < 1.0);
    }

    #[test]
    fn default_camera_projects_sphere_center() {
        let config = Config::default();
        assert!(approx_eq!(f32, config.aspect(), 1280.0 / 720.0));
        let pipeline = Pipeline::for_camera(&Camera::new(&config.camera), &config);

        // Camera at (0, 2, -8) with no rotation puts (-1.5, 0.5, 0) at view
        // (-1.5, -1.5, 8). Divide by w = -8, then scale by s / aspect and s
        // with s = 1 / tan(0.225).
        let s = 1.0 / 0.225_f32.tan();
        let ndc_x = -1.5 * s / (1280.0 / 720.0) / -8.0;
        let ndc_y = -1.5 * s / -8.0;
        let p = pipeline.to_screen(config.spheres[0].center);
        assert!(approx_eq!(f32, p.x, ndc_x * 640.0 + 640.0, epsilon = 1e-2));
        assert!(approx_eq!(f32, p.y, ndc_y * 360.0 + 360.0, epsilon = 1e-2));
        assert!(approx_eq!(f32, p.x, 934.92, epsilon = 1e-2));
        assert!(approx_eq!(f32, p.y, 654.92, epsilon = 1e-2));
        // Behind a right-handed camera, so depth runs past the far end.
        assert!(approx_eq!(f32, p.z, 1.013_513_5, epsilon = 1e-4));
    }

    #[test]
    fn draw_truncates_to_pixels() {
        let pipeline = Pipeline::new(
            matrix::identity(),
            matrix::identity(),
            viewport(0.0, 0.0, 100.0, 100.0, 0.0, 1.0),
        );
        let mut lines = Lines::default();
        let segments = [Segment::new(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(0.019, 0.5, 0.0))];
        pipeline.draw(segments, 0x11223344, &mut lines);
        assert_eq!(lines.0, vec![(0, 0, 50, 75, 0x11223344)]);
    }
}
