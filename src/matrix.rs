//! Homogeneous transforms in the row-vector convention (`v × M`).
//!
//! Matrices are stored as [`glam::Mat4`]. The row-major layout of a row-vector
//! transform is the same memory as glam's column-major layout of the matching
//! column-vector transform, so the constructors below line up element for
//! element with glam's. Only composition order differs: `multiply(a, b)` means
//! "apply `a`, then `b`".

use glam::{Mat4, Vec3};

pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Translation by `t`, stored in the fourth row (`m[3][0..3]`).
pub fn translate(t: Vec3) -> Mat4 {
    Mat4::from_translation(t)
}

pub fn rotate_x(angle: f32) -> Mat4 {
    Mat4::from_rotation_x(angle)
}

pub fn rotate_y(angle: f32) -> Mat4 {
    Mat4::from_rotation_y(angle)
}

/// Row-vector product `a × b`: transforming by the result applies `a` first.
pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
    b * a
}

/// Transforms `point` with w = 1 and divides x, y and z by the resulting w.
///
/// A zero w produces inf/NaN components.
pub fn transform(point: Vec3, m: Mat4) -> Vec3 {
    m.project_point3(point)
}

#[cfg(test)]
mod test {
    use super::*;
    use float_cmp::approx_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn sample() -> Mat4 {
        multiply(
            multiply(rotate_x(0.3), rotate_y(-1.1)),
            translate(Vec3::new(2.0, -1.0, 0.5)),
        )
    }

    #[test]
    fn identity_is_neutral_for_multiply() {
        let m = sample();
        assert_eq!(multiply(identity(), m), m);
        assert_eq!(multiply(m, identity()), m);
    }

    #[test]
    fn identity_transform_keeps_point() {
        let p = Vec3::new(1.5, -2.0, 7.25);
        assert_eq!(transform(p, identity()), p);
    }

    #[test]
    fn multiply_is_associative() {
        let a = rotate_x(0.7);
        let b = translate(Vec3::new(1.0, 2.0, 3.0));
        let c = rotate_y(-0.4);
        let left = multiply(multiply(a, b), c);
        let right = multiply(a, multiply(b, c));
        assert!(left.abs_diff_eq(right, EPSILON));
    }

    #[test]
    fn translate_lives_in_fourth_row() {
        let m = translate(Vec3::new(1.0, 2.0, 3.0));
        let rows = m.to_cols_array_2d();
        assert_eq!(rows[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(
            transform(Vec3::ONE, m),
            Vec3::new(2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn rotate_x_layout() {
        let a = 0.25_f32;
        let m = rotate_x(a).to_cols_array_2d();
        assert!(approx_eq!(f32, m[1][1], a.cos(), epsilon = EPSILON));
        assert!(approx_eq!(f32, m[1][2], a.sin(), epsilon = EPSILON));
        assert!(approx_eq!(f32, m[2][1], -a.sin(), epsilon = EPSILON));
        assert!(approx_eq!(f32, m[2][2], a.cos(), epsilon = EPSILON));
    }

    #[test]
    fn rotate_y_layout() {
        let a = -0.8_f32;
        let m = rotate_y(a).to_cols_array_2d();
        assert!(approx_eq!(f32, m[0][0], a.cos(), epsilon = EPSILON));
        assert!(approx_eq!(f32, m[0][2], -a.sin(), epsilon = EPSILON));
        assert!(approx_eq!(f32, m[2][0], a.sin(), epsilon = EPSILON));
        assert!(approx_eq!(f32, m[2][2], a.cos(), epsilon = EPSILON));
    }

    #[test]
    fn rotate_x_turns_y_into_z() {
        let p = transform(Vec3::Y, rotate_x(FRAC_PI_2));
        assert!(p.abs_diff_eq(Vec3::Z, EPSILON));
    }

    #[test]
    fn multiply_applies_left_operand_first() {
        // Rotate +x onto -z, then shift along x.
        let m = multiply(rotate_y(FRAC_PI_2), translate(Vec3::X));
        let p = transform(Vec3::X, m);
        assert!(p.abs_diff_eq(Vec3::new(1.0, 0.0, -1.0), EPSILON));

        // Reversed order shifts first, then rotates.
        let m = multiply(translate(Vec3::X), rotate_y(FRAC_PI_2));
        let p = transform(Vec3::X, m);
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), EPSILON));
    }

    #[test]
    fn transform_divides_by_w() {
        let mut m = identity();
        m.w_axis.w = 2.0;
        assert_eq!(
            transform(Vec3::new(2.0, 4.0, 6.0), m),
            Vec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn zero_w_is_not_defended() {
        let mut m = identity();
        m.w_axis.w = 0.0;
        let p = transform(Vec3::new(1.0, 0.0, 0.0), m);
        assert!(p.x.is_infinite());
        assert!(p.y.is_nan());
    }

    #[test]
    fn vector_helpers_match_glam() {
        let a = Vec3::new(1.0, 2.0, 2.0);
        let b = Vec3::new(-1.0, 0.5, 3.0);
        assert_eq!(a + b, Vec3::new(0.0, 2.5, 5.0));
        assert_eq!(a - b, Vec3::new(2.0, 1.5, -1.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 4.0));
        assert_eq!(a.dot(b), 6.0);
        assert_eq!(a.length_squared(), 9.0);
        assert_eq!(a.length(), 3.0);
    }
}
