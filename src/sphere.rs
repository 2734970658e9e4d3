use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Returns true when the spheres touch or overlap.
    ///
    /// Compares squared distances, so there is no square root and no epsilon:
    /// exact tangency counts as a hit, and results right at the boundary
    /// depend on how the inputs round. Any NaN input yields false.
    pub fn intersects(&self, other: &Sphere) -> bool {
        let radius_sum = self.radius + other.radius;
        (self.center - other.center).length_squared() <= radius_sum * radius_sum
    }
}
