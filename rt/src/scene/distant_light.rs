use crate::geometry::vector3::Vector3;

/// Light infinitely far away, hitting every point from the same direction.
#[derive(Clone, Debug)]
pub struct DistantLight {

    direction: Vector3,
    color: Vector3,
    intensity: f64,
}

impl DistantLight {

    /// `direction` points from the light into the scene and is normalized here.
    pub fn new(direction: Vector3, color: Vector3, intensity: f64) -> Self {
        DistantLight {
            direction: direction.normalized(),
            color,
            intensity,
        }
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn color(&self) -> &Vector3 {
        &self.color
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Color scaled by intensity.
    pub fn radiance(&self) -> Vector3 {
        self.color * self.intensity
    }

    /// Lambert cosine factor, zero for surfaces facing away.
    pub fn illuminate(&self, normal: &Vector3) -> f64 {
        (-normal.dot_product(&self.direction)).max(0.0)
    }
}
