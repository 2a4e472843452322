use crate::geometry::vector3::Vector3;

#[derive(Clone, Debug)]
pub struct Intersection {

    ray_distance: f64,
    point: Vector3,
    normal: Vector3,
}

impl Intersection {

    pub fn new(ray_distance: f64, point: Vector3, normal: Vector3) -> Self {
        Self {
            ray_distance,
            point,
            normal,
        }
    }

    pub fn ray_distance(&self) -> f64 {
        self.ray_distance
    }

    pub fn point(&self) -> &Vector3 {
        &self.point
    }

    /// Unit length, pointing away from the surface.
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }
}
