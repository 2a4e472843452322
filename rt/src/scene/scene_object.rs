use crate::{geometry::ray::Ray, render::intersection::Intersection};

pub trait SceneObject {

    /// Nearest intersection in front of the ray origin, `None` on a miss.
    fn check_intersection(&self, ray: &Ray) -> Option<Intersection>;
}
