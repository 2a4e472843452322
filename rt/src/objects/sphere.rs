use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::render::intersection::Intersection;
use crate::scene::scene_object::SceneObject;

#[derive(Clone, Debug)]
pub struct Sphere {

    center: Vector3,
    radius: f64,
}

impl Sphere {

    pub fn new(center: Vector3, radius: f64) -> Self {
        Self {
            center,
            radius,
        }
    }

    pub fn center(&self) -> &Vector3 {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl SceneObject for Sphere {

    fn check_intersection(&self, ray: &Ray) -> Option<Intersection> {
        // Geometric test: project the origin->center vector onto the ray, then find how far
        // the center is from the ray line and how long the half chord is.
        let hypotenuse = self.center - *ray.origin();
        let projection = hypotenuse.dot_product(ray.direction());

        // Center is behind the origin. This is a miss even when the origin is inside the sphere.
        if projection < 0.0 {
            return None;
        }

        let d_squared = hypotenuse.dot_product_with_self() - projection * projection;
        let d = d_squared.max(0.0).sqrt();
        if d > self.radius {
            return None;
        }

        let m = (self.radius * self.radius - d * d).sqrt();
        let t0 = projection - m;
        let t1 = projection + m;

        // t0 is negative when the origin is inside the sphere
        let t = if t0 < 0.0 { t1 } else { t0 };

        let point = ray.point(t);
        let normal = (point - self.center).normalized();

        Some(Intersection::new(t, point, normal))
    }
}
