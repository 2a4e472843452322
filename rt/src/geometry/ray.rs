use super::vector3::Vector3;

#[derive(Clone, Debug)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {

    /// `direction` is stored as given. Camera rays are already unit length.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Ray {
            origin,
            direction,
        }
    }

    pub fn origin(&self) -> &Vector3 {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn point(&self, distance: f64) -> Vector3 {
        self.origin + self.direction * distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point() {
        let ray = Ray::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));

        assert_eq!(ray.point(0.0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.point(2.5), Vector3::new(1.0, 2.5, 0.0));
    }
}
