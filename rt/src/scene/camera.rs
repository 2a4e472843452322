use crate::geometry::{ray::Ray, vector3::Vector3};

/// Pinhole camera looking along `forward`.
///
/// The image plane is centered at `center` and spans `width` by `height` world units.
/// Rays are cast through normalized plane coordinates in `[-0.5, 0.5]`, so the camera
/// never knows the output resolution:
///
/// ```text
///  (x=-0.5, y=0.5)                (x=0.5, y=0.5)
///        +------------------------------+
///        |              ^ y             |
///        |              |               |
///        |              +---> x         |
///        |            center            |
///        +------------------------------+
/// (x=-0.5, y=-0.5)                (x=0.5, y=-0.5)
/// ```
///
/// `forward` and `up` must be orthogonal unit vectors. A degenerate basis is not detected.
#[derive(Clone, Debug)]
pub struct Camera {

    center: Vector3,
    forward: Vector3,
    up: Vector3,

    width: f64,
    height: f64,

    focal_distance: f64,
}

impl Camera {

    pub fn new(center: Vector3, forward: Vector3, up: Vector3, width: f64, height: f64, focal_distance: f64) -> Self {
        Self {
            center,
            forward,
            up,
            width,
            height,
            focal_distance,
        }
    }

    pub fn center(&self) -> &Vector3 {
        &self.center
    }

    pub fn forward(&self) -> &Vector3 {
        &self.forward
    }

    pub fn up(&self) -> &Vector3 {
        &self.up
    }

    pub fn right(&self) -> Vector3 {
        self.forward.cross_product(&self.up)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn focal_distance(&self) -> f64 {
        self.focal_distance
    }

    /// The eye point all rays diverge from, behind the image plane.
    pub fn vantage_point(&self) -> Vector3 {
        self.center - self.forward * self.focal_distance
    }

    pub fn cast_ray(&self, cam_x: f64, cam_y: f64) -> Ray {
        let right_offset = self.right() * (cam_x * self.width);
        let up_offset = self.up * (cam_y * self.height);
        let source = self.center + right_offset + up_offset;

        let direction = (source - self.vantage_point()).normalized();

        Ray::new(source, direction)
    }
}

/// Distance from the eye point to a plane of `width` that gives the horizontal field of view.
pub fn focal_distance_from_fov(width: f64, fov_degrees: f64) -> f64 {
    (width / 2.0) / (fov_degrees.to_radians() / 2.0).tan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera::new(
            Vector3::zero(),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            10.0,
            5.625,
            focal_distance_from_fov(10.0, 80.0),
        )
    }

    #[test]
    fn test_focal_distance_from_fov() {
        assert!((focal_distance_from_fov(2.0, 90.0) - 1.0).abs() < 1e-9);
        assert!((focal_distance_from_fov(10.0, 80.0) - 5.958767962971049).abs() < 1e-9);
    }

    #[test]
    fn test_center_ray() {
        let camera = test_camera();
        let ray = camera.cast_ray(0.0, 0.0);

        assert_eq!(ray.origin().x, 0.0);
        assert_eq!(ray.origin().y, 0.0);
        assert_eq!(ray.origin().z, 0.0);
        assert_eq!(*ray.direction(), (camera.center() - &camera.vantage_point()).normalized());
        assert_eq!(*ray.direction(), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_center_ray_with_offset_camera() {
        let camera = Camera::new(
            Vector3::new(3.0, -2.0, 7.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
            4.0,
            3.0,
            2.0,
        );
        let ray = camera.cast_ray(0.0, 0.0);

        assert_eq!(ray.origin(), camera.center());
        assert_eq!(camera.vantage_point(), Vector3::new(3.0, -2.0, 9.0));
        assert_eq!(*ray.direction(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_corner_rays() {
        let camera = test_camera();

        let top_right = camera.cast_ray(0.5, 0.5);
        assert_eq!(*top_right.origin(), Vector3::new(5.0, 0.0, 2.8125));

        let bottom_left = camera.cast_ray(-0.5, -0.5);
        assert_eq!(*bottom_left.origin(), Vector3::new(-5.0, 0.0, -2.8125));

        let expected = (Vector3::new(-5.0, 0.0, -2.8125) - camera.vantage_point()).normalized();
        assert_eq!(*bottom_left.direction(), expected);
    }

    #[test]
    fn test_ray_directions_are_normalized() {
        let camera = test_camera();

        for i in 0..=10 {
            for j in 0..=10 {
                let cam_x = i as f64 / 10.0 - 0.5;
                let cam_y = j as f64 / 10.0 - 0.5;
                let ray = camera.cast_ray(cam_x, cam_y);

                assert!((ray.direction().length() - 1.0).abs() < 1e-9);
            }
        }
    }
}
