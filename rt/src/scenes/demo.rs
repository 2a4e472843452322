use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::objects::sphere::Sphere;
use crate::scene::camera::{focal_distance_from_fov, Camera};
use crate::scene::distant_light::DistantLight;
use crate::scene::scene::Scene;
use crate::scenes::provider::SceneProvider;

const CAMERA_WIDTH: f64 = 10.0;
const FIELD_OF_VIEW: f64 = 80.0;

/// A single red sphere in front of the camera, lit by a yellow light from the upper left.
pub struct DemoSceneProvider {
}

impl DemoSceneProvider {

    pub fn new() -> Self {
        Self {}
    }
}

impl Default for DemoSceneProvider {

    fn default() -> Self {
        Self::new()
    }
}

impl SceneProvider for DemoSceneProvider {

    fn scene(&self, width: usize, height: usize) -> Scene {
        // keep the image plane aspect ratio equal to the output one
        let camera_height = CAMERA_WIDTH * height as f64 / width as f64;

        let camera = Camera::new(
            Vector3::zero(),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            CAMERA_WIDTH,
            camera_height,
            focal_distance_from_fov(CAMERA_WIDTH, FIELD_OF_VIEW),
        );

        let light = DistantLight::new(
            Vector3::new(-1.0, 1.0, 1.0),
            Vector3::new(1.0, 1.0, 0.0),
            5.0,
        );

        let material = Material::new(Vector3::new(0.75, 0.125, 0.125));

        let mut scene = Scene::new(camera, light, material);
        scene.add_object(Box::new(Sphere::new(Vector3::new(0.0, 10.0, 0.0), 4.0)));

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene() {
        let scene = DemoSceneProvider::new().scene(1920, 1080);

        assert_eq!(scene.objects().len(), 1);
        assert!((scene.camera().height() - 5.625).abs() < 1e-9);
        assert_eq!(scene.camera().right(), Vector3::new(1.0, 0.0, 0.0));
        assert!((scene.light().direction().length() - 1.0).abs() < 1e-9);
    }
}
