use super::{camera::Camera, distant_light::DistantLight, scene_object::SceneObject};
use crate::materials::material::Material;

pub struct Scene {
    camera: Camera,
    objects: Vec<Box<dyn SceneObject + Sync + Send>>,
    light: DistantLight,
    material: Material,
}

impl Scene {

    pub fn new(camera: Camera, light: DistantLight, material: Material) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            light,
            material,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn add_object(&mut self, obj: Box<dyn SceneObject + Sync + Send>) {
        self.objects.push(obj)
    }

    pub fn objects(&self) -> &[Box<dyn SceneObject + Sync + Send>] {
        &self.objects
    }

    pub fn light(&self) -> &DistantLight {
        &self.light
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}
