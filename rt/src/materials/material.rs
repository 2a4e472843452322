use crate::geometry::vector3::Vector3;

/// Surface response to light, shared by every object in the scene.
#[derive(Clone, Debug)]
pub struct Material {
    pub surface_color: Vector3,
    pub ambient_intensity: f64,
    pub diffuse_coefficient: f64,
    // how much the specular reflection contributes
    pub specular_coefficient: f64,
    // how wide the reflection is
    pub shininess: f64,
}

impl Material {

    pub fn new(surface_color: Vector3) -> Self {
        Self {
            surface_color,
            ambient_intensity: 0.1,
            diffuse_coefficient: 0.2,
            specular_coefficient: 0.2,
            shininess: 10.0,
        }
    }

    pub fn with_ambient_intensity(mut self, ambient_intensity: f64) -> Self {
        self.ambient_intensity = ambient_intensity;
        self
    }

    pub fn with_diffuse_coefficient(mut self, diffuse_coefficient: f64) -> Self {
        self.diffuse_coefficient = diffuse_coefficient;
        self
    }

    pub fn with_specular(mut self, specular_coefficient: f64, shininess: f64) -> Self {
        self.specular_coefficient = specular_coefficient;
        self.shininess = shininess;
        self
    }
}
