use rt_core::models::pixel::Pixel;

use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::materials::material::Material;
use crate::render::intersection::Intersection;
use crate::scene::distant_light::DistantLight;

/// Ambient + diffuse + specular radiance at the intersection, unclamped.
pub fn shade(intersection: &Intersection, ray: &Ray, light: &DistantLight, material: &Material) -> Vector3 {
    ambient(material) + diffuse(intersection, light, material) + specular(intersection, ray, light, material)
}

pub fn ambient(material: &Material) -> Vector3 {
    material.surface_color * material.ambient_intensity
}

/// Lambertian term.
pub fn diffuse(intersection: &Intersection, light: &DistantLight, material: &Material) -> Vector3 {
    let diffuse_intensity = light.illuminate(intersection.normal());
    let diffuse_light_color = light.radiance().mul_elementwise(&material.surface_color);

    diffuse_light_color * (diffuse_intensity * material.diffuse_coefficient)
}

/// Phong highlight, takes the light color without intensity.
pub fn specular(intersection: &Intersection, ray: &Ray, light: &DistantLight, material: &Material) -> Vector3 {
    let light_reflection_direction = light.direction().reflect(intersection.normal());

    // how much the reflected light goes back towards the eye
    let alignment = -light_reflection_direction.dot_product(ray.direction());
    if alignment <= 0.0 {
        return Vector3::zero();
    }

    *light.color() * (alignment.powf(material.shininess) * material.specular_coefficient)
}

/// Maps radiance in `[0, 1]` to `[0, 255]`, clamping everything outside. Truncates, no gamma.
pub fn rgb_color_from_light(light: &Vector3) -> Pixel {
    Pixel::from_rgb(
        translate_light_component(light.x),
        translate_light_component(light.y),
        translate_light_component(light.z),
    )
}

fn translate_light_component(light_component: f64) -> u8 {
    (light_component.max(0.0).min(1.0) * 255.0) as u8
}

/// Debug coloring, maps each normal component from `[-1, 1]` to `[0, 255]`.
pub fn normal_color(normal: &Vector3) -> Pixel {
    rgb_color_from_light(&((*normal + Vector3::new(1.0, 1.0, 1.0)) * 0.5))
}
