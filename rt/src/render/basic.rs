use indicatif::{ProgressBar, ProgressStyle};

use rt_core::models::image::Image;
use rt_core::models::pixel::Pixel;

use crate::geometry::ray::Ray;
use crate::render::intersection::Intersection;
use crate::render::render::{Render, RenderError};
use crate::render::shading::{rgb_color_from_light, shade};
use crate::scene::scene::Scene;

/// Renders the scene with ambient, diffuse and specular lighting.
pub struct BasicRender {
}

impl BasicRender {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl Default for BasicRender {

    fn default() -> Self {
        Self::new()
    }
}

impl Render for BasicRender {

    fn render(&self, scene: &Scene, render_to: &mut Image) -> Result<(), RenderError> {
        render_pixels(scene, render_to, |ray, intersection| {
            rgb_color_from_light(&shade(intersection, ray, scene.light(), scene.material()))
        })
    }
}

/// Casts one ray per pixel and colors every pixel that hits something.
///
/// Pixels without a hit keep whatever color `render_to` already had.
pub fn render_pixels<F>(scene: &Scene, render_to: &mut Image, color: F) -> Result<(), RenderError>
    where F: Fn(&Ray, &Intersection) -> Pixel {

    let width = render_to.width;
    let height = render_to.height;
    if render_to.is_empty() {
        return Err(RenderError::EmptyImage { width, height });
    }

    let camera = scene.camera();
    let progress = ProgressBar::new(height as u64);
    progress.set_style(ProgressStyle::default_bar().template("{elapsed_precise} [{bar:40}] {pos}/{len} rows"));

    let mut hits = 0;
    for y in 0..height {
        let cam_y = (y as f64 / height as f64) - 0.5;

        for x in 0..width {
            let cam_x = (x as f64 / width as f64) - 0.5;

            let ray = camera.cast_ray(cam_x, cam_y);
            if let Some(intersection) = find_intersection(&ray, scene) {
                // camera y grows upwards
                render_to.set_pixel_bottom_left_origin(x, y, color(&ray, &intersection));
                hits += 1;
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    debug!("{} of {} pixels hit an object", hits, width * height);

    Ok(())
}

/// Nearest hit across the scene. Ties keep the first object.
pub fn find_intersection(ray: &Ray, scene: &Scene) -> Option<Intersection> {
    let mut result: Option<Intersection> = None;

    for object in scene.objects() {
        if let Some(intersection) = object.check_intersection(ray) {
            let is_closer = match &result {
                Some(best) => intersection.ray_distance() < best.ray_distance(),
                None => true,
            };

            if is_closer {
                result = Some(intersection);
            }
        }
    }

    result
}
