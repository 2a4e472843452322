use rt_core::models::image::Image;

use crate::render::basic::render_pixels;
use crate::render::render::{Render, RenderError};
use crate::render::shading::normal_color;
use crate::scene::scene::Scene;

/// Colors every hit by its surface normal, for debugging geometry.
pub struct NormalsRender {
}

impl NormalsRender {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl Default for NormalsRender {

    fn default() -> Self {
        Self::new()
    }
}

impl Render for NormalsRender {

    fn render(&self, scene: &Scene, render_to: &mut Image) -> Result<(), RenderError> {
        render_pixels(scene, render_to, |_ray, intersection| normal_color(intersection.normal()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rt_core::models::pixel::Pixel;

    use crate::scenes::demo::DemoSceneProvider;
    use crate::scenes::provider::SceneProvider;

    #[test]
    fn test_render_normals() {
        let scene = DemoSceneProvider::new().scene(64, 36);
        let mut image = Image::new(64, 36);

        NormalsRender::new().render(&scene, &mut image).expect("failed to render");

        assert!(image.get_pixel(0, 0).is_black());
        // the center of the sphere faces the camera, normal (0, -1, 0)
        assert_eq!(image.get_pixel_bottom_left_origin(32, 18), Pixel::from_rgb(127, 0, 127));
    }
}
