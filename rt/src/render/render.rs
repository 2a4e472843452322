use custom_error::custom_error;

use rt_core::models::image::Image;

use crate::scene::scene::Scene;

custom_error! {pub RenderError
    EmptyImage {width: usize, height: usize} = "Cannot render to an empty image ({width}x{height})",
}

pub trait Render {

    fn render(&self, scene: &Scene, render_to: &mut Image) -> Result<(), RenderError>;
}
