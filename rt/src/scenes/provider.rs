use crate::scene::scene::Scene;

pub trait SceneProvider {

    /// Builds the scene for an output image of `width` by `height` pixels.
    fn scene(&self, width: usize, height: usize) -> Scene;
}
