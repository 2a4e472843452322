pub mod camera;
pub mod distant_light;
pub mod scene;
pub mod scene_object;
