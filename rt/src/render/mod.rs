pub mod basic;
pub mod intersection;
pub mod normals;
pub mod render;
pub mod shading;
