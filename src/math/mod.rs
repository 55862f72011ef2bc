//! Small vector helpers used by the face projection.

pub mod vec2d;
pub mod vec3d;
