//! Coordinate systems: integer hex coordinates, the icosahedron face
//! geometry, and the projection between geographic and face coordinates.

pub mod face_ijk;
pub mod faces;
pub mod ijk;

pub use face_ijk::{face_ijk_to_lat_lng, lat_lng_to_face_ijk};
