//! Conversions between geographic coordinates and cells.

pub mod digits;
pub mod from_cell;
pub mod to_cell;

pub use digits::{cell_to_face_ijk, face_ijk_to_cell, index_digits};
pub use from_cell::cell_to_lat_lng;
pub use to_cell::lat_lng_to_cell;
