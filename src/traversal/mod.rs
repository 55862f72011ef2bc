//! Neighbours and grid disks.
#![allow(clippy::module_name_repetitions)]

pub mod grid_disk;
pub mod neighbors;

pub use grid_disk::{grid_disk, grid_disk_distances, grid_ring, max_grid_disk_size};
pub use neighbors::{are_neighbors, neighbor};
