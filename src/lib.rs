#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)] // digit and face numbers are stored narrow
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // packed indexes read better as raw hex
#![allow(clippy::similar_names)]

//! `hexgrid` maps points on the sphere to cells of a hierarchical hexagonal
//! grid and back.
//!
//! The grid projects an icosahedron onto the globe and tiles each face with
//! hexagons, refining by aperture 7 across resolutions 0 to 15. Twelve cells
//! per resolution, one at each icosahedron vertex, are pentagons. Cells are
//! addressed by a packed 64-bit [`CellIndex`].
//!
//! ```
//! use hexgrid::{cell_to_lat_lng, lat_lng_to_cell, LatLng};
//!
//! let cell = lat_lng_to_cell(&LatLng::from_degrees(51.5008796, -0.1253643), 4)?;
//! assert_eq!(cell.to_string(), "84194adffffffff");
//! let center = cell_to_lat_lng(cell)?;
//! assert_eq!(lat_lng_to_cell(&center, 4)?, cell);
//! # Ok::<(), hexgrid::GridError>(())
//! ```
//!
//! Every operation is a pure function of its arguments and immutable static
//! tables, so everything here is safe to call from any number of threads.

pub mod base_cells;
pub mod cell_index;
pub mod constants;
pub mod coords;
pub mod error;
pub mod hierarchy;
pub mod indexing;
pub mod iterators;
pub mod latlng;
pub mod math;
pub mod traversal;
pub mod types;

pub use base_cells::{base_cell, pentagon_policy, BaseCell, PentagonPolicy};
pub use cell_index::{
  decode, encode, from_address_string, is_pentagon, is_valid_cell, num_cells, pentagons, res0_cells,
  to_address_string, validate_cell, CellParts, Digits,
};
pub use coords::{face_ijk_to_lat_lng, lat_lng_to_face_ijk};
pub use error::{GridError, GridResult, Malformation};
pub use hierarchy::{
  cell_to_center_child, cell_to_children, cell_to_children_size, cell_to_parent, children, parent,
};
pub use indexing::{cell_to_face_ijk, cell_to_lat_lng, face_ijk_to_cell, index_digits, lat_lng_to_cell};
pub use iterators::{cells_at_resolution, children_iter, ChildIter, ResolutionIter};
pub use latlng::{
  degs_to_rads, great_circle_distance_km, great_circle_distance_m, great_circle_distance_rads, rads_to_degs,
};
pub use traversal::{
  are_neighbors, grid_disk, grid_disk_distances, grid_ring, max_grid_disk_size, neighbor,
};
pub use types::{CellIndex, CoordIJK, Direction, FaceIJK, LatLng, Vec2d, Vec3d};
