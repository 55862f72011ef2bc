use tracing::trace;

use crate::coords::lat_lng_to_face_ijk;
use crate::error::GridResult;
use crate::indexing::face_ijk_to_cell;
use crate::types::{CellIndex, LatLng};

/// Cell containing `geo` at resolution `res`.
///
/// # Errors
/// [`GridError::UnsupportedResolution`](crate::GridError::UnsupportedResolution)
/// outside `0..=15`, [`GridError::InvalidCoordinate`](crate::GridError::InvalidCoordinate)
/// for non-finite input or a latitude past the poles.
pub fn lat_lng_to_cell(geo: &LatLng, res: i32) -> GridResult<CellIndex> {
  let fijk = lat_lng_to_face_ijk(geo, res)?;
  trace!(face = fijk.face, coord = ?fijk.coord, res, "projected onto face");
  face_ijk_to_cell(&fijk, res)
}
