use crate::coords::face_ijk_to_lat_lng;
use crate::error::GridResult;
use crate::indexing::cell_to_face_ijk;
use crate::types::{CellIndex, LatLng};

/// Center of `cell`. Longitude is in `[-pi, pi]`.
pub fn cell_to_lat_lng(cell: CellIndex) -> GridResult<LatLng> {
  let fijk = cell_to_face_ijk(cell)?;
  face_ijk_to_lat_lng(&fijk, cell.resolution())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{MODE_OFFSET, M_PI};
  use crate::error::GridError;
  use crate::indexing::lat_lng_to_cell;

  #[test]
  fn invalid_input() {
    assert!(matches!(cell_to_lat_lng(CellIndex(0)), Err(GridError::MalformedCellIndex(_))));
    let other_mode = CellIndex(0x0852_8347_3fff_ffff ^ (3 << MODE_OFFSET));
    assert!(matches!(cell_to_lat_lng(other_mode), Err(GridError::MalformedCellIndex(_))));
  }

  #[test]
  fn center_reindexes_to_itself() {
    let geo = LatLng::from_degrees(37.779, -122.419);
    for res in 0..=15 {
      let cell = lat_lng_to_cell(&geo, res).unwrap();
      let center = cell_to_lat_lng(cell).unwrap();
      assert!(center.lng.abs() <= M_PI);
      assert_eq!(lat_lng_to_cell(&center, res), Ok(cell), "res {res}");
    }
  }

  #[test]
  fn known_center() {
    let center = cell_to_lat_lng(CellIndex(0x0852_8347_3fff_ffff)).unwrap();
    assert!((center.lat.to_degrees() - 37.345_793_375_368).abs() < 1e-9, "{center:?}");
    assert!((center.lng.to_degrees() + 121.976_375_972_551).abs() < 1e-9, "{center:?}");
    let center = cell_to_lat_lng(CellIndex(0x0872_8347_2bff_ffff)).unwrap();
    assert!((center.lat.to_degrees() - 37.351_718_201_832_7).abs() < 1e-9, "{center:?}");
    assert!((center.lng.to_degrees() + 122.050_325_652_639_4).abs() < 1e-9, "{center:?}");
  }
}
