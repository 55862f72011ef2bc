// tests/properties_tests.rs

use hexgrid::*;
use proptest::prelude::*;

fn arb_lat_lng() -> impl Strategy<Value = LatLng> {
  (-90.0f64..=90.0, -180.0f64..180.0).prop_map(|(lat, lng)| LatLng::from_degrees(lat, lng))
}

fn arb_cell(max_res: i32) -> impl Strategy<Value = CellIndex> {
  (arb_lat_lng(), 0..=max_res).prop_filter_map("indexing failed", |(g, res)| lat_lng_to_cell(&g, res).ok())
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn prop_address_round_trip(cell in arb_cell(15)) {
    let text = to_address_string(cell);
    prop_assert_eq!(text.len(), 15);
    prop_assert_eq!(from_address_string(&text), Ok(cell));
    prop_assert_eq!(from_address_string(&text.to_uppercase()), Ok(cell));
  }

  #[test]
  fn prop_decode_encode_round_trip(cell in arb_cell(15)) {
    let parts = decode(cell).unwrap();
    prop_assert_eq!(parts.digits.len() as i32, parts.resolution);
    prop_assert_eq!(encode(parts.mode, parts.resolution, parts.base_cell, &parts.digits), Ok(cell));
  }

  #[test]
  fn prop_center_reindexes_to_the_same_cell(cell in arb_cell(15)) {
    let center = cell_to_lat_lng(cell).unwrap();
    prop_assert_eq!(lat_lng_to_cell(&center, cell.resolution()), Ok(cell));
  }

  #[test]
  fn prop_cell_is_among_its_parents_children(cell in arb_cell(15)) {
    prop_assume!(cell.resolution() > 0);
    let up = parent(cell).unwrap();
    prop_assert_eq!(up.resolution(), cell.resolution() - 1);
    let kids = children(up).unwrap();
    prop_assert_eq!(kids.iter().filter(|&&k| k == cell).count(), 1);
  }

  #[test]
  fn prop_parents_compose(cell in arb_cell(15), coarse in 0..=15i32) {
    let coarse = coarse.min(cell.resolution());
    let mut walked = cell;
    while walked.resolution() > coarse {
      walked = parent(walked).unwrap();
    }
    prop_assert_eq!(cell_to_parent(cell, coarse), Ok(walked));
  }

  #[test]
  fn prop_neighbors_are_symmetric(cell in arb_cell(10)) {
    for (other, distance) in grid_disk_distances(cell, 2).unwrap() {
      let expected = distance == 1;
      prop_assert_eq!(are_neighbors(cell, other), Ok(expected));
      prop_assert_eq!(are_neighbors(other, cell), Ok(expected));
    }
  }

  #[test]
  fn prop_disk_size(cell in arb_cell(10), k in 0u32..=3) {
    let disk = grid_disk(cell, k).unwrap();
    prop_assert_eq!(disk[0], cell);
    let unique: std::collections::HashSet<_> = disk.iter().collect();
    prop_assert_eq!(unique.len(), disk.len());
    prop_assert!(disk.len() as u64 <= max_grid_disk_size(k));

    // With no pentagon anywhere near, the disk is a full hexagon.
    let margin = grid_disk(cell, k + 1).unwrap();
    if !margin.iter().any(|&c| is_pentagon(c)) {
      prop_assert_eq!(disk.len() as u64, max_grid_disk_size(k));
    }
  }
}

#[test]
fn zero_disk_is_the_cell_itself() {
  for cell in res0_cells() {
    assert_eq!(grid_disk(cell, 0), Ok(vec![cell]));
  }
}
