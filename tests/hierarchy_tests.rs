// tests/hierarchy_tests.rs

use hexgrid::*;

#[test]
fn parent_at_coarser_resolutions() {
  let child = CellIndex(0x8928342e20fffff);
  assert_eq!(cell_to_parent(child, 3), Ok(CellIndex(0x832834fffffffff)));
  assert_eq!(cell_to_parent(child, 9), Ok(child));

  let cell = CellIndex(0x8a2830828767fff);
  assert_eq!(parent(cell), Ok(CellIndex(0x89283082877ffff)));
  assert_eq!(cell_to_parent(cell, 5), Ok(CellIndex(0x85283083fffffff)));
}

#[test]
fn parent_errors() {
  assert_eq!(parent(CellIndex(0x8001fffffffffff)), Err(GridError::NoParent));
  for base in res0_cells() {
    assert_eq!(parent(base), Err(GridError::NoParent));
  }
  let cell = CellIndex(0x85283473fffffff);
  assert_eq!(cell_to_parent(cell, 6), Err(GridError::UnsupportedResolution(6)));
  assert_eq!(cell_to_parent(cell, -1), Err(GridError::UnsupportedResolution(-1)));
  assert!(matches!(parent(CellIndex(0)), Err(GridError::MalformedCellIndex(_))));
}

#[test]
fn hexagon_children_in_digit_order() {
  let expected: Vec<CellIndex> = [
    0x862834707ffffff,
    0x86283470fffffff,
    0x862834717ffffff,
    0x86283471fffffff,
    0x862834727ffffff,
    0x86283472fffffff,
    0x862834737ffffff,
  ]
  .into_iter()
  .map(CellIndex)
  .collect();
  assert_eq!(children(CellIndex(0x85283473fffffff)), Ok(expected));
}

#[test]
fn pentagon_children_skip_the_deleted_digit() {
  let kids = children(CellIndex(0x8009fffffffffff)).unwrap();
  let expected: Vec<CellIndex> = [
    0x81083ffffffffff,
    0x8108bffffffffff,
    0x8108fffffffffff,
    0x81093ffffffffff,
    0x81097ffffffffff,
    0x8109bffffffffff,
  ]
  .into_iter()
  .map(CellIndex)
  .collect();
  assert_eq!(kids, expected);
  assert!(kids.iter().all(|&k| k.digit(1) != Direction::K));
}

#[test]
fn descendant_counts() {
  let hexagon = CellIndex(0x85283473fffffff);
  let pentagon = CellIndex(0x8009fffffffffff);
  assert_eq!(cell_to_children_size(hexagon, 6), Ok(7));
  assert_eq!(cell_to_children_size(hexagon, 8), Ok(343));
  assert_eq!(cell_to_children_size(pentagon, 1), Ok(6));
  assert_eq!(cell_to_children_size(pentagon, 3), Ok(286));
  assert_eq!(cell_to_children(hexagon, 8).map(|v| v.len()), Ok(343));
  assert_eq!(cell_to_children(pentagon, 3).map(|v| v.len()), Ok(286));
  assert_eq!(cell_to_children(hexagon, 5), Ok(vec![hexagon]));
}

#[test]
fn children_errors() {
  let finest = CellIndex(0x8f283470d921c65);
  assert_eq!(children(finest), Err(GridError::UnsupportedResolution(16)));
  assert_eq!(
    cell_to_children(CellIndex(0x85283473fffffff), 4),
    Err(GridError::UnsupportedResolution(4))
  );
}

#[test]
fn center_child() {
  let cell = CellIndex(0x85283473fffffff);
  assert_eq!(cell_to_center_child(cell, 7), Ok(CellIndex(0x872834700ffffff)));
  assert_eq!(cell_to_center_child(cell, 5), Ok(cell));
}

#[test]
fn lazy_iteration_matches_collected_children() {
  let cell = CellIndex(0x85283473fffffff);
  let lazy: Vec<CellIndex> = children_iter(cell, 7).unwrap().collect();
  assert_eq!(lazy.len(), 49);
  assert_eq!(lazy.first(), Some(&CellIndex(0x872834700ffffff)));
  assert_eq!(lazy.last(), Some(&CellIndex(0x872834736ffffff)));
  assert_eq!(Ok(lazy), cell_to_children(cell, 7));
}

#[test]
fn whole_resolutions() {
  for res in 0..=2 {
    let cells: Vec<CellIndex> = cells_at_resolution(res).unwrap().collect();
    assert_eq!(Ok(cells.len() as u64), num_cells(res));
    assert!(cells.windows(2).all(|w| w[0] < w[1]));
  }
  assert!(cells_at_resolution(16).is_err());
}

#[test]
fn every_child_knows_its_parent() {
  for base in res0_cells() {
    for child in children(base).unwrap() {
      assert_eq!(parent(child), Ok(base));
      for grandchild in children(child).unwrap() {
        assert_eq!(parent(grandchild), Ok(child));
        assert_eq!(cell_to_parent(grandchild, 0), Ok(base));
      }
    }
  }
}
