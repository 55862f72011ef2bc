//! Lazy iteration over descendants of a cell and over whole resolutions.

use crate::base_cells::pentagon_policy;
use crate::cell_index::inspection::is_pentagon_unchecked;
use crate::constants::{MAX_RES, NUM_BASE_CELLS, PER_DIGIT_OFFSET};
use crate::error::{GridError, GridResult};
use crate::hierarchy::cell_to_center_child;
use crate::types::{CellIndex, Direction};

/// Descendants of a cell at a fixed finer resolution, in ascending index
/// order.
///
/// Stepping adds one to the finest digit and lets the sentinel `7` carry
/// into the coarser digit. Under a pentagon the deleted digit is stepped
/// over, one resolution at a time from finest to coarsest, as the walk
/// leaves each nested pentagon.
#[derive(Debug, Clone)]
pub struct ChildIter {
  next: Option<CellIndex>,
  parent_res: i32,
  skip_res: i32,
  deleted: Direction,
}

#[inline]
const fn digit_unit(res: i32) -> u64 {
  1 << (PER_DIGIT_OFFSET * (MAX_RES - res) as u32)
}

impl ChildIter {
  /// Walk below `cell` starting from its center descendant `first`.
  fn below(cell: CellIndex, first: CellIndex) -> Self {
    let child_res = first.resolution();
    let pentagon = is_pentagon_unchecked(cell);
    Self {
      next: Some(first),
      parent_res: cell.resolution(),
      skip_res: if pentagon { child_res } else { -1 },
      deleted: pentagon_policy(cell.base_cell()).map_or(Direction::Invalid, |p| p.deleted_digit),
    }
  }

  fn step(&mut self, mut h: CellIndex) -> Option<CellIndex> {
    let child_res = h.resolution();
    h.0 += digit_unit(child_res);
    let mut i = child_res;
    while i > self.parent_res {
      let digit = h.digit(i);
      if i == self.skip_res && digit == self.deleted {
        h.0 += digit_unit(i);
        self.skip_res -= 1;
        return Some(h);
      }
      if digit != Direction::Invalid {
        return Some(h);
      }
      h.0 += digit_unit(i);
      i -= 1;
    }
    None
  }
}

impl Iterator for ChildIter {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    let current = self.next?;
    self.next = self.step(current);
    Some(current)
  }
}

/// Lazily yields every descendant of `cell` at `child_res`.
pub fn children_iter(cell: CellIndex, child_res: i32) -> GridResult<ChildIter> {
  let first = cell_to_center_child(cell, child_res)?;
  Ok(ChildIter::below(cell, first))
}

/// Every cell at one resolution, base cell by base cell.
#[derive(Debug, Clone)]
pub struct ResolutionIter {
  res: i32,
  base_cell: u8,
  children: Option<ChildIter>,
}

impl Iterator for ResolutionIter {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    loop {
      if let Some(cell) = self.children.as_mut().and_then(Iterator::next) {
        return Some(cell);
      }
      if usize::from(self.base_cell) >= NUM_BASE_CELLS {
        self.children = None;
        return None;
      }
      let base = CellIndex::filled(0, self.base_cell, Direction::Center);
      let first = CellIndex::filled(self.res, self.base_cell, Direction::Center);
      self.base_cell += 1;
      self.children = Some(ChildIter::below(base, first));
    }
  }
}

/// Lazily yields all cells at `res`.
pub fn cells_at_resolution(res: i32) -> GridResult<ResolutionIter> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::UnsupportedResolution(res));
  }
  Ok(ResolutionIter {
    res,
    base_cell: 0,
    children: None,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell_index::{is_valid_cell, num_cells, res0_cells};
  use crate::hierarchy::{cell_to_children_size, cell_to_parent};
  use crate::types::CellIndex;

  fn check_children(parent: CellIndex, child_res: i32) {
    let kids: Vec<CellIndex> = children_iter(parent, child_res).unwrap().collect();
    assert_eq!(kids.len() as u64, cell_to_children_size(parent, child_res).unwrap());
    for w in kids.windows(2) {
      assert!(w[0] < w[1]);
    }
    for kid in kids {
      assert!(is_valid_cell(kid), "{kid}");
      assert_eq!(kid.resolution(), child_res);
      assert_eq!(cell_to_parent(kid, parent.resolution()), Ok(parent));
    }
  }

  #[test]
  fn invalid_arguments() {
    let parent = CellIndex(0x0852_8347_3fff_ffff);
    assert_eq!(
      children_iter(parent, 4).map(|_| ()),
      Err(GridError::UnsupportedResolution(4))
    );
    assert_eq!(
      children_iter(parent, 16).map(|_| ()),
      Err(GridError::UnsupportedResolution(16))
    );
    assert!(children_iter(CellIndex(0), 5).is_err());
    assert!(cells_at_resolution(-1).is_err());
    assert!(cells_at_resolution(16).is_err());
  }

  #[test]
  fn hexagon_children() {
    let parent = CellIndex(0x0852_8347_3fff_ffff);
    check_children(parent, 5);
    check_children(parent, 7);
    let mut it = children_iter(parent, 7).unwrap();
    assert_eq!(it.next(), Some(CellIndex(0x0872_8347_00ff_ffff)));
    assert_eq!(it.last(), Some(CellIndex(0x0872_8347_36ff_ffff)));
  }

  #[test]
  fn pentagon_children() {
    for pent in [CellIndex::filled(0, 4, Direction::Center), CellIndex::filled(2, 117, Direction::Center)] {
      check_children(pent, pent.resolution() + 1);
      check_children(pent, pent.resolution() + 3);
    }
    let kids: Vec<CellIndex> = children_iter(CellIndex::filled(0, 4, Direction::Center), 2)
      .unwrap()
      .collect();
    assert_eq!(kids.len(), 41);
  }

  #[test]
  fn whole_resolutions() {
    for res in 0..=2 {
      let cells: Vec<CellIndex> = cells_at_resolution(res).unwrap().collect();
      assert_eq!(cells.len() as u64, num_cells(res).unwrap());
      assert!(cells.iter().all(|&c| is_valid_cell(c) && c.resolution() == res));
    }
  }

  #[test]
  fn whole_resolution_chains_the_base_cell_walks() {
    let chained: Vec<CellIndex> = res0_cells()
      .into_iter()
      .flat_map(|base| children_iter(base, 3).unwrap())
      .collect();
    let walked: Vec<CellIndex> = cells_at_resolution(3).unwrap().collect();
    assert_eq!(walked, chained);

    let mut finest = cells_at_resolution(15).unwrap();
    assert_eq!(finest.next(), Some(CellIndex::filled(15, 0, Direction::Center)));
    assert!(finest.take(100).all(|c| is_valid_cell(c) && c.resolution() == 15));
  }
}
