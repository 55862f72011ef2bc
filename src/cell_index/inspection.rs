//! Cell inspection and enumeration helpers.

use crate::base_cells;
use crate::constants::{MAX_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
use crate::error::{GridError, GridResult};
use crate::types::{CellIndex, Direction};

use super::is_valid_cell;

/// Whether `cell` is one of the twelve pentagons at its resolution: a
/// pentagon base cell followed only by center digits. Invalid indexes are
/// never pentagons.
#[must_use]
pub fn is_pentagon(cell: CellIndex) -> bool {
  is_valid_cell(cell) && is_pentagon_unchecked(cell)
}

#[inline]
pub(crate) fn is_pentagon_unchecked(cell: CellIndex) -> bool {
  base_cells::is_pentagon(cell.base_cell()) && cell.leading_non_zero_digit() == Direction::Center
}

/// The 122 resolution 0 cells, ordered by base cell number.
#[must_use]
pub fn res0_cells() -> Vec<CellIndex> {
  (0..NUM_BASE_CELLS as u8)
    .map(|bc| CellIndex::filled(0, bc, Direction::Center))
    .collect()
}

/// The twelve pentagons at resolution `res`, ordered by base cell number.
pub fn pentagons(res: i32) -> GridResult<Vec<CellIndex>> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::UnsupportedResolution(res));
  }
  let cells: Vec<CellIndex> = (0..NUM_BASE_CELLS as u8)
    .filter(|&bc| base_cells::is_pentagon(bc))
    .map(|bc| CellIndex::filled(res, bc, Direction::Center))
    .collect();
  debug_assert_eq!(cells.len(), NUM_PENTAGONS);
  Ok(cells)
}

/// Number of cells at resolution `res`: `2 + 120 * 7^res`.
pub fn num_cells(res: i32) -> GridResult<u64> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::UnsupportedResolution(res));
  }
  Ok(2 + 120 * 7u64.pow(res as u32))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::MODE_OFFSET;

  #[test]
  fn pentagon_detection() {
    assert!(is_pentagon(CellIndex::filled(0, 4, Direction::Center)));
    assert!(is_pentagon(CellIndex::filled(1, 4, Direction::Center)));
    assert!(is_pentagon(CellIndex(0x0820_807f_ffff_ffff)));
    assert!(!is_pentagon(CellIndex::filled(1, 4, Direction::J)));
    assert!(!is_pentagon(CellIndex::filled(2, 0, Direction::Center)));
    assert!(!is_pentagon(CellIndex(0)));
    // Same bits in another mode.
    let edge = CellIndex(CellIndex::filled(0, 4, Direction::Center).0 ^ (3 << MODE_OFFSET));
    assert!(!is_pentagon(edge));
  }

  #[test]
  fn cell_counts() {
    assert_eq!(num_cells(0), Ok(122));
    assert_eq!(num_cells(1), Ok(842));
    assert_eq!(num_cells(15), Ok(569_707_381_193_162));
    assert_eq!(num_cells(-1), Err(GridError::UnsupportedResolution(-1)));
    assert_eq!(num_cells(16), Err(GridError::UnsupportedResolution(16)));
  }

  #[test]
  fn base_cell_enumeration() {
    let cells = res0_cells();
    assert_eq!(cells.len(), 122);
    for (bc, cell) in cells.iter().enumerate() {
      assert!(is_valid_cell(*cell));
      assert_eq!(cell.resolution(), 0);
      assert_eq!(usize::from(cell.base_cell()), bc);
    }
  }

  #[test]
  fn pentagon_enumeration() {
    let pents = pentagons(5).unwrap();
    assert_eq!(pents.len(), 12);
    assert!(pents.iter().all(|&p| is_pentagon(p) && p.resolution() == 5));
    assert!(pents.contains(&CellIndex(0x0850_8000_3fff_ffff)));
    assert_eq!(pentagons(16), Err(GridError::UnsupportedResolution(16)));
  }
}
