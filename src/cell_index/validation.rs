//! Structural validation of cell indexes.

use crate::base_cells::pentagon_policy;
use crate::constants::{CELL_MODE, HIGH_BIT_MASK, MAX_RES, NUM_BASE_CELLS};
use crate::error::{GridResult, Malformation};
use crate::types::{CellIndex, Direction};

/// Checks every structural rule of a cell index and reports the first one
/// broken, in bit order: high bit, mode, reserved bits, base cell, populated
/// digits, unused digits.
///
/// Under a pentagon base cell the first non-center digit may not be the
/// pentagon's deleted digit.
pub fn validate_cell(cell: CellIndex) -> GridResult<()> {
  if cell.0 & HIGH_BIT_MASK != 0 {
    return Err(Malformation::HighBit.into());
  }
  if cell.mode() != CELL_MODE {
    return Err(Malformation::Mode(cell.mode()).into());
  }
  if cell.reserved_bits() != 0 {
    return Err(Malformation::ReservedBits.into());
  }
  let base_cell = cell.base_cell();
  if usize::from(base_cell) >= NUM_BASE_CELLS {
    return Err(Malformation::BaseCell(base_cell).into());
  }

  let res = cell.resolution();
  let mut deleted = pentagon_policy(base_cell).map(|p| p.deleted_digit);
  for r in 1..=res {
    let digit = cell.digit(r);
    if digit == Direction::Invalid {
      return Err(Malformation::Digit { res: r }.into());
    }
    // Only the leading non-center digit can fall in the deleted subsequence.
    if digit != Direction::Center {
      if deleted == Some(digit) {
        return Err(Malformation::DeletedSubsequence.into());
      }
      deleted = None;
    }
  }

  if let Some(r) = (res + 1..=MAX_RES).find(|&r| cell.digit(r) != Direction::Invalid) {
    return Err(Malformation::UnusedDigit { res: r }.into());
  }
  Ok(())
}

/// Whether `cell` is a structurally valid cell index.
#[inline]
#[must_use]
pub fn is_valid_cell(cell: CellIndex) -> bool {
  validate_cell(cell).is_ok()
}
