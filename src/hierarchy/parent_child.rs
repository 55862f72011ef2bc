use crate::cell_index::inspection::is_pentagon_unchecked;
use crate::cell_index::validate_cell;
use crate::constants::MAX_RES;
use crate::error::{GridError, GridResult};
use crate::iterators::children_iter;
use crate::types::{CellIndex, Direction};

/// Sets digits `from..=to` to `digit`.
pub(crate) fn fill_digits(cell: CellIndex, from: i32, to: i32, digit: Direction) -> CellIndex {
  (from..=to).fold(cell, |h, r| h.with_digit(r, digit))
}

/// Validates `cell` and checks that `child_res` is at or below its resolution.
fn check_child_res(cell: CellIndex, child_res: i32) -> GridResult<()> {
  validate_cell(cell)?;
  if child_res < cell.resolution() || child_res > MAX_RES {
    return Err(GridError::UnsupportedResolution(child_res));
  }
  Ok(())
}

/// Ancestor of `cell` at `parent_res`. A cell is its own parent at its own
/// resolution.
pub fn cell_to_parent(cell: CellIndex, parent_res: i32) -> GridResult<CellIndex> {
  validate_cell(cell)?;
  let res = cell.resolution();
  if parent_res < 0 || parent_res > res {
    return Err(GridError::UnsupportedResolution(parent_res));
  }
  Ok(fill_digits(
    cell.with_resolution(parent_res),
    parent_res + 1,
    res,
    Direction::Invalid,
  ))
}

/// Immediate parent of `cell`.
///
/// # Errors
/// [`GridError::NoParent`] for resolution 0 cells.
pub fn parent(cell: CellIndex) -> GridResult<CellIndex> {
  validate_cell(cell)?;
  match cell.resolution() {
    0 => Err(GridError::NoParent),
    res => cell_to_parent(cell, res - 1),
  }
}

/// Center descendant of `cell` at `child_res`.
pub fn cell_to_center_child(cell: CellIndex, child_res: i32) -> GridResult<CellIndex> {
  check_child_res(cell, child_res)?;
  Ok(fill_digits(
    cell.with_resolution(child_res),
    cell.resolution() + 1,
    child_res,
    Direction::Center,
  ))
}

/// Number of descendants of `cell` at `child_res`.
///
/// A pentagon has one pentagon child and five hexagon children at every
/// step, so it has `1 + 5 * (7^n - 1) / 6` descendants `n` levels down.
pub fn cell_to_children_size(cell: CellIndex, child_res: i32) -> GridResult<u64> {
  check_child_res(cell, child_res)?;
  let hexagons = 7u64.pow((child_res - cell.resolution()) as u32);
  if is_pentagon_unchecked(cell) {
    Ok(1 + 5 * (hexagons - 1) / 6)
  } else {
    Ok(hexagons)
  }
}

/// Every descendant of `cell` at `child_res`, in ascending index order.
pub fn cell_to_children(cell: CellIndex, child_res: i32) -> GridResult<Vec<CellIndex>> {
  Ok(children_iter(cell, child_res)?.collect())
}

/// Immediate children of `cell`: seven for a hexagon, six for a pentagon,
/// ordered by digit.
pub fn children(cell: CellIndex) -> GridResult<Vec<CellIndex>> {
  validate_cell(cell)?;
  cell_to_children(cell, cell.resolution() + 1)
}
