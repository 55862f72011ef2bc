//! Single-step neighbors and adjacency tests.
//!
//! A step rewrites digits from the finest resolution upwards. Each digit is
//! replaced from a lookup table keyed on (old digit, direction) and may carry
//! a direction into the next coarser digit, much like adding in base 7 on a
//! hex lattice. A carry out of resolution 1 hops to a neighboring base cell,
//! whose coordinate system may be rotated relative to the origin's.

use tracing::{trace, warn};

use crate::base_cells::{base_cell, base_cell_neighbor, is_cw_offset, pentagon_policy};
use crate::cell_index::inspection::is_pentagon_unchecked;
use crate::cell_index::validate_cell;
use crate::coords::face_ijk::is_class_iii;
use crate::error::{GridError, GridResult, Malformation};
use crate::hierarchy::cell_to_parent;
use crate::types::{CellIndex, Direction};

use crate::types::Direction::{Center as O, I, Ij, Ik, J, Jk, K};

/// Digit rewrite and carry for one step, indexed `[old digit][direction]`.
struct StepTable {
  digit: [[Direction; 7]; 7],
  carry: [[Direction; 7]; 7],
}

/// Step table for digits at Class III (odd) resolutions.
#[rustfmt::skip]
static CLASS_III_STEP: StepTable = StepTable {
  digit: [
    [O,  K,  J,  Jk, I,  Ik, Ij],
    [K,  I,  Jk, Ij, Ik, J,  O ],
    [J,  Jk, K,  I,  Ij, O,  Ik],
    [Jk, Ij, I,  Ik, O,  K,  J ],
    [I,  Ik, Ij, O,  J,  Jk, K ],
    [Ik, J,  O,  K,  Jk, Ij, I ],
    [Ij, O,  Ik, J,  K,  I,  Jk],
  ],
  carry: [
    [O,  O,  O,  O,  O,  O,  O ],
    [O,  K,  O,  K,  O,  Ik, O ],
    [O,  O,  J,  Jk, O,  O,  J ],
    [O,  K,  Jk, Jk, O,  O,  O ],
    [O,  O,  O,  O,  I,  I,  Ij],
    [O,  Ik, O,  O,  I,  Ik, O ],
    [O,  O,  J,  O,  Ij, O,  Ij],
  ],
};

/// Step table for digits at Class II (even) resolutions.
#[rustfmt::skip]
static CLASS_II_STEP: StepTable = StepTable {
  digit: [
    [O,  K,  J,  Jk, I,  Ik, Ij],
    [K,  J,  Jk, I,  Ik, Ij, O ],
    [J,  Jk, I,  Ik, Ij, O,  K ],
    [Jk, I,  Ik, Ij, O,  K,  J ],
    [I,  Ik, Ij, O,  K,  J,  Jk],
    [Ik, Ij, O,  K,  J,  Jk, I ],
    [Ij, O,  K,  J,  Jk, I,  Ik],
  ],
  carry: [
    [O,  O,  O,  O,  O,  O,  O ],
    [O,  K,  O,  Jk, O,  K,  O ],
    [O,  O,  J,  J,  O,  O,  Ij],
    [O,  Jk, J,  Jk, O,  O,  O ],
    [O,  O,  O,  O,  I,  Ik, I ],
    [O,  K,  O,  O,  Ik, Ik, O ],
    [O,  O,  Ij, O,  I,  O,  Ij],
  ],
};

/// Base cells whose orientation already matches the polar pentagon they
/// border, so stepping into it needs no extra rotation.
const POLAR_ALIGNED_NEIGHBORS: [u8; 2] = [8, 118];

/// The six neighbor directions.
pub(crate) const NEIGHBOR_DIRECTIONS: [Direction; 6] = [K, J, Jk, I, Ik, Ij];

/// Steps from `origin` one cell in `dir`.
///
/// `rotations` is the number of ccw 60 degree rotations already applied to
/// the walker's frame. It is applied to `dir` first and updated with any
/// rotation picked up on the way, so repeated calls can walk a consistent
/// direction across base cells.
///
/// Returns `None` when the step would enter the deleted subsequence of the
/// pentagon `origin` sits at the center of. `origin` must already be valid.
pub(crate) fn neighbor_rotations(
  origin: CellIndex,
  dir: Direction,
  rotations: &mut u8,
) -> GridResult<Option<CellIndex>> {
  if dir == Direction::Invalid {
    return Ok(None);
  }

  *rotations %= 6;
  let mut carry = (0..*rotations).fold(dir, |d, _| d.rotate60_ccw());

  let old_bc = origin.base_cell();
  let old_leading = origin.leading_non_zero_digit();
  let mut h = origin;
  let mut new_rotations = 0;

  let mut r = h.resolution();
  loop {
    if r == 0 {
      let (bc, rots) = match base_cell_neighbor(old_bc, carry) {
        Some(hop) => hop,
        None => {
          // Deleted direction of a pentagon base cell: go round via Ik.
          h = h.rotate60_ccw();
          *rotations += 1;
          base_cell_neighbor(old_bc, Ik).ok_or(Malformation::BaseCell(old_bc))?
        }
      };
      trace!(from = old_bc, to = bc, rots, "neighbor step crosses base cells");
      h = h.with_base_cell(bc);
      new_rotations = rots;
      break;
    }

    let old = h.digit(r);
    if old == Direction::Invalid {
      return Err(Malformation::Digit { res: r }.into());
    }
    let step = if is_class_iii(r) { &CLASS_III_STEP } else { &CLASS_II_STEP };
    h = h.with_digit(r, step.digit[old as usize][carry as usize]);
    carry = step.carry[old as usize][carry as usize];
    if carry == Direction::Center {
      break;
    }
    r -= 1;
  }

  let new_bc = h.base_cell();
  match pentagon_policy(new_bc) {
    Some(policy) => {
      let deleted = policy.deleted_digit;
      let mut already_adjusted = false;

      if h.leading_non_zero_digit() == deleted {
        if old_bc != new_bc {
          // Arrived in the deleted subsequence from another base cell.
          let old_face = base_cell(old_bc).ok_or(Malformation::BaseCell(old_bc))?.home.face;
          h = if is_cw_offset(new_bc, old_face) {
            h.rotate60_cw()
          } else {
            h.rotate60_ccw()
          };
          already_adjusted = true;
        } else if old_leading == Direction::Center {
          return Ok(None);
        } else if old_leading == deleted.rotate60_cw() {
          h = h.rotate60_ccw();
          *rotations += 1;
        } else if old_leading == deleted.rotate60_ccw() {
          h = h.rotate60_cw();
          *rotations += 5;
        } else {
          warn!(cell = %origin, ?dir, "step into deleted subsequence from an unexpected sector");
          return Err(GridError::FaceCrossingUnresolved);
        }
      }

      for _ in 0..new_rotations {
        h = h.rotate_pent60_ccw(deleted);
      }

      if old_bc != new_bc {
        if policy.polar {
          if !POLAR_ALIGNED_NEIGHBORS.contains(&old_bc) && h.leading_non_zero_digit() != deleted.rotate60_cw() {
            *rotations += 1;
          }
        } else if h.leading_non_zero_digit() == deleted.rotate60_ccw() && !already_adjusted {
          *rotations += 1;
        }
      }
    }
    None => {
      for _ in 0..new_rotations {
        h = h.rotate60_ccw();
      }
    }
  }

  *rotations = (*rotations + new_rotations) % 6;
  Ok(Some(h))
}

/// Neighbor of an already validated cell, honouring the pentagon's deleted
/// direction.
pub(crate) fn neighbor_unchecked(cell: CellIndex, dir: Direction) -> GridResult<Option<CellIndex>> {
  if is_pentagon_unchecked(cell) && pentagon_policy(cell.base_cell()).is_some_and(|p| p.deleted_digit == dir) {
    return Ok(None);
  }
  let mut rotations = 0;
  neighbor_rotations(cell, dir, &mut rotations)
}

/// The cell one step from `cell` in direction `dir`.
///
/// `Center` yields `cell` itself. Returns `None` for the deleted direction
/// of a pentagon and for [`Direction::Invalid`].
///
/// # Errors
/// [`GridError::MalformedCellIndex`] if `cell` is not valid.
pub fn neighbor(cell: CellIndex, dir: Direction) -> GridResult<Option<CellIndex>> {
  validate_cell(cell)?;
  neighbor_unchecked(cell, dir)
}

/// Whether `origin` and `destination` share an edge.
///
/// A cell is not its own neighbor.
///
/// # Errors
/// - [`GridError::MalformedCellIndex`] if either cell is not valid.
/// - [`GridError::UnsupportedResolution`] carrying the destination's
///   resolution when the two resolutions differ.
pub fn are_neighbors(origin: CellIndex, destination: CellIndex) -> GridResult<bool> {
  validate_cell(origin)?;
  validate_cell(destination)?;

  let res = origin.resolution();
  if destination.resolution() != res {
    return Err(GridError::UnsupportedResolution(destination.resolution()));
  }
  if origin == destination {
    return Ok(false);
  }

  // Siblings: the center child touches all others, and each outer child
  // touches the two beside it.
  if res > 1 && cell_to_parent(origin, res - 1)? == cell_to_parent(destination, res - 1)? {
    let a = origin.digit(res);
    let b = destination.digit(res);
    if a == Direction::Center || b == Direction::Center || b == a.rotate60_cw() || b == a.rotate60_ccw() {
      return Ok(true);
    }
  }

  for dir in NEIGHBOR_DIRECTIONS {
    if neighbor_unchecked(origin, dir)? == Some(destination) {
      return Ok(true);
    }
  }
  Ok(false)
}
