//! Aperture-7 decomposition between face coordinates and cell digits.

use tracing::{trace, warn};

use crate::base_cells::{base_cell, face_ijk_to_base_cell, is_cw_offset, pentagon_policy};
use crate::cell_index::{decode, validate_cell, Digits};
use crate::constants::{MAX_RES, NUM_ICOSA_FACES};
use crate::coords::face_ijk::{is_class_iii, Overage};
use crate::error::{GridError, GridResult, Malformation};
use crate::types::{CellIndex, CoordIJK, Direction, FaceIJK};

fn check_res(res: i32) -> GridResult<()> {
  if (0..=MAX_RES).contains(&res) {
    Ok(())
  } else {
    Err(GridError::UnsupportedResolution(res))
  }
}

/// Base cell and per-resolution digits of the hex at `fijk` on a resolution
/// `res` grid.
pub fn index_digits(fijk: &FaceIJK, res: i32) -> GridResult<(u8, Digits)> {
  let parts = decode(face_ijk_to_cell(fijk, res)?)?;
  Ok((parts.base_cell, parts.digits))
}

/// Cell containing the hex at `fijk` on a resolution `res` grid.
///
/// Walks from `res` up to resolution 0 one aperture-7 step at a time,
/// recording which child each step came from, then rotates the digits into
/// the base cell's orientation. Pentagon base cells are rotated away from
/// their deleted child.
pub fn face_ijk_to_cell(fijk: &FaceIJK, res: i32) -> GridResult<CellIndex> {
  check_res(res)?;
  if usize::from(fijk.face) >= NUM_ICOSA_FACES {
    return Err(GridError::InvalidCoordinate);
  }

  let mut h = CellIndex::filled(res, 0, Direction::Center);
  let mut bc_fijk = *fijk;
  for r in (1..=res).rev() {
    let last = bc_fijk.coord;
    let center = if is_class_iii(r) {
      bc_fijk.coord.up_ap7();
      let mut c = bc_fijk.coord;
      c.down_ap7();
      c
    } else {
      bc_fijk.coord.up_ap7r();
      let mut c = bc_fijk.coord;
      c.down_ap7r();
      c
    };
    let digit = (last - center).to_digit();
    if digit == Direction::Invalid {
      warn!(face = fijk.face, res, r, "aperture step left no unit offset");
      return Err(GridError::FaceCrossingUnresolved);
    }
    h = h.with_digit(r, digit);
  }

  let Some((bc, rotations)) = face_ijk_to_base_cell(&bc_fijk) else {
    warn!(face = bc_fijk.face, coord = ?bc_fijk.coord, "no base cell at resolution 0 coordinate");
    return Err(GridError::FaceCrossingUnresolved);
  };
  h = h.with_base_cell(bc);

  if let Some(policy) = pentagon_policy(bc) {
    if h.leading_non_zero_digit() == policy.deleted_digit {
      h = if is_cw_offset(bc, bc_fijk.face) {
        h.rotate60_cw()
      } else {
        h.rotate60_ccw()
      };
    }
    for _ in 0..rotations {
      h = h.rotate_pent60_ccw(policy.deleted_digit);
    }
  } else {
    for _ in 0..rotations {
      h = h.rotate60_ccw();
    }
  }

  validate_cell(h).map_err(|err| {
    warn!(cell = %h, ?err, "indexing produced a malformed cell");
    GridError::FaceCrossingUnresolved
  })?;
  Ok(h)
}

/// Face coordinates of the center of `cell`, on the face that contains it.
pub fn cell_to_face_ijk(cell: CellIndex) -> GridResult<FaceIJK> {
  validate_cell(cell)?;
  let bc = cell.base_cell();
  let home = base_cell(bc).map(|b| b.home).ok_or(Malformation::BaseCell(bc))?;
  let policy = pentagon_policy(bc);

  // Pentagon digits leading with the child just past the deleted one sit
  // in the rotated-away sector; undo that rotation first.
  let mut h = cell;
  if let Some(p) = policy {
    if h.leading_non_zero_digit() == p.deleted_digit.rotate60_ccw() {
      h = h.rotate60_cw();
    }
  }

  let res = h.resolution();
  let mut fijk = home;
  let possible_overage = policy.is_some() || (res != 0 && home.coord != CoordIJK::default());

  for r in 1..=res {
    if is_class_iii(r) {
      fijk.coord.down_ap7();
    } else {
      fijk.coord.down_ap7r();
    }
    fijk.coord.neighbor(h.digit(r));
  }

  if !possible_overage {
    return Ok(fijk);
  }

  // Overage is resolved on a Class II grid.
  let orig = fijk.coord;
  let mut adj_res = res;
  if is_class_iii(res) {
    fijk.coord.down_ap7r();
    adj_res += 1;
  }

  let pent_leading_4 = policy.is_some_and(|p| {
    h.leading_non_zero_digit() == p.deleted_digit.rotate60_ccw().rotate60_ccw()
  });
  if fijk.adjust_overage_class_ii(adj_res, pent_leading_4) == Overage::None {
    if adj_res != res {
      fijk.coord = orig;
    }
    return Ok(fijk);
  }

  if policy.is_some() {
    // Pentagon distortion can push the coordinate across more than one edge.
    let settled = (0..NUM_ICOSA_FACES).any(|_| fijk.adjust_overage_class_ii(adj_res, false) == Overage::None);
    if !settled {
      warn!(cell = %cell, face = fijk.face, "face crossing did not settle");
      return Err(GridError::FaceCrossingUnresolved);
    }
  }
  if adj_res != res {
    fijk.coord.up_ap7r();
  }
  trace!(cell = %cell, face = fijk.face, "cell center lies off its home face");
  Ok(fijk)
}
