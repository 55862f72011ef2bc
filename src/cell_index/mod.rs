//! Bit layout of [`CellIndex`] and the encode/decode codec.
//!
//! ```text
//!  63  62..59  58..56  55..52  51..45     44..0
//! [0 ][ mode ][ rsv  ][ res  ][ base  ][ 15 x 3-bit digits ]
//! ```
//!
//! The digit for resolution `r` sits at bit `(15 - r) * 3`. Digits past the
//! cell's resolution hold the unused sentinel `7`.

pub mod address;
pub mod inspection;
pub mod validation;

use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
  BC_MASK, BC_OFFSET, CELL_MODE, DIGIT_MASK, INDEX_INIT, MAX_RES, MODE_MASK, MODE_OFFSET, NUM_BASE_CELLS,
  PER_DIGIT_OFFSET, RESERVED_MASK, RESERVED_OFFSET, RES_MASK, RES_OFFSET,
};
use crate::error::{GridError, GridResult, Malformation};
use crate::types::{CellIndex, Direction};

pub use address::{from_address_string, to_address_string};
pub use inspection::{is_pentagon, num_cells, pentagons, res0_cells};
pub use validation::{is_valid_cell, validate_cell};

#[inline]
const fn digit_offset(res: i32) -> u32 {
  (MAX_RES - res) as u32 * PER_DIGIT_OFFSET
}

impl CellIndex {
  /// Mode field.
  #[inline]
  #[must_use]
  pub const fn mode(self) -> u8 {
    ((self.0 & MODE_MASK) >> MODE_OFFSET) as u8
  }

  /// Resolution field, `0..=15`.
  #[inline]
  #[must_use]
  pub const fn resolution(self) -> i32 {
    ((self.0 & RES_MASK) >> RES_OFFSET) as i32
  }

  /// Base cell field. Valid cells have a value below 122.
  #[inline]
  #[must_use]
  pub const fn base_cell(self) -> u8 {
    ((self.0 & BC_MASK) >> BC_OFFSET) as u8
  }

  /// Reserved bits between mode and resolution.
  #[inline]
  #[must_use]
  pub const fn reserved_bits(self) -> u8 {
    ((self.0 & RESERVED_MASK) >> RESERVED_OFFSET) as u8
  }

  /// Digit at resolution `res` (`1..=15`). Any other `res` reads as
  /// [`Direction::Invalid`].
  #[inline]
  #[must_use]
  pub const fn digit(self, res: i32) -> Direction {
    if res < 1 || res > MAX_RES {
      return Direction::Invalid;
    }
    Direction::from_bits(self.0 >> digit_offset(res))
  }

  #[inline]
  #[must_use]
  pub(crate) const fn with_mode(self, mode: u8) -> Self {
    Self((self.0 & !MODE_MASK) | ((mode as u64) << MODE_OFFSET))
  }

  #[inline]
  #[must_use]
  pub(crate) const fn with_resolution(self, res: i32) -> Self {
    Self((self.0 & !RES_MASK) | (((res as u64) << RES_OFFSET) & RES_MASK))
  }

  #[inline]
  #[must_use]
  pub(crate) const fn with_base_cell(self, base_cell: u8) -> Self {
    Self((self.0 & !BC_MASK) | (((base_cell as u64) << BC_OFFSET) & BC_MASK))
  }

  /// Replaces the digit at `res`, which must be in `1..=15`.
  #[inline]
  #[must_use]
  pub(crate) const fn with_digit(self, res: i32, digit: Direction) -> Self {
    let offset = digit_offset(res);
    Self((self.0 & !(DIGIT_MASK << offset)) | ((digit as u64) << offset))
  }

  /// Cell-mode index at `res` on `base_cell` with every populated digit set
  /// to `digit`.
  #[must_use]
  pub(crate) const fn filled(res: i32, base_cell: u8, digit: Direction) -> Self {
    let mut h = Self(INDEX_INIT)
      .with_mode(CELL_MODE)
      .with_resolution(res)
      .with_base_cell(base_cell);
    let mut r = 1;
    while r <= res {
      h = h.with_digit(r, digit);
      r += 1;
    }
    h
  }

  /// First non-center digit, or `Center` if every populated digit is zero.
  #[must_use]
  pub(crate) fn leading_non_zero_digit(self) -> Direction {
    (1..=self.resolution())
      .map(|r| self.digit(r))
      .find(|&d| d != Direction::Center)
      .unwrap_or(Direction::Center)
  }

  /// Rotates every populated digit 60 degrees counter-clockwise.
  #[must_use]
  pub(crate) fn rotate60_ccw(self) -> Self {
    (1..=self.resolution()).fold(self, |h, r| h.with_digit(r, h.digit(r).rotate60_ccw()))
  }

  /// Rotates every populated digit 60 degrees clockwise.
  #[must_use]
  pub(crate) fn rotate60_cw(self) -> Self {
    (1..=self.resolution()).fold(self, |h, r| h.with_digit(r, h.digit(r).rotate60_cw()))
  }

  /// Counter-clockwise rotation about a pentagon center. A rotation that
  /// lands the leading digit on the pentagon's `deleted` child is carried
  /// one more step.
  #[must_use]
  pub(crate) fn rotate_pent60_ccw(self, deleted: Direction) -> Self {
    let mut h = self;
    let mut found_leading = false;
    for r in 1..=h.resolution() {
      h = h.with_digit(r, h.digit(r).rotate60_ccw());
      if !found_leading && h.digit(r) != Direction::Center {
        found_leading = true;
        if h.leading_non_zero_digit() == deleted {
          h = h.rotate60_ccw();
        }
      }
    }
    h
  }
}

/// Per-resolution digits of a cell, stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Digits {
  len: u8,
  digits: [Direction; MAX_RES as usize],
}

impl Digits {
  /// No digits, as for a resolution 0 cell.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      len: 0,
      digits: [Direction::Invalid; MAX_RES as usize],
    }
  }

  /// Appends a digit. Fails once all fifteen slots are used.
  pub fn push(&mut self, digit: Direction) -> GridResult<()> {
    let slot = self
      .digits
      .get_mut(usize::from(self.len))
      .ok_or(GridError::UnsupportedResolution(MAX_RES + 1))?;
    *slot = digit;
    self.len += 1;
    Ok(())
  }

  /// The populated digits, coarsest first.
  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[Direction] {
    &self.digits[..usize::from(self.len)]
  }
}

impl Default for Digits {
  fn default() -> Self {
    Self::new()
  }
}

impl Deref for Digits {
  type Target = [Direction];

  fn deref(&self) -> &[Direction] {
    self.as_slice()
  }
}

impl<'a> IntoIterator for &'a Digits {
  type Item = &'a Direction;
  type IntoIter = std::slice::Iter<'a, Direction>;

  fn into_iter(self) -> Self::IntoIter {
    self.as_slice().iter()
  }
}

/// Unpacked fields of a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellParts {
  /// Index mode; always the cell mode for decoded cells.
  pub mode: u8,
  /// Resolution, `0..=15`.
  pub resolution: i32,
  /// Base cell number, `0..122`.
  pub base_cell: u8,
  /// One digit per resolution `1..=resolution`.
  pub digits: Digits,
}

/// Packs the fields into a cell index and validates the result.
///
/// `digits` must hold exactly `resolution` entries.
pub fn encode(mode: u8, resolution: i32, base_cell: u8, digits: &[Direction]) -> GridResult<CellIndex> {
  if !(0..=MAX_RES).contains(&resolution) {
    return Err(GridError::UnsupportedResolution(resolution));
  }
  if digits.len() != resolution as usize {
    return Err(
      Malformation::DigitCount {
        res: resolution,
        len: digits.len(),
      }
      .into(),
    );
  }
  // Out of range fields would be truncated by the masks.
  if mode != CELL_MODE {
    return Err(Malformation::Mode(mode).into());
  }
  if usize::from(base_cell) >= NUM_BASE_CELLS {
    return Err(Malformation::BaseCell(base_cell).into());
  }

  let h = digits
    .iter()
    .zip(1..)
    .fold(CellIndex::filled(resolution, base_cell, Direction::Invalid), |h, (&d, r)| {
      h.with_digit(r, d)
    });
  validate_cell(h)?;
  Ok(h)
}

/// Unpacks a cell index, rejecting it if any structural rule fails.
pub fn decode(cell: CellIndex) -> GridResult<CellParts> {
  validate_cell(cell)?;
  let mut digits = Digits::new();
  for r in 1..=cell.resolution() {
    digits.push(cell.digit(r))?;
  }
  Ok(CellParts {
    mode: cell.mode(),
    resolution: cell.resolution(),
    base_cell: cell.base_cell(),
    digits,
  })
}

impl TryFrom<u64> for CellIndex {
  type Error = GridError;

  fn try_from(value: u64) -> GridResult<Self> {
    let cell = CellIndex(value);
    validate_cell(cell)?;
    Ok(cell)
  }
}

impl From<CellIndex> for u64 {
  fn from(cell: CellIndex) -> u64 {
    cell.0
  }
}
