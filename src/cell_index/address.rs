//! Hexadecimal address strings.

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, GridResult, Malformation};
use crate::types::CellIndex;

use super::validate_cell;

/// Lowercase hexadecimal address of `cell`, 15 digits for every cell-mode
/// index.
#[must_use]
pub fn to_address_string(cell: CellIndex) -> String {
  cell.to_string()
}

/// Parses a hexadecimal address and validates the cell it names.
///
/// Either letter case is accepted, with or without leading zeros. Prefixes,
/// signs and whitespace are rejected, as are values wider than 64 bits.
pub fn from_address_string(s: &str) -> GridResult<CellIndex> {
  if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(Malformation::Address.into());
  }
  let value = u64::from_str_radix(s, 16).map_err(|_| Malformation::Address)?;
  let cell = CellIndex(value);
  validate_cell(cell)?;
  Ok(cell)
}

impl fmt::Display for CellIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:015x}", self.0)
  }
}

impl fmt::LowerHex for CellIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}

impl fmt::UpperHex for CellIndex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::UpperHex::fmt(&self.0, f)
  }
}

impl FromStr for CellIndex {
  type Err = GridError;

  fn from_str(s: &str) -> GridResult<Self> {
    from_address_string(s)
  }
}
