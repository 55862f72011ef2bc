//! Error types returned by the grid operations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which structural rule a malformed cell index broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Malformation {
  /// The reserved high bit is set.
  HighBit,
  /// The mode field is not the cell mode.
  Mode(u8),
  /// The reserved bits after the mode are not zero.
  ReservedBits,
  /// The base cell number is not below the number of base cells.
  BaseCell(u8),
  /// A digit at a populated resolution is outside `0..=6`.
  Digit {
    /// Resolution of the offending digit.
    res: i32,
  },
  /// A digit past the cell resolution is not the unused sentinel.
  UnusedDigit {
    /// Resolution of the offending digit.
    res: i32,
  },
  /// The digits select the child a pentagon does not have.
  DeletedSubsequence,
  /// The number of digits given does not match the resolution.
  DigitCount {
    /// Resolution requested.
    res: i32,
    /// Digits supplied.
    len: usize,
  },
  /// The address string is not a hexadecimal 64-bit value.
  Address,
}

/// Errors returned by the fallible grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GridError {
  /// Latitude or longitude is non-finite, or latitude is outside `[-pi/2, pi/2]`.
  #[error("invalid geographic coordinate")]
  InvalidCoordinate,
  /// Face overage resolution did not settle on a face or base cell.
  #[error("face crossing could not be resolved")]
  FaceCrossingUnresolved,
  /// The cell index is not structurally valid.
  #[error("malformed cell index: {0:?}")]
  MalformedCellIndex(Malformation),
  /// Resolution 0 cells have no parent.
  #[error("resolution 0 cell has no parent")]
  NoParent,
  /// The resolution is outside `0..=15`, or incompatible with the operation.
  #[error("unsupported resolution {0}")]
  UnsupportedResolution(i32),
}

impl From<Malformation> for GridError {
  fn from(m: Malformation) -> Self {
    GridError::MalformedCellIndex(m)
  }
}

/// Result alias used across the crate.
pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_names_the_failure() {
    assert_eq!(GridError::NoParent.to_string(), "resolution 0 cell has no parent");
    assert_eq!(GridError::UnsupportedResolution(16).to_string(), "unsupported resolution 16");
    let err: GridError = Malformation::BaseCell(122).into();
    assert_eq!(err.to_string(), "malformed cell index: BaseCell(122)");
  }
}
