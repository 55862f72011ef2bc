//! Core value types.

use crate::constants::M_PI_2;
use crate::error::{GridError, GridResult};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A packed 64-bit cell identifier.
///
/// Equality and ordering are bit-for-bit on the packed value. Operations that
/// accept a `CellIndex` validate it first and report
/// [`GridError::MalformedCellIndex`] rather than trusting the bits.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellIndex(pub u64);

/// Latitude/longitude coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

impl LatLng {
  /// Creates a coordinate from radians.
  #[inline]
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Creates a coordinate from decimal degrees.
  #[inline]
  #[must_use]
  pub fn from_degrees(lat: f64, lng: f64) -> Self {
    Self::new(lat.to_radians(), lng.to_radians())
  }

  /// Checks that both components are finite and latitude is within the poles.
  pub fn validate(&self) -> GridResult<()> {
    if !self.lat.is_finite() || !self.lng.is_finite() || self.lat.abs() > M_PI_2 {
      return Err(GridError::InvalidCoordinate);
    }
    Ok(())
  }
}

/// IJK hexagon coordinates. Each axis is spaced 120 degrees apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
  /// K component.
  pub k: i32,
}

/// Face number and IJK coordinates on that face's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Icosahedron face number (0-19).
  pub face: u8,
  /// IJK coordinates on that face.
  pub coord: CoordIJK,
}

/// 2D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
}

/// 3D floating-point vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  /// X component.
  pub x: f64,
  /// Y component.
  pub y: f64,
  /// Z component.
  pub z: f64,
}

/// A resolution digit: one of the seven aperture-7 children, or the unused
/// sentinel. Digits double as the six neighbor directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Center child.
  #[default]
  Center = 0,
  /// K axis.
  K = 1,
  /// J axis.
  J = 2,
  /// Between J and K.
  Jk = 3,
  /// I axis.
  I = 4,
  /// Between I and K.
  Ik = 5,
  /// Between I and J.
  Ij = 6,
  /// Unused digit sentinel.
  Invalid = 7,
}

impl Direction {
  /// The seven child digits in order.
  pub const CHILDREN: [Direction; 7] = [
    Direction::Center,
    Direction::K,
    Direction::J,
    Direction::Jk,
    Direction::I,
    Direction::Ik,
    Direction::Ij,
  ];

  /// Decodes the low three bits of `bits`.
  #[inline]
  #[must_use]
  pub const fn from_bits(bits: u64) -> Self {
    match bits & 0b111 {
      0 => Direction::Center,
      1 => Direction::K,
      2 => Direction::J,
      3 => Direction::Jk,
      4 => Direction::I,
      5 => Direction::Ik,
      6 => Direction::Ij,
      _ => Direction::Invalid,
    }
  }

  /// Rotates the digit 60 degrees counter-clockwise.
  #[inline]
  #[must_use]
  pub const fn rotate60_ccw(self) -> Self {
    match self {
      Direction::K => Direction::Ik,
      Direction::Ik => Direction::I,
      Direction::I => Direction::Ij,
      Direction::Ij => Direction::J,
      Direction::J => Direction::Jk,
      Direction::Jk => Direction::K,
      other => other,
    }
  }

  /// Rotates the digit 60 degrees clockwise.
  #[inline]
  #[must_use]
  pub const fn rotate60_cw(self) -> Self {
    match self {
      Direction::K => Direction::Jk,
      Direction::Jk => Direction::J,
      Direction::J => Direction::Ij,
      Direction::Ij => Direction::I,
      Direction::I => Direction::Ik,
      Direction::Ik => Direction::K,
      other => other,
    }
  }

  /// Unit `ijk` vector pointing in this direction. `Invalid` has none.
  #[must_use]
  pub const fn unit_vector(self) -> Option<CoordIJK> {
    let (i, j, k) = match self {
      Direction::Center => (0, 0, 0),
      Direction::K => (0, 0, 1),
      Direction::J => (0, 1, 0),
      Direction::Jk => (0, 1, 1),
      Direction::I => (1, 0, 0),
      Direction::Ik => (1, 0, 1),
      Direction::Ij => (1, 1, 0),
      Direction::Invalid => return None,
    };
    Some(CoordIJK { i, j, k })
  }
}
