//! Integer hex coordinates and aperture-7 grid steps.

use std::ops::{Add, Mul, Sub};

use crate::constants::{M_ONESEVENTH, M_ONETHIRD, M_RSIN60, M_SQRT3_2};
use crate::types::{CoordIJK, Direction, Vec2d};

impl CoordIJK {
  /// Creates a coordinate from its components, without normalizing.
  #[inline]
  #[must_use]
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }

  /// Rewrites the coordinate so every component is non-negative and at
  /// least one is zero.
  #[inline]
  pub fn normalize(&mut self) {
    if self.i < 0 {
      self.j -= self.i;
      self.k -= self.i;
      self.i = 0;
    }
    if self.j < 0 {
      self.i -= self.j;
      self.k -= self.j;
      self.j = 0;
    }
    if self.k < 0 {
      self.i -= self.k;
      self.j -= self.k;
      self.k = 0;
    }

    let min = self.i.min(self.j).min(self.k);
    if min > 0 {
      self.i -= min;
      self.j -= min;
      self.k -= min;
    }
  }

  /// Normalized copy.
  #[inline]
  #[must_use]
  pub fn normalized(mut self) -> Self {
    self.normalize();
    self
  }

  /// Digit of a unit vector or the zero vector. Anything else maps to
  /// [`Direction::Invalid`].
  #[must_use]
  pub fn to_digit(self) -> Direction {
    let c = self.normalized();
    Direction::CHILDREN
      .into_iter()
      .find(|d| d.unit_vector() == Some(c))
      .unwrap_or(Direction::Invalid)
  }

  /// Moves one cell in `digit` direction. Center and `Invalid` leave the
  /// coordinate unchanged.
  #[inline]
  pub fn neighbor(&mut self, digit: Direction) {
    if digit == Direction::Center {
      return;
    }
    if let Some(unit) = digit.unit_vector() {
      *self = (*self + unit).normalized();
    }
  }

  /// Containing hex for a 2D Cartesian point on a face plane.
  #[must_use]
  pub fn from_hex2d(v: &Vec2d) -> Self {
    let a1 = v.x.abs();
    let a2 = v.y.abs();

    // Reverse the 60 degree shear, then quantize.
    let x2 = a2 * M_RSIN60;
    let x1 = a1 + x2 / 2.0;

    let m1 = x1 as i32;
    let m2 = x2 as i32;

    let r1 = x1 - f64::from(m1);
    let r2 = x2 - f64::from(m2);

    let (mut i, mut j);
    if r1 < 0.5 {
      if r1 < M_ONETHIRD {
        i = m1;
        j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
      } else {
        j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
        i = if (1.0 - r1) <= r2 && r2 < (2.0 * r1) { m1 + 1 } else { m1 };
      }
    } else if r1 < 2.0 * M_ONETHIRD {
      j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
      i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
    } else {
      i = m1 + 1;
      j = if r2 < r1 / 2.0 { m2 } else { m2 + 1 };
    }

    // Fold back across the axes.
    if v.x < 0.0 {
      if j % 2 == 0 {
        let axis_i = j / 2;
        i -= 2 * (i - axis_i);
      } else {
        let axis_i = (j + 1) / 2;
        i -= 2 * (i - axis_i) + 1;
      }
    }
    if v.y < 0.0 {
      i -= (2 * j + 1) / 2;
      j = -j;
    }

    Self::new(i, j, 0).normalized()
  }

  /// Center of this hex as a 2D Cartesian point on the face plane.
  #[inline]
  #[must_use]
  pub fn to_hex2d(&self) -> Vec2d {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    Vec2d::new(i - 0.5 * j, j * M_SQRT3_2)
  }

  /// Parent position in a counter-clockwise aperture 7 grid (Class III child).
  #[inline]
  pub fn up_ap7(&mut self) {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    *self = Self::new(
      ((3.0 * i - j) * M_ONESEVENTH).round() as i32,
      ((i + 2.0 * j) * M_ONESEVENTH).round() as i32,
      0,
    )
    .normalized();
  }

  /// Parent position in a clockwise aperture 7 grid (Class II child).
  #[inline]
  pub fn up_ap7r(&mut self) {
    let i = f64::from(self.i - self.k);
    let j = f64::from(self.j - self.k);
    *self = Self::new(
      ((2.0 * i + j) * M_ONESEVENTH).round() as i32,
      ((3.0 * j - i) * M_ONESEVENTH).round() as i32,
      0,
    )
    .normalized();
  }

  /// Center child position in a counter-clockwise aperture 7 grid.
  #[inline]
  pub fn down_ap7(&mut self) {
    self.down_by([Self::new(3, 0, 1), Self::new(1, 3, 0), Self::new(0, 1, 3)]);
  }

  /// Center child position in a clockwise aperture 7 grid.
  #[inline]
  pub fn down_ap7r(&mut self) {
    self.down_by([Self::new(3, 1, 0), Self::new(0, 3, 1), Self::new(1, 0, 3)]);
  }

  fn down_by(&mut self, [i_vec, j_vec, k_vec]: [CoordIJK; 3]) {
    *self = (i_vec * self.i + j_vec * self.j + k_vec * self.k).normalized();
  }

  /// Rotates the coordinate 60 degrees counter-clockwise.
  #[inline]
  pub fn rotate60_ccw(&mut self) {
    let (i, j, k) = (self.i, self.j, self.k);
    *self = (Self::new(1, 1, 0) * i + Self::new(0, 1, 1) * j + Self::new(1, 0, 1) * k).normalized();
  }

  /// Rotates the coordinate 60 degrees clockwise.
  #[inline]
  pub fn rotate60_cw(&mut self) {
    let (i, j, k) = (self.i, self.j, self.k);
    *self = (Self::new(1, 0, 1) * i + Self::new(1, 1, 0) * j + Self::new(0, 1, 1) * k).normalized();
  }

  /// Grid distance between two coordinates on the same plane.
  #[must_use]
  pub fn distance(&self, other: &CoordIJK) -> i32 {
    let d = (*self - *other).normalized();
    d.i.abs().max(d.j.abs()).max(d.k.abs())
  }
}

impl Add for CoordIJK {
  type Output = CoordIJK;

  #[inline]
  fn add(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK::new(self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
  }
}

impl Sub for CoordIJK {
  type Output = CoordIJK;

  #[inline]
  fn sub(self, rhs: CoordIJK) -> CoordIJK {
    CoordIJK::new(self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
  }
}

impl Mul<i32> for CoordIJK {
  type Output = CoordIJK;

  #[inline]
  fn mul(self, factor: i32) -> CoordIJK {
    CoordIJK::new(self.i * factor, self.j * factor, self.k * factor)
  }
}
