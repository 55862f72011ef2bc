use crate::types::Vec2d;

impl Vec2d {
  /// Creates a vector from its components.
  #[inline]
  #[must_use]
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  /// Euclidean length.
  #[inline]
  #[must_use]
  pub fn magnitude(&self) -> f64 {
    self.x.hypot(self.y)
  }
}
