use crate::types::{LatLng, Vec3d};

impl Vec3d {
  /// Creates a vector from its components.
  #[inline]
  #[must_use]
  pub const fn new(x: f64, y: f64, z: f64) -> Self {
    Self { x, y, z }
  }

  /// Point on the unit sphere for a geographic coordinate.
  #[inline]
  #[must_use]
  pub fn from_lat_lng(geo: &LatLng) -> Self {
    let r = geo.lat.cos();
    Self {
      x: geo.lng.cos() * r,
      y: geo.lng.sin() * r,
      z: geo.lat.sin(),
    }
  }

  /// Square of the Euclidean distance to `other`.
  #[inline]
  #[must_use]
  pub fn square_distance(&self, other: &Vec3d) -> f64 {
    let dx = self.x - other.x;
    let dy = self.y - other.y;
    let dz = self.z - other.z;
    dx * dx + dy * dy + dz * dz
  }
}
