//! Spherical geometry on geographic coordinates.

use crate::constants::{EARTH_RADIUS_KM, EPSILON, M_2PI, M_PI, M_PI_2};
use crate::types::LatLng;

/// Normalizes radians to a value in `[0, 2 * pi)`.
#[inline]
#[must_use]
pub(crate) fn pos_angle_rads(rads: f64) -> f64 {
  let mut tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  if rads >= M_2PI {
    tmp -= M_2PI;
  }
  tmp
}

/// Wraps longitude into `[-pi, pi]`.
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// Azimuth from `p1` to `p2`, in radians.
#[must_use]
pub(crate) fn azimuth_rads(p1: &LatLng, p2: &LatLng) -> f64 {
  let dlng = p2.lng - p1.lng;
  (p2.lat.cos() * dlng.sin()).atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * dlng.cos())
}

/// Point reached by travelling `distance` radians from `p1` along azimuth `az`.
#[must_use]
pub(crate) fn az_distance_point(p1: &LatLng, az: f64, distance: f64) -> LatLng {
  if distance < EPSILON {
    return *p1;
  }

  let az = pos_angle_rads(az);

  // Due north or south keeps the longitude.
  if az < EPSILON || (az - M_PI).abs() < EPSILON {
    let mut lat = if az < EPSILON { p1.lat + distance } else { p1.lat - distance };
    if (lat - M_PI_2).abs() < EPSILON {
      lat = M_PI_2;
      return LatLng::new(lat, 0.0);
    }
    if (lat + M_PI_2).abs() < EPSILON {
      lat = -M_PI_2;
      return LatLng::new(lat, 0.0);
    }
    return LatLng::new(lat, constrain_lng(p1.lng));
  }

  let sin_lat = (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
  let lat = sin_lat.asin();
  if (lat - M_PI_2).abs() < EPSILON {
    return LatLng::new(M_PI_2, 0.0);
  }
  if (lat + M_PI_2).abs() < EPSILON {
    return LatLng::new(-M_PI_2, 0.0);
  }

  let inv_cos_lat = 1.0 / lat.cos();
  let sin_lng = (az.sin() * distance.sin() * inv_cos_lat).clamp(-1.0, 1.0);
  let cos_lng = ((distance.cos() - p1.lat.sin() * lat.sin()) / p1.lat.cos() * inv_cos_lat).clamp(-1.0, 1.0);
  LatLng::new(lat, constrain_lng(p1.lng + sin_lng.atan2(cos_lng)))
}

/// Great circle (haversine) distance in radians between two coordinates.
#[must_use]
pub fn great_circle_distance_rads(a: &LatLng, b: &LatLng) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lng - a.lng) * 0.5).sin();
  let h = (sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng).clamp(0.0, 1.0);
  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great circle distance in kilometers.
#[must_use]
pub fn great_circle_distance_km(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

/// Great circle distance in meters.
#[must_use]
pub fn great_circle_distance_m(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_km(a, b) * 1000.0
}

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians.to_degrees()
}

#[cfg(test)]
mod tests {
  use super::*;

  const TOL: f64 = 1e-12;

  fn close(a: &LatLng, b: &LatLng, tol: f64) -> bool {
    (a.lat - b.lat).abs() < tol && (a.lng - b.lng).abs() < tol
  }

  #[test]
  fn pos_angle_wraps_into_one_turn() {
    assert!(pos_angle_rads(0.0).abs() < f64::EPSILON);
    assert!((pos_angle_rads(M_PI) - M_PI).abs() < f64::EPSILON);
    assert!(pos_angle_rads(M_2PI).abs() < f64::EPSILON);
    assert!((pos_angle_rads(-M_PI_2) - 1.5 * M_PI).abs() < TOL);
    assert!((pos_angle_rads(2.5 * M_PI) - 0.5 * M_PI).abs() < TOL);
  }

  #[test]
  fn constrain_lng_wraps_to_one_turn() {
    assert!(constrain_lng(0.0).abs() < f64::EPSILON);
    assert!((constrain_lng(M_PI) - M_PI).abs() < f64::EPSILON);
    assert!(constrain_lng(M_2PI).abs() < TOL);
    assert!((constrain_lng(M_PI + 0.5) - (0.5 - M_PI)).abs() < TOL);
    assert!((constrain_lng(-M_PI - 0.5) - (M_PI - 0.5)).abs() < TOL);
  }

  #[test]
  fn azimuth_cardinal_directions() {
    let origin = LatLng::new(0.0, 0.0);
    assert!(azimuth_rads(&origin, &LatLng::new(0.1, 0.0)).abs() < TOL);
    assert!((azimuth_rads(&origin, &LatLng::new(0.0, 0.1)) - M_PI_2).abs() < TOL);
    assert!((azimuth_rads(&origin, &LatLng::new(-0.1, 0.0)).abs() - M_PI).abs() < TOL);
  }

  #[test]
  fn az_distance_zero_is_identity() {
    let start = LatLng::from_degrees(15.0, 10.0);
    assert_eq!(az_distance_point(&start, 0.0, 0.0), start);
  }

  #[test]
  fn az_distance_due_north_reaches_pole() {
    let start = LatLng::new(0.0, 1.0);
    let out = az_distance_point(&start, 0.0, M_PI_2);
    assert!((out.lat - M_PI_2).abs() < TOL);
    assert!(out.lng.abs() < TOL);

    let south = az_distance_point(&start, M_PI, 0.25);
    assert!(close(&south, &LatLng::new(-0.25, 1.0), TOL));
  }

  #[test]
  fn az_distance_matches_azimuth_and_distance() {
    let start = LatLng::from_degrees(37.0, -122.0);
    let dest = az_distance_point(&start, 0.7, 0.05);
    assert!((great_circle_distance_rads(&start, &dest) - 0.05).abs() < 1e-9);
    assert!((azimuth_rads(&start, &dest) - 0.7).abs() < 1e-9);
  }

  #[test]
  fn great_circle_distance_quarter_turn() {
    let a = LatLng::new(0.0, 0.0);
    let b = LatLng::new(0.0, M_PI_2);
    assert!((great_circle_distance_rads(&a, &b) - M_PI_2).abs() < TOL);
    assert!((great_circle_distance_km(&a, &b) - M_PI_2 * EARTH_RADIUS_KM).abs() < 1e-6);
    assert!((great_circle_distance_m(&a, &b) - M_PI_2 * EARTH_RADIUS_KM * 1000.0).abs() < 1e-3);
  }

  #[test]
  fn degree_conversion() {
    assert!((degs_to_rads(180.0) - M_PI).abs() < f64::EPSILON);
    assert!((rads_to_degs(M_PI_2) - 90.0).abs() < TOL);
  }
}
