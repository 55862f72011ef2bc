//! Projection between geographic coordinates and face-local hex coordinates.
//!
//! A point is assigned to the icosahedron face whose center is nearest,
//! projected gnomonically onto that face's plane, and scaled to the
//! resolution's hex spacing. Odd (Class III) resolutions are additionally
//! rotated by the aperture-7 angle.

use tracing::trace;

use crate::constants::{EPSILON, INV_RES0_U_GNOMONIC, MAX_RES, M_AP7_ROT_RADS, M_RSQRT7, M_SQRT7, NUM_ICOSA_FACES, RES0_U_GNOMONIC};
use crate::coords::faces::{
  FaceOrientation, FACE_CENTER_GEO, FACE_CENTER_POINT, FACE_I_AXIS_AZIMUTH, FACE_NEIGHBORS, IJ_QUADRANT, JK_QUADRANT,
  KI_QUADRANT, MAX_DIM_BY_CII_RES, UNIT_SCALE_BY_CII_RES,
};
use crate::error::{GridError, GridResult};
use crate::latlng::{az_distance_point, azimuth_rads, pos_angle_rads};
use crate::types::{CoordIJK, FaceIJK, LatLng, Vec2d, Vec3d};

/// Result of checking a Class II coordinate against its face boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// Still on the original face.
  None,
  /// Moved onto a neighboring face.
  NewFace,
}

/// Whether `res` is a Class III (odd) resolution.
#[inline]
#[must_use]
pub(crate) const fn is_class_iii(res: i32) -> bool {
  res % 2 == 1
}

/// Face whose center is closest to `g`, with the squared chord distance to it.
/// Ties go to the lowest face number.
pub(crate) fn closest_face(g: &LatLng) -> (u8, f64) {
  let v3d = Vec3d::from_lat_lng(g);
  let mut face = 0u8;
  // Largest possible squared distance between two unit sphere points is 4.
  let mut sqd = 5.0;
  for (f, center) in FACE_CENTER_POINT.iter().enumerate() {
    let d = center.square_distance(&v3d);
    if d < sqd {
      face = f as u8;
      sqd = d;
    }
  }
  (face, sqd)
}

/// Projects `g` onto its closest face plane at resolution `res`.
pub(crate) fn geo_to_hex2d(g: &LatLng, res: i32) -> (u8, Vec2d) {
  let (face, sqd) = closest_face(g);

  // Chord distance back to great circle angle.
  let mut r = (1.0 - sqd / 2.0).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  let f = usize::from(face);
  let mut theta = pos_angle_rads(FACE_I_AXIS_AZIMUTH[f] - pos_angle_rads(azimuth_rads(&FACE_CENTER_GEO[f], g)));
  if is_class_iii(res) {
    theta = pos_angle_rads(theta - M_AP7_ROT_RADS);
  }

  r = r.tan() * INV_RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= M_SQRT7;
  }

  (face, Vec2d::new(r * theta.cos(), r * theta.sin()))
}

/// Inverse of [`geo_to_hex2d`]: the geographic point under `v` on `face`.
pub(crate) fn hex2d_to_geo(v: &Vec2d, face: u8, res: i32) -> LatLng {
  let f = usize::from(face);
  let mut r = v.magnitude();
  if r < EPSILON {
    return FACE_CENTER_GEO[f];
  }

  let mut theta = v.y.atan2(v.x);
  for _ in 0..res {
    r *= M_RSQRT7;
  }
  if is_class_iii(res) {
    theta = pos_angle_rads(theta + M_AP7_ROT_RADS);
  }

  r = (r * RES0_U_GNOMONIC).atan();
  let az = pos_angle_rads(FACE_I_AXIS_AZIMUTH[f] - theta);
  az_distance_point(&FACE_CENTER_GEO[f], az, r)
}

fn check_res(res: i32) -> GridResult<()> {
  if (0..=MAX_RES).contains(&res) {
    Ok(())
  } else {
    Err(GridError::UnsupportedResolution(res))
  }
}

/// Face and hex coordinates containing `g` at resolution `res`.
pub fn lat_lng_to_face_ijk(g: &LatLng, res: i32) -> GridResult<FaceIJK> {
  check_res(res)?;
  g.validate()?;
  let (face, v) = geo_to_hex2d(g, res);
  Ok(FaceIJK {
    face,
    coord: CoordIJK::from_hex2d(&v),
  })
}

/// Geographic center of the hex at `fijk` on a resolution `res` grid.
pub fn face_ijk_to_lat_lng(fijk: &FaceIJK, res: i32) -> GridResult<LatLng> {
  check_res(res)?;
  if usize::from(fijk.face) >= NUM_ICOSA_FACES {
    return Err(GridError::InvalidCoordinate);
  }
  Ok(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, res))
}

impl FaceIJK {
  /// Moves a Class II coordinate that lies past its face edge onto the
  /// neighboring face's system.
  ///
  /// `pent_leading_4` marks a pentagon whose leading digit is `I`; those
  /// coordinates sit in a missing sub-sequence and need an extra clockwise
  /// rotation about the pentagon vertex before translating.
  pub(crate) fn adjust_overage_class_ii(&mut self, res: i32, pent_leading_4: bool) -> Overage {
    let max_dim = MAX_DIM_BY_CII_RES[res as usize];
    let ijk = &mut self.coord;
    if ijk.i + ijk.j + ijk.k <= max_dim {
      return Overage::None;
    }

    let row = &FACE_NEIGHBORS[usize::from(self.face)];
    let orient: &FaceOrientation = if ijk.k > 0 {
      if ijk.j > 0 {
        &row[JK_QUADRANT]
      } else {
        if pent_leading_4 {
          let origin = CoordIJK::new(max_dim, 0, 0);
          let mut tmp = *ijk - origin;
          tmp.rotate60_cw();
          *ijk = tmp + origin;
        }
        &row[KI_QUADRANT]
      }
    } else {
      &row[IJ_QUADRANT]
    };

    trace!(from = self.face, to = orient.face, res, "coordinate crosses onto neighboring face");
    self.face = orient.face;
    for _ in 0..orient.ccw_rot60 {
      ijk.rotate60_ccw();
    }
    *ijk = (*ijk + orient.translate * UNIT_SCALE_BY_CII_RES[res as usize]).normalized();
    Overage::NewFace
  }
}
