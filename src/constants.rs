//! Grid, projection and bit layout constants.

use std::f64::consts;

// Angles
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * pi
pub const M_2PI: f64 = 2.0 * consts::PI;

/// Threshold below which distances and radii are treated as zero.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;

/// sqrt(3) / 2.0, also known as sin(60 degrees)
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
/// 1 / sin(60 degrees)
pub const M_RSIN60: f64 = 1.0 / M_SQRT3_2;

/// Square root of 7, the scale factor between consecutive resolutions.
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// 1 / sqrt(7)
pub const M_RSQRT7: f64 = 1.0 / M_SQRT7;

/// One third
pub const M_ONETHIRD: f64 = 1.0 / 3.0;
/// One seventh
pub const M_ONESEVENTH: f64 = 1.0 / 7.0;

/// Rotation between Class II and Class III grid axes, `asin(sqrt(3 / 28))`.
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Earth authalic radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;

/// Resolution 0 hex2d unit length (center to center) in gnomonic units.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;
/// 1 / `RES0_U_GNOMONIC`
pub const INV_RES0_U_GNOMONIC: f64 = 1.0 / RES0_U_GNOMONIC;

// Grid

/// Finest supported resolution. Resolutions run `0..=MAX_RES`.
pub const MAX_RES: i32 = 15;
/// Faces on the icosahedron.
pub const NUM_ICOSA_FACES: usize = 20;
/// Resolution 0 cells.
pub const NUM_BASE_CELLS: usize = 122;
/// Pentagons at every resolution.
pub const NUM_PENTAGONS: usize = 12;
/// Largest `ijk` component a resolution 0 coordinate may have on its face.
pub const MAX_FACE_COORD: i32 = 2;

// Bit layout

/// Bit offset of the mode field.
pub const MODE_OFFSET: u32 = 59;
/// Bit offset of the reserved bits between mode and resolution.
pub const RESERVED_OFFSET: u32 = 56;
/// Bit offset of the resolution field.
pub const RES_OFFSET: u32 = 52;
/// Bit offset of the base cell field.
pub const BC_OFFSET: u32 = 45;
/// Width of a single resolution digit.
pub const PER_DIGIT_OFFSET: u32 = 3;

/// 1 in the highest bit.
pub const HIGH_BIT_MASK: u64 = 1 << 63;
/// 1's in the 4 mode bits.
pub const MODE_MASK: u64 = 0b1111 << MODE_OFFSET;
/// 1's in the 3 reserved bits.
pub const RESERVED_MASK: u64 = 0b111 << RESERVED_OFFSET;
/// 1's in the 4 resolution bits.
pub const RES_MASK: u64 = 0b1111 << RES_OFFSET;
/// 1's in the 7 base cell bits.
pub const BC_MASK: u64 = 0b111_1111 << BC_OFFSET;
/// 1's in a single unshifted digit.
pub const DIGIT_MASK: u64 = 0b111;

/// Mode value of a cell index.
pub const CELL_MODE: u8 = 1;

/// Mode 0, resolution 0, base cell 0, every digit set to the unused sentinel.
pub const INDEX_INIT: u64 = 0x0000_1fff_ffff_ffff;
