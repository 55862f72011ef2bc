//! Static geometry of the 20 icosahedron faces.
//!
//! Every table here is immutable and indexed by face number.

use crate::constants::{MAX_RES, NUM_ICOSA_FACES};
use crate::types::{CoordIJK, LatLng, Vec3d};

/// Where a neighboring face sits relative to a face's own `ijk` system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FaceOrientation {
  /// Neighboring face.
  pub(crate) face: u8,
  /// Resolution 0 translation into the neighbor's system.
  pub(crate) translate: CoordIJK,
  /// Counter-clockwise 60 degree rotations into the neighbor's system.
  pub(crate) ccw_rot60: u8,
}

const fn orient(face: u8, i: i32, j: i32, k: i32, ccw_rot60: u8) -> FaceOrientation {
  FaceOrientation {
    face,
    translate: CoordIJK::new(i, j, k),
    ccw_rot60,
  }
}

/// Quadrant positions in [`FACE_NEIGHBORS`] rows. Slot 0 is the face itself.
pub(crate) const IJ_QUADRANT: usize = 1;
pub(crate) const KI_QUADRANT: usize = 2;
pub(crate) const JK_QUADRANT: usize = 3;

/// Largest `i + j + k` still on a face, per Class II resolution. Odd
/// entries are unused since only Class II resolutions are looked up.
#[rustfmt::skip]
pub(crate) static MAX_DIM_BY_CII_RES: [i32; (MAX_RES + 2) as usize] = [
  2, -1, 14, -1, 98, -1, 686, -1, 4802, -1, 33614, -1, 235_298, -1, 1_647_086, -1, 11_529_602,
];

/// Length of a resolution 0 unit vector, per Class II resolution.
#[rustfmt::skip]
pub(crate) static UNIT_SCALE_BY_CII_RES: [i32; (MAX_RES + 2) as usize] = [
  1, -1, 7, -1, 49, -1, 343, -1, 2401, -1, 16807, -1, 117_649, -1, 823_543, -1, 5_764_801,
];

/// Face centers as geographic coordinates, in radians.
#[rustfmt::skip]
pub(crate) static FACE_CENTER_GEO: [LatLng; NUM_ICOSA_FACES] = [
  LatLng::new(0.803_582_649_718_989_94, 1.248_397_419_617_396),
  LatLng::new(1.307_747_883_455_638_2, 2.536_945_009_877_921),
  LatLng::new(1.054_751_253_523_952, -1.347_517_358_900_396_6),
  LatLng::new(0.600_191_595_538_186_8, -0.450_603_909_469_755_75),
  LatLng::new(0.491_715_428_198_773_87, 0.401_988_202_911_306_94),
  LatLng::new(0.172_745_327_415_618_7, 1.678_146_885_280_433_7),
  LatLng::new(0.605_929_321_571_350_7, 2.953_923_329_812_411_6),
  LatLng::new(0.427_370_518_328_979_64, -1.888_876_200_336_285_4),
  LatLng::new(-0.079_066_118_549_212_83, -0.733_429_513_380_867_74),
  LatLng::new(-0.230_961_644_455_383_64, 0.506_495_587_332_349),
  LatLng::new(0.079_066_118_549_212_83, 2.408_163_140_208_925_5),
  LatLng::new(0.230_961_644_455_383_64, -2.635_097_066_257_444),
  LatLng::new(-0.172_745_327_415_618_7, -1.463_445_768_309_359_5),
  LatLng::new(-0.605_929_321_571_350_7, -0.187_669_323_777_381_62),
  LatLng::new(-0.427_370_518_328_979_64, 1.252_716_453_253_508),
  LatLng::new(-0.600_191_595_538_186_8, 2.690_988_744_120_037_5),
  LatLng::new(-0.491_715_428_198_773_87, -2.739_604_450_678_486_3),
  LatLng::new(-0.803_582_649_718_989_94, -1.893_195_233_972_397),
  LatLng::new(-1.307_747_883_455_638_2, -0.604_647_643_711_872_1),
  LatLng::new(-1.054_751_253_523_952, 1.794_075_294_689_396_6),
];

/// Face centers as points on the unit sphere.
#[rustfmt::skip]
pub(crate) static FACE_CENTER_POINT: [Vec3d; NUM_ICOSA_FACES] = [
  Vec3d::new(0.219_930_779_140_460_6, 0.658_369_178_027_499_6, 0.719_847_537_892_618_2),
  Vec3d::new(-0.213_923_483_450_142_1, 0.147_817_182_955_070_3, 0.965_601_793_521_420_5),
  Vec3d::new(0.109_262_527_878_479_7, -0.481_195_157_287_321, 0.869_777_512_128_725_3),
  Vec3d::new(0.742_856_730_158_679_1, -0.359_394_167_827_802_8, 0.564_800_593_651_703_3),
  Vec3d::new(0.811_253_470_914_096_9, 0.344_895_323_763_938_4, 0.472_138_773_641_393),
  Vec3d::new(-0.105_549_814_961_392_1, 0.979_445_729_641_141_3, 0.171_887_461_000_936_5),
  Vec3d::new(-0.807_540_757_997_009_2, 0.153_355_248_589_881_8, 0.569_526_199_488_268_8),
  Vec3d::new(-0.284_614_806_978_790_7, -0.864_408_097_265_420_6, 0.414_479_255_247_354),
  Vec3d::new(0.740_562_147_385_448_2, -0.667_329_956_456_552_4, -0.078_983_764_632_673_77),
  Vec3d::new(0.851_230_398_647_429_3, 0.472_234_378_858_268_1, -0.228_913_738_868_780_8),
  Vec3d::new(-0.740_562_147_385_448_1, 0.667_329_956_456_552_4, 0.078_983_764_632_673_77),
  Vec3d::new(-0.851_230_398_647_429_2, -0.472_234_378_858_268_2, 0.228_913_738_868_780_8),
  Vec3d::new(0.105_549_814_961_391_9, -0.979_445_729_641_141_3, -0.171_887_461_000_936_5),
  Vec3d::new(0.807_540_757_997_009_2, -0.153_355_248_589_881_9, -0.569_526_199_488_268_8),
  Vec3d::new(0.284_614_806_978_790_8, 0.864_408_097_265_420_4, -0.414_479_255_247_354),
  Vec3d::new(-0.742_856_730_158_679_1, 0.359_394_167_827_802_7, -0.564_800_593_651_703_3),
  Vec3d::new(-0.811_253_470_914_097_1, -0.344_895_323_763_938_2, -0.472_138_773_641_393),
  Vec3d::new(-0.219_930_779_140_460_7, -0.658_369_178_027_499_6, -0.719_847_537_892_618_2),
  Vec3d::new(0.213_923_483_450_142, -0.147_817_182_955_070_4, -0.965_601_793_521_420_5),
  Vec3d::new(-0.109_262_527_878_479_6, 0.481_195_157_287_321, -0.869_777_512_128_725_3),
];

/// Azimuth from each face center to the vertex its Class II `i` axis points at.
#[rustfmt::skip]
pub(crate) static FACE_I_AXIS_AZIMUTH: [f64; NUM_ICOSA_FACES] = [
  5.619_958_268_523_94, // 0
  5.760_339_081_714_187, // 1
  0.780_213_654_393_430_1, // 2
  0.430_469_363_979_999_9, // 3
  6.130_269_123_335_111, // 4
  2.692_877_706_530_643, // 5
  2.982_963_003_477_244, // 6
  3.532_912_002_790_141, // 7
  3.494_305_004_259_568, // 8
  3.003_214_169_499_538_4, // 9
  5.930_472_956_509_811_6, // 10
  0.138_378_484_090_254_85, // 11
  0.448_714_947_059_150_36, // 12
  0.158_629_650_112_549_36, // 13
  5.891_865_957_979_238_5, // 14
  2.711_123_289_609_793_3, // 15
  3.294_508_837_434_268, // 16
  3.804_819_692_245_44, // 17
  3.664_438_879_055_192_4, // 18
  2.361_378_999_196_363, // 19
];

#[rustfmt::skip]
pub(crate) static FACE_NEIGHBORS: [[FaceOrientation; 4]; NUM_ICOSA_FACES] = [
  [orient(0, 0, 0, 0, 0), orient(4, 2, 0, 2, 1), orient(1, 2, 2, 0, 5), orient(5, 0, 2, 2, 3)], // 0
  [orient(1, 0, 0, 0, 0), orient(0, 2, 0, 2, 1), orient(2, 2, 2, 0, 5), orient(6, 0, 2, 2, 3)], // 1
  [orient(2, 0, 0, 0, 0), orient(1, 2, 0, 2, 1), orient(3, 2, 2, 0, 5), orient(7, 0, 2, 2, 3)], // 2
  [orient(3, 0, 0, 0, 0), orient(2, 2, 0, 2, 1), orient(4, 2, 2, 0, 5), orient(8, 0, 2, 2, 3)], // 3
  [orient(4, 0, 0, 0, 0), orient(3, 2, 0, 2, 1), orient(0, 2, 2, 0, 5), orient(9, 0, 2, 2, 3)], // 4
  [orient(5, 0, 0, 0, 0), orient(10, 2, 2, 0, 3), orient(14, 2, 0, 2, 3), orient(0, 0, 2, 2, 3)], // 5
  [orient(6, 0, 0, 0, 0), orient(11, 2, 2, 0, 3), orient(10, 2, 0, 2, 3), orient(1, 0, 2, 2, 3)], // 6
  [orient(7, 0, 0, 0, 0), orient(12, 2, 2, 0, 3), orient(11, 2, 0, 2, 3), orient(2, 0, 2, 2, 3)], // 7
  [orient(8, 0, 0, 0, 0), orient(13, 2, 2, 0, 3), orient(12, 2, 0, 2, 3), orient(3, 0, 2, 2, 3)], // 8
  [orient(9, 0, 0, 0, 0), orient(14, 2, 2, 0, 3), orient(13, 2, 0, 2, 3), orient(4, 0, 2, 2, 3)], // 9
  [orient(10, 0, 0, 0, 0), orient(5, 2, 2, 0, 3), orient(6, 2, 0, 2, 3), orient(15, 0, 2, 2, 3)], // 10
  [orient(11, 0, 0, 0, 0), orient(6, 2, 2, 0, 3), orient(7, 2, 0, 2, 3), orient(16, 0, 2, 2, 3)], // 11
  [orient(12, 0, 0, 0, 0), orient(7, 2, 2, 0, 3), orient(8, 2, 0, 2, 3), orient(17, 0, 2, 2, 3)], // 12
  [orient(13, 0, 0, 0, 0), orient(8, 2, 2, 0, 3), orient(9, 2, 0, 2, 3), orient(18, 0, 2, 2, 3)], // 13
  [orient(14, 0, 0, 0, 0), orient(9, 2, 2, 0, 3), orient(5, 2, 0, 2, 3), orient(19, 0, 2, 2, 3)], // 14
  [orient(15, 0, 0, 0, 0), orient(16, 2, 0, 2, 1), orient(19, 2, 2, 0, 5), orient(10, 0, 2, 2, 3)], // 15
  [orient(16, 0, 0, 0, 0), orient(17, 2, 0, 2, 1), orient(15, 2, 2, 0, 5), orient(11, 0, 2, 2, 3)], // 16
  [orient(17, 0, 0, 0, 0), orient(18, 2, 0, 2, 1), orient(16, 2, 2, 0, 5), orient(12, 0, 2, 2, 3)], // 17
  [orient(18, 0, 0, 0, 0), orient(19, 2, 0, 2, 1), orient(17, 2, 2, 0, 5), orient(13, 0, 2, 2, 3)], // 18
  [orient(19, 0, 0, 0, 0), orient(15, 2, 0, 2, 1), orient(18, 2, 2, 0, 5), orient(14, 0, 2, 2, 3)], // 19
];
