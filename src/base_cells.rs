//! Resolution 0 base cells and the pentagon policy table.
//!
//! There are 122 base cells. Twelve of them are pentagons, and each
//! pentagon omits the same child digit at every resolution. Code that needs
//! to treat pentagons specially looks up their [`PentagonPolicy`].

use crate::constants::{MAX_FACE_COORD, NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::types::{CoordIJK, Direction, FaceIJK};

/// Marks a missing entry in the neighbor tables. Only pentagons have one,
/// in their deleted direction.
pub(crate) const INVALID_BASE_CELL: u8 = 127;

/// How a pentagon base cell deviates from a hexagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PentagonPolicy {
  /// Child digit that does not exist under this pentagon, at every resolution.
  pub deleted_digit: Direction,
  /// Polar pentagons have every neighbor oriented towards them.
  pub polar: bool,
  /// Faces on which the pentagon's coordinate system is offset clockwise.
  pub cw_offset_faces: Option<[u8; 2]>,
}

/// A resolution 0 cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseCell {
  /// Home face and normalized `ijk` on it.
  pub home: FaceIJK,
  /// Present only for pentagons.
  pub pentagon: Option<PentagonPolicy>,
}

impl BaseCell {
  const fn hexagon(face: u8, i: i32, j: i32, k: i32) -> Self {
    Self {
      home: FaceIJK {
        face,
        coord: CoordIJK::new(i, j, k),
      },
      pentagon: None,
    }
  }

  const fn pentagon(face: u8, i: i32, j: i32, k: i32, cw_offset_faces: [u8; 2]) -> Self {
    Self {
      home: FaceIJK {
        face,
        coord: CoordIJK::new(i, j, k),
      },
      pentagon: Some(PentagonPolicy {
        deleted_digit: Direction::K,
        polar: false,
        cw_offset_faces: Some(cw_offset_faces),
      }),
    }
  }

  const fn polar_pentagon(face: u8, i: i32, j: i32, k: i32) -> Self {
    Self {
      home: FaceIJK {
        face,
        coord: CoordIJK::new(i, j, k),
      },
      pentagon: Some(PentagonPolicy {
        deleted_digit: Direction::K,
        polar: true,
        cw_offset_faces: None,
      }),
    }
  }

  /// Whether this base cell is a pentagon.
  #[inline]
  #[must_use]
  pub const fn is_pentagon(&self) -> bool {
    self.pentagon.is_some()
  }
}

/// Base cell reached from each base cell in each digit direction.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBORS: [[u8; 7]; NUM_BASE_CELLS] = [
  [0, 1, 5, 2, 4, 3, 8], // 0
  [1, 7, 6, 9, 0, 3, 2],
  [2, 6, 10, 11, 0, 1, 5],
  [3, 13, 1, 7, 4, 12, 0],
  [4, INVALID_BASE_CELL, 15, 8, 3, 0, 12],
  [5, 2, 18, 10, 8, 0, 16],
  [6, 14, 11, 17, 1, 9, 2],
  [7, 21, 9, 19, 3, 13, 1],
  [8, 5, 22, 16, 4, 0, 15],
  [9, 19, 14, 20, 1, 7, 6],
  [10, 11, 24, 23, 5, 2, 18], // 10
  [11, 17, 23, 25, 2, 6, 10],
  [12, 28, 13, 26, 4, 15, 3],
  [13, 26, 21, 29, 3, 12, 7],
  [14, INVALID_BASE_CELL, 17, 27, 9, 20, 6],
  [15, 22, 28, 31, 4, 8, 12],
  [16, 18, 33, 30, 8, 5, 22],
  [17, 11, 14, 6, 35, 25, 27],
  [18, 24, 30, 32, 5, 10, 16],
  [19, 34, 20, 36, 7, 21, 9],
  [20, 14, 19, 9, 40, 27, 36], // 20
  [21, 38, 19, 34, 13, 29, 7],
  [22, 16, 41, 33, 15, 8, 31],
  [23, 24, 11, 10, 39, 37, 25],
  [24, INVALID_BASE_CELL, 32, 37, 10, 23, 18],
  [25, 23, 17, 11, 45, 39, 35],
  [26, 42, 29, 43, 12, 28, 13],
  [27, 40, 35, 46, 14, 20, 17],
  [28, 31, 42, 44, 12, 15, 26],
  [29, 43, 38, 47, 13, 26, 21],
  [30, 32, 48, 50, 16, 18, 33], // 30
  [31, 41, 44, 53, 15, 22, 28],
  [32, 30, 24, 18, 52, 50, 37],
  [33, 30, 49, 48, 22, 16, 41],
  [34, 19, 38, 21, 54, 36, 51],
  [35, 46, 45, 56, 17, 27, 25],
  [36, 20, 34, 19, 55, 40, 54],
  [37, 39, 52, 57, 24, 23, 32],
  [38, INVALID_BASE_CELL, 34, 51, 29, 47, 21],
  [39, 37, 25, 23, 59, 57, 45],
  [40, 27, 36, 20, 60, 46, 55], // 40
  [41, 49, 53, 61, 22, 33, 31],
  [42, 58, 43, 62, 28, 44, 26],
  [43, 62, 47, 64, 26, 42, 29],
  [44, 53, 58, 65, 28, 31, 42],
  [45, 39, 35, 25, 63, 59, 56],
  [46, 60, 56, 68, 27, 40, 35],
  [47, 38, 43, 29, 69, 51, 64],
  [48, 49, 30, 33, 67, 66, 50],
  [49, INVALID_BASE_CELL, 61, 66, 33, 48, 41],
  [50, 48, 32, 30, 70, 67, 52], // 50
  [51, 69, 54, 71, 38, 47, 34],
  [52, 57, 70, 74, 32, 37, 50],
  [53, 61, 65, 75, 31, 41, 44],
  [54, 71, 55, 73, 34, 51, 36],
  [55, 40, 54, 36, 72, 60, 73],
  [56, 68, 63, 77, 35, 46, 45],
  [57, 59, 74, 78, 37, 39, 52],
  [58, INVALID_BASE_CELL, 62, 76, 44, 65, 42],
  [59, 63, 78, 79, 39, 45, 57],
  [60, 72, 68, 80, 40, 55, 46], // 60
  [61, 53, 49, 41, 81, 75, 66],
  [62, 43, 58, 42, 82, 64, 76],
  [63, INVALID_BASE_CELL, 56, 45, 79, 59, 77],
  [64, 47, 62, 43, 84, 69, 82],
  [65, 58, 53, 44, 86, 76, 75],
  [66, 67, 81, 85, 49, 48, 61],
  [67, 66, 50, 48, 87, 85, 70],
  [68, 56, 60, 46, 90, 77, 80],
  [69, 51, 64, 47, 89, 71, 84],
  [70, 67, 52, 50, 83, 87, 74], // 70
  [71, 89, 73, 91, 51, 69, 54],
  [72, INVALID_BASE_CELL, 73, 55, 80, 60, 88],
  [73, 91, 72, 88, 54, 71, 55],
  [74, 78, 83, 92, 52, 57, 70],
  [75, 65, 61, 53, 94, 86, 81],
  [76, 86, 82, 96, 58, 65, 62],
  [77, 63, 68, 56, 93, 79, 90],
  [78, 74, 59, 57, 95, 92, 79],
  [79, 78, 63, 59, 93, 95, 77],
  [80, 68, 72, 60, 99, 90, 88], // 80
  [81, 85, 94, 101, 61, 66, 75],
  [82, 96, 84, 98, 62, 76, 64],
  [83, INVALID_BASE_CELL, 74, 70, 100, 87, 92],
  [84, 69, 82, 64, 97, 89, 98],
  [85, 87, 101, 102, 66, 67, 81],
  [86, 76, 75, 65, 104, 96, 94],
  [87, 83, 102, 100, 67, 70, 85],
  [88, 72, 91, 73, 99, 80, 105],
  [89, 97, 91, 103, 69, 84, 71],
  [90, 77, 80, 68, 106, 93, 99], // 90
  [91, 73, 89, 71, 105, 88, 103],
  [92, 83, 78, 74, 108, 100, 95],
  [93, 79, 90, 77, 109, 95, 106],
  [94, 86, 81, 75, 107, 104, 101],
  [95, 92, 79, 78, 109, 108, 93],
  [96, 104, 98, 110, 76, 86, 82],
  [97, INVALID_BASE_CELL, 98, 84, 103, 89, 111],
  [98, 110, 97, 111, 82, 96, 84],
  [99, 80, 105, 88, 106, 90, 113],
  [100, 102, 83, 87, 108, 114, 92], // 100
  [101, 102, 107, 112, 81, 85, 94],
  [102, 101, 87, 85, 114, 112, 100],
  [103, 91, 97, 89, 116, 105, 111],
  [104, 107, 110, 115, 86, 94, 96],
  [105, 88, 103, 91, 113, 99, 116],
  [106, 93, 99, 90, 117, 109, 113],
  [107, INVALID_BASE_CELL, 101, 94, 115, 104, 112],
  [108, 100, 95, 92, 118, 114, 109],
  [109, 108, 93, 95, 117, 118, 106],
  [110, 98, 104, 96, 119, 111, 115], // 110
  [111, 97, 110, 98, 116, 103, 119],
  [112, 107, 102, 101, 120, 115, 114],
  [113, 99, 116, 105, 117, 106, 121],
  [114, 112, 100, 102, 118, 120, 108],
  [115, 110, 107, 104, 120, 119, 112],
  [116, 103, 119, 111, 113, 105, 121],
  [117, INVALID_BASE_CELL, 109, 118, 113, 121, 106],
  [118, 120, 108, 114, 117, 121, 109],
  [119, 111, 115, 110, 121, 116, 120],
  [120, 115, 114, 112, 121, 119, 118], // 120
  [121, 116, 120, 119, 117, 113, 118],
];

/// Counter-clockwise 60 degree rotations needed to enter each neighbor in
/// [`BASE_CELL_NEIGHBORS`]. The entry for a pentagon's deleted direction is
/// `0` and never read.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBOR_ROTATIONS: [[u8; 7]; NUM_BASE_CELLS] = [
  [0, 5, 0, 0, 1, 5, 1], // 0
  [0, 0, 1, 0, 1, 0, 1],
  [0, 0, 0, 0, 0, 5, 0],
  [0, 5, 0, 0, 2, 5, 1],
  [0, 0, 1, 0, 3, 4, 2],
  [0, 0, 1, 0, 1, 0, 1],
  [0, 0, 0, 3, 5, 5, 0],
  [0, 0, 0, 0, 0, 5, 0],
  [0, 5, 0, 0, 0, 5, 1],
  [0, 0, 1, 3, 0, 0, 1],
  [0, 0, 1, 3, 0, 0, 1], // 10
  [0, 3, 3, 3, 0, 0, 0],
  [0, 5, 0, 0, 3, 5, 1],
  [0, 0, 1, 0, 1, 0, 1],
  [0, 0, 3, 0, 5, 2, 0],
  [0, 5, 0, 0, 4, 5, 1],
  [0, 0, 0, 0, 0, 5, 0],
  [0, 3, 3, 3, 3, 0, 3],
  [0, 0, 0, 3, 5, 5, 0],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 3, 3, 3, 0, 3, 0], // 20
  [0, 0, 0, 3, 5, 5, 0],
  [0, 0, 1, 0, 1, 0, 1],
  [0, 3, 3, 3, 0, 3, 0],
  [0, 0, 3, 0, 5, 2, 0],
  [0, 0, 0, 3, 0, 0, 3],
  [0, 0, 0, 0, 0, 5, 0],
  [0, 3, 0, 0, 0, 3, 3],
  [0, 0, 1, 0, 1, 0, 1],
  [0, 0, 1, 3, 0, 0, 1],
  [0, 3, 3, 3, 0, 0, 0], // 30
  [0, 0, 0, 0, 0, 5, 0],
  [0, 3, 3, 3, 3, 0, 3],
  [0, 0, 1, 3, 0, 0, 1],
  [0, 3, 3, 3, 3, 0, 3],
  [0, 0, 3, 0, 3, 0, 3],
  [0, 0, 0, 3, 0, 0, 3],
  [0, 3, 0, 0, 0, 3, 3],
  [0, 0, 3, 0, 5, 2, 0],
  [0, 3, 0, 0, 3, 3, 0],
  [0, 3, 0, 0, 3, 3, 0], // 40
  [0, 0, 0, 3, 5, 5, 0],
  [0, 0, 0, 3, 5, 5, 0],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 1, 3, 0, 0, 1],
  [0, 0, 3, 0, 0, 3, 3],
  [0, 0, 0, 3, 0, 3, 0],
  [0, 3, 3, 3, 0, 3, 0],
  [0, 3, 3, 3, 0, 3, 0],
  [0, 0, 3, 0, 5, 2, 0],
  [0, 0, 0, 3, 0, 0, 3], // 50
  [0, 3, 0, 0, 0, 3, 3],
  [0, 0, 3, 0, 3, 0, 3],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 3, 0, 3, 0, 3],
  [0, 0, 3, 0, 0, 3, 3],
  [0, 3, 3, 3, 0, 0, 3],
  [0, 0, 0, 3, 0, 3, 0],
  [0, 0, 3, 0, 5, 2, 0],
  [0, 3, 3, 3, 3, 3, 0],
  [0, 3, 3, 3, 3, 3, 0], // 60
  [0, 3, 3, 3, 3, 0, 3],
  [0, 3, 3, 3, 3, 0, 3],
  [0, 0, 3, 0, 5, 2, 0],
  [0, 0, 0, 3, 0, 0, 3],
  [0, 3, 3, 3, 0, 3, 0],
  [0, 3, 0, 0, 0, 3, 3],
  [0, 3, 0, 0, 3, 3, 0],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 3, 0, 0, 3, 3, 0],
  [0, 0, 3, 0, 0, 3, 3], // 70
  [0, 0, 0, 3, 0, 3, 0],
  [0, 0, 3, 0, 5, 2, 0],
  [0, 3, 3, 3, 0, 0, 3],
  [0, 3, 3, 3, 0, 0, 3],
  [0, 0, 0, 3, 0, 0, 3],
  [0, 3, 0, 0, 0, 3, 3],
  [0, 0, 0, 3, 0, 5, 0],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 1, 3, 1, 0, 1],
  [0, 0, 1, 3, 1, 0, 1], // 80
  [0, 0, 3, 0, 3, 0, 3],
  [0, 0, 3, 0, 3, 0, 3],
  [0, 0, 3, 0, 5, 2, 0],
  [0, 0, 3, 0, 0, 3, 3],
  [0, 0, 0, 3, 0, 3, 0],
  [0, 3, 0, 0, 3, 3, 0],
  [0, 3, 3, 3, 3, 3, 0],
  [0, 0, 0, 3, 0, 5, 0],
  [0, 3, 3, 3, 3, 3, 0],
  [0, 0, 0, 0, 0, 0, 1], // 90
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 0, 3, 0, 5, 0],
  [0, 5, 0, 0, 5, 5, 0],
  [0, 0, 3, 0, 0, 3, 3],
  [0, 0, 0, 0, 0, 0, 1],
  [0, 0, 0, 3, 0, 3, 0],
  [0, 0, 3, 0, 5, 2, 0],
  [0, 3, 3, 3, 0, 0, 3],
  [0, 5, 0, 0, 5, 5, 0],
  [0, 0, 1, 3, 1, 0, 1], // 100
  [0, 3, 3, 3, 0, 0, 3],
  [0, 3, 3, 3, 0, 0, 0],
  [0, 0, 1, 3, 1, 0, 1],
  [0, 3, 3, 3, 3, 3, 0],
  [0, 0, 0, 0, 0, 0, 1],
  [0, 0, 1, 0, 3, 5, 1],
  [0, 0, 3, 0, 5, 2, 0],
  [0, 5, 0, 0, 5, 5, 0],
  [0, 0, 1, 0, 4, 5, 1],
  [0, 3, 3, 3, 0, 0, 0], // 110
  [0, 0, 0, 3, 0, 5, 0],
  [0, 0, 0, 3, 0, 5, 0],
  [0, 0, 1, 0, 2, 5, 1],
  [0, 0, 0, 0, 0, 0, 1],
  [0, 0, 1, 3, 1, 0, 1],
  [0, 5, 0, 0, 5, 5, 0],
  [0, 0, 1, 0, 3, 4, 2],
  [0, 0, 1, 0, 0, 5, 1],
  [0, 0, 0, 0, 0, 0, 1],
  [0, 5, 0, 0, 5, 5, 0], // 120
  [0, 0, 1, 0, 1, 5, 1],
];

#[rustfmt::skip]
pub(crate) static BASE_CELLS: [BaseCell; NUM_BASE_CELLS] = [
  BaseCell::hexagon(1, 1, 0, 0), // 0
  BaseCell::hexagon(2, 1, 1, 0),
  BaseCell::hexagon(1, 0, 0, 0),
  BaseCell::hexagon(2, 1, 0, 0),
  BaseCell::polar_pentagon(0, 2, 0, 0), // 4
  BaseCell::hexagon(1, 1, 1, 0),
  BaseCell::hexagon(1, 0, 0, 1),
  BaseCell::hexagon(2, 0, 0, 0),
  BaseCell::hexagon(0, 1, 0, 0),
  BaseCell::hexagon(2, 0, 1, 0),
  BaseCell::hexagon(1, 0, 1, 0), // 10
  BaseCell::hexagon(1, 0, 1, 1),
  BaseCell::hexagon(3, 1, 0, 0),
  BaseCell::hexagon(3, 1, 1, 0),
  BaseCell::pentagon(11, 2, 0, 0, [2, 6]), // 14
  BaseCell::hexagon(4, 1, 0, 0),
  BaseCell::hexagon(0, 0, 0, 0),
  BaseCell::hexagon(6, 0, 1, 0),
  BaseCell::hexagon(0, 0, 0, 1),
  BaseCell::hexagon(2, 0, 1, 1),
  BaseCell::hexagon(7, 0, 0, 1), // 20
  BaseCell::hexagon(2, 0, 0, 1),
  BaseCell::hexagon(0, 1, 1, 0),
  BaseCell::hexagon(6, 0, 0, 1),
  BaseCell::pentagon(10, 2, 0, 0, [1, 5]), // 24
  BaseCell::hexagon(6, 0, 0, 0),
  BaseCell::hexagon(3, 0, 0, 0),
  BaseCell::hexagon(11, 1, 0, 0),
  BaseCell::hexagon(4, 1, 1, 0),
  BaseCell::hexagon(3, 0, 1, 0),
  BaseCell::hexagon(0, 0, 1, 1), // 30
  BaseCell::hexagon(4, 0, 0, 0),
  BaseCell::hexagon(5, 0, 1, 0),
  BaseCell::hexagon(0, 0, 1, 0),
  BaseCell::hexagon(7, 0, 1, 0),
  BaseCell::hexagon(11, 1, 1, 0),
  BaseCell::hexagon(7, 0, 0, 0),
  BaseCell::hexagon(10, 1, 0, 0),
  BaseCell::pentagon(12, 2, 0, 0, [3, 7]), // 38
  BaseCell::hexagon(6, 1, 0, 1),
  BaseCell::hexagon(7, 1, 0, 1), // 40
  BaseCell::hexagon(4, 0, 0, 1),
  BaseCell::hexagon(3, 0, 0, 1),
  BaseCell::hexagon(3, 0, 1, 1),
  BaseCell::hexagon(4, 0, 1, 0),
  BaseCell::hexagon(6, 1, 0, 0),
  BaseCell::hexagon(11, 0, 0, 0),
  BaseCell::hexagon(8, 0, 0, 1),
  BaseCell::hexagon(5, 0, 0, 1),
  BaseCell::pentagon(14, 2, 0, 0, [0, 9]), // 49
  BaseCell::hexagon(5, 0, 0, 0), // 50
  BaseCell::hexagon(12, 1, 0, 0),
  BaseCell::hexagon(10, 1, 1, 0),
  BaseCell::hexagon(4, 0, 1, 1),
  BaseCell::hexagon(12, 1, 1, 0),
  BaseCell::hexagon(7, 1, 0, 0),
  BaseCell::hexagon(11, 0, 1, 0),
  BaseCell::hexagon(10, 0, 0, 0),
  BaseCell::pentagon(13, 2, 0, 0, [4, 8]), // 58
  BaseCell::hexagon(10, 0, 0, 1),
  BaseCell::hexagon(11, 0, 0, 1), // 60
  BaseCell::hexagon(9, 0, 1, 0),
  BaseCell::hexagon(8, 0, 1, 0),
  BaseCell::pentagon(6, 2, 0, 0, [11, 15]), // 63
  BaseCell::hexagon(8, 0, 0, 0),
  BaseCell::hexagon(9, 0, 0, 1),
  BaseCell::hexagon(14, 1, 0, 0),
  BaseCell::hexagon(5, 1, 0, 1),
  BaseCell::hexagon(16, 0, 1, 1),
  BaseCell::hexagon(8, 1, 0, 1),
  BaseCell::hexagon(5, 1, 0, 0), // 70
  BaseCell::hexagon(12, 0, 0, 0),
  BaseCell::pentagon(7, 2, 0, 0, [12, 16]), // 72
  BaseCell::hexagon(12, 0, 1, 0),
  BaseCell::hexagon(10, 0, 1, 0),
  BaseCell::hexagon(9, 0, 0, 0),
  BaseCell::hexagon(13, 1, 0, 0),
  BaseCell::hexagon(16, 0, 0, 1),
  BaseCell::hexagon(15, 0, 1, 1),
  BaseCell::hexagon(15, 0, 1, 0),
  BaseCell::hexagon(16, 0, 1, 0), // 80
  BaseCell::hexagon(14, 1, 1, 0),
  BaseCell::hexagon(13, 1, 1, 0),
  BaseCell::pentagon(5, 2, 0, 0, [10, 19]), // 83
  BaseCell::hexagon(8, 1, 0, 0),
  BaseCell::hexagon(14, 0, 0, 0),
  BaseCell::hexagon(9, 1, 0, 1),
  BaseCell::hexagon(14, 0, 0, 1),
  BaseCell::hexagon(17, 0, 0, 1),
  BaseCell::hexagon(12, 0, 0, 1),
  BaseCell::hexagon(16, 0, 0, 0), // 90
  BaseCell::hexagon(17, 0, 1, 1),
  BaseCell::hexagon(15, 0, 0, 1),
  BaseCell::hexagon(16, 1, 0, 1),
  BaseCell::hexagon(9, 1, 0, 0),
  BaseCell::hexagon(15, 0, 0, 0),
  BaseCell::hexagon(13, 0, 0, 0),
  BaseCell::pentagon(8, 2, 0, 0, [13, 17]), // 97
  BaseCell::hexagon(13, 0, 1, 0),
  BaseCell::hexagon(17, 1, 0, 1),
  BaseCell::hexagon(19, 0, 1, 0), // 100
  BaseCell::hexagon(14, 0, 1, 0),
  BaseCell::hexagon(19, 0, 1, 1),
  BaseCell::hexagon(17, 0, 1, 0),
  BaseCell::hexagon(13, 0, 0, 1),
  BaseCell::hexagon(17, 0, 0, 0),
  BaseCell::hexagon(16, 1, 0, 0),
  BaseCell::pentagon(9, 2, 0, 0, [14, 18]), // 107
  BaseCell::hexagon(15, 1, 0, 1),
  BaseCell::hexagon(15, 1, 0, 0),
  BaseCell::hexagon(18, 0, 1, 1), // 110
  BaseCell::hexagon(18, 0, 0, 1),
  BaseCell::hexagon(19, 0, 0, 1),
  BaseCell::hexagon(17, 1, 0, 0),
  BaseCell::hexagon(19, 0, 0, 0),
  BaseCell::hexagon(18, 0, 1, 0),
  BaseCell::hexagon(18, 1, 0, 1),
  BaseCell::polar_pentagon(19, 2, 0, 0), // 117
  BaseCell::hexagon(19, 1, 0, 0),
  BaseCell::hexagon(18, 0, 0, 0),
  BaseCell::hexagon(19, 1, 0, 1), // 120
  BaseCell::hexagon(18, 1, 0, 0),
];

/// `(base cell, ccw rotations)` found at each resolution 0 `ijk` position of
/// each face, for components in `0..=2`.
#[rustfmt::skip]
static FACE_IJK_BASE_CELLS: [[[[(u8, u8); 3]; 3]; 3]; NUM_ICOSA_FACES] = [
  // face 0
  [
    [
      [(16, 0), (18, 0), (24, 0)],
      [(33, 0), (30, 0), (32, 3)],
      [(49, 1), (48, 3), (50, 3)],
    ],
    [
      [(8, 0), (5, 5), (10, 5)],
      [(22, 0), (16, 0), (18, 0)],
      [(41, 1), (33, 0), (30, 0)],
    ],
    [
      [(4, 0), (0, 5), (2, 5)],
      [(15, 1), (8, 0), (5, 5)],
      [(31, 1), (22, 0), (16, 0)],
    ],
  ],
  // face 1
  [
    [
      [(2, 0), (6, 0), (14, 0)],
      [(10, 0), (11, 0), (17, 3)],
      [(24, 1), (23, 3), (25, 3)],
    ],
    [
      [(0, 0), (1, 5), (9, 5)],
      [(5, 0), (2, 0), (6, 0)],
      [(18, 1), (10, 0), (11, 0)],
    ],
    [
      [(4, 1), (3, 5), (7, 5)],
      [(8, 1), (0, 0), (1, 5)],
      [(16, 1), (5, 0), (2, 0)],
    ],
  ],
  // face 2
  [
    [
      [(7, 0), (21, 0), (38, 0)],
      [(9, 0), (19, 0), (34, 3)],
      [(14, 1), (20, 3), (36, 3)],
    ],
    [
      [(3, 0), (13, 5), (29, 5)],
      [(1, 0), (7, 0), (21, 0)],
      [(6, 1), (9, 0), (19, 0)],
    ],
    [
      [(4, 2), (12, 5), (26, 5)],
      [(0, 1), (3, 0), (13, 5)],
      [(2, 1), (1, 0), (7, 0)],
    ],
  ],
  // face 3
  [
    [
      [(26, 0), (42, 0), (58, 0)],
      [(29, 0), (43, 0), (62, 3)],
      [(38, 1), (47, 3), (64, 3)],
    ],
    [
      [(12, 0), (28, 5), (44, 5)],
      [(13, 0), (26, 0), (42, 0)],
      [(21, 1), (29, 0), (43, 0)],
    ],
    [
      [(4, 3), (15, 5), (31, 5)],
      [(3, 1), (12, 0), (28, 5)],
      [(7, 1), (13, 0), (26, 0)],
    ],
  ],
  // face 4
  [
    [
      [(31, 0), (41, 0), (49, 0)],
      [(44, 0), (53, 0), (61, 3)],
      [(58, 1), (65, 3), (75, 3)],
    ],
    [
      [(15, 0), (22, 5), (33, 5)],
      [(28, 0), (31, 0), (41, 0)],
      [(42, 1), (44, 0), (53, 0)],
    ],
    [
      [(4, 4), (8, 5), (16, 5)],
      [(12, 1), (15, 0), (22, 5)],
      [(26, 1), (28, 0), (31, 0)],
    ],
  ],
  // face 5
  [
    [
      [(50, 0), (48, 0), (49, 3)],
      [(32, 0), (30, 3), (33, 3)],
      [(24, 3), (18, 3), (16, 3)],
    ],
    [
      [(70, 0), (67, 0), (66, 3)],
      [(52, 3), (50, 0), (48, 0)],
      [(37, 3), (32, 0), (30, 3)],
    ],
    [
      [(83, 0), (87, 3), (85, 3)],
      [(74, 3), (70, 0), (67, 0)],
      [(57, 1), (52, 3), (50, 0)],
    ],
  ],
  // face 6
  [
    [
      [(25, 0), (23, 0), (24, 3)],
      [(17, 0), (11, 3), (10, 3)],
      [(14, 3), (6, 3), (2, 3)],
    ],
    [
      [(45, 0), (39, 0), (37, 3)],
      [(35, 3), (25, 0), (23, 0)],
      [(27, 3), (17, 0), (11, 3)],
    ],
    [
      [(63, 0), (59, 3), (57, 3)],
      [(56, 3), (45, 0), (39, 0)],
      [(46, 3), (35, 3), (25, 0)],
    ],
  ],
  // face 7
  [
    [
      [(36, 0), (20, 0), (14, 3)],
      [(34, 0), (19, 3), (9, 3)],
      [(38, 3), (21, 3), (7, 3)],
    ],
    [
      [(55, 0), (40, 0), (27, 3)],
      [(54, 3), (36, 0), (20, 0)],
      [(51, 3), (34, 0), (19, 3)],
    ],
    [
      [(72, 0), (60, 3), (46, 3)],
      [(73, 3), (55, 0), (40, 0)],
      [(71, 3), (54, 3), (36, 0)],
    ],
  ],
  // face 8
  [
    [
      [(64, 0), (47, 0), (38, 3)],
      [(62, 0), (43, 3), (29, 3)],
      [(58, 3), (42, 3), (26, 3)],
    ],
    [
      [(84, 0), (69, 0), (51, 3)],
      [(82, 3), (64, 0), (47, 0)],
      [(76, 3), (62, 0), (43, 3)],
    ],
    [
      [(97, 0), (89, 3), (71, 3)],
      [(98, 3), (84, 0), (69, 0)],
      [(96, 3), (82, 3), (64, 0)],
    ],
  ],
  // face 9
  [
    [
      [(75, 0), (65, 0), (58, 3)],
      [(61, 0), (53, 3), (44, 3)],
      [(49, 3), (41, 3), (31, 3)],
    ],
    [
      [(94, 0), (86, 0), (76, 3)],
      [(81, 3), (75, 0), (65, 0)],
      [(66, 3), (61, 0), (53, 3)],
    ],
    [
      [(107, 0), (104, 3), (96, 3)],
      [(101, 3), (94, 0), (86, 0)],
      [(85, 3), (81, 3), (75, 0)],
    ],
  ],
  // face 10
  [
    [
      [(57, 0), (59, 0), (63, 3)],
      [(74, 0), (78, 3), (79, 3)],
      [(83, 3), (92, 3), (95, 3)],
    ],
    [
      [(37, 0), (39, 3), (45, 3)],
      [(52, 0), (57, 0), (59, 0)],
      [(70, 3), (74, 0), (78, 3)],
    ],
    [
      [(24, 0), (23, 3), (25, 3)],
      [(32, 3), (37, 0), (39, 3)],
      [(50, 3), (52, 0), (57, 0)],
    ],
  ],
  // face 11
  [
    [
      [(46, 0), (60, 0), (72, 3)],
      [(56, 0), (68, 3), (80, 3)],
      [(63, 3), (77, 3), (90, 3)],
    ],
    [
      [(27, 0), (40, 3), (55, 3)],
      [(35, 0), (46, 0), (60, 0)],
      [(45, 3), (56, 0), (68, 3)],
    ],
    [
      [(14, 0), (20, 3), (36, 3)],
      [(17, 3), (27, 0), (40, 3)],
      [(25, 3), (35, 0), (46, 0)],
    ],
  ],
  // face 12
  [
    [
      [(71, 0), (89, 0), (97, 3)],
      [(73, 0), (91, 3), (103, 3)],
      [(72, 3), (88, 3), (105, 3)],
    ],
    [
      [(51, 0), (69, 3), (84, 3)],
      [(54, 0), (71, 0), (89, 0)],
      [(55, 3), (73, 0), (91, 3)],
    ],
    [
      [(38, 0), (47, 3), (64, 3)],
      [(34, 3), (51, 0), (69, 3)],
      [(36, 3), (54, 0), (71, 0)],
    ],
  ],
  // face 13
  [
    [
      [(96, 0), (104, 0), (107, 3)],
      [(98, 0), (110, 3), (115, 3)],
      [(97, 3), (111, 3), (119, 3)],
    ],
    [
      [(76, 0), (86, 3), (94, 3)],
      [(82, 0), (96, 0), (104, 0)],
      [(84, 3), (98, 0), (110, 3)],
    ],
    [
      [(58, 0), (65, 3), (75, 3)],
      [(62, 3), (76, 0), (86, 3)],
      [(64, 3), (82, 0), (96, 0)],
    ],
  ],
  // face 14
  [
    [
      [(85, 0), (87, 0), (83, 3)],
      [(101, 0), (102, 3), (100, 3)],
      [(107, 3), (112, 3), (114, 3)],
    ],
    [
      [(66, 0), (67, 3), (70, 3)],
      [(81, 0), (85, 0), (87, 0)],
      [(94, 3), (101, 0), (102, 3)],
    ],
    [
      [(49, 0), (48, 3), (50, 3)],
      [(61, 3), (66, 0), (67, 3)],
      [(75, 3), (81, 0), (85, 0)],
    ],
  ],
  // face 15
  [
    [
      [(95, 0), (92, 0), (83, 0)],
      [(79, 0), (78, 0), (74, 3)],
      [(63, 1), (59, 3), (57, 3)],
    ],
    [
      [(109, 0), (108, 0), (100, 5)],
      [(93, 1), (95, 0), (92, 0)],
      [(77, 1), (79, 0), (78, 0)],
    ],
    [
      [(117, 4), (118, 5), (114, 5)],
      [(106, 1), (109, 0), (108, 0)],
      [(90, 1), (93, 1), (95, 0)],
    ],
  ],
  // face 16
  [
    [
      [(90, 0), (77, 0), (63, 0)],
      [(80, 0), (68, 0), (56, 3)],
      [(72, 1), (60, 3), (46, 3)],
    ],
    [
      [(106, 0), (93, 0), (79, 5)],
      [(99, 1), (90, 0), (77, 0)],
      [(88, 1), (80, 0), (68, 0)],
    ],
    [
      [(117, 3), (109, 5), (95, 5)],
      [(113, 1), (106, 0), (93, 0)],
      [(105, 1), (99, 1), (90, 0)],
    ],
  ],
  // face 17
  [
    [
      [(105, 0), (88, 0), (72, 0)],
      [(103, 0), (91, 0), (73, 3)],
      [(97, 1), (89, 3), (71, 3)],
    ],
    [
      [(113, 0), (99, 0), (80, 5)],
      [(116, 1), (105, 0), (88, 0)],
      [(111, 1), (103, 0), (91, 0)],
    ],
    [
      [(117, 2), (106, 5), (90, 5)],
      [(121, 1), (113, 0), (99, 0)],
      [(119, 1), (116, 1), (105, 0)],
    ],
  ],
  // face 18
  [
    [
      [(119, 0), (111, 0), (97, 0)],
      [(115, 0), (110, 0), (98, 3)],
      [(107, 1), (104, 3), (96, 3)],
    ],
    [
      [(121, 0), (116, 0), (103, 5)],
      [(120, 1), (119, 0), (111, 0)],
      [(112, 1), (115, 0), (110, 0)],
    ],
    [
      [(117, 1), (113, 5), (105, 5)],
      [(118, 1), (121, 0), (116, 0)],
      [(114, 1), (120, 1), (119, 0)],
    ],
  ],
  // face 19
  [
    [
      [(114, 0), (112, 0), (107, 0)],
      [(100, 0), (102, 0), (101, 3)],
      [(83, 1), (87, 3), (85, 3)],
    ],
    [
      [(118, 0), (120, 0), (115, 5)],
      [(108, 1), (114, 0), (112, 0)],
      [(92, 1), (100, 0), (102, 0)],
    ],
    [
      [(117, 0), (121, 5), (119, 5)],
      [(109, 1), (118, 0), (120, 0)],
      [(95, 1), (108, 1), (114, 0)],
    ],
  ],
];

/// Base cell `n`, if it exists.
#[inline]
#[must_use]
pub fn base_cell(n: u8) -> Option<&'static BaseCell> {
  BASE_CELLS.get(usize::from(n))
}

/// Pentagon policy of base cell `n`; `None` for hexagons and unknown numbers.
#[inline]
#[must_use]
pub fn pentagon_policy(n: u8) -> Option<&'static PentagonPolicy> {
  base_cell(n).and_then(|bc| bc.pentagon.as_ref())
}

#[inline]
#[must_use]
pub(crate) fn is_pentagon(n: u8) -> bool {
  pentagon_policy(n).is_some()
}

/// Whether pentagon `n` is clockwise-offset on `face`.
#[inline]
#[must_use]
pub(crate) fn is_cw_offset(n: u8, face: u8) -> bool {
  pentagon_policy(n)
    .and_then(|p| p.cw_offset_faces)
    .is_some_and(|faces| faces.contains(&face))
}

/// Base cell and ccw rotation count at a resolution 0 face coordinate.
/// `None` when the coordinate is off the lookup table.
#[must_use]
pub(crate) fn face_ijk_to_base_cell(fijk: &FaceIJK) -> Option<(u8, u8)> {
  let CoordIJK { i, j, k } = fijk.coord;
  let in_range = |c: i32| (0..=MAX_FACE_COORD).contains(&c);
  if !(in_range(i) && in_range(j) && in_range(k)) || usize::from(fijk.face) >= NUM_ICOSA_FACES {
    return None;
  }
  Some(FACE_IJK_BASE_CELLS[usize::from(fijk.face)][i as usize][j as usize][k as usize])
}

/// Base cell adjacent to `n` in direction `dir`, with the ccw rotations into
/// its system. `None` for the deleted direction of a pentagon.
#[must_use]
pub(crate) fn base_cell_neighbor(n: u8, dir: Direction) -> Option<(u8, u8)> {
  let d = dir as usize;
  if d > 6 {
    return None;
  }
  let row = BASE_CELL_NEIGHBORS.get(usize::from(n))?;
  match row[d] {
    INVALID_BASE_CELL => None,
    neighbor => Some((neighbor, BASE_CELL_NEIGHBOR_ROTATIONS[usize::from(n)][d])),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn twelve_pentagons() {
    let pentagons: Vec<u8> = (0..NUM_BASE_CELLS as u8).filter(|&n| is_pentagon(n)).collect();
    assert_eq!(pentagons, vec![4, 14, 24, 38, 49, 58, 63, 72, 83, 97, 107, 117]);
    let polar: Vec<u8> = pentagons
      .iter()
      .copied()
      .filter(|&n| pentagon_policy(n).is_some_and(|p| p.polar))
      .collect();
    assert_eq!(polar, vec![4, 117]);
    for n in pentagons {
      assert_eq!(pentagon_policy(n).map(|p| p.deleted_digit), Some(Direction::K));
    }
    assert!(pentagon_policy(122).is_none());
  }

  #[test]
  fn cw_offset_faces() {
    assert!(is_cw_offset(14, 2));
    assert!(is_cw_offset(14, 6));
    assert!(!is_cw_offset(14, 11));
    assert!(!is_cw_offset(4, 0));
    assert!(!is_cw_offset(0, 0));
  }

  #[test]
  fn home_coordinates_map_back_to_the_base_cell() {
    for n in 0..NUM_BASE_CELLS as u8 {
      let home = base_cell(n).map(|bc| bc.home).unwrap_or_default();
      let (found, rotations) = face_ijk_to_base_cell(&home).unwrap_or((INVALID_BASE_CELL, 0));
      assert_eq!(found, n);
      assert_eq!(rotations, 0, "base cell {n} is unrotated on its home face");
    }
  }

  #[test]
  fn neighbor_tables_are_consistent() {
    for n in 0..NUM_BASE_CELLS as u8 {
      assert_eq!(base_cell_neighbor(n, Direction::Center), Some((n, 0)));
      let missing = Direction::CHILDREN[1..]
        .iter()
        .filter(|&&d| base_cell_neighbor(n, d).is_none())
        .count();
      assert_eq!(missing, usize::from(is_pentagon(n)), "base cell {n}");
      for &d in &Direction::CHILDREN[1..] {
        if let Some((other, _)) = base_cell_neighbor(n, d) {
          assert!(
            Direction::CHILDREN[1..]
              .iter()
              .any(|&back| base_cell_neighbor(other, back).map(|(b, _)| b) == Some(n)),
            "{n} -> {other}"
          );
        }
      }
    }
    assert_eq!(base_cell_neighbor(4, Direction::K), None);
    assert_eq!(base_cell_neighbor(0, Direction::Invalid), None);
  }

  #[test]
  fn rotations_are_sixth_turns() {
    for (n, row) in BASE_CELL_NEIGHBOR_ROTATIONS.iter().enumerate() {
      assert!(row.iter().all(|&r| r < 6), "base cell {n}");
    }
    for n in (0..NUM_BASE_CELLS as u8).filter(|&n| is_pentagon(n)) {
      assert_eq!(BASE_CELL_NEIGHBORS[usize::from(n)][Direction::K as usize], INVALID_BASE_CELL);
      assert_eq!(BASE_CELL_NEIGHBOR_ROTATIONS[usize::from(n)][Direction::K as usize], 0);
      assert_eq!(base_cell_neighbor(n, Direction::K), None);
    }
  }

  #[test]
  fn out_of_range_face_coordinates() {
    let fijk = FaceIJK {
      face: 0,
      coord: CoordIJK::new(3, 0, 0),
    };
    assert_eq!(face_ijk_to_base_cell(&fijk), None);
    let fijk = FaceIJK {
      face: 20,
      coord: CoordIJK::default(),
    };
    assert_eq!(face_ijk_to_base_cell(&fijk), None);
  }
}
