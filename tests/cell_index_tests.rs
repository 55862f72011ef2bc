// tests/cell_index_tests.rs

use hexgrid::*;

use hexgrid::Direction::{Center, Ij, Ik, Jk, I, J, K};

#[test]
fn field_accessors() {
  let cell = CellIndex(0x85283473fffffff);
  assert_eq!(cell.mode(), 1);
  assert_eq!(cell.resolution(), 5);
  assert_eq!(cell.base_cell(), 20);
  assert_eq!(cell.digit(1), Center);
  assert_eq!(cell.digit(2), Ij);
  assert_eq!(cell.digit(4), Jk);
  assert_eq!(cell.digit(5), I);
  assert_eq!(cell.digit(6), Direction::Invalid);
}

#[test]
fn decode_then_encode() {
  let cell = CellIndex(0x84194adffffffff);
  let parts = decode(cell).unwrap();
  assert_eq!(parts.mode, 1);
  assert_eq!(parts.resolution, 4);
  assert_eq!(parts.base_cell, 12);
  assert_eq!(parts.digits.as_slice(), &[Ik, K, J, Ij]);
  assert_eq!(encode(parts.mode, parts.resolution, parts.base_cell, &parts.digits), Ok(cell));
}

#[test]
fn resolution_zero_has_no_digits() {
  let parts = decode(CellIndex(0x8001fffffffffff)).unwrap();
  assert_eq!(parts.resolution, 0);
  assert_eq!(parts.base_cell, 0);
  assert!(parts.digits.is_empty());
  assert_eq!(encode(1, 0, 0, &[]), Ok(CellIndex(0x8001fffffffffff)));
}

#[test]
fn encode_rejects_each_field() {
  assert_eq!(encode(1, 16, 0, &[]), Err(GridError::UnsupportedResolution(16)));
  assert_eq!(
    encode(1, 2, 0, &[K]),
    Err(GridError::MalformedCellIndex(Malformation::DigitCount { res: 2, len: 1 }))
  );
  assert_eq!(encode(2, 0, 0, &[]), Err(GridError::MalformedCellIndex(Malformation::Mode(2))));
  assert_eq!(encode(1, 0, 122, &[]), Err(GridError::MalformedCellIndex(Malformation::BaseCell(122))));
  assert_eq!(
    encode(1, 2, 0, &[J, Direction::Invalid]),
    Err(GridError::MalformedCellIndex(Malformation::Digit { res: 2 }))
  );
}

#[test]
fn pentagon_deleted_child_is_rejected() {
  // Base cell 4 is a pentagon.
  assert_eq!(
    encode(1, 1, 4, &[K]),
    Err(GridError::MalformedCellIndex(Malformation::DeletedSubsequence))
  );
  assert_eq!(
    encode(1, 3, 4, &[Center, Center, K]),
    Err(GridError::MalformedCellIndex(Malformation::DeletedSubsequence))
  );
  // Only the leading non-center digit is constrained.
  assert!(encode(1, 2, 4, &[J, K]).is_ok());
  // Hexagon base cells have no deleted child.
  assert!(encode(1, 1, 0, &[K]).is_ok());
}

#[test]
fn digit_seven_at_populated_resolution() {
  // Resolution 5 cell whose fifth digit is the unused sentinel.
  let bad = CellIndex(0x8528347ffffffff);
  assert!(!is_valid_cell(bad));
  assert_eq!(
    validate_cell(bad),
    Err(GridError::MalformedCellIndex(Malformation::Digit { res: 5 }))
  );
  assert_eq!(
    from_address_string("8528347ffffffff"),
    Err(GridError::MalformedCellIndex(Malformation::Digit { res: 5 }))
  );
}

#[test]
fn structural_violations() {
  let cases = [
    (0x85283473fffffff | 1 << 63, Malformation::HighBit),
    (0x05283473fffffff, Malformation::Mode(0)),
    (0x95283473fffffff, Malformation::ReservedBits),
    (0x8d283473fffffff, Malformation::Digit { res: 6 }),
    (0x80f5fffffffffff, Malformation::BaseCell(122)),
    (0x85283472fffffff, Malformation::UnusedDigit { res: 6 }),
  ];
  for (raw, expected) in cases {
    assert_eq!(
      validate_cell(CellIndex(raw)),
      Err(GridError::MalformedCellIndex(expected)),
      "{raw:x}"
    );
  }
  // 121 is the last base cell.
  assert_eq!(validate_cell(CellIndex(0x80f3fffffffffff)), Ok(()));
}

#[test]
fn address_strings() {
  let cell = CellIndex(0x85283473fffffff);
  assert_eq!(to_address_string(cell), "85283473fffffff");
  assert_eq!(cell.to_string(), "85283473fffffff");
  assert_eq!(format!("{cell:X}"), "85283473FFFFFFF");
  assert_eq!(from_address_string("85283473FFFFFFF"), Ok(cell));
  assert_eq!(from_address_string("085283473fffffff"), Ok(cell));
  assert_eq!("85283473fffffff".parse::<CellIndex>(), Ok(cell));
}

#[test]
fn bad_address_strings() {
  for input in ["", "0x85283473fffffff", "85283473fffffffg", " 85283473fffffff", "+85283473fffffff", "1085283473fffffff"] {
    assert_eq!(
      from_address_string(input),
      Err(GridError::MalformedCellIndex(Malformation::Address)),
      "{input:?}"
    );
  }
}

#[test]
fn conversions_validate() {
  assert_eq!(CellIndex::try_from(0x85283473fffffff_u64), Ok(CellIndex(0x85283473fffffff)));
  assert!(CellIndex::try_from(0_u64).is_err());
  assert_eq!(u64::from(CellIndex(0x85283473fffffff)), 0x85283473fffffff);
}

#[test]
fn base_cells_and_pentagons() {
  let cells = res0_cells();
  assert_eq!(cells.len(), 122);
  assert!(cells.iter().all(|&c| is_valid_cell(c) && c.resolution() == 0));
  assert_eq!(cells.iter().filter(|&&c| is_pentagon(c)).count(), 12);

  for res in [0, 1, 7, 15] {
    let found = pentagons(res).unwrap();
    assert_eq!(found.len(), 12);
    assert!(found.iter().all(|&c| is_pentagon(c) && c.resolution() == res));
  }
  assert!(is_pentagon(CellIndex(0x8009fffffffffff)));
  assert!(!is_pentagon(CellIndex(0x85283473fffffff)));
  assert!(!is_pentagon(CellIndex(0)));
}

#[test]
fn pentagon_policy_table() {
  let policy = pentagon_policy(4).unwrap();
  assert_eq!(policy.deleted_digit, K);
  assert!(policy.polar);
  assert!(!pentagon_policy(14).unwrap().polar);
  assert!(pentagon_policy(0).is_none());
  assert!(base_cell(121).is_some());
  assert!(base_cell(122).is_none());
}

#[test]
fn cell_counts() {
  assert_eq!(num_cells(0), Ok(122));
  assert_eq!(num_cells(1), Ok(842));
  assert_eq!(num_cells(2), Ok(5882));
  assert_eq!(num_cells(15), Ok(569_707_381_193_162));
  assert_eq!(num_cells(16), Err(GridError::UnsupportedResolution(16)));
}
