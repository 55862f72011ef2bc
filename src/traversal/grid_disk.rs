//! Cells within a grid distance of an origin.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::cell_index::inspection::is_pentagon_unchecked;
use crate::cell_index::{num_cells, validate_cell};
use crate::constants::MAX_RES;
use crate::error::GridResult;
use crate::types::{CellIndex, Direction};

use super::neighbors::{neighbor_rotations, neighbor_unchecked, NEIGHBOR_DIRECTIONS};

/// Smallest `k` whose disk would cover every resolution 15 cell.
const K_ALL_CELLS_AT_RES_15: u32 = 13_780_510;

/// Walk order around a ring. Starting one step out along `I`, these six
/// directions trace the ring counter-clockwise back to the start.
const RING_DIRECTIONS: [Direction; 6] = [
  Direction::J,
  Direction::Jk,
  Direction::K,
  Direction::Ik,
  Direction::I,
  Direction::Ij,
];

/// Step taken from the last cell of a ring to the first cell of the next.
const NEXT_RING_DIRECTION: Direction = Direction::I;

/// Upper bound on the number of cells in `grid_disk(_, k)`: `3k(k+1) + 1`,
/// capped at the number of resolution 15 cells.
#[must_use]
pub fn max_grid_disk_size(k: u32) -> u64 {
  if k >= K_ALL_CELLS_AT_RES_15 {
    return num_cells(MAX_RES).unwrap_or(u64::MAX);
  }
  let k = u64::from(k);
  3 * k * (k + 1) + 1
}

/// Spiral walk outwards from `origin`, ring by ring.
///
/// Gives up with `None` when the walk touches a pentagon or revisits a cell,
/// either of which means the rings are distorted.
fn disk_spiral(origin: CellIndex, k: u32) -> GridResult<Option<Vec<(CellIndex, u32)>>> {
  if is_pentagon_unchecked(origin) {
    return Ok(None);
  }

  let capacity = usize::try_from(max_grid_disk_size(k)).unwrap_or(usize::MAX);
  let mut out = Vec::with_capacity(capacity.min(1 << 16));
  let mut seen = HashSet::with_capacity(capacity.min(1 << 16));
  out.push((origin, 0));
  seen.insert(origin);

  let mut current = origin;
  let mut rotations = 0u8;
  for ring in 1..=k {
    let Some(next) = neighbor_rotations(current, NEXT_RING_DIRECTION, &mut rotations)? else {
      return Ok(None);
    };
    if is_pentagon_unchecked(next) {
      return Ok(None);
    }
    current = next;

    for dir in RING_DIRECTIONS {
      for _ in 0..ring {
        let Some(next) = neighbor_rotations(current, dir, &mut rotations)? else {
          return Ok(None);
        };
        if is_pentagon_unchecked(next) || !seen.insert(next) {
          return Ok(None);
        }
        out.push((next, ring));
        current = next;
      }
    }
  }
  Ok(Some(out))
}

/// Breadth-first expansion over single-step neighbors. Exact everywhere,
/// including around pentagons.
fn disk_breadth_first(origin: CellIndex, k: u32) -> GridResult<Vec<(CellIndex, u32)>> {
  let mut distances = HashMap::new();
  distances.insert(origin, 0);
  let mut out = vec![(origin, 0)];
  let mut frontier = vec![origin];

  for distance in 1..=k {
    let mut next_frontier = Vec::with_capacity(frontier.len() + 6);
    for cell in frontier {
      for dir in NEIGHBOR_DIRECTIONS {
        let Some(n) = neighbor_unchecked(cell, dir)? else {
          continue;
        };
        if let Entry::Vacant(slot) = distances.entry(n) {
          slot.insert(distance);
          out.push((n, distance));
          next_frontier.push(n);
        }
      }
    }
    if next_frontier.is_empty() {
      break;
    }
    frontier = next_frontier;
  }
  Ok(out)
}

/// Every cell within grid distance `k` of `origin`, paired with its
/// distance. `origin` comes first and no cell appears twice.
///
/// # Errors
/// [`GridError::MalformedCellIndex`](crate::GridError::MalformedCellIndex)
/// if `origin` is not valid.
pub fn grid_disk_distances(origin: CellIndex, k: u32) -> GridResult<Vec<(CellIndex, u32)>> {
  validate_cell(origin)?;
  if let Some(disk) = disk_spiral(origin, k)? {
    return Ok(disk);
  }
  debug!(cell = %origin, k, "pentagon distortion in spiral walk, expanding breadth-first");
  disk_breadth_first(origin, k)
}

/// Every cell within grid distance `k` of `origin`, `origin` first.
///
/// # Errors
/// [`GridError::MalformedCellIndex`](crate::GridError::MalformedCellIndex)
/// if `origin` is not valid.
pub fn grid_disk(origin: CellIndex, k: u32) -> GridResult<Vec<CellIndex>> {
  Ok(grid_disk_distances(origin, k)?.into_iter().map(|(c, _)| c).collect())
}

/// Cells at exactly grid distance `k` from `origin`.
///
/// # Errors
/// [`GridError::MalformedCellIndex`](crate::GridError::MalformedCellIndex)
/// if `origin` is not valid.
pub fn grid_ring(origin: CellIndex, k: u32) -> GridResult<Vec<CellIndex>> {
  Ok(
    grid_disk_distances(origin, k)?
      .into_iter()
      .filter_map(|(c, d)| (d == k).then_some(c))
      .collect(),
  )
}
