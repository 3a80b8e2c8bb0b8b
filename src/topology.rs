use std::fmt::{self, Display};
use std::str::FromStr;
use crate::error::Error;

/// How cells on the edge of a grid see their surroundings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Adjacency {
  /// Off-grid neighbors do not exist.
  #[default]
  Bounded,
  /// Edges wrap around, the grid is a torus.
  Toroidal,
}

/// The 8 Moore directions, `(drow, dcol)`.
pub(crate) const MOORE: [(isize, isize); 8] = [
  (-1, -1), (-1, 0), (-1, 1),
  (0, -1), (0, 1),
  (1, -1), (1, 0), (1, 1),
];

/// North, west, east, south.
pub(crate) const VON_NEUMANN: [(isize, isize); 4] = [
  (-1, 0), (0, -1), (0, 1), (1, 0),
];

impl Adjacency {
  /// Position one step from `(row, col)` in direction `(drow, dcol)`, or
  /// `None` if that step leaves a bounded grid.
  #[inline]
  pub(crate) fn step(
    self,
    (row, col): (usize, usize),
    (drow, dcol): (isize, isize),
    rows: usize,
    columns: usize,
  ) -> Option<(usize, usize)> {
    match self {
      Adjacency::Bounded => {
        let r = offset(row, drow)?;
        let c = offset(col, dcol)?;
        if r < rows && c < columns {
          Some((r, c))
        } else {
          None
        }
      }
      Adjacency::Toroidal => {
        Some((wrap(row, drow, rows), wrap(col, dcol, columns)))
      }
    }
  }

  /// Whether two cells are neighbors under the all-pairs predicate: rows and
  /// columns each differ by at most one, a full wrap counting as one. A cell
  /// is its own neighbor.
  pub(crate) fn are_neighbors(
    self,
    (row1, col1): (usize, usize),
    (row2, col2): (usize, usize),
    rows: usize,
    columns: usize,
  ) -> bool {
    let close = |a: usize, b: usize, len: usize| {
      let d = if a > b { a - b } else { b - a };
      d <= 1 || (self == Adjacency::Toroidal && d == len - 1)
    };
    close(row1, row2, rows) && close(col1, col2, columns)
  }
}

fn offset(x: usize, d: isize) -> Option<usize> {
  if d < 0 {
    x.checked_sub(d.unsigned_abs())
  } else {
    x.checked_add(d as usize)
  }
}

fn wrap(x: usize, d: isize, len: usize) -> usize {
  (x as isize + d).rem_euclid(len as isize) as usize
}

impl Display for Adjacency {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Adjacency::Bounded => write!(f, "bounded"),
      Adjacency::Toroidal => write!(f, "toroidal"),
    }
  }
}

impl FromStr for Adjacency {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s.to_ascii_lowercase().as_str() {
      "bounded" => Ok(Adjacency::Bounded),
      "toroidal" | "torus" | "wrap" => Ok(Adjacency::Toroidal),
      _ => Err(Error::invalid(format!("unknown adjacency {:?}", s))),
    }
  }
}
