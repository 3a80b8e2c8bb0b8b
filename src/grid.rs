use std::fmt::{self, Display};
use itertools::iproduct;
use crate::error::{Error, Result};

/// Largest number of cells a grid may hold.
pub const MAX_CELLS: usize = 1 << 28;

/// Fixed-size boolean board, stored row by row.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid {
  rows: usize,
  columns: usize,
  cells: Vec<bool>,
}

impl Grid {
  /// All-dead grid.
  pub fn new(rows: usize, columns: usize) -> Result<Self> {
    let len = check_dimensions(rows, columns)?;
    Ok(Self {
      rows,
      columns,
      cells: vec![false; len],
    })
  }

  /// `cells` is row-major and must hold exactly `rows * columns` values.
  pub fn from_cells(rows: usize, columns: usize, cells: Vec<bool>) -> Result<Self> {
    let len = check_dimensions(rows, columns)?;
    if cells.len() != len {
      return Err(Error::format(format!(
        "a {}x{} grid needs {} cells, found {}",
        rows, columns, len, cells.len())));
    }
    Ok(Self { rows, columns, cells })
  }

  /// Grid with exactly the listed cells alive.
  pub fn with_alive(
    rows: usize,
    columns: usize,
    alive: impl IntoIterator<Item = (usize, usize)>,
  ) -> Result<Self> {
    let mut grid = Self::new(rows, columns)?;
    for (row, col) in alive {
      grid.set(row, col, true)?;
    }
    Ok(grid)
  }

  pub fn rows(&self) -> usize {
    self.rows
  }

  pub fn columns(&self) -> usize {
    self.columns
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  pub(crate) fn index(&self, row: usize, col: usize) -> Result<usize> {
    if row >= self.rows || col >= self.columns {
      return Err(Error::OutOfBounds {
        row,
        col,
        rows: self.rows,
        columns: self.columns,
      });
    }
    Ok(row * self.columns + col)
  }

  pub fn get(&self, row: usize, col: usize) -> Result<bool> {
    Ok(self.cells[self.index(row, col)?])
  }

  pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
    let i = self.index(row, col)?;
    self.cells[i] = alive;
    Ok(())
  }

  /// Unchecked read for coordinates already known to be in range.
  #[inline]
  pub(crate) fn at(&self, row: usize, col: usize) -> bool {
    self.cells[row * self.columns + col]
  }

  /// New grid of the same size whose cells are `f(row, col, alive)`.
  pub fn map(&self, mut f: impl FnMut(usize, usize, bool) -> bool) -> Grid {
    let cells = self.coords()
      .zip(self.cells.iter())
      .map(|((row, col), &alive)| f(row, col, alive))
      .collect();
    Grid { rows: self.rows, columns: self.columns, cells }
  }

  pub fn cells(&self) -> &[bool] {
    &self.cells
  }

  pub fn count_alive(&self) -> usize {
    self.cells.iter().filter(|&&alive| alive).count()
  }

  pub fn any_alive(&self) -> bool {
    self.cells.iter().any(|&alive| alive)
  }

  /// Coordinates of every cell, row-major.
  pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
    iproduct!(0..self.rows, 0..self.columns)
  }

  /// Coordinates of live cells, row-major.
  pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
    self.coords().filter(move |&(row, col)| self.at(row, col))
  }
}

/// Number of cells of a `rows x columns` grid.
pub(crate) fn check_dimensions(rows: usize, columns: usize) -> Result<usize> {
  if rows == 0 || columns == 0 {
    return Err(Error::invalid(format!(
      "grid dimensions must be positive, got {}x{}", rows, columns)));
  }
  match rows.checked_mul(columns) {
    Some(len) if len <= MAX_CELLS => Ok(len),
    _ => Err(Error::invalid(format!(
      "a {}x{} grid exceeds {} cells", rows, columns, MAX_CELLS))),
  }
}

/// `#` for alive, `.` for dead, one line per row.
impl Display for Grid {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for row in self.cells.chunks(self.columns) {
      for &alive in row {
        write!(f, "{}", if alive { '#' } else { '.' })?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_from_cells_count_mismatch() {
    let err = Grid::from_cells(2, 2, vec![true, false, true]).unwrap_err();
    assert!(matches!(err, Error::DataFormat(_)));
  }

  #[test]
  fn test_zero_dimensions() {
    assert!(matches!(Grid::new(0, 4), Err(Error::InvalidArgument(_))));
    assert!(matches!(Grid::from_cells(3, 0, vec![]), Err(Error::InvalidArgument(_))));
  }

  #[test]
  fn test_too_many_cells() {
    assert!(matches!(Grid::new(usize::MAX, 2), Err(Error::InvalidArgument(_))));
    assert!(matches!(Grid::new(1_000_000, 1_000_000), Err(Error::InvalidArgument(_))));
    assert!(matches!(Grid::from_cells(usize::MAX, 3, vec![]), Err(Error::InvalidArgument(_))));
    assert!(matches!(Grid::new(1, MAX_CELLS + 1), Err(Error::InvalidArgument(_))));
  }

  #[test]
  fn test_get_set() {
    let mut grid = Grid::new(2, 3).unwrap();
    grid.set(1, 2, true).unwrap();
    assert!(grid.get(1, 2).unwrap());
    assert!(!grid.get(0, 0).unwrap());
    assert_eq!(grid.cells(), &[false, false, false, false, false, true]);
    assert!(matches!(grid.get(2, 0), Err(Error::OutOfBounds { .. })));
    assert!(matches!(grid.set(0, 3, true), Err(Error::OutOfBounds { .. })));
  }

  #[test]
  fn test_alive_cells_row_major() {
    let grid = Grid::with_alive(3, 3, vec![(2, 0), (0, 2), (1, 1)]).unwrap();
    assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(0, 2), (1, 1), (2, 0)]);
    assert_eq!(grid.count_alive(), 3);
    assert!(grid.any_alive());
  }

  #[test]
  fn test_map() {
    let grid = Grid::with_alive(2, 2, vec![(0, 0)]).unwrap();
    let flipped = grid.map(|_, _, alive| !alive);
    assert_eq!(flipped.cells(), &[false, true, true, true]);
    let diagonal = grid.map(|row, col, _| row == col);
    assert_eq!(diagonal.cells(), &[true, false, false, true]);
  }

  #[test]
  fn test_display() {
    let grid = Grid::with_alive(2, 3, vec![(0, 1), (1, 2)]).unwrap();
    assert_eq!(grid.to_string(), ".#.\n..#\n");
  }
}
