use std::fs;
use std::path::Path;
use log::debug;
use crate::community;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::rle;
use crate::rule::*;
use crate::text;
use crate::topology::{Adjacency, MOORE};

/// A Life board together with its population.
#[derive(Clone, Debug)]
pub struct Universe {
  grid: Grid,
  /// Always equal to `grid.count_alive()`.
  total_alive_cells: usize,
  generation: u64,
  rule: Rule,
  /// Neighborhood used when counting neighbors for the next generation.
  adjacency: Adjacency,
}

/// Five cells on a 5x5 board that die out after four generations.
const SEED: [(usize, usize); 5] = [(1, 1), (1, 3), (2, 2), (3, 2), (3, 3)];

impl Default for Universe {
  fn default() -> Self {
    Self::seed()
  }
}

impl Universe {
  pub fn seed() -> Self {
    let grid = Grid::with_alive(5, 5, SEED.iter().copied())
      .expect("seed pattern fits a 5x5 grid");
    Self::from_grid(grid)
  }

  pub fn from_grid(grid: Grid) -> Self {
    let total_alive_cells = grid.count_alive();
    debug!("new {}x{} universe with {} live cells",
      grid.rows(), grid.columns(), total_alive_cells);
    Self {
      grid,
      total_alive_cells,
      generation: 0,
      rule: GAME_OF_LIFE,
      adjacency: Adjacency::Bounded,
    }
  }

  /// Board from `rows * columns` row-major cell states.
  pub fn from_cells(rows: usize, columns: usize, cells: Vec<bool>) -> Result<Self> {
    Ok(Self::from_grid(Grid::from_cells(rows, columns, cells)?))
  }

  /// Board in the plain `rows columns true false ...` format.
  pub fn from_text(src: impl AsRef<str>) -> Result<Self> {
    Ok(Self::from_grid(text::read(src)?))
  }

  /// Board and rule from an RLE pattern.
  pub fn from_rle(src: impl AsRef<str>) -> Result<Self> {
    let (grid, rule) = rle::read(src)?;
    Ok(Self::from_grid(grid).with_rule(rule))
  }

  /// Reads `.rle` files as RLE and anything else as the plain format.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let src = fs::read_to_string(path).map_err(|source| Error::ResourceUnavailable {
      path: path.to_owned(),
      source,
    })?;

    let is_rle = path.extension()
      .map_or(false, |ext| ext.eq_ignore_ascii_case("rle"));
    if is_rle {
      Self::from_rle(src)
    } else {
      Self::from_text(src)
    }
  }

  pub fn with_rule(mut self, rule: Rule) -> Self {
    self.rule = rule;
    self
  }

  pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
    self.adjacency = adjacency;
    self
  }

  pub fn set_adjacency(&mut self, adjacency: Adjacency) {
    self.adjacency = adjacency;
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  pub fn rows(&self) -> usize {
    self.grid.rows()
  }

  pub fn columns(&self) -> usize {
    self.grid.columns()
  }

  pub fn total_alive_cells(&self) -> usize {
    self.total_alive_cells
  }

  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn rule(&self) -> Rule {
    self.rule
  }

  pub fn adjacency(&self) -> Adjacency {
    self.adjacency
  }

  pub fn cell_state(&self, row: usize, col: usize) -> Result<bool> {
    self.grid.get(row, col)
  }

  /// Whether any cell is alive.
  pub fn is_alive(&self) -> bool {
    self.grid.any_alive()
  }

  /// Live cells among the 8 surrounding cells, between 0 and 8.
  pub fn num_of_alive_neighbors(&self, row: usize, col: usize) -> Result<usize> {
    self.grid.index(row, col)?;
    Ok(self.count_neighbors(row, col))
  }

  fn count_neighbors(&self, row: usize, col: usize) -> usize {
    let (rows, columns) = (self.grid.rows(), self.grid.columns());
    MOORE.iter()
      .filter_map(|&d| self.adjacency.step((row, col), d, rows, columns))
      .filter(|&(r, c)| self.grid.at(r, c))
      .count()
  }

  /// The board one generation ahead. Does not touch `self`.
  pub fn compute_new_grid(&self) -> Grid {
    self.grid.map(|row, col, alive| {
      self.rule.next_state(alive, self.count_neighbors(row, col))
    })
  }

  pub fn next_generation(&mut self) {
    self.grid = self.compute_new_grid();
    self.total_alive_cells = self.grid.count_alive();
    self.generation += 1;
  }

  /// `num_gen` is number of generations.
  pub fn next_generations(&mut self, num_gen: usize) {
    if num_gen == 0 {
      return;
    }

    for _ in 0..num_gen {
      self.next_generation();
    }
    debug!("advanced {} generations to generation {}, {} live cells",
      num_gen, self.generation, self.total_alive_cells);
  }

  /// Signed variant of [`Universe::next_generations`] for counts that come
  /// from outside. Negative counts are rejected.
  pub fn advance(&mut self, num_gen: i64) -> Result<()> {
    if num_gen < 0 {
      return Err(Error::invalid(format!(
        "generation count must not be negative, got {}", num_gen)));
    }
    let num_gen = usize::try_from(num_gen)
      .map_err(|_| Error::invalid(format!("generation count {} is too large", num_gen)))?;
    self.next_generations(num_gen);
    Ok(())
  }

  pub fn num_of_communities(&self, adjacency: Adjacency) -> usize {
    community::num_of_communities(&self.grid, adjacency)
  }

  pub fn communities(&self, adjacency: Adjacency) -> Vec<Vec<(usize, usize)>> {
    community::communities(&self.grid, adjacency)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn universe(rows: usize, columns: usize, alive: &[(usize, usize)]) -> Universe {
    Universe::from_grid(Grid::with_alive(rows, columns, alive.iter().copied()).unwrap())
  }

  #[test]
  fn test_seed() {
    let uni = Universe::seed();
    assert_eq!(uni.rows(), 5);
    assert_eq!(uni.columns(), 5);
    assert_eq!(uni.total_alive_cells(), 5);
    assert_eq!(uni.grid().to_string(), "\
.....
.#.#.
..#..
..##.
.....
");
  }

  #[test]
  fn test_seed_generations() {
    let mut uni = Universe::seed();
    uni.next_generation();
    assert_eq!(uni.grid().to_string(), "\
.....
..#..
.#...
..##.
.....
");
    assert_eq!(uni.total_alive_cells(), 4);

    uni.next_generation();
    assert_eq!(uni.grid().to_string(), "\
.....
.....
.#.#.
..#..
.....
");

    uni.next_generation();
    assert_eq!(uni.total_alive_cells(), 2);
    assert!(uni.is_alive());

    uni.next_generation();
    assert!(!uni.is_alive());
    assert_eq!(uni.total_alive_cells(), 0);
    assert_eq!(uni.generation(), 4);
  }

  #[test]
  fn test_from_cells() {
    let uni = Universe::from_cells(2, 3, vec![true, false, true, false, false, true]).unwrap();
    assert_eq!(uni.total_alive_cells(), 3);
    assert!(uni.cell_state(0, 2).unwrap());
    assert!(!uni.cell_state(1, 1).unwrap());
    assert!(matches!(uni.cell_state(2, 0), Err(Error::OutOfBounds { .. })));
  }

  #[test]
  fn test_from_cells_wrong_count() {
    let err = Universe::from_cells(2, 2, vec![true; 5]).unwrap_err();
    assert!(matches!(err, Error::DataFormat(_)));
  }

  #[test]
  fn test_neighbors_bounded() {
    let uni = universe(3, 3, &[(0, 0), (0, 2), (2, 0), (2, 2), (1, 1)]);
    assert_eq!(uni.num_of_alive_neighbors(1, 1).unwrap(), 4);
    assert_eq!(uni.num_of_alive_neighbors(0, 0).unwrap(), 1);
    assert_eq!(uni.num_of_alive_neighbors(0, 1).unwrap(), 3);
    assert!(matches!(uni.num_of_alive_neighbors(3, 0), Err(Error::OutOfBounds { .. })));
  }

  #[test]
  fn test_neighbors_toroidal() {
    let uni = universe(4, 4, &[(0, 0), (3, 3), (0, 3), (3, 0)])
      .with_adjacency(Adjacency::Toroidal);
    // all four corners touch each other across the edges
    assert_eq!(uni.num_of_alive_neighbors(0, 0).unwrap(), 3);
    assert_eq!(uni.num_of_alive_neighbors(1, 1).unwrap(), 1);

    let uni = uni.with_adjacency(Adjacency::Bounded);
    assert_eq!(uni.num_of_alive_neighbors(0, 0).unwrap(), 0);
  }

  #[test]
  fn test_blinker_wraps_on_torus() {
    // a vertical blinker across the top/bottom seam
    let mut uni = universe(5, 5, &[(4, 2), (0, 2), (1, 2)])
      .with_adjacency(Adjacency::Toroidal);
    uni.next_generation();
    assert_eq!(uni.grid(), &Grid::with_alive(5, 5, vec![(0, 1), (0, 2), (0, 3)]).unwrap());

    // bounded, the cell on the bottom edge is isolated
    let mut uni = universe(5, 5, &[(4, 2), (0, 2), (1, 2)]);
    uni.next_generation();
    assert_eq!(uni.total_alive_cells(), 0);
  }

  #[test]
  fn test_compute_new_grid_is_pure() {
    let uni = Universe::seed();
    let before = uni.grid().clone();
    let a = uni.compute_new_grid();
    let b = uni.compute_new_grid();
    assert_eq!(a, b);
    assert_eq!(uni.grid(), &before);
    assert_eq!(uni.generation(), 0);
  }

  #[test]
  fn test_advance() {
    let mut uni = Universe::seed();
    assert!(matches!(uni.advance(-1), Err(Error::InvalidArgument(_))));
    assert_eq!(uni.generation(), 0);
    assert_eq!(uni.total_alive_cells(), 5);

    uni.advance(0).unwrap();
    assert_eq!(uni.grid(), Universe::seed().grid());

    uni.advance(2).unwrap();
    assert_eq!(uni.total_alive_cells(), 3);
  }

  #[test]
  fn test_custom_rule() {
    // B1/S: every isolated cell spawns a ring and dies
    let rule: Rule = "B1/S".parse().unwrap();
    let mut uni = universe(3, 3, &[(1, 1)]).with_rule(rule);
    uni.next_generation();
    assert_eq!(uni.total_alive_cells(), 8);
    assert!(!uni.cell_state(1, 1).unwrap());
  }
}
