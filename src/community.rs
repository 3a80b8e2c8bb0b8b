//! Connected groups of live cells.
//!
//! With [`Adjacency::Bounded`] two live cells belong to the same community
//! when they are joined by a chain of live cells, each a north, south, east or
//! west neighbor of the next, without leaving the grid.
//!
//! With [`Adjacency::Toroidal`] every pair of live cells is tested against the
//! wrap-aware neighbor predicate instead: rows and columns must each differ by
//! at most one, where a difference of `rows - 1` (or `columns - 1`) counts as
//! one because the edges meet. Diagonal contact joins communities in this
//! mode. It is quadratic in the number of live cells.

use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use log::trace;
use rustc_hash::{FxHashSet, FxHasher};
use crate::grid::Grid;
use crate::topology::{Adjacency, VON_NEUMANN};
use crate::union_find::UnionFind;

/// Number of communities of live cells in `grid`.
pub fn num_of_communities(grid: &Grid, adjacency: Adjacency) -> usize {
  let mut uf = connect(grid, adjacency);

  let mut roots = FxHashSet::default();
  for id in 0..uf.len() {
    let root = uf.find_id(id);
    trace!("cell ({}, {}) has root {}", id / grid.columns(), id % grid.columns(), root);
    roots.insert(root);
  }

  // dead cells are never joined to anything, so each one is its own root
  let dead_cells = grid.len() - grid.count_alive();
  roots.len() - dead_cells
}

/// Live cells of every community. Communities are ordered by their first
/// cell, and cells within a community are in row-major order.
pub fn communities(grid: &Grid, adjacency: Adjacency) -> Vec<Vec<(usize, usize)>> {
  let mut uf = connect(grid, adjacency);

  let mut groups: IndexMap<usize, Vec<(usize, usize)>, BuildHasherDefault<FxHasher>> =
    IndexMap::default();
  for (row, col) in grid.alive_cells() {
    let root = uf.find_id(row * grid.columns() + col);
    groups.entry(root).or_insert_with(Vec::new).push((row, col));
  }
  groups.into_iter().map(|(_, cells)| cells).collect()
}

fn connect(grid: &Grid, adjacency: Adjacency) -> UnionFind {
  let (rows, columns) = (grid.rows(), grid.columns());
  let mut uf = UnionFind::new(rows, columns)
    .expect("grids always have positive dimensions");

  match adjacency {
    Adjacency::Bounded => {
      for (row, col) in grid.alive_cells() {
        for &d in VON_NEUMANN.iter() {
          if let Some((r, c)) = adjacency.step((row, col), d, rows, columns) {
            if grid.at(r, c) {
              uf.union_ids(row * columns + col, r * columns + c);
            }
          }
        }
      }
    }
    Adjacency::Toroidal => {
      let alive: Vec<_> = grid.alive_cells().collect();
      for &a in &alive {
        for &b in &alive {
          if adjacency.are_neighbors(a, b, rows, columns) {
            uf.union_ids(a.0 * columns + a.1, b.0 * columns + b.1);
          }
        }
      }
    }
  }

  uf
}
