use crate::error::{Error, Result};
use crate::grid::check_dimensions;

/// Weighted quick-union over the cells of a `rows x columns` grid.
///
/// Cell `(row, col)` has id `row * columns + col`.
#[derive(Clone, Debug)]
pub struct UnionFind {
  parent: Vec<usize>,
  size: Vec<usize>,
  rows: usize,
  columns: usize,
}

impl UnionFind {
  pub fn new(rows: usize, columns: usize) -> Result<Self> {
    let len = check_dimensions(rows, columns)?;
    Ok(Self {
      parent: (0..len).collect(),
      size: vec![1; len],
      rows,
      columns,
    })
  }

  pub(crate) fn len(&self) -> usize {
    self.parent.len()
  }

  fn id(&self, row: usize, col: usize) -> Result<usize> {
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

  /// Root id of the set containing `(row, col)`.
  pub fn find(&mut self, row: usize, col: usize) -> Result<usize> {
    let id = self.id(row, col)?;
    Ok(self.find_id(id))
  }

  /// Every node on the way up is re-pointed at the root.
  pub(crate) fn find_id(&mut self, id: usize) -> usize {
    let mut root = id;
    while self.parent[root] != root {
      root = self.parent[root];
    }

    let mut node = id;
    while self.parent[node] != root {
      let next = self.parent[node];
      self.parent[node] = root;
      node = next;
    }
    root
  }

  pub fn union(
    &mut self, row1: usize, col1: usize, row2: usize, col2: usize
  ) -> Result<()> {
    let a = self.id(row1, col1)?;
    let b = self.id(row2, col2)?;
    self.union_ids(a, b);
    Ok(())
  }

  /// The smaller tree goes under the larger one. On a tie the first root is
  /// attached under the second.
  pub(crate) fn union_ids(&mut self, a: usize, b: usize) {
    let root_a = self.find_id(a);
    let root_b = self.find_id(b);
    if root_a == root_b {
      return;
    }

    if self.size[root_a] > self.size[root_b] {
      self.parent[root_b] = root_a;
      self.size[root_a] += self.size[root_b];
    } else {
      self.parent[root_a] = root_b;
      self.size[root_b] += self.size[root_a];
    }
  }

  pub fn connected(
    &mut self, row1: usize, col1: usize, row2: usize, col2: usize
  ) -> Result<bool> {
    Ok(self.find(row1, col1)? == self.find(row2, col2)?)
  }

  /// Number of cells in the set containing `(row, col)`.
  pub fn set_size(&mut self, row: usize, col: usize) -> Result<usize> {
    let root = self.find(row, col)?;
    Ok(self.size[root])
  }
}
