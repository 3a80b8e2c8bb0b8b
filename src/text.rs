use crate::error::{Error, Result};
use crate::grid::{check_dimensions, Grid};

/// Read a grid in the plain format: the number of rows, the number of
/// columns, then one `true`/`false` (or `1`/`0`) token per cell in row-major
/// order. Tokens may be separated by any whitespace.
pub fn read(src: impl AsRef<str>) -> Result<Grid> {
  let mut tokens = src.as_ref().split_whitespace();

  let rows = dimension(tokens.next(), "row count")?;
  let columns = dimension(tokens.next(), "column count")?;
  let len = check_dimensions(rows, columns)?;
  let mut cells = Vec::with_capacity(len.min(1 << 20));
  for i in 0..len {
    let token = tokens.next().ok_or_else(|| Error::format(format!(
      "expected {} cells, found {}", len, i)))?;
    cells.push(cell(token).ok_or_else(|| Error::format(format!(
      "cell ({}, {}) is {:?}, expected true or false", i / columns, i % columns, token)))?);
  }

  if let Some(token) = tokens.next() {
    return Err(Error::format(format!(
      "unexpected token {:?} after the last cell", token)));
  }

  Grid::from_cells(rows, columns, cells)
}

fn dimension(token: Option<&str>, what: &str) -> Result<usize> {
  let token = token.ok_or_else(|| Error::format(format!("missing {}", what)))?;
  token.parse().map_err(|_| Error::format(format!(
    "{} {:?} is not a non-negative integer", what, token)))
}

fn cell(token: &str) -> Option<bool> {
  if token.eq_ignore_ascii_case("true") || token == "1" {
    Some(true)
  } else if token.eq_ignore_ascii_case("false") || token == "0" {
    Some(false)
  } else {
    None
  }
}

/// Write a grid in the plain format, one row per line.
pub fn write(grid: &Grid) -> String {
  let mut output = format!("{}\n{}\n", grid.rows(), grid.columns());
  for row in grid.cells().chunks(grid.columns()) {
    let line = row.iter()
      .map(|&alive| if alive { "true" } else { "false" })
      .collect::<Vec<_>>()
      .join(" ");
    output.push_str(&line);
    output.push('\n');
  }
  output
}
