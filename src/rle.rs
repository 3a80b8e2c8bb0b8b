use regex::Regex;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::rule::*;

/// Read a Life pattern from a RLE string. The header's `x` and `y` become the
/// grid's columns and rows; the rule defaults to B3/S23.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn read(src: impl AsRef<str>) -> Result<(Grid, Rule)> {
  let header_re = Regex::new(
    r"^x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)\s*(?:,\s*rule\s*=\s*(\S+)\s*)?$"
  ).expect("header regex is valid");

  let mut lines = src.as_ref().lines()
    .map(str::trim)
    .filter(|line| !line.is_empty() && !line.starts_with('#'));

  let header = lines.next().ok_or_else(|| Error::format("missing RLE header"))?;
  let caps = header_re.captures(header)
    .ok_or_else(|| Error::format(format!("invalid RLE header {:?}", header)))?;
  let columns: usize = caps[1].parse()
    .map_err(|_| Error::format(format!("invalid width {:?}", &caps[1])))?;
  let rows: usize = caps[2].parse()
    .map_err(|_| Error::format(format!("invalid height {:?}", &caps[2])))?;
  let rule = match caps.get(3) {
    Some(m) => m.as_str().parse::<Rule>()
      .map_err(|_| Error::format(format!("invalid rule {:?}", m.as_str())))?,
    None => GAME_OF_LIFE,
  };

  let mut grid = Grid::new(rows, columns)?;

  let mut x = 0;
  let mut y = 0;
  let mut num: Option<usize> = None;
  let mut terminated = false;
  'lines: for line in lines {
    for c in line.chars() {
      match c {
        '0'..='9' => {
          let digit = c as usize - '0' as usize;
          num = Some(num.unwrap_or(0)
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| Error::format("run count overflows"))?);
          continue;
        }
        c if c.is_whitespace() => continue,
        _ => {}
      }

      let n = num.take().unwrap_or(1);
      match c {
        'b' | '.' => {
          x = advance(x, n, columns, || format!("dead cells at row {}", y))?;
        }
        'o' | 'A' => {
          if y >= rows {
            return Err(Error::format(format!(
              "live cells at row {} lie outside the {}x{} pattern", y, columns, rows)));
          }
          let end = advance(x, n, columns, || format!("live cells at row {}", y))?;
          for col in x..end {
            grid.set(y, col, true)?;
          }
          x = end;
        }
        '$' => {
          x = 0;
          y = advance(y, n, rows, || "row breaks".to_string())?;
        }
        '!' => {
          terminated = true;
          break 'lines;
        }
        _ => {
          return Err(Error::format(format!("invalid character {:?}", c)));
        }
      }
    }
  }

  if !terminated {
    return Err(Error::format("unexpected end of RLE data, missing '!'"));
  }

  Ok((grid, rule))
}

/// `pos + n`, as long as it stays within `limit`.
fn advance(pos: usize, n: usize, limit: usize, what: impl FnOnce() -> String) -> Result<usize> {
  match pos.checked_add(n) {
    Some(end) if end <= limit => Ok(end),
    _ => Err(Error::format(format!(
      "{} run past {} by {} from {}", what(), limit, n, pos))),
  }
}

/// Write a grid to a RLE string. Trailing dead cells of a row and trailing
/// empty rows are left out, the header keeps the full grid size.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>.
pub fn write(grid: &Grid, rule: Rule) -> String {
  let mut output = format!("x = {}, y = {}, rule = {}\n", grid.columns(), grid.rows(), rule);

  let mut num_consec_next_rows = 0;
  for row in grid.cells().chunks(grid.columns()) {
    let mut runs: Vec<(RleUnit, usize)> = vec![];
    for &alive in row {
      let unit = if alive { RleUnit::Alive } else { RleUnit::Dead };
      match runs.last_mut() {
        Some((last, num)) if *last == unit => *num += 1,
        _ => runs.push((unit, 1)),
      }
    }
    if let Some((RleUnit::Dead, _)) = runs.last() {
      runs.pop();
    }

    if runs.is_empty() {
      num_consec_next_rows += 1;
      continue;
    }

    if num_consec_next_rows > 0 {
      RleUnit::NextRow.write(num_consec_next_rows, &mut output);
    }
    for (unit, num) in runs {
      unit.write(num, &mut output);
    }
    num_consec_next_rows = 1;
  }

  RleUnit::End.write(1, &mut output);
  output.push('\n');
  output
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum RleUnit {
  Dead,
  Alive,
  NextRow,
  End,
}

impl RleUnit {
  fn write(&self, num: usize, s: &mut String) {
    let c = match self {
      Self::Dead => 'b',
      Self::Alive => 'o',
      Self::NextRow => '$',
      Self::End => '!',
    };

    let buf = if num == 1 {
      c.to_string()
    } else {
      format!("{}{}", num, c)
    };

    let line_len = s.len() - s.rfind('\n').map_or(0, |i| i + 1);
    if line_len + buf.len() > 70 {
      s.push('\n');
    }

    s.push_str(&buf);
  }
}
