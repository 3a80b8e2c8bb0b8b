use std::fmt::{self, Display};
use std::str::FromStr;
use crate::error::Error;

/// Life-like rule in B/S notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

/// Bit `n` set means "applies with `n` live neighbors".
pub(crate) type NeighborMask = u16;

pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Default for Rule {
  fn default() -> Self {
    GAME_OF_LIFE
  }
}

impl Rule {
  /// Next state of a cell with `neighbors` live neighbors.
  #[inline]
  pub fn next_state(&self, alive: bool, neighbors: usize) -> bool {
    let mask = if alive { self.survival } else { self.birth };
    neighbors < 9 && mask >> neighbors & 1 != 0
  }

  pub fn births(&self) -> impl Iterator<Item = u8> {
    counts(self.birth)
  }

  pub fn survivals(&self) -> impl Iterator<Item = u8> {
    counts(self.survival)
  }
}

fn counts(mask: NeighborMask) -> impl Iterator<Item = u8> {
  (0..9u8).filter(move |&n| mask >> n & 1 != 0)
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    for n in self.births() {
      write!(f, "{}", n)?;
    }
    write!(f, "/S")?;
    for n in self.survivals() {
      write!(f, "{}", n)?;
    }
    Ok(())
  }
}

/// Accepts `B3/S23` as well as the older `23/3` (survival first) notation.
impl FromStr for Rule {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    let s = s.trim();
    let (left, right) = s.split_once('/')
      .ok_or_else(|| Error::invalid(format!("rule {:?} has no '/'", s)))?;

    let (birth, survival) = match (strip_prefix_ci(left, 'b'), strip_prefix_ci(right, 's')) {
      (Some(b), Some(s)) => (b, s),
      (None, None) => match (strip_prefix_ci(left, 's'), strip_prefix_ci(right, 'b')) {
        (Some(s), Some(b)) => (b, s),
        _ => (right, left),
      },
      _ => return Err(Error::invalid(format!("rule {:?} is not in B/S notation", s))),
    };

    Ok(Rule {
      birth: parse_mask(birth, s)?,
      survival: parse_mask(survival, s)?,
    })
  }
}

fn strip_prefix_ci(s: &str, c: char) -> Option<&str> {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) if first.eq_ignore_ascii_case(&c) => Some(chars.as_str()),
    _ => None,
  }
}

fn parse_mask(digits: &str, rule: &str) -> Result<NeighborMask, Error> {
  let mut mask = 0;
  for c in digits.chars() {
    match c.to_digit(10) {
      Some(n) if n < 9 => mask |= 1 << n,
      _ => {
        return Err(Error::invalid(format!(
          "rule {:?} has an invalid neighbor count {:?}", rule, c)));
      }
    }
  }
  Ok(mask)
}
