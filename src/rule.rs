use std::fmt::{self, Display};
use std::str::FromStr;
use regex::Regex;
use crate::error::{Error, Result};

/// Outer-totalistic rule over the Moore neighborhood.
///
/// Bit `n` of `birth` is set when a dead cell with `n` live neighbors is
/// born; bit `n` of `survival` when an alive cell with `n` live neighbors
/// stays alive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rule {
  birth: NeighborMask,
  survival: NeighborMask,
}

pub(crate) type NeighborMask = u16;

/// B3/S23
pub const GAME_OF_LIFE: Rule = Rule {
  birth: 0b000001000,
  survival: 0b000001100,
};

impl Rule {
  /// A rule under which nothing is born and nothing survives.
  pub fn new() -> Self {
    Self::default()
  }

  /// Only neighbors of alive cells are ever evaluated, so a dead cell with
  /// no live neighbor can never be born; `B0` is rejected.
  pub fn set_birth(&mut self, num: u8) -> Result<()> {
    if num > 8 {
      return Err(Error::NeighborCountOutOfRange(num));
    }
    if num == 0 {
      return Err(Error::BirthOnZero);
    }
    self.birth |= 1 << num;
    Ok(())
  }

  pub fn set_survival(&mut self, num: u8) -> Result<()> {
    if num > 8 {
      return Err(Error::NeighborCountOutOfRange(num));
    }
    self.survival |= 1 << num;
    Ok(())
  }

  /// State of a cell in the next generation given its current state and
  /// its number of live neighbors.
  pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
    debug_assert!(neighbors <= 8);
    let mask = if alive { self.survival } else { self.birth };
    mask >> neighbors & 1 != 0
  }
}

impl FromStr for Rule {
  type Err = Error;

  /// Parses the `B<digits>/S<digits>` notation, e.g. `B36/S23`.
  fn from_str(src: &str) -> Result<Self> {
    let re = Regex::new(r"^[Bb]([0-9]*)/[Ss]([0-9]*)$").unwrap();
    let caps = re.captures(src.trim())
      .ok_or_else(|| Error::InvalidRule(src.to_owned()))?;

    let mut rule = Rule::new();
    for c in caps[1].chars() {
      rule.set_birth(c as u8 - b'0')?;
    }
    for c in caps[2].chars() {
      rule.set_survival(c as u8 - b'0')?;
    }
    Ok(rule)
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "B")?;
    let mut b = self.birth;
    while b != 0 {
      write!(f, "{}", b.trailing_zeros())?;
      b &= b - 1;
    }
    write!(f, "/S")?;
    let mut s = self.survival;
    while s != 0 {
      write!(f, "{}", s.trailing_zeros())?;
      s &= s - 1;
    }
    Ok(())
  }
}
