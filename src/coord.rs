use std::fmt;

/// Offsets of the Moore neighborhood, clockwise starting from the west.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
  (0, -1),
  (-1, -1),
  (-1, 0),
  (-1, 1),
  (0, 1),
  (1, 1),
  (1, 0),
  (1, -1),
];

/// A cell position. Rows grow downwards, columns to the right, and both may
/// be negative.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Coord {
  pub row: i64,
  pub col: i64,
}

impl Coord {
  pub const fn new(row: i64, col: i64) -> Self {
    Self { row, col }
  }

  pub fn offset(self, d_row: i64, d_col: i64) -> Self {
    Self::new(self.row + d_row, self.col + d_col)
  }

  /// The 8 cells horizontally, vertically or diagonally adjacent to `self`.
  pub fn neighbors(self) -> impl Iterator<Item = Coord> {
    MOORE_OFFSETS.into_iter().map(move |(dr, dc)| self.offset(dr, dc))
  }
}

impl From<(i64, i64)> for Coord {
  fn from((row, col): (i64, i64)) -> Self {
    Self::new(row, col)
  }
}

impl fmt::Display for Coord {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.row, self.col)
  }
}
