use std::fmt;
use itertools::Itertools;
use crate::board::*;
use crate::coord::Coord;

/// Printed instead of a grid once no cell is alive.
pub const EXTINCT_MARKER: &str = "No living cell is alive";

/// One rendered generation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Frame {
  Extinct,
  /// Rows of space separated `0`/`1`, without a trailing newline.
  Grid(String),
}

impl Frame {
  pub fn is_extinct(&self) -> bool {
    matches!(self, Frame::Extinct)
  }
}

impl fmt::Display for Frame {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Frame::Extinct => writeln!(f, "{}", EXTINCT_MARKER),
      Frame::Grid(grid) => write!(f, "{}\n\n", grid),
    }
  }
}

/// Cells of the board's bounding rectangle, one byte per cell, row-major.
pub fn write_buffer(board: &SparseBoard) -> Vec<Vec<u8>> {
  let bounds = match board.bounds() {
    Some(bounds) => bounds,
    None => return vec![],
  };

  bounds.rows()
    .map(|row| {
      bounds.cols()
        .map(|col| board.is_alive(Coord::new(row, col)) as u8)
        .collect_vec()
    })
    .collect_vec()
}

pub fn render(board: &SparseBoard) -> Frame {
  if board.is_empty() {
    return Frame::Extinct;
  }

  let grid = write_buffer(board)
    .into_iter()
    .map(|row| row.into_iter().join(" "))
    .join("\n");
  Frame::Grid(grid)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn board(cells: &[(i64, i64)]) -> SparseBoard {
    SparseBoard::new(cells.iter().map(|&c| Coord::from(c)))
  }

  #[test]
  fn test_write_buffer() {
    let b = board(&[(-1, 2), (0, 0), (1, 1)]);
    assert_eq!(write_buffer(&b), vec![
      vec![0, 0, 1],
      vec![1, 0, 0],
      vec![0, 1, 0],
    ]);
  }

  #[test]
  fn test_write_buffer_empty() {
    assert_eq!(write_buffer(&SparseBoard::default()), Vec::<Vec<u8>>::new());
  }

  #[test]
  fn test_render() {
    let b = board(&[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
    let frame = render(&b);
    assert_eq!(frame, Frame::Grid("0 1 0\n1 1 1\n0 1 0".to_owned()));
    assert_eq!(frame.to_string(), "0 1 0\n1 1 1\n0 1 0\n\n");
  }

  #[test]
  fn test_render_single_cell() {
    assert_eq!(render(&board(&[(7, -7)])).to_string(), "1\n\n");
  }

  #[test]
  fn test_render_extinct() {
    let frame = render(&SparseBoard::default());
    assert!(frame.is_extinct());
    assert_eq!(frame.to_string(), "No living cell is alive\n");
  }

  #[test]
  fn test_render_keeps_historical_bounds() {
    let mut b = SparseBoard::with_bounds(Some(Bounds {
      row_min: -1,
      row_max: 1,
      col_min: 0,
      col_max: 3,
    }));
    b.insert_alive(Coord::new(0, 1));
    assert_eq!(render(&b).to_string(), "0 0 0 0\n0 1 0 0\n0 0 0 0\n\n");
  }
}
