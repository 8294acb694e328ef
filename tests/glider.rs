use itertools::Itertools;
use pretty_assertions::assert_eq;
use sparselife::*;

fn seed(cells: &[(i64, i64)]) -> SparseBoard {
  SparseBoard::new(cells.iter().map(|&c| Coord::from(c)))
}

fn alive(board: &SparseBoard) -> Vec<(i64, i64)> {
  board.alive_cells().sorted().map(|c| (c.row, c.col)).collect_vec()
}

const GLIDER: [(i64, i64); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

#[test]
fn first_phase() {
  let board = StepEngine::default().advance(seed(&GLIDER));
  assert_eq!(alive(&board), vec![(1, 0), (1, 2), (2, 1), (2, 2), (3, 1)]);
}

#[test]
fn moves_diagonally_every_four_generations() {
  let engine = StepEngine::default();
  let mut board = seed(&GLIDER);
  for k in 1..=10 {
    board = engine.advance_by(board, 4);
    let expected = GLIDER.iter()
      .map(|&(r, c)| (r + k, c + k))
      .sorted()
      .collect_vec();
    assert_eq!(alive(&board), expected);
  }
}

#[test]
fn bounds_follow_the_glider() {
  let board = StepEngine::default().advance_by(seed(&GLIDER), 40);
  assert_eq!(board.bounds(), Some(Bounds {
    row_min: 0,
    row_max: 12,
    col_min: 0,
    col_max: 12,
  }));
  assert_eq!(board.population(), 5);
}

#[test]
fn rendered_first_phase() {
  let engine = StepEngine::default();
  let board = engine.advance(seed(&GLIDER));
  assert_eq!(render::render(&board).to_string(), "\
0 0 0
1 0 1
0 1 1
0 1 0

");
}
