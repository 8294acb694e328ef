use crate::board::*;
use crate::rule::*;

/// Applies one generation transition at a time.
#[derive(Debug, Clone, Copy)]
pub struct StepEngine {
  rule: Rule,
}

impl Default for StepEngine {
  fn default() -> Self {
    Self::new(GAME_OF_LIFE)
  }
}

impl StepEngine {
  pub fn new(rule: Rule) -> Self {
    Self { rule }
  }

  pub fn rule(&self) -> Rule {
    self.rule
  }

  /// Computes the next generation of `board`.
  ///
  /// Every neighbor count is taken from the expanded `board`, which is not
  /// modified while counting; the survivors go into a new board that only
  /// inherits the bounds. The frontier is dropped together with `board`.
  pub fn advance(&self, mut board: SparseBoard) -> SparseBoard {
    board.expand_frontier();

    let mut next = SparseBoard::with_bounds(board.bounds());
    let mut births = 0usize;
    for (c, state) in board.cells() {
      let alive = state == CellState::Alive;
      let n = board.count_living_neighbors(c);
      if self.rule.next_state(alive, n) {
        if !alive {
          births += 1;
        }
        next.insert_alive(c);
      }
    }

    log::trace!(
      "step: {} tracked, {} births, {} deaths",
      board.population() + board.frontier_len(),
      births,
      board.population() + births - next.population(),
    );
    next
  }

  /// Advances `num_gen` generations, stopping as soon as the board is empty.
  pub fn advance_by(&self, mut board: SparseBoard, num_gen: usize) -> SparseBoard {
    for _ in 0..num_gen {
      if board.is_empty() {
        break;
      }
      board = self.advance(board);
    }
    board
  }
}
