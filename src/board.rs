use std::hash::BuildHasherDefault;
use std::ops::RangeInclusive;
use indexmap::IndexMap;
use rustc_hash::FxHasher;
use crate::coord::*;

type CellMap = IndexMap<Coord, CellState, BuildHasherDefault<FxHasher>>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum CellState {
  /// Tracked only as frontier while a step is in progress.
  Dead = 0,
  Alive = 1,
}

/// Smallest rectangle containing every alive cell observed so far. Both
/// ends are inclusive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bounds {
  pub row_min: i64,
  pub row_max: i64,
  pub col_min: i64,
  pub col_max: i64,
}

impl Bounds {
  pub fn around(c: Coord) -> Self {
    Self {
      row_min: c.row,
      row_max: c.row,
      col_min: c.col,
      col_max: c.col,
    }
  }

  pub fn extend(&mut self, c: Coord) {
    self.row_min = self.row_min.min(c.row);
    self.row_max = self.row_max.max(c.row);
    self.col_min = self.col_min.min(c.col);
    self.col_max = self.col_max.max(c.col);
  }

  pub fn contains(&self, c: Coord) -> bool {
    self.rows().contains(&c.row) && self.cols().contains(&c.col)
  }

  pub fn rows(&self) -> RangeInclusive<i64> {
    self.row_min..=self.row_max
  }

  pub fn cols(&self) -> RangeInclusive<i64> {
    self.col_min..=self.col_max
  }

  pub fn height(&self) -> u64 {
    (self.row_max - self.row_min) as u64 + 1
  }

  pub fn width(&self) -> u64 {
    (self.col_max - self.col_min) as u64 + 1
  }
}

/// Sparse map from coordinates to cell states.
///
/// Between generations the map holds alive cells only. [`expand_frontier`]
/// adds the dead neighbors of tracked cells so the step engine can detect
/// births; such a board is only read afterwards and is then dropped.
///
/// [`expand_frontier`]: SparseBoard::expand_frontier
#[derive(Clone, Debug, Default)]
pub struct SparseBoard {
  cells: CellMap,
  bounds: Option<Bounds>,
  population: usize,
}

impl SparseBoard {
  pub fn new(seed: impl IntoIterator<Item = Coord>) -> Self {
    let mut board = Self::default();
    for c in seed {
      board.insert_alive(c);
    }
    board
  }

  /// An empty board whose bounds start from `bounds`, so that bounds keep
  /// growing across generations.
  pub fn with_bounds(bounds: Option<Bounds>) -> Self {
    Self {
      bounds,
      ..Self::default()
    }
  }

  pub fn insert_alive(&mut self, c: Coord) {
    if self.cells.insert(c, CellState::Alive) != Some(CellState::Alive) {
      self.population += 1;
    }
    self.extend_bounds(c);
  }

  pub fn is_alive(&self, c: Coord) -> bool {
    self.cells.get(&c) == Some(&CellState::Alive)
  }

  /// Adds every Moore neighbor of the cells tracked at call time as a dead
  /// cell, unless already tracked. A single pass: neighbors added here are
  /// not expanded in turn.
  pub fn expand_frontier(&mut self) {
    let candidates: Vec<Coord> = self.cells.keys()
      .flat_map(|&c| c.neighbors())
      .collect();
    for c in candidates {
      self.cells.entry(c).or_insert(CellState::Dead);
    }
  }

  pub fn count_living_neighbors(&self, c: Coord) -> u8 {
    c.neighbors().filter(|&n| self.is_alive(n)).count() as u8
  }

  pub fn extend_bounds(&mut self, c: Coord) {
    match &mut self.bounds {
      Some(bounds) => bounds.extend(c),
      None => self.bounds = Some(Bounds::around(c)),
    }
  }

  pub fn bounds(&self) -> Option<Bounds> {
    self.bounds
  }

  /// Number of alive cells.
  pub fn population(&self) -> usize {
    self.population
  }

  /// Number of tracked dead cells.
  pub fn frontier_len(&self) -> usize {
    self.cells.len() - self.population
  }

  pub fn is_empty(&self) -> bool {
    self.population == 0
  }

  /// Every tracked cell with its state, in insertion order.
  pub fn cells(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
    self.cells.iter().map(|(&c, &state)| (c, state))
  }

  pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
    self.cells()
      .filter(|&(_, state)| state == CellState::Alive)
      .map(|(c, _)| c)
  }
}
