use crate::coord::Coord;
use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::rule::{Rule, GAME_OF_LIFE};

pub const DEFAULT_GENERATIONS: usize = 5;

/// Everything a simulation run depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
  /// Cells alive in the first generation.
  pub seed: Vec<Coord>,
  /// Number of generations to render.
  pub generations: usize,
  pub rule: Rule,
}

impl Default for Config {
  fn default() -> Self {
    Self::from_pattern(Pattern::Plus, DEFAULT_GENERATIONS)
  }
}

impl Config {
  pub fn new(seed: impl IntoIterator<Item = Coord>, generations: usize) -> Self {
    Self {
      seed: seed.into_iter().collect(),
      generations,
      rule: GAME_OF_LIFE,
    }
  }

  /// Takes the alive cells of a rectangular 0/1 matrix, row `i` column `j`
  /// becoming `Coord { row: i, col: j }`.
  pub fn from_matrix<R: AsRef<[u8]>>(rows: &[R], generations: usize) -> Result<Self> {
    Ok(Self::new(seed_from_matrix(rows)?, generations))
  }

  pub fn from_pattern(pattern: Pattern, generations: usize) -> Self {
    // built-in matrices are rectangular and binary
    let seed = seed_from_matrix(pattern.matrix()).unwrap_or_default();
    Self::new(seed, generations)
  }

  pub fn with_rule(mut self, rule: Rule) -> Self {
    self.rule = rule;
    self
  }
}

pub fn seed_from_matrix<R: AsRef<[u8]>>(rows: &[R]) -> Result<Vec<Coord>> {
  let width = rows.first().map_or(0, |row| row.as_ref().len());
  let mut seed = vec![];
  for (i, row) in rows.iter().enumerate() {
    let row = row.as_ref();
    if row.len() != width {
      return Err(Error::RaggedSeed {
        row: i,
        expected: width,
        found: row.len(),
      });
    }
    for (j, &value) in row.iter().enumerate() {
      match value {
        0 => {}
        1 => seed.push(Coord::new(i as i64, j as i64)),
        _ => return Err(Error::InvalidSeedCell { row: i, col: j, value }),
      }
    }
  }
  Ok(seed)
}
