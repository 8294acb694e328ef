use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
  /// A seed matrix row whose width differs from the first row.
  #[error("seed row {row} has {found} cells, expected {expected}")]
  RaggedSeed {
    row: usize,
    expected: usize,
    found: usize,
  },
  /// A seed matrix entry other than 0 or 1.
  #[error("seed cell ({row}, {col}) is {value}, expected 0 or 1")]
  InvalidSeedCell {
    row: usize,
    col: usize,
    value: u8,
  },
  #[error("neighbor count {0} is out of range 0..=8")]
  NeighborCountOutOfRange(u8),
  #[error("B0 rules are not supported by a sparse board")]
  BirthOnZero,
  #[error("invalid rule {0:?}, expected B<digits>/S<digits>")]
  InvalidRule(String),
  #[error("failed to write output")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
