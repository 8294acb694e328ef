use std::io::Write;
use std::mem;
use crate::board::SparseBoard;
use crate::config::Config;
use crate::engine::StepEngine;
use crate::error::Result;
use crate::render::render;

/// Printed after the last generation of a run that did not die out.
pub const END_MARKER: &str = "OVER:";

/// How a [`Simulation::run`] ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outcome {
  /// Frames written, the final "no living cell" frame included.
  pub generations_rendered: usize,
  pub extinct: bool,
}

pub struct Simulation {
  config: Config,
  engine: StepEngine,
  board: SparseBoard,
  generation: usize,
}

impl Simulation {
  pub fn new(config: Config) -> Self {
    let board = SparseBoard::new(config.seed.iter().copied());
    Self {
      engine: StepEngine::new(config.rule),
      config,
      board,
      generation: 0,
    }
  }

  pub fn board(&self) -> &SparseBoard {
    &self.board
  }

  /// Number of generations advanced since the seed.
  pub fn generation(&self) -> usize {
    self.generation
  }

  pub fn step(&mut self) {
    let board = mem::take(&mut self.board);
    self.board = self.engine.advance(board);
    self.generation += 1;
    log::debug!(
      "generation {}: population {}, bounds {:?}",
      self.generation,
      self.board.population(),
      self.board.bounds(),
    );
  }

  /// Renders the current board and advances it, `config.generations` times.
  /// Stops without advancing further as soon as a rendered board is empty.
  pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Outcome> {
    log::info!(
      "simulating {} generations from {} seed cells under {}",
      self.config.generations,
      self.board.population(),
      self.engine.rule(),
    );

    for i in 1..=self.config.generations {
      writeln!(out, "GEN: ----> {}", i)?;
      let frame = render(&self.board);
      write!(out, "{}", frame)?;
      if frame.is_extinct() {
        log::info!("no living cell left after {} generations", self.generation);
        return Ok(Outcome {
          generations_rendered: i,
          extinct: true,
        });
      }
      self.step();
    }

    writeln!(out, "{}", END_MARKER)?;
    Ok(Outcome {
      generations_rendered: self.config.generations,
      extinct: false,
    })
  }
}
