use std::io::{self, BufWriter, Write};
use std::process;
use clap::{Parser, ValueEnum};
use sparselife::config::DEFAULT_GENERATIONS;
use sparselife::{Config, Pattern, Rule, Simulation};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliPattern {
  Plus,
  Block,
  Blinker,
  Glider,
  #[value(name = "r-pentomino")]
  RPentomino,
}

impl From<CliPattern> for Pattern {
  fn from(value: CliPattern) -> Self {
    match value {
      CliPattern::Plus => Pattern::Plus,
      CliPattern::Block => Pattern::Block,
      CliPattern::Blinker => Pattern::Blinker,
      CliPattern::Glider => Pattern::Glider,
      CliPattern::RPentomino => Pattern::RPentomino,
    }
  }
}

/// Game of Life on an unbounded sparse grid
#[derive(Parser, Debug)]
#[command(name = "sparselife", version, about)]
struct Cli {
  /// Number of generations to print
  #[arg(long, default_value_t = DEFAULT_GENERATIONS)]
  generations: usize,

  /// Seed pattern
  #[arg(long, value_enum, default_value_t = CliPattern::Plus)]
  pattern: CliPattern,

  /// Rule in B/S notation
  #[arg(long, default_value = "B3/S23")]
  rule: Rule,
}

fn main() {
  env_logger::init();
  let cli = Cli::parse();

  let config = Config::from_pattern(cli.pattern.into(), cli.generations)
    .with_rule(cli.rule);
  let mut sim = Simulation::new(config);

  let stdout = io::stdout();
  let mut out = BufWriter::new(stdout.lock());
  let result = sim.run(&mut out)
    .and_then(|_| out.flush().map_err(Into::into));
  if let Err(err) = result {
    log::error!("{}", err);
    process::exit(1);
  }
}
