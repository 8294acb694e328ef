use std::fmt;

/// Built-in seed patterns, as 0/1 matrices.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pattern {
  Plus,
  Block,
  Blinker,
  Glider,
  RPentomino,
}

pub const PATTERNS: &[Pattern] = &[
  Pattern::Plus,
  Pattern::Block,
  Pattern::Blinker,
  Pattern::Glider,
  Pattern::RPentomino,
];

impl Pattern {
  pub fn matrix(self) -> &'static [&'static [u8]] {
    match self {
      Pattern::Plus => &[
        &[0, 1, 0],
        &[1, 1, 1],
        &[0, 1, 0],
      ],
      Pattern::Block => &[
        &[1, 1],
        &[1, 1],
      ],
      Pattern::Blinker => &[
        &[0, 0, 0],
        &[1, 1, 1],
        &[0, 0, 0],
      ],
      Pattern::Glider => &[
        &[0, 1, 0],
        &[0, 0, 1],
        &[1, 1, 1],
      ],
      Pattern::RPentomino => &[
        &[0, 1, 1],
        &[1, 1, 0],
        &[0, 1, 0],
      ],
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Pattern::Plus => "plus",
      Pattern::Block => "block",
      Pattern::Blinker => "blinker",
      Pattern::Glider => "glider",
      Pattern::RPentomino => "r-pentomino",
    }
  }
}

impl fmt::Display for Pattern {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}
