use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sparselife::*;

fn r_pentomino_benchmark(c: &mut Criterion) {
  let config = Config::from_pattern(Pattern::RPentomino, 500);
  c.bench_function("r-pentomino 500 generations", |b| b.iter(|| {
    let board = SparseBoard::new(config.seed.iter().copied());
    StepEngine::default().advance_by(board, black_box(config.generations))
  }));
}

criterion_group!(benches, r_pentomino_benchmark);
criterion_main!(benches);
