//! Benchmarks for move generation, perft and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use parakeet::{Engine, EngineConfig, Position};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn position(fen: &str) -> Position {
    fen.parse().expect("benchmark FEN should parse")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    // Starting position
    let mut start = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| start.perft(black_box(depth)))
        });
    }

    let mut kiwipete = position(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [
        ("startpos", parakeet::board::START_FEN),
        ("middlegame", MIDDLEGAME),
        ("kiwipete", KIWIPETE),
    ] {
        let position = position(fen);
        group.bench_with_input(BenchmarkId::new("legal_moves", name), &position, |b, p| {
            b.iter(|| black_box(p.legal_moves()))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut engine = Engine::default();
                engine.best_move(depth)
            })
        });
    }

    // Ordering on and off over the same tactical position
    for order_moves in [true, false] {
        let label = if order_moves { "ordered" } else { "unordered" };
        group.bench_function(BenchmarkId::new("kiwipete_3", label), |b| {
            b.iter(|| {
                let config = EngineConfig {
                    order_moves,
                    ..EngineConfig::default()
                };
                let mut engine = Engine::with_position(position(KIWIPETE), config);
                engine.best_move(3)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_search);
criterion_main!(benches);
