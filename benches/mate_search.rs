use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xeque::game::{Game, Scenario};
use xeque::search::{MateSearcher, SearchConfig, SearchMode};

fn bench_mate_in_two(c: &mut Criterion) {
    let board = Game::new(Scenario::TwoRooks).expect("scenario").board;
    let mut group = c.benchmark_group("mate_in_two_two_rooks");

    for mode in [SearchMode::StopAtFirstMate, SearchMode::Exhaustive] {
        for threads in [1usize, 4] {
            let config = SearchConfig::mate_in_two().with_mode(mode).with_threads(threads);
            let id = BenchmarkId::new(format!("{:?}", mode), threads);
            group.bench_with_input(id, &config, |b, config| {
                b.iter(|| {
                    let searcher = MateSearcher::new(*config);
                    black_box(searcher.search(black_box(&board)).expect("search"))
                })
            });
        }
    }
    group.finish();
}

fn bench_start_position(c: &mut Criterion) {
    let board = Game::new(Scenario::Start).expect("scenario").board;
    c.bench_function("mate_in_two_start_position", |b| {
        b.iter(|| black_box(board.has_forced_mate_in_two_own_moves().expect("search")))
    });
}

criterion_group!(benches, bench_mate_in_two, bench_start_position);
criterion_main!(benches);
