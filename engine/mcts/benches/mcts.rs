//! Search benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p mcts`
//!
//! These benchmarks measure:
//! - Full searches with varying iteration budgets
//! - Game comparison (tic-tac-toe vs Connect Four)
//! - Tree operations (expansion, selection, backpropagation)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use game_core::{GameResult, Player};
use mcts::{Mcts, SearchBudget, SearchConfig, SearchTree, UniformRandom};

fn bench_search_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_iterations");

    for iterations in [50u64, 100, 200, 400, 800, 1600] {
        group.throughput(Throughput::Elements(iterations));
        group.bench_with_input(
            BenchmarkId::new("tictactoe", iterations),
            &iterations,
            |b, &iterations| {
                let budget = SearchBudget::iterations(iterations);
                b.iter(|| {
                    let mut search = Mcts::new(
                        games_tictactoe::State::new(),
                        UniformRandom::seeded(42),
                        SearchConfig::default(),
                    );
                    black_box(search.best_action(&budget).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_search_connect4(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_connect4");

    // Connect Four rollouts are deeper, so budgets stay smaller.
    for iterations in [50u64, 100, 200, 400, 800] {
        group.throughput(Throughput::Elements(iterations));
        group.bench_with_input(
            BenchmarkId::new("opening", iterations),
            &iterations,
            |b, &iterations| {
                let budget = SearchBudget::iterations(iterations);
                b.iter(|| {
                    let mut search = Mcts::new(
                        games_connect4::State::new(),
                        UniformRandom::seeded(42),
                        SearchConfig::default(),
                    );
                    black_box(search.best_action(&budget).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_game_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_comparison");
    let budget = SearchBudget::iterations(400);

    group.bench_function("tictactoe_400_iters", |b| {
        b.iter(|| {
            let mut search = Mcts::new(
                games_tictactoe::State::new(),
                UniformRandom::seeded(42),
                SearchConfig::default(),
            );
            black_box(search.best_action(&budget).unwrap())
        });
    });

    group.bench_function("connect4_400_iters", |b| {
        b.iter(|| {
            let mut search = Mcts::new(
                games_connect4::State::new(),
                UniformRandom::seeded(42),
                SearchConfig::default(),
            );
            black_box(search.best_action(&budget).unwrap())
        });
    });

    group.finish();
}

fn bench_tree_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_ops");

    // Expand every root child of a fresh tic-tac-toe tree.
    group.bench_function("expand_root_children", |b| {
        b.iter(|| {
            let mut tree = SearchTree::new(games_tictactoe::State::new());
            let root = tree.root();
            while !tree.get_mut(root).is_fully_expanded() {
                tree.expand(root).unwrap();
            }
            black_box(tree.len())
        });
    });

    // Child selection over a fully expanded, fully visited root.
    group.bench_function("best_child", |b| {
        let mut tree = SearchTree::new(games_tictactoe::State::new());
        let root = tree.root();
        while !tree.get_mut(root).is_fully_expanded() {
            let child = tree.expand(root).unwrap();
            tree.backpropagate(child, GameResult::Win(Player::One));
        }

        b.iter(|| black_box(tree.best_child(root, 1.4).unwrap()));
    });

    // Backpropagation along a chain of tic-tac-toe moves.
    group.bench_function("backpropagate_depth_5", |b| {
        let mut tree = SearchTree::new(games_tictactoe::State::new());
        let mut leaf = tree.root();
        for _ in 0..5 {
            leaf = tree.expand(leaf).unwrap();
        }

        b.iter(|| {
            tree.backpropagate(leaf, GameResult::Draw);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_search_iterations,
    bench_search_connect4,
    bench_game_comparison,
    bench_tree_operations,
);

criterion_main!(benches);
