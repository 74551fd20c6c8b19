use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::legal_move_generator::{CloneLegalMoveGenerator, LegalMoveGenerator};
use chess_rules::move_generation::move_generator::MoveGenerator;
use chess_rules::move_generation::perft::perft_nodes;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

// Depths are capped below the first ply with promotions; only queen promotion is generated.
const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "endgame",
        fen: ENDGAME_FEN,
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "endgame",
        fen: ENDGAME_FEN,
        expected_nodes: &[14, 191, 2812, 43_238],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    if suite_name() == "standard" {
        CASES_STANDARD
    } else {
        CASES_QUICK
    }
}

fn bench_generator<G: MoveGenerator>(c: &mut Criterion, label: &str, generator: &G) {
    let mut group = c.benchmark_group(format!("perft_{}_{label}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup = game.clone();
            assert_eq!(
                perft_nodes(generator, &mut warmup, depth),
                *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name,
                depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let nodes = perft_nodes(generator, black_box(&mut bench_game), black_box(depth));
                        assert_eq!(nodes, *expected);
                        black_box(nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    bench_generator(c, "make_unmake", &LegalMoveGenerator);
    bench_generator(c, "clone", &CloneLegalMoveGenerator);
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
