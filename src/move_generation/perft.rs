//! Perft: exhaustive legal-move tree counts for validating the generator.

use std::sync::Arc;
use std::thread;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count only.
pub fn perft_nodes<G: MoveGenerator + ?Sized>(generator: &G, game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        game_state.apply_move(mv);
        nodes += perft_nodes(generator, game_state, depth - 1);
        game_state.undo_move();
    }
    nodes
}

/// Leaf count plus per-leaf move statistics.
pub fn perft_detailed<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, game_state, mv, depth - 1, &mut counts);
    }
    counts
}

/// Splits the root moves across threads. Each worker owns a clone of the
/// root position and never shares it.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> thread::Result<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut root = game_state.clone();
    let root_moves = generator.generate_legal_moves(&mut root);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let mut local_state = game_state.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(generator_ref.as_ref(), &mut local_state, mv, depth - 1, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        total.merge(handle.join()?);
    }
    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &mut GameState,
    mv: Move,
    remaining: u8,
    counts: &mut PerftCounts,
) {
    game_state.apply_move(mv);

    if remaining == 0 {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        if mv.is_en_passant {
            counts.en_passant += 1;
        }
        if mv.is_castle {
            counts.castles += 1;
        }
        if mv.is_promotion {
            counts.promotions += 1;
        }
        if is_in_check(game_state, game_state.side_to_move) {
            counts.checks += 1;
            if generator.generate_legal_moves(game_state).is_empty() {
                counts.checkmates += 1;
            }
        }
    } else {
        for child in generator.generate_legal_moves(game_state) {
            perft_recurse(generator, game_state, child, remaining - 1, counts);
        }
    }

    game_state.undo_move();
}
