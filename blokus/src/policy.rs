//! Move-selection policies.
//!
//! A [`Policy`] is handed the current board and the list of legal moves for
//! the colour to play, and picks exactly one of them. Policies are the
//! pluggable "bot" layer: the board neither knows nor cares how a move was
//! chosen, and a driving loop can mix policies freely.
//!
//! All policies take their randomness from an owned [`StdRng`], so a match
//! can be reproduced from a seed.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{
    board::{Board, Cell},
    moves::Move,
};

/// A strategy for picking one move out of the legal set.
pub trait Policy {
    /// Pick one of `moves` to play on `board`.
    ///
    /// Returns `None` only when `moves` is empty, which signals a pass.
    fn choose(&mut self, board: &Board, moves: &[Move]) -> Option<Move>;
}

/// Plays a uniformly random legal move.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A policy whose choices are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, _board: &Board, moves: &[Move]) -> Option<Move> {
        moves.choose(&mut self.rng).cloned()
    }
}

/// Always plays the largest piece it can, choosing randomly among equally
/// large moves.
pub struct GreedyPolicy {
    rng: StdRng,
}

impl GreedyPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A policy whose choices are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for GreedyPolicy {
    fn choose(&mut self, _board: &Board, moves: &[Move]) -> Option<Move> {
        let largest = moves.iter().map(Move::size).max()?;
        let candidates: Vec<&Move> = moves.iter().filter(|m| m.size() == largest).collect();
        candidates.choose(&mut self.rng).map(|&m| m.clone())
    }
}

/// Always plays the smallest piece it can, choosing randomly among equally
/// small moves.
pub struct ShyPolicy {
    rng: StdRng,
}

impl ShyPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A policy whose choices are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ShyPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for ShyPolicy {
    fn choose(&mut self, _board: &Board, moves: &[Move]) -> Option<Move> {
        let smallest = moves.iter().map(Move::size).min()?;
        let candidates: Vec<&Move> = moves.iter().filter(|m| m.size() == smallest).collect();
        candidates.choose(&mut self.rng).map(|&m| m.clone())
    }
}

/// Maximizes the number of fresh origins a move opens up, weighted toward
/// large, central, wide-spanning moves.
pub struct CornerPolicy {
    rng: StdRng,
}

impl CornerPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A policy whose choices are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for CornerPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for CornerPolicy {
    fn choose(&mut self, board: &Board, moves: &[Move]) -> Option<Move> {
        let mut shuffled = moves.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled
            .into_iter()
            .max_by(|a, b| corner_score(board, a).total_cmp(&corner_score(board, b)))
    }
}

fn corner_score(board: &Board, mv: &Move) -> f64 {
    let future = board.with_move_applied(mv);
    let opened = opened_origins(&future, mv).len() as f64;
    let size = mv.size() as f64;
    let centrality = 1.0 - (distance_from_centre(board, mv) / board.dimension() as f64).powi(2);
    let spread = 1.0 + (span(mv) as f64 / 10.0).sqrt();
    (opened + size) * centrality * spread
}

/// Maximizes the number of follow-up moves the colour would have after
/// playing, plus the size of the move itself.
pub struct PotentialPolicy {
    rng: StdRng,
}

impl PotentialPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A policy whose choices are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for PotentialPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for PotentialPolicy {
    fn choose(&mut self, board: &Board, moves: &[Move]) -> Option<Move> {
        let mut shuffled = moves.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled
            .into_iter()
            .max_by_key(|m| potential_score(board, m))
    }
}

fn potential_score(board: &Board, mv: &Move) -> usize {
    let future = board.with_move_applied(mv);
    let origins = opened_origins(&future, mv);
    future.moves_from_origins(mv.colour(), &origins).len() + mv.size()
}

/// The origins the freshly played cells of `mv` open up on `future`, the
/// board with `mv` already applied. Shares the board's own corner
/// predicates, so heuristics and the maintenance engine agree on what
/// counts as an opening.
fn opened_origins(future: &Board, mv: &Move) -> Vec<Cell> {
    let mut origins = Vec::new();
    for &cell in mv.cells() {
        if !future.is_corner_of(cell, mv.colour()) {
            continue;
        }
        for origin in future.valid_origins_from_corner(cell, mv.colour()) {
            if !origins.contains(&origin) {
                origins.push(origin);
            }
        }
    }
    origins
}

/// Bounding-box extent of the move: row span plus column span.
fn span(mv: &Move) -> i32 {
    let rows: Vec<i32> = mv.cells().iter().map(|c| c.row).collect();
    let cols: Vec<i32> = mv.cells().iter().map(|c| c.col).collect();
    let row_span = rows.iter().max().unwrap() - rows.iter().min().unwrap();
    let col_span = cols.iter().max().unwrap() - cols.iter().min().unwrap();
    row_span + col_span
}

/// Smallest euclidean distance from any cell of the move to the board's
/// centre cell.
fn distance_from_centre(board: &Board, mv: &Move) -> f64 {
    let mid = (board.dimension() / 2) as f64;
    mv.cells()
        .iter()
        .map(|cell| {
            let dr = cell.row as f64 - mid;
            let dc = cell.col as f64 - mid;
            (dr * dr + dc * dc).sqrt()
        })
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::{
        CornerPolicy, GreedyPolicy, Policy, PotentialPolicy, RandomPolicy, ShyPolicy,
    };
    use crate::{board::Board, moves::Move, Colour};

    fn opening_moves(board: &mut Board) -> Vec<Move> {
        let mut moves: Vec<Move> = board.legal_moves(Colour::Red).iter().cloned().collect();
        moves.sort();
        moves
    }

    #[test]
    fn all_policies_pass_on_an_empty_list() {
        let board = Board::new(7);
        assert!(RandomPolicy::seeded(1).choose(&board, &[]).is_none());
        assert!(GreedyPolicy::seeded(1).choose(&board, &[]).is_none());
        assert!(ShyPolicy::seeded(1).choose(&board, &[]).is_none());
        assert!(CornerPolicy::seeded(1).choose(&board, &[]).is_none());
        assert!(PotentialPolicy::seeded(1).choose(&board, &[]).is_none());
    }

    #[test]
    fn random_policy_picks_a_member_of_the_list() {
        let mut board = Board::new(7);
        let moves = opening_moves(&mut board);
        let chosen = RandomPolicy::seeded(7).choose(&board, &moves).unwrap();
        assert!(moves.contains(&chosen));
    }

    #[test]
    fn greedy_policy_prefers_the_largest_piece() {
        let mut board = Board::new(7);
        let moves = opening_moves(&mut board);
        let chosen = GreedyPolicy::seeded(7).choose(&board, &moves).unwrap();
        assert_eq!(chosen.size(), 5);
    }

    #[test]
    fn shy_policy_prefers_the_smallest_piece() {
        let mut board = Board::new(7);
        let moves = opening_moves(&mut board);
        let chosen = ShyPolicy::seeded(7).choose(&board, &moves).unwrap();
        assert_eq!(chosen.size(), 1);
    }

    #[test]
    fn heuristic_policies_pick_from_the_list() {
        let mut board = Board::new(7);
        // A slice of the legal set keeps the future-board scoring cheap; a
        // policy must choose from whatever list it is given.
        let moves = opening_moves(&mut board);
        let sample = &moves[..moves.len().min(12)];
        let corner = CornerPolicy::seeded(7).choose(&board, sample).unwrap();
        assert!(sample.contains(&corner));
        let potential = PotentialPolicy::seeded(7).choose(&board, sample).unwrap();
        assert!(sample.contains(&potential));
    }

    #[test]
    fn seeded_policies_are_reproducible() {
        let mut board = Board::new(7);
        let moves = opening_moves(&mut board);
        let a = RandomPolicy::seeded(42).choose(&board, &moves).unwrap();
        let b = RandomPolicy::seeded(42).choose(&board, &moves).unwrap();
        assert_eq!(a, b);
    }
}
