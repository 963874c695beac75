//! Guess selection for the solver.
//!
//! When the deduction pass yields nothing certain, the solver has to open a
//! cell at random. The heuristics here rank the candidates so the gamble is
//! placed as far from the known numbers as possible.

use crate::engine::Game;

/// Returns the uniform bomb-density estimate for the board.
///
/// This treats every hidden cell as equally likely to hold a bomb,
/// `bomb_count / (rows * cols)`. Since the bomb count is strictly less
/// than the cell count, the result is always below 1.0.
pub fn bomb_density(game: &Game) -> f64 {
    game.bomb_count() as f64 / (game.rows() * game.cols()) as f64
}

/// Returns `true` if any neighbor of `(r, c)` has been revealed.
///
/// Cells with no revealed neighbor sit in unexplored territory; opening
/// one is preferred because a mistake there wastes no deduced information.
pub fn has_revealed_neighbor(game: &Game, r: usize, c: usize) -> bool {
    game.neighbors(r, c).any(|(nr, nc)| game.is_revealed(nr, nc))
}

/// Chooses a cell to open when no certain move exists.
///
/// Candidates are unrevealed, unflagged cells. Cells with no revealed
/// neighbor are preferred and scored by `bomb_density`; since that score
/// is the same for every such cell, the first candidate in row-major scan
/// order wins the comparison. If every candidate borders revealed
/// territory, the first candidate in scan order is returned as a
/// fallback.
///
/// # Arguments
/// * `game`: The game state to pick a guess from.
///
/// # Returns
/// An `Option` containing a tuple:
///   - `f64`: The estimated bomb probability of the chosen cell.
///   - `(usize, usize)`: The (row, column) of the cell to open.
/// Returns `None` if no unrevealed, unflagged cell exists.
pub fn choose_guess(game: &Game) -> Option<(f64, (usize, usize))> {
    let mut lowest_probability = 1.0f64;
    let mut best_cell: Option<(usize, usize)> = None;

    for r in 0..game.rows() {
        for c in 0..game.cols() {
            if game.is_revealed(r, c) || game.is_flagged(r, c) {
                continue;
            }
            if has_revealed_neighbor(game, r, c) {
                continue;
            }
            let probability = bomb_density(game);
            if probability < lowest_probability {
                lowest_probability = probability;
                best_cell = Some((r, c));
            }
        }
    }
    if let Some(cell) = best_cell {
        return Some((lowest_probability, cell));
    }

    // Everything hidden borders a number; take the first legal cell.
    for r in 0..game.rows() {
        for c in 0..game.cols() {
            if !game.is_revealed(r, c) && !game.is_flagged(r, c) {
                return Some((bomb_density(game), (r, c)));
            }
        }
    }
    None
}
