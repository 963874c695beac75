//! Automated play: local deduction over the revealed numbers, falling back
//! to a probability guess from the `heuristics` module.

use crate::engine::{Game, GameState};
use crate::heuristics;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Default pause between solver cycles so an observer can follow the run.
pub const STEP_DELAY: Duration = Duration::from_millis(200);

/// Cells the deduction pass has proven safe or proven to hold bombs.
///
/// Produced fresh by `find_safe_and_bomb_cells` each cycle; nothing is
/// carried over between cycles.
#[derive(Clone, Debug, Default)]
pub struct Deductions {
    /// Coordinates proven not to hold a bomb.
    pub safe: HashSet<(usize, usize)>,
    /// Coordinates proven to hold a bomb.
    pub bombs: HashSet<(usize, usize)>,
}

/// The result of a `solve_game` run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every non-bomb cell was revealed.
    Won,
    /// The solver revealed a bomb.
    Lost,
    /// No legal move remained while the game was still in progress.
    Stuck,
    /// The cancel flag was raised before the game finished.
    Cancelled,
}

impl SolveOutcome {
    /// Returns `true` if the run ended with the board cleared.
    pub fn is_won(self) -> bool {
        self == SolveOutcome::Won
    }
}

/// Runs the local deduction pass over the current board.
///
/// For each revealed cell with a positive adjacency count, its hidden
/// neighbors are partitioned into flagged and unknown:
/// - if the flagged neighbors already account for the whole count, every
///   unknown neighbor is safe;
/// - if the unknown and flagged neighbors together only just reach the
///   count, every unknown neighbor holds a bomb.
///
/// Each revealed number is examined on its own; no reasoning combines
/// constraints across cells. The function is pure and the result is only
/// valid for the board state it was computed from.
pub fn find_safe_and_bomb_cells(game: &Game) -> Deductions {
    let mut deductions = Deductions::default();
    for r in 0..game.rows() {
        for c in 0..game.cols() {
            if !game.is_revealed(r, c) {
                continue;
            }
            let adjacent_bombs = game.adjacent_bomb_count(r, c) as usize;
            if adjacent_bombs == 0 {
                continue;
            }

            let mut flagged = 0;
            let mut unknown = Vec::new();
            for (nr, nc) in game.neighbors(r, c) {
                if game.is_flagged(nr, nc) {
                    flagged += 1;
                } else if !game.is_revealed(nr, nc) {
                    unknown.push((nr, nc));
                }
            }
            if unknown.is_empty() {
                continue;
            }

            if flagged == adjacent_bombs {
                deductions.safe.extend(unknown.iter().copied());
            }
            if unknown.len() + flagged == adjacent_bombs {
                deductions.bombs.extend(unknown);
            }
        }
    }
    deductions
}

/// Performs one solver decision cycle.
///
/// Certain knowledge first: reveal one deduced-safe cell, otherwise flag
/// one deduced bomb. Only when the deduction pass yields nothing is a
/// probability guess opened. Exactly one board action is attempted per
/// call.
///
/// # Returns
/// `true` if an action changed the board; `false` when no legal move
/// exists (the solver is stuck) or the game is no longer in progress.
pub fn make_move(game: &mut Game) -> bool {
    let deductions = find_safe_and_bomb_cells(game);
    if let Some(&(r, c)) = deductions.safe.iter().next() {
        return game.reveal(r, c);
    }
    if let Some(&(r, c)) = deductions.bombs.iter().next() {
        return game.flag(r, c);
    }
    match heuristics::choose_guess(game) {
        Some((_, (r, c))) => game.reveal(r, c),
        None => false,
    }
}

/// Plays the game to completion, one `make_move` cycle at a time.
///
/// The loop runs while the game is `Playing`, pausing `step_delay`
/// between cycles so a front-end can render the intermediate boards
/// (pass `Duration::ZERO` to run flat out). `cancel` is checked at the
/// top of every cycle; raising it stops the run between actions and
/// leaves the game in whatever state it reached.
///
/// # Arguments
/// * `game`: The game to play. Mutated in place.
/// * `step_delay`: Pause inserted after each cycle; `STEP_DELAY` is the
///   conventional value for watched runs.
/// * `cancel`: Cooperative stop flag, typically raised from another
///   thread.
///
/// # Returns
/// The terminal `SolveOutcome`; the run succeeded iff it is `Won`.
pub fn solve_game(game: &mut Game, step_delay: Duration, cancel: &AtomicBool) -> SolveOutcome {
    while game.state() == GameState::Playing {
        if cancel.load(Ordering::Relaxed) {
            return SolveOutcome::Cancelled;
        }
        if !make_move(game) {
            return SolveOutcome::Stuck;
        }
        if !step_delay.is_zero() {
            thread::sleep(step_delay);
        }
    }
    match game.state() {
        GameState::Won => SolveOutcome::Won,
        _ => SolveOutcome::Lost,
    }
}
