//! Core game engine for Bomb Finder.
//!
//! This module defines the game's fundamental components:
//! - `Board`: Represents the grid and includes methods for bomb placement,
//!   adjacency counting, and per-cell reveal/flag state.
//! - `GameState`: The `Playing` / `Won` / `Lost` state machine.
//! - `Game`: Manages the overall game session, applying player (or solver)
//!   actions to the board, running the reveal cascade, and detecting the
//!   end of the game.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Number of rows on a standard board.
pub const DEFAULT_ROWS: usize = 15;
/// Number of columns on a standard board.
pub const DEFAULT_COLS: usize = 15;
/// Number of bombs on a standard board.
pub const DEFAULT_BOMB_COUNT: usize = 40;

/// The overall status of a game session.
///
/// A game starts in `Playing` and moves to exactly one of the terminal
/// states. Once terminal, no action changes the board until `restart`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    /// The game is in progress and accepts reveal/flag actions.
    Playing,
    /// Every non-bomb cell has been revealed.
    Won,
    /// A bomb was revealed.
    Lost,
}

/// Represents the game grid: bomb positions plus per-cell reveal and flag
/// state.
///
/// Dimensions and bomb count are fixed for the board's lifetime. The grids
/// are stored as flat `Vec<bool>`s indexed row-major. Bomb positions are
/// hidden behind the query methods; callers never see the grid directly.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    bomb_count: usize,
    bombs: Vec<bool>,
    revealed: Vec<bool>,
    flagged: Vec<bool>,
    misflagged: Vec<bool>,
    bombs_placed: bool,
}

impl Board {
    /// Creates a new board with no bombs placed yet.
    ///
    /// Call `place_bombs` before play, or use `from_bombs` for a
    /// predefined layout.
    ///
    /// # Arguments
    /// * `rows`: Number of rows, must be at least 1.
    /// * `cols`: Number of columns, must be at least 1.
    /// * `bomb_count`: Number of bombs, must be between 1 and
    ///   `rows * cols - 1` inclusive.
    ///
    /// # Returns
    /// A `Board` with all cells hidden, or an error message describing the
    /// invalid configuration.
    pub fn new(rows: usize, cols: usize, bomb_count: usize) -> Result<Self, String> {
        if rows == 0 || cols == 0 {
            return Err("Board dimensions must be positive".to_string());
        }
        let total = rows * cols;
        if bomb_count == 0 || bomb_count >= total {
            return Err(format!(
                "Bomb count must be between 1 and {} for a {}x{} board",
                total - 1,
                rows,
                cols
            ));
        }
        Ok(Board {
            rows,
            cols,
            bomb_count,
            bombs: vec![false; total],
            revealed: vec![false; total],
            flagged: vec![false; total],
            misflagged: vec![false; total],
            bombs_placed: false,
        })
    }

    /// Creates a board from an explicit bomb grid.
    ///
    /// This is useful for testing or setting up specific game scenarios.
    /// The bomb count is taken from the grid and validated the same way as
    /// in `new`; the board is treated as already placed.
    ///
    /// # Arguments
    /// * `rows`: Number of rows.
    /// * `cols`: Number of columns.
    /// * `bombs`: Row-major bomb grid of length `rows * cols`.
    ///
    /// # Returns
    /// A ready-to-play `Board`, or an error message describing the invalid
    /// configuration.
    pub fn from_bombs(rows: usize, cols: usize, bombs: Vec<bool>) -> Result<Self, String> {
        if rows == 0 || cols == 0 {
            return Err("Board dimensions must be positive".to_string());
        }
        let total = rows * cols;
        if bombs.len() != total {
            return Err(format!(
                "Bomb grid has {} cells (expected {} for a {}x{} board)",
                bombs.len(),
                total,
                rows,
                cols
            ));
        }
        let bomb_count = bombs.iter().filter(|&&b| b).count();
        if bomb_count == 0 || bomb_count >= total {
            return Err(format!(
                "Bomb count must be between 1 and {} for a {}x{} board",
                total - 1,
                rows,
                cols
            ));
        }
        Ok(Board {
            rows,
            cols,
            bomb_count,
            bombs,
            revealed: vec![false; total],
            flagged: vec![false; total],
            misflagged: vec![false; total],
            bombs_placed: true,
        })
    }

    /// Places `bomb_count` bombs on random distinct cells.
    ///
    /// Cells are drawn uniformly at random; draws landing on an existing
    /// bomb are simply retried, so the loop runs until exactly
    /// `bomb_count` distinct cells hold bombs.
    ///
    /// # Arguments
    /// * `rng`: The random number generator to draw cells from.
    ///
    /// # Returns
    /// `Ok(())` on success, or an error if bombs were already placed on
    /// this board. Placement happens at most once per board lifetime.
    pub fn place_bombs(&mut self, rng: &mut impl Rng) -> Result<(), String> {
        if self.bombs_placed {
            return Err("Bombs have already been placed on this board".to_string());
        }
        let mut placed = 0;
        while placed < self.bomb_count {
            let r = rng.gen_range(0..self.rows);
            let c = rng.gen_range(0..self.cols);
            let i = self.index(r, c);
            if !self.bombs[i] {
                self.bombs[i] = true;
                placed += 1;
            }
        }
        self.bombs_placed = true;
        Ok(())
    }

    /// Returns `true` if `(r, c)` lies on the board.
    pub fn is_in_bounds(&self, r: usize, c: usize) -> bool {
        r < self.rows && c < self.cols
    }

    /// Returns the coordinates of all in-bounds neighbors of `(r, c)`.
    ///
    /// A cell has up to 8 neighbors; cells on an edge or corner have
    /// fewer. The cell itself is never included.
    pub fn neighbors(&self, r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> {
        let rows = self.rows as isize;
        let cols = self.cols as isize;
        let mut out = Vec::with_capacity(8);
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = r as isize + dr;
                let nc = c as isize + dc;
                if nr >= 0 && nr < rows && nc >= 0 && nc < cols {
                    out.push((nr as usize, nc as usize));
                }
            }
        }
        out.into_iter()
    }

    /// Counts the bombs among the in-bounds neighbors of `(r, c)`.
    ///
    /// Pure query; does not require the cell to be revealed. The result is
    /// always in `0..=8`.
    pub fn adjacent_bomb_count(&self, r: usize, c: usize) -> u8 {
        let mut count = 0;
        for (nr, nc) in self.neighbors(r, c) {
            if self.bombs[self.index(nr, nc)] {
                count += 1;
            }
        }
        count
    }

    /// Returns `true` if the cell holds a bomb.
    pub fn is_bomb(&self, r: usize, c: usize) -> bool {
        self.bombs[self.index(r, c)]
    }

    /// Returns `true` if the cell has been revealed.
    pub fn is_revealed(&self, r: usize, c: usize) -> bool {
        self.revealed[self.index(r, c)]
    }

    /// Returns `true` if the cell is currently flagged.
    pub fn is_flagged(&self, r: usize, c: usize) -> bool {
        self.flagged[self.index(r, c)]
    }

    /// Returns `true` if the cell was flagged without holding a bomb when
    /// the game was lost. Only ever set after a loss.
    pub fn is_misflagged(&self, r: usize, c: usize) -> bool {
        self.misflagged[self.index(r, c)]
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of bombs on the board.
    pub fn bomb_count(&self) -> usize {
        self.bomb_count
    }

    /// Returns the number of currently flagged cells.
    pub fn flag_count(&self) -> usize {
        self.flagged.iter().filter(|&&f| f).count()
    }

    fn index(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    fn set_revealed(&mut self, r: usize, c: usize) {
        let i = self.index(r, c);
        self.revealed[i] = true;
    }

    fn toggle_flag(&mut self, r: usize, c: usize) {
        let i = self.index(r, c);
        self.flagged[i] = !self.flagged[i];
    }

    // Loss display: the bomb icon replaces any flag on the cell.
    fn force_reveal_bomb(&mut self, r: usize, c: usize) {
        let i = self.index(r, c);
        self.revealed[i] = true;
        self.flagged[i] = false;
    }

    fn set_misflagged(&mut self, r: usize, c: usize) {
        let i = self.index(r, c);
        self.misflagged[i] = true;
    }

    fn all_safe_revealed(&self) -> bool {
        self.bombs
            .iter()
            .zip(self.revealed.iter())
            .all(|(&bomb, &revealed)| bomb || revealed)
    }
}

/// Manages the state and progression of a Bomb Finder game session.
///
/// The struct owns the board, the `Playing`/`Won`/`Lost` state, and the
/// RNG used for bomb placement (and for re-placement on `restart`). All
/// actions return `bool` indicating whether the board changed; actions
/// whose preconditions fail are silent no-ops.
///
/// # Examples
/// ```
/// use bombfinder::engine::{Game, GameState};
///
/// let mut game = Game::new_with_seed(9, 9, 10, 7).unwrap();
/// assert_eq!(game.state(), GameState::Playing);
///
/// game.flag(0, 0);
/// assert_eq!(game.flag_count(), 1);
///
/// game.restart();
/// assert_eq!(game.flag_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    state: GameState,
    rng: SmallRng,
}

impl Game {
    /// Creates a new game with bombs placed from an entropy-seeded RNG.
    ///
    /// # Arguments
    /// * `rows`, `cols`, `bomb_count`: Board configuration, validated by
    ///   `Board::new`.
    pub fn new(rows: usize, cols: usize, bomb_count: usize) -> Result<Self, String> {
        Self::with_rng(rows, cols, bomb_count, SmallRng::from_entropy())
    }

    /// Creates a new game with deterministic bomb placement.
    ///
    /// The same seed always produces the same board, which is useful for
    /// reproducible runs and tests.
    pub fn new_with_seed(
        rows: usize,
        cols: usize,
        bomb_count: usize,
        seed: u64,
    ) -> Result<Self, String> {
        Self::with_rng(rows, cols, bomb_count, SmallRng::seed_from_u64(seed))
    }

    /// Creates a game over a board whose bombs are already placed.
    ///
    /// This is the entry point for string-layout fixtures and board files.
    pub fn new_with_board(board: Board) -> Self {
        Game {
            board,
            state: GameState::Playing,
            rng: SmallRng::from_entropy(),
        }
    }

    fn with_rng(
        rows: usize,
        cols: usize,
        bomb_count: usize,
        mut rng: SmallRng,
    ) -> Result<Self, String> {
        let mut board = Board::new(rows, cols, bomb_count)?;
        board.place_bombs(&mut rng)?;
        Ok(Game {
            board,
            state: GameState::Playing,
            rng,
        })
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Reveals the cell at `(r, c)`.
    ///
    /// The action is a silent no-op unless the game is `Playing`, the
    /// coordinates are in bounds, and the cell is neither revealed nor
    /// flagged. Revealing a bomb loses the game: every bomb is revealed
    /// for display and flagged non-bomb cells are marked as misflagged.
    /// Revealing a cell with no adjacent bombs cascades outward, revealing
    /// the whole zero-count region and its numbered border (flagged cells
    /// are left alone). Afterwards the game is won if every non-bomb cell
    /// is revealed.
    ///
    /// # Returns
    /// `true` if the board changed, `false` otherwise.
    pub fn reveal(&mut self, r: usize, c: usize) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        if !self.board.is_in_bounds(r, c) {
            return false;
        }
        if self.board.is_revealed(r, c) || self.board.is_flagged(r, c) {
            return false;
        }

        if self.board.is_bomb(r, c) {
            self.state = GameState::Lost;
            self.mark_loss_display();
            return true;
        }

        self.cascade_reveal(r, c);
        if self.board.all_safe_revealed() {
            self.state = GameState::Won;
        }
        true
    }

    /// Toggles the flag on the unrevealed cell at `(r, c)`.
    ///
    /// Rejected (returning `false`) when the game is not `Playing`, the
    /// coordinates are out of bounds, or the cell is already revealed.
    pub fn flag(&mut self, r: usize, c: usize) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        if !self.board.is_in_bounds(r, c) || self.board.is_revealed(r, c) {
            return false;
        }
        self.board.toggle_flag(r, c);
        true
    }

    /// Discards the current board and starts a fresh game with the same
    /// dimensions and bomb count, re-placing bombs from the game's RNG.
    pub fn restart(&mut self) {
        let mut board = Board::new(self.board.rows(), self.board.cols(), self.board.bomb_count())
            .expect("dimensions were validated when the game was created");
        board
            .place_bombs(&mut self.rng)
            .expect("fresh board has no bombs placed");
        self.board = board;
        self.state = GameState::Playing;
    }

    // Iterative flood fill. Cells are marked revealed as they are pushed,
    // so each cell enters the worklist at most once; only zero-count cells
    // expand to their neighbors.
    fn cascade_reveal(&mut self, r: usize, c: usize) {
        self.board.set_revealed(r, c);
        let mut pending = vec![(r, c)];
        while let Some((cr, cc)) = pending.pop() {
            if self.board.adjacent_bomb_count(cr, cc) > 0 {
                continue;
            }
            for (nr, nc) in self.board.neighbors(cr, cc) {
                if !self.board.is_revealed(nr, nc) && !self.board.is_flagged(nr, nc) {
                    self.board.set_revealed(nr, nc);
                    pending.push((nr, nc));
                }
            }
        }
    }

    fn mark_loss_display(&mut self) {
        for r in 0..self.board.rows() {
            for c in 0..self.board.cols() {
                if self.board.is_bomb(r, c) {
                    self.board.force_reveal_bomb(r, c);
                } else if self.board.is_flagged(r, c) {
                    self.board.set_misflagged(r, c);
                }
            }
        }
    }

    /// Returns `true` if the cell has been revealed.
    pub fn is_revealed(&self, r: usize, c: usize) -> bool {
        self.board.is_revealed(r, c)
    }

    /// Returns `true` if the cell is currently flagged.
    pub fn is_flagged(&self, r: usize, c: usize) -> bool {
        self.board.is_flagged(r, c)
    }

    /// Returns `true` if the cell holds a bomb.
    pub fn is_bomb(&self, r: usize, c: usize) -> bool {
        self.board.is_bomb(r, c)
    }

    /// Returns `true` if the cell was incorrectly flagged when the game
    /// was lost.
    pub fn is_misflagged(&self, r: usize, c: usize) -> bool {
        self.board.is_misflagged(r, c)
    }

    /// Counts the bombs adjacent to `(r, c)`.
    pub fn adjacent_bomb_count(&self, r: usize, c: usize) -> u8 {
        self.board.adjacent_bomb_count(r, c)
    }

    /// Returns the coordinates of all in-bounds neighbors of `(r, c)`.
    pub fn neighbors(&self, r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> {
        self.board.neighbors(r, c)
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Returns the number of bombs on the board.
    pub fn bomb_count(&self) -> usize {
        self.board.bomb_count()
    }

    /// Returns the number of currently flagged cells.
    pub fn flag_count(&self) -> usize {
        self.board.flag_count()
    }
}

impl fmt::Display for Game {
    /// Renders the player-visible grid with row and column labels.
    ///
    /// `.` hidden, `F` flag, `X` incorrect flag (after a loss), `*`
    /// revealed bomb, a digit for revealed counts and a space for zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.board.cols() {
            write!(f, "{:>2}", c)?;
        }
        writeln!(f)?;

        for r in 0..self.board.rows() {
            write!(f, "{:>2} ", r)?;
            for c in 0..self.board.cols() {
                let ch = if self.board.is_misflagged(r, c) {
                    'X'
                } else if self.board.is_flagged(r, c) {
                    'F'
                } else if self.board.is_revealed(r, c) {
                    if self.board.is_bomb(r, c) {
                        '*'
                    } else {
                        match self.board.adjacent_bomb_count(r, c) {
                            0 => ' ',
                            n => char::from_digit(n as u32, 10)
                                .expect("adjacent counts never exceed 8"),
                        }
                    }
                } else {
                    '.'
                };
                write!(f, " {}", ch)?;
            }
            if r < self.board.rows() - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_board_new_rejects_bad_config() {
        assert!(Board::new(0, 5, 1).is_err());
        assert!(Board::new(5, 0, 1).is_err());
        assert!(Board::new(3, 3, 0).is_err());
        assert!(Board::new(3, 3, 9).is_err());
        assert!(Board::new(3, 3, 8).is_ok());
    }

    #[test]
    fn test_from_bombs_rejects_bad_grid() {
        assert!(Board::from_bombs(2, 2, vec![true, false, false]).is_err());
        assert!(Board::from_bombs(2, 2, vec![false; 4]).is_err());
        assert!(Board::from_bombs(2, 2, vec![true; 4]).is_err());
        assert!(Board::from_bombs(2, 2, vec![true, false, false, false]).is_ok());
    }

    #[test]
    fn test_place_bombs_exact_count() {
        let mut board = Board::new(15, 15, 40).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        board.place_bombs(&mut rng).unwrap();

        let mut bombs = 0;
        for r in 0..board.rows() {
            for c in 0..board.cols() {
                if board.is_bomb(r, c) {
                    bombs += 1;
                }
            }
        }
        assert_eq!(bombs, 40);
    }

    #[test]
    fn test_place_bombs_twice_rejected() {
        let mut board = Board::new(5, 5, 3).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        board.place_bombs(&mut rng).unwrap();
        assert!(board.place_bombs(&mut rng).is_err());
    }

    #[test]
    fn test_seeded_placement_is_deterministic() {
        let g1 = Game::new_with_seed(9, 9, 10, 7).unwrap();
        let g2 = Game::new_with_seed(9, 9, 10, 7).unwrap();
        for r in 0..9 {
            for c in 0..9 {
                assert_eq!(
                    g1.is_bomb(r, c),
                    g2.is_bomb(r, c),
                    "Placement differs at ({}, {})",
                    r,
                    c
                );
            }
        }
    }

    #[test]
    fn test_neighbors_clipped_at_edges() {
        let board = Board::new(3, 3, 1).unwrap();
        assert_eq!(board.neighbors(0, 0).count(), 3);
        assert_eq!(board.neighbors(0, 1).count(), 5);
        assert_eq!(board.neighbors(1, 1).count(), 8);
        assert_eq!(board.neighbors(2, 2).count(), 3);
    }

    #[test]
    fn test_adjacent_bomb_counts() {
        let board = board_from_str_array(&[
            "*.*", //
            "...", //
            ".*.",
        ])
        .unwrap();
        assert_eq!(board.adjacent_bomb_count(0, 1), 2);
        assert_eq!(board.adjacent_bomb_count(1, 1), 3);
        assert_eq!(board.adjacent_bomb_count(1, 0), 2);
        assert_eq!(board.adjacent_bomb_count(1, 2), 2);
        assert_eq!(board.adjacent_bomb_count(2, 2), 1);
    }

    #[test]
    fn test_reveal_numbered_cell() {
        let board = board_from_str_array(&[
            "*.", //
            "..",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);
        assert!(game.reveal(1, 1));
        assert!(game.is_revealed(1, 1));
        assert_eq!(game.adjacent_bomb_count(1, 1), 1);
        assert_eq!(game.state(), GameState::Playing);
        // Numbered cell does not cascade.
        assert!(!game.is_revealed(0, 1));
        assert!(!game.is_revealed(1, 0));
    }

    #[test]
    fn test_reveal_bomb_loses_and_latches() {
        let board = board_from_str_array(&[
            "*.", //
            "..",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);
        game.flag(0, 1);

        assert!(game.reveal(0, 0));
        assert_eq!(game.state(), GameState::Lost);
        assert!(game.is_revealed(0, 0), "Bomb is revealed for display");
        assert!(game.is_misflagged(0, 1), "Wrong flag is marked");

        // Terminal state: nothing changes anymore.
        assert!(!game.reveal(1, 1));
        assert!(!game.is_revealed(1, 1));
        assert!(!game.flag(1, 0));
        assert!(!game.is_flagged(1, 0));
    }

    #[test]
    fn test_loss_reveals_every_bomb() {
        let board = board_from_str_array(&[
            "*..", //
            "...", //
            "..*",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);
        game.flag(2, 2);
        // Revealing a flagged cell does nothing, even a bomb.
        assert!(!game.reveal(2, 2));
        assert_eq!(game.state(), GameState::Playing);

        assert!(game.reveal(0, 0));
        assert_eq!(game.state(), GameState::Lost);
        assert!(game.is_revealed(0, 0));
        assert!(game.is_revealed(2, 2));
        assert!(
            !game.is_flagged(2, 2),
            "Bomb display replaces the flag on loss"
        );
        assert!(!game.is_misflagged(2, 2));
    }

    #[test]
    fn test_reveal_out_of_bounds_is_noop() {
        let mut game = Game::new_with_seed(5, 5, 3, 9).unwrap();
        assert!(!game.reveal(5, 0));
        assert!(!game.reveal(0, 99));
        assert!(!game.flag(99, 99));
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_cascade_reveals_zero_region_and_border() {
        // Single central bomb: every border cell has a zero count, the
        // ring around the bomb reads 1.
        let board = board_from_str_array(&[
            ".....", //
            ".....", //
            "..*..", //
            ".....", //
            ".....",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);
        assert!(game.reveal(0, 0));

        for r in 0..5 {
            for c in 0..5 {
                if r == 2 && c == 2 {
                    assert!(!game.is_revealed(r, c), "Bomb must stay hidden");
                } else {
                    assert!(game.is_revealed(r, c), "({}, {}) not cascaded", r, c);
                }
            }
        }
        // The cascade revealed every non-bomb cell, so it also won.
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn test_cascade_skips_flagged_cells() {
        let board = board_from_str_array(&[
            ".....", //
            ".....", //
            "..*..", //
            ".....", //
            ".....",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);
        game.flag(4, 4);
        assert!(game.reveal(0, 0));
        assert!(!game.is_revealed(4, 4));
        assert!(game.is_flagged(4, 4));
        // The flagged safe cell is still hidden, so the game goes on.
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_win_on_last_safe_cell() {
        let board = board_from_str_array(&[
            "*.", //
            "..",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);
        assert!(game.reveal(0, 1));
        assert!(game.reveal(1, 0));
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.reveal(1, 1));
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn test_flag_toggles_and_rejects_revealed() {
        let board = board_from_str_array(&[
            "*.", //
            "..",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);

        assert!(game.flag(0, 0));
        assert!(game.is_flagged(0, 0));
        assert_eq!(game.flag_count(), 1);
        assert!(game.flag(0, 0));
        assert!(!game.is_flagged(0, 0));
        assert_eq!(game.flag_count(), 0);

        assert!(game.reveal(1, 1));
        assert!(!game.flag(1, 1), "Revealed cells cannot be flagged");
        assert!(!game.is_flagged(1, 1));
    }

    #[test]
    fn test_reveal_flagged_cell_is_noop() {
        let board = board_from_str_array(&[
            "*.", //
            "..",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);
        game.flag(0, 0);
        assert!(!game.reveal(0, 0));
        assert!(!game.is_revealed(0, 0));
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = Game::new_with_seed(9, 9, 10, 3).unwrap();
        game.flag(0, 0);
        game.flag(8, 8);

        // Force a loss by revealing a known bomb.
        let mut bomb_pos = None;
        'outer: for r in 0..9 {
            for c in 0..9 {
                if game.is_bomb(r, c) && !game.is_flagged(r, c) {
                    bomb_pos = Some((r, c));
                    break 'outer;
                }
            }
        }
        let (br, bc) = bomb_pos.expect("a 9x9 board with 10 bombs has an unflagged bomb");
        game.reveal(br, bc);
        assert_eq!(game.state(), GameState::Lost);

        game.restart();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.flag_count(), 0);
        let mut bombs = 0;
        for r in 0..9 {
            for c in 0..9 {
                assert!(!game.is_revealed(r, c));
                assert!(!game.is_flagged(r, c));
                assert!(!game.is_misflagged(r, c));
                if game.is_bomb(r, c) {
                    bombs += 1;
                }
            }
        }
        assert_eq!(bombs, 10);
    }

    #[test]
    fn test_display_formatting() {
        let board = board_from_str_array(&[
            "*.", //
            "..",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);
        game.flag(0, 0);
        game.reveal(1, 1);

        let display_str = format!("{}", game);
        assert!(display_str.contains('F'), "Missing flag marker");
        assert!(display_str.contains('1'), "Missing revealed count");
        assert!(display_str.contains('.'), "Missing hidden marker");
        // 1 header line + 2 rows.
        assert_eq!(display_str.trim_end().lines().count(), 3);
    }

    #[test]
    fn test_display_after_loss() {
        let board = board_from_str_array(&[
            "*.", //
            "..",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);
        game.flag(0, 1);
        game.reveal(0, 0);

        let display_str = format!("{}", game);
        assert!(display_str.contains('*'), "Missing revealed bomb");
        assert!(display_str.contains('X'), "Missing misflag marker");
    }
}
