//! # Bomb Finder Library
//!
//! This library provides the core game logic for the Bomb Finder grid game
//! (hidden bombs, numeric adjacency clues, flood-fill reveals) and an
//! automated solver that plays it using local deduction plus
//! probability-based guessing.
//!
//! It is used by two binaries:
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `auto_solver`: Generates or loads a board, then lets the solver play
//!   it out, printing each step.
//!
//! ## Modules
//! - `engine`: Contains the game board representation (`Board`), the
//!   game state machine (`Game`, `GameState`), and all game mechanics
//!   (bomb placement, reveal cascade, flagging, win/loss detection).
//! - `solver`: Provides the deduction pass and the `solve_game` run loop.
//! - `heuristics`: Defines guess selection used when no certain move exists.
//! - `utils`: Provides utility functions, such as parsing board
//!   configurations from strings.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full
// path, e.g., `bombfinder::solver::solve_game()`. This keeps the
// top-level library namespace cleaner.
