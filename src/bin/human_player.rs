use bombfinder::engine::{Game, GameState, DEFAULT_BOMB_COUNT, DEFAULT_COLS, DEFAULT_ROWS};
use bombfinder::solver::{self, SolveOutcome};
use std::io::{self, Write}; // For input/output
use std::sync::atomic::AtomicBool;

fn print_help() {
    println!("Commands:");
    println!("  r row col  - reveal the cell at (row, col), 0-based");
    println!("  f row col  - toggle a flag at (row, col)");
    println!("  s          - let the solver finish the game");
    println!("  n          - start a new game");
    println!("  h          - show this help");
    println!("  q          - quit");
}

fn main() {
    let mut game = match Game::new(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_BOMB_COUNT) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    println!("Welcome to Bomb Finder!");
    print_help();

    loop {
        println!("---------------------");
        println!(
            "Bombs to find: {}",
            game.bomb_count().saturating_sub(game.flag_count())
        );
        println!("{}", game);

        match game.state() {
            GameState::Won => println!("You win! All safe cells revealed. ('n' for a new game)"),
            GameState::Lost => println!("Game over! You hit a bomb. ('n' for a new game)"),
            GameState::Playing => {}
        }

        print!("> ");
        io::stdout().flush().unwrap(); // Ensure prompt is shown before input

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }
        let trimmed_input = input.trim();
        if trimmed_input.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed_input.split_whitespace().collect();
        match parts[0] {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "h" => print_help(),
            "n" => {
                game.restart();
                println!("New game started.");
            }
            "s" => {
                if game.state() != GameState::Playing {
                    println!("The game is already over. ('n' for a new game)");
                    continue;
                }
                // Input is unavailable until the run finishes, so the
                // board stays exclusively the solver's.
                println!("Solver running...");
                let cancel = AtomicBool::new(false);
                match solver::solve_game(&mut game, solver::STEP_DELAY, &cancel) {
                    SolveOutcome::Won => println!("The solver cleared the board!"),
                    SolveOutcome::Lost => println!("The solver hit a bomb."),
                    SolveOutcome::Stuck => {
                        println!("The solver ran out of moves to try.")
                    }
                    SolveOutcome::Cancelled => println!("The solver was cancelled."),
                }
            }
            "r" | "f" => {
                if parts.len() != 3 {
                    println!("Usage: {} row col", parts[0]);
                    continue;
                }
                let (r, c) = match (parts[1].parse::<usize>(), parts[2].parse::<usize>()) {
                    (Ok(r), Ok(c)) => (r, c),
                    _ => {
                        println!("Invalid coordinates: enter numbers, e.g. '{} 3 4'.", parts[0]);
                        continue;
                    }
                };
                let changed = if parts[0] == "r" {
                    game.reveal(r, c)
                } else {
                    game.flag(r, c)
                };
                if !changed {
                    println!(
                        "Nothing happened at ({}, {}): out of bounds, already revealed, flagged, or the game is over.",
                        r, c
                    );
                }
            }
            other => println!("Unknown command '{}'. Type 'h' for help.", other),
        }
    }
}
