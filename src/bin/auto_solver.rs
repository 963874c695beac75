use clap::Parser;
use bombfinder::engine::{Game, GameState, DEFAULT_BOMB_COUNT, DEFAULT_COLS, DEFAULT_ROWS};
use bombfinder::solver::{self, SolveOutcome};
use bombfinder::utils::board_from_str_array;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of rows for a generated board
    #[clap(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of columns for a generated board
    #[clap(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Number of bombs for a generated board
    #[clap(long, default_value_t = DEFAULT_BOMB_COUNT)]
    bombs: usize,

    /// Seed for bomb placement (omit for a random board)
    #[clap(long)]
    seed: Option<u64>,

    /// Delay between solver steps, in milliseconds
    #[clap(long, default_value_t = 200)]
    delay_ms: u64,

    /// Suppress intermediate boards and run flat out
    #[clap(long)]
    quiet: bool,

    /// Path to a board layout file ('*' = bomb, '.' = clear); overrides
    /// the size flags
    board_file: Option<PathBuf>,
}

fn read_board_file(path: &PathBuf) -> Result<Game, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines)
        .map_err(|e| format!("Invalid board format: {}", e))
        .map(Game::new_with_board)
}

// Same cycle loop as solver::solve_game, but printing the board after
// every action so the run can be watched.
fn watch_solve(game: &mut Game, step_delay: Duration) -> SolveOutcome {
    let mut cycle = 0u32;
    while game.state() == GameState::Playing {
        if !solver::make_move(game) {
            return SolveOutcome::Stuck;
        }
        cycle += 1;
        println!("Cycle {}:\n{}\n", cycle, game);
        if !step_delay.is_zero() {
            thread::sleep(step_delay);
        }
    }
    match game.state() {
        GameState::Won => SolveOutcome::Won,
        _ => SolveOutcome::Lost,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let game_result = match &args.board_file {
        Some(path) => read_board_file(path),
        None => match args.seed {
            Some(seed) => Game::new_with_seed(args.rows, args.cols, args.bombs, seed),
            None => Game::new(args.rows, args.cols, args.bombs),
        },
    };
    let mut game = match game_result {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Solving a {}x{} board with {} bombs...\n",
        game.rows(),
        game.cols(),
        game.bomb_count()
    );
    let step_delay = Duration::from_millis(args.delay_ms);

    let outcome = if args.quiet {
        let cancel = AtomicBool::new(false);
        solver::solve_game(&mut game, step_delay, &cancel)
    } else {
        watch_solve(&mut game, step_delay)
    };

    println!("Final board:\n{}\n", game);
    match outcome {
        SolveOutcome::Won => println!("The solver cleared the board!"),
        SolveOutcome::Lost => println!("The solver hit a bomb."),
        SolveOutcome::Stuck => println!("The solver ran out of moves to try."),
        SolveOutcome::Cancelled => println!("The solver was cancelled."),
    }

    if outcome.is_won() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
