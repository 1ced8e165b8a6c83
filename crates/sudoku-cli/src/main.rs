use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sudoku_engine::{
    Difficulty, Generator, GeneratorConfig, Grid, Puzzle, Solver, ValidationStatus,
};

#[derive(Parser)]
#[command(name = "sudoku", about = "Generate, solve, and check 9x9 Sudoku puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one or more puzzles
    Generate {
        /// Difficulty level
        #[arg(short, long, value_enum, default_value = "medium")]
        difficulty: DifficultyArg,
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Re-derive layouts until the puzzle has exactly one solution
        #[arg(long)]
        check_uniqueness: bool,
        /// Also print the solution
        #[arg(long)]
        show_solution: bool,
        /// Print 81-character strings instead of box-ruled grids
        #[arg(long)]
        compact: bool,
        /// Print puzzles as JSON (visible, solution, difficulty)
        #[arg(long, conflicts_with = "compact")]
        json: bool,
    },
    /// Solve a puzzle given as an 81-character string
    Solve {
        /// Row-major cells, '1'-'9' for givens, '0' or '.' for blanks
        puzzle: String,
    },
    /// Validate a candidate against a puzzle's solution
    Check {
        /// The original puzzle (81 characters)
        puzzle: String,
        /// The candidate to validate (81 characters, may be partial)
        candidate: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(d: DifficultyArg) -> Self {
        match d {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            difficulty,
            count,
            seed,
            check_uniqueness,
            show_solution,
            compact,
            json,
        } => generate(
            difficulty.into(),
            count,
            seed,
            check_uniqueness,
            show_solution,
            compact,
            json,
        ),
        Command::Solve { puzzle } => solve(&puzzle),
        Command::Check { puzzle, candidate } => check(&puzzle, &candidate),
    }
}

#[allow(clippy::too_many_arguments)]
fn generate(
    difficulty: Difficulty,
    count: usize,
    seed: Option<u64>,
    check_uniqueness: bool,
    show_solution: bool,
    compact: bool,
    json: bool,
) -> Result<()> {
    let config = GeneratorConfig {
        check_uniqueness,
        ..GeneratorConfig::default()
    };
    let mut generator = match seed {
        Some(seed) => Generator::with_seed_and_config(seed, config),
        None => Generator::with_config(config),
    };

    for i in 0..count {
        let puzzle = generator.generate(difficulty);
        if json {
            println!("{}", serde_json::to_string(&puzzle)?);
        } else if compact {
            print!("{}", puzzle.visible().to_string_compact());
            if show_solution {
                print!(" {}", puzzle.solution().to_string_compact());
            }
            println!();
        } else {
            if count > 1 {
                println!("Puzzle {} of {} ({}):", i + 1, count, difficulty);
            } else {
                println!("Puzzle ({}):", difficulty);
            }
            println!("{}", puzzle.visible());
            if show_solution {
                println!("Solution:");
                println!("{}", puzzle.solution());
            }
        }
    }
    Ok(())
}

fn solve(puzzle: &str) -> Result<()> {
    let grid = Grid::from_string(puzzle).context("invalid puzzle string")?;
    let solver = Solver::new();

    match solver.solve(&grid) {
        Some(solution) => {
            println!("{}", solution);
            if solver.has_unique_solution(&grid) {
                println!("Solution is unique.");
            } else {
                println!("Warning: the puzzle admits more than one solution.");
            }
            Ok(())
        }
        None => bail!("puzzle has no solution"),
    }
}

/// Rough difficulty label for an externally supplied puzzle, by blank count.
fn classify(blanks: usize) -> Difficulty {
    match blanks {
        0..=30 => Difficulty::Easy,
        31..=45 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}

fn check(puzzle: &str, candidate: &str) -> Result<()> {
    let visible = Grid::from_string(puzzle).context("invalid puzzle string")?;
    let candidate = Grid::from_string(candidate).context("invalid candidate string")?;

    let solver = Solver::new();
    let solution = solver
        .solve(&visible)
        .context("puzzle has no solution, nothing to check against")?;
    if !solver.has_unique_solution(&visible) {
        log::warn!("puzzle is ambiguous; checking against one of its solutions");
    }

    let puzzle = Puzzle::from_parts(visible, solution, classify(visible.empty_count()));
    let report = puzzle.submit(&candidate);

    println!("{}", report.status);
    if report.status == ValidationStatus::Incorrect {
        for pos in report.mismatches() {
            println!(
                "  r{}c{}: got {}, expected {}",
                pos.row + 1,
                pos.col + 1,
                candidate.get(pos),
                puzzle.solution().get(pos)
            );
        }
    }
    Ok(())
}
