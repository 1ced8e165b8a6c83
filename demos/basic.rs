//! Basic example of using the Sudoku engine

use sudoku_engine::{Difficulty, Generator, Grid, Solver, ValidationStatus};

fn main() {
    // Generate a puzzle
    println!("Generating a Medium difficulty puzzle...\n");
    let mut generator = Generator::new();
    let puzzle = generator.generate(Difficulty::Medium);

    println!("Generated puzzle:");
    println!("{}", puzzle.visible());
    println!("Given cells: {}", puzzle.visible().filled_count());
    println!("Empty cells: {}", puzzle.visible().empty_count());

    // Submit the solution itself — always Correct
    let report = puzzle.submit(puzzle.solution());
    println!("Submitting the answer key: {}\n", report.status);

    // Submit the unfinished visible grid — Incomplete, never Incorrect
    let report = puzzle.submit(puzzle.visible());
    assert_eq!(report.status, ValidationStatus::Incomplete);
    println!("Submitting the unfinished grid: {}\n", report.status);

    // Parse and solve a puzzle from a string
    println!("--- Parsing a puzzle from string ---\n");
    let puzzle_string =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    match Grid::from_string(puzzle_string) {
        Ok(grid) => {
            println!("Parsed puzzle:");
            println!("{}", grid);

            let solver = Solver::new();
            if let Some(solution) = solver.solve(&grid) {
                println!("Solution:");
                println!("{}", solution);
            }
            println!(
                "Number of solutions (up to 2): {}",
                solver.count_solutions(&grid, 2)
            );
        }
        Err(e) => eprintln!("Parse error: {}", e),
    }
}
