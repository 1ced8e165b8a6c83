//! Core Sudoku engine: grid model, constraint rules, backtracking solver,
//! randomized puzzle generation, and candidate validation.
//!
//! The engine is synchronous and CPU-bound. Every puzzle is an owned value;
//! nothing here is process-global, so concurrent puzzle instances never
//! interfere.
//!
//! ```
//! use sudoku_engine::{Difficulty, Generator, ValidationStatus};
//!
//! let mut generator = Generator::with_seed(42);
//! let puzzle = generator.generate(Difficulty::Easy);
//! assert_eq!(puzzle.visible().empty_count(), Difficulty::Easy.blank_count());
//!
//! // Submitting the stored solution is always Correct.
//! let report = puzzle.submit(puzzle.solution());
//! assert_eq!(report.status, ValidationStatus::Correct);
//! ```

mod generator;
mod grid;
mod puzzle;
pub mod rules;
mod solver;

pub use generator::{Generator, GeneratorConfig};
pub use grid::{Grid, ParseGridError, Position};
pub use puzzle::{Difficulty, Puzzle, ValidationPolicy, ValidationReport, ValidationStatus};
pub use rules::{is_consistent, is_legal_digit, is_placeable};
pub use solver::Solver;
