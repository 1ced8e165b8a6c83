//! Puzzle values and candidate validation.
//!
//! A [`Puzzle`] pairs the visible grid with its retained solution. It is
//! an owned value: whatever session or request context needs a puzzle
//! holds its own, and concurrent instances never share state.

use serde::{Deserialize, Serialize};

use crate::generator::Generator;
use crate::grid::{Grid, Position};
use crate::rules;

/// Difficulty level of a puzzle, mapping to a fixed blank-cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of cells blanked from the solution at this level. The
    /// counts are tunable policy, not a structural invariant.
    pub fn blank_count(&self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 45,
            Difficulty::Hard => 55,
        }
    }

    /// All difficulty levels.
    pub fn all_levels() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Three-way outcome of validating a candidate. `Incomplete` always wins
/// over `Incorrect`: an unfilled candidate is never reported as wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationStatus {
    /// At least one cell is still empty.
    Incomplete,
    /// Every cell is filled and correct.
    Correct,
    /// Every cell is filled but at least one is wrong.
    Incorrect,
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationStatus::Incomplete => write!(f, "Incomplete"),
            ValidationStatus::Correct => write!(f, "Correct"),
            ValidationStatus::Incorrect => write!(f, "Incorrect"),
        }
    }
}

/// How a candidate is judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationPolicy {
    /// Every filled cell must equal the stored solution. This is the
    /// default: it matches the original system's behavior and rejects
    /// alternative completions of ambiguous puzzles.
    #[default]
    SolutionMatch,
    /// Row/column/box uniqueness only: accepts *any* valid completion,
    /// not just the generated one.
    RulesOnly,
}

/// Result of validating a candidate grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub status: ValidationStatus,
    /// Per-cell map: `true` iff the cell is filled and judged correct
    /// under the active policy. Empty cells are `false`.
    pub per_cell_correct: [[bool; 9]; 9],
}

impl ValidationReport {
    /// Positions of filled-but-wrong cells.
    pub fn mismatches(&self) -> Vec<Position> {
        Position::all()
            .filter(|pos| !self.per_cell_correct[pos.row][pos.col])
            .collect()
    }
}

/// A playable puzzle: the visible grid plus the retained solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    visible: Grid,
    solution: Grid,
    difficulty: Difficulty,
}

impl Puzzle {
    /// Generate a new puzzle at the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Generator::new().generate(difficulty)
    }

    /// Assemble a puzzle from a visible grid and its solution. Every
    /// non-zero visible cell must equal the corresponding solution cell.
    pub fn from_parts(visible: Grid, solution: Grid, difficulty: Difficulty) -> Self {
        debug_assert!(solution.is_complete());
        debug_assert!(Position::all()
            .all(|pos| visible.is_empty(pos) || visible.get(pos) == solution.get(pos)));
        Self {
            visible,
            solution,
            difficulty,
        }
    }

    /// The grid shown to the player, with blanks.
    pub fn visible(&self) -> &Grid {
        &self.visible
    }

    /// The answer key.
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// The difficulty this puzzle was generated at.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Validate a candidate against the stored solution
    /// ([`ValidationPolicy::SolutionMatch`]).
    pub fn submit(&self, candidate: &Grid) -> ValidationReport {
        self.submit_with_policy(candidate, ValidationPolicy::SolutionMatch)
    }

    /// Validate a candidate under an explicit policy. Pure: the report is
    /// a function of the candidate and this puzzle alone, so resubmitting
    /// the same candidate yields the same report.
    pub fn submit_with_policy(
        &self,
        candidate: &Grid,
        policy: ValidationPolicy,
    ) -> ValidationReport {
        let mut per_cell_correct = [[false; 9]; 9];
        let mut all_filled = true;
        let mut all_correct = true;

        for pos in Position::all() {
            let value = candidate.get(pos);
            if value == 0 {
                all_filled = false;
                continue;
            }
            let correct = match policy {
                ValidationPolicy::SolutionMatch => value == self.solution.get(pos),
                ValidationPolicy::RulesOnly => !rules::has_conflict(candidate, pos),
            };
            per_cell_correct[pos.row][pos.col] = correct;
            if !correct {
                all_correct = false;
            }
        }

        let status = if !all_filled {
            ValidationStatus::Incomplete
        } else if all_correct {
            ValidationStatus::Correct
        } else {
            ValidationStatus::Incorrect
        };

        ValidationReport {
            status,
            per_cell_correct,
        }
    }
}
