//! Backtracking solver.
//!
//! Depth-first search over empty cells in row-major order with
//! mutate-then-undo discipline. Used to complete grids and to count
//! solutions for the optional uniqueness check.

use crate::grid::Grid;
use crate::rules::is_placeable;

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the completed grid if one exists.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = *grid;
        if solve_recursive(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Count solutions up to a limit.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = *grid;
        let mut count = 0;
        count_recursive(&mut working, &mut count, limit);
        count
    }

    /// Check if the puzzle has exactly one solution.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }
}

/// Fill the next empty cell, recursing on success. Returns true when no
/// empty cell remains. The grid is restored on every failing branch, so
/// a false return leaves it exactly as it was.
pub(crate) fn solve_recursive(grid: &mut Grid) -> bool {
    let pos = match grid.first_empty() {
        Some(pos) => pos,
        None => return true,
    };

    for digit in 1..=9 {
        if is_placeable(grid, pos, digit) {
            grid.set(pos, digit);
            if solve_recursive(grid) {
                return true;
            }
            grid.set(pos, 0);
        }
    }

    false
}

/// Exhaustively enumerate completions, stopping once `*count` hits `limit`.
fn count_recursive(grid: &mut Grid, count: &mut usize, limit: usize) {
    if *count >= limit {
        return;
    }

    let pos = match grid.first_empty() {
        Some(pos) => pos,
        None => {
            *count += 1;
            return;
        }
    };

    for digit in 1..=9 {
        if is_placeable(grid, pos, digit) {
            grid.set(pos, digit);
            count_recursive(grid, count, limit);
            grid.set(pos, 0);
            if *count >= limit {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_consistent;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solve_known_puzzle() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let solver = Solver::new();
        let solution = solver.solve(&grid).unwrap();
        assert!(solution.is_complete());
        assert!(is_consistent(&solution));
        assert_eq!(solution.to_string_compact(), SOLUTION);
    }

    #[test]
    fn test_solve_preserves_givens() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let solution = Solver::new().solve(&grid).unwrap();
        for pos in crate::Position::all() {
            if !grid.is_empty(pos) {
                assert_eq!(grid.get(pos), solution.get(pos));
            }
        }
    }

    #[test]
    fn test_unique_solution() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let solver = Solver::new();
        assert!(solver.has_unique_solution(&grid));
    }

    #[test]
    fn test_empty_grid_has_many_solutions() {
        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&Grid::new(), 2), 2);
    }

    #[test]
    fn test_contradictory_grid_has_no_solution() {
        // Two 5s in row 0 — unsolvable.
        let mut grid = Grid::from_string(PUZZLE).unwrap();
        grid.set(crate::Position::new(0, 2), 5);
        let solver = Solver::new();
        assert!(solver.solve(&grid).is_none());
        assert_eq!(solver.count_solutions(&grid, 2), 0);
    }

    #[test]
    fn test_solved_grid_counts_once() {
        let solution = Grid::from_string(SOLUTION).unwrap();
        let solver = Solver::new();
        assert_eq!(solver.count_solutions(&solution, 2), 1);
    }
}
