//! Constraint rules: stateless validity predicates over a grid.

use crate::grid::{Grid, Position};

/// Check whether `digit` can be placed at `pos` without violating row,
/// column, or box uniqueness. Does not require the target cell to be
/// empty; callers are responsible for that.
pub fn is_placeable(grid: &Grid, pos: Position, digit: u8) -> bool {
    debug_assert!((1..=9).contains(&digit));

    for i in 0..9 {
        if grid.get(Position::new(pos.row, i)) == digit
            || grid.get(Position::new(i, pos.col)) == digit
        {
            return false;
        }
    }

    let origin = pos.box_origin();
    for row in origin.row..origin.row + 3 {
        for col in origin.col..origin.col + 3 {
            if grid.get(Position::new(row, col)) == digit {
                return false;
            }
        }
    }

    true
}

/// Check whether the non-zero values in every row, column, and box are
/// pairwise distinct. Zeros (empty cells) are ignored, so this works for
/// partially filled candidates as well as complete grids.
pub fn is_consistent(grid: &Grid) -> bool {
    for i in 0..9 {
        let row = (0..9).map(|col| grid.get(Position::new(i, col)));
        let col = (0..9).map(|row| grid.get(Position::new(row, i)));
        let origin = Position::new((i / 3) * 3, (i % 3) * 3);
        let boxed = (0..9)
            .map(move |j| grid.get(Position::new(origin.row + j / 3, origin.col + j % 3)));

        if !all_distinct(row) || !all_distinct(col) || !all_distinct(boxed) {
            return false;
        }
    }
    true
}

/// Check whether a cell's value conflicts with another cell in its row,
/// column, or box. Empty cells never conflict.
pub fn has_conflict(grid: &Grid, pos: Position) -> bool {
    let value = grid.get(pos);
    if value == 0 {
        return false;
    }

    for i in 0..9 {
        if i != pos.col && grid.get(Position::new(pos.row, i)) == value {
            return true;
        }
        if i != pos.row && grid.get(Position::new(i, pos.col)) == value {
            return true;
        }
    }

    let origin = pos.box_origin();
    for row in origin.row..origin.row + 3 {
        for col in origin.col..origin.col + 3 {
            if (row != pos.row || col != pos.col) && grid.get(Position::new(row, col)) == value {
                return true;
            }
        }
    }

    false
}

/// Input filter for free-text entry: accepts exactly the characters
/// `'1'` through `'9'`.
pub fn is_legal_digit(ch: char) -> bool {
    ('1'..='9').contains(&ch)
}

/// True iff the non-zero values in the sequence are pairwise distinct.
fn all_distinct(values: impl Iterator<Item = u8>) -> bool {
    let mut seen = [false; 10];
    for value in values {
        if value == 0 {
            continue;
        }
        if seen[value as usize] {
            return false;
        }
        seen[value as usize] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_always_placeable() {
        let grid = Grid::new();
        for pos in Position::all() {
            for digit in 1..=9 {
                assert!(is_placeable(&grid, pos, digit));
            }
        }
    }

    #[test]
    fn test_row_duplicate_rejected() {
        let mut grid = Grid::new();
        for (col, value) in [5, 3, 4, 6, 7, 8, 9, 1, 2].into_iter().enumerate() {
            grid.set(Position::new(0, col), value);
        }
        // 5 is already present in row 0.
        assert!(!is_placeable(&grid, Position::new(0, 8), 5));
    }

    #[test]
    fn test_column_duplicate_rejected() {
        let mut grid = Grid::new();
        grid.set(Position::new(2, 4), 7);
        assert!(!is_placeable(&grid, Position::new(8, 4), 7));
        assert!(is_placeable(&grid, Position::new(8, 4), 6));
    }

    #[test]
    fn test_box_duplicate_rejected() {
        let mut grid = Grid::new();
        grid.set(Position::new(3, 3), 9);
        // Same box, different row and column.
        assert!(!is_placeable(&grid, Position::new(5, 5), 9));
        // Outside the box.
        assert!(is_placeable(&grid, Position::new(5, 6), 9));
    }

    #[test]
    fn test_consistent_partial_grid() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), 1);
        grid.set(Position::new(0, 8), 2);
        grid.set(Position::new(8, 0), 3);
        assert!(is_consistent(&grid));

        grid.set(Position::new(0, 4), 1);
        assert!(!is_consistent(&grid));
    }

    #[test]
    fn test_consistent_ignores_zeros() {
        // Lots of zeros, no duplicates among the filled cells.
        let grid = Grid::from_string(
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
        )
        .unwrap();
        assert!(is_consistent(&grid));
    }

    #[test]
    fn test_box_inconsistency_detected() {
        let mut grid = Grid::new();
        grid.set(Position::new(6, 6), 4);
        grid.set(Position::new(8, 8), 4);
        assert!(!is_consistent(&grid));
    }

    #[test]
    fn test_has_conflict() {
        let mut grid = Grid::new();
        grid.set(Position::new(1, 1), 5);
        grid.set(Position::new(1, 7), 5);
        assert!(has_conflict(&grid, Position::new(1, 1)));
        assert!(has_conflict(&grid, Position::new(1, 7)));
        assert!(!has_conflict(&grid, Position::new(0, 0)));
    }

    #[test]
    fn test_is_legal_digit() {
        for ch in '1'..='9' {
            assert!(is_legal_digit(ch));
        }
        assert!(!is_legal_digit('0'));
        assert!(!is_legal_digit('a'));
        assert!(!is_legal_digit(' '));
        assert!(!is_legal_digit('.'));
    }
}
