use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A cell coordinate on a 9x9 grid. Both components are in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Iterate all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..9).flat_map(|row| (0..9).map(move |col| Position { row, col }))
    }

    /// Top-left corner of the 3x3 box containing this position.
    pub fn box_origin(&self) -> Position {
        Position {
            row: (self.row / 3) * 3,
            col: (self.col / 3) * 3,
        }
    }
}

/// Error parsing a grid from its 81-character string form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("expected 81 characters, got {0}")]
    BadLength(usize),
    #[error("illegal character {ch:?} at index {index} (expected '0'-'9' or '.')")]
    BadChar { index: usize, ch: char },
}

/// A 9x9 Sudoku grid. Each cell holds a digit in `0..=9`, where `0` means
/// empty. Mutable during search and puzzle editing; treated as immutable
/// once confirmed as a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid([[u8; 9]; 9]);

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid (all zeros).
    pub fn new() -> Self {
        Self([[0; 9]; 9])
    }

    /// Create a grid from raw cell values.
    pub fn from_values(values: [[u8; 9]; 9]) -> Self {
        debug_assert!(values.iter().flatten().all(|&v| v <= 9));
        Self(values)
    }

    /// Parse a grid from an 81-character string, row-major. Digits `'1'`
    /// through `'9'` are cell values; `'0'` and `'.'` mean empty.
    pub fn from_string(s: &str) -> Result<Self, ParseGridError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 81 {
            return Err(ParseGridError::BadLength(chars.len()));
        }

        let mut grid = Self::new();
        for (index, &ch) in chars.iter().enumerate() {
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(ParseGridError::BadChar { index, ch }),
            };
            grid.0[index / 9][index % 9] = value;
        }
        Ok(grid)
    }

    /// Render as an 81-character string, `'0'` for empty cells.
    pub fn to_string_compact(&self) -> String {
        self.0
            .iter()
            .flatten()
            .map(|&v| (b'0' + v) as char)
            .collect()
    }

    /// Get the value at a position (`0` = empty).
    pub fn get(&self, pos: Position) -> u8 {
        self.0[pos.row][pos.col]
    }

    /// Set the value at a position (`0` clears the cell).
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= 9);
        self.0[pos.row][pos.col] = value;
    }

    /// Check whether a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == 0
    }

    /// The first empty position in row-major order, if any.
    pub fn first_empty(&self) -> Option<Position> {
        Position::all().find(|&pos| self.is_empty(pos))
    }

    /// Check whether every cell is filled.
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.0.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        81 - self.empty_count()
    }

    /// Raw cell values, row-major.
    pub fn values(&self) -> &[[u8; 9]; 9] {
        &self.0
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.0.iter().enumerate() {
            if row == 3 || row == 6 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, &value) in cells.iter().enumerate() {
                if col == 3 || col == 6 {
                    write!(f, "| ")?;
                }
                if value == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_parse_round_trip() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(grid.to_string_compact(), PUZZLE);
        assert_eq!(grid.get(Position::new(0, 0)), 5);
        assert_eq!(grid.get(Position::new(0, 2)), 0);
        assert_eq!(grid.filled_count(), 30);
    }

    #[test]
    fn test_parse_accepts_dots() {
        let dotted = PUZZLE.replace('0', ".");
        let grid = Grid::from_string(&dotted).unwrap();
        assert_eq!(grid.to_string_compact(), PUZZLE);
    }

    #[test]
    fn test_parse_bad_length() {
        assert_eq!(Grid::from_string("123"), Err(ParseGridError::BadLength(3)));
    }

    #[test]
    fn test_parse_bad_char() {
        let mut s = PUZZLE.to_string();
        s.replace_range(4..5, "x");
        assert_eq!(
            Grid::from_string(&s),
            Err(ParseGridError::BadChar { index: 4, ch: 'x' })
        );
    }

    #[test]
    fn test_box_origin() {
        assert_eq!(Position::new(4, 7).box_origin(), Position::new(3, 6));
        assert_eq!(Position::new(0, 0).box_origin(), Position::new(0, 0));
        assert_eq!(Position::new(8, 8).box_origin(), Position::new(6, 6));
    }

    #[test]
    fn test_all_positions() {
        assert_eq!(Position::all().count(), 81);
        assert_eq!(Position::all().next(), Some(Position::new(0, 0)));
        assert_eq!(Position::all().last(), Some(Position::new(8, 8)));
    }

    #[test]
    fn test_serde_round_trip() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}
