//! Randomized puzzle generation.
//!
//! A full solution grid is produced by pre-filling the three diagonal
//! boxes (mutually non-constraining) and backtracking over the rest with
//! a shuffled digit order per cell, then a difficulty-determined number
//! of cells is blanked to derive the visible puzzle.

use crate::grid::{Grid, Position};
use crate::puzzle::{Difficulty, Puzzle};
use crate::rules::is_placeable;
use crate::solver::Solver;

/// Configuration for puzzle generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Verify that the blanked puzzle has exactly one completion.
    /// Off by default: plain random removal tolerates puzzles with
    /// multiple valid completions.
    pub check_uniqueness: bool,
    /// Maximum blanking attempts per puzzle when `check_uniqueness` is on.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            check_uniqueness: false,
            max_attempts: 50,
        }
    }
}

/// Sudoku puzzle generator.
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Create a seeded generator with custom configuration.
    pub fn with_seed_and_config(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a new puzzle at the given difficulty. The returned
    /// [`Puzzle`] owns both the visible grid and its solution.
    pub fn generate(&mut self, difficulty: Difficulty) -> Puzzle {
        let solution = self.generate_solution();
        let blanks = difficulty.blank_count();

        let mut visible = self.blank_cells(&solution, blanks);

        if self.config.check_uniqueness {
            let solver = Solver::new();
            let mut attempt = 1;
            while !solver.has_unique_solution(&visible) {
                if attempt >= self.config.max_attempts {
                    log::warn!(
                        "no uniquely solvable {} layout within {} attempts; returning last",
                        difficulty,
                        self.config.max_attempts
                    );
                    break;
                }
                log::debug!("blanked layout not unique, retrying (attempt {})", attempt);
                visible = self.blank_cells(&solution, blanks);
                attempt += 1;
            }
        }

        Puzzle::from_parts(visible, solution, difficulty)
    }

    /// Generate a completely filled, constraint-satisfying grid.
    pub fn generate_solution(&mut self) -> Grid {
        loop {
            let mut grid = Grid::new();

            // Diagonal boxes don't constrain each other, so each can be
            // filled greedily from its own shuffled 1..=9.
            for i in (0..9).step_by(3) {
                self.fill_box(&mut grid, i, i);
            }

            if self.solve_randomized(&mut grid) {
                return grid;
            }

            // Unreachable short of a defect in the pre-fill above: a grid
            // with only the diagonal boxes filled is always completable.
            log::error!("backtracking exhausted after diagonal pre-fill; retrying from scratch");
        }
    }

    /// Fill a 3x3 box from a shuffled 1..=9.
    fn fill_box(&mut self, grid: &mut Grid, start_row: usize, start_col: usize) {
        let mut values: Vec<u8> = (1..=9).collect();
        self.rng.shuffle(&mut values);

        let mut idx = 0;
        for row in start_row..start_row + 3 {
            for col in start_col..start_col + 3 {
                grid.set(Position::new(row, col), values[idx]);
                idx += 1;
            }
        }
    }

    /// Backtrack over empty cells in row-major order, trying digits in a
    /// freshly shuffled order at each cell so the completion found is
    /// unbiased. Mutate-then-undo: a false return leaves the grid intact.
    fn solve_randomized(&mut self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true,
        };

        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        self.rng.shuffle(&mut digits);

        for &digit in &digits {
            if is_placeable(grid, pos, digit) {
                grid.set(pos, digit);
                if self.solve_randomized(grid) {
                    return true;
                }
                grid.set(pos, 0);
            }
        }

        false
    }

    /// Copy the solution and blank exactly `count` cells, chosen by
    /// shuffling all 81 positions and zeroing the first `count`. No cell
    /// is ever blanked twice, so the final blank count is exact.
    fn blank_cells(&mut self, solution: &Grid, count: usize) -> Grid {
        debug_assert!(count <= 81);

        let mut positions: Vec<Position> = Position::all().collect();
        self.rng.shuffle(&mut positions);

        let mut visible = *solution;
        for &pos in positions.iter().take(count) {
            visible.set(pos, 0);
        }
        visible
    }
}

/// Simple PCG-style PRNG, seeded from `getrandom` (WASM-compatible).
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter still gives distinct streams.
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }

    /// Fisher-Yates shuffle.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}
