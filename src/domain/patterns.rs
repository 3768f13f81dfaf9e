use super::cell::CellState;
use super::grid::Grid;

/// A named seed pattern that can be stamped onto the grid.
/// Each entry carries the state to write at its relative position.
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize, CellState)>,
}

impl Pattern {
    /// Create a pattern from (row, column, state) entries.
    pub fn new(
        name: &'static str,
        description: &'static str,
        cells: Vec<(usize, usize, CellState)>,
    ) -> Self {
        let height = cells.iter().map(|(r, _, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c, _)| *c).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            width,
            height,
            cells,
        }
    }

    /// Stamp the pattern with its top-left corner at (row, column).
    /// Placement wraps like every other grid access.
    pub fn place_on(&self, grid: &mut Grid, row: isize, column: isize) {
        for &(dr, dc, state) in &self.cells {
            grid.set_state(row + dr as isize, column + dc as isize, state);
        }
    }
}

/// Small library of two-color seed patterns
pub mod presets {
    use super::*;
    use super::CellState::{AliveBlue, AliveRed};

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0, AliveRed), (0, 1, AliveRed), (0, 2, AliveRed)],
        )
    }

    /// Blinker seeded with both colors. The reborn line turns red:
    /// two red votes against one blue.
    pub fn two_tone_blinker() -> Pattern {
        Pattern::new(
            "Two-tone blinker",
            "Oscillator that converges to red",
            vec![(0, 0, AliveRed), (0, 1, AliveRed), (0, 2, AliveBlue)],
        )
    }

    /// Glider - simplest spaceship, moves down-right (period 4)
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1, AliveRed),
                (1, 2, AliveRed),
                (2, 0, AliveRed),
                (2, 1, AliveRed),
                (2, 2, AliveRed),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0, AliveBlue),
                (0, 1, AliveBlue),
                (1, 0, AliveBlue),
                (1, 1, AliveBlue),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), two_tone_blinker(), glider(), block()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_come_from_the_cells() {
        let glider = presets::glider();
        assert_eq!((glider.height, glider.width), (3, 3));

        let blinker = presets::blinker();
        assert_eq!((blinker.height, blinker.width), (1, 3));
    }

    #[test]
    fn test_place_on_writes_the_stored_states() {
        let mut grid = Grid::new(6, 6).unwrap();
        presets::two_tone_blinker().place_on(&mut grid, 2, 1);

        assert_eq!(grid.state(2, 1), CellState::AliveRed);
        assert_eq!(grid.state(2, 2), CellState::AliveRed);
        assert_eq!(grid.state(2, 3), CellState::AliveBlue);
        assert_eq!(grid.iter_cells().filter(|(_, _, s)| s.is_alive()).count(), 3);
    }

    #[test]
    fn test_placement_wraps_at_the_edge() {
        let mut grid = Grid::new(4, 4).unwrap();
        presets::block().place_on(&mut grid, 3, 3);

        assert_eq!(grid.state(3, 3), CellState::AliveBlue);
        assert_eq!(grid.state(3, 0), CellState::AliveBlue);
        assert_eq!(grid.state(0, 3), CellState::AliveBlue);
        assert_eq!(grid.state(0, 0), CellState::AliveBlue);
    }

    #[test]
    fn test_all_patterns_have_unique_names() {
        let names: Vec<_> = presets::all_patterns()
            .iter()
            .map(|p| p.name)
            .collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
