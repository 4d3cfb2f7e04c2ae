//! A grid-world pathfinding problem: rectangular cells, walls, one start
//! cell, one or more goal cells, 4-neighbour moves. This is the crate's own
//! host-application example, used by the demo binary and the tests; the
//! search engines never depend on it.

use crate::search::{Problem, Successor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// A cell position, `(row, col)`, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan_distance(&self, other: &Cell) -> f64 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as f64
    }

    pub fn euclidean_distance(&self, other: &Cell) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

#[derive(Error, Debug)]
pub enum MapError {
    #[error("map is empty")]
    Empty,
    #[error("row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("unknown map glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
    #[error("map has no start cell")]
    MissingStart,
    #[error("map has more than one start cell")]
    DuplicateStart,
    #[error("failed to read map file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// How a single move is charged.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[clap(rename_all = "kebab-case")]
pub enum CostModel {
    /// Every move costs 1.
    #[default]
    Step,
    /// A move costs 1 plus the destination column, discouraging the right
    /// side of the map.
    StayLeft,
    /// A move costs 1 plus the destination row normalized by the grid
    /// height, discouraging the bottom of the map.
    StayUp,
}

#[derive(Debug, Clone)]
pub struct GridProblem {
    height: usize,
    width: usize,
    walls: HashSet<Cell>,
    start: Cell,
    goals: HashSet<Cell>,
    cost_model: CostModel,
}

impl GridProblem {
    /// Parse a map from text: `#` wall, `S` start, `G` goal, `.` floor.
    /// Leading and trailing whitespace on each line is ignored, as are blank
    /// lines, so maps can be written inline in raw strings.
    pub fn from_text(text: &str, cost_model: CostModel) -> Result<Self, MapError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(MapError::Empty);
        }

        let width = rows[0].chars().count();
        let mut walls = HashSet::new();
        let mut goals = HashSet::new();
        let mut start = None;

        for (row, line) in rows.iter().enumerate() {
            let row_width = line.chars().count();
            if row_width != width {
                return Err(MapError::RaggedRow {
                    row,
                    width: row_width,
                    expected: width,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::new(row, col);
                match glyph {
                    '#' => {
                        walls.insert(cell);
                    }
                    'G' => {
                        goals.insert(cell);
                    }
                    'S' => {
                        if start.replace(cell).is_some() {
                            return Err(MapError::DuplicateStart);
                        }
                    }
                    '.' => {}
                    _ => return Err(MapError::UnknownGlyph { glyph, row, col }),
                }
            }
        }

        Ok(Self {
            height: rows.len(),
            width,
            walls,
            start: start.ok_or(MapError::MissingStart)?,
            goals,
            cost_model,
        })
    }

    pub fn from_path(path: &PathBuf, cost_model: CostModel) -> Result<Self, MapError> {
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_text(&text, cost_model)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn goals(&self) -> impl Iterator<Item = &Cell> {
        self.goals.iter()
    }

    fn step_cost(&self, to: &Cell) -> f64 {
        match self.cost_model {
            CostModel::Step => 1.0,
            CostModel::StayLeft => 1.0 + to.col as f64,
            CostModel::StayUp => 1.0 + to.row as f64 / self.height as f64,
        }
    }

    fn neighbours(&self, cell: &Cell) -> Vec<Cell> {
        let mut neighbours = Vec::with_capacity(4);
        if cell.row > 0 {
            neighbours.push(Cell::new(cell.row - 1, cell.col));
        }
        if cell.row + 1 < self.height {
            neighbours.push(Cell::new(cell.row + 1, cell.col));
        }
        if cell.col > 0 {
            neighbours.push(Cell::new(cell.row, cell.col - 1));
        }
        if cell.col + 1 < self.width {
            neighbours.push(Cell::new(cell.row, cell.col + 1));
        }
        neighbours.retain(|neighbour| !self.walls.contains(neighbour));
        neighbours
    }
}

impl Problem for GridProblem {
    type State = Cell;

    fn initial_state(&self) -> Cell {
        self.start
    }

    fn is_goal(&self, state: &Cell) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Cell) -> Vec<Successor<Cell>> {
        self.neighbours(state)
            .into_iter()
            .map(|cell| {
                let cost = self.step_cost(&cell);
                Successor::new(cell, cost)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const MAP: &str = "S.#\n\
                       ..#\n\
                       .#G";

    #[test]
    fn parses_dimensions_start_walls_and_goals() {
        let problem = GridProblem::from_text(MAP, CostModel::Step).unwrap();
        assert_eq!(problem.height(), 3);
        assert_eq!(problem.width(), 3);
        assert_eq!(problem.initial_state(), Cell::new(0, 0));
        assert!(problem.is_goal(&Cell::new(2, 2)));
        assert!(!problem.is_goal(&Cell::new(0, 0)));
    }

    #[test]
    fn successors_respect_bounds_and_walls() {
        let problem = GridProblem::from_text(MAP, CostModel::Step).unwrap();
        // Top-left corner: down and right, but right of (1, 1) is fine while
        // (0, 2) and (1, 2) are walls.
        let successors = problem.successors(&Cell::new(0, 0));
        let states: Vec<Cell> = successors.iter().map(|s| s.state).collect();
        assert_eq!(states, vec![Cell::new(1, 0), Cell::new(0, 1)]);

        // (1, 1) has a wall to the right and below.
        let successors = problem.successors(&Cell::new(1, 1));
        let states: Vec<Cell> = successors.iter().map(|s| s.state).collect();
        assert_eq!(states, vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn stay_left_charges_the_destination_column() {
        let problem = GridProblem::from_text("S..\n...", CostModel::StayLeft).unwrap();
        let successors = problem.successors(&Cell::new(0, 1));
        for successor in &successors {
            assert_approx_eq!(successor.cost, 1.0 + successor.state.col as f64);
        }
    }

    #[test]
    fn stay_up_charges_the_normalized_row() {
        let problem = GridProblem::from_text("S.\n..\n..\n..", CostModel::StayUp).unwrap();
        let successors = problem.successors(&Cell::new(1, 0));
        for successor in &successors {
            assert_approx_eq!(successor.cost, 1.0 + successor.state.row as f64 / 4.0);
        }
    }

    #[test]
    fn empty_map_is_rejected() {
        assert!(matches!(
            GridProblem::from_text("  \n\n", CostModel::Step),
            Err(MapError::Empty)
        ));
    }

    #[test]
    fn ragged_map_is_rejected() {
        assert!(matches!(
            GridProblem::from_text("S..\n..", CostModel::Step),
            Err(MapError::RaggedRow {
                row: 1,
                width: 2,
                expected: 3
            })
        ));
    }

    #[test]
    fn unknown_glyph_is_rejected() {
        assert!(matches!(
            GridProblem::from_text("S.x", CostModel::Step),
            Err(MapError::UnknownGlyph {
                glyph: 'x',
                row: 0,
                col: 2
            })
        ));
    }

    #[test]
    fn missing_start_is_rejected() {
        assert!(matches!(
            GridProblem::from_text("..G", CostModel::Step),
            Err(MapError::MissingStart)
        ));
    }

    #[test]
    fn duplicate_start_is_rejected() {
        assert!(matches!(
            GridProblem::from_text("S.S", CostModel::Step),
            Err(MapError::DuplicateStart)
        ));
    }
}
