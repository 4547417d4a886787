use crate::cell::Cell;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Symbol used for hazard cells in renders and layout files
pub const HAZARD_SYMBOL: char = 'X';

/// Symbol used for plain empty cells in renders and layout files
pub const EMPTY_SYMBOL: char = '.';

/// An N x N grid with fixed start/goal cells, a hazard set and a mutable
/// marker overlay used for rendering search state.
///
/// The same type serves both as the true grid (hazards placed up front,
/// hidden from the agent) and as the reference map (initially hazard-free,
/// hazards learned one at a time by the search engine). Marking never
/// alters the hazard/start/goal classification of a cell.
#[derive(Debug, Clone)]
pub struct Grid {
    pub size: i32,
    pub start: Cell,
    pub goal: Cell,
    hazards: HashSet<Cell>,
    marks: HashMap<Cell, char>,
}

impl Grid {
    /// Create a grid with `hazard_count` hazards placed uniformly at random,
    /// never on the start or goal cell and never twice on the same cell.
    pub fn with_hazards(
        size: i32,
        hazard_count: usize,
        start: Cell,
        goal: Cell,
        rng: &mut impl Rng,
    ) -> Result<Self, String> {
        let mut grid = Self::hazard_free(size, start, goal)?;

        let reserved = if start == goal { 1 } else { 2 };
        let capacity = (size as usize) * (size as usize) - reserved;
        if hazard_count > capacity {
            return Err(format!(
                "cannot place {} hazards on a {}x{} grid with start and goal reserved",
                hazard_count, size, size
            ));
        }

        // Rejection-sample until the exact count holds
        while grid.hazards.len() < hazard_count {
            let cell = Cell::new(rng.gen_range(0..size), rng.gen_range(0..size));
            if cell != start && cell != goal {
                grid.hazards.insert(cell);
            }
        }

        Ok(grid)
    }

    /// Create a grid with no hazards; used as the agent's reference map
    pub fn hazard_free(size: i32, start: Cell, goal: Cell) -> Result<Self, String> {
        if size < 1 {
            return Err(format!("grid size must be at least 1, got {}", size));
        }
        let grid = Grid {
            size,
            start,
            goal,
            hazards: HashSet::new(),
            marks: HashMap::new(),
        };
        if !grid.in_bounds(&start) {
            return Err(format!(
                "start ({}, {}) is outside the {}x{} grid",
                start.row, start.col, size, size
            ));
        }
        if !grid.in_bounds(&goal) {
            return Err(format!(
                "goal ({}, {}) is outside the {}x{} grid",
                goal.row, goal.col, size, size
            ));
        }
        Ok(grid)
    }

    /// Parse a grid from a textual layout: one row per line, cells given as
    /// `S` (start), `G` (goal), `X` (hazard) or `.` (empty), with optional
    /// whitespace between cells. The layout must be square and contain
    /// exactly one `S` and one `G`.
    pub fn from_layout(text: &str) -> Result<Self, String> {
        let mut rows: Vec<Vec<char>> = Vec::new();
        for line in text.lines() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
        if rows.is_empty() {
            return Err("layout is empty".to_string());
        }

        let size = rows.len() as i32;
        let mut start = None;
        let mut goal = None;
        let mut hazards = HashSet::new();

        for (r, row) in rows.iter().enumerate() {
            if row.len() != rows.len() {
                return Err(format!(
                    "layout row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    rows.len()
                ));
            }
            for (c, &symbol) in row.iter().enumerate() {
                let cell = Cell::new(r as i32, c as i32);
                match symbol {
                    'S' => {
                        if start.replace(cell).is_some() {
                            return Err("layout contains more than one start cell".to_string());
                        }
                    }
                    'G' => {
                        if goal.replace(cell).is_some() {
                            return Err("layout contains more than one goal cell".to_string());
                        }
                    }
                    HAZARD_SYMBOL => {
                        hazards.insert(cell);
                    }
                    EMPTY_SYMBOL => {}
                    other => {
                        return Err(format!("unknown layout symbol '{}'", other));
                    }
                }
            }
        }

        let start = start.ok_or_else(|| "layout has no start cell".to_string())?;
        let goal = goal.ok_or_else(|| "layout has no goal cell".to_string())?;

        Ok(Grid {
            size,
            start,
            goal,
            hazards,
            marks: HashMap::new(),
        })
    }

    /// Check that a cell lies within the grid bounds
    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row >= 0 && cell.row < self.size && cell.col >= 0 && cell.col < self.size
    }

    pub fn is_hazard(&self, cell: &Cell) -> bool {
        self.hazards.contains(cell)
    }

    /// Record a hazard after the fact; how the reference map learns blockers
    pub fn add_hazard(&mut self, cell: Cell) {
        self.hazards.insert(cell);
    }

    pub fn hazards(&self) -> &HashSet<Cell> {
        &self.hazards
    }

    /// Place a marker on the overlay. The overlay never changes how a
    /// start/goal/hazard cell is classified or rendered.
    pub fn mark(&mut self, cell: Cell, symbol: char) {
        if self.in_bounds(&cell) {
            self.marks.insert(cell, symbol);
        }
    }

    /// Remove a single overlay marker. Refuses start, goal and hazard cells.
    pub fn unmark(&mut self, cell: Cell) {
        if cell != self.start && cell != self.goal && !self.hazards.contains(&cell) {
            self.marks.remove(&cell);
        }
    }

    /// Clear the whole overlay; hazards, start and goal are untouched
    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }

    /// Count overlay markers equal to `symbol`
    pub fn count_marker(&self, symbol: char) -> usize {
        self.marks.values().filter(|&&m| m == symbol).count()
    }

    /// Render the grid as text: one line per row, each cell three characters
    /// wide. Classification wins over the overlay, so start/goal/hazard
    /// cells always show as `S`/`G`/`X`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = Cell::new(row, col);
                let symbol = if cell == self.start {
                    'S'
                } else if cell == self.goal {
                    'G'
                } else if self.hazards.contains(&cell) {
                    HAZARD_SYMBOL
                } else {
                    *self.marks.get(&cell).unwrap_or(&EMPTY_SYMBOL)
                };
                out.push(' ');
                out.push(symbol);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}
