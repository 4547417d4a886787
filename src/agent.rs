use crate::cell::{Cell, Direction};
use crate::grid::Grid;
use std::collections::HashSet;

/// The searching agent: its position, the cells it has learned are unsafe,
/// and the path walked in the current episode.
///
/// `unsafe_cells` only ever grows; it is the knowledge carried across
/// episode resets. `path` is episode-scoped and cleared on every reset.
#[derive(Debug, Clone)]
pub struct Agent {
    pub position: Cell,
    unsafe_cells: HashSet<Cell>,
    path: Vec<Cell>,
}

impl Agent {
    pub fn new(start: Cell) -> Self {
        Agent {
            position: start,
            unsafe_cells: HashSet::new(),
            path: Vec::new(),
        }
    }

    /// All moves from the current position that stay in bounds and avoid
    /// cells learned unsafe, in the fixed down/up/right/left order.
    pub fn legal_moves(&self, grid: &Grid) -> Vec<(Direction, Cell)> {
        let mut moves = Vec::new();
        for direction in Direction::ALL {
            let destination = self.position.step(direction);
            if grid.in_bounds(&destination) && !self.unsafe_cells.contains(&destination) {
                moves.push((direction, destination));
            }
        }
        moves
    }

    /// Legal moves minus the cells already walked this episode. This is the
    /// candidate list the engine picks from; it stops the agent circling
    /// back on its own trail within an episode.
    pub fn unexplored_moves(&self, grid: &Grid) -> Vec<Cell> {
        self.legal_moves(grid)
            .into_iter()
            .map(|(_, destination)| destination)
            .filter(|destination| !self.path.contains(destination))
            .collect()
    }

    pub fn reached_goal(&self, grid: &Grid) -> bool {
        self.position == grid.goal
    }

    pub fn hit_hazard(&self, grid: &Grid) -> bool {
        grid.is_hazard(&self.position)
    }

    /// Append the current position to this episode's path
    pub fn visit(&mut self) {
        self.path.push(self.position);
    }

    /// Move to a cell. No validation: the engine only passes cells taken
    /// from `unexplored_moves`.
    pub fn advance(&mut self, cell: Cell) {
        self.position = cell;
    }

    /// Learn a cell as permanently unsafe; never undone
    pub fn mark_unsafe(&mut self, cell: Cell) {
        self.unsafe_cells.insert(cell);
    }

    pub fn unsafe_cells(&self) -> &HashSet<Cell> {
        &self.unsafe_cells
    }

    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// End-of-episode reset: back to start with an empty path. Unsafe
    /// knowledge is deliberately kept.
    pub fn reset(&mut self, start: Cell) {
        self.position = start;
        self.path.clear();
    }
}
