/// A position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Cell { row, col }
    }

    /// Manhattan distance to another cell
    pub fn manhattan(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The neighbouring cell one step in the given direction
    pub fn step(&self, direction: Direction) -> Cell {
        let (dr, dc) = direction.offset();
        Cell::new(self.row + dr, self.col + dc)
    }
}

/// The four axis-aligned moves, enumerated in a fixed order so that
/// move lists come out deterministic in tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// Row/column offset of one step in this direction
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Cell::new(0, 0).manhattan(&Cell::new(3, 3)), 6);
        assert_eq!(Cell::new(2, 5).manhattan(&Cell::new(4, 1)), 6);
        assert_eq!(Cell::new(7, 7).manhattan(&Cell::new(7, 7)), 0);
    }

    #[test]
    fn test_step_offsets() {
        let cell = Cell::new(4, 4);
        assert_eq!(cell.step(Direction::Down), Cell::new(5, 4));
        assert_eq!(cell.step(Direction::Up), Cell::new(3, 4));
        assert_eq!(cell.step(Direction::Right), Cell::new(4, 5));
        assert_eq!(cell.step(Direction::Left), Cell::new(4, 3));
    }

    #[test]
    fn test_direction_order_is_fixed() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::Down,
                Direction::Up,
                Direction::Right,
                Direction::Left
            ]
        );
    }
}
