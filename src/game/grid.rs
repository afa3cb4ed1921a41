use super::state::Cell;

/// Tracks which cells are covered by the snake body
///
/// Kept exactly in sync with the snake's segments by the engine: a cell is
/// marked when a segment is added there and cleared when the tail vacates
/// it. Out-of-range cells are never queried because the engine bounds-checks
/// before consulting occupancy.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    occupied: usize,
}

impl OccupancyGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
            occupied: 0,
        }
    }

    fn index(&self, cell: Cell) -> usize {
        debug_assert!(cell.col >= 0 && (cell.col as usize) < self.width);
        debug_assert!(cell.row >= 0 && (cell.row as usize) < self.height);
        cell.row as usize * self.width + cell.col as usize
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells[self.index(cell)]
    }

    pub fn set_occupied(&mut self, cell: Cell, occupied: bool) {
        let idx = self.index(cell);
        if self.cells[idx] != occupied {
            self.cells[idx] = occupied;
            if occupied {
                self.occupied += 1;
            } else {
                self.occupied -= 1;
            }
        }
    }

    /// Number of cells not covered by the snake
    pub fn free_cells(&self) -> usize {
        self.width * self.height - self.occupied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let grid = OccupancyGrid::new(4, 4);
        assert!(!grid.is_occupied(Cell::new(0, 0)));
        assert!(!grid.is_occupied(Cell::new(3, 3)));
        assert_eq!(grid.free_cells(), 16);
    }

    #[test]
    fn test_set_and_clear() {
        let mut grid = OccupancyGrid::new(4, 4);

        grid.set_occupied(Cell::new(2, 1), true);
        assert!(grid.is_occupied(Cell::new(2, 1)));
        assert!(!grid.is_occupied(Cell::new(1, 2)));
        assert_eq!(grid.free_cells(), 15);

        grid.set_occupied(Cell::new(2, 1), false);
        assert!(!grid.is_occupied(Cell::new(2, 1)));
        assert_eq!(grid.free_cells(), 16);
    }

    #[test]
    fn test_redundant_set_keeps_count() {
        let mut grid = OccupancyGrid::new(4, 4);

        grid.set_occupied(Cell::new(0, 0), true);
        grid.set_occupied(Cell::new(0, 0), true);
        assert_eq!(grid.free_cells(), 15);

        grid.set_occupied(Cell::new(0, 0), false);
        grid.set_occupied(Cell::new(0, 0), false);
        assert_eq!(grid.free_cells(), 16);
    }
}
