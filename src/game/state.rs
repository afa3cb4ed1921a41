use std::collections::VecDeque;

use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighboring cell one step in the given direction
    pub fn step(&self, direction: Direction) -> Self {
        let (dcol, drow) = direction.delta();
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }
}

/// Which part of the game lifecycle the engine is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    GameOver,
}

/// The snake's body and heading
///
/// Segments are ordered tail to head: the oldest segment sits at the front
/// of the deque and the newest at the back. The head cell is also tracked
/// separately so the pending move can be computed before any mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: VecDeque<Cell>,
    pub direction: Direction,
    pub head: Cell,
}

impl Snake {
    /// Create a snake from tail-to-head ordered cells
    pub fn new(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let segments: VecDeque<Cell> = cells.into_iter().collect();
        let head = *segments
            .back()
            .expect("snake must have at least one segment");
        Self {
            segments,
            direction,
            head,
        }
    }

    /// Append a new head segment
    pub fn push_head(&mut self, cell: Cell) {
        self.segments.push_back(cell);
        self.head = cell;
    }

    /// Remove and return the tail (oldest) segment
    pub fn pop_tail(&mut self) -> Cell {
        self.segments
            .pop_front()
            .expect("snake never shrinks below one segment")
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in tail-to-head order
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().copied()
    }
}
