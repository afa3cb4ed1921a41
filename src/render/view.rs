use crate::game::{Cell, GameEvent};

/// What a board cell currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Snake,
    Apple,
}

/// The presentation layer's mirror of the board
///
/// Updated exclusively by applying engine events; the renderer draws from
/// this view and never inspects engine internals. This keeps the mapping
/// from logical segments to drawn cells on the presentation side of the
/// boundary.
#[derive(Debug, Clone)]
pub struct BoardView {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
    apple: Option<Cell>,
    head: Option<Cell>,
    score: u32,
    game_over: bool,
}

impl BoardView {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellKind::Empty; width * height],
            apple: None,
            head: None,
            score: 0,
            game_over: false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn kind_at(&self, col: usize, row: usize) -> CellKind {
        self.cells[row * self.width + col]
    }

    /// The most recently added or advanced snake cell
    pub fn head(&self) -> Option<Cell> {
        self.head
    }

    /// Wipe the view for a fresh game; the restart events repopulate it
    pub fn reset(&mut self) {
        self.cells.fill(CellKind::Empty);
        self.apple = None;
        self.head = None;
        self.score = 0;
        self.game_over = false;
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::SegmentAdded { cell } => {
                self.set(cell, CellKind::Snake);
                self.head = Some(cell);
            }
            GameEvent::SegmentMoved { from, to } => {
                self.set(from, CellKind::Empty);
                self.set(to, CellKind::Snake);
                self.head = Some(to);
            }
            GameEvent::AppleRelocated { cell } => {
                // The old apple cell may already show the snake that ate it.
                if let Some(old) = self.apple {
                    if self.kind_at(old.col as usize, old.row as usize) == CellKind::Apple {
                        self.set(old, CellKind::Empty);
                    }
                }
                self.set(cell, CellKind::Apple);
                self.apple = Some(cell);
            }
            GameEvent::ScoreChanged { score } => {
                self.score = score;
            }
            GameEvent::GameOver => {
                self.game_over = true;
            }
        }
    }

    fn set(&mut self, cell: Cell, kind: CellKind) {
        let idx = cell.row as usize * self.width + cell.col as usize;
        self.cells[idx] = kind;
    }
}
