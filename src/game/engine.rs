use anyhow::{Context, Result};
use rand::Rng;

use super::{
    config::GameConfig,
    direction::Direction,
    event::GameEvent,
    grid::OccupancyGrid,
    state::{Cell, Phase, Snake},
};

/// The game engine that handles all game logic
///
/// Advances only when `tick` is called; scheduling belongs to the caller.
/// Every operation returns the events it produced so the presentation layer
/// can mirror the board without reaching into engine state.
pub struct GameEngine {
    config: GameConfig,
    phase: Phase,
    snake: Snake,
    grid: OccupancyGrid,
    apple: Cell,
    score: u32,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create an engine for the given configuration
    ///
    /// Fails on a grid too small to play on. The engine stays in
    /// `NotStarted` until `start` is called.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate().context("invalid game configuration")?;

        // Placeholder board; start() builds the real one.
        let mid = (config.width / 2) as i32;
        let snake = Snake::new([Cell::new(mid, 0), Cell::new(mid, 1)], Direction::Down);
        let grid = OccupancyGrid::new(config.width, config.height);

        Ok(Self {
            config,
            phase: Phase::NotStarted,
            snake,
            grid,
            apple: Cell::new(mid, 2),
            score: 0,
            rng: rand::thread_rng(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Begin a fresh game
    ///
    /// Places a two-segment snake centered horizontally on the top two
    /// rows, heading down, and an apple on a random free cell below it.
    pub fn start(&mut self) -> Vec<GameEvent> {
        let mid = (self.config.width / 2) as i32;
        let tail = Cell::new(mid, 0);
        let head = Cell::new(mid, 1);

        self.score = 0;
        self.snake = Snake::new([tail, head], Direction::Down);
        self.grid = OccupancyGrid::new(self.config.width, self.config.height);
        self.grid.set_occupied(tail, true);
        self.grid.set_occupied(head, true);
        // Rows >= 2 are all free here, so placement cannot fail.
        self.apple = self
            .place_apple(2)
            .expect("validated grid has a free row below the starting snake");
        self.phase = Phase::Running;

        vec![
            GameEvent::ScoreChanged { score: 0 },
            GameEvent::AppleRelocated { cell: self.apple },
            GameEvent::SegmentAdded { cell: tail },
            GameEvent::SegmentAdded { cell: head },
        ]
    }

    /// Same as `start`; the previous game's state is discarded
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.start()
    }

    /// Steer the snake, taking effect on the next tick
    ///
    /// A 180-degree turn would drive the head straight into the second
    /// segment, so the exact reverse of the current direction is silently
    /// ignored. Calls outside the Running phase are ignored too.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.phase != Phase::Running {
            return;
        }
        if self.snake.direction.is_opposite(direction) {
            return;
        }
        self.snake.direction = direction;
    }

    /// Advance the simulation by one step
    ///
    /// Returns no events once the game is over; the caller's timer may
    /// keep firing harmlessly until `start` is called again.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if self.phase != Phase::Running {
            return Vec::new();
        }

        let pending = self.snake.head.step(self.snake.direction);

        // Bounds before occupancy: the grid is never queried out of range.
        if !self.in_bounds(pending) || self.grid.is_occupied(pending) {
            self.phase = Phase::GameOver;
            return vec![GameEvent::GameOver];
        }

        let mut events = Vec::new();

        if pending == self.apple {
            // Growth: the tail stays put and the body gains a segment.
            self.snake.push_head(pending);
            self.grid.set_occupied(pending, true);
            events.push(GameEvent::SegmentAdded { cell: pending });

            self.score += 1;
            events.push(GameEvent::ScoreChanged { score: self.score });

            match self.place_apple(0) {
                Some(cell) => {
                    self.apple = cell;
                    events.push(GameEvent::AppleRelocated { cell });
                }
                None => {
                    // Snake covers the whole board; nothing left to eat.
                    self.phase = Phase::GameOver;
                    events.push(GameEvent::GameOver);
                }
            }
        } else {
            // Shift: the oldest segment vacates its cell, the head advances.
            let tail = self.snake.pop_tail();
            self.grid.set_occupied(tail, false);
            self.snake.push_head(pending);
            self.grid.set_occupied(pending, true);
            events.push(GameEvent::SegmentMoved {
                from: tail,
                to: pending,
            });
        }

        events
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.col < self.config.width as i32
            && cell.row >= 0
            && cell.row < self.config.height as i32
    }

    /// Pick a uniformly random unoccupied cell with row >= min_row
    ///
    /// Rejection sampling; returns None when the snake covers every cell,
    /// which bounds the retry loop on a full board.
    fn place_apple(&mut self, min_row: usize) -> Option<Cell> {
        if self.grid.free_cells() == 0 {
            return None;
        }
        loop {
            let cell = Cell::new(
                self.rng.gen_range(0..self.config.width) as i32,
                self.rng.gen_range(min_row..self.config.height) as i32,
            );
            if !self.grid.is_occupied(cell) {
                return Some(cell);
            }
        }
    }
}
