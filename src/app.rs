use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Direction, GameConfig, GameEngine, GameEvent};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::{BoardView, Renderer};

/// The interactive game shell
///
/// Owns the fixed-period tick timer that drives the engine; the engine
/// itself never schedules anything.
pub struct App {
    engine: GameEngine,
    view: BoardView,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut engine = GameEngine::new(config)?;
        let mut view = BoardView::new(engine.config().width, engine.config().height);
        for event in engine.start() {
            view.apply(&event);
        }

        Ok(Self {
            engine,
            view,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            pending_direction: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulation tick; a no-op once the game is over
                _ = tick_timer.tick() => {
                    self.advance_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.view, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.pending_direction = Some(direction);
                }
                KeyAction::Restart => {
                    self.restart_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// Apply buffered input and run one engine tick
    fn advance_game(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.engine.set_direction(direction);
        }

        for event in self.engine.tick() {
            if event == GameEvent::GameOver {
                self.stats.record_game_over(self.view.score());
            }
            self.view.apply(&event);
        }
    }

    fn restart_game(&mut self) {
        self.view.reset();
        for event in self.engine.restart() {
            self.view.apply(&event);
        }
        self.stats.record_game_start();
        self.pending_direction = None;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CellKind;

    #[test]
    fn test_app_initialization() {
        let app = App::new(GameConfig::default()).unwrap();
        assert_eq!(app.view.score(), 0);
        assert!(!app.view.is_game_over());
        // The starting body is mirrored into the view.
        assert_eq!(app.view.kind_at(10, 0), CellKind::Snake);
        assert_eq!(app.view.kind_at(10, 1), CellKind::Snake);
    }

    #[test]
    fn test_app_rejects_bad_config() {
        assert!(App::new(GameConfig::new(0, 0)).is_err());
    }

    #[test]
    fn test_restart_clears_view() {
        let mut app = App::new(GameConfig::default()).unwrap();
        app.pending_direction = Some(Direction::Left);

        app.restart_game();

        assert_eq!(app.view.score(), 0);
        assert!(!app.view.is_game_over());
        assert!(app.pending_direction.is_none());
    }

    #[test]
    fn test_buffered_input_applies_on_tick() {
        let mut app = App::new(GameConfig::default()).unwrap();
        app.pending_direction = Some(Direction::Left);

        app.advance_game();

        assert!(app.pending_direction.is_none());
        // Head started at (10, 1) heading down; the buffered turn wins.
        assert_eq!(app.view.head(), Some(crate::game::Cell::new(9, 1)));
    }

    #[test]
    fn test_game_over_recorded_once() {
        let mut app = App::new(GameConfig::new(4, 4)).unwrap();
        // Drive the snake into the bottom wall.
        for _ in 0..10 {
            app.advance_game();
        }

        assert!(app.view.is_game_over());
        assert_eq!(app.stats.games_played(), 1);
    }
}
