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

use crate::game::{GameConfig, GameEngine};
use crate::input::{Command, InputHandler};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// The host loop: owns the terminal, the tick schedule and the render
/// schedule, and feeds keyboard input into the engine.
pub struct App {
    engine: GameEngine,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self {
            engine: GameEngine::new(config),
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
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

        // Tick schedule is owned here, at the engine's current interval;
        // replaced wholesale on every start and speed-up
        let mut tick_timer = interval(self.engine.current_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        if self.handle_event(event) {
                            tick_timer = interval(self.engine.current_interval());
                        }
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    let result = self.engine.tick();

                    if let Some(outcome) = result.outcome {
                        self.stats.on_game_over();
                        log::info!(
                            "game over ({:?}), final score {}, high score {}",
                            outcome,
                            self.engine.state().score,
                            self.engine.state().high_score,
                        );
                    }

                    if result.interval_changed {
                        log::info!(
                            "speed up to {} ticks/sec at score {}",
                            self.engine.state().speed,
                            self.engine.state().score,
                        );
                        tick_timer = interval(self.engine.current_interval());
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &self.stats);
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

    /// Feed one terminal event into the engine. Returns true when the tick
    /// schedule must be replaced.
    fn handle_event(&mut self, event: Event) -> bool {
        let mut reschedule = false;

        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return false;
            }

            match self.input_handler.handle_key_event(key) {
                Command::Steer(dir) => {
                    self.engine.set_direction(dir);
                }
                Command::Start => {
                    self.engine.start();
                    self.stats.on_game_start();
                    log::info!("round started");
                    reschedule = true;
                }
                Command::Quit => {
                    self.should_quit = true;
                }
                Command::Ignored => {}
            }
        }

        reschedule
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
