use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    config::GameConfig,
    direction::Direction,
    state::{GameOutcome, GameState, Position, Snake},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the snake advanced this tick
    pub moved: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Whether the tick interval changed; the host must reschedule its timer
    pub interval_changed: bool,
    /// Terminal state reached this tick, if any
    pub outcome: Option<GameOutcome>,
}

impl TickResult {
    fn idle() -> Self {
        Self {
            moved: false,
            ate_food: false,
            interval_changed: false,
            outcome: None,
        }
    }

    fn ended(outcome: GameOutcome) -> Self {
        Self {
            moved: false,
            ate_food: false,
            interval_changed: false,
            outcome: Some(outcome),
        }
    }
}

/// The game engine that owns all game state and handles all game logic
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine with a deterministic food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(Self::origin(&config));
        let food = Self::spawn_food(&mut rng, &config, &snake);
        let state = GameState::new(
            snake,
            food,
            config.grid_width,
            config.grid_height,
            config.initial_speed,
        );

        Self { config, state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Time between ticks at the current speed
    pub fn current_interval(&self) -> Duration {
        Duration::from_millis(1000) / self.state.speed
    }

    /// (Re)start a round: full reset back to a single snake cell at the
    /// board center, fresh food, zero score, initial speed. The high score
    /// carries over. The host must replace its tick timer afterwards.
    pub fn start(&mut self) {
        let snake = Snake::new(Self::origin(&self.config));
        let food = Self::spawn_food(&mut self.rng, &self.config, &snake);
        let mut state = GameState::new(
            snake,
            food,
            self.config.grid_width,
            self.config.grid_height,
            self.config.initial_speed,
        );
        state.high_score = self.state.high_score;
        state.running = true;

        self.state = state;
    }

    /// Steer the snake. Ignored if the requested direction is the exact
    /// reverse of the direction applied during the last completed tick.
    pub fn set_direction(&mut self, dir: Direction) {
        if let Some(last) = self.state.last_applied {
            if last.is_opposite(dir) {
                return;
            }
        }
        self.state.direction = Some(dir);
    }

    /// Advance the game by one step. No-op while not running.
    pub fn tick(&mut self) -> TickResult {
        if !self.state.running {
            return TickResult::idle();
        }

        let new_head = self.state.snake.head().stepped(self.state.direction);
        self.state.last_applied = self.state.direction;

        if !self.state.is_in_bounds(new_head) {
            self.end(GameOutcome::WallCollision);
            return TickResult::ended(GameOutcome::WallCollision);
        }

        // Checked against the pre-retraction body: the cell the tail is
        // about to vacate still counts as occupied. The head's own cell is
        // excluded so the zero-direction idle state never collides.
        if self.state.snake.collides_with_body(new_head) {
            self.end(GameOutcome::SelfCollision);
            return TickResult::ended(GameOutcome::SelfCollision);
        }

        self.state.snake.push_head(new_head);

        let ate_food = new_head == self.state.food;
        let mut interval_changed = false;
        let mut outcome = None;

        if ate_food {
            self.state.score += 1;

            if self.state.snake.len() == self.state.board_area() {
                // Nowhere left to put food: the board is won
                self.end(GameOutcome::BoardFull);
                outcome = Some(GameOutcome::BoardFull);
            } else {
                self.state.food =
                    Self::spawn_food(&mut self.rng, &self.config, &self.state.snake);

                if self.state.score % self.config.speedup_every == 0 {
                    self.state.speed += self.config.speed_increment;
                    interval_changed = true;
                }
            }
        } else {
            self.state.snake.retract_tail();
        }

        TickResult {
            moved: true,
            ate_food,
            interval_changed,
            outcome,
        }
    }

    /// Transition to the terminal state, folding the score into the high
    /// score. Returns the final score. The host cancels its tick timer and
    /// presents the game-over notification.
    pub fn end(&mut self, outcome: GameOutcome) -> u32 {
        self.state.running = false;
        self.state.outcome = Some(outcome);
        if self.state.score > self.state.high_score {
            self.state.high_score = self.state.score;
        }
        self.state.score
    }

    fn origin(config: &GameConfig) -> Position {
        Position::new(
            (config.grid_width / 2) as i32,
            (config.grid_height / 2) as i32,
        )
    }

    /// Rejection sampling: draw uniform cells until one misses the snake.
    /// Callers guarantee at least one free cell exists.
    fn spawn_food(rng: &mut StdRng, config: &GameConfig, snake: &Snake) -> Position {
        loop {
            let pos = Position::new(
                rng.gen_range(0..config.grid_width as i32),
                rng.gen_range(0..config.grid_height as i32),
            );

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}
