use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction; `None` is the zero vector
    pub fn stepped(&self, direction: Option<Direction>) -> Self {
        match direction {
            Some(dir) => {
                let (dx, dy) = dir.delta();
                self.moved_by(dx, dy)
            }
            None => *self,
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Create a new length-1 snake at the given cell
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position is occupied by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Insert a new head at the front
    pub fn push_head(&mut self, pos: Position) {
        self.body.insert(0, pos);
    }

    /// Drop the tail segment
    pub fn retract_tail(&mut self) {
        self.body.pop();
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Snake hit a wall
    WallCollision,
    /// Snake hit itself
    SelfCollision,
    /// Snake covered every cell of the board (a win)
    BoardFull,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Direction the snake will move next tick; `None` until first input
    pub direction: Option<Direction>,
    /// Direction in effect during the most recently completed tick
    pub last_applied: Option<Direction>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub running: bool,
    pub score: u32,
    /// Best score seen this process; survives resets
    pub high_score: u32,
    /// Current speed in ticks per second
    pub speed: u32,
    /// Set once the round reaches a terminal state
    pub outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a fresh, not-yet-running state
    pub fn new(
        snake: Snake,
        food: Position,
        grid_width: usize,
        grid_height: usize,
        speed: u32,
    ) -> Self {
        Self {
            snake,
            food,
            direction: None,
            last_applied: None,
            grid_width,
            grid_height,
            running: false,
            score: 0,
            high_score: 0,
            speed,
            outcome: None,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Total number of cells on the board
    pub fn board_area(&self) -> usize {
        self.grid_width * self.grid_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.stepped(Some(Direction::Down)), Position::new(5, 6));
        assert_eq!(pos.stepped(Some(Direction::Up)), Position::new(5, 4));
        assert_eq!(pos.stepped(None), pos);
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert!(snake.body_segments().is_empty());
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::new(Position::new(5, 5));

        // Move without growing
        snake.push_head(Position::new(6, 5));
        snake.retract_tail();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(6, 5));

        // Move with growing
        snake.push_head(Position::new(7, 5));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position::new(7, 5));
    }

    #[test]
    fn test_collision_detection() {
        let mut snake = Snake::new(Position::new(3, 5));
        snake.push_head(Position::new(4, 5));
        snake.push_head(Position::new(5, 5));

        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5))); // body
        assert!(!snake.collides_with_body(Position::new(10, 10))); // empty

        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5)),
            Position::new(10, 10),
            20,
            20,
            7,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_fresh_state() {
        let state = GameState::new(
            Snake::new(Position::new(10, 10)),
            Position::new(5, 5),
            20,
            20,
            7,
        );

        assert!(!state.running);
        assert_eq!(state.direction, None);
        assert_eq!(state.last_applied, None);
        assert_eq!(state.score, 0);
        assert_eq!(state.outcome, None);
        assert_eq!(state.board_area(), 400);
    }
}
