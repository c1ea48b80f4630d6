use super::action::Direction;
use super::event::PauseState;

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

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Direction the snake last moved in
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if any segment, head and tail included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Move snake one cell towards `direction`, growing if should_grow is true
    pub fn advance(&mut self, direction: Direction, should_grow: bool) {
        let new_head = self.head().moved_in_direction(direction);
        self.direction = direction;
        self.body.insert(0, new_head);

        if !should_grow {
            self.body.pop();
        }
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

/// Type of collision that ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

impl CollisionType {
    pub fn describe(&self) -> &'static str {
        match self {
            CollisionType::Wall => "hit the wall",
            CollisionType::SelfCollision => "bit its own tail",
        }
    }
}

/// Coarse state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    Crashed,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub paused: bool,
    /// Set once the snake crashes; the round stays over until a reset
    pub collision: Option<CollisionType>,
    /// Score at which the last milestone was reported
    pub last_milestone: u32,
    /// Heading to apply on the next update
    pub next_direction: Option<Direction>,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            paused: false,
            collision: None,
            last_milestone: 0,
            next_direction: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.collision.is_none()
    }

    pub fn status(&self) -> GameStatus {
        if !self.is_alive() {
            GameStatus::Crashed
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    /// Heading the snake will take on the next update
    pub fn heading(&self) -> Direction {
        self.next_direction.unwrap_or(self.snake.direction)
    }

    /// Queue a turn for the next update.
    ///
    /// A turn straight back into the neck is rejected and leaves everything
    /// as it was. The check is made against the direction the snake last
    /// moved in, so two quick turns within one tick cannot fold it onto itself.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.snake.direction.is_opposite(direction) {
            return false;
        }
        self.next_direction = Some(direction);
        true
    }

    /// Flip between running and paused. Does nothing once crashed.
    pub fn toggle_pause(&mut self) -> Option<PauseState> {
        if !self.is_alive() {
            return None;
        }
        self.paused = !self.paused;
        Some(if self.paused {
            PauseState::Paused
        } else {
            PauseState::Resumed
        })
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> GameState {
        GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(10, 10),
            20,
            20,
        )
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        snake.advance(Direction::Right, false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));

        snake.advance(Direction::Down, true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(6, 6));
        assert_eq!(snake.direction, Direction::Down);
    }

    #[test]
    fn test_occupancy() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = sample_state();

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_reverse_turn_rejected_for_every_heading() {
        for heading in Direction::ALL {
            let mut state = GameState::new(
                Snake::new(Position::new(10, 10), heading, 3),
                Position::new(0, 0),
                20,
                20,
            );

            assert!(!state.set_direction(heading.opposite()));
            assert_eq!(state.snake.direction, heading);
            assert_eq!(state.next_direction, None);
            assert_eq!(state.heading(), heading);
        }
    }

    #[test]
    fn test_turn_is_queued() {
        let mut state = sample_state();
        assert!(state.set_direction(Direction::Up));
        assert_eq!(state.heading(), Direction::Up);
        // Still judged against the direction actually travelled
        assert!(state.set_direction(Direction::Down));
        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.heading(), Direction::Down);
    }

    #[test]
    fn test_toggle_pause() {
        let mut state = sample_state();
        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.toggle_pause(), Some(PauseState::Paused));
        assert_eq!(state.status(), GameStatus::Paused);
        assert_eq!(state.toggle_pause(), Some(PauseState::Resumed));
        assert_eq!(state.status(), GameStatus::Running);
    }

    #[test]
    fn test_pause_ignored_after_crash() {
        let mut state = sample_state();
        state.collision = Some(CollisionType::Wall);
        assert_eq!(state.toggle_pause(), None);
        assert_eq!(state.status(), GameStatus::Crashed);
    }
}
