use super::{
    action::Direction,
    config::GameConfig,
    event::GameEvent,
    state::{CollisionType, GameState, Position, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with a fixed food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = self.spawn_food_avoid_snake(&snake);

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Advance the round by one tick.
    ///
    /// Returns the event the talking snake should react to, if any. Paused
    /// and crashed rounds are left untouched.
    pub fn update(&mut self, state: &mut GameState) -> Option<GameEvent> {
        if state.paused || !state.is_alive() {
            return None;
        }

        let direction = state.next_direction.take().unwrap_or(state.snake.direction);
        let new_head = state.snake.head().moved_in_direction(direction);
        state.steps += 1;

        if let Some(collision_type) = self.check_collision(state, new_head) {
            state.collision = Some(collision_type);
            return Some(GameEvent::Crash);
        }

        let ate_food = new_head == state.food;
        state.snake.advance(direction, ate_food);

        if !ate_food {
            return None;
        }

        state.score += 1;
        state.food = self.spawn_food_avoid_snake(&state.snake);

        if self.reached_milestone(state) {
            state.last_milestone = state.score;
            Some(GameEvent::Milestone)
        } else {
            Some(GameEvent::Eat)
        }
    }

    fn reached_milestone(&self, state: &GameState) -> bool {
        state.score > 0
            && state.score % self.config.milestone_interval == 0
            && state.score != state.last_milestone
    }

    /// Check if the new head position causes a collision.
    /// The body is checked before the tail moves, so the tail cell counts.
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Spawn food at a random empty position
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Position {
        // Nowhere left to put it; the next move ends the round anyway
        if snake.len() >= self.config.grid_width * self.config.grid_height {
            return snake.head();
        }

        loop {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let pos = Position::new(x, y);

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}
