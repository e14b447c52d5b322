use super::{
    action::Direction,
    config::GameConfig,
    sampler::FoodSampler,
    state::{CollisionType, GameState, Position, Snake},
};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Whether the tick interval changed and the driver must reschedule
    pub interval_changed: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the run hit a terminal condition
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn moved(ate_food: bool, interval_changed: bool) -> Self {
        Self {
            terminated: false,
            info: StepInfo {
                ate_food,
                collision_type: None,
                interval_changed,
            },
        }
    }

    fn board_full() -> Self {
        Self {
            terminated: true,
            info: StepInfo {
                ate_food: true,
                collision_type: Some(CollisionType::BoardFull),
                interval_changed: false,
            },
        }
    }

    fn collided(collision_type: CollisionType) -> Self {
        Self {
            terminated: true,
            info: StepInfo {
                ate_food: false,
                collision_type: Some(collision_type),
                interval_changed: false,
            },
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    sampler: FoodSampler,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let sampler = match config.seed {
            Some(seed) => FoodSampler::new(seed),
            None => FoodSampler::from_random(),
        };

        Self { config, sampler }
    }

    /// Seed used for food placement
    pub fn seed(&self) -> u64 {
        self.sampler.seed()
    }

    /// Build a fresh game: new snake, new food, score 0, heading None
    pub fn reset(&mut self) -> GameState {
        let mut snake = Snake::new(
            self.config.initial_head,
            Direction::Right,
            self.config.initial_snake_length,
            self.config.grid_unit,
        );
        snake.direction = Direction::None;

        // validate() keeps at least one cell free of a fresh snake
        let food = self
            .spawn_food_avoid_snake(&snake)
            .unwrap_or(self.config.initial_head);

        GameState::new(
            snake,
            food,
            self.config.board_size,
            self.config.grid_unit,
            self.config.tick_interval_ms,
        )
    }

    /// Execute one tick of the game.
    ///
    /// A collision leaves `state` untouched. Filling the board keeps the final
    /// move and score. Resetting is up to the caller either way.
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        state.turn_locked = false;

        // not started yet
        if state.snake.direction == Direction::None {
            return StepResult::moved(false, false);
        }

        let new_head = state
            .snake
            .head()
            .moved_in_direction(state.snake.direction, state.grid_unit);

        if let Some(collision_type) = self.check_collision(state, new_head) {
            return StepResult::collided(collision_type);
        }

        let ate_food = new_head == state.food;
        state.snake.move_snake(state.grid_unit, ate_food);
        state.steps += 1;

        let mut interval_changed = false;
        if ate_food {
            state.score += self.config.food_reward;
            match self.spawn_food_avoid_snake(&state.snake) {
                Some(food) => state.food = food,
                None => return StepResult::board_full(),
            }
            interval_changed = self.speed_up(state);
        }

        StepResult::moved(ate_food, interval_changed)
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if state.snake.collides_with_body(pos) {
            return Some(CollisionType::SelfCollision);
        }

        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        None
    }

    /// Shorten the tick interval if speed-up is enabled. Returns true on change.
    fn speed_up(&self, state: &mut GameState) -> bool {
        let Some(speed_up) = self.config.speed_up else {
            return false;
        };

        let previous = state.tick_interval_ms;
        state.tick_interval_ms = previous
            .saturating_sub(speed_up.decrement_ms)
            .max(speed_up.min_interval_ms);

        state.tick_interval_ms != previous
    }

    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Option<Position> {
        self.sampler
            .sample_food(snake, self.config.cells_per_side(), self.config.grid_unit)
    }
}
