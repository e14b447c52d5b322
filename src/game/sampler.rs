use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use super::state::{Position, Snake};

/// Seeded source of food positions
pub struct FoodSampler {
    rng: StdRng,
    seed: u64,
}

impl FoodSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw uniform cells until one is free of the snake.
    ///
    /// Returns `None` when the snake covers every cell of the board.
    pub fn sample_food(
        &mut self,
        snake: &Snake,
        cells_per_side: i32,
        grid_unit: i32,
    ) -> Option<Position> {
        let occupied: HashSet<Position> = snake.body.iter().copied().collect();
        let cells = cells_per_side as usize * cells_per_side as usize;
        if occupied.len() >= cells {
            return None;
        }

        loop {
            let x = self.rng.random_range(0..cells_per_side) * grid_unit;
            let y = self.rng.random_range(0..cells_per_side) * grid_unit;
            let pos = Position::new(x, y);

            if !occupied.contains(&pos) {
                return Some(pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn test_food_on_grid_and_off_snake() {
        let mut sampler = FoodSampler::new(7);
        let snake = Snake::new(Position::new(160, 160), Direction::Right, 5, 20);

        for _ in 0..500 {
            let food = sampler.sample_food(&snake, 20, 20).unwrap();
            assert_eq!(food.x % 20, 0);
            assert_eq!(food.y % 20, 0);
            assert!((0..400).contains(&food.x));
            assert!((0..400).contains(&food.y));
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn test_finds_last_free_cell() {
        // 2x2 board with three cells taken
        let snake = Snake {
            body: vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1),
            ],
            direction: Direction::Right,
        };
        let mut sampler = FoodSampler::new(3);
        assert_eq!(sampler.sample_food(&snake, 2, 1), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_full_board_has_no_food() {
        let snake = Snake {
            body: vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(0, 1),
            ],
            direction: Direction::Up,
        };
        let mut sampler = FoodSampler::new(3);
        assert_eq!(sampler.sample_food(&snake, 2, 1), None);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let snake = Snake::new(Position::new(160, 160), Direction::Right, 5, 20);
        let mut a = FoodSampler::new(42);
        let mut b = FoodSampler::new(42);
        assert_eq!(a.seed(), 42);

        for _ in 0..20 {
            assert_eq!(a.sample_food(&snake, 20, 20), b.sample_food(&snake, 20, 20));
        }
    }
}
