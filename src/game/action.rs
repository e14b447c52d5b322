/// Direction the snake can move
///
/// `None` is the heading of a freshly reset snake that has not been started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn unit_delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }

    /// Returns the delta scaled by the grid unit
    pub fn delta(&self, grid_unit: i32) -> (i32, i32) {
        let (dx, dy) = self.unit_delta();
        (dx * grid_unit, dy * grid_unit)
    }
}

/// Decide whether a turn request changes the current heading.
///
/// Returns `None` when the request must be ignored: reversing into the
/// opposite direction, repeating the current one, or asking for no heading.
pub fn propose_direction(current: Direction, requested: Direction) -> Option<Direction> {
    if requested == Direction::None || requested == current || current.is_opposite(requested) {
        return None;
    }
    Some(requested)
}

/// Command sent to a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Request a turn towards a direction
    Turn(Direction),
    /// Start moving (Idle -> Running)
    Start,
    /// Throw away the current run and go back to Idle
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::None.is_opposite(Direction::Left));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(20), (0, -20));
        assert_eq!(Direction::Down.delta(20), (0, 20));
        assert_eq!(Direction::Left.delta(20), (-20, 0));
        assert_eq!(Direction::Right.delta(20), (20, 0));
        assert_eq!(Direction::None.delta(20), (0, 0));
    }

    #[test]
    fn test_reversal_never_accepted() {
        let all = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        for current in all {
            for requested in all {
                let proposed = propose_direction(current, requested);
                if current.is_opposite(requested) || current == requested {
                    assert_eq!(proposed, None, "{current:?} -> {requested:?}");
                } else {
                    assert_eq!(proposed, Some(requested));
                }
            }
        }
    }

    #[test]
    fn test_any_turn_from_standstill() {
        assert_eq!(
            propose_direction(Direction::None, Direction::Left),
            Some(Direction::Left)
        );
        assert_eq!(propose_direction(Direction::Right, Direction::None), None);
    }
}
