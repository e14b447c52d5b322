//! Pointer gestures reduced to a four-way turn intent
//!
//! A press records where the gesture starts and the release decides what it
//! was. Travel shorter than the swipe threshold is a tap, judged by where
//! the press landed relative to the board center. Longer travel is a swipe,
//! judged by the press-to-release delta. Either way the dominant axis wins
//! and a tie yields nothing.

use crate::game::Direction;

/// Pointer location in screen space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Direction of the larger component of (dx, dy)
pub fn dominant_direction(dx: i32, dy: i32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else if dy.abs() > dx.abs() {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    } else {
        None
    }
}

/// Tap: which side of the center was touched
pub fn tap_direction(touch: Point, center: Point) -> Option<Direction> {
    dominant_direction(touch.x - center.x, touch.y - center.y)
}

/// Swipe: which way the pointer travelled
pub fn swipe_direction(from: Point, to: Point) -> Option<Direction> {
    dominant_direction(to.x - from.x, to.y - from.y)
}

/// Turns press/release pairs into at most one intent each
#[derive(Debug, Clone)]
pub struct GestureTracker {
    origin: Option<Point>,
    swipe_threshold: i32,
}

impl GestureTracker {
    pub fn new(swipe_threshold: i32) -> Self {
        Self {
            origin: None,
            swipe_threshold: swipe_threshold.max(1),
        }
    }

    pub fn press(&mut self, at: Point) {
        self.origin = Some(at);
    }

    /// Finish the gesture. A release without a press is ignored.
    pub fn release(&mut self, at: Point, center: Point) -> Option<Direction> {
        let origin = self.origin.take()?;
        let travel = (at.x - origin.x).abs().max((at.y - origin.y).abs());

        if travel < self.swipe_threshold {
            tap_direction(origin, center)
        } else {
            swipe_direction(origin, at)
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.origin.is_some()
    }
}
