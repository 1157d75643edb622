//! Pitch coordinate space
//!
//! Every position on the board is a pair of percentages, independent of the
//! pixel size of whatever surface draws the pitch:
//! - `top`: 0 = upper goal line, 100 = lower goal line
//! - `left`: 0 = left touchline, 100 = right touchline
//!
//! Team A defends the lower goal, team B the upper one, so the two sides are
//! reflections of each other across the halfway line (`top = 50`).
//!
//! Bounds are soft: a drag may leave a marker slightly outside [0, 100].

use serde::{Deserialize, Serialize};

pub const PITCH_MIN: f32 = 0.0;
pub const PITCH_MAX: f32 = 100.0;
pub const HALFWAY: f32 = 50.0;

/// Position in pitch percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub top: f32,
    pub left: f32,
}

impl Position {
    /// Center spot.
    pub const CENTER: Position = Position { top: HALFWAY, left: HALFWAY };

    pub const fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }

    /// Reflect across the halfway line, keeping the distance from the left touchline.
    pub fn mirrored(self) -> Self {
        Self::new(PITCH_MAX - self.top, self.left)
    }

    pub fn is_on_pitch(self) -> bool {
        (PITCH_MIN..=PITCH_MAX).contains(&self.top) && (PITCH_MIN..=PITCH_MAX).contains(&self.left)
    }

    pub fn distance_to(self, other: Position) -> f32 {
        let dt = self.top - other.top;
        let dl = self.left - other.left;
        (dt * dt + dl * dl).sqrt()
    }

    pub fn approx_eq(self, other: Position, epsilon: f32) -> bool {
        (self.top - other.top).abs() <= epsilon && (self.left - other.left).abs() <= epsilon
    }
}

impl From<(f32, f32)> for Position {
    fn from((top, left): (f32, f32)) -> Self {
        Self::new(top, left)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}%, {:.1}%)", self.top, self.left)
    }
}
