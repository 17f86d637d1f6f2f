//! Horizontal swipe tracking for post cards.
//!
//! A drag to the right past the threshold boosts the post, a drag to the left
//! deboosts it. While the finger (or mouse) is down the card follows it by a
//! clamped offset so the view can translate the card and highlight an edge.

use serde::{Deserialize, Serialize};

use super::vote::GestureOutcome;

pub const DEFAULT_MAX_OFFSET: f64 = 100.0;
pub const DEFAULT_MIN_SWIPE_DISTANCE: f64 = 75.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Largest visual displacement of the card in either direction.
    pub max_offset: f64,
    /// Raw travel (not the clamped offset) needed to commit a vote.
    pub min_swipe_distance: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            max_offset: DEFAULT_MAX_OFFSET,
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
        }
    }
}

impl SwipeConfig {
    pub fn sanitized(self) -> Self {
        let pick = |v: f64, fallback: f64| if v.is_finite() && v >= 0.0 { v } else { fallback };
        Self {
            max_offset: pick(self.max_offset, DEFAULT_MAX_OFFSET),
            min_swipe_distance: pick(self.min_swipe_distance, DEFAULT_MIN_SWIPE_DISTANCE),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

impl Direction {
    pub fn from_offset(offset: f64) -> Self {
        if offset > 0.0 {
            Direction::Right
        } else if offset < 0.0 {
            Direction::Left
        } else {
            Direction::None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    pub origin_x: Option<f64>,
    pub last_x: Option<f64>,
    pub is_active: bool,
    pub offset: f64,
    pub direction: Direction,
}

impl GestureState {
    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        *self == GestureState::default()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureVoteController {
    config: SwipeConfig,
    state: GestureState,
}

impl GestureVoteController {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SwipeConfig) -> Self {
        Self {
            config: config.sanitized(),
            state: GestureState::default(),
        }
    }

    pub fn config(&self) -> SwipeConfig {
        self.config
    }

    /// Swaps the tuning. Any gesture in progress is dropped without an outcome.
    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config.sanitized();
        self.reset();
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    /// Begins a gesture at `x`, replacing any gesture still in progress.
    pub fn on_gesture_start(&mut self, x: f64) {
        self.state = GestureState {
            origin_x: Some(x),
            last_x: None,
            is_active: true,
            offset: 0.0,
            direction: Direction::None,
        };
    }

    pub fn on_gesture_move(&mut self, x: f64) {
        if !self.state.is_active {
            return;
        }
        self.state.last_x = Some(x);
        let delta = self.state.origin_x.map(|origin| x - origin).unwrap_or(0.0);
        let max = self.config.max_offset;
        // NaN input would otherwise break the bounds invariant.
        let offset = if delta.is_nan() { 0.0 } else { delta.clamp(-max, max) };
        self.state.offset = offset;
        self.state.direction = Direction::from_offset(offset);
    }

    /// What releasing right now would produce.
    pub fn pending_outcome(&self) -> GestureOutcome {
        let (Some(origin), Some(last)) = (self.state.origin_x, self.state.last_x) else {
            return GestureOutcome::None;
        };
        let distance = last - origin;
        let min = self.config.min_swipe_distance;
        if distance <= -min {
            GestureOutcome::Deboost
        } else if distance >= min {
            GestureOutcome::Boost
        } else {
            GestureOutcome::None
        }
    }

    /// Finishes the gesture and reports what it should do to the vote.
    /// Always leaves the controller idle.
    pub fn on_gesture_end(&mut self) -> GestureOutcome {
        let outcome = self.pending_outcome();
        self.reset();
        outcome
    }

    pub fn on_gesture_cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.state = GestureState::default();
    }
}
