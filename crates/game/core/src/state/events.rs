//! Events reported by the game-state service on each action frame.

use super::types::{Coordinate, PlayerId};

/// A unit reached the opposing edge and scored.
///
/// `owner` is the player whose unit scored, so a breach owned by the opponent
/// means this player was scored on at `location`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreachEvent {
    pub location: Coordinate,
    pub owner: PlayerId,
}

impl BreachEvent {
    pub const fn new(location: Coordinate, owner: PlayerId) -> Self {
        Self { location, owner }
    }
}

/// Event batch delivered with one action frame (sub-turn tick).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameEvents {
    pub breaches: Vec<BreachEvent>,
}

impl FrameEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breach(mut self, location: Coordinate, owner: PlayerId) -> Self {
        self.breaches.push(BreachEvent::new(location, owner));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.breaches.is_empty()
    }
}
