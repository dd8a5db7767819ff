use std::fmt;

use crate::state::{Coordinate, UnitType};

/// A proposed or committed move: one unit type at one location.
///
/// Carries no validity guarantee of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub unit_type: UnitType,
    pub location: Coordinate,
}

impl Action {
    pub const fn new(unit_type: UnitType, location: Coordinate) -> Self {
        Self {
            unit_type,
            location,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.unit_type, self.location)
    }
}

/// Untyped action as received from a transport, keyed by unit shorthand.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCommand {
    pub shorthand: String,
    pub location: Coordinate,
}

impl ActionCommand {
    pub fn new(shorthand: impl Into<String>, location: Coordinate) -> Self {
        Self {
            shorthand: shorthand.into(),
            location,
        }
    }
}

impl From<Action> for ActionCommand {
    fn from(action: Action) -> Self {
        Self::new(action.unit_type.shorthand(), action.location)
    }
}
