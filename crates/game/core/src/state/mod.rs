//! Board vocabulary: coordinates, unit types, and the events reported by the
//! game-state service between turns.
//!
//! Everything here is a plain value. Authoritative board state lives behind
//! the oracle traits in [`crate::env`].
pub mod events;
pub mod types;

pub use events::{BreachEvent, FrameEvents};
pub use types::{Coordinate, PlayerId, UnitCategory, UnitType, UnknownUnitType};
