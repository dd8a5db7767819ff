//! Board vocabulary and collaborator contracts shared by the strategy crates.
//!
//! `siege-core` defines the value types a decision engine reasons about
//! (coordinates, unit types, actions, breach events), the fixed arena regions
//! used as candidate pools, and the oracle traits through which the external
//! game-state service is consulted and mutated. It contains no strategy.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Action, ActionCommand, ApplyOutcome, apply_action, apply_command};
pub use config::GameConfig;
pub use env::{
    BoardOracle, Cost, Edge, MapBounds, SpawnOracle, SpawnRejection, ThreatOracle, UnitView,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    BreachEvent, Coordinate, FrameEvents, PlayerId, UnitCategory, UnitType, UnknownUnitType,
};
