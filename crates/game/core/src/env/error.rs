//! Reasons the game-state service gives for refusing a placement.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Coordinate, UnitType};

/// Negative answer of a legality query or a failed commit.
///
/// Strategies treat every variant as "skip this candidate": the severity only
/// decides how loudly it is logged.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnRejection {
    /// Location is outside the diamond arena.
    #[error("location {0} is outside the arena")]
    OutOfArena(Coordinate),

    /// Location is in the opponent's half.
    #[error("location {0} is not on this player's side")]
    WrongSide(Coordinate),

    /// Mobile units may only be deployed from friendly edge tiles.
    #[error("mobile units must be deployed on a friendly edge, got {0}")]
    NotOnEdge(Coordinate),

    /// A structure already stands on the tile.
    #[error("location {0} is occupied by a structure")]
    Occupied(Coordinate),

    /// Upgrade or Remove targeted a tile without one of this player's structures.
    #[error("no friendly structure at {0}")]
    NoStructure(Coordinate),

    /// The structure at the tile has already been upgraded.
    #[error("structure at {0} is already upgraded")]
    AlreadyUpgraded(Coordinate),

    /// Batch size must be at least one.
    #[error("cannot place {0} units")]
    InvalidCount(u32),

    /// Not enough resources for the requested batch.
    #[error("cannot afford {requested} x {unit_type} (affordable: {affordable})")]
    InsufficientResources {
        unit_type: UnitType,
        requested: u32,
        affordable: u32,
    },
}

impl GameError for SpawnRejection {
    fn severity(&self) -> ErrorSeverity {
        use SpawnRejection::*;
        match self {
            // Board state may change within the turn (removals, refunds)
            Occupied(_) | NoStructure(_) | AlreadyUpgraded(_) | InsufficientResources { .. } => {
                ErrorSeverity::Recoverable
            }

            // Geometry never changes during a match
            OutOfArena(_) | WrongSide(_) | NotOnEdge(_) | InvalidCount(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use SpawnRejection::*;
        match self {
            OutOfArena(_) => "SPAWN_OUT_OF_ARENA",
            WrongSide(_) => "SPAWN_WRONG_SIDE",
            NotOnEdge(_) => "SPAWN_NOT_ON_EDGE",
            Occupied(_) => "SPAWN_OCCUPIED",
            NoStructure(_) => "SPAWN_NO_STRUCTURE",
            AlreadyUpgraded(_) => "SPAWN_ALREADY_UPGRADED",
            InvalidCount(_) => "SPAWN_INVALID_COUNT",
            InsufficientResources { .. } => "SPAWN_INSUFFICIENT_RESOURCES",
        }
    }
}
