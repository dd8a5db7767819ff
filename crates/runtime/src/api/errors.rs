//! Unified error types surfaced by the runtime API.
//!
//! Nothing in the decision engine is fatal to a match: callers log these and
//! skip the step that produced them.
use std::fmt;

use siege_core::{ErrorSeverity, GameError, UnitType};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("no legal {slot} action found after {attempts} attempts")]
    NoLegalAction { slot: PlanSlot, attempts: u32 },

    #[error("candidate location list is empty")]
    EmptyCandidates,

    #[error("board publishes no cost for any structure type")]
    NoStructureCatalog,

    #[error("{unit_type} cannot be deployed from an edge")]
    NotDeployable { unit_type: UnitType },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::NoLegalAction { .. } => ErrorSeverity::Recoverable,
            RuntimeError::EmptyCandidates | RuntimeError::NotDeployable { .. } => {
                ErrorSeverity::Validation
            }
            RuntimeError::NoStructureCatalog => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::NoLegalAction { .. } => "RUNTIME_NO_LEGAL_ACTION",
            RuntimeError::EmptyCandidates => "RUNTIME_EMPTY_CANDIDATES",
            RuntimeError::NoStructureCatalog => "RUNTIME_NO_STRUCTURE_CATALOG",
            RuntimeError::NotDeployable { .. } => "RUNTIME_NOT_DEPLOYABLE",
        }
    }
}

/// Which half of a turn plan an action fills.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlanSlot {
    Structure,
    Mobile,
}

impl PlanSlot {
    /// Unit types sampled for this slot.
    pub const fn unit_types(self) -> &'static [UnitType] {
        match self {
            PlanSlot::Structure => &UnitType::STRUCTURE_ACTIONS,
            PlanSlot::Mobile => &UnitType::MOBILE,
        }
    }
}

impl fmt::Display for PlanSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlanSlot::Structure => "structure",
            PlanSlot::Mobile => "mobile",
        };
        write!(f, "{}", label)
    }
}
