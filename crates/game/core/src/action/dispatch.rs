use super::types::{Action, ActionCommand};
use crate::env::{SpawnOracle, SpawnRejection};
use crate::state::{UnitCategory, UnitType, UnknownUnitType};

/// Result of pushing one action through the dispatch step.
#[derive(Clone, Debug, PartialEq)]
pub enum ApplyOutcome {
    /// The board accepted the action.
    Applied,
    /// The legality query refused the action; the board is unchanged.
    Rejected(SpawnRejection),
    /// Legal at check time but the commit primitive reported no change.
    Failed,
    /// Transport command named a unit type this engine does not know.
    Unknown(UnknownUnitType),
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Commits `action` to `board`, checking legality against that same board first.
///
/// Dispatches on the unit type: placeable units go through `spawn`, the two
/// pseudo-types go through `attempt_upgrade` / `remove_structure`.
pub fn apply_action<B>(board: &mut B, action: &Action) -> ApplyOutcome
where
    B: SpawnOracle + ?Sized,
{
    let Action {
        unit_type,
        location,
    } = *action;

    if let Err(rejection) = board.can_spawn(location, unit_type, 1) {
        return ApplyOutcome::Rejected(rejection);
    }

    match unit_type.category() {
        UnitCategory::Mobile | UnitCategory::Structure => match board.spawn(location, unit_type) {
            Ok(()) => ApplyOutcome::Applied,
            Err(rejection) => ApplyOutcome::Rejected(rejection),
        },
        UnitCategory::Modifier => {
            let changed = match unit_type {
                UnitType::Upgrade => board.attempt_upgrade(location),
                _ => board.remove_structure(location),
            };
            if changed {
                ApplyOutcome::Applied
            } else {
                ApplyOutcome::Failed
            }
        }
    }
}

/// Resolves a transport command's shorthand and dispatches it.
///
/// Unknown shorthands are reported as [`ApplyOutcome::Unknown`] and leave the
/// board untouched.
pub fn apply_command<B>(board: &mut B, command: &ActionCommand) -> ApplyOutcome
where
    B: SpawnOracle + ?Sized,
{
    match UnitType::from_shorthand(&command.shorthand) {
        Ok(unit_type) => apply_action(board, &Action::new(unit_type, command.location)),
        Err(unknown) => ApplyOutcome::Unknown(unknown),
    }
}
