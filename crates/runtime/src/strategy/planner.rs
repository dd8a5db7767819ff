//! Per-turn planning with lookahead on a scratch copy of the board.
use rand::Rng;
use siege_core::{
    Action, ActionCommand, ApplyOutcome, BoardOracle, GameError, PlayerId, SpawnOracle,
    apply_action, apply_command,
};

use super::generator::ActionGenerator;
use crate::api::{PlanSlot, RuntimeError};

/// Actions chosen for one turn, in the order they must be replayed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TurnPlan {
    pub actions: Vec<Action>,
    /// One [`RuntimeError::NoLegalAction`] per slot for which no legal action existed.
    pub exhausted: Vec<RuntimeError>,
}

impl TurnPlan {
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    fn skip(&mut self, err: RuntimeError) {
        tracing::info!("Skipping slot [{}]: {}", err.error_code(), err);
        self.exhausted.push(err);
    }
}

/// Builds a structure action and a mobile action for each turn.
///
/// The mobile action is drawn against a scratch board that already carries
/// the structure action, so the pair is checked as a sequence.
#[derive(Clone, Debug)]
pub struct TurnPlanner {
    generator: ActionGenerator,
}

impl TurnPlanner {
    pub fn new(owner: PlayerId, max_generation_attempts: u32) -> Self {
        Self {
            generator: ActionGenerator::new(owner, max_generation_attempts),
        }
    }

    /// Plans this turn's two actions without touching `board`.
    pub fn plan_turn<B, R>(&self, board: &B, rng: &mut R) -> TurnPlan
    where
        B: BoardOracle,
        R: Rng + ?Sized,
    {
        let mut scratch = board.snapshot();
        let mut plan = TurnPlan::default();

        match self
            .generator
            .structure_action(&scratch, rng)
            .into_result(PlanSlot::Structure)
        {
            Ok(action) => {
                let outcome = apply_action(&mut scratch, &action);
                if !outcome.is_applied() {
                    tracing::debug!("Scratch board refused {}: {:?}", action, outcome);
                }
                plan.actions.push(action);
            }
            Err(err) => plan.skip(err),
        }

        match self
            .generator
            .mobile_action(&scratch, rng)
            .into_result(PlanSlot::Mobile)
        {
            Ok(action) => plan.actions.push(action),
            Err(err) => plan.skip(err),
        }

        tracing::debug!(
            "Planned {} actions ({} slots exhausted)",
            plan.actions.len(),
            plan.exhausted.len()
        );
        plan
    }

    /// Commits a plan to the live board, one action at a time.
    ///
    /// Each action is checked against the live board right before it is
    /// committed. Refused actions are reported and skipped.
    pub fn replay<B>(board: &mut B, plan: &TurnPlan) -> Vec<(Action, ApplyOutcome)>
    where
        B: SpawnOracle + ?Sized,
    {
        plan.actions
            .iter()
            .map(|action| {
                tracing::info!("Placing {}", action);
                let outcome = apply_action(board, action);
                if !outcome.is_applied() {
                    tracing::warn!("Live board refused {}: {:?}", action, outcome);
                }
                (*action, outcome)
            })
            .collect()
    }

    /// Commits transport commands, skipping those whose unit type is unknown.
    pub fn replay_commands<B>(board: &mut B, commands: &[ActionCommand]) -> Vec<ApplyOutcome>
    where
        B: SpawnOracle + ?Sized,
    {
        commands
            .iter()
            .map(|command| {
                let outcome = apply_command(board, command);
                match &outcome {
                    ApplyOutcome::Applied => {
                        tracing::debug!("Applied {} at {}", command.shorthand, command.location);
                    }
                    ApplyOutcome::Unknown(unknown) => {
                        tracing::warn!("Skipping command at {}: {}", command.location, unknown);
                    }
                    other => {
                        tracing::debug!(
                            "Command {} at {} not applied: {:?}",
                            command.shorthand,
                            command.location,
                            other
                        );
                    }
                }
                outcome
            })
            .collect()
    }
}
