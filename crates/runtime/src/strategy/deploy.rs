//! Resource-exhaustive deployment passes.
//!
//! Both passes re-query affordability and legality before every spawn and
//! stop on the first of: budget spent, iteration cap reached, or no tile left
//! to spawn on.
use rand::Rng;
use rand::seq::SliceRandom;
use siege_core::{Coordinate, SpawnOracle, ThreatOracle, UnitType};

use super::risk::RiskEvaluator;
use crate::api::{Result, RuntimeError};

/// Why a deployment pass ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeployStop {
    /// `number_affordable` dropped below one.
    BudgetSpent,
    /// The pass hit its iteration ceiling while still able to pay.
    IterationCap,
    /// No candidate tile accepts the unit.
    NoCandidates,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployReport {
    pub unit_type: UnitType,
    pub spawned: u32,
    pub attempts: u32,
    pub stop: DeployStop,
}

/// Spawns `unit_type` at uniformly random `edges` tiles until the budget runs out.
///
/// Every loop iteration costs one attempt whether or not the spawn landed, so
/// a free unit or a fully blocked edge ends at `max_iterations`.
///
/// # Errors
///
/// Returns [`RuntimeError::NotDeployable`] if `unit_type` is not a mobile unit.
pub fn deploy_random<B, R>(
    board: &mut B,
    unit_type: UnitType,
    edges: &[Coordinate],
    rng: &mut R,
    max_iterations: u32,
) -> Result<DeployReport>
where
    B: SpawnOracle + ?Sized,
    R: Rng + ?Sized,
{
    if !unit_type.is_mobile() {
        return Err(RuntimeError::NotDeployable { unit_type });
    }

    let mut report = DeployReport {
        unit_type,
        spawned: 0,
        attempts: 0,
        stop: DeployStop::BudgetSpent,
    };

    loop {
        if board.number_affordable(unit_type) < 1 {
            report.stop = DeployStop::BudgetSpent;
            break;
        }
        if report.attempts >= max_iterations {
            tracing::warn!(
                "{} deploy pass hit its cap of {} iterations",
                unit_type,
                max_iterations
            );
            report.stop = DeployStop::IterationCap;
            break;
        }
        let Some(&location) = edges.choose(rng) else {
            report.stop = DeployStop::NoCandidates;
            break;
        };

        report.attempts += 1;
        if board.attempt_spawn(location, unit_type) {
            report.spawned += 1;
        }
    }

    tracing::debug!(
        "Deployed {} {} in {} attempts ({:?})",
        report.spawned,
        unit_type,
        report.attempts,
        report.stop
    );
    Ok(report)
}

/// Spends the budget on `unit_type` at the spawnable edge tile with the least
/// path exposure.
///
/// # Errors
///
/// Returns [`RuntimeError::NotDeployable`] if `unit_type` is not a mobile unit.
pub fn deploy_least_damage<B>(
    board: &mut B,
    unit_type: UnitType,
    edges: &[Coordinate],
    max_iterations: u32,
) -> Result<DeployReport>
where
    B: SpawnOracle + ThreatOracle + ?Sized,
{
    if !unit_type.is_mobile() {
        return Err(RuntimeError::NotDeployable { unit_type });
    }

    let mut report = DeployReport {
        unit_type,
        spawned: 0,
        attempts: 0,
        stop: DeployStop::BudgetSpent,
    };
    if board.number_affordable(unit_type) < 1 {
        return Ok(report);
    }

    let open: Vec<Coordinate> = edges
        .iter()
        .copied()
        .filter(|&location| board.can_spawn(location, unit_type, 1).is_ok())
        .collect();
    let location = match RiskEvaluator::least_damage_location(&*board, &open) {
        Ok(location) => location,
        Err(RuntimeError::EmptyCandidates) => {
            tracing::debug!("No open edge tile for {}", unit_type);
            report.stop = DeployStop::NoCandidates;
            return Ok(report);
        }
        Err(other) => return Err(other),
    };

    while board.number_affordable(unit_type) >= 1 {
        if report.attempts >= max_iterations {
            tracing::warn!(
                "{} deploy pass hit its cap of {} iterations",
                unit_type,
                max_iterations
            );
            report.stop = DeployStop::IterationCap;
            return Ok(report);
        }
        report.attempts += 1;
        if !board.attempt_spawn(location, unit_type) {
            report.stop = DeployStop::NoCandidates;
            break;
        }
        report.spawned += 1;
    }

    tracing::info!(
        "Sent {} {} from least-damage tile {}",
        report.spawned,
        unit_type,
        location
    );
    Ok(report)
}
