//! Traits describing the external game-state service.
//!
//! The decision engine never owns the board. It consults it through
//! [`SpawnOracle`] (legality, commits, budgets) and [`ThreatOracle`] (paths
//! and attackers), and forks it for lookahead through [`BoardOracle`].
//! Implementations live with the transport; the runtime ships an in-memory
//! reference board for tests and offline simulation.
mod error;
mod map;

pub use error::SpawnRejection;
pub use map::{Edge, MapBounds};

use crate::state::{Coordinate, PlayerId, UnitType};

/// Resource price of a unit, in structure points and mobile points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost {
    pub structure_points: f32,
    pub mobile_points: f32,
}

impl Cost {
    pub const fn new(structure_points: f32, mobile_points: f32) -> Self {
        Self {
            structure_points,
            mobile_points,
        }
    }

    pub fn total(&self) -> f32 {
        self.structure_points + self.mobile_points
    }
}

/// Read-only view of a unit on the board.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitView {
    pub unit_type: UnitType,
    pub owner: PlayerId,
    pub location: Coordinate,
    /// Damage dealt per frame to a walking (mobile) unit, if the unit attacks walkers.
    pub walker_damage: Option<f32>,
    pub upgraded: bool,
}

/// Legality, commit and budget queries against one board state.
///
/// Queries are side-effect free and must reflect every commit made earlier
/// on the same instance.
pub trait SpawnOracle {
    /// Can `count` units of `unit_type` be placed at `location` right now?
    ///
    /// For [`UnitType::Upgrade`] and [`UnitType::Remove`] this checks the
    /// structure currently standing at `location`.
    ///
    /// # Errors
    ///
    /// Returns the reason the placement is not permitted.
    fn can_spawn(
        &self,
        location: Coordinate,
        unit_type: UnitType,
        count: u32,
    ) -> Result<(), SpawnRejection>;

    /// Places one unit of a mobile or structure type.
    ///
    /// # Errors
    ///
    /// Returns the rejection if the placement is illegal; the board is then unchanged.
    fn spawn(&mut self, location: Coordinate, unit_type: UnitType) -> Result<(), SpawnRejection>;

    /// Upgrades this player's structure at `location`. Returns false if nothing changed.
    fn attempt_upgrade(&mut self, location: Coordinate) -> bool;

    /// Marks this player's structure at `location` for removal. Returns false if nothing changed.
    fn remove_structure(&mut self, location: Coordinate) -> bool;

    /// How many units of `unit_type` the remaining budget pays for.
    fn number_affordable(&self, unit_type: UnitType) -> u32;

    /// Every tile holding one of `owner`'s structures.
    fn structure_locations(&self, owner: PlayerId) -> Vec<Coordinate>;

    /// Price of `unit_type`, if the service publishes it.
    fn unit_cost(&self, _unit_type: UnitType) -> Option<Cost> {
        None
    }

    fn turn_number(&self) -> u32 {
        0
    }

    /// Best-effort placement; failures are swallowed.
    fn attempt_spawn(&mut self, location: Coordinate, unit_type: UnitType) -> bool {
        self.spawn(location, unit_type).is_ok()
    }

    /// Attempts one placement per location and returns how many succeeded.
    fn attempt_spawn_multiple(&mut self, locations: &[Coordinate], unit_type: UnitType) -> usize {
        locations
            .iter()
            .filter(|&&location| self.attempt_spawn(location, unit_type))
            .count()
    }

    /// Attempts one upgrade per location and returns how many succeeded.
    fn attempt_upgrade_multiple(&mut self, locations: &[Coordinate]) -> usize {
        locations
            .iter()
            .filter(|&&location| self.attempt_upgrade(location))
            .count()
    }
}

/// Path and threat queries used to estimate exposure of walking units.
pub trait ThreatOracle {
    /// Ordered tiles a speed-1 walker deployed at `start` would visit on its way
    /// to `target`, including `start` itself.
    fn pathfind(&self, start: Coordinate, target: Edge) -> Vec<Coordinate>;

    /// Units able to hit a walking unit standing at `location`.
    fn attackers(&self, location: Coordinate) -> Vec<UnitView>;

    /// Units currently standing at `location`.
    fn units_at(&self, _location: Coordinate) -> Vec<UnitView> {
        Vec::new()
    }
}

/// Full board contract: queries, commits and lookahead forks.
pub trait BoardOracle: SpawnOracle + ThreatOracle + Sized {
    /// Independent copy built from the same frame data. Mutating the copy must
    /// never affect `self`.
    fn snapshot(&self) -> Self;
}
