//! Static unit statistics served to the reference board.
use std::collections::HashMap;

use siege_core::{Cost, UnitType};

/// Per-type numbers the reference board needs for pricing and threat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitStats {
    pub cost: Cost,
    /// Price of upgrading a standing structure of this type.
    pub upgrade_cost: Option<Cost>,
    /// Damage per frame against walking units, `None` if the unit never targets them.
    pub walker_damage: Option<f32>,
    pub attack_range: f32,
}

impl UnitStats {
    pub const fn new(cost: Cost) -> Self {
        Self {
            cost,
            upgrade_cost: None,
            walker_damage: None,
            attack_range: 0.0,
        }
    }

    pub const fn with_upgrade(mut self, cost: Cost) -> Self {
        self.upgrade_cost = Some(cost);
        self
    }

    pub const fn with_attack(mut self, walker_damage: f32, attack_range: f32) -> Self {
        self.walker_damage = Some(walker_damage);
        self.attack_range = attack_range;
        self
    }
}

/// Immutable table of [`UnitStats`] keyed by unit type.
///
/// Upgrade and Remove have no entry: they are priced per structure.
#[derive(Clone, Debug)]
pub struct UnitCatalog {
    stats: HashMap<UnitType, UnitStats>,
}

impl UnitCatalog {
    pub fn new(stats: HashMap<UnitType, UnitStats>) -> Self {
        Self { stats }
    }

    /// Standard ruleset numbers.
    pub fn standard() -> Self {
        let stats = HashMap::from([
            (
                UnitType::Wall,
                UnitStats::new(Cost::new(1.0, 0.0)).with_upgrade(Cost::new(1.0, 0.0)),
            ),
            (
                UnitType::Support,
                UnitStats::new(Cost::new(4.0, 0.0)).with_upgrade(Cost::new(4.0, 0.0)),
            ),
            (
                UnitType::Turret,
                UnitStats::new(Cost::new(2.0, 0.0))
                    .with_upgrade(Cost::new(4.0, 0.0))
                    .with_attack(5.0, 2.5),
            ),
            (
                UnitType::Scout,
                UnitStats::new(Cost::new(0.0, 1.0)).with_attack(2.0, 3.5),
            ),
            (
                UnitType::Demolisher,
                UnitStats::new(Cost::new(0.0, 3.0)).with_attack(8.0, 4.5),
            ),
            (
                UnitType::Interceptor,
                UnitStats::new(Cost::new(0.0, 1.0)).with_attack(20.0, 4.5),
            ),
        ]);
        Self::new(stats)
    }

    pub fn get(&self, unit_type: UnitType) -> Option<&UnitStats> {
        self.stats.get(&unit_type)
    }

    /// Replaces the stats of one unit type (builder pattern).
    pub fn with_stats(mut self, unit_type: UnitType, stats: UnitStats) -> Self {
        self.stats.insert(unit_type, stats);
        self
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
