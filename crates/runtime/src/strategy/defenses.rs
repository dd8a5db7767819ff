//! Fixed build orders: the opening defense and the demolisher line push.
use siege_core::{Coordinate, SpawnOracle, UnitType};

use crate::api::{Result, RuntimeError};

/// Turrets covering both corners and the center lane.
pub const DEFENSIVE_TURRETS: [Coordinate; 6] = [
    Coordinate::new(0, 13),
    Coordinate::new(27, 13),
    Coordinate::new(8, 11),
    Coordinate::new(19, 11),
    Coordinate::new(13, 11),
    Coordinate::new(14, 11),
];

/// Walls shielding the two flank turrets; upgraded once placed.
pub const TURRET_WALLS: [Coordinate; 2] = [Coordinate::new(8, 12), Coordinate::new(19, 12)];

/// Row the demolisher line is built on, and its x span (inclusive, built right to left).
pub const LINE_ROW: i32 = 11;
pub const LINE_X_RANGE: (i32, i32) = (5, 27);

pub const DEMOLISHER_SPAWN: Coordinate = Coordinate::new(24, 10);
pub const DEMOLISHER_WAVE: u32 = 22;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefenseReport {
    pub turrets: usize,
    pub walls: usize,
    pub upgrades: usize,
}

/// Places the fixed turrets and walls, then upgrades the walls.
///
/// Every placement is best effort; tiles already built or unaffordable are
/// simply skipped.
pub fn build_static_defenses<B>(board: &mut B) -> DefenseReport
where
    B: SpawnOracle + ?Sized,
{
    let report = DefenseReport {
        turrets: board.attempt_spawn_multiple(&DEFENSIVE_TURRETS, UnitType::Turret),
        walls: board.attempt_spawn_multiple(&TURRET_WALLS, UnitType::Wall),
        upgrades: board.attempt_upgrade_multiple(&TURRET_WALLS),
    };
    tracing::debug!(
        "Static defenses: {} turrets, {} walls, {} upgrades",
        report.turrets,
        report.walls,
        report.upgrades
    );
    report
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineReport {
    /// Structure type the line was built from.
    pub line_unit: UnitType,
    pub line_built: usize,
    pub demolishers: u32,
}

/// Cheapest structure type by total published cost. Ties keep declaration order.
pub fn cheapest_structure<B>(board: &B) -> Option<UnitType>
where
    B: SpawnOracle + ?Sized,
{
    let mut cheapest: Option<(UnitType, f32)> = None;
    for unit_type in UnitType::STRUCTURES {
        let Some(cost) = board.unit_cost(unit_type) else {
            continue;
        };
        if cheapest.is_none_or(|(_, lowest)| cost.total() < lowest) {
            cheapest = Some((unit_type, cost.total()));
        }
    }
    cheapest.map(|(unit_type, _)| unit_type)
}

/// Walls off row 11 with the cheapest structure and sends a demolisher wave
/// from the right flank.
///
/// # Errors
///
/// Returns [`RuntimeError::NoStructureCatalog`] if the board publishes no
/// structure cost.
pub fn demolisher_line<B>(board: &mut B) -> Result<LineReport>
where
    B: SpawnOracle + ?Sized,
{
    let line_unit = cheapest_structure(board).ok_or(RuntimeError::NoStructureCatalog)?;

    let (from, to) = LINE_X_RANGE;
    let line: Vec<Coordinate> = (from..=to)
        .rev()
        .map(|x| Coordinate::new(x, LINE_ROW))
        .collect();
    let line_built = board.attempt_spawn_multiple(&line, line_unit);

    let mut demolishers = 0;
    while demolishers < DEMOLISHER_WAVE
        && board.attempt_spawn(DEMOLISHER_SPAWN, UnitType::Demolisher)
    {
        demolishers += 1;
    }

    tracing::info!(
        "Demolisher line: {} {} placed, {} demolishers sent",
        line_built,
        line_unit,
        demolishers
    );
    Ok(LineReport {
        line_unit,
        line_built,
        demolishers,
    })
}
