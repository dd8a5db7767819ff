//! Unit counting over arbitrary board regions.
use siege_core::{Coordinate, GameConfig, MapBounds, PlayerId, ThreatOracle, UnitType};

/// Filter for [`count_units`]. Empty `xs`/`ys` mean every column/row, empty
/// `unit_types` means every placeable type, and `owner: None` counts both players.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitQuery {
    pub xs: Vec<i32>,
    pub ys: Vec<i32>,
    pub unit_types: Vec<UnitType>,
    pub owner: Option<PlayerId>,
}

impl UnitQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, ys: impl IntoIterator<Item = i32>) -> Self {
        self.ys = ys.into_iter().collect();
        self
    }

    pub fn columns(mut self, xs: impl IntoIterator<Item = i32>) -> Self {
        self.xs = xs.into_iter().collect();
        self
    }

    pub fn unit_types(mut self, unit_types: impl IntoIterator<Item = UnitType>) -> Self {
        self.unit_types = unit_types.into_iter().collect();
        self
    }

    pub fn owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    fn matches(&self, unit_type: UnitType, owner: PlayerId) -> bool {
        let type_ok = if self.unit_types.is_empty() {
            !unit_type.targets_existing_structure()
        } else {
            self.unit_types.contains(&unit_type)
        };
        type_ok && self.owner.is_none_or(|wanted| wanted == owner)
    }
}

/// Counts the units standing on the queried tiles. Tiles outside the arena
/// are skipped.
pub fn count_units<B>(board: &B, query: &UnitQuery) -> usize
where
    B: ThreatOracle + ?Sized,
{
    let all: Vec<i32> = (0..GameConfig::ARENA_SIZE).collect();
    let xs = if query.xs.is_empty() { &all } else { &query.xs };
    let ys = if query.ys.is_empty() { &all } else { &query.ys };

    let mut total = 0;
    for &x in xs {
        for &y in ys {
            let location = Coordinate::new(x, y);
            if !MapBounds::in_arena(location) {
                continue;
            }
            total += board
                .units_at(location)
                .iter()
                .filter(|unit| query.matches(unit.unit_type, unit.owner))
                .count();
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{GridBoard, Resources};

    fn board() -> GridBoard {
        GridBoard::standard(Resources::default())
            .with_structure(PlayerId::Player2, UnitType::Turret, Coordinate::new(13, 14))
            .with_structure(PlayerId::Player2, UnitType::Wall, Coordinate::new(14, 15))
            .with_structure(PlayerId::Player2, UnitType::Wall, Coordinate::new(14, 20))
            .with_structure(PlayerId::Player1, UnitType::Wall, Coordinate::new(13, 13))
    }

    #[test]
    fn default_query_counts_everything() {
        assert_eq!(count_units(&board(), &UnitQuery::new()), 4);
    }

    #[test]
    fn front_rows_by_owner() {
        let query = UnitQuery::new().rows([14, 15]).owner(PlayerId::Player2);
        assert_eq!(count_units(&board(), &query), 2);
    }

    #[test]
    fn type_filter() {
        let query = UnitQuery::new().unit_types([UnitType::Turret]);
        assert_eq!(count_units(&board(), &query), 1);
    }

    #[test]
    fn off_arena_tiles_are_ignored() {
        let query = UnitQuery::new().columns([-1, 40]).rows([14]);
        assert_eq!(count_units(&board(), &query), 0);
    }
}
