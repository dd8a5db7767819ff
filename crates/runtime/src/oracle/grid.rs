//! In-memory reference board served through the `siege-core` oracle traits.
//!
//! The real board lives in the game-state service. This implementation keeps
//! just enough of the rules (arena halves, friendly edges, occupancy, budgets,
//! turret range) to drive the strategy offline and in tests. The acting player
//! is always [`PlayerId::Player1`]; opponent structures are placed directly.
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::sync::Arc;

use siege_core::{
    BoardOracle, Coordinate, Cost, Edge, MapBounds, PlayerId, SpawnOracle, SpawnRejection,
    ThreatOracle, UnitCategory, UnitType, UnitView,
};

use super::catalog::UnitCatalog;

const NEIGHBORS: [(i32, i32); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

/// Unspent structure and mobile points of the acting player.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Resources {
    pub structure_points: f32,
    pub mobile_points: f32,
}

impl Resources {
    pub const fn new(structure_points: f32, mobile_points: f32) -> Self {
        Self {
            structure_points,
            mobile_points,
        }
    }

    /// Whole units of `cost` this budget covers. Free units are unbounded.
    pub fn affordable(&self, cost: Cost) -> u32 {
        let mut count = u32::MAX;
        if cost.structure_points > 0.0 {
            count = count.min((self.structure_points / cost.structure_points).floor() as u32);
        }
        if cost.mobile_points > 0.0 {
            count = count.min((self.mobile_points / cost.mobile_points).floor() as u32);
        }
        count
    }

    fn spend(&mut self, cost: Cost) {
        self.structure_points -= cost.structure_points;
        self.mobile_points -= cost.mobile_points;
    }

    fn add(&mut self, income: Resources) {
        self.structure_points += income.structure_points;
        self.mobile_points += income.mobile_points;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Structure {
    unit_type: UnitType,
    owner: PlayerId,
    upgraded: bool,
}

/// Reference board state for one match.
#[derive(Clone, Debug)]
pub struct GridBoard {
    catalog: Arc<UnitCatalog>,
    turn: u32,
    resources: Resources,
    structures: BTreeMap<Coordinate, Structure>,
    deployed: Vec<(UnitType, Coordinate)>,
}

impl GridBoard {
    pub fn new(catalog: Arc<UnitCatalog>) -> Self {
        Self {
            catalog,
            turn: 0,
            resources: Resources::default(),
            structures: BTreeMap::new(),
            deployed: Vec::new(),
        }
    }

    /// Board with the standard catalog and the given starting budget.
    pub fn standard(resources: Resources) -> Self {
        Self::new(Arc::new(UnitCatalog::standard())).with_resources(resources)
    }

    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = resources;
        self
    }

    /// Places a structure without any legality or budget check.
    ///
    /// Used to set up opponent defenses and fixtures.
    pub fn with_structure(
        mut self,
        owner: PlayerId,
        unit_type: UnitType,
        location: Coordinate,
    ) -> Self {
        self.place_structure(owner, unit_type, location);
        self
    }

    pub fn place_structure(&mut self, owner: PlayerId, unit_type: UnitType, location: Coordinate) {
        self.structures.insert(
            location,
            Structure {
                unit_type,
                owner,
                upgraded: false,
            },
        );
    }

    pub fn resources(&self) -> Resources {
        self.resources
    }

    /// Mobile units deployed by the acting player this turn.
    pub fn deployed(&self) -> &[(UnitType, Coordinate)] {
        &self.deployed
    }

    pub fn structure_at(&self, location: Coordinate) -> Option<(UnitType, PlayerId, bool)> {
        self.structures
            .get(&location)
            .map(|s| (s.unit_type, s.owner, s.upgraded))
    }

    /// Advances to the next turn: deployed walkers leave the board and income accrues.
    pub fn end_turn(&mut self, income: Resources) {
        self.deployed.clear();
        self.resources.add(income);
        self.turn += 1;
    }

    fn cost_of(&self, unit_type: UnitType) -> Cost {
        self.catalog
            .get(unit_type)
            .map(|stats| stats.cost)
            .unwrap_or_default()
    }

    fn upgrade_cost_of(&self, unit_type: UnitType) -> Cost {
        self.catalog
            .get(unit_type)
            .and_then(|stats| stats.upgrade_cost)
            .unwrap_or_default()
    }

    fn own_structure(&self, location: Coordinate) -> Option<&Structure> {
        self.structures
            .get(&location)
            .filter(|structure| structure.owner == PlayerId::Player1)
    }

    fn check_budget(&self, unit_type: UnitType, cost: Cost, count: u32) -> Result<(), SpawnRejection> {
        let affordable = self.resources.affordable(cost);
        if affordable < count {
            return Err(SpawnRejection::InsufficientResources {
                unit_type,
                requested: count,
                affordable,
            });
        }
        Ok(())
    }

    fn is_passable(&self, location: Coordinate) -> bool {
        MapBounds::in_arena(location) && !self.structures.contains_key(&location)
    }
}

impl SpawnOracle for GridBoard {
    fn can_spawn(
        &self,
        location: Coordinate,
        unit_type: UnitType,
        count: u32,
    ) -> Result<(), SpawnRejection> {
        if count == 0 {
            return Err(SpawnRejection::InvalidCount(count));
        }
        if !MapBounds::in_arena(location) {
            return Err(SpawnRejection::OutOfArena(location));
        }

        match unit_type.category() {
            UnitCategory::Modifier => {
                let structure = self
                    .own_structure(location)
                    .ok_or(SpawnRejection::NoStructure(location))?;
                if unit_type == UnitType::Upgrade {
                    if structure.upgraded {
                        return Err(SpawnRejection::AlreadyUpgraded(location));
                    }
                    self.check_budget(unit_type, self.upgrade_cost_of(structure.unit_type), count)?;
                }
                Ok(())
            }
            UnitCategory::Structure => {
                if !MapBounds::in_bottom_half(location) {
                    return Err(SpawnRejection::WrongSide(location));
                }
                if self.structures.contains_key(&location) {
                    return Err(SpawnRejection::Occupied(location));
                }
                self.check_budget(unit_type, self.cost_of(unit_type), count)
            }
            UnitCategory::Mobile => {
                if !MapBounds::in_bottom_half(location) {
                    return Err(SpawnRejection::WrongSide(location));
                }
                if !Edge::FRIENDLY
                    .iter()
                    .any(|&edge| MapBounds::is_on_edge(location, edge))
                {
                    return Err(SpawnRejection::NotOnEdge(location));
                }
                if self.structures.contains_key(&location) {
                    return Err(SpawnRejection::Occupied(location));
                }
                self.check_budget(unit_type, self.cost_of(unit_type), count)
            }
        }
    }

    fn spawn(&mut self, location: Coordinate, unit_type: UnitType) -> Result<(), SpawnRejection> {
        self.can_spawn(location, unit_type, 1)?;

        match unit_type.category() {
            UnitCategory::Modifier => {
                if unit_type == UnitType::Upgrade {
                    self.attempt_upgrade(location);
                } else {
                    self.remove_structure(location);
                }
            }
            UnitCategory::Structure => {
                self.resources.spend(self.cost_of(unit_type));
                self.place_structure(PlayerId::Player1, unit_type, location);
            }
            UnitCategory::Mobile => {
                self.resources.spend(self.cost_of(unit_type));
                self.deployed.push((unit_type, location));
            }
        }
        Ok(())
    }

    fn attempt_upgrade(&mut self, location: Coordinate) -> bool {
        if self.can_spawn(location, UnitType::Upgrade, 1).is_err() {
            return false;
        }
        let Some(unit_type) = self.own_structure(location).map(|s| s.unit_type) else {
            return false;
        };
        let cost = self.upgrade_cost_of(unit_type);
        self.resources.spend(cost);
        if let Some(structure) = self.structures.get_mut(&location) {
            structure.upgraded = true;
        }
        true
    }

    fn remove_structure(&mut self, location: Coordinate) -> bool {
        if self.own_structure(location).is_none() {
            return false;
        }
        self.structures.remove(&location).is_some()
    }

    fn number_affordable(&self, unit_type: UnitType) -> u32 {
        match unit_type.category() {
            // Priced per target structure; the legality query decides.
            UnitCategory::Modifier => u32::MAX,
            _ => self.resources.affordable(self.cost_of(unit_type)),
        }
    }

    fn structure_locations(&self, owner: PlayerId) -> Vec<Coordinate> {
        self.structures
            .iter()
            .filter(|(_, structure)| structure.owner == owner)
            .map(|(&location, _)| location)
            .collect()
    }

    fn unit_cost(&self, unit_type: UnitType) -> Option<Cost> {
        self.catalog.get(unit_type).map(|stats| stats.cost)
    }

    fn turn_number(&self) -> u32 {
        self.turn
    }
}

impl ThreatOracle for GridBoard {
    fn pathfind(&self, start: Coordinate, target: Edge) -> Vec<Coordinate> {
        if !self.is_passable(start) {
            return vec![start];
        }

        let goal: HashSet<Coordinate> = MapBounds::edge(target).into_iter().collect();
        let mut came_from: HashMap<Coordinate, Coordinate> = HashMap::from([(start, start)]);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if goal.contains(&current) {
                let mut path = vec![current];
                let mut node = current;
                while node != start {
                    node = came_from[&node];
                    path.push(node);
                }
                path.reverse();
                return path;
            }

            for (dx, dy) in NEIGHBORS {
                let next = current.offset(dx, dy);
                if self.is_passable(next) && !came_from.contains_key(&next) {
                    came_from.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        // No route to the edge: the walker stays where it was deployed.
        vec![start]
    }

    fn attackers(&self, location: Coordinate) -> Vec<UnitView> {
        self.structures
            .iter()
            .filter(|(_, structure)| structure.owner == PlayerId::Player2)
            .filter_map(|(&at, structure)| {
                let stats = self.catalog.get(structure.unit_type)?;
                let damage = stats.walker_damage?;
                (at.euclidean_distance(location) <= stats.attack_range).then(|| UnitView {
                    unit_type: structure.unit_type,
                    owner: structure.owner,
                    location: at,
                    walker_damage: Some(damage),
                    upgraded: structure.upgraded,
                })
            })
            .collect()
    }

    fn units_at(&self, location: Coordinate) -> Vec<UnitView> {
        let structure = self.structures.get(&location).map(|structure| UnitView {
            unit_type: structure.unit_type,
            owner: structure.owner,
            location,
            walker_damage: self
                .catalog
                .get(structure.unit_type)
                .and_then(|stats| stats.walker_damage),
            upgraded: structure.upgraded,
        });
        let walkers = self
            .deployed
            .iter()
            .filter(|(_, at)| *at == location)
            .map(|&(unit_type, at)| UnitView {
                unit_type,
                owner: PlayerId::Player1,
                location: at,
                walker_damage: self.catalog.get(unit_type).and_then(|s| s.walker_damage),
                upgraded: false,
            });
        structure.into_iter().chain(walkers).collect()
    }
}

impl BoardOracle for GridBoard {
    fn snapshot(&self) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> GridBoard {
        GridBoard::standard(Resources::new(10.0, 5.0))
    }

    #[test]
    fn structures_only_on_own_half() {
        let board = board();
        assert_eq!(board.can_spawn(Coordinate::new(13, 5), UnitType::Wall, 1), Ok(()));
        assert_eq!(
            board.can_spawn(Coordinate::new(13, 20), UnitType::Wall, 1),
            Err(SpawnRejection::WrongSide(Coordinate::new(13, 20)))
        );
        assert_eq!(
            board.can_spawn(Coordinate::new(0, 0), UnitType::Wall, 1),
            Err(SpawnRejection::OutOfArena(Coordinate::new(0, 0)))
        );
    }

    #[test]
    fn mobiles_only_on_friendly_edges() {
        let board = board();
        assert_eq!(board.can_spawn(Coordinate::new(13, 0), UnitType::Scout, 5), Ok(()));
        assert_eq!(
            board.can_spawn(Coordinate::new(13, 5), UnitType::Scout, 1),
            Err(SpawnRejection::NotOnEdge(Coordinate::new(13, 5)))
        );
        assert!(matches!(
            board.can_spawn(Coordinate::new(13, 0), UnitType::Scout, 6),
            Err(SpawnRejection::InsufficientResources { affordable: 5, .. })
        ));
    }

    #[test]
    fn spawn_spends_budget_and_occupies_tile() {
        let mut board = board();
        let tile = Coordinate::new(13, 5);
        board.spawn(tile, UnitType::Turret).unwrap();

        assert_eq!(board.resources().structure_points, 8.0);
        assert_eq!(
            board.can_spawn(tile, UnitType::Wall, 1),
            Err(SpawnRejection::Occupied(tile))
        );
        assert_eq!(board.structure_locations(PlayerId::Player1), vec![tile]);
    }

    #[test]
    fn upgrade_and_remove_need_own_structure() {
        let enemy_tile = Coordinate::new(13, 5);
        let mut board = board().with_structure(PlayerId::Player2, UnitType::Wall, enemy_tile);

        assert!(!board.attempt_upgrade(enemy_tile));
        assert!(!board.remove_structure(enemy_tile));

        let tile = Coordinate::new(10, 10);
        board.spawn(tile, UnitType::Wall).unwrap();
        assert!(board.attempt_upgrade(tile));
        assert_eq!(
            board.can_spawn(tile, UnitType::Upgrade, 1),
            Err(SpawnRejection::AlreadyUpgraded(tile))
        );
        assert!(board.remove_structure(tile));
        assert!(board.structure_at(tile).is_none());
    }

    #[test]
    fn snapshot_is_independent() {
        let live = board();
        let mut scratch = live.snapshot();
        scratch.spawn(Coordinate::new(13, 5), UnitType::Wall).unwrap();

        assert!(live.structure_locations(PlayerId::Player1).is_empty());
        assert_eq!(live.resources(), Resources::new(10.0, 5.0));
    }

    #[test]
    fn path_reaches_target_edge() {
        let board = board();
        let start = Coordinate::new(13, 0);
        let path = board.pathfind(start, Edge::TopRight);

        assert_eq!(path.first(), Some(&start));
        let end = *path.last().unwrap();
        assert!(MapBounds::is_on_edge(end, Edge::TopRight));
        for step in path.windows(2) {
            let (a, b) = (step[0], step[1]);
            assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
        }
    }

    #[test]
    fn attackers_are_enemy_turrets_in_range() {
        let board = board()
            .with_structure(PlayerId::Player2, UnitType::Turret, Coordinate::new(13, 15))
            .with_structure(PlayerId::Player2, UnitType::Wall, Coordinate::new(14, 15))
            .with_structure(PlayerId::Player1, UnitType::Turret, Coordinate::new(13, 12));

        let attackers = board.attackers(Coordinate::new(13, 14));
        assert_eq!(attackers.len(), 1);
        assert_eq!(attackers[0].unit_type, UnitType::Turret);
        assert_eq!(attackers[0].owner, PlayerId::Player2);
        assert!(board.attackers(Coordinate::new(13, 2)).is_empty());
    }

    #[test]
    fn free_units_are_unbounded() {
        assert_eq!(Resources::new(0.0, 0.0).affordable(Cost::default()), u32::MAX);
        assert_eq!(Resources::new(3.5, 0.0).affordable(Cost::new(1.0, 0.0)), 3);
    }
}
