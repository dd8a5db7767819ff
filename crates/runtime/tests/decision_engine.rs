use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use siege_core::{
    BoardOracle, Coordinate, Edge, FrameEvents, MapBounds, PlayerId, SpawnOracle, SpawnRejection,
    ThreatOracle, UnitType, UnitView,
};
use siege_runtime::strategy::{DeployStop, deploy_random};
use siege_runtime::{
    ActionGenerator, Generation, PlanSlot, ReactiveMemory, RiskEvaluator, TurnPlanner,
};

/// Board double with hand-picked legality, budget and per-tile damage.
#[derive(Clone, Default)]
struct ScriptedBoard {
    /// (type, tile) pairs that pass the legality query.
    legal: HashSet<(UnitType, Coordinate)>,
    /// Types legal on every tile of their pool.
    legal_everywhere: HashSet<UnitType>,
    owned: Vec<Coordinate>,
    affordable: HashMap<UnitType, u32>,
    /// Walker damage of the single attacker covering a start tile.
    damage: HashMap<Coordinate, f32>,
    /// Spawns report failure while still charging nothing.
    jammed: bool,
    queries: Cell<u32>,
    spawned: Vec<(UnitType, Coordinate)>,
}

impl ScriptedBoard {
    fn allow(mut self, unit_type: UnitType, location: Coordinate) -> Self {
        self.legal.insert((unit_type, location));
        self
    }

    fn allow_everywhere(mut self, unit_type: UnitType) -> Self {
        self.legal_everywhere.insert(unit_type);
        self
    }

    fn budget(mut self, unit_type: UnitType, count: u32) -> Self {
        self.affordable.insert(unit_type, count);
        self
    }

    fn damage(mut self, location: Coordinate, damage: f32) -> Self {
        self.damage.insert(location, damage);
        self
    }
}

impl SpawnOracle for ScriptedBoard {
    fn can_spawn(
        &self,
        location: Coordinate,
        unit_type: UnitType,
        _count: u32,
    ) -> Result<(), SpawnRejection> {
        self.queries.set(self.queries.get() + 1);
        if self.legal_everywhere.contains(&unit_type) || self.legal.contains(&(unit_type, location))
        {
            Ok(())
        } else {
            Err(SpawnRejection::Occupied(location))
        }
    }

    fn spawn(&mut self, location: Coordinate, unit_type: UnitType) -> Result<(), SpawnRejection> {
        if self.jammed {
            return Err(SpawnRejection::Occupied(location));
        }
        self.can_spawn(location, unit_type, 1)?;
        if let Some(left) = self.affordable.get_mut(&unit_type) {
            *left = left.saturating_sub(1);
        }
        if unit_type.is_structure() {
            // The tile is taken for everything else from now on.
            self.legal.retain(|&(_, at)| at != location);
        }
        self.spawned.push((unit_type, location));
        Ok(())
    }

    fn attempt_upgrade(&mut self, _location: Coordinate) -> bool {
        false
    }

    fn remove_structure(&mut self, _location: Coordinate) -> bool {
        false
    }

    fn number_affordable(&self, unit_type: UnitType) -> u32 {
        self.affordable.get(&unit_type).copied().unwrap_or(0)
    }

    fn structure_locations(&self, _owner: PlayerId) -> Vec<Coordinate> {
        self.owned.clone()
    }
}

impl ThreatOracle for ScriptedBoard {
    fn pathfind(&self, start: Coordinate, _target: Edge) -> Vec<Coordinate> {
        vec![start]
    }

    fn attackers(&self, location: Coordinate) -> Vec<UnitView> {
        self.damage
            .get(&location)
            .map(|&damage| UnitView {
                unit_type: UnitType::Turret,
                owner: PlayerId::Player2,
                location,
                walker_damage: Some(damage),
                upgraded: false,
            })
            .into_iter()
            .collect()
    }
}

impl BoardOracle for ScriptedBoard {
    fn snapshot(&self) -> Self {
        self.clone()
    }
}

#[test]
fn single_legal_tile_is_found_within_the_bound() {
    let tile = Coordinate::new(13, 5);
    let board = ScriptedBoard::default().allow(UnitType::Wall, tile);
    let generator = ActionGenerator::new(PlayerId::Player1, 16);

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match generator.structure_action(&board, &mut rng) {
            Generation::Found(action) => {
                assert_eq!(action.unit_type, UnitType::Wall);
                assert_eq!(action.location, tile);
            }
            other => panic!("seed {}: expected the wall, got {:?}", seed, other),
        }
    }
}

#[test]
fn no_owned_structures_means_no_upgrade_or_remove() {
    let board = ScriptedBoard::default()
        .allow_everywhere(UnitType::Upgrade)
        .allow_everywhere(UnitType::Remove)
        .allow_everywhere(UnitType::Support);
    let generator = ActionGenerator::new(PlayerId::Player1, 64);

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let action = generator
            .structure_action(&board, &mut rng)
            .action()
            .unwrap();
        assert_eq!(action.unit_type, UnitType::Support);
    }
}

#[test]
fn saturated_board_exhausts_with_bounded_queries() {
    let board = ScriptedBoard::default();
    let generator = ActionGenerator::new(PlayerId::Player1, 32);
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let outcome = generator.generate(PlanSlot::Structure, &board, &mut rng);

    let interior = MapBounds::bottom_grid().len() as u32;
    let bound = 32 + 3 * interior;
    match outcome {
        Generation::Exhausted { attempts } => assert!(attempts <= bound),
        other => panic!("expected exhaustion, got {:?}", other),
    }
    assert!(board.queries.get() <= bound);
}

#[test]
fn least_damage_picks_the_first_minimum() {
    let a = Coordinate::new(13, 0);
    let b = Coordinate::new(14, 0);
    let c = Coordinate::new(3, 10);
    let board = ScriptedBoard::default()
        .damage(a, 5.0)
        .damage(b, 2.0)
        .damage(c, 2.0);

    let first = RiskEvaluator::least_damage_location(&board, &[a, b, c]).unwrap();
    let again = RiskEvaluator::least_damage_location(&board, &[a, b, c]).unwrap();

    assert_eq!(first, b);
    assert_eq!(first, again);
}

#[test]
fn missing_walker_damage_counts_as_zero() {
    let a = Coordinate::new(13, 0);
    let b = Coordinate::new(14, 0);
    let board = ScriptedBoard::default().damage(a, 1.0);

    assert_eq!(RiskEvaluator::path_damage(&board, b), 0.0);
    assert_eq!(
        RiskEvaluator::least_damage_location(&board, &[a, b]),
        Ok(b)
    );
}

#[test]
fn memory_tracks_opponent_breaches_only() {
    let mut memory = ReactiveMemory::new(PlayerId::Player1);
    memory.record(
        &FrameEvents::new()
            .with_breach(Coordinate::new(3, 4), PlayerId::Player2)
            .with_breach(Coordinate::new(10, 4), PlayerId::Player2)
            .with_breach(Coordinate::new(5, 5), PlayerId::Player1),
    );

    assert_eq!(
        memory.breaches(),
        &[Coordinate::new(3, 4), Coordinate::new(10, 4)]
    );
    let plan: Vec<Coordinate> = memory.plan_defense().iter().map(|a| a.location).collect();
    assert_eq!(plan, vec![Coordinate::new(3, 5), Coordinate::new(10, 5)]);
}

#[test]
fn deploy_pass_stops_once_unaffordable() {
    let mut board = ScriptedBoard::default()
        .allow_everywhere(UnitType::Interceptor)
        .budget(UnitType::Interceptor, 6);
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let report = deploy_random(
        &mut board,
        UnitType::Interceptor,
        &MapBounds::bottom_edges(),
        &mut rng,
        1_000,
    )
    .unwrap();

    assert_eq!(report.stop, DeployStop::BudgetSpent);
    assert_eq!(report.spawned, 6);
    assert_eq!(board.number_affordable(UnitType::Interceptor), 0);
}

#[test]
fn jammed_deploy_pass_hits_the_cap() {
    let mut board = ScriptedBoard::default().budget(UnitType::Scout, 3);
    board.jammed = true;
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let report = deploy_random(
        &mut board,
        UnitType::Scout,
        &MapBounds::bottom_edges(),
        &mut rng,
        40,
    )
    .unwrap();

    assert_eq!(report.stop, DeployStop::IterationCap);
    assert_eq!(report.attempts, 40);
    assert!(board.spawned.is_empty());
}

#[test]
fn mobile_action_sees_the_planned_structure() {
    let shared = Coordinate::new(13, 0);
    let spare = Coordinate::new(14, 0);
    let board = ScriptedBoard::default()
        .allow(UnitType::Wall, shared)
        .allow(UnitType::Scout, shared)
        .allow(UnitType::Scout, spare);
    let planner = TurnPlanner::new(PlayerId::Player1, 16);

    for seed in 0..32 {
        let plan = planner.plan_turn(&board, &mut ChaCha8Rng::seed_from_u64(seed));

        assert_eq!(plan.actions.len(), 2, "seed {}", seed);
        assert_eq!(plan.actions[0].location, shared);
        assert_eq!(plan.actions[1].unit_type, UnitType::Scout);
        assert_eq!(plan.actions[1].location, spare, "seed {}", seed);
    }
    // The live board never saw the wall.
    assert!(board.spawned.is_empty());
    assert!(board.legal.contains(&(UnitType::Scout, shared)));
}
