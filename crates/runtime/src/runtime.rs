//! Match-level orchestrator.
//!
//! A [`StrategySession`] is created at match start and dropped at match end.
//! It owns the seeded RNG, the turn planner and the breach memory, and runs
//! the per-turn pipeline against whatever board the driver hands it.
use std::env;
use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use siege_core::{
    Action, ApplyOutcome, BoardOracle, Coordinate, FrameEvents, GameConfig, GameError, MapBounds,
    PlayerId, UnitType,
};

use crate::api::{Result, TurnStrategy};
use crate::strategy::{
    DefenseReport, DeployReport, LineReport, ReactiveMemory, TurnPlan, TurnPlanner, UnitQuery,
    build_static_defenses, count_units, demolisher_line, deploy_least_damage, deploy_random,
};

/// How the end-of-turn budget is spent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OffenseMode {
    /// Uniformly random friendly edge tiles.
    Random,
    /// Everything from the edge tile with the least path exposure.
    LeastDamage,
    /// Stall early, break dense fronts with a demolisher line, otherwise
    /// send scouts down the safer center lane on odd turns.
    Adaptive,
}

impl FromStr for OffenseMode {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "least-damage" | "least_damage" => Ok(Self::LeastDamage),
            "adaptive" => Ok(Self::Adaptive),
            other => Err(format!("unknown offense mode '{}'", other)),
        }
    }
}

impl fmt::Display for OffenseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OffenseMode::Random => "random",
            OffenseMode::LeastDamage => "least-damage",
            OffenseMode::Adaptive => "adaptive",
        };
        write!(f, "{}", label)
    }
}

/// Session configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Fixed RNG seed. `None` draws one from the OS and logs it.
    pub seed: Option<u64>,
    pub owner: PlayerId,
    /// Mobile type spent by the deployment pass.
    pub deploy_unit: UnitType,
    pub offense: OffenseMode,
    pub static_defenses: bool,
    pub reactive_defenses: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            owner: PlayerId::Player1,
            deploy_unit: UnitType::Interceptor,
            offense: OffenseMode::Random,
            static_defenses: true,
            reactive_defenses: true,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIEGE_SEED` - RNG seed (default: random)
    /// - `SIEGE_MAX_GENERATION_ATTEMPTS` - Draws per generated action (default: 256)
    /// - `SIEGE_MAX_DEPLOY_ITERATIONS` - Spawn attempts per deploy pass (default: 1000)
    /// - `SIEGE_DEPLOY_UNIT` - Shorthand of the deployed mobile type (default: SI)
    /// - `SIEGE_OFFENSE` - `random`, `least-damage` or `adaptive` (default: random)
    /// - `SIEGE_STATIC_DEFENSES` - Build the fixed turret layout (default: true)
    /// - `SIEGE_REACTIVE_DEFENSES` - Turret up breached tiles (default: true)
    ///
    /// Unparseable values are logged and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("SIEGE_SEED") {
            config.seed = Some(seed);
        }
        if let Some(attempts) = read_env::<u32>("SIEGE_MAX_GENERATION_ATTEMPTS") {
            config.game = config.game.with_max_generation_attempts(attempts);
        }
        if let Some(iterations) = read_env::<u32>("SIEGE_MAX_DEPLOY_ITERATIONS") {
            config.game = config.game.with_max_deploy_iterations(iterations);
        }
        if let Ok(code) = env::var("SIEGE_DEPLOY_UNIT") {
            match UnitType::from_shorthand(&code) {
                Ok(unit_type) if unit_type.is_mobile() => config.deploy_unit = unit_type,
                Ok(unit_type) => {
                    tracing::warn!("SIEGE_DEPLOY_UNIT: {} is not a mobile unit", unit_type);
                }
                Err(err) => tracing::warn!("SIEGE_DEPLOY_UNIT: {}", err),
            }
        }
        if let Some(offense) = read_env::<OffenseMode>("SIEGE_OFFENSE") {
            config.offense = offense;
        }
        if let Some(enabled) = read_env_bool("SIEGE_STATIC_DEFENSES") {
            config.static_defenses = enabled;
        }
        if let Some(enabled) = read_env_bool("SIEGE_REACTIVE_DEFENSES") {
            config.reactive_defenses = enabled;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}

fn read_env_bool(key: &str) -> Option<bool> {
    let raw = env::var(key).ok()?;
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!("Ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}

/// What the end-of-turn offense did.
#[derive(Debug, Clone, PartialEq)]
pub enum OffenseReport {
    Deploy(DeployReport),
    Line(LineReport),
    /// Saving resources this turn, or the step failed and was skipped.
    Held,
}

/// Everything one call to [`StrategySession::on_turn`] did.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub turn: u32,
    pub plan: TurnPlan,
    pub outcomes: Vec<(Action, ApplyOutcome)>,
    pub defenses: Option<DefenseReport>,
    pub reactive_turrets: usize,
    pub offense: OffenseReport,
}

impl TurnReport {
    pub fn applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_applied())
            .count()
    }
}

/// Turns before which the adaptive offense only stalls with interceptors.
const ADAPTIVE_STALL_TURNS: u32 = 5;
/// Enemy units on the front rows above which the adaptive offense pushes a line.
const ADAPTIVE_FRONT_THRESHOLD: usize = 10;
const ADAPTIVE_FRONT_ROWS: [i32; 2] = [14, 15];
const ADAPTIVE_SCOUT_TILES: [Coordinate; 2] = [Coordinate::new(13, 0), Coordinate::new(14, 0)];

/// One player's strategy for the length of a match.
pub struct StrategySession {
    config: RuntimeConfig,
    seed: u64,
    rng: ChaCha8Rng,
    planner: TurnPlanner,
    memory: ReactiveMemory,
    edges: Vec<Coordinate>,
}

impl StrategySession {
    pub fn builder() -> StrategySessionBuilder {
        StrategySessionBuilder::new()
    }

    pub fn new(config: RuntimeConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(
            "Starting {} strategy session (seed {}, offense {})",
            config.owner,
            seed,
            config.offense
        );

        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            planner: TurnPlanner::new(config.owner, config.game.max_generation_attempts),
            memory: ReactiveMemory::new(config.owner),
            edges: MapBounds::bottom_edges(),
            config,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Seed actually in use, for replaying a match.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn memory(&self) -> &ReactiveMemory {
        &self.memory
    }

    /// Ingests the events of one action frame.
    pub fn on_action_frame(&mut self, events: &FrameEvents) {
        let stored = self.memory.record(events);
        if stored > 0 {
            tracing::debug!(
                "Recorded {} breaches ({} total)",
                stored,
                self.memory.len()
            );
        }
    }

    /// Plans, commits and reports this turn's actions on `board`.
    pub fn on_turn<B>(&mut self, board: &mut B) -> TurnReport
    where
        B: BoardOracle,
    {
        let turn = board.turn_number();
        tracing::info!("Performing turn {} of the strategy", turn);

        let plan = self.planner.plan_turn(&*board, &mut self.rng);
        let outcomes = TurnPlanner::replay(board, &plan);

        let defenses = self
            .config
            .static_defenses
            .then(|| build_static_defenses(board));
        let reactive_turrets = if self.config.reactive_defenses {
            self.memory.build_reactive_defenses(board)
        } else {
            0
        };

        let offense = self.run_offense(board, turn);

        let report = TurnReport {
            turn,
            plan,
            outcomes,
            defenses,
            reactive_turrets,
            offense,
        };
        tracing::info!(
            "Turn {} done: {} planned actions applied, {} reactive turrets, offense {:?}",
            turn,
            report.applied(),
            report.reactive_turrets,
            report.offense
        );
        report
    }

    fn run_offense<B>(&mut self, board: &mut B, turn: u32) -> OffenseReport
    where
        B: BoardOracle,
    {
        let max_iterations = self.config.game.max_deploy_iterations;
        let unit = self.config.deploy_unit;

        match self.config.offense {
            OffenseMode::Random => Self::deployed(deploy_random(
                board,
                unit,
                &self.edges,
                &mut self.rng,
                max_iterations,
            )),
            OffenseMode::LeastDamage => Self::deployed(deploy_least_damage(
                board,
                unit,
                &self.edges,
                max_iterations,
            )),
            OffenseMode::Adaptive => self.adaptive_offense(board, turn),
        }
    }

    fn deployed(result: Result<DeployReport>) -> OffenseReport {
        match result {
            Ok(report) => OffenseReport::Deploy(report),
            Err(err) => {
                tracing::warn!("Deploy pass skipped [{}]: {}", err.error_code(), err);
                OffenseReport::Held
            }
        }
    }

    fn adaptive_offense<B>(&mut self, board: &mut B, turn: u32) -> OffenseReport
    where
        B: BoardOracle,
    {
        let max_iterations = self.config.game.max_deploy_iterations;

        if turn < ADAPTIVE_STALL_TURNS {
            return Self::deployed(deploy_random(
                board,
                UnitType::Interceptor,
                &self.edges,
                &mut self.rng,
                max_iterations,
            ));
        }

        let front = UnitQuery::new()
            .rows(ADAPTIVE_FRONT_ROWS)
            .owner(self.config.owner.opponent());
        let enemy_front = count_units(&*board, &front);
        if enemy_front > ADAPTIVE_FRONT_THRESHOLD {
            tracing::debug!("{} enemy units on the front, pushing a line", enemy_front);
            return match demolisher_line(board) {
                Ok(report) => OffenseReport::Line(report),
                Err(err) => {
                    tracing::warn!("Demolisher line skipped [{}]: {}", err.error_code(), err);
                    OffenseReport::Held
                }
            };
        }

        if turn % 2 == 1 {
            return Self::deployed(deploy_least_damage(
                board,
                UnitType::Scout,
                &ADAPTIVE_SCOUT_TILES,
                max_iterations,
            ));
        }

        OffenseReport::Held
    }
}

impl<B: BoardOracle> TurnStrategy<B> for StrategySession {
    fn on_turn(&mut self, board: &mut B) -> TurnReport {
        StrategySession::on_turn(self, board)
    }

    fn on_action_frame(&mut self, events: &FrameEvents) {
        StrategySession::on_action_frame(self, events)
    }
}

/// Builder for [`StrategySession`].
pub struct StrategySessionBuilder {
    config: RuntimeConfig,
}

impl StrategySessionBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
        }
    }

    /// Override the whole configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn owner(mut self, owner: PlayerId) -> Self {
        self.config.owner = owner;
        self
    }

    pub fn offense(mut self, offense: OffenseMode) -> Self {
        self.config.offense = offense;
        self
    }

    /// Mobile type spent by the deploy pass. Non-mobile types are ignored.
    pub fn deploy_unit(mut self, unit_type: UnitType) -> Self {
        if unit_type.is_mobile() {
            self.config.deploy_unit = unit_type;
        } else {
            tracing::warn!(
                "{} is not a mobile unit, keeping {}",
                unit_type,
                self.config.deploy_unit
            );
        }
        self
    }

    pub fn static_defenses(mut self, enable: bool) -> Self {
        self.config.static_defenses = enable;
        self
    }

    pub fn reactive_defenses(mut self, enable: bool) -> Self {
        self.config.reactive_defenses = enable;
        self
    }

    pub fn build(self) -> StrategySession {
        StrategySession::new(self.config)
    }
}
