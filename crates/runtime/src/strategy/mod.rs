//! Decision components driven by [`crate::StrategySession`].
//!
//! Each module covers one concern and talks to the board only through the
//! `siege-core` oracle traits:
//!
//! - [`generator`] samples legal actions with a bounded retry budget
//! - [`risk`] scores edge tiles by the damage a walker would take
//! - [`memory`] remembers where the opponent broke through
//! - [`planner`] pairs a structure and a mobile action on a scratch board
//! - [`deploy`] spends what is left of the budget
//! - [`defenses`] and [`census`] carry the fixed build orders and unit counts
pub mod census;
pub mod defenses;
pub mod deploy;
pub mod generator;
pub mod memory;
pub mod planner;
pub mod risk;

pub use census::{UnitQuery, count_units};
pub use defenses::{DefenseReport, LineReport, build_static_defenses, demolisher_line};
pub use deploy::{DeployReport, DeployStop, deploy_least_damage, deploy_random};
pub use generator::{ActionGenerator, Generation};
pub use memory::ReactiveMemory;
pub use planner::{TurnPlan, TurnPlanner};
pub use risk::RiskEvaluator;
