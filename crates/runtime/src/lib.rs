//! Turn-by-turn decision engine for the siege arena.
//!
//! This crate turns a board, reached only through the `siege-core` oracle
//! traits, into a sequence of legal placements each turn. Drivers embed a
//! [`StrategySession`] per match, feed it action-frame events through
//! [`StrategySession::on_action_frame`] and ask it to act with
//! [`StrategySession::on_turn`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the session, its builder and configuration
//! - [`api`] exposes the error types and the driver-facing trait
//! - [`strategy`] holds the decision components
//! - [`oracle`] provides an in-memory reference board for offline runs
pub mod api;
pub mod oracle;
pub mod runtime;
pub mod strategy;

pub use api::{PlanSlot, Result, RuntimeError, TurnStrategy};
pub use oracle::{GridBoard, Resources, UnitCatalog, UnitStats};
pub use runtime::{
    OffenseMode, OffenseReport, RuntimeConfig, StrategySession, StrategySessionBuilder,
    TurnReport,
};
pub use strategy::{
    ActionGenerator, DeployReport, DeployStop, Generation, ReactiveMemory, RiskEvaluator,
    TurnPlan, TurnPlanner, UnitQuery,
};
