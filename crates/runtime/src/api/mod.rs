//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the strategy modules can stay focused on decisions.

pub mod errors;
pub mod providers;

pub use errors::{PlanSlot, Result, RuntimeError};
pub use providers::TurnStrategy;
