//! Reference implementations of the `siege-core` oracle traits.
//!
//! Production transports wrap the live game-state service instead. These
//! adapters keep the strategy runnable offline (`siege-sim`) and give tests a
//! board with real occupancy, budgets and paths.
mod catalog;
mod grid;

pub use catalog::{UnitCatalog, UnitStats};
pub use grid::{GridBoard, Resources};
