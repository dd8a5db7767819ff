//! Seam between a turn-loop driver and the decision engine.
//!
//! Drivers (a socket transport, the offline simulator, test fixtures) call
//! [`TurnStrategy::on_turn`] once per turn and
//! [`TurnStrategy::on_action_frame`] once per sub-turn tick.
use siege_core::{BoardOracle, FrameEvents};

use crate::runtime::TurnReport;

/// A strategy that acts on one board type for the length of a match.
pub trait TurnStrategy<B: BoardOracle> {
    /// Decide and commit this turn's actions on the live `board`.
    fn on_turn(&mut self, board: &mut B) -> TurnReport;

    /// Ingest the events of one action frame.
    fn on_action_frame(&mut self, events: &FrameEvents);
}
