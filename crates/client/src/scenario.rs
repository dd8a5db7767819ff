//! Scripted opponent used by the offline simulation.
use siege_core::{Coordinate, FrameEvents, PlayerId, UnitType};
use siege_runtime::GridBoard;

/// Turrets the opponent starts the match with.
const OPPONENT_TURRETS: [Coordinate; 4] = [
    Coordinate::new(4, 16),
    Coordinate::new(23, 16),
    Coordinate::new(13, 17),
    Coordinate::new(14, 17),
];

/// Tiles the opponent scores on, cycled turn by turn.
const BREACH_CYCLE: [Coordinate; 3] = [
    Coordinate::new(3, 10),
    Coordinate::new(24, 10),
    Coordinate::new(13, 0),
];

/// Deterministic opponent: a fixed defense and a breach every other turn.
pub struct ScriptedOpponent {
    player: PlayerId,
}

impl ScriptedOpponent {
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }

    pub fn fortify(&self, board: &mut GridBoard) {
        for location in OPPONENT_TURRETS {
            board.place_structure(self.player, UnitType::Turret, location);
        }
    }

    /// Action frames for `turn`. Our own scouts score on the first frame of
    /// every turn; the opponent scores on even turns.
    pub fn frames(&self, turn: u32) -> Vec<FrameEvents> {
        let ours = FrameEvents::new().with_breach(Coordinate::new(14, 27), self.player.opponent());

        let theirs = if turn % 2 == 0 {
            let location = BREACH_CYCLE[(turn as usize / 2) % BREACH_CYCLE.len()];
            FrameEvents::new().with_breach(location, self.player)
        } else {
            FrameEvents::new()
        };

        vec![ours, theirs]
    }
}
