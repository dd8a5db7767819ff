//! Breach history kept for the length of a match.
use siege_core::{Action, Coordinate, FrameEvents, PlayerId, SpawnOracle, UnitType};

/// Append-only record of the tiles where the opponent scored on us.
///
/// Entries are kept in arrival order and never deduplicated, so a tile
/// breached twice is defended twice. Nothing is ever removed.
#[derive(Clone, Debug)]
pub struct ReactiveMemory {
    owner: PlayerId,
    breaches: Vec<Coordinate>,
}

impl ReactiveMemory {
    pub fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            breaches: Vec::new(),
        }
    }

    /// Ingests one action frame and returns how many breaches were stored.
    ///
    /// Breaches scored by `owner` are our own units reaching the far edge and
    /// are ignored.
    pub fn record(&mut self, events: &FrameEvents) -> usize {
        let before = self.breaches.len();
        for breach in &events.breaches {
            if breach.owner == self.owner {
                continue;
            }
            tracing::debug!("Got scored on at: {}", breach.location);
            self.breaches.push(breach.location);
        }
        self.breaches.len() - before
    }

    pub fn breaches(&self) -> &[Coordinate] {
        &self.breaches
    }

    pub fn len(&self) -> usize {
        self.breaches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breaches.is_empty()
    }

    /// One turret per recorded breach, one row above the breached tile.
    pub fn plan_defense(&self) -> Vec<Action> {
        self.breaches
            .iter()
            .map(|location| Action::new(UnitType::Turret, location.offset(0, 1)))
            .collect()
    }

    /// Tries every planned turret once and returns how many were built.
    ///
    /// A turret that cannot be placed (tile taken, budget spent) is skipped.
    pub fn build_reactive_defenses<B>(&self, board: &mut B) -> usize
    where
        B: SpawnOracle + ?Sized,
    {
        let mut built = 0;
        for action in self.plan_defense() {
            match board.spawn(action.location, action.unit_type) {
                Ok(()) => built += 1,
                Err(rejection) => {
                    tracing::debug!("Skipping reactive {}: {}", action, rejection);
                }
            }
        }
        if built > 0 {
            tracing::info!("Built {} of {} reactive turrets", built, self.breaches.len());
        }
        built
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{GridBoard, Resources};

    #[test]
    fn keeps_only_opponent_breaches_in_order() {
        let mut memory = ReactiveMemory::new(PlayerId::Player1);
        let events = FrameEvents::new()
            .with_breach(Coordinate::new(3, 4), PlayerId::Player2)
            .with_breach(Coordinate::new(5, 5), PlayerId::Player1)
            .with_breach(Coordinate::new(10, 4), PlayerId::Player2);

        assert_eq!(memory.record(&events), 2);
        assert_eq!(
            memory.breaches(),
            &[Coordinate::new(3, 4), Coordinate::new(10, 4)]
        );
    }

    #[test]
    fn repeated_breaches_are_not_merged() {
        let mut memory = ReactiveMemory::new(PlayerId::Player1);
        let events = FrameEvents::new().with_breach(Coordinate::new(3, 4), PlayerId::Player2);

        memory.record(&events);
        memory.record(&events);
        memory.record(&FrameEvents::new());

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.plan_defense().len(), 2);
    }

    #[test]
    fn defense_plan_covers_every_breach_one_row_up() {
        let mut memory = ReactiveMemory::new(PlayerId::Player1);
        memory.record(
            &FrameEvents::new()
                .with_breach(Coordinate::new(3, 10), PlayerId::Player2)
                .with_breach(Coordinate::new(24, 10), PlayerId::Player2),
        );

        let plan = memory.plan_defense();
        assert_eq!(
            plan,
            vec![
                Action::new(UnitType::Turret, Coordinate::new(3, 11)),
                Action::new(UnitType::Turret, Coordinate::new(24, 11)),
            ]
        );
        // Planning reads without consuming.
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn reactive_build_skips_what_it_cannot_place() {
        let mut memory = ReactiveMemory::new(PlayerId::Player1);
        memory.record(
            &FrameEvents::new()
                .with_breach(Coordinate::new(3, 10), PlayerId::Player2)
                .with_breach(Coordinate::new(13, 13), PlayerId::Player2)
                .with_breach(Coordinate::new(24, 10), PlayerId::Player2),
        );
        // Budget for exactly one turret; (13, 14) is on the far side anyway.
        let mut board = GridBoard::standard(Resources::new(2.0, 0.0));

        assert_eq!(memory.build_reactive_defenses(&mut board), 1);
        assert_eq!(
            board.structure_at(Coordinate::new(3, 11)),
            Some((UnitType::Turret, PlayerId::Player1, false))
        );
        assert!(board.structure_at(Coordinate::new(24, 11)).is_none());
    }

    #[test]
    fn breach_on_the_last_row_stays_on_it() {
        let mut memory = ReactiveMemory::new(PlayerId::Player1);
        memory.record(
            &FrameEvents::new().with_breach(Coordinate::new(3, i32::MAX), PlayerId::Player2),
        );

        assert_eq!(
            memory.plan_defense(),
            vec![Action::new(UnitType::Turret, Coordinate::new(3, i32::MAX))]
        );
        let mut board = GridBoard::standard(Resources::new(10.0, 0.0));
        assert_eq!(memory.build_reactive_defenses(&mut board), 0);
    }
}
