//! Random action generation gated by the board's legality query.

use rand::Rng;
use rand::seq::SliceRandom;
use siege_core::{Action, Coordinate, MapBounds, PlayerId, SpawnOracle, UnitType};

use crate::api::{PlanSlot, Result, RuntimeError};

/// Outcome of one bounded generation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generation {
    /// A candidate the board accepted for a batch of one.
    Found(Action),
    /// Every draw and the fallback sweep were rejected.
    Exhausted { attempts: u32 },
}

impl Generation {
    pub fn action(self) -> Option<Action> {
        match self {
            Generation::Found(action) => Some(action),
            Generation::Exhausted { .. } => None,
        }
    }

    /// Converts an exhausted search for `slot` into [`RuntimeError::NoLegalAction`].
    pub fn into_result(self, slot: PlanSlot) -> Result<Action> {
        match self {
            Generation::Found(action) => Ok(action),
            Generation::Exhausted { attempts } => {
                Err(RuntimeError::NoLegalAction { slot, attempts })
            }
        }
    }
}

/// Samples (unit type, location) pairs until the board accepts one.
///
/// Sampling runs in two phases:
///
/// 1. Up to `max_attempts` uniform draws: a unit type from the slot's
///    partition, then a location from that type's pool.
/// 2. If every draw was rejected, one sweep over all (type, location) pairs
///    in shuffled order.
///
/// The sweep bounds the total work by the pool sizes, so a saturated board
/// yields [`Generation::Exhausted`] instead of spinning, and a board with a
/// single legal candidate still finds it.
#[derive(Clone, Debug)]
pub struct ActionGenerator {
    owner: PlayerId,
    max_attempts: u32,
    interior: Vec<Coordinate>,
    edges: Vec<Coordinate>,
}

impl ActionGenerator {
    pub fn new(owner: PlayerId, max_attempts: u32) -> Self {
        Self {
            owner,
            max_attempts,
            interior: MapBounds::bottom_grid(),
            edges: MapBounds::bottom_edges(),
        }
    }

    pub fn structure_action<B, R>(&self, board: &B, rng: &mut R) -> Generation
    where
        B: SpawnOracle + ?Sized,
        R: Rng + ?Sized,
    {
        self.generate(PlanSlot::Structure, board, rng)
    }

    pub fn mobile_action<B, R>(&self, board: &B, rng: &mut R) -> Generation
    where
        B: SpawnOracle + ?Sized,
        R: Rng + ?Sized,
    {
        self.generate(PlanSlot::Mobile, board, rng)
    }

    pub fn generate<B, R>(&self, slot: PlanSlot, board: &B, rng: &mut R) -> Generation
    where
        B: SpawnOracle + ?Sized,
        R: Rng + ?Sized,
    {
        let unit_types = slot.unit_types();
        let owned = board.structure_locations(self.owner);
        let mut attempts = 0;

        for _ in 0..self.max_attempts {
            attempts += 1;
            let Some(&unit_type) = unit_types.choose(rng) else {
                break;
            };
            let Some(&location) = self.pool(unit_type, &owned).choose(rng) else {
                tracing::trace!("{} pool is empty, resampling", unit_type);
                continue;
            };
            match board.can_spawn(location, unit_type, 1) {
                Ok(()) => {
                    let action = Action::new(unit_type, location);
                    tracing::debug!("Generated {} action {} after {} draws", slot, action, attempts);
                    return Generation::Found(action);
                }
                Err(rejection) => {
                    tracing::trace!("Rejected {} at {}: {}", unit_type, location, rejection);
                }
            }
        }

        tracing::debug!(
            "{} random draws for {} slot rejected, sweeping all candidates",
            attempts,
            slot
        );

        let mut types = unit_types.to_vec();
        types.shuffle(rng);
        for unit_type in types {
            let mut pool = self.pool(unit_type, &owned).to_vec();
            pool.shuffle(rng);
            for location in pool {
                attempts += 1;
                if board.can_spawn(location, unit_type, 1).is_ok() {
                    let action = Action::new(unit_type, location);
                    tracing::debug!("Sweep found {} action {}", slot, action);
                    return Generation::Found(action);
                }
            }
        }

        tracing::warn!(
            "No legal {} action available after {} attempts",
            slot,
            attempts
        );
        Generation::Exhausted { attempts }
    }

    /// Candidate locations for `unit_type`.
    ///
    /// Upgrade and Remove draw from the tiles this player's structures occupy;
    /// other structures from the interior half, mobiles from the friendly edges.
    fn pool<'a>(&'a self, unit_type: UnitType, owned: &'a [Coordinate]) -> &'a [Coordinate] {
        if unit_type.targets_existing_structure() {
            owned
        } else if unit_type.is_mobile() {
            &self.edges
        } else {
            &self.interior
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::oracle::{GridBoard, Resources};

    #[test]
    fn generated_actions_are_legal_on_the_board_they_were_drawn_for() {
        let generator = ActionGenerator::new(PlayerId::Player1, 64);
        let board = GridBoard::standard(Resources::new(8.0, 3.0))
            .with_structure(PlayerId::Player1, UnitType::Wall, Coordinate::new(10, 10));

        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for slot in [PlanSlot::Structure, PlanSlot::Mobile] {
                let action = generator
                    .generate(slot, &board, &mut rng)
                    .action()
                    .expect("open board always has a legal action");
                assert!(slot.unit_types().contains(&action.unit_type));
                assert_eq!(board.can_spawn(action.location, action.unit_type, 1), Ok(()));
            }
        }
    }

    #[test]
    fn mobile_actions_stay_on_friendly_edges() {
        let generator = ActionGenerator::new(PlayerId::Player1, 16);
        let board = GridBoard::standard(Resources::new(0.0, 10.0));
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let action = generator.mobile_action(&board, &mut rng).action().unwrap();
        assert!(MapBounds::bottom_edges().contains(&action.location));
        assert!(action.unit_type.is_mobile());
    }

    #[test]
    fn broke_player_exhausts_instead_of_looping() {
        let generator = ActionGenerator::new(PlayerId::Player1, 8);
        let board = GridBoard::standard(Resources::new(0.0, 0.0));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let outcome = generator.mobile_action(&board, &mut rng);
        let pool = MapBounds::bottom_edges().len() as u32;
        assert_eq!(
            outcome,
            Generation::Exhausted {
                attempts: 8 + 3 * pool
            }
        );
    }

    #[test]
    fn exhaustion_names_the_slot() {
        let generator = ActionGenerator::new(PlayerId::Player1, 4);
        let board = GridBoard::standard(Resources::new(0.0, 0.0));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = generator
            .mobile_action(&board, &mut rng)
            .into_result(PlanSlot::Mobile);
        assert!(matches!(
            result,
            Err(RuntimeError::NoLegalAction {
                slot: PlanSlot::Mobile,
                ..
            })
        ));
    }

    #[test]
    fn same_seed_same_action() {
        let generator = ActionGenerator::new(PlayerId::Player1, 32);
        let board = GridBoard::standard(Resources::new(8.0, 3.0));

        let first = generator.structure_action(&board, &mut ChaCha8Rng::seed_from_u64(99));
        let second = generator.structure_action(&board, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
