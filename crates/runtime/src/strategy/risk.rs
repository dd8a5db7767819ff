//! Path-exposure scoring for deployment locations.

use siege_core::{Coordinate, MapBounds, ThreatOracle};

use crate::api::{Result, RuntimeError};

/// Estimates the damage a walker would soak on its way across the arena.
pub struct RiskEvaluator;

impl RiskEvaluator {
    /// Damage a speed-1 walker deployed at `location` takes along its path.
    ///
    /// Sums, over every tile of the path to the target edge, the walker
    /// damage of every attacker covering that tile. Attackers without a
    /// walker-damage value contribute nothing.
    pub fn path_damage<B>(board: &B, location: Coordinate) -> f32
    where
        B: ThreatOracle + ?Sized,
    {
        let path = board.pathfind(location, MapBounds::target_edge(location));
        path.iter()
            .flat_map(|&tile| board.attackers(tile))
            .map(|attacker| attacker.walker_damage.unwrap_or(0.0))
            .sum()
    }

    /// Picks the candidate with the smallest [`Self::path_damage`].
    ///
    /// Ties resolve to the earliest candidate in `candidates`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::EmptyCandidates`] if `candidates` is empty.
    pub fn least_damage_location<B>(board: &B, candidates: &[Coordinate]) -> Result<Coordinate>
    where
        B: ThreatOracle + ?Sized,
    {
        let mut best: Option<(Coordinate, f32)> = None;

        for &location in candidates {
            let damage = Self::path_damage(board, location);
            tracing::debug!("Got dmg: {} for {}", damage, location);

            // Strict comparison keeps the first of equal candidates
            if best.is_none_or(|(_, lowest)| damage < lowest) {
                best = Some((location, damage));
            }
        }

        best.map(|(location, _)| location)
            .ok_or(RuntimeError::EmptyCandidates)
    }
}

#[cfg(test)]
mod tests {
    use siege_core::{PlayerId, UnitType};

    use super::*;
    use crate::oracle::{GridBoard, Resources};

    #[test]
    fn open_board_is_harmless() {
        let board = GridBoard::standard(Resources::default());
        assert_eq!(RiskEvaluator::path_damage(&board, Coordinate::new(13, 0)), 0.0);
    }

    #[test]
    fn avoids_the_turret_covered_tile() {
        let board = GridBoard::standard(Resources::default()).with_structure(
            PlayerId::Player2,
            UnitType::Turret,
            Coordinate::new(12, 2),
        );
        let covered = Coordinate::new(13, 0);
        let clear = Coordinate::new(24, 10);

        assert!(RiskEvaluator::path_damage(&board, covered) >= 5.0);
        assert_eq!(RiskEvaluator::path_damage(&board, clear), 0.0);
        assert_eq!(
            RiskEvaluator::least_damage_location(&board, &[covered, clear]),
            Ok(clear)
        );
    }

    #[test]
    fn equal_damage_keeps_input_order() {
        let board = GridBoard::standard(Resources::default());
        let candidates = [Coordinate::new(20, 6), Coordinate::new(13, 0)];
        assert_eq!(
            RiskEvaluator::least_damage_location(&board, &candidates),
            Ok(candidates[0])
        );
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let board = GridBoard::standard(Resources::default());
        assert_eq!(
            RiskEvaluator::least_damage_location(&board, &[]),
            Err(RuntimeError::EmptyCandidates)
        );
    }
}
