use std::fmt;

/// Discrete grid position expressed in tile coordinates.
///
/// `x` grows to the right, `y` grows away from the bottom player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate shifted by the given deltas, clamped to the `i32` range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Straight-line distance, used for attack-range checks.
    pub fn euclidean_distance(self, other: Self) -> f32 {
        let dx = (i64::from(self.x) - i64::from(other.x)) as f32;
        let dy = (i64::from(self.y) - i64::from(other.y)) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the two seats in a match.
///
/// `Player1` always deploys from the bottom half of the arena; transports are
/// expected to flip coordinates so the acting strategy sees itself there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerId::Player1 => "player1",
            PlayerId::Player2 => "player2",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_toward_opponent_side() {
        let breach = Coordinate::new(3, 4);
        assert_eq!(breach.offset(0, 1), Coordinate::new(3, 5));
    }

    #[test]
    fn offset_clamps_at_the_integer_limits() {
        let far = Coordinate::new(i32::MIN, i32::MAX);
        assert_eq!(far.offset(-1, 1), far);
        assert_eq!(far.offset(1, -1), Coordinate::new(i32::MIN + 1, i32::MAX - 1));
    }

    #[test]
    fn distance_across_the_whole_range_is_finite() {
        let low = Coordinate::new(i32::MIN, 0);
        let high = Coordinate::new(i32::MAX, 0);
        assert!(low.euclidean_distance(high).is_finite());
        assert!(low.euclidean_distance(high) > 4.0e9);
    }

    #[test]
    fn coordinates_compare_by_value() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        assert!(seen.insert(Coordinate::new(1, 2)));
        assert!(!seen.insert(Coordinate::from((1, 2))));
    }

    #[test]
    fn opponent_is_involution() {
        assert_eq!(PlayerId::Player1.opponent(), PlayerId::Player2);
        assert_eq!(PlayerId::Player2.opponent().opponent(), PlayerId::Player2);
    }
}
