use strum::IntoEnumIterator;

/// Placeable kinds plus the two pseudo-types that act on existing structures.
///
/// The partitions returned by [`UnitType::MOBILE`], [`UnitType::STRUCTURES`]
/// and [`UnitType::STRUCTURE_ACTIONS`] are fixed for the life of a match.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitType {
    Scout,
    Demolisher,
    Interceptor,
    Wall,
    Support,
    Turret,
    Upgrade,
    Remove,
}

/// Which side of the mobile/structure split a unit type falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitCategory {
    /// Deployed on edge tiles, walks toward the opposing edge, then despawns.
    Mobile,
    /// Deployed on interior tiles and persists until destroyed or removed.
    Structure,
    /// Acts on an existing structure instead of creating a unit.
    Modifier,
}

/// Shorthand string from the transport that names no known unit type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit type shorthand '{0}'")]
pub struct UnknownUnitType(pub String);

impl crate::error::GameError for UnknownUnitType {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "UNKNOWN_UNIT_TYPE"
    }
}

impl UnitType {
    /// Mobile unit types, deployed on this player's edge tiles.
    pub const MOBILE: [UnitType; 3] = [Self::Scout, Self::Demolisher, Self::Interceptor];

    /// Structure unit types, deployed on interior tiles.
    pub const STRUCTURES: [UnitType; 3] = [Self::Wall, Self::Support, Self::Turret];

    /// Everything the structure half of a turn may do: build, upgrade, remove.
    pub const STRUCTURE_ACTIONS: [UnitType; 5] = [
        Self::Wall,
        Self::Support,
        Self::Turret,
        Self::Upgrade,
        Self::Remove,
    ];

    pub const fn category(self) -> UnitCategory {
        match self {
            Self::Scout | Self::Demolisher | Self::Interceptor => UnitCategory::Mobile,
            Self::Wall | Self::Support | Self::Turret => UnitCategory::Structure,
            Self::Upgrade | Self::Remove => UnitCategory::Modifier,
        }
    }

    #[inline]
    pub const fn is_mobile(self) -> bool {
        matches!(self.category(), UnitCategory::Mobile)
    }

    #[inline]
    pub const fn is_structure(self) -> bool {
        matches!(self.category(), UnitCategory::Structure)
    }

    /// Upgrade and Remove target an existing structure rather than a free tile.
    #[inline]
    pub const fn targets_existing_structure(self) -> bool {
        matches!(self.category(), UnitCategory::Modifier)
    }

    /// Two-letter code used by the game transport.
    pub const fn shorthand(self) -> &'static str {
        match self {
            Self::Wall => "FF",
            Self::Support => "EF",
            Self::Turret => "DF",
            Self::Scout => "PI",
            Self::Demolisher => "EI",
            Self::Interceptor => "SI",
            Self::Upgrade => "UP",
            Self::Remove => "RM",
        }
    }

    /// Parses a transport shorthand.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownUnitType`] when no unit type uses `code`.
    pub fn from_shorthand(code: &str) -> Result<Self, UnknownUnitType> {
        Self::iter()
            .find(|unit| unit.shorthand().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| UnknownUnitType(code.to_owned()))
    }
}
