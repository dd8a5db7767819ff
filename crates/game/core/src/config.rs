/// Arena constants and tunable search limits for a match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Upper bound on rejection-sampling attempts for a single generated action.
    pub max_generation_attempts: u32,
    /// Upper bound on spawn attempts in one resource-exhaustive deployment pass.
    pub max_deploy_iterations: u32,
}

impl GameConfig {
    // ===== arena geometry =====
    /// Width and height of the square board that encloses the diamond arena.
    pub const ARENA_SIZE: i32 = 28;
    /// Rows `0..HALF_ARENA` belong to the bottom player.
    pub const HALF_ARENA: i32 = Self::ARENA_SIZE / 2;
    /// Number of tiles on each of the four diagonal edges.
    pub const EDGE_LENGTH: usize = Self::HALF_ARENA as usize;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_GENERATION_ATTEMPTS: u32 = 256;
    pub const DEFAULT_MAX_DEPLOY_ITERATIONS: u32 = 1_000;

    pub fn new() -> Self {
        Self {
            max_generation_attempts: Self::DEFAULT_MAX_GENERATION_ATTEMPTS,
            max_deploy_iterations: Self::DEFAULT_MAX_DEPLOY_ITERATIONS,
        }
    }

    pub fn with_max_generation_attempts(mut self, attempts: u32) -> Self {
        self.max_generation_attempts = attempts.max(1);
        self
    }

    pub fn with_max_deploy_iterations(mut self, iterations: u32) -> Self {
        self.max_deploy_iterations = iterations;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
