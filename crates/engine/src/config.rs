//! Battle configuration.
//!
//! Arena bounds and the round cap are explicit values threaded into the
//! orchestrator at construction and through every call that needs them.
//! They are never stored as process-wide state.

use crate::catalog::MapKind;

/// Closed integer interval of valid positions for one battle.
///
/// Fixed for the duration of a battle; ordinary movement is clamped into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub min: i32,
    pub max: i32,
}

impl Arena {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, position: i32) -> bool {
        position >= self.min && position <= self.max
    }

    pub fn width(&self) -> i32 {
        self.max - self.min
    }

    /// Integer midpoint, used by flight-path direction checks.
    pub fn midpoint(&self) -> i32 {
        (self.min + self.max) / 2
    }

    /// Clamp a position into the arena.
    pub fn clamp(&self, position: i32) -> i32 {
        position.clamp(self.min, self.max)
    }
}

/// Battle configuration. One side vs one, or full teams.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleMode {
    Duel,
    Team,
}

/// Everything the orchestrator needs to set up a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    pub mode: BattleMode,
    /// Elemental environment; grants its one-time bonus during setup.
    pub map: MapKind,
    /// Valid position range. Defaults to the map's profile but may be
    /// overridden, e.g. by test fixtures.
    pub arena: Arena,
    /// Liveness guarantee: the battle is drawn once the round counter
    /// passes this cap.
    pub round_limit: u32,
    /// Base seed for every random draw in the battle.
    pub seed: u64,
}

impl BattleConfig {
    /// Default round cap.
    pub const ROUND_LIMIT: u32 = 200;

    // ===== compile-time constants used as type parameters =====
    /// Maximum team size in team mode.
    pub const MAX_TEAM_SIZE: usize = 6;

    pub fn new(mode: BattleMode, map: MapKind, seed: u64) -> Self {
        let profile = map.profile();
        Self {
            mode,
            map,
            arena: Arena::new(0, profile.arena_max),
            round_limit: Self::ROUND_LIMIT,
            seed,
        }
    }

    /// Configuration with a randomly drawn map.
    pub fn with_random_map(
        mode: BattleMode,
        seed: u64,
        rng: &dyn crate::env::RngSource,
    ) -> Self {
        Self::new(mode, MapKind::choose(rng, seed), seed)
    }
}
