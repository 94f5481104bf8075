//! Engine error taxonomy.
//!
//! Three severities, matching how battles can go wrong:
//! - [`SetupError`]: the requested battle cannot be constructed.
//! - [`SelectorError`](crate::env::SelectorError): anomalous external
//!   input; handled inside the loop as a no-op turn, never surfaced here.
//! - [`InvariantError`]: the state itself is corrupt. Fatal.

use crate::state::{Side, UnitId};

/// The battle could not be set up from the given configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("side {side} has no units")]
    EmptyTeam { side: Side },

    #[error("side {side} has {size} units, maximum is {max}")]
    TeamTooLarge { side: Side, size: usize, max: usize },

    #[error("duel mode requires exactly one unit per side, side {side} has {size}")]
    DuelTeamSize { side: Side, size: usize },

    #[error("arena [{min}, {max}] is empty")]
    InvalidArena { min: i32, max: i32 },
}

/// A state invariant no longer holds. The battle is unrecoverable.
///
/// Position bounds are not checked here: ordinary moves clamp by
/// construction (`debug_assert!`ed in the move path), and several
/// abilities leave positions unclamped on purpose.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("unit {unit} hp {hp} outside [0, {max_hp}]")]
    Health { unit: UnitId, hp: i32, max_hp: i32 },
}

/// Anything `run` can fail with.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("battle is already resolved")]
    AlreadyResolved,

    #[error(transparent)]
    Invariant(#[from] InvariantError),
}
