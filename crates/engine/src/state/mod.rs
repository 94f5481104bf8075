//! Authoritative battle state.
//!
//! Owned exclusively by the orchestrator and mutated only by its turn
//! loop. External layers read snapshots through records and reports.

mod unit;

pub use unit::{Element, Unit, UnitId};

use arrayvec::ArrayVec;

use crate::action::BattleResult;
use crate::config::{Arena, BattleConfig, BattleMode};

/// Ordered sequence of units; the order is turn order.
pub type Team = ArrayVec<Unit, { BattleConfig::MAX_TEAM_SIZE }>;

/// One of the two opposing sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Where the battle state machine currently stands.
///
/// `Resolved` is terminal and carries the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    SetupComplete,
    RoundInProgress,
    Resolved(BattleResult),
}

/// Canonical snapshot of one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub mode: BattleMode,
    pub arena: Arena,
    /// Base seed for every random draw; set at setup, never modified.
    pub seed: u64,
    /// Action counter feeding per-draw seed derivation. Starts at 1;
    /// nonce 0 is reserved for setup rolls.
    pub nonce: u64,
    /// Current round, starting at 1.
    pub round: u32,
    pub round_limit: u32,
    pub phase: Phase,
    pub team_a: Team,
    pub team_b: Team,
}

impl BattleState {
    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    /// Mutable access to the acting team and the opposing team, in that
    /// order. Split borrow so an actor and its enemies can be mutated in
    /// the same action.
    pub fn sides_mut(&mut self, acting: Side) -> (&mut Team, &mut Team) {
        match acting {
            Side::A => (&mut self.team_a, &mut self.team_b),
            Side::B => (&mut self.team_b, &mut self.team_a),
        }
    }

    /// Whether the side still has at least one living member.
    pub fn side_alive(&self, side: Side) -> bool {
        self.team(side).iter().any(Unit::alive)
    }

    pub fn resolved(&self) -> Option<BattleResult> {
        match self.phase {
            Phase::Resolved(result) => Some(result),
            _ => None,
        }
    }
}
