//! Actions, per-turn records, and battle outcomes.

use core::str::FromStr;

use crate::abilities::Ability;
use crate::config::BattleMode;
use crate::env::SelectorError;
use crate::state::{Unit, UnitId};

/// What a unit can do on its turn.
///
/// `Abort` is a sentinel: it ends the whole battle immediately regardless
/// of combat state.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Action {
    BasicAttack,
    SpecialAbility,
    Reposition,
    Abort,
}

impl Action {
    /// Parse selector input. Unrecognized text becomes a [`SelectorError`]
    /// so the orchestrator can log the anomaly and continue.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        Self::from_str(input).map_err(|_| SelectorError::Unrecognized {
            input: input.to_string(),
        })
    }
}

/// What actually happened on a turn, as recorded.
///
/// `Invalid` marks an anomalous selector response that was treated as a
/// no-op turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    BasicAttack,
    Special(Ability),
    Reposition,
    Abort,
    Invalid,
}

/// Effect of one action on one unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetEffect {
    Damaged { amount: i32 },
    Missed,
    Healed { restored: i32 },
    RangeReduced { to: i32 },
    MovedTo { position: i32 },
}

/// One unit affected by an action, and how.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetResult {
    pub target: UnitId,
    pub effect: TargetEffect,
}

impl TargetResult {
    pub fn damaged(target: UnitId, amount: i32) -> Self {
        Self {
            target,
            effect: TargetEffect::Damaged { amount },
        }
    }

    pub fn missed(target: UnitId) -> Self {
        Self {
            target,
            effect: TargetEffect::Missed,
        }
    }

    pub fn healed(target: UnitId, restored: i32) -> Self {
        Self {
            target,
            effect: TargetEffect::Healed { restored },
        }
    }

    pub fn range_reduced(target: UnitId, to: i32) -> Self {
        Self {
            target,
            effect: TargetEffect::RangeReduced { to },
        }
    }

    pub fn moved(target: UnitId, position: i32) -> Self {
        Self {
            target,
            effect: TargetEffect::MovedTo { position },
        }
    }
}

/// Structured record of one resolved action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnRecord {
    pub round: u32,
    pub actor: UnitId,
    pub action: ActionKind,
    pub targets: Vec<TargetResult>,
}

/// Terminal outcome of a battle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleResult {
    SideAWins,
    SideBWins,
    DrawByAnnihilation,
    DrawByRoundLimit,
    AbortedByAction,
}

/// Final report handed to the outcome sink when a battle resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub mode: BattleMode,
    pub result: BattleResult,
    /// Round counter value at resolution.
    pub rounds: u32,
    pub side_a: Vec<Unit>,
    pub side_b: Vec<Unit>,
}
