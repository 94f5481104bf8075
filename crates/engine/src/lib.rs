//! Deterministic droid combat engine.
//!
//! `arena-engine` defines the canonical battle rules (units, abilities,
//! arenas, orchestration) and exposes pure APIs that presentation layers
//! drive through the traits in [`env`]. All state mutation flows through
//! [`engine::BattleOrchestrator`]; the engine itself performs no I/O and
//! holds no global state, so battles replay identically from a seed.
pub mod abilities;
pub mod action;
pub mod catalog;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod state;

pub use abilities::Ability;
pub use action::{
    Action, ActionKind, BattleReport, BattleResult, TargetEffect, TargetResult, TurnRecord,
};
pub use catalog::{MapKind, MapProfile, UnitKind, UnitTemplate};
pub use config::{Arena, BattleConfig, BattleMode};
pub use engine::{BattleOrchestrator, EngineError, InvariantError, SetupError};
pub use env::{
    compute_seed, ActionSelector, BattleEnv, NullSink, OutcomeSink, PcgRng, RngSource, Roll,
    SelectorError,
};
pub use state::{BattleState, Element, Phase, Side, Team, Unit, UnitId};
