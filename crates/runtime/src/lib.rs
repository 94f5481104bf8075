//! Synchronous driver around [`arena_engine`].
//!
//! The engine is pure and blocks on its environment traits; this crate
//! supplies the concrete pieces a host program needs to actually run a
//! battle: ready-made action selectors, sinks that record or trace the
//! outcome stream, and [`BattleRunner`], which owns one battle end to end.

pub mod runner;
pub mod selectors;
pub mod sink;

pub use runner::{BattleRunner, BattleRunnerBuilder, RunnerError};
pub use selectors::{FixedSelector, ScriptedSelector};
pub use sink::{RecordingSink, TracingSink};

pub use arena_engine as engine;
