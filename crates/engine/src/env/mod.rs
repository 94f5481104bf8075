//! External collaborators the engine depends on but never implements.
//!
//! The orchestrator is handed a [`BattleEnv`] bundling the per-side action
//! selectors, the RNG oracle, and the outcome sink. Everything behind these
//! traits lives outside the engine: prompts, policies, loggers, files.

mod rng;
mod selector;
mod sink;

pub use rng::{compute_seed, PcgRng, RngSource, Roll};
pub use selector::{ActionSelector, SelectorError};
pub use sink::{NullSink, OutcomeSink};

/// Bundle of external collaborators for one battle.
pub struct BattleEnv<'a> {
    pub selector_a: &'a mut dyn ActionSelector,
    pub selector_b: &'a mut dyn ActionSelector,
    pub rng: &'a dyn RngSource,
    pub sink: &'a mut dyn OutcomeSink,
}
