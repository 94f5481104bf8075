//! Action selection boundary.
//!
//! Battles block on an external [`ActionSelector`] each turn: a human
//! prompt, a scripted fixture, or an AI policy. The engine only sees the
//! returned value and never performs I/O itself.

use crate::action::Action;
use crate::state::Unit;

/// Why a selector failed to produce an action.
///
/// Selector failures are the most failure-prone boundary of the system
/// (they usually wrap human input), so the orchestrator treats them as a
/// logged no-op turn rather than a fatal error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("unrecognized action input: {input:?}")]
    Unrecognized { input: String },

    #[error("selector has no more actions")]
    Exhausted,
}

/// Per-turn decision provider.
///
/// `allies` is the acting unit's ally context and `enemies` the opposing
/// side, exactly as the orchestrator will hand them to the ability
/// resolvers.
pub trait ActionSelector {
    fn select(
        &mut self,
        actor: &Unit,
        allies: &[Unit],
        enemies: &[Unit],
    ) -> Result<Action, SelectorError>;
}
