//! Structured battle output.
//!
//! The engine reports every resolved action and the final outcome to an
//! [`OutcomeSink`]. Rendering to a console or persisting to a log file is
//! entirely the consumer's business.

use crate::action::{BattleReport, TurnRecord};

/// Consumer of turn records and the final battle report.
pub trait OutcomeSink {
    /// One action has been resolved.
    fn turn(&mut self, record: &TurnRecord);

    /// The battle reached a terminal state.
    fn resolved(&mut self, report: &BattleReport);
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl OutcomeSink for NullSink {
    fn turn(&mut self, _record: &TurnRecord) {}

    fn resolved(&mut self, _report: &BattleReport) {}
}
