//! Outcome sinks.
//!
//! [`TracingSink`] turns the outcome stream into structured log events;
//! [`RecordingSink`] captures it for later inspection. A recording sink is
//! a cheap shared handle, so one copy can go to the runner while the test
//! keeps another to read the capture back.

use std::cell::RefCell;
use std::rc::Rc;

use arena_engine::{BattleReport, OutcomeSink, TurnRecord};

/// Emits every turn record and the final report as `tracing` events.
///
/// Turns go out at debug level to keep ordinary runs quiet; resolution is
/// info.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl OutcomeSink for TracingSink {
    fn turn(&mut self, record: &TurnRecord) {
        tracing::debug!(
            round = record.round,
            actor = %record.actor,
            action = ?record.action,
            targets = record.targets.len(),
            "turn resolved"
        );
    }

    fn resolved(&mut self, report: &BattleReport) {
        tracing::info!(
            mode = %report.mode,
            result = %report.result,
            rounds = report.rounds,
            "battle resolved"
        );
    }
}

/// Everything a [`RecordingSink`] has seen.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    pub turns: Vec<TurnRecord>,
    pub report: Option<BattleReport>,
}

/// Captures the full outcome stream in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the turn records seen so far.
    pub fn turns(&self) -> Vec<TurnRecord> {
        self.inner.borrow().turns.clone()
    }

    /// The final report, once the battle has resolved.
    pub fn report(&self) -> Option<BattleReport> {
        self.inner.borrow().report.clone()
    }
}

impl OutcomeSink for RecordingSink {
    fn turn(&mut self, record: &TurnRecord) {
        self.inner.borrow_mut().turns.push(record.clone());
    }

    fn resolved(&mut self, report: &BattleReport) {
        self.inner.borrow_mut().report = Some(report.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_engine::{ActionKind, UnitId};

    #[test]
    fn recording_handles_share_one_capture() {
        let sink = RecordingSink::new();
        let mut writer = sink.clone();

        writer.turn(&TurnRecord {
            round: 1,
            actor: UnitId(0),
            action: ActionKind::Reposition,
            targets: vec![],
        });

        assert_eq!(sink.turns().len(), 1);
        assert!(sink.report().is_none());
    }
}
