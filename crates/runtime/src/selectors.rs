//! Ready-made action selectors.
//!
//! The engine prompts an [`ActionSelector`] every turn; these cover the
//! non-interactive cases: a constant policy for bots and smoke runs, and a
//! scripted sequence for replays and fixtures.

use std::collections::VecDeque;

use arena_engine::{Action, ActionSelector, SelectorError, Unit};

/// Selects the same action every turn.
#[derive(Clone, Copy, Debug)]
pub struct FixedSelector {
    action: Action,
}

impl FixedSelector {
    pub fn new(action: Action) -> Self {
        Self { action }
    }
}

impl ActionSelector for FixedSelector {
    fn select(
        &mut self,
        _actor: &Unit,
        _allies: &[Unit],
        _enemies: &[Unit],
    ) -> Result<Action, SelectorError> {
        Ok(self.action)
    }
}

/// Plays back a predetermined sequence of actions.
///
/// Once the script runs dry it yields the fallback action if one was set,
/// and [`SelectorError::Exhausted`] otherwise, which the engine records as
/// a no-op turn.
#[derive(Clone, Debug)]
pub struct ScriptedSelector {
    script: VecDeque<Action>,
    fallback: Option<Action>,
}

impl ScriptedSelector {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        Self {
            script: script.into_iter().collect(),
            fallback: None,
        }
    }

    /// Action to repeat after the script runs out.
    pub fn with_fallback(mut self, action: Action) -> Self {
        self.fallback = Some(action);
        self
    }

    /// Build a script from newline-separated action names, one per turn.
    /// Blank lines are skipped; the first unrecognized line is an error.
    pub fn parse_lines(input: &str) -> Result<Self, SelectorError> {
        let mut script = VecDeque::new();
        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            script.push_back(Action::parse(line)?);
        }
        Ok(Self {
            script,
            fallback: None,
        })
    }
}

impl ActionSelector for ScriptedSelector {
    fn select(
        &mut self,
        _actor: &Unit,
        _allies: &[Unit],
        _enemies: &[Unit],
    ) -> Result<Action, SelectorError> {
        match self.script.pop_front() {
            Some(action) => Ok(action),
            None => self.fallback.ok_or(SelectorError::Exhausted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_engine::{UnitId, UnitKind};

    fn probe(selector: &mut dyn ActionSelector) -> Result<Action, SelectorError> {
        let unit = Unit::from_template(UnitId(0), UnitKind::EarthHammer, 0);
        selector.select(&unit, &[unit.clone()], &[])
    }

    #[test]
    fn fixed_selector_never_changes_its_mind() {
        let mut selector = FixedSelector::new(Action::Reposition);
        for _ in 0..3 {
            assert_eq!(probe(&mut selector).unwrap(), Action::Reposition);
        }
    }

    #[test]
    fn script_plays_in_order_then_exhausts() {
        let mut selector = ScriptedSelector::new([Action::BasicAttack, Action::SpecialAbility]);
        assert_eq!(probe(&mut selector).unwrap(), Action::BasicAttack);
        assert_eq!(probe(&mut selector).unwrap(), Action::SpecialAbility);
        assert_eq!(probe(&mut selector).unwrap_err(), SelectorError::Exhausted);
    }

    #[test]
    fn fallback_takes_over_after_the_script() {
        let mut selector =
            ScriptedSelector::new([Action::Abort]).with_fallback(Action::BasicAttack);
        assert_eq!(probe(&mut selector).unwrap(), Action::Abort);
        assert_eq!(probe(&mut selector).unwrap(), Action::BasicAttack);
        assert_eq!(probe(&mut selector).unwrap(), Action::BasicAttack);
    }

    #[test]
    fn parse_lines_skips_blanks_and_rejects_garbage() {
        let mut selector = ScriptedSelector::parse_lines("basic_attack\n\n  reposition  \n").unwrap();
        assert_eq!(probe(&mut selector).unwrap(), Action::BasicAttack);
        assert_eq!(probe(&mut selector).unwrap(), Action::Reposition);

        let err = ScriptedSelector::parse_lines("basic_attack\nsurrender\n").unwrap_err();
        assert_eq!(
            err,
            SelectorError::Unrecognized {
                input: "surrender".to_string()
            }
        );
    }
}
