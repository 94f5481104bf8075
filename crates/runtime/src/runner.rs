//! One battle, owned end to end.
//!
//! [`BattleRunner`] bundles an orchestrator with the environment pieces it
//! needs, so a host program configures a battle once and calls [`run`].
//! Hosts that need to share selectors or sinks across battles can still
//! assemble a [`BattleEnv`](arena_engine::BattleEnv) by hand and drive the
//! orchestrator directly.
//!
//! [`run`]: BattleRunner::run

use arena_engine::{
    Action, ActionSelector, BattleConfig, BattleEnv, BattleOrchestrator, BattleResult,
    BattleState, EngineError, OutcomeSink, PcgRng, RngSource, SetupError, UnitKind,
};

use crate::selectors::FixedSelector;
use crate::sink::TracingSink;

/// Why a runner could not set up or finish its battle.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Owns one battle and everything needed to drive it.
pub struct BattleRunner {
    orchestrator: BattleOrchestrator,
    selector_a: Box<dyn ActionSelector>,
    selector_b: Box<dyn ActionSelector>,
    rng: Box<dyn RngSource>,
    sink: Box<dyn OutcomeSink>,
}

impl std::fmt::Debug for BattleRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleRunner")
            .field("orchestrator", &self.orchestrator)
            .finish_non_exhaustive()
    }
}

impl BattleRunner {
    pub fn builder(config: BattleConfig) -> BattleRunnerBuilder {
        BattleRunnerBuilder::new(config)
    }

    pub fn state(&self) -> &BattleState {
        self.orchestrator.state()
    }

    /// Drive the battle to resolution.
    pub fn run(&mut self) -> Result<BattleResult, RunnerError> {
        let state = self.orchestrator.state();
        let span = tracing::info_span!("battle", mode = %state.mode, seed = state.seed);
        let _guard = span.enter();
        tracing::info!(
            side_a = state.team_a.len(),
            side_b = state.team_b.len(),
            round_limit = state.round_limit,
            "battle starting"
        );

        let mut env = BattleEnv {
            selector_a: self.selector_a.as_mut(),
            selector_b: self.selector_b.as_mut(),
            rng: self.rng.as_ref(),
            sink: self.sink.as_mut(),
        };
        let result = self.orchestrator.run(&mut env)?;
        tracing::info!(result = %result, rounds = self.orchestrator.state().round, "battle finished");
        Ok(result)
    }
}

/// Builder for [`BattleRunner`].
///
/// Unset pieces get serviceable defaults: the [`PcgRng`] oracle, a
/// [`TracingSink`], and basic-attack selectors.
pub struct BattleRunnerBuilder {
    config: BattleConfig,
    roster_a: Vec<UnitKind>,
    roster_b: Vec<UnitKind>,
    selector_a: Option<Box<dyn ActionSelector>>,
    selector_b: Option<Box<dyn ActionSelector>>,
    rng: Option<Box<dyn RngSource>>,
    sink: Option<Box<dyn OutcomeSink>>,
}

impl BattleRunnerBuilder {
    pub fn new(config: BattleConfig) -> Self {
        Self {
            config,
            roster_a: Vec::new(),
            roster_b: Vec::new(),
            selector_a: None,
            selector_b: None,
            rng: None,
            sink: None,
        }
    }

    pub fn side_a(mut self, kinds: impl IntoIterator<Item = UnitKind>) -> Self {
        self.roster_a = kinds.into_iter().collect();
        self
    }

    pub fn side_b(mut self, kinds: impl IntoIterator<Item = UnitKind>) -> Self {
        self.roster_b = kinds.into_iter().collect();
        self
    }

    pub fn selector_a(mut self, selector: impl ActionSelector + 'static) -> Self {
        self.selector_a = Some(Box::new(selector));
        self
    }

    pub fn selector_b(mut self, selector: impl ActionSelector + 'static) -> Self {
        self.selector_b = Some(Box::new(selector));
        self
    }

    pub fn rng(mut self, rng: impl RngSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn sink(mut self, sink: impl OutcomeSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Validate the rosters and set the battle up.
    pub fn build(self) -> Result<BattleRunner, RunnerError> {
        let rng = self.rng.unwrap_or_else(|| Box::new(PcgRng));
        let orchestrator = BattleOrchestrator::new(
            self.config,
            &self.roster_a,
            &self.roster_b,
            rng.as_ref(),
        )?;
        Ok(BattleRunner {
            orchestrator,
            selector_a: self
                .selector_a
                .unwrap_or_else(|| Box::new(FixedSelector::new(Action::BasicAttack))),
            selector_b: self
                .selector_b
                .unwrap_or_else(|| Box::new(FixedSelector::new(Action::BasicAttack))),
            rng,
            sink: self.sink.unwrap_or_else(|| Box::new(TracingSink)),
        })
    }
}
