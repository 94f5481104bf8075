//! Battle orchestration.
//!
//! [`BattleOrchestrator`] owns the authoritative [`BattleState`] and is the
//! only code that mutates it. Setup validates the configuration, spawns and
//! places the units, and grants the map bonus; `run` then drives rounds
//! through the injected [`BattleEnv`] until the battle resolves.
//!
//! Determinism contract: given the same configuration and the same selector
//! decisions, `run` produces identical turn records and the identical
//! outcome. All randomness flows through seeds derived from
//! `(battle_seed, nonce, unit, context)`.

mod errors;

pub use errors::{EngineError, InvariantError, SetupError};

use core::slice;

use crate::abilities::resolve_special;
use crate::action::{Action, ActionKind, BattleReport, BattleResult, TargetResult, TurnRecord};
use crate::catalog::UnitKind;
use crate::combat::{attempt_attack, deal_damage, roll_move, AttackOutcome};
use crate::config::{BattleConfig, BattleMode};
use crate::env::{compute_seed, BattleEnv, RngSource, Roll};
use crate::state::{BattleState, Phase, Side, Team, Unit, UnitId};

// Roll contexts used by the orchestrator itself. Ability resolvers draw
// under their own contexts within the acting unit's nonce.
/// Setup spawn draws, always under nonce 0.
const CTX_SPAWN: u32 = 0;
/// Ordinary move direction draws.
const CTX_MOVE: u32 = 1;

/// The battle state machine.
#[derive(Clone, Debug)]
pub struct BattleOrchestrator {
    state: BattleState,
}

impl BattleOrchestrator {
    /// Set up a one-on-one battle.
    pub fn duel(
        config: BattleConfig,
        kind_a: UnitKind,
        kind_b: UnitKind,
        rng: &dyn RngSource,
    ) -> Result<Self, SetupError> {
        Self::new(config, &[kind_a], &[kind_b], rng)
    }

    /// Set up a team battle.
    pub fn team(
        config: BattleConfig,
        kinds_a: &[UnitKind],
        kinds_b: &[UnitKind],
        rng: &dyn RngSource,
    ) -> Result<Self, SetupError> {
        Self::new(config, kinds_a, kinds_b, rng)
    }

    /// Set up a battle from unit kind rosters.
    ///
    /// Spawns every unit at a random arena position drawn under nonce 0,
    /// grants the map's elemental bonus, and in team mode overrides the
    /// spawns with deterministic line placement on the outer thirds.
    pub fn new(
        config: BattleConfig,
        kinds_a: &[UnitKind],
        kinds_b: &[UnitKind],
        rng: &dyn RngSource,
    ) -> Result<Self, SetupError> {
        validate_roster(config.mode, Side::A, kinds_a.len())?;
        validate_roster(config.mode, Side::B, kinds_b.len())?;
        if config.arena.width() <= 0 {
            return Err(SetupError::InvalidArena {
                min: config.arena.min,
                max: config.arena.max,
            });
        }

        let profile = config.map.profile();
        let mut next_id = 0u32;
        let mut spawn_side = |kinds: &[UnitKind]| -> Team {
            let mut team = Team::new();
            for &kind in kinds {
                let id = UnitId(next_id);
                next_id += 1;
                let seed = compute_seed(config.seed, 0, id.0, CTX_SPAWN);
                let position = rng.range_i32(seed, config.arena.min, config.arena.max);
                let mut unit = Unit::from_template(id, kind, position);
                profile.apply(&mut unit);
                team.push(unit);
            }
            team
        };
        let mut team_a = spawn_side(kinds_a);
        let mut team_b = spawn_side(kinds_b);

        if config.mode == BattleMode::Team {
            let width = config.arena.width().max(1);
            place_line(&mut team_a, config.arena.min, config.arena.min + width / 3);
            place_line(&mut team_b, config.arena.max - width / 3, config.arena.max);
        }

        Ok(Self::assemble(config, team_a, team_b))
    }

    /// Set up a battle from fully built teams, skipping spawning,
    /// placement, and the map bonus. Positions and stats are taken as
    /// given; rosters are still validated.
    pub fn from_teams(
        config: BattleConfig,
        team_a: Team,
        team_b: Team,
    ) -> Result<Self, SetupError> {
        validate_roster(config.mode, Side::A, team_a.len())?;
        validate_roster(config.mode, Side::B, team_b.len())?;
        if config.arena.width() <= 0 {
            return Err(SetupError::InvalidArena {
                min: config.arena.min,
                max: config.arena.max,
            });
        }
        Ok(Self::assemble(config, team_a, team_b))
    }

    fn assemble(config: BattleConfig, team_a: Team, team_b: Team) -> Self {
        Self {
            state: BattleState {
                mode: config.mode,
                arena: config.arena,
                seed: config.seed,
                nonce: 1,
                round: 1,
                round_limit: config.round_limit,
                phase: Phase::SetupComplete,
                team_a,
                team_b,
            },
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Drive the battle to resolution.
    ///
    /// Rounds run side A then side B, each side's units in roster order.
    /// Dead units are skipped; a side stops acting the moment the opposing
    /// side has no living member left. Selector failures are recorded as
    /// no-op turns and the battle continues.
    pub fn run(&mut self, env: &mut BattleEnv<'_>) -> Result<BattleResult, EngineError> {
        if self.state.resolved().is_some() {
            return Err(EngineError::AlreadyResolved);
        }
        self.check_invariants()?;

        loop {
            self.state.phase = Phase::RoundInProgress;
            for side in [Side::A, Side::B] {
                let roster = self.state.team(side).len();
                for idx in 0..roster {
                    if !self.state.team(side)[idx].alive() {
                        continue;
                    }
                    if !self.state.side_alive(side.opponent()) {
                        break;
                    }
                    let record = self.execute_turn(side, idx, env);
                    let aborted = record.action == ActionKind::Abort;
                    env.sink.turn(&record);
                    self.check_invariants()?;
                    if aborted {
                        return Ok(self.resolve(BattleResult::AbortedByAction, env));
                    }
                    if let Some(result) = self.resolution() {
                        return Ok(self.resolve(result, env));
                    }
                }
            }
            self.state.round += 1;
            if let Some(result) = self.resolution() {
                return Ok(self.resolve(result, env));
            }
        }
    }

    /// Resolve one unit's turn and return its record.
    fn execute_turn(&mut self, side: Side, idx: usize, env: &mut BattleEnv<'_>) -> TurnRecord {
        let nonce = self.state.nonce;
        self.state.nonce += 1;
        let seed = self.state.seed;
        let arena = self.state.arena;
        let round = self.state.round;

        let selector = match side {
            Side::A => &mut *env.selector_a,
            Side::B => &mut *env.selector_b,
        };
        let (acting, opposing) = self.state.sides_mut(side);
        let actor = &mut acting[idx];
        let actor_id = actor.id;

        // The ally context handed to the selector is the actor alone,
        // matching what the ability resolvers will see.
        let choice = selector.select(&*actor, slice::from_ref(&*actor), opposing.as_slice());
        let roll = Roll::new(env.rng, seed, nonce, actor_id.0);

        let (action, targets) = match choice {
            Err(_) => (ActionKind::Invalid, Vec::new()),
            Ok(Action::Abort) => (ActionKind::Abort, Vec::new()),
            Ok(Action::BasicAttack) => {
                let mut targets = Vec::new();
                for enemy in opposing.iter_mut() {
                    match attempt_attack(&*actor, enemy) {
                        AttackOutcome::Hit { damage } => {
                            deal_damage(enemy, damage);
                            targets.push(TargetResult::damaged(enemy.id, damage));
                        }
                        AttackOutcome::Miss => targets.push(TargetResult::missed(enemy.id)),
                    }
                }
                (ActionKind::BasicAttack, targets)
            }
            Ok(Action::Reposition) => {
                let position = roll_move(actor, arena, &roll, CTX_MOVE);
                (
                    ActionKind::Reposition,
                    vec![TargetResult::moved(actor_id, position)],
                )
            }
            Ok(Action::SpecialAbility) => {
                let (ability, targets) =
                    resolve_special(actor, opposing.as_mut_slice(), arena, &roll);
                (ActionKind::Special(ability), targets)
            }
        };

        TurnRecord {
            round,
            actor: actor_id,
            action,
            targets,
        }
    }

    /// Terminal outcome, if any, from side liveness and the round cap.
    fn resolution(&self) -> Option<BattleResult> {
        match (
            self.state.side_alive(Side::A),
            self.state.side_alive(Side::B),
        ) {
            (true, false) => Some(BattleResult::SideAWins),
            (false, true) => Some(BattleResult::SideBWins),
            (false, false) => Some(BattleResult::DrawByAnnihilation),
            (true, true) => (self.state.round > self.state.round_limit)
                .then_some(BattleResult::DrawByRoundLimit),
        }
    }

    fn resolve(&mut self, result: BattleResult, env: &mut BattleEnv<'_>) -> BattleResult {
        self.state.phase = Phase::Resolved(result);
        let report = BattleReport {
            mode: self.state.mode,
            result,
            rounds: self.state.round,
            side_a: self.state.team_a.to_vec(),
            side_b: self.state.team_b.to_vec(),
        };
        env.sink.resolved(&report);
        result
    }

    /// Health must sit in `[0, max_hp]` for every unit on both sides.
    fn check_invariants(&self) -> Result<(), InvariantError> {
        for unit in self.state.team_a.iter().chain(self.state.team_b.iter()) {
            if unit.hp < 0 || unit.hp > unit.max_hp {
                return Err(InvariantError::Health {
                    unit: unit.id,
                    hp: unit.hp,
                    max_hp: unit.max_hp,
                });
            }
        }
        Ok(())
    }
}

fn validate_roster(mode: BattleMode, side: Side, size: usize) -> Result<(), SetupError> {
    if size == 0 {
        return Err(SetupError::EmptyTeam { side });
    }
    match mode {
        BattleMode::Duel if size != 1 => Err(SetupError::DuelTeamSize { side, size }),
        BattleMode::Team if size > BattleConfig::MAX_TEAM_SIZE => Err(SetupError::TeamTooLarge {
            side,
            size,
            max: BattleConfig::MAX_TEAM_SIZE,
        }),
        _ => Ok(()),
    }
}

/// Spread a team evenly over `[from, to]`, first unit at `from`.
fn place_line(team: &mut Team, from: i32, to: i32) {
    let len = team.len() as i32;
    let span = (to - from).max(0);
    for (i, unit) in team.iter_mut().enumerate() {
        unit.position = from + (i as i32 * span) / (len - 1).max(1);
    }
}
