//! Per-kind special abilities.
//!
//! Each unit kind carries exactly one special ability. Resolvers are pure
//! over the units and the roll helper: the orchestrator hands in the
//! acting unit, its ally context (always the acting unit alone), and the
//! enemy context, then records the returned per-target results.
//!
//! Several abilities deliberately ignore the arena bounds when they move
//! the actor (tunnel exits, tidal surfacing, bombing flight paths); those
//! positions are left unclamped.

use core::slice;

use crate::action::TargetResult;
use crate::catalog::UnitKind;
use crate::combat::{attempt_attack, deal_damage, AttackOutcome};
use crate::config::Arena;
use crate::env::Roll;
use crate::state::{Element, Unit};

/// Tunnel exits and eruption strikes land on the classic ten-cell band
/// regardless of how wide the current arena is.
const BLAST_BAND_MAX: i32 = 9;

/// The eight special abilities, one per unit kind.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Ability {
    Earthquake,
    Tunnel,
    Flamethrower,
    Eruption,
    Heal,
    TidalShift,
    BombingRun,
    Blind,
}

impl UnitKind {
    /// The special ability this kind performs.
    pub fn ability(self) -> Ability {
        match self {
            UnitKind::EarthHammer => Ability::Earthquake,
            UnitKind::EarthBoer => Ability::Tunnel,
            UnitKind::FireBurning => Ability::Flamethrower,
            UnitKind::FireFlash => Ability::Eruption,
            UnitKind::WaterStorm => Ability::Heal,
            UnitKind::WaterSubmarine => Ability::TidalShift,
            UnitKind::WindFlying => Ability::BombingRun,
            UnitKind::WindShadow => Ability::Blind,
        }
    }
}

/// Resolve the acting unit's special ability.
///
/// The ally context handed to support effects is the actor alone, in both
/// duel and team battles; support abilities therefore never reach
/// teammates. Changing that would change game balance, so it is kept
/// as-is.
pub fn resolve_special(
    actor: &mut Unit,
    enemies: &mut [Unit],
    arena: Arena,
    roll: &Roll<'_>,
) -> (Ability, Vec<TargetResult>) {
    let ability = actor.kind.ability();
    let targets = match ability {
        Ability::Earthquake => earthquake(actor, enemies),
        Ability::Tunnel => tunnel(actor, roll),
        Ability::Flamethrower => flamethrower(actor, enemies),
        Ability::Eruption => eruption(actor, enemies, roll),
        Ability::Heal => heal(slice::from_mut(actor)),
        Ability::TidalShift => tidal_shift(actor, enemies, roll),
        Ability::BombingRun => bombing_run(actor, enemies, arena),
        Ability::Blind => blind(enemies),
    };
    (ability, targets)
}

/// Ground shock: full attack damage to every non-wind unit in both
/// contexts. The shaker is earth-bound itself and takes its own hit.
fn earthquake(actor: &mut Unit, enemies: &mut [Unit]) -> Vec<TargetResult> {
    let damage = actor.attack;
    let mut results = Vec::new();
    if actor.element != Element::Wind {
        deal_damage(actor, damage);
        results.push(TargetResult::damaged(actor.id, damage));
    }
    for enemy in enemies.iter_mut() {
        if enemy.element != Element::Wind {
            deal_damage(enemy, damage);
            results.push(TargetResult::damaged(enemy.id, damage));
        }
    }
    results
}

/// Burrow to a random cell in the blast band, ignoring arena width.
fn tunnel(actor: &mut Unit, roll: &Roll<'_>) -> Vec<TargetResult> {
    actor.position = roll.range_i32(0, 0, BLAST_BAND_MAX);
    vec![TargetResult::moved(actor.id, actor.position)]
}

/// Flame sweep over the enemy context: every non-fire enemy gets an
/// independent, range-gated attack resolution.
fn flamethrower(actor: &Unit, enemies: &mut [Unit]) -> Vec<TargetResult> {
    let mut results = Vec::new();
    for enemy in enemies.iter_mut() {
        if enemy.element == Element::Fire {
            continue;
        }
        match attempt_attack(actor, enemy) {
            AttackOutcome::Hit { damage } => {
                deal_damage(enemy, damage);
                results.push(TargetResult::damaged(enemy.id, damage));
            }
            AttackOutcome::Miss => results.push(TargetResult::missed(enemy.id)),
        }
    }
    results
}

/// Lava strike on one random cell of the blast band: full attack damage
/// to every unit in both contexts standing exactly there.
fn eruption(actor: &mut Unit, enemies: &mut [Unit], roll: &Roll<'_>) -> Vec<TargetResult> {
    let strike = roll.range_i32(0, 0, BLAST_BAND_MAX);
    let damage = actor.attack;
    let mut results = Vec::new();
    if actor.position == strike {
        deal_damage(actor, damage);
        results.push(TargetResult::damaged(actor.id, damage));
    }
    for enemy in enemies.iter_mut() {
        if enemy.position == strike {
            deal_damage(enemy, damage);
            results.push(TargetResult::damaged(enemy.id, damage));
        }
    }
    results
}

/// Restore the first damaged unit in the ally context to full health.
/// At most one heal per use; no damaged ally means a no-op.
fn heal(allies: &mut [Unit]) -> Vec<TargetResult> {
    for ally in allies.iter_mut() {
        if ally.hp < ally.max_hp {
            let restored = ally.max_hp - ally.hp;
            ally.hp = ally.max_hp;
            return vec![TargetResult::healed(ally.id, restored)];
        }
    }
    Vec::new()
}

/// Surface two cells short of one random enemy. The landing spot is not
/// re-clamped to the arena.
fn tidal_shift(actor: &mut Unit, enemies: &[Unit], roll: &Roll<'_>) -> Vec<TargetResult> {
    let mark = &enemies[roll.pick(0, enemies.len())];
    actor.position = mark.position - 2;
    vec![TargetResult::moved(actor.id, actor.position)]
}

/// Three-cell strafing flight toward the far half of the arena: each step
/// moves the bomber one cell (unclamped) and damages every unit sharing
/// its cell. The bomber never hits itself.
fn bombing_run(actor: &mut Unit, enemies: &mut [Unit], arena: Arena) -> Vec<TargetResult> {
    let direction = if actor.position > arena.midpoint() {
        -1
    } else {
        1
    };
    let damage = actor.attack;
    let mut results = Vec::new();
    for _ in 0..3 {
        actor.position += direction;
        for enemy in enemies.iter_mut() {
            if enemy.position == actor.position {
                deal_damage(enemy, damage);
                results.push(TargetResult::damaged(enemy.id, damage));
            }
        }
    }
    results.push(TargetResult::moved(actor.id, actor.position));
    results
}

/// Cripple every enemy's reach down to a single cell. Permanent; there is
/// no duration tracking to undo it.
fn blind(enemies: &mut [Unit]) -> Vec<TargetResult> {
    let mut results = Vec::with_capacity(enemies.len());
    for enemy in enemies.iter_mut() {
        enemy.range = 1;
        results.push(TargetResult::range_reduced(enemy.id, 1));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::TargetEffect;
    use crate::env::PcgRng;
    use crate::state::UnitId;

    fn unit(id: u32, kind: UnitKind, position: i32) -> Unit {
        Unit::from_template(UnitId(id), kind, position)
    }

    fn roll(nonce: u64) -> Roll<'static> {
        Roll::new(&PcgRng, 1234, nonce, 0)
    }

    #[test]
    fn earthquake_spares_wind_and_hits_the_shaker() {
        let mut actor = unit(0, UnitKind::EarthHammer, 0);
        let mut enemies = [
            unit(1, UnitKind::WindFlying, 3),
            unit(2, UnitKind::WaterStorm, 8),
        ];
        let results = earthquake(&mut actor, &mut enemies);

        assert_eq!(actor.hp, 150 - 50);
        assert_eq!(enemies[0].hp, enemies[0].max_hp);
        assert_eq!(enemies[1].hp, 125 - 50);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], TargetResult::damaged(UnitId(0), 50));
        assert_eq!(results[1], TargetResult::damaged(UnitId(2), 50));
    }

    #[test]
    fn tunnel_exits_stay_in_the_blast_band() {
        for nonce in 0..200 {
            let mut actor = unit(0, UnitKind::EarthBoer, 42);
            let results = tunnel(&mut actor, &roll(nonce));
            assert!((0..=BLAST_BAND_MAX).contains(&actor.position));
            assert_eq!(results, vec![TargetResult::moved(UnitId(0), actor.position)]);
        }
    }

    #[test]
    fn flamethrower_gates_on_element_and_range() {
        let mut actor = unit(0, UnitKind::FireBurning, 5);
        let mut enemies = [
            unit(1, UnitKind::FireFlash, 5),
            unit(2, UnitKind::WaterStorm, 6),
            unit(3, UnitKind::WaterSubmarine, 9),
        ];
        let results = flamethrower(&actor, &mut enemies);

        // Same element: untouched and unrecorded. In range: hit. Too far: miss.
        assert_eq!(enemies[0].hp, enemies[0].max_hp);
        assert_eq!(enemies[1].hp, 125 - 75);
        assert_eq!(enemies[2].hp, enemies[2].max_hp);
        assert_eq!(
            results,
            vec![
                TargetResult::damaged(UnitId(2), 75),
                TargetResult::missed(UnitId(3)),
            ]
        );
        actor.hp = 0;
        let results = flamethrower(&actor, &mut enemies);
        assert!(results.iter().all(|r| r.effect == TargetEffect::Missed));
    }

    #[test]
    fn eruption_hits_exactly_the_struck_cell() {
        let rng = PcgRng;
        let roll = Roll::new(&rng, 99, 7, 0);
        let strike = roll.range_i32(0, 0, BLAST_BAND_MAX);

        let mut actor = unit(0, UnitKind::FireFlash, strike + 1);
        let mut enemies = [
            unit(1, UnitKind::EarthHammer, strike),
            unit(2, UnitKind::EarthBoer, strike + 1),
        ];
        let results = eruption(&mut actor, &mut enemies, &roll);

        assert_eq!(actor.hp, actor.max_hp);
        assert_eq!(enemies[0].hp, 150 - 100);
        assert_eq!(enemies[1].hp, enemies[1].max_hp);
        assert_eq!(results, vec![TargetResult::damaged(UnitId(1), 100)]);
    }

    #[test]
    fn eruption_can_strike_the_caster() {
        let rng = PcgRng;
        let roll = Roll::new(&rng, 99, 7, 0);
        let strike = roll.range_i32(0, 0, BLAST_BAND_MAX);

        let mut actor = unit(0, UnitKind::FireFlash, strike);
        let mut enemies: [Unit; 0] = [];
        let results = eruption(&mut actor, &mut enemies, &roll);
        assert_eq!(actor.hp, actor.max_hp - actor.attack);
        assert_eq!(results, vec![TargetResult::damaged(UnitId(0), 100)]);
    }

    #[test]
    fn heal_restores_the_first_damaged_ally_only() {
        let mut allies = [unit(0, UnitKind::WaterStorm, 0), unit(1, UnitKind::EarthBoer, 1)];
        allies[0].hp = 10;
        allies[1].hp = 20;

        let results = heal(&mut allies);
        assert_eq!(allies[0].hp, allies[0].max_hp);
        assert_eq!(allies[1].hp, 20);
        assert_eq!(results, vec![TargetResult::healed(UnitId(0), 125 - 10)]);
    }

    #[test]
    fn heal_with_no_damaged_ally_is_a_no_op() {
        let mut allies = [unit(0, UnitKind::WaterStorm, 0)];
        assert!(heal(&mut allies).is_empty());
        assert_eq!(allies[0].hp, allies[0].max_hp);
    }

    #[test]
    fn tidal_shift_lands_two_cells_short_unclamped() {
        let mut actor = unit(0, UnitKind::WaterSubmarine, 9);
        let enemies = [unit(1, UnitKind::EarthHammer, 0)];
        let results = tidal_shift(&mut actor, &enemies, &roll(5));
        assert_eq!(actor.position, -2);
        assert_eq!(results, vec![TargetResult::moved(UnitId(0), -2)]);
    }

    #[test]
    fn bombing_run_flies_toward_the_far_half() {
        let arena = Arena::new(0, 9);

        // Past the midpoint: flies left, bombing each cell it crosses.
        let mut actor = unit(0, UnitKind::WindFlying, 6);
        let mut enemies = [unit(1, UnitKind::EarthHammer, 5), unit(2, UnitKind::EarthBoer, 3)];
        let results = bombing_run(&mut actor, &mut enemies, arena);
        assert_eq!(actor.position, 3);
        assert_eq!(enemies[0].hp, 150 - 50);
        assert_eq!(enemies[1].hp, 200 - 50);
        assert_eq!(
            results,
            vec![
                TargetResult::damaged(UnitId(1), 50),
                TargetResult::damaged(UnitId(2), 50),
                TargetResult::moved(UnitId(0), 3),
            ]
        );

        // At or below the midpoint: flies right, off the edge if need be.
        let mut actor = unit(0, UnitKind::WindFlying, 8);
        let arena_wide = Arena::new(0, 20);
        let mut enemies = [unit(1, UnitKind::EarthHammer, 0)];
        bombing_run(&mut actor, &mut enemies, arena_wide);
        assert_eq!(actor.position, 11);
    }

    #[test]
    fn blind_sets_every_enemy_range_to_one() {
        let mut enemies = [unit(1, UnitKind::WindFlying, 0), unit(2, UnitKind::FireFlash, 4)];
        let results = blind(&mut enemies);
        assert!(enemies.iter().all(|e| e.range == 1));
        assert_eq!(
            results,
            vec![
                TargetResult::range_reduced(UnitId(1), 1),
                TargetResult::range_reduced(UnitId(2), 1),
            ]
        );
    }

    #[test]
    fn every_kind_maps_to_its_ability() {
        assert_eq!(UnitKind::EarthHammer.ability(), Ability::Earthquake);
        assert_eq!(UnitKind::EarthBoer.ability(), Ability::Tunnel);
        assert_eq!(UnitKind::FireBurning.ability(), Ability::Flamethrower);
        assert_eq!(UnitKind::FireFlash.ability(), Ability::Eruption);
        assert_eq!(UnitKind::WaterStorm.ability(), Ability::Heal);
        assert_eq!(UnitKind::WaterSubmarine.ability(), Ability::TidalShift);
        assert_eq!(UnitKind::WindFlying.ability(), Ability::BombingRun);
        assert_eq!(UnitKind::WindShadow.ability(), Ability::Blind);
    }
}
