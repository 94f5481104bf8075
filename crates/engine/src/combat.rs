//! Combat primitives: range checks, damage application, attack and move
//! resolution.
//!
//! Pure functions over units; both the orchestrator and the ability
//! resolvers build on these.

use crate::config::Arena;
use crate::env::Roll;
use crate::state::Unit;

/// Result of a single attack resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    Hit { damage: i32 },
    Miss,
}

/// Whether the defender stands within the attacker's reach.
pub fn in_range(attacker: &Unit, defender: &Unit) -> bool {
    (defender.position - attacker.position).abs() <= attacker.range
}

/// Reduce the target's hp, never below zero. Negative amounts count as
/// zero, so further damage to a dead unit leaves it at the floor.
pub fn deal_damage(target: &mut Unit, amount: i32) {
    target.hp = (target.hp - amount.max(0)).max(0);
}

/// Resolve one attack. Dead attackers always miss; otherwise the attack
/// hits for the attacker's full attack power iff the defender is in range.
/// Does not apply the damage.
pub fn attempt_attack(attacker: &Unit, defender: &Unit) -> AttackOutcome {
    if attacker.alive() && in_range(attacker, defender) {
        AttackOutcome::Hit {
            damage: attacker.attack,
        }
    } else {
        AttackOutcome::Miss
    }
}

/// Ordinary reposition: one random step of `speed` cells left or right,
/// clamped into the arena. Returns the new position.
pub fn roll_move(unit: &mut Unit, arena: Arena, roll: &Roll<'_>, context: u32) -> i32 {
    let direction = roll.coin(context);
    let next = unit.position + direction * unit.speed;
    unit.position = arena.clamp(next);
    debug_assert!(arena.contains(unit.position));
    unit.position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UnitKind;
    use crate::env::PcgRng;
    use crate::state::UnitId;

    fn unit_at(position: i32, range: i32) -> Unit {
        let mut unit = Unit::from_template(UnitId(0), UnitKind::EarthHammer, position);
        unit.range = range;
        unit
    }

    #[test]
    fn range_uses_absolute_distance() {
        let attacker = unit_at(5, 2);
        assert!(in_range(&attacker, &unit_at(3, 0)));
        assert!(in_range(&attacker, &unit_at(7, 0)));
        assert!(!in_range(&attacker, &unit_at(8, 0)));
    }

    #[test]
    fn damage_floors_at_zero_and_stays_there() {
        let mut target = unit_at(0, 0);
        let overkill = target.max_hp + 100;
        deal_damage(&mut target, overkill);
        assert_eq!(target.hp, 0);
        deal_damage(&mut target, 50);
        assert_eq!(target.hp, 0);
    }

    #[test]
    fn negative_damage_is_ignored() {
        let mut target = unit_at(0, 0);
        let before = target.hp;
        deal_damage(&mut target, -30);
        assert_eq!(target.hp, before);
    }

    #[test]
    fn dead_attackers_always_miss() {
        let mut attacker = unit_at(0, 5);
        attacker.hp = 0;
        assert_eq!(attempt_attack(&attacker, &unit_at(0, 0)), AttackOutcome::Miss);
    }

    #[test]
    fn attack_hits_for_full_power_in_range() {
        let attacker = unit_at(0, 1);
        assert_eq!(
            attempt_attack(&attacker, &unit_at(1, 0)),
            AttackOutcome::Hit {
                damage: attacker.attack
            }
        );
        assert_eq!(attempt_attack(&attacker, &unit_at(2, 0)), AttackOutcome::Miss);
    }

    #[test]
    fn moves_are_clamped_to_the_arena() {
        let rng = PcgRng;
        let arena = Arena::new(0, 9);
        for nonce in 0..100 {
            let mut unit = unit_at(0, 0);
            unit.speed = 3;
            unit.position = 8;
            let roll = Roll::new(&rng, 17, nonce, unit.id.0);
            let next = roll_move(&mut unit, arena, &roll, 0);
            assert!(arena.contains(next));
            assert!(next == 5 || next == 9);
        }
    }
}
