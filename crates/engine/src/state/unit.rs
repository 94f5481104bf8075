//! Unit identity, stats, and elemental affinity.

use core::fmt;

use crate::catalog::UnitKind;

/// Elemental affinity.
///
/// Governs map-bonus matching and a handful of ability exemptions
/// (airborne wind units shrug off ground shocks, fire units ignore flame).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    Earth,
    Fire,
    Water,
    Wind,
}

/// Stable identifier for a unit within one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mutable combat entity.
///
/// Created from a catalog template at battle setup, mutated by damage,
/// healing, movement, and debuffs, and discarded when the battle ends.
/// Invariants: `0 <= hp <= max_hp` at all times; `position` stays inside
/// the arena after ordinary movement (a few abilities deliberately leave
/// it unclamped).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub element: Element,
    pub max_hp: i32,
    pub hp: i32,
    pub speed: i32,
    pub range: i32,
    pub attack: i32,
    pub position: i32,
}

impl Unit {
    /// Instantiate a catalog template at the given position.
    pub fn from_template(id: UnitId, kind: UnitKind, position: i32) -> Self {
        let template = kind.template();
        Self {
            id,
            kind,
            element: template.element,
            max_hp: template.max_hp,
            hp: template.max_hp,
            speed: template.speed,
            range: template.range,
            attack: template.attack,
            position,
        }
    }

    /// Display name from the catalog template.
    pub fn name(&self) -> &'static str {
        self.kind.template().name
    }

    pub fn alive(&self) -> bool {
        self.hp > 0
    }

    /// Set hp, clamped into `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp.clamp(0, self.max_hp);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} HP={}/{} ms={} range={} atk={} element={} position={}",
            self.name(),
            self.hp,
            self.max_hp,
            self.speed,
            self.range,
            self.attack,
            self.element,
            self.position
        )
    }
}
