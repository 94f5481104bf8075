//! Static unit and map catalogs.
//!
//! Fixed lookup tables the engine reads at battle setup. Presentation
//! layers may also list them independently (e.g. a catalog menu), which is
//! why the tables and `ALL` arrays are public.

use crate::env::RngSource;
use crate::state::{Element, Unit};

/// The eight fixed unit archetypes.
///
/// A closed set: every kind carries one stat template and one special
/// ability, and battle logic matches on it exhaustively.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnitKind {
    EarthHammer,
    EarthBoer,
    FireBurning,
    FireFlash,
    WaterStorm,
    WaterSubmarine,
    WindFlying,
    WindShadow,
}

/// Immutable stat block backing a [`UnitKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitTemplate {
    pub name: &'static str,
    pub element: Element,
    pub max_hp: i32,
    pub speed: i32,
    pub range: i32,
    pub attack: i32,
}

impl UnitKind {
    /// Catalog order; also the index shown by catalog listings.
    pub const ALL: [UnitKind; 8] = [
        UnitKind::EarthHammer,
        UnitKind::EarthBoer,
        UnitKind::FireBurning,
        UnitKind::FireFlash,
        UnitKind::WaterStorm,
        UnitKind::WaterSubmarine,
        UnitKind::WindFlying,
        UnitKind::WindShadow,
    ];

    pub const fn template(self) -> UnitTemplate {
        match self {
            UnitKind::EarthHammer => UnitTemplate {
                name: "HammerDroid",
                element: Element::Earth,
                max_hp: 150,
                speed: 2,
                range: 1,
                attack: 50,
            },
            UnitKind::EarthBoer => UnitTemplate {
                name: "BoerDroid",
                element: Element::Earth,
                max_hp: 200,
                speed: 1,
                range: 1,
                attack: 70,
            },
            UnitKind::FireBurning => UnitTemplate {
                name: "BurningDroid",
                element: Element::Fire,
                max_hp: 100,
                speed: 2,
                range: 2,
                attack: 75,
            },
            UnitKind::FireFlash => UnitTemplate {
                name: "FlashDroid",
                element: Element::Fire,
                max_hp: 75,
                speed: 1,
                range: 2,
                attack: 100,
            },
            UnitKind::WaterStorm => UnitTemplate {
                name: "StormDroid",
                element: Element::Water,
                max_hp: 125,
                speed: 2,
                range: 2,
                attack: 70,
            },
            UnitKind::WaterSubmarine => UnitTemplate {
                name: "SubmarineDroid",
                element: Element::Water,
                max_hp: 175,
                speed: 1,
                range: 2,
                attack: 80,
            },
            UnitKind::WindFlying => UnitTemplate {
                name: "FlyingDroid",
                element: Element::Wind,
                max_hp: 105,
                speed: 2,
                range: 3,
                attack: 50,
            },
            UnitKind::WindShadow => UnitTemplate {
                name: "ShadowDroid",
                element: Element::Wind,
                max_hp: 105,
                speed: 3,
                range: 2,
                attack: 60,
            },
        }
    }
}

/// The four fixed elemental environments.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MapKind {
    Cave,
    Ocean,
    Sky,
    Volcano,
}

/// Environment parameters: which element it favors, how big the one-time
/// bonus is, and how wide the arena gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MapProfile {
    pub element: Element,
    pub bonus: i32,
    pub arena_max: i32,
}

impl MapKind {
    pub const ALL: [MapKind; 4] = [MapKind::Cave, MapKind::Ocean, MapKind::Sky, MapKind::Volcano];

    pub const fn profile(self) -> MapProfile {
        match self {
            MapKind::Cave => MapProfile {
                element: Element::Earth,
                bonus: 40,
                arena_max: 9,
            },
            MapKind::Ocean => MapProfile {
                element: Element::Water,
                bonus: 2,
                arena_max: 12,
            },
            MapKind::Sky => MapProfile {
                element: Element::Wind,
                bonus: 2,
                arena_max: 15,
            },
            MapKind::Volcano => MapProfile {
                element: Element::Fire,
                bonus: 25,
                arena_max: 10,
            },
        }
    }

    /// Draw a map uniformly.
    pub fn choose(rng: &dyn RngSource, seed: u64) -> MapKind {
        Self::ALL[rng.pick_index(seed, Self::ALL.len())]
    }
}

impl MapProfile {
    /// Apply the one-time setup bonus to a unit of the matching element.
    ///
    /// Returns whether anything was granted. The earth bonus raises current
    /// hp clamped to `max_hp`, so a unit already at full health wastes it.
    pub fn apply(&self, unit: &mut Unit) -> bool {
        if unit.element != self.element {
            return false;
        }
        match self.element {
            Element::Earth => unit.set_hp(unit.hp + self.bonus),
            Element::Fire => unit.attack += self.bonus,
            Element::Water => unit.speed += self.bonus,
            Element::Wind => unit.range += self.bonus,
        }
        true
    }
}
