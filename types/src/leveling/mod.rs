//! Experience to level conversion.
//!
//! Two curves are in use. The network level grows quadratically in cumulative experience and
//! is inverted in closed form. Bed Wars levels are bought in prestiges of 100 levels, where
//! the first four levels of each prestige are cheap and the rest cost a flat amount.

mod constants;

pub use constants::*;

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LevelCurve {
    /// Network-wide level, derived from `networkExp`.
    Network,
    /// Bed Wars star level, derived from `stats.Bedwars.Experience`.
    Bedwars,
}

impl LevelCurve {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelCurve::Network => "network",
            LevelCurve::Bedwars => "bedwars",
        }
    }
}

impl fmt::Display for LevelCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelCurve {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "network" => Ok(Self::Network),
            "bedwars" => Ok(Self::Bedwars),
            _ => Err("valid values: network, bedwars"),
        }
    }
}

/// Level reached with `experience` on the given curve.
pub fn level_for_experience(curve: LevelCurve, experience: f64) -> u64 {
    match curve {
        LevelCurve::Network => network_level(experience),
        LevelCurve::Bedwars => bedwars_level(experience),
    }
}

/// Network level for a total amount of network experience.
///
/// Any negative amount is reported as level 1, the level every player starts at.
pub fn network_level(experience: f64) -> u64 {
    if experience < 0.0 {
        return 1;
    }

    // Operation order matters for values sitting exactly on a level boundary.
    (1.0 + NETWORK_REVERSE_PQ_PREFIX
        + (NETWORK_REVERSE_CONST + NETWORK_GROWTH_DIVIDES_2 * experience).sqrt())
    .floor() as u64
}

/// Bed Wars level for a total amount of Bed Wars experience.
///
/// Levels are never negative; an amount below zero saturates to level 0.
pub fn bedwars_level(experience: f64) -> u64 {
    let per_prestige = XP_PER_PRESTIGE as f64;
    let prestiges = (experience / per_prestige).floor();
    let mut level = prestiges * LEVELS_PER_PRESTIGE as f64;
    let mut remaining = experience - prestiges * per_prestige;

    for easy in 1..=EASY_LEVELS {
        let cost = bedwars_experience_for_level(easy) as f64;
        if remaining < cost {
            break;
        }
        level += 1.0;
        remaining -= cost;
    }

    (level + (remaining / FLAT_LEVEL_XP as f64).floor()) as u64
}

/// Number of completed Bed Wars prestiges.
pub fn bedwars_prestige(experience: f64) -> u64 {
    (experience / XP_PER_PRESTIGE as f64).floor() as u64
}

/// Experience needed to complete Bed Wars `level`.
pub fn bedwars_experience_for_level(level: u64) -> u64 {
    match level_respecting_prestige(level) {
        0 => 0,
        1 => 500,
        2 => 1_000,
        3 => 2_000,
        4 => 3_500,
        _ => FLAT_LEVEL_XP,
    }
}

/// Position of `level` inside its prestige.
///
/// Below the highest prestige this is the level modulo 100. Above it the level is only
/// shifted down by one thousand, so level 1101 folds to 101 rather than to 1.
fn level_respecting_prestige(level: u64) -> u64 {
    let highest = HIGHEST_PRESTIGE * LEVELS_PER_PRESTIGE;
    if level > highest {
        level - highest
    } else {
        level % LEVELS_PER_PRESTIGE
    }
}
