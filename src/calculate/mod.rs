//! Stat derivation engine.
//!
//! Pure functions that turn a raw [`WeaponStatRecord`] into comparable numbers:
//! - Pellet and body-part adjusted damage
//! - Magazine size parsed from free-form ammo text
//! - Combined recoil magnitude
//! - Damage in one second (DIOS), capped by magazine size
//!
//! Every function returns `None` for insufficient data and never NaN.

pub mod card;
pub mod compare;
pub mod objectives;
pub mod ranking;

pub use card::{weapon_card, CardRow, WeaponCard};
pub use compare::{compare, compare_records, CompareOptions, CompareSide};
pub use objectives::{Objective, ObjectiveRegistry, ScoreContext};
pub use ranking::{leaderboard, rank, Leaderboard, LeaderboardEntry};

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::{BodyPart, StatField, StatValue, WeaponStatRecord};

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Which per-projectile damage figure to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageField {
    Max,
    Min,
}

impl DamageField {
    pub fn stat_field(&self) -> StatField {
        match self {
            DamageField::Max => StatField::DamageMax,
            DamageField::Min => StatField::DamageMin,
        }
    }
}

/// Coerce a raw value to a finite number.
///
/// Missing values, blank or non-numeric text, and non-finite numbers all
/// yield `None`.
pub fn numeric_or_null(value: Option<&StatValue>) -> Option<f64> {
    let n = match value? {
        StatValue::Number(n) => *n,
        StatValue::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
    };
    n.is_finite().then_some(n)
}

/// Extract the magazine size from ammo text.
///
/// The first run of ASCII digits wins ("30 Rounds" is 30). The literal `inf`
/// (any case) is an unbounded magazine.
pub fn parse_magazine_size(ammo: Option<&StatValue>) -> Option<f64> {
    match ammo? {
        StatValue::Number(n) if n.is_finite() => Some(n.abs().trunc()),
        StatValue::Number(_) => None,
        StatValue::Text(text) => {
            let text = text.trim();
            if text.eq_ignore_ascii_case("inf") {
                return Some(f64::INFINITY);
            }
            DIGITS
                .find(text)
                .and_then(|m| m.as_str().parse::<f64>().ok())
        }
    }
}

/// Pellets fired per shot. Missing or zero counts as one.
pub fn pellet_count(stats: &WeaponStatRecord) -> f64 {
    match numeric_or_null(stats.pellet_count.as_ref()) {
        Some(p) if p != 0.0 => p,
        _ => 1.0,
    }
}

/// Damage multiplier for a body part. Missing or zero counts as one.
pub fn body_part_multiplier(stats: &WeaponStatRecord, body_part: BodyPart) -> f64 {
    let Some(field) = body_part.multiplier_field() else {
        return 1.0;
    };
    match numeric_or_null(stats.get(field)) {
        Some(m) if m != 0.0 => m,
        _ => 1.0,
    }
}

/// Pellet override for the shotgun minimum-damage rule.
///
/// Shotgun minimum damage is already a per-shot figure, so its pellet
/// contribution is pinned to one when the rule is enabled.
pub fn shotgun_pellet_override(field: DamageField, is_shotgun: bool, enabled: bool) -> Option<f64> {
    (enabled && is_shotgun && field == DamageField::Min).then_some(1.0)
}

/// Total damage of one shot on a body part.
///
/// `base × pellets`, then scaled by the body-part multiplier unless the
/// body part is [`BodyPart::Base`].
pub fn damage_for_body_part(
    stats: &WeaponStatRecord,
    field: DamageField,
    body_part: BodyPart,
    pellet_override: Option<f64>,
) -> Option<f64> {
    let base = numeric_or_null(stats.get(field.stat_field()))?;
    let pellets = match pellet_override {
        Some(p) => p,
        None => pellet_count(stats),
    };
    let total = base * pellets;

    if body_part == BodyPart::Base {
        return Some(total);
    }
    Some(total * body_part_multiplier(stats, body_part))
}

/// Damage of a single trigger pull, `pellets × (base × multiplier)`.
pub fn damage_per_shot(
    stats: &WeaponStatRecord,
    field: DamageField,
    body_part: BodyPart,
    pellet_override: Option<f64>,
) -> Option<f64> {
    let base = numeric_or_null(stats.get(field.stat_field()))?;
    let pellets = match pellet_override {
        Some(p) => p,
        None => pellet_count(stats),
    };
    Some(pellets * (base * body_part_multiplier(stats, body_part)))
}

/// Euclidean norm of vertical and horizontal recoil.
pub fn combined_recoil(stats: &WeaponStatRecord) -> Option<f64> {
    let vertical = numeric_or_null(stats.vertical_recoil.as_ref())?;
    let horizontal = numeric_or_null(stats.horizontal_recoil.as_ref())?;
    Some(vertical.hypot(horizontal))
}

/// Breakdown of the damage-in-one-second metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiosDetails {
    /// Damage dealt in the first second
    pub value: f64,

    /// Damage of one shot on the selected body part
    pub per_shot_damage: f64,

    /// Firerate converted to shots per second
    pub shots_per_second: f64,

    /// Shots actually fired in the first second, after the magazine cap
    pub effective_shots: f64,

    /// Parsed magazine size (infinite for unbounded magazines)
    pub magazine_size: Option<f64>,
}

/// Damage dealt in the first second of sustained fire.
///
/// Returns `None` when firerate or maximum damage is missing. A finite
/// magazine caps the shot count; unbounded or unparseable magazines do not.
pub fn damage_in_one_second(stats: &WeaponStatRecord, body_part: BodyPart) -> Option<DiosDetails> {
    let rpm = numeric_or_null(stats.firerate.as_ref())?;
    damage_for_body_part(stats, DamageField::Max, BodyPart::Base, None)?;

    let shots_per_second = rpm / 60.0;
    let per_shot_damage = damage_for_body_part(stats, DamageField::Max, body_part, None)?;
    let magazine_size = parse_magazine_size(stats.ammo.as_ref());

    let effective_shots = match magazine_size {
        Some(mag) if mag.is_finite() => mag.min(shots_per_second),
        _ => shots_per_second,
    };

    Some(DiosDetails {
        value: per_shot_damage * effective_shots,
        per_shot_damage,
        shots_per_second,
        effective_shots,
        magazine_size,
    })
}
