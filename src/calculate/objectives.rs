//! Objective registry.
//!
//! Maps each [`ObjectiveKind`] to a label, a sort polarity, a score function
//! and an optional display formatter.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{
    combined_recoil, damage_for_body_part, damage_in_one_second, damage_per_shot,
    numeric_or_null, parse_magazine_size, shotgun_pellet_override, DamageField,
};
use crate::models::{BodyPart, ObjectiveKind, Polarity, WeaponStatRecord};

/// Placeholder shown for missing values.
pub const PLACEHOLDER: &str = "—";

/// Per-weapon inputs a score function needs beyond the stat record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreContext {
    pub body_part: BodyPart,
    pub is_shotgun: bool,
    /// Pin shotgun minimum damage to a single pellet
    pub single_pellet_min_damage: bool,
}

impl ScoreContext {
    pub fn new(body_part: BodyPart, is_shotgun: bool) -> Self {
        Self {
            body_part,
            is_shotgun,
            single_pellet_min_damage: true,
        }
    }
}

pub type ScoreFn = fn(&WeaponStatRecord, &ScoreContext) -> Option<f64>;
pub type FormatFn = fn(f64, &WeaponStatRecord, &ScoreContext) -> String;

/// A rankable objective.
#[derive(Clone)]
pub struct Objective {
    pub kind: ObjectiveKind,
    pub label: String,
    pub polarity: Polarity,
    score: ScoreFn,
    format: Option<FormatFn>,
}

impl std::fmt::Debug for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Objective")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("polarity", &self.polarity)
            .field("has_formatter", &self.format.is_some())
            .finish()
    }
}

impl Objective {
    pub fn new(kind: ObjectiveKind, label: &str, polarity: Polarity, score: ScoreFn) -> Self {
        Self {
            kind,
            label: label.to_string(),
            polarity,
            score,
            format: None,
        }
    }

    pub fn with_formatter(mut self, format: FormatFn) -> Self {
        self.format = Some(format);
        self
    }

    /// Score a weapon. `None` excludes it from rankings.
    pub fn score(&self, stats: &WeaponStatRecord, ctx: &ScoreContext) -> Option<f64> {
        (self.score)(stats, ctx).filter(|s| !s.is_nan())
    }

    /// Display text for a score.
    pub fn format(&self, score: f64, stats: &WeaponStatRecord, ctx: &ScoreContext) -> String {
        match self.format {
            Some(format) => format(score, stats, ctx),
            None => format_number(score),
        }
    }

    pub fn has_formatter(&self) -> bool {
        self.format.is_some()
    }

    pub fn uses_body_part(&self) -> bool {
        self.kind.uses_body_part()
    }

    pub fn summary(&self) -> ObjectiveSummary {
        ObjectiveSummary {
            key: self.kind.key().to_string(),
            label: self.label.clone(),
            polarity: self.polarity,
            uses_body_part: self.uses_body_part(),
        }
    }
}

/// Serializable description of an objective.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveSummary {
    pub key: String,
    pub label: String,
    pub polarity: Polarity,
    pub uses_body_part: bool,
}

/// Registered objectives, iterated in [`ObjectiveKind`] order.
#[derive(Debug, Clone)]
pub struct ObjectiveRegistry {
    objectives: BTreeMap<ObjectiveKind, Objective>,
    single_pellet_min_damage: bool,
}

impl Default for ObjectiveRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ObjectiveRegistry {
    /// A registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            objectives: BTreeMap::new(),
            single_pellet_min_damage: true,
        }
    }

    /// The full built-in objective set.
    pub fn standard() -> Self {
        use ObjectiveKind as K;
        use Polarity::{Ascending as Asc, Descending as Desc};

        let mut registry = Self::empty();
        registry.register(
            Objective::new(K::DamageMax, "Damage (max)", Desc, |s, ctx| {
                damage_for_body_part(s, DamageField::Max, ctx.body_part, None)
            })
            .with_formatter(format_rounded),
        );
        registry.register(
            Objective::new(K::DamageMin, "Damage (min)", Desc, |s, ctx| {
                let pellets = shotgun_pellet_override(
                    DamageField::Min,
                    ctx.is_shotgun,
                    ctx.single_pellet_min_damage,
                );
                damage_for_body_part(s, DamageField::Min, ctx.body_part, pellets)
            })
            .with_formatter(format_rounded),
        );
        registry.register(
            Objective::new(K::DamagePerShot, "Damage per 1-shot", Desc, |s, ctx| {
                damage_per_shot(s, DamageField::Max, ctx.body_part, None)
            })
            .with_formatter(format_rounded),
        );
        registry.register(
            Objective::new(K::Firerate, "Firerate", Desc, |s, _| {
                numeric_or_null(s.firerate.as_ref())
            })
            .with_formatter(|v, _, _| format!("{} RPM", format_number(v))),
        );
        registry.register(
            Objective::new(K::Dps, "DIOS", Desc, |s, ctx| {
                damage_in_one_second(s, ctx.body_part).map(|d| d.value)
            })
            .with_formatter(format_dios),
        );
        registry.register(
            Objective::new(K::AdsAccuracy, "ADS accuracy", Desc, |s, _| {
                numeric_or_null(s.ads_accuracy.as_ref())
            })
            .with_formatter(format_plain),
        );
        registry.register(
            Objective::new(K::HipAccuracy, "Hip fire accuracy", Desc, |s, _| {
                numeric_or_null(s.hip_fire_accuracy.as_ref())
            })
            .with_formatter(format_plain),
        );
        registry.register(Objective::new(K::Recoil, "Recoil", Asc, |s, _| {
            combined_recoil(s)
        }));
        registry.register(
            Objective::new(K::ReloadPartial, "Reload (with ammo)", Asc, |s, _| {
                numeric_or_null(s.reload_speed_partial.as_ref())
            })
            .with_formatter(format_seconds),
        );
        registry.register(
            Objective::new(K::ReloadEmpty, "Reload (empty)", Asc, |s, _| {
                numeric_or_null(s.reload_speed_empty.as_ref())
            })
            .with_formatter(format_seconds),
        );
        registry.register(
            Objective::new(K::Equip, "Equip speed", Asc, |s, _| {
                numeric_or_null(s.equip_speed.as_ref())
            })
            .with_formatter(format_seconds),
        );
        registry.register(
            Objective::new(K::Aim, "Aim speed", Asc, |s, _| {
                numeric_or_null(s.aim_speed.as_ref())
            })
            .with_formatter(format_seconds),
        );
        registry.register(
            Objective::new(K::Weight, "Weight", Asc, |s, _| {
                numeric_or_null(s.weight.as_ref())
            })
            .with_formatter(format_plain),
        );
        registry.register(
            Objective::new(K::Ammo, "Mag size", Desc, |s, _| {
                parse_magazine_size(s.ammo.as_ref())
            })
            .with_formatter(|v, _, _| format_magazine(Some(v))),
        );
        registry
    }

    /// Toggle the shotgun minimum-damage pellet rule for rankings.
    pub fn with_single_pellet_min_damage(mut self, enabled: bool) -> Self {
        self.single_pellet_min_damage = enabled;
        self
    }

    /// Register an objective, replacing any previous one of the same kind.
    pub fn register(&mut self, objective: Objective) {
        self.objectives.insert(objective.kind, objective);
    }

    pub fn get(&self, kind: ObjectiveKind) -> Option<&Objective> {
        self.objectives.get(&kind)
    }

    /// Resolve a string key. Unknown or unregistered keys yield `None`.
    pub fn resolve(&self, key: &str) -> Option<&Objective> {
        ObjectiveKind::from_key(key).and_then(|kind| self.get(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Objective> {
        self.objectives.values()
    }

    pub fn len(&self) -> usize {
        self.objectives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty()
    }

    /// Scoring context for one weapon under this registry's rules.
    pub fn context(&self, body_part: BodyPart, is_shotgun: bool) -> ScoreContext {
        ScoreContext {
            body_part,
            is_shotgun,
            single_pellet_min_damage: self.single_pellet_min_damage,
        }
    }
}

/// Integers print bare, fractional values to two decimals.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Group an integer with thousands separators ("12,345").
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Magazine size text: the count, `∞` for unbounded, placeholder if unknown.
pub fn format_magazine(magazine: Option<f64>) -> String {
    match magazine {
        Some(m) if m.is_infinite() => "∞".to_string(),
        Some(m) => format_number(m),
        None => PLACEHOLDER.to_string(),
    }
}

fn format_rounded(value: f64, _: &WeaponStatRecord, _: &ScoreContext) -> String {
    format!("{}", value.round())
}

fn format_plain(value: f64, _: &WeaponStatRecord, _: &ScoreContext) -> String {
    format!("{}", value)
}

fn format_seconds(value: f64, _: &WeaponStatRecord, _: &ScoreContext) -> String {
    format!("{}s", value)
}

fn format_dios(_: f64, stats: &WeaponStatRecord, ctx: &ScoreContext) -> String {
    let Some(details) = damage_in_one_second(stats, ctx.body_part) else {
        return PLACEHOLDER.to_string();
    };
    let shots = (details.effective_shots * 100.0).round() / 100.0;
    format!(
        "{} DIOS · {} shots/s · mag {}",
        group_thousands(details.value.round() as i64),
        shots,
        format_magazine(details.magazine_size)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ScoreContext {
        ScoreContext::new(BodyPart::Base, false)
    }

    #[test]
    fn test_standard_registry_has_all_kinds() {
        let registry = ObjectiveRegistry::standard();
        assert_eq!(registry.len(), ObjectiveKind::ALL.len());
        for kind in ObjectiveKind::ALL {
            assert!(registry.get(kind).is_some(), "missing {}", kind);
        }
    }

    #[test]
    fn test_polarities() {
        let registry = ObjectiveRegistry::standard();
        let asc = [
            ObjectiveKind::Recoil,
            ObjectiveKind::ReloadPartial,
            ObjectiveKind::ReloadEmpty,
            ObjectiveKind::Equip,
            ObjectiveKind::Aim,
            ObjectiveKind::Weight,
        ];
        for objective in registry.iter() {
            let expected = if asc.contains(&objective.kind) {
                Polarity::Ascending
            } else {
                Polarity::Descending
            };
            assert_eq!(objective.polarity, expected, "{}", objective.kind);
        }
    }

    #[test]
    fn test_resolve_unknown_key() {
        let registry = ObjectiveRegistry::standard();
        assert!(registry.resolve("dps").is_some());
        assert!(registry.resolve("accuracy").is_some());
        assert!(registry.resolve("luck").is_none());
        assert!(ObjectiveRegistry::empty().resolve("dps").is_none());
    }

    #[test]
    fn test_null_input_yields_null_score() {
        let registry = ObjectiveRegistry::standard();
        let empty = WeaponStatRecord::default();
        for objective in registry.iter() {
            assert_eq!(objective.score(&empty, &ctx()), None, "{}", objective.kind);
        }
    }

    #[test]
    fn test_damage_min_shotgun_rule() {
        let registry = ObjectiveRegistry::standard();
        let stats = WeaponStatRecord {
            damage_min: Some(10.0.into()),
            pellet_count: Some(8.0.into()),
            ..Default::default()
        };
        let objective = registry.get(ObjectiveKind::DamageMin).unwrap();

        let shotgun = registry.context(BodyPart::Base, true);
        assert_eq!(objective.score(&stats, &shotgun), Some(10.0));

        let other = registry.context(BodyPart::Base, false);
        assert_eq!(objective.score(&stats, &other), Some(80.0));

        let relaxed = ObjectiveRegistry::standard().with_single_pellet_min_damage(false);
        let shotgun = relaxed.context(BodyPart::Base, true);
        assert_eq!(objective.score(&stats, &shotgun), Some(80.0));
    }

    #[test]
    fn test_register_replaces_kind() {
        let mut registry = ObjectiveRegistry::standard();
        registry.register(Objective::new(
            ObjectiveKind::Weight,
            "Heft",
            Polarity::Descending,
            |s, _| numeric_or_null(s.weight.as_ref()),
        ));

        let weight = registry.get(ObjectiveKind::Weight).unwrap();
        assert_eq!(weight.label, "Heft");
        assert!(!weight.has_formatter());
        assert_eq!(registry.len(), ObjectiveKind::ALL.len());
    }

    #[test]
    fn test_formatters() {
        let registry = ObjectiveRegistry::standard();
        let stats = WeaponStatRecord::default();
        let fmt = |kind: ObjectiveKind, v: f64| registry.get(kind).unwrap().format(v, &stats, &ctx());

        assert_eq!(fmt(ObjectiveKind::DamageMax, 159.6), "160");
        assert_eq!(fmt(ObjectiveKind::Firerate, 600.0), "600 RPM");
        assert_eq!(fmt(ObjectiveKind::ReloadEmpty, 2.5), "2.5s");
        assert_eq!(fmt(ObjectiveKind::AdsAccuracy, 87.0), "87");
        assert_eq!(fmt(ObjectiveKind::Recoil, 5.0), "5");
        assert_eq!(fmt(ObjectiveKind::Recoil, 3.0f64.hypot(3.0)), "4.24");
        assert_eq!(fmt(ObjectiveKind::Ammo, f64::INFINITY), "∞");
        assert_eq!(fmt(ObjectiveKind::Ammo, 30.0), "30");
    }

    #[test]
    fn test_dios_formatter() {
        let registry = ObjectiveRegistry::standard();
        let stats = WeaponStatRecord {
            firerate: Some(900.0.into()),
            damage_max: Some(110.0.into()),
            ammo: Some("45 rounds".into()),
            ..Default::default()
        };
        let dps = registry.get(ObjectiveKind::Dps).unwrap();
        let score = dps.score(&stats, &ctx()).unwrap();

        assert_eq!(score, 1650.0);
        assert_eq!(
            dps.format(score, &stats, &ctx()),
            "1,650 DIOS · 15 shots/s · mag 45"
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-4500), "-4,500");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(1.0 / 3.0), "0.33");
    }

    #[test]
    fn test_summary() {
        let registry = ObjectiveRegistry::standard();
        let summary = registry.get(ObjectiveKind::Dps).unwrap().summary();
        assert_eq!(summary.key, "dps");
        assert_eq!(summary.label, "DIOS");
        assert!(summary.uses_body_part);
    }
}
