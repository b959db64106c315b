//! Raw weapon stat records and the canonical stat layout.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Polarity;

/// A raw stat value as authored in the dataset.
///
/// Numbers and strings are both accepted; strings are kept verbatim for
/// display and coerced only when a numeric value is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for StatValue {
    fn from(n: f64) -> Self {
        StatValue::Number(n)
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        StatValue::Text(s.to_string())
    }
}

/// Raw stat fields for one weapon.
///
/// A field missing from the dataset is `None`. Defaults (pellet count 1,
/// multiplier 1) are applied by the derivation functions, never here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponStatRecord {
    pub damage_max: Option<StatValue>,
    pub damage_min: Option<StatValue>,
    pub pellet_count: Option<StatValue>,
    pub damage_falloff_start: Option<StatValue>,
    pub max_bullet_range: Option<StatValue>,
    pub firerate: Option<StatValue>,
    pub hip_fire_accuracy: Option<StatValue>,
    pub ads_accuracy: Option<StatValue>,
    pub vertical_recoil: Option<StatValue>,
    pub horizontal_recoil: Option<StatValue>,
    pub head_multiplier: Option<StatValue>,
    pub torso_multiplier: Option<StatValue>,
    pub limb_multiplier: Option<StatValue>,
    pub reload_speed_partial: Option<StatValue>,
    pub reload_speed_empty: Option<StatValue>,
    pub equip_speed: Option<StatValue>,
    pub aim_speed: Option<StatValue>,
    pub weight: Option<StatValue>,
    pub ammo: Option<StatValue>,
}

impl WeaponStatRecord {
    /// Look up a field by its typed key.
    pub fn get(&self, field: StatField) -> Option<&StatValue> {
        match field {
            StatField::DamageMax => self.damage_max.as_ref(),
            StatField::DamageMin => self.damage_min.as_ref(),
            StatField::PelletCount => self.pellet_count.as_ref(),
            StatField::DamageFalloffStart => self.damage_falloff_start.as_ref(),
            StatField::MaxBulletRange => self.max_bullet_range.as_ref(),
            StatField::Firerate => self.firerate.as_ref(),
            StatField::HipFireAccuracy => self.hip_fire_accuracy.as_ref(),
            StatField::AdsAccuracy => self.ads_accuracy.as_ref(),
            StatField::VerticalRecoil => self.vertical_recoil.as_ref(),
            StatField::HorizontalRecoil => self.horizontal_recoil.as_ref(),
            StatField::HeadMultiplier => self.head_multiplier.as_ref(),
            StatField::TorsoMultiplier => self.torso_multiplier.as_ref(),
            StatField::LimbMultiplier => self.limb_multiplier.as_ref(),
            StatField::ReloadSpeedPartial => self.reload_speed_partial.as_ref(),
            StatField::ReloadSpeedEmpty => self.reload_speed_empty.as_ref(),
            StatField::EquipSpeed => self.equip_speed.as_ref(),
            StatField::AimSpeed => self.aim_speed.as_ref(),
            StatField::Weight => self.weight.as_ref(),
            StatField::Ammo => self.ammo.as_ref(),
        }
    }
}

/// Typed key for every field of [`WeaponStatRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatField {
    DamageMax,
    DamageMin,
    PelletCount,
    DamageFalloffStart,
    MaxBulletRange,
    Firerate,
    HipFireAccuracy,
    AdsAccuracy,
    VerticalRecoil,
    HorizontalRecoil,
    HeadMultiplier,
    TorsoMultiplier,
    LimbMultiplier,
    ReloadSpeedPartial,
    ReloadSpeedEmpty,
    EquipSpeed,
    AimSpeed,
    Weight,
    Ammo,
}

impl StatField {
    /// Dataset key of this field.
    pub fn key(&self) -> &'static str {
        match self {
            StatField::DamageMax => "damage_max",
            StatField::DamageMin => "damage_min",
            StatField::PelletCount => "pellet_count",
            StatField::DamageFalloffStart => "damage_falloff_start",
            StatField::MaxBulletRange => "max_bullet_range",
            StatField::Firerate => "firerate",
            StatField::HipFireAccuracy => "hip_fire_accuracy",
            StatField::AdsAccuracy => "ads_accuracy",
            StatField::VerticalRecoil => "vertical_recoil",
            StatField::HorizontalRecoil => "horizontal_recoil",
            StatField::HeadMultiplier => "head_multiplier",
            StatField::TorsoMultiplier => "torso_multiplier",
            StatField::LimbMultiplier => "limb_multiplier",
            StatField::ReloadSpeedPartial => "reload_speed_partial",
            StatField::ReloadSpeedEmpty => "reload_speed_empty",
            StatField::EquipSpeed => "equip_speed",
            StatField::AimSpeed => "aim_speed",
            StatField::Weight => "weight",
            StatField::Ammo => "ammo",
        }
    }

    /// Human-readable label used by cards and comparisons.
    pub fn label(&self) -> &'static str {
        match self {
            StatField::DamageMax => "damage max",
            StatField::DamageMin => "damage min",
            StatField::PelletCount => "pellet count",
            StatField::DamageFalloffStart => "damage fall-off start",
            StatField::MaxBulletRange => "max bullet range",
            StatField::Firerate => "firerate (rpm)",
            StatField::HipFireAccuracy => "hip fire accuracy",
            StatField::AdsAccuracy => "ads accuracy",
            StatField::VerticalRecoil => "vertical recoil",
            StatField::HorizontalRecoil => "horizontal recoil",
            StatField::HeadMultiplier => "head multiplier",
            StatField::TorsoMultiplier => "torso multiplier",
            StatField::LimbMultiplier => "limb multiplier",
            StatField::ReloadSpeedPartial => "reload speed (with ammo)",
            StatField::ReloadSpeedEmpty => "reload speed (empty)",
            StatField::EquipSpeed => "equip speed",
            StatField::AimSpeed => "aim speed",
            StatField::Weight => "weight",
            StatField::Ammo => "ammo",
        }
    }

    /// Which direction counts as better when two weapons are compared.
    pub fn polarity(&self) -> Polarity {
        match self {
            StatField::VerticalRecoil
            | StatField::HorizontalRecoil
            | StatField::ReloadSpeedPartial
            | StatField::ReloadSpeedEmpty
            | StatField::EquipSpeed
            | StatField::AimSpeed
            | StatField::Weight => Polarity::Ascending,
            _ => Polarity::Descending,
        }
    }

    /// True for the per-projectile damage fields scaled by pellet count.
    pub fn is_damage(&self) -> bool {
        matches!(self, StatField::DamageMax | StatField::DamageMin)
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One slot of the display layout: a stat field or a group separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatSlot {
    Field(StatField),
    Separator(&'static str),
}

/// Canonical display order of stat fields, grouped by separators.
pub const STAT_LAYOUT: &[StatSlot] = &[
    StatSlot::Field(StatField::DamageMax),
    StatSlot::Field(StatField::DamageMin),
    StatSlot::Field(StatField::PelletCount),
    StatSlot::Separator("damage"),
    StatSlot::Field(StatField::DamageFalloffStart),
    StatSlot::Field(StatField::MaxBulletRange),
    StatSlot::Separator("range"),
    StatSlot::Field(StatField::Firerate),
    StatSlot::Separator("firerate"),
    StatSlot::Field(StatField::HipFireAccuracy),
    StatSlot::Field(StatField::AdsAccuracy),
    StatSlot::Separator("accuracy"),
    StatSlot::Field(StatField::VerticalRecoil),
    StatSlot::Field(StatField::HorizontalRecoil),
    StatSlot::Separator("recoil"),
    StatSlot::Field(StatField::HeadMultiplier),
    StatSlot::Field(StatField::TorsoMultiplier),
    StatSlot::Field(StatField::LimbMultiplier),
    StatSlot::Separator("multipliers"),
    StatSlot::Field(StatField::ReloadSpeedPartial),
    StatSlot::Field(StatField::ReloadSpeedEmpty),
    StatSlot::Separator("reload"),
    StatSlot::Field(StatField::EquipSpeed),
    StatSlot::Field(StatField::AimSpeed),
    StatSlot::Separator("handling"),
    StatSlot::Field(StatField::Weight),
    StatSlot::Field(StatField::Ammo),
];
