//! Ranking objectives and ranked entries.

use serde::{Deserialize, Serialize};

/// Closed set of objectives a weapon list can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveKind {
    DamageMax,
    DamageMin,
    DamagePerShot,
    Firerate,
    /// Damage in one second
    Dps,
    AdsAccuracy,
    HipAccuracy,
    Recoil,
    ReloadPartial,
    ReloadEmpty,
    Equip,
    Aim,
    Weight,
    /// Magazine size
    Ammo,
}

impl ObjectiveKind {
    pub const ALL: [ObjectiveKind; 14] = [
        ObjectiveKind::DamageMax,
        ObjectiveKind::DamageMin,
        ObjectiveKind::DamagePerShot,
        ObjectiveKind::Firerate,
        ObjectiveKind::Dps,
        ObjectiveKind::AdsAccuracy,
        ObjectiveKind::HipAccuracy,
        ObjectiveKind::Recoil,
        ObjectiveKind::ReloadPartial,
        ObjectiveKind::ReloadEmpty,
        ObjectiveKind::Equip,
        ObjectiveKind::Aim,
        ObjectiveKind::Weight,
        ObjectiveKind::Ammo,
    ];

    /// Registry key of this objective.
    pub fn key(&self) -> &'static str {
        match self {
            ObjectiveKind::DamageMax => "damage_max",
            ObjectiveKind::DamageMin => "damage_min",
            ObjectiveKind::DamagePerShot => "damage_per_shot",
            ObjectiveKind::Firerate => "firerate",
            ObjectiveKind::Dps => "dps",
            ObjectiveKind::AdsAccuracy => "ads_accuracy",
            ObjectiveKind::HipAccuracy => "hip_accuracy",
            ObjectiveKind::Recoil => "recoil",
            ObjectiveKind::ReloadPartial => "reload_partial",
            ObjectiveKind::ReloadEmpty => "reload_empty",
            ObjectiveKind::Equip => "equip",
            ObjectiveKind::Aim => "aim",
            ObjectiveKind::Weight => "weight",
            ObjectiveKind::Ammo => "ammo",
        }
    }

    /// Resolve a registry key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        if key == "accuracy" {
            return Some(ObjectiveKind::HipAccuracy);
        }
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    /// True if the score depends on the selected body part.
    pub fn uses_body_part(&self) -> bool {
        matches!(
            self,
            ObjectiveKind::DamageMax
                | ObjectiveKind::DamageMin
                | ObjectiveKind::DamagePerShot
                | ObjectiveKind::Dps
        )
    }
}

impl std::fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A weapon and its score under one objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub score: f64,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}
