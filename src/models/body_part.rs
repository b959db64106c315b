//! Hit locations used to scale damage.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::StatField;

/// Body part selected by the caller for damage-related scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BodyPart {
    /// Unscaled damage.
    #[default]
    Base,
    Head,
    Torso,
    Limb,
}

impl BodyPart {
    pub const ALL: [BodyPart; 4] = [
        BodyPart::Base,
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::Limb,
    ];

    /// Multiplier field for this body part, `None` for [`BodyPart::Base`].
    pub fn multiplier_field(&self) -> Option<StatField> {
        match self {
            BodyPart::Base => None,
            BodyPart::Head => Some(StatField::HeadMultiplier),
            BodyPart::Torso => Some(StatField::TorsoMultiplier),
            BodyPart::Limb => Some(StatField::LimbMultiplier),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPart::Base => "base",
            BodyPart::Head => "head",
            BodyPart::Torso => "torso",
            BodyPart::Limb => "limb",
        }
    }
}

impl std::fmt::Display for BodyPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string names no known body part.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown body part: {0} (expected base, head, torso or limb)")]
pub struct ParseBodyPartError(pub String);

impl FromStr for BodyPart {
    type Err = ParseBodyPartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "base" => Ok(BodyPart::Base),
            "head" => Ok(BodyPart::Head),
            "torso" => Ok(BodyPart::Torso),
            "limb" => Ok(BodyPart::Limb),
            _ => Err(ParseBodyPartError(s.to_string())),
        }
    }
}
