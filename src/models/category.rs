//! Weapon categories and the dataset document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::WeaponStatRecord;

/// A named group of weapons sharing a type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponCategory {
    pub name: String,

    /// Type tag used by type filtering ("rifle", "shotgun", ...)
    #[serde(rename = "type")]
    pub weapon_type: String,

    /// Weapon names in display order
    #[serde(default)]
    pub weapons: Vec<String>,
}

impl WeaponCategory {
    pub fn new(name: &str, weapon_type: &str, weapons: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            weapon_type: weapon_type.to_string(),
            weapons: weapons.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// The externally supplied weapon dataset as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Categories in display order
    #[serde(default)]
    pub categories: Vec<WeaponCategory>,

    /// Raw stats keyed by weapon name
    #[serde(default)]
    pub weapons: HashMap<String, WeaponStatRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatValue;

    #[test]
    fn test_dataset_deserialize() {
        let json = r#"{
            "categories": [
                {"name": "Shotguns", "type": "shotgun", "weapons": ["Pump"]}
            ],
            "weapons": {
                "Pump": {"damage_max": 20, "pellet_count": 8}
            }
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();

        assert_eq!(dataset.categories.len(), 1);
        assert_eq!(dataset.categories[0].weapon_type, "shotgun");
        assert_eq!(
            dataset.weapons["Pump"].pellet_count,
            Some(StatValue::Number(8.0))
        );
    }

    #[test]
    fn test_category_without_weapons() {
        let json = r#"{"name": "Launchers", "type": "launcher"}"#;
        let category: WeaponCategory = serde_json::from_str(json).unwrap();
        assert!(category.weapons.is_empty());
    }
}
