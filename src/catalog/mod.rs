//! Immutable weapon lookup tables.
//!
//! Built once from a [`Dataset`] and shared by reference with scoring,
//! ranking and comparison. Holds:
//! - Weapon names in category display order
//! - Weapon to category and weapon to type tag
//! - Weapon to raw stat record
//! - Shotgun membership by category

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculate::numeric_or_null;
use crate::models::{Dataset, WeaponCategory, WeaponStatRecord};

/// Category whose weapons get per-name type overrides.
pub const SPECIAL_CATEGORY: &str = "Special";

/// Default name of the category that marks a weapon as a shotgun.
pub const DEFAULT_SHOTGUN_CATEGORY: &str = "Shotguns";

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("weapon '{weapon}' is listed in both '{first}' and '{second}'")]
    DuplicateWeapon {
        weapon: String,
        first: String,
        second: String,
    },
}

/// Criteria for narrowing the weapon list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeaponFilter {
    /// Case-insensitive substring of the weapon name
    pub search: Option<String>,

    /// Exact type tag
    pub weapon_type: Option<String>,

    /// Drop weapons heavier than this. Weapons without a weight are kept.
    pub max_weight: Option<f64>,
}

impl WeaponFilter {
    pub fn matches(&self, name: &str, weapon_type: &str, stats: &WeaponStatRecord) -> bool {
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() && !name.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }

        if let Some(wanted) = self.weapon_type.as_deref().filter(|t| !t.is_empty()) {
            if wanted != weapon_type {
                return false;
            }
        }

        if let Some(max) = self.max_weight {
            if let Some(weight) = numeric_or_null(stats.weight.as_ref()) {
                if weight > max {
                    return false;
                }
            }
        }

        true
    }
}

/// Weapons of one category, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    #[serde(rename = "type")]
    pub weapon_type: String,
    pub weapons: Vec<String>,
}

/// Lookup tables over one dataset.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<WeaponCategory>,
    order: Vec<String>,
    stats: HashMap<String, WeaponStatRecord>,
    category_index: HashMap<String, usize>,
    types: HashMap<String, String>,
    shotgun_category: String,
}

impl Catalog {
    /// Build the tables from a dataset.
    ///
    /// Weapons listed in a category without stats get an all-null record.
    /// Stats for weapons outside every category are dropped.
    pub fn from_dataset(dataset: Dataset, shotgun_category: &str) -> Result<Self, CatalogError> {
        let Dataset {
            categories,
            weapons: mut raw_stats,
        } = dataset;

        let mut order = Vec::new();
        let mut stats = HashMap::new();
        let mut category_index: HashMap<String, usize> = HashMap::new();
        let mut types = HashMap::new();

        for (idx, category) in categories.iter().enumerate() {
            for name in &category.weapons {
                if let Some(&previous) = category_index.get(name) {
                    return Err(CatalogError::DuplicateWeapon {
                        weapon: name.clone(),
                        first: categories[previous].name.clone(),
                        second: category.name.clone(),
                    });
                }

                category_index.insert(name.clone(), idx);
                types.insert(name.clone(), resolve_weapon_type(category, name));
                stats.insert(name.clone(), raw_stats.remove(name).unwrap_or_default());
                order.push(name.clone());
            }
        }

        let mut orphans: Vec<_> = raw_stats.into_keys().collect();
        orphans.sort();
        for name in orphans {
            warn!("Ignoring stats for '{}': not listed in any category", name);
        }

        debug!(
            "Catalog built: {} weapons in {} categories",
            order.len(),
            categories.len()
        );

        Ok(Self {
            categories,
            order,
            stats,
            category_index,
            types,
            shotgun_category: shotgun_category.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.category_index.contains_key(name)
    }

    /// All weapon names in category display order.
    pub fn weapons(&self) -> &[String] {
        &self.order
    }

    pub fn categories(&self) -> &[WeaponCategory] {
        &self.categories
    }

    pub fn stats(&self, name: &str) -> Option<&WeaponStatRecord> {
        self.stats.get(name)
    }

    pub fn category_of(&self, name: &str) -> Option<&WeaponCategory> {
        self.category_index
            .get(name)
            .map(|&idx| &self.categories[idx])
    }

    pub fn weapon_type(&self, name: &str) -> Option<&str> {
        self.types.get(name).map(String::as_str)
    }

    pub fn shotgun_category(&self) -> &str {
        &self.shotgun_category
    }

    /// Shotgun identity comes from category membership, not pellet count.
    pub fn is_shotgun(&self, name: &str) -> bool {
        self.category_of(name)
            .is_some_and(|c| c.name == self.shotgun_category)
    }

    /// Distinct type tags in first-seen order.
    pub fn weapon_types(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for name in &self.order {
            if let Some(t) = self.weapon_type(name) {
                if !seen.contains(&t) {
                    seen.push(t);
                }
            }
        }
        seen
    }

    /// Weapon names matching a filter, in catalog order.
    pub fn filter(&self, filter: &WeaponFilter) -> Vec<String> {
        self.order
            .iter()
            .filter(|name| {
                let weapon_type = self.weapon_type(name).unwrap_or_default();
                match self.stats(name) {
                    Some(stats) => filter.matches(name, weapon_type, stats),
                    None => false,
                }
            })
            .cloned()
            .collect()
    }

    /// Group names by category in category order. Empty groups are omitted.
    pub fn group_by_category(&self, names: &[String]) -> Vec<CategoryGroup> {
        self.categories
            .iter()
            .filter_map(|category| {
                let weapons: Vec<String> = category
                    .weapons
                    .iter()
                    .filter(|w| names.contains(w))
                    .cloned()
                    .collect();
                if weapons.is_empty() {
                    return None;
                }
                Some(CategoryGroup {
                    category: category.name.clone(),
                    weapon_type: category.weapon_type.clone(),
                    weapons,
                })
            })
            .collect()
    }

    /// Every weapon name, alphabetically.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names = self.order.clone();
        names.sort();
        names
    }
}

/// Type tag of a weapon within its category.
///
/// Weapons in the special category take their type from their name:
/// pistols are `pistol` and muskets are `rifle`.
pub fn resolve_weapon_type(category: &WeaponCategory, name: &str) -> String {
    if category.name == SPECIAL_CATEGORY {
        let lower = name.to_lowercase();
        if lower.contains("pistol") {
            return "pistol".to_string();
        }
        if lower.contains("musket") {
            return "rifle".to_string();
        }
    }
    category.weapon_type.clone()
}

#[cfg(test)]
pub(crate) fn sample_dataset() -> Dataset {
    serde_json::from_value(serde_json::json!({
        "categories": [
            {"name": "Assault Rifles", "type": "rifle", "weapons": ["AK", "M4"]},
            {"name": "Shotguns", "type": "shotgun", "weapons": ["Pump", "Auto"]},
            {"name": "Special", "type": "special", "weapons": ["Flare Pistol", "Old Musket", "Crossbow"]}
        ],
        "weapons": {
            "AK": {
                "damage_max": 30, "damage_min": 20, "firerate": 600,
                "ads_accuracy": 80, "hip_fire_accuracy": 40,
                "vertical_recoil": 3, "horizontal_recoil": 4,
                "head_multiplier": 2, "reload_speed_partial": 2.5,
                "weight": 4, "ammo": "30 Rounds"
            },
            "M4": {
                "damage_max": 25, "damage_min": 18, "firerate": 800,
                "ads_accuracy": 85, "hip_fire_accuracy": 45,
                "vertical_recoil": 2, "horizontal_recoil": 2,
                "head_multiplier": 1.5, "reload_speed_partial": 2.0,
                "weight": 3, "ammo": "30 Rounds"
            },
            "Pump": {
                "damage_max": 20, "damage_min": 10, "pellet_count": 8,
                "firerate": 60, "weight": 5, "ammo": "6 shells"
            },
            "Auto": {
                "damage_max": 15, "damage_min": 8, "pellet_count": 6,
                "firerate": 240, "weight": 6, "ammo": "8 shells"
            },
            "Flare Pistol": {
                "damage_max": 50, "firerate": 30, "weight": 1,
                "ammo": "1 (single action)"
            },
            "Old Musket": {"damage_max": 90, "weight": 7, "ammo": "1"},
            "Ghost": {"damage_max": 999}
        }
    }))
    .unwrap()
}

#[cfg(test)]
pub(crate) fn sample_catalog() -> Catalog {
    Catalog::from_dataset(sample_dataset(), DEFAULT_SHOTGUN_CATEGORY).unwrap()
}
