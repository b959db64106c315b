//! Weapon card rows for the card grid.

use serde::Serialize;

use super::objectives::PLACEHOLDER;
use super::{combined_recoil, damage_in_one_second, numeric_or_null, parse_magazine_size, pellet_count, DiosDetails};
use crate::catalog::Catalog;
use crate::models::{BodyPart, StatField, StatSlot, StatValue, WeaponStatRecord, STAT_LAYOUT};

/// One line of a weapon card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardRow {
    Stat {
        field: StatField,
        label: String,
        display: String,
    },
    Separator {
        group: String,
    },
}

/// Everything the card grid shows for one weapon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaponCard {
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub weapon_type: String,
    pub is_shotgun: bool,
    pub rows: Vec<CardRow>,
    pub dios: Option<DiosDetails>,
    pub recoil: Option<f64>,
    pub magazine_size: Option<f64>,
}

impl WeaponCard {
    pub fn stat(&self, field: StatField) -> Option<&str> {
        self.rows.iter().find_map(|row| match row {
            CardRow::Stat { field: f, display, .. } if *f == field => Some(display.as_str()),
            _ => None,
        })
    }
}

/// Build the card for a catalog weapon. `None` if the weapon is unknown.
pub fn weapon_card(catalog: &Catalog, name: &str) -> Option<WeaponCard> {
    let stats = catalog.stats(name)?;
    let category = catalog.category_of(name)?;
    let is_shotgun = catalog.is_shotgun(name);

    let rows = STAT_LAYOUT
        .iter()
        .filter_map(|slot| match *slot {
            StatSlot::Separator(group) => Some(CardRow::Separator {
                group: group.to_string(),
            }),
            StatSlot::Field(StatField::PelletCount) if !is_shotgun => None,
            StatSlot::Field(field) => Some(CardRow::Stat {
                field,
                label: field.label().to_string(),
                display: card_display(stats, field, is_shotgun),
            }),
        })
        .collect();

    Some(WeaponCard {
        name: name.to_string(),
        category: category.name.clone(),
        weapon_type: catalog.weapon_type(name).unwrap_or_default().to_string(),
        is_shotgun,
        rows,
        dios: damage_in_one_second(stats, BodyPart::Base),
        recoil: combined_recoil(stats),
        magazine_size: parse_magazine_size(stats.ammo.as_ref()),
    })
}

fn card_display(stats: &WeaponStatRecord, field: StatField, is_shotgun: bool) -> String {
    let raw = match stats.get(field) {
        Some(StatValue::Text(s)) if s.trim().is_empty() => None,
        other => other,
    };
    let Some(raw) = raw else {
        return PLACEHOLDER.to_string();
    };

    let pellets = pellet_count(stats);
    if is_shotgun && field.is_damage() && pellets > 1.0 {
        if let Some(value) = numeric_or_null(Some(raw)) {
            return format!("{} x {} = {}", raw, pellets, value * pellets);
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    #[test]
    fn test_unknown_weapon_has_no_card() {
        let catalog = sample_catalog();
        assert!(weapon_card(&catalog, "Ghost").is_none());
    }

    #[test]
    fn test_rifle_card() {
        let catalog = sample_catalog();
        let card = weapon_card(&catalog, "AK").unwrap();

        assert_eq!(card.category, "Assault Rifles");
        assert_eq!(card.weapon_type, "rifle");
        assert!(!card.is_shotgun);
        assert_eq!(card.stat(StatField::DamageMax), Some("30"));
        assert_eq!(card.stat(StatField::PelletCount), None);
        assert_eq!(card.stat(StatField::EquipSpeed), Some("—"));
        assert_eq!(card.stat(StatField::Ammo), Some("30 Rounds"));
        assert_eq!(card.recoil, Some(5.0));
        assert_eq!(card.magazine_size, Some(30.0));
        assert_eq!(card.dios.map(|d| d.value), Some(300.0));
    }

    #[test]
    fn test_card_keeps_separators() {
        let catalog = sample_catalog();
        let card = weapon_card(&catalog, "AK").unwrap();

        assert!(matches!(&card.rows[2], CardRow::Separator { group } if group == "damage"));
        let separators = card
            .rows
            .iter()
            .filter(|r| matches!(r, CardRow::Separator { .. }))
            .count();
        assert_eq!(separators, 8);
    }

    #[test]
    fn test_shotgun_card_shows_pellet_product() {
        let catalog = sample_catalog();
        let card = weapon_card(&catalog, "Pump").unwrap();

        assert!(card.is_shotgun);
        assert_eq!(card.stat(StatField::PelletCount), Some("8"));
        assert_eq!(card.stat(StatField::DamageMax), Some("20 x 8 = 160"));
        assert_eq!(card.stat(StatField::DamageMin), Some("10 x 8 = 80"));
    }

    #[test]
    fn test_special_weapon_card_type() {
        let catalog = sample_catalog();
        let card = weapon_card(&catalog, "Flare Pistol").unwrap();

        assert_eq!(card.category, "Special");
        assert_eq!(card.weapon_type, "pistol");
        assert_eq!(card.dios.map(|d| d.value), Some(25.0));
    }

    #[test]
    fn test_card_serializes_rows_with_kind() {
        let catalog = sample_catalog();
        let card = weapon_card(&catalog, "Crossbow").unwrap();
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["type"], "special");
        assert_eq!(json["rows"][0]["kind"], "stat");
        assert_eq!(json["rows"][0]["display"], "—");
        assert_eq!(json["rows"][2]["kind"], "separator");
        assert!(json["dios"].is_null());
    }
}
