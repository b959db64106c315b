//! Pairwise weapon comparison.
//!
//! Walks the canonical stat layout and decides, field by field, which of two
//! weapons has the better value. Lower-is-better fields come from
//! [`StatField::polarity`], the same table rankings use.

use tracing::debug;

use super::objectives::PLACEHOLDER;
use super::{numeric_or_null, parse_magazine_size, pellet_count, shotgun_pellet_override, DamageField};
use crate::catalog::Catalog;
use crate::models::{
    Comparison, ComparisonRow, StatField, StatSlot, StatValue, WeaponStatRecord, Winner,
    STAT_LAYOUT,
};

/// Rules that vary between comparison and ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Pin shotgun minimum damage to a single pellet
    pub single_pellet_min_damage: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            single_pellet_min_damage: true,
        }
    }
}

/// One side of a comparison.
#[derive(Debug, Clone, Copy)]
pub struct CompareSide<'a> {
    pub name: &'a str,
    pub stats: &'a WeaponStatRecord,
    pub is_shotgun: bool,
}

impl<'a> CompareSide<'a> {
    pub fn new(name: &'a str, stats: &'a WeaponStatRecord, is_shotgun: bool) -> Self {
        Self {
            name,
            stats,
            is_shotgun,
        }
    }

    /// Pellets multiplying a damage field, after the shotgun rule.
    fn pellets_for(&self, field: StatField, options: &CompareOptions) -> f64 {
        let damage = match field {
            StatField::DamageMax => DamageField::Max,
            StatField::DamageMin => DamageField::Min,
            _ => return 1.0,
        };
        shotgun_pellet_override(damage, self.is_shotgun, options.single_pellet_min_damage)
            .unwrap_or_else(|| pellet_count(self.stats))
    }

    fn display(&self, field: StatField, options: &CompareOptions) -> String {
        let Some(raw) = non_blank(self.stats.get(field)) else {
            return PLACEHOLDER.to_string();
        };
        let pellets = self.pellets_for(field, options);
        if field.is_damage() && pellets > 1.0 {
            if let Some(value) = numeric_or_null(Some(raw)) {
                return format!("{} × {} = {}", raw, pellets, value * pellets);
            }
        }
        raw.to_string()
    }

    fn comparable(&self, field: StatField, options: &CompareOptions) -> Option<f64> {
        let raw = self.stats.get(field);
        match field {
            StatField::Ammo => parse_magazine_size(raw),
            f if f.is_damage() => numeric_or_null(raw).map(|v| v * self.pellets_for(f, options)),
            _ => numeric_or_null(raw),
        }
    }
}

fn non_blank(value: Option<&StatValue>) -> Option<&StatValue> {
    value.filter(|v| !matches!(v, StatValue::Text(s) if s.trim().is_empty()))
}

/// Whether the raw field values settle the row as a tie before any
/// pellet or magazine adjustment.
fn raw_tie(a: Option<&StatValue>, b: Option<&StatValue>) -> bool {
    let (Some(a), Some(b)) = (non_blank(a), non_blank(b)) else {
        return true;
    };
    match (numeric_or_null(Some(a)), numeric_or_null(Some(b))) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

fn row_winner(
    field: StatField,
    a: &CompareSide<'_>,
    b: &CompareSide<'_>,
    options: &CompareOptions,
) -> Winner {
    if raw_tie(a.stats.get(field), b.stats.get(field)) {
        return Winner::Tie;
    }
    verdict(field, a.comparable(field, options), b.comparable(field, options))
}

/// Verdict for two comparable values under a field's polarity.
pub fn verdict(field: StatField, a: Option<f64>, b: Option<f64>) -> Winner {
    let (Some(a), Some(b)) = (a, b) else {
        return Winner::Tie;
    };
    if a == b {
        return Winner::Tie;
    }
    if field.polarity().prefers(a, b) {
        Winner::A
    } else {
        Winner::B
    }
}

/// Compare two stat records field by field.
///
/// Missing or equal raw values tie. Otherwise the pellet-adjusted damage,
/// parsed magazine size or plain number decides.
///
/// The pellet count row is present only when either side is a shotgun.
pub fn compare_records(a: CompareSide<'_>, b: CompareSide<'_>, options: CompareOptions) -> Comparison {
    let include_pellets = a.is_shotgun || b.is_shotgun;

    let rows = STAT_LAYOUT
        .iter()
        .filter_map(|slot| match slot {
            StatSlot::Field(field) => Some(*field),
            StatSlot::Separator(_) => None,
        })
        .filter(|field| include_pellets || *field != StatField::PelletCount)
        .map(|field| ComparisonRow {
            field,
            label: field.label().to_string(),
            display_a: a.display(field, &options),
            display_b: b.display(field, &options),
            winner: row_winner(field, &a, &b, &options),
        })
        .collect();

    Comparison {
        weapon_a: a.name.to_string(),
        weapon_b: b.name.to_string(),
        rows,
    }
}

/// Compare two catalog weapons by name. `None` if either is unknown.
pub fn compare(catalog: &Catalog, a: &str, b: &str, options: CompareOptions) -> Option<Comparison> {
    let side_a = CompareSide::new(a, catalog.stats(a)?, catalog.is_shotgun(a));
    let side_b = CompareSide::new(b, catalog.stats(b)?, catalog.is_shotgun(b));

    let comparison = compare_records(side_a, side_b, options);
    let (wins_a, wins_b) = comparison.tally();
    debug!("Compared {} vs {}: {} to {}", a, b, wins_a, wins_b);
    Some(comparison)
}
