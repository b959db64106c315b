//! Ranking a weapon set under one objective.

use serde::Serialize;
use tracing::debug;

use super::ObjectiveRegistry;
use crate::catalog::Catalog;
use crate::models::{BodyPart, Polarity, RankedEntry};

/// Score and order weapons under the objective named by `objective_key`.
///
/// Unknown keys and unknown weapons rank nothing. Weapons with a null score
/// are dropped. Equal scores keep their input order.
pub fn rank<S: AsRef<str>>(
    catalog: &Catalog,
    registry: &ObjectiveRegistry,
    weapons: &[S],
    objective_key: &str,
    body_part: BodyPart,
) -> Vec<RankedEntry> {
    let Some(objective) = registry.resolve(objective_key) else {
        debug!("No objective registered for '{}'", objective_key);
        return Vec::new();
    };

    let mut entries: Vec<RankedEntry> = weapons
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let stats = catalog.stats(name)?;
            let ctx = registry.context(body_part, catalog.is_shotgun(name));
            objective
                .score(stats, &ctx)
                .map(|score| RankedEntry::new(name, score))
        })
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| objective.polarity.order(a.score, b.score));

    debug!(
        "Ranked {} of {} weapons by {} ({})",
        entries.len(),
        weapons.len(),
        objective.kind,
        body_part
    );
    entries
}

/// One displayed leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based
    pub position: usize,
    pub name: String,
    pub score: f64,
    pub display: String,
}

/// A ranking trimmed for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    pub objective: String,
    /// `None` when the objective is unknown
    pub label: Option<String>,
    pub polarity: Option<Polarity>,
    pub body_part: BodyPart,
    pub entries: Vec<LeaderboardEntry>,
    /// Entries in the full ranking
    pub total: usize,
    pub has_more: bool,
}

/// Wrap a ranking for display.
///
/// Shows the first `limit` entries, or all of them when `expanded`.
pub fn leaderboard(
    catalog: &Catalog,
    registry: &ObjectiveRegistry,
    objective_key: &str,
    ranked: &[RankedEntry],
    body_part: BodyPart,
    limit: usize,
    expanded: bool,
) -> Leaderboard {
    let objective = registry.resolve(objective_key);
    let shown = if expanded {
        ranked.len()
    } else {
        limit.min(ranked.len())
    };

    let entries = ranked[..shown]
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let display = match (objective, catalog.stats(&entry.name)) {
                (Some(objective), Some(stats)) => {
                    let ctx = registry.context(body_part, catalog.is_shotgun(&entry.name));
                    objective.format(entry.score, stats, &ctx)
                }
                _ => entry.score.to_string(),
            };
            LeaderboardEntry {
                position: i + 1,
                name: entry.name.clone(),
                score: entry.score,
                display,
            }
        })
        .collect();

    Leaderboard {
        objective: objective_key.to_string(),
        label: objective.map(|o| o.label.clone()),
        polarity: objective.map(|o| o.polarity),
        body_part,
        entries,
        total: ranked.len(),
        has_more: shown < ranked.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_catalog, Catalog};
    use crate::models::{Dataset, WeaponCategory, WeaponStatRecord};
    use pretty_assertions::assert_eq;

    fn names(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_rank_descending() {
        let catalog = sample_catalog();
        let registry = ObjectiveRegistry::standard();

        let ranked = rank(&catalog, &registry, catalog.weapons(), "firerate", BodyPart::Base);

        assert_eq!(
            names(&ranked),
            vec!["M4", "AK", "Auto", "Pump", "Flare Pistol"]
        );
    }

    #[test]
    fn test_rank_ascending() {
        let catalog = sample_catalog();
        let registry = ObjectiveRegistry::standard();

        let ranked = rank(&catalog, &registry, catalog.weapons(), "weight", BodyPart::Base);

        assert_eq!(ranked[0], RankedEntry::new("Flare Pistol", 1.0));
        assert_eq!(ranked.last().map(|e| e.name.as_str()), Some("Old Musket"));
    }

    #[test]
    fn test_rank_excludes_null_scores() {
        let catalog = sample_catalog();
        let registry = ObjectiveRegistry::standard();

        let ranked = rank(&catalog, &registry, catalog.weapons(), "recoil", BodyPart::Base);

        assert_eq!(names(&ranked), vec!["M4", "AK"]);
        assert!(!names(&ranked).contains(&"Crossbow"));
    }

    #[test]
    fn test_rank_unknown_objective_is_empty() {
        let catalog = sample_catalog();
        let registry = ObjectiveRegistry::standard();

        let ranked = rank(&catalog, &registry, catalog.weapons(), "style", BodyPart::Head);

        assert!(!catalog.weapons().is_empty());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let dataset: Dataset = serde_json::from_value(serde_json::json!({
            "categories": [{"name": "Rifles", "type": "rifle", "weapons": ["B", "A", "C"]}],
            "weapons": {
                "A": {"firerate": 600},
                "B": {"firerate": 600},
                "C": {"firerate": 700}
            }
        }))
        .unwrap();
        let catalog = Catalog::from_dataset(dataset, "Shotguns").unwrap();
        let registry = ObjectiveRegistry::standard();

        let first = rank(&catalog, &registry, &["B", "A", "C"], "firerate", BodyPart::Base);
        let second = rank(&catalog, &registry, &["B", "A", "C"], "firerate", BodyPart::Base);
        assert_eq!(names(&first), vec!["C", "B", "A"]);
        assert_eq!(first, second);

        let reversed = rank(&catalog, &registry, &["A", "B"], "firerate", BodyPart::Base);
        assert_eq!(names(&reversed), vec!["A", "B"]);
    }

    #[test]
    fn test_rank_damage_by_body_part() {
        let catalog = sample_catalog();
        let registry = ObjectiveRegistry::standard();

        let ranked = rank(&catalog, &registry, &["AK", "M4"], "damage_max", BodyPart::Head);

        assert_eq!(ranked, vec![RankedEntry::new("AK", 60.0), RankedEntry::new("M4", 37.5)]);
    }

    #[test]
    fn test_rank_shotgun_min_damage_rule() {
        let catalog = sample_catalog();

        let strict = ObjectiveRegistry::standard();
        let ranked = rank(&catalog, &strict, &["Pump", "AK"], "damage_min", BodyPart::Base);
        assert_eq!(ranked, vec![RankedEntry::new("AK", 20.0), RankedEntry::new("Pump", 10.0)]);

        let relaxed = ObjectiveRegistry::standard().with_single_pellet_min_damage(false);
        let ranked = rank(&catalog, &relaxed, &["Pump", "AK"], "damage_min", BodyPart::Base);
        assert_eq!(ranked, vec![RankedEntry::new("Pump", 80.0), RankedEntry::new("AK", 20.0)]);
    }

    #[test]
    fn test_rank_skips_unknown_weapons() {
        let catalog = sample_catalog();
        let registry = ObjectiveRegistry::standard();

        let ranked = rank(&catalog, &registry, &["Ghost", "AK"], "damage_max", BodyPart::Base);

        assert_eq!(names(&ranked), vec!["AK"]);
    }

    #[test]
    fn test_rank_magazine_infinite_first() {
        let dataset = Dataset {
            categories: vec![WeaponCategory::new("LMG", "lmg", &["Belt", "Box"])],
            weapons: [
                ("Belt".to_string(), serde_json::from_value::<WeaponStatRecord>(serde_json::json!({"ammo": "INF"})).unwrap()),
                ("Box".to_string(), serde_json::from_value::<WeaponStatRecord>(serde_json::json!({"ammo": "100"})).unwrap()),
            ]
            .into_iter()
            .collect(),
        };
        let catalog = Catalog::from_dataset(dataset, "Shotguns").unwrap();
        let registry = ObjectiveRegistry::standard();

        let ranked = rank(&catalog, &registry, catalog.weapons(), "ammo", BodyPart::Base);

        assert_eq!(names(&ranked), vec!["Belt", "Box"]);
        assert!(ranked[0].score.is_infinite());
    }

    #[test]
    fn test_leaderboard_limit_and_expand() {
        let catalog = sample_catalog();
        let registry = ObjectiveRegistry::standard();
        let ranked = rank(&catalog, &registry, catalog.weapons(), "firerate", BodyPart::Base);

        let board = leaderboard(&catalog, &registry, "firerate", &ranked, BodyPart::Base, 3, false);
        assert_eq!(board.entries.len(), 3);
        assert_eq!(board.total, 5);
        assert!(board.has_more);
        assert_eq!(board.label.as_deref(), Some("Firerate"));
        assert_eq!(board.entries[0].position, 1);
        assert_eq!(board.entries[0].display, "800 RPM");

        let full = leaderboard(&catalog, &registry, "firerate", &ranked, BodyPart::Base, 3, true);
        assert_eq!(full.entries.len(), 5);
        assert!(!full.has_more);
        assert_eq!(full.entries[4].position, 5);
    }

    #[test]
    fn test_leaderboard_unknown_objective() {
        let catalog = sample_catalog();
        let registry = ObjectiveRegistry::standard();

        let board = leaderboard(&catalog, &registry, "style", &[], BodyPart::Base, 3, false);

        assert_eq!(board.label, None);
        assert_eq!(board.polarity, None);
        assert!(board.entries.is_empty());
        assert!(!board.has_more);
    }

    #[test]
    fn test_leaderboard_limit_larger_than_ranking() {
        let catalog = sample_catalog();
        let registry = ObjectiveRegistry::standard();
        let ranked = rank(&catalog, &registry, catalog.weapons(), "recoil", BodyPart::Base);

        let board = leaderboard(&catalog, &registry, "recoil", &ranked, BodyPart::Base, 5, false);

        assert_eq!(board.entries.len(), 2);
        assert!(!board.has_more);
        assert_eq!(board.entries[0].display, "2.83");
    }
}
