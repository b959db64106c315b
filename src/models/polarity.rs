//! Sort direction shared by rankings and comparisons.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Whether a lower or a higher value is the better one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Lower is better (recoil, reload, weight, ...).
    #[serde(rename = "asc")]
    Ascending,
    /// Higher is better (damage, firerate, accuracy, ...).
    #[serde(rename = "desc")]
    Descending,
}

impl Polarity {
    /// Ordering that puts the better value first.
    ///
    /// Equal values compare `Equal` so a stable sort keeps input order.
    pub fn order(&self, a: f64, b: f64) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Polarity::Ascending => ord,
            Polarity::Descending => ord.reverse(),
        }
    }

    /// True when `a` is strictly better than `b`.
    pub fn prefers(&self, a: f64, b: f64) -> bool {
        self.order(a, b) == Ordering::Less
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Ascending => "asc",
            Polarity::Descending => "desc",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
