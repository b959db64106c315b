//! Side-by-side comparison results.

use serde::{Deserialize, Serialize};

use super::StatField;

/// Which side of a comparison holds the better value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    A,
    B,
    Tie,
}

impl Winner {
    /// The verdict seen from the other side.
    pub fn swapped(&self) -> Self {
        match self {
            Winner::A => Winner::B,
            Winner::B => Winner::A,
            Winner::Tie => Winner::Tie,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::A => write!(f, "A"),
            Winner::B => write!(f, "B"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

/// Verdict for one stat field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub field: StatField,
    pub label: String,
    pub display_a: String,
    pub display_b: String,
    pub winner: Winner,
}

/// Full comparison of two weapons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub weapon_a: String,
    pub weapon_b: String,
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Row for a given field, if it was compared.
    pub fn row(&self, field: StatField) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.field == field)
    }

    /// Number of fields each side wins, as `(a, b)`.
    pub fn tally(&self) -> (usize, usize) {
        self.rows.iter().fold((0, 0), |(a, b), row| match row.winner {
            Winner::A => (a + 1, b),
            Winner::B => (a, b + 1),
            Winner::Tie => (a, b),
        })
    }
}
