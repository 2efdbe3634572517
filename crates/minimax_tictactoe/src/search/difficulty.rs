//! Difficulty levels and the breadth of the top-N pick.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How many of the best-scored moves the search picks among.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform pick among the best 30 moves.
    Easy,
    /// Uniform pick among the best 10 moves.
    Medium,
    /// Always the best move.
    #[default]
    Hard,
}

impl Difficulty {
    /// Length of the prefix of sorted candidates to pick from.
    ///
    /// There are never more than nine candidates, so Easy and Medium
    /// consider every legal move.
    pub fn top_n(self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 10,
            Difficulty::Hard => 1,
        }
    }

    /// Parses a label, falling back to [`Difficulty::Hard`] when it is not
    /// recognized.
    pub fn from_label(label: &str) -> Self {
        label.trim().parse().unwrap_or_else(|_| {
            warn!(label, "Unrecognized difficulty, playing optimally");
            Difficulty::Hard
        })
    }
}
