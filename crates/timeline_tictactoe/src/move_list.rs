//! Display projection of the history as a sortable move list.

use super::history::History;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list. Never affects the history itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Most recent move first.
    Descending,
}

impl SortOrder {
    /// Flips between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown next to the move list title.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MoveListEntry {
    /// History index this entry jumps to.
    step: usize,
    /// `(col, row)` of the move, empty for the game start.
    location: String,
    /// Whether this is the step currently displayed.
    is_current: bool,
}

impl MoveListEntry {
    /// Text shown for this entry.
    pub fn label(&self) -> String {
        match (self.is_current, self.step) {
            (true, 0) => "You are at game start".to_string(),
            (true, step) => format!("You are at move #{}", step),
            (false, 0) => "Go to game start".to_string(),
            (false, step) => format!("Go to move #{} {}", step, self.location),
        }
    }
}

/// Builds the move list for `history` in `order`, marking `current`.
#[instrument(skip(history), fields(len = history.len()))]
pub fn move_list(history: &History, current: usize, order: SortOrder) -> Vec<MoveListEntry> {
    let entries = history
        .snapshots()
        .iter()
        .enumerate()
        .map(|(step, snapshot)| MoveListEntry {
            step,
            location: snapshot.location(),
            is_current: step == current,
        });

    match order {
        SortOrder::Ascending => entries.collect(),
        SortOrder::Descending => entries.rev().collect(),
    }
}
