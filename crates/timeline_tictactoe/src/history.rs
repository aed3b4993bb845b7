//! Move history: one board snapshot per step.

use super::{Board, Position};
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::{debug, instrument};

/// The board after a step, plus the position played to reach it.
///
/// The initial snapshot has no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new, derive_getters::Getters)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Position that produced this board, `None` for the game start.
    position: Option<Position>,
}

impl Snapshot {
    /// The empty game-start snapshot.
    pub fn start() -> Self {
        Self::new(Board::new(), None)
    }

    /// Display location `(col, row)`, or an empty string for the game start.
    pub fn location(&self) -> String {
        self.position.map(Position::location).unwrap_or_default()
    }
}

/// Ordered, never-empty list of snapshots. Index 0 is the empty start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    #[serde(deserialize_with = "deserialize_snapshots")]
    snapshots: Vec<Snapshot>,
}

/// Why a deserialized history was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// No snapshots at all.
    #[display("History must contain the game-start snapshot")]
    Empty,
    /// The first snapshot is not the empty start board.
    #[display("History must begin with the empty game-start snapshot")]
    BadStart,
}

fn deserialize_snapshots<'de, D>(deserializer: D) -> Result<Vec<Snapshot>, D::Error>
where
    D: Deserializer<'de>,
{
    let snapshots = Vec::<Snapshot>::deserialize(deserializer)?;
    match snapshots.first() {
        None => Err(de::Error::custom(HistoryError::Empty)),
        Some(first) if *first != Snapshot::start() => {
            Err(de::Error::custom(HistoryError::BadStart))
        }
        Some(_) => Ok(snapshots),
    }
}

impl History {
    /// Creates a history holding only the game-start snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::start()],
        }
    }

    /// Number of snapshots, always at least 1.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True only for a history with no snapshots, which construction prevents.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Index of the most recent snapshot.
    pub fn last_step(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    /// All snapshots in step order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Drops every snapshot after `step`, then appends `snapshot`.
    ///
    /// Returns the step of the appended snapshot. `step` is clamped to the
    /// last existing step so the start snapshot is never dropped.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub fn branch_from(&mut self, step: usize, snapshot: Snapshot) -> usize {
        let keep = step.min(self.last_step()) + 1;
        if keep < self.snapshots.len() {
            debug!(
                discarded = self.snapshots.len() - keep,
                "Discarding future snapshots"
            );
            self.snapshots.truncate(keep);
        }
        self.snapshots.push(snapshot);
        self.last_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
