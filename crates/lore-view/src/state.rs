//! Snapshotable viewer state: the user-chosen revealed node ids.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The revealed roots of visibility.
///
/// This is the only state a viewer persists; the visible set is derived
/// from it on every viewer construction. Ids are kept sorted so snapshots
/// serialize reproducibly regardless of reveal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerState {
    pub revealed: BTreeSet<String>,
}

impl ViewerState {
    /// An empty state: nothing revealed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a state from a collection of ids.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            revealed: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// A new state with `ids` added to the revealed set.
    pub fn reveal<I, S>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut revealed = self.revealed.clone();
        revealed.extend(ids.into_iter().map(Into::into));
        Self { revealed }
    }

    /// A new state with `ids` removed from the revealed set.
    pub fn hide<I, S>(&self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut revealed = self.revealed.clone();
        for id in ids {
            revealed.remove(id.as_ref());
        }
        Self { revealed }
    }
}

/// Serialize a viewer state to a JSON snapshot.
pub fn to_json(state: &ViewerState) -> Result<String> {
    serde_json::to_string_pretty(state).context("failed to serialize viewer state to JSON")
}

/// Deserialize a viewer state from a JSON snapshot.
pub fn from_json(json: &str) -> Result<ViewerState> {
    serde_json::from_str(json).context("failed to deserialize viewer state from JSON")
}
