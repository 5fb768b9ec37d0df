#![forbid(unsafe_code)]

//! Cursor-addressed snapshot history for undo/redo.
//!
//! [`History`] keeps a sequence of immutable snapshots and a cursor naming
//! the current one. Snapshots are wrapped in [`Arc`], so handing the current
//! state out never copies it and a stored snapshot is never mutated.
//!
//! # Architecture
//!
//! ```text
//! commit(s3)
//! ┌──────────────────────────────────────────────┐
//! │ Snapshots: [s0, s1, s2, s3]                  │
//! │ Cursor:                  ^                   │
//! └──────────────────────────────────────────────┘
//!
//! undo() x2
//! ┌──────────────────────────────────────────────┐
//! │ Snapshots: [s0, s1, s2, s3]                  │
//! │ Cursor:         ^                            │
//! └──────────────────────────────────────────────┘
//!
//! commit(s4) — new branch, drops s2 and s3
//! ┌──────────────────────────────────────────────┐
//! │ Snapshots: [s0, s1, s4]                      │
//! │ Cursor:             ^                        │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. The sequence is never empty.
//! 2. `cursor < len` after any operation.
//! 3. Under [`CommitPolicy::Retain`] with a depth limit, `len <= max_depth`
//!    after any commit. Without one the sequence only grows.
//! 4. Under [`CommitPolicy::Ephemeral`], commits never grow the sequence.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// What a commit does with the new snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitPolicy {
    /// Truncate everything after the cursor and append (interactive use).
    Retain,
    /// Overwrite the snapshot at the cursor in place (batch use).
    Ephemeral,
}

/// History settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Retain commits as undoable states. `false` selects the ephemeral policy.
    pub enabled: bool,
    /// Maximum number of snapshots kept, oldest evicted first. `None` keeps
    /// every state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_depth: None,
        }
    }
}

impl HistoryConfig {
    #[must_use]
    pub fn policy(&self) -> CommitPolicy {
        if self.enabled {
            CommitPolicy::Retain
        } else {
            CommitPolicy::Ephemeral
        }
    }
}

/// Linear undo/redo history of snapshots.
pub struct History<T> {
    snapshots: VecDeque<Arc<T>>,
    cursor: usize,
    policy: CommitPolicy,
    max_depth: Option<usize>,
}

impl<T> fmt::Debug for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("len", &self.snapshots.len())
            .field("cursor", &self.cursor)
            .field("policy", &self.policy)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl<T: Default> Default for History<T> {
    fn default() -> Self {
        Self::new(&HistoryConfig::default())
    }
}

impl<T: Default> History<T> {
    /// Create a history holding a single default (empty) snapshot.
    #[must_use]
    pub fn new(config: &HistoryConfig) -> Self {
        Self::with_initial(T::default(), config)
    }

    /// Drop every snapshot and start again from a single default one.
    pub fn reset(&mut self) {
        self.collapse(T::default());
    }
}

impl<T> History<T> {
    /// Create a history whose only snapshot is `initial`.
    #[must_use]
    pub fn with_initial(initial: T, config: &HistoryConfig) -> Self {
        let mut snapshots = VecDeque::new();
        snapshots.push_back(Arc::new(initial));
        Self {
            snapshots,
            cursor: 0,
            policy: config.policy(),
            max_depth: config.max_depth.map(|depth| depth.max(1)),
        }
    }

    // ====================================================================
    // Core Operations
    // ====================================================================

    /// Record `state` as the new current snapshot under the commit policy.
    pub fn commit(&mut self, state: T) {
        let state = Arc::new(state);
        match self.policy {
            CommitPolicy::Retain => {
                self.snapshots.truncate(self.cursor + 1);
                self.snapshots.push_back(state);
                self.cursor = self.snapshots.len() - 1;
                self.enforce_depth();
            }
            CommitPolicy::Ephemeral => {
                self.snapshots[self.cursor] = state;
            }
        }
        tracing::trace!(
            cursor = self.cursor,
            len = self.snapshots.len(),
            policy = ?self.policy,
            "history commit"
        );
    }

    /// Step the cursor back. Returns the new current snapshot, or `None`
    /// when already at the oldest one.
    pub fn undo(&mut self) -> Option<Arc<T>> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        tracing::trace!(cursor = self.cursor, len = self.snapshots.len(), "history undo");
        Some(Arc::clone(&self.snapshots[self.cursor]))
    }

    /// Step the cursor forward. Returns the new current snapshot, or `None`
    /// when already at the newest one.
    pub fn redo(&mut self) -> Option<Arc<T>> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        tracing::trace!(cursor = self.cursor, len = self.snapshots.len(), "history redo");
        Some(Arc::clone(&self.snapshots[self.cursor]))
    }

    /// Replace the whole history with a single snapshot.
    pub fn collapse(&mut self, state: T) {
        self.snapshots.clear();
        self.snapshots.push_back(Arc::new(state));
        self.cursor = 0;
        tracing::debug!("history collapsed to a single snapshot");
    }

    // ====================================================================
    // Query
    // ====================================================================

    /// The snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> &Arc<T> {
        &self.snapshots[self.cursor]
    }

    /// The snapshot at `index`, oldest first.
    #[must_use]
    pub fn snapshot_at(&self, index: usize) -> Option<&Arc<T>> {
        self.snapshots.get(index)
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`; a history holds at least one snapshot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    #[must_use]
    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: CommitPolicy) {
        self.policy = policy;
    }

    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    // ====================================================================
    // Maintenance
    // ====================================================================

    /// Evict the oldest snapshots beyond `max_depth`, keeping the cursor on
    /// the same snapshot.
    fn enforce_depth(&mut self) {
        let Some(max_depth) = self.max_depth else {
            return;
        };
        while self.snapshots.len() > max_depth {
            self.snapshots.pop_front();
            self.cursor = self.cursor.saturating_sub(1);
        }
    }
}
