//! # Undo/Redo Stack
//!
//! Snapshot history for the config store.
//!
//! ## Design
//!
//! - Each change records the document as it was before the change
//! - Snapshots are `Arc`s, so recording is a pointer copy
//! - Undo hands back the previous snapshot and keeps the current one for redo
//! - New changes clear the redo stack
//! - Supports batched changes (several edits undone as one step)

use glance_model::Document;
use std::sync::Arc;

/// One undo step: the document before the change
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub snapshot: Arc<Document>,

    /// Optional description of this step
    pub description: Option<String>,
}

impl HistoryEntry {
    pub fn new(snapshot: Arc<Document>) -> Self {
        Self {
            snapshot,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A batch being built. Only the first change's snapshot matters.
#[derive(Debug, Default)]
struct PendingBatch {
    before: Option<Arc<Document>>,
    description: Option<String>,
}

#[derive(Debug)]
pub struct UndoStack {
    /// Most recent last
    undo_stack: Vec<HistoryEntry>,

    /// Most recent last
    redo_stack: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    current_batch: Option<PendingBatch>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Record the document as it was before a change
    pub fn record(&mut self, before: Arc<Document>, description: Option<&str>) {
        if let Some(batch) = &mut self.current_batch {
            if batch.before.is_none() {
                batch.before = Some(before);
            }
            return;
        }

        self.push_entry(HistoryEntry {
            snapshot: before,
            description: description.map(str::to_string),
        });
    }

    /// Start a batch of changes (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        if self.current_batch.is_none() {
            self.current_batch = Some(PendingBatch::default());
        }
    }

    /// End the current batch and push it, unless nothing was recorded
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if let Some(before) = batch.before {
                self.push_entry(HistoryEntry {
                    snapshot: before,
                    description: batch.description,
                });
            }
        }
    }

    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.undo_stack.push(entry);
        self.trim_to_limit();

        // New action invalidates the future
        self.redo_stack.clear();
    }

    /// Drop the oldest undo entries beyond `max_levels`
    fn trim_to_limit(&mut self) {
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            let excess = self.undo_stack.len() - self.max_levels;
            self.undo_stack.drain(..excess);
        }
    }

    /// Step back. `current` moves to the redo stack and the previous
    /// snapshot is returned. An open batch is closed first.
    pub fn undo(&mut self, current: Arc<Document>) -> Option<Arc<Document>> {
        self.end_batch();

        let entry = self.undo_stack.pop()?;
        self.redo_stack.push(HistoryEntry {
            snapshot: current,
            description: entry.description.clone(),
        });
        Some(entry.snapshot)
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: Arc<Document>) -> Option<Arc<Document>> {
        self.end_batch();

        let entry = self.redo_stack.pop()?;
        self.undo_stack.push(HistoryEntry {
            snapshot: current,
            description: entry.description.clone(),
        });
        self.trim_to_limit();
        Some(entry.snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|entry| entry.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
