//! # Glance Editor
//!
//! Core document editing engine for Glance dashboard configs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: YAML text ⇄ Document                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: ConfigStore                         │
//! │  - Load/save through a storage hook         │
//! │  - Apply mutations with validation          │
//! │  - Page selection                           │
//! │  - Snapshot undo/redo                       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ validator: column layout advice             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is source of truth**: YAML text is derived on export
//! 2. **Edits are total**: missing targets make a mutation a no-op, never an error
//! 3. **Layout rules are advice**: the store never refuses a column
//! 4. **Snapshots are cheap**: readers hold an `Arc<Document>`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use glance_editor::{ConfigStore, FileStorage};
//! use glance_model::{ColumnSize, WidgetType};
//!
//! let mut storage = FileStorage::new("glance.yml");
//! let mut store = ConfigStore::new();
//! store.load_from(&storage)?;
//!
//! let page = store.add_page("Home");
//! let column = store.add_column(&page, ColumnSize::Full);
//! store.add_widget(&page, &column, WidgetType::Clock);
//!
//! store.save_to(&mut storage)?;
//! ```

mod errors;
mod mutations;
mod storage;
mod store;
mod undo_stack;

pub use errors::EditorError;
pub use mutations::{Mutation, MutationError, PagePatch, WidgetPatch};
pub use storage::{ConfigStorage, FileStorage, MemoryStorage};
pub use store::{ConfigStore, MutationOutcome};
pub use undo_stack::{HistoryEntry, UndoStack};

// Re-export common types for convenience
pub use glance_model::{Column, ColumnSize, Document, Page, PageWidth, Widget, WidgetType};
pub use glance_validator::ColumnValidation;
