//! # Config Store
//!
//! Owns the dashboard document and its editing state.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Decode → Edit → Encode → Save
//!   ↓       ↓        ↓       ↓       ↓
//! Text  Document Mutations  Text  Storage
//! ```
//!
//! The document lives in an `Arc`. Readers take a [`ConfigStore::snapshot`]
//! and keep it as long as they like; the next edit copies on write.
//!
//! Edits never fail. A mutation whose target is missing is logged and
//! reported as [`MutationOutcome::Noop`], and the document stays as it was.

use crate::mutations::{Mutation, MutationError, PagePatch, WidgetPatch};
use crate::storage::ConfigStorage;
use crate::undo_stack::UndoStack;
use crate::EditorError;
use glance_model::{
    decode, encode, new_id, parse_payload, payload_to_text, Column, ColumnSize, Document,
    EncodeError, FormatError, Page, PayloadFormatError, Widget, WidgetType,
};
use glance_validator::{column_validation, ColumnValidation};
use std::sync::Arc;
use tracing::{debug, info};

/// What happened to a mutation handed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied { version: u64 },
    Noop { reason: String },
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied { .. })
    }
}

/// Editable dashboard config
#[derive(Debug)]
pub struct ConfigStore {
    document: Arc<Document>,

    selected_page_id: Option<String>,

    /// Increments on each applied change
    version: u64,

    /// Unsaved changes since the last load/save
    dirty: bool,

    history: UndoStack,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::with_history_limit(100)
    }

    /// Store with a custom undo depth (0 = unlimited)
    pub fn with_history_limit(levels: usize) -> Self {
        Self {
            document: Arc::new(Document::new()),
            selected_page_id: None,
            version: 0,
            dirty: false,
            history: UndoStack::with_max_levels(levels),
        }
    }

    /// Wrap an existing document; the first page is selected
    pub fn from_document(document: Document) -> Self {
        let mut store = Self::new();
        store.selected_page_id = document.pages.first().map(|page| page.id.clone());
        store.document = Arc::new(document);
        store
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Cheap handle on the current document
    pub fn snapshot(&self) -> Arc<Document> {
        Arc::clone(&self.document)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // Queries

    pub fn get_page(&self, page_id: &str) -> Option<&Page> {
        self.document.find_page(page_id)
    }

    pub fn get_column(&self, page_id: &str, column_id: &str) -> Option<&Column> {
        self.document.find_column(page_id, column_id)
    }

    pub fn get_widget(&self, page_id: &str, column_id: &str, widget_id: &str) -> Option<&Widget> {
        self.document.find_widget(page_id, column_id, widget_id)
    }

    // Selection

    pub fn selected_page_id(&self) -> Option<&str> {
        self.selected_page_id.as_deref()
    }

    pub fn selected_page(&self) -> Option<&Page> {
        self.selected_page_id
            .as_deref()
            .and_then(|id| self.document.find_page(id))
    }

    /// Select a page, or clear the selection with `None`. Unknown ids are ignored.
    pub fn select_page(&mut self, page_id: Option<&str>) {
        match page_id {
            None => self.selected_page_id = None,
            Some(id) if self.document.find_page(id).is_some() => {
                self.selected_page_id = Some(id.to_string());
            }
            Some(id) => debug!(page_id = id, "ignoring selection of unknown page"),
        }
    }

    /// Point the selection at something that exists
    fn repair_selection(&mut self) {
        let still_there = self
            .selected_page_id
            .as_deref()
            .is_some_and(|id| self.document.find_page(id).is_some());

        if !still_there {
            self.selected_page_id = self.document.pages.first().map(|page| page.id.clone());
        }
    }

    // Mutations

    /// Apply a mutation. Missing targets turn it into a no-op.
    pub fn apply(&mut self, mutation: Mutation) -> MutationOutcome {
        match self.try_apply(&mutation) {
            Ok(version) => MutationOutcome::Applied { version },
            Err(err) => {
                debug!(mutation = mutation.describe(), reason = %err, "mutation skipped");
                MutationOutcome::Noop {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Apply a mutation, surfacing the reason it could not be applied
    pub fn try_apply(&mut self, mutation: &Mutation) -> Result<u64, MutationError> {
        mutation.validate(&self.document)?;

        let before = Arc::clone(&self.document);
        mutation.apply(Arc::make_mut(&mut self.document))?;
        self.history.record(before, Some(mutation.describe()));

        if let Mutation::AddPage { page_id, .. } = mutation {
            self.selected_page_id = Some(page_id.clone());
        }
        self.mark_changed();

        debug!(mutation = mutation.describe(), version = self.version, "mutation applied");
        Ok(self.version)
    }

    fn mark_changed(&mut self) {
        self.repair_selection();
        self.version += 1;
        self.dirty = true;
    }

    /// Append a page with no columns and select it
    pub fn add_page(&mut self, name: impl Into<String>) -> String {
        let page_id = new_id();
        self.apply(Mutation::AddPage {
            page_id: page_id.clone(),
            name: name.into(),
        });
        page_id
    }

    pub fn update_page(&mut self, page_id: &str, patch: PagePatch) -> MutationOutcome {
        self.apply(Mutation::UpdatePage {
            page_id: page_id.to_string(),
            patch,
        })
    }

    pub fn delete_page(&mut self, page_id: &str) -> MutationOutcome {
        self.apply(Mutation::DeletePage {
            page_id: page_id.to_string(),
        })
    }

    pub fn reorder_pages(&mut self, from_index: usize, to_index: usize) -> MutationOutcome {
        self.apply(Mutation::ReorderPages {
            from_index,
            to_index,
        })
    }

    /// Append a column. Layout rules are advisory and not checked here.
    pub fn add_column(&mut self, page_id: &str, size: ColumnSize) -> String {
        let column_id = new_id();
        self.apply(Mutation::AddColumn {
            page_id: page_id.to_string(),
            column_id: column_id.clone(),
            size,
        });
        column_id
    }

    pub fn update_column(&mut self, page_id: &str, column_id: &str, size: ColumnSize) -> MutationOutcome {
        self.apply(Mutation::UpdateColumn {
            page_id: page_id.to_string(),
            column_id: column_id.to_string(),
            size,
        })
    }

    pub fn delete_column(&mut self, page_id: &str, column_id: &str) -> MutationOutcome {
        self.apply(Mutation::DeleteColumn {
            page_id: page_id.to_string(),
            column_id: column_id.to_string(),
        })
    }

    pub fn reorder_columns(&mut self, page_id: &str, from_index: usize, to_index: usize) -> MutationOutcome {
        self.apply(Mutation::ReorderColumns {
            page_id: page_id.to_string(),
            from_index,
            to_index,
        })
    }

    /// Append a widget with an empty payload
    pub fn add_widget(&mut self, page_id: &str, column_id: &str, widget_type: WidgetType) -> String {
        let widget_id = new_id();
        self.apply(Mutation::AddWidget {
            page_id: page_id.to_string(),
            column_id: column_id.to_string(),
            widget_id: widget_id.clone(),
            widget_type,
        });
        widget_id
    }

    pub fn update_widget(
        &mut self,
        page_id: &str,
        column_id: &str,
        widget_id: &str,
        patch: WidgetPatch,
    ) -> MutationOutcome {
        self.apply(Mutation::UpdateWidget {
            page_id: page_id.to_string(),
            column_id: column_id.to_string(),
            widget_id: widget_id.to_string(),
            patch,
        })
    }

    pub fn delete_widget(&mut self, page_id: &str, column_id: &str, widget_id: &str) -> MutationOutcome {
        self.apply(Mutation::DeleteWidget {
            page_id: page_id.to_string(),
            column_id: column_id.to_string(),
            widget_id: widget_id.to_string(),
        })
    }

    pub fn move_widget(
        &mut self,
        source_page_id: &str,
        source_column_id: &str,
        source_index: usize,
        dest_page_id: &str,
        dest_column_id: &str,
        dest_index: usize,
    ) -> MutationOutcome {
        self.apply(Mutation::MoveWidget {
            source_page_id: source_page_id.to_string(),
            source_column_id: source_column_id.to_string(),
            source_index,
            dest_page_id: dest_page_id.to_string(),
            dest_column_id: dest_column_id.to_string(),
            dest_index,
        })
    }

    pub fn reorder_widgets(
        &mut self,
        page_id: &str,
        column_id: &str,
        from_index: usize,
        to_index: usize,
    ) -> MutationOutcome {
        self.apply(Mutation::ReorderWidgets {
            page_id: page_id.to_string(),
            column_id: column_id.to_string(),
            from_index,
            to_index,
        })
    }

    // Widget payload editing

    /// Payload as YAML for editing. An empty payload shows the type's
    /// template instead. `None` when the widget does not exist.
    pub fn widget_payload_text(
        &self,
        page_id: &str,
        column_id: &str,
        widget_id: &str,
    ) -> Result<Option<String>, EncodeError> {
        let Some(widget) = self.get_widget(page_id, column_id, widget_id) else {
            return Ok(None);
        };

        if widget.properties.is_empty() {
            return Ok(Some(widget.widget_type.template().to_string()));
        }
        payload_to_text(&widget.properties).map(Some)
    }

    /// Replace a widget's payload from YAML text. On a parse error the
    /// document is left unchanged.
    pub fn set_widget_payload_text(
        &mut self,
        page_id: &str,
        column_id: &str,
        widget_id: &str,
        text: &str,
    ) -> Result<MutationOutcome, PayloadFormatError> {
        let properties = parse_payload(text)?;
        Ok(self.update_widget(
            page_id,
            column_id,
            widget_id,
            WidgetPatch::new().properties(properties),
        ))
    }

    /// Layout advice for the selected page
    pub fn column_validation(&self) -> ColumnValidation {
        column_validation(self.selected_page())
    }

    // Whole-document operations

    /// Replace the document with decoded text. On error nothing changes.
    pub fn import_text(&mut self, text: &str) -> Result<(), FormatError> {
        let document = decode(text)?;
        info!(pages = document.pages.len(), "config imported");

        self.replace_document(document, "Import config");
        self.selected_page_id = self.document.pages.first().map(|page| page.id.clone());
        Ok(())
    }

    pub fn export_text(&self) -> Result<String, EncodeError> {
        let text = encode(&self.document)?;
        info!(pages = self.document.pages.len(), bytes = text.len(), "config exported");
        Ok(text)
    }

    /// Start over with an empty document
    pub fn reset(&mut self) {
        self.replace_document(Document::new(), "Reset config");
        self.selected_page_id = None;
    }

    fn replace_document(&mut self, document: Document, description: &str) {
        let before = std::mem::replace(&mut self.document, Arc::new(document));
        self.history.record(before, Some(description));
        self.mark_changed();
    }

    /// Load from storage. Returns `false` when the storage is empty.
    ///
    /// A successful load starts a fresh history.
    pub fn load_from(&mut self, storage: &dyn ConfigStorage) -> Result<bool, EditorError> {
        let Some(text) = storage.load()? else {
            info!(location = %storage.location(), "no stored config");
            return Ok(false);
        };

        self.import_text(&text)?;
        self.history.clear();
        self.dirty = false;

        info!(location = %storage.location(), "config loaded");
        Ok(true)
    }

    pub fn save_to(&mut self, storage: &mut dyn ConfigStorage) -> Result<(), EditorError> {
        let text = self.export_text()?;
        storage.save(&text)?;
        self.dirty = false;

        info!(location = %storage.location(), "config saved");
        Ok(())
    }

    // History

    pub fn undo(&mut self) -> bool {
        let current = Arc::clone(&self.document);
        match self.history.undo(current) {
            Some(previous) => {
                self.document = previous;
                self.mark_changed();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let current = Arc::clone(&self.document);
        match self.history.redo(current) {
            Some(next) => {
                self.document = next;
                self.mark_changed();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }

    /// Group the following edits into one undo step
    pub fn begin_batch(&mut self, description: impl Into<String>) {
        self.history.begin_batch();
        self.history.set_batch_description(description);
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch();
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
