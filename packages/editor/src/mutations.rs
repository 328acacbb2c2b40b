//! # Document Mutations
//!
//! Semantic edit operations on the page → column → widget tree.
//!
//! ## Design Principles
//!
//! 1. **Replayable**: ids of created nodes are part of the mutation, so the
//!    same mutation always produces the same tree
//! 2. **Validated**: `validate` checks every target before anything changes
//! 3. **Total**: a mutation that validates applies completely
//!
//! ## Mutation Semantics
//!
//! ### Reorder
//! - Splice-move: remove at `from_index`, reinsert at `to_index`
//! - Both indices must address an existing element
//!
//! ### MoveWidget
//! - Both columns must resolve and `source_index` must exist
//! - `dest_index` past the end appends
//!
//! ### Delete
//! - Removes the node and everything below it

use glance_model::{
    Column, ColumnSize, Document, Page, PageWidth, Payload, Widget, WidgetType,
    SHARED_WIDGET_KEYS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations on a dashboard document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    AddPage {
        page_id: String,
        name: String,
    },

    /// Merge the provided page fields; columns are untouched
    UpdatePage {
        page_id: String,
        patch: PagePatch,
    },

    DeletePage {
        page_id: String,
    },

    ReorderPages {
        from_index: usize,
        to_index: usize,
    },

    AddColumn {
        page_id: String,
        column_id: String,
        size: ColumnSize,
    },

    UpdateColumn {
        page_id: String,
        column_id: String,
        size: ColumnSize,
    },

    DeleteColumn {
        page_id: String,
        column_id: String,
    },

    ReorderColumns {
        page_id: String,
        from_index: usize,
        to_index: usize,
    },

    AddWidget {
        page_id: String,
        column_id: String,
        widget_id: String,
        widget_type: WidgetType,
    },

    /// Merge the provided widget fields; a payload replaces the old one
    UpdateWidget {
        page_id: String,
        column_id: String,
        widget_id: String,
        patch: WidgetPatch,
    },

    DeleteWidget {
        page_id: String,
        column_id: String,
        widget_id: String,
    },

    /// Move a widget between (or within) columns, possibly across pages
    MoveWidget {
        source_page_id: String,
        source_column_id: String,
        source_index: usize,
        dest_page_id: String,
        dest_column_id: String,
        dest_index: usize,
    },

    ReorderWidgets {
        page_id: String,
        column_id: String,
        from_index: usize,
        to_index: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Widget not found: {0}")]
    WidgetNotFound(String),

    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Shared widget field in properties: {0}")]
    SharedPayloadKey(String),
}

/// Partial page update. `None` keeps the current value; an empty slug clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PagePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<PageWidth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_vertically: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_desktop_navigation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_mobile_header: Option<bool>,
}

/// Partial widget update. `None` keeps the current value; empty strings clear
/// optional text fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WidgetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_type: Option<WidgetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Payload>,
}

fn cleared_if_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl PagePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn width(mut self, width: PageWidth) -> Self {
        self.width = Some(width);
        self
    }

    pub fn center_vertically(mut self, value: bool) -> Self {
        self.center_vertically = Some(value);
        self
    }

    pub fn hide_desktop_navigation(mut self, value: bool) -> Self {
        self.hide_desktop_navigation = Some(value);
        self
    }

    pub fn show_mobile_header(mut self, value: bool) -> Self {
        self.show_mobile_header = Some(value);
        self
    }

    pub fn apply_to(&self, page: &mut Page) {
        if let Some(name) = &self.name {
            page.name = name.clone();
        }
        if let Some(slug) = &self.slug {
            page.slug = cleared_if_empty(slug);
        }
        if let Some(width) = self.width {
            page.width = width;
        }
        if let Some(value) = self.center_vertically {
            page.center_vertically = value;
        }
        if let Some(value) = self.hide_desktop_navigation {
            page.hide_desktop_navigation = value;
        }
        if let Some(value) = self.show_mobile_header {
            page.show_mobile_header = value;
        }
    }
}

impl WidgetPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widget_type(mut self, widget_type: WidgetType) -> Self {
        self.widget_type = Some(widget_type);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_url(mut self, url: impl Into<String>) -> Self {
        self.title_url = Some(url.into());
        self
    }

    pub fn cache(mut self, cache: impl Into<String>) -> Self {
        self.cache = Some(cache.into());
        self
    }

    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    pub fn hide_header(mut self, value: bool) -> Self {
        self.hide_header = Some(value);
        self
    }

    pub fn properties(mut self, properties: Payload) -> Self {
        self.properties = Some(properties);
        self
    }

    /// First payload key that belongs to a shared widget field, if any.
    /// Such keys would be dropped on encode.
    pub fn shared_payload_key(&self) -> Option<&str> {
        self.properties
            .as_ref()?
            .keys()
            .map(String::as_str)
            .find(|key| SHARED_WIDGET_KEYS.contains(key))
    }

    pub fn apply_to(&self, widget: &mut Widget) {
        if let Some(widget_type) = self.widget_type {
            widget.widget_type = widget_type;
        }
        if let Some(title) = &self.title {
            widget.title = cleared_if_empty(title);
        }
        if let Some(url) = &self.title_url {
            widget.title_url = cleared_if_empty(url);
        }
        if let Some(cache) = &self.cache {
            widget.cache = cleared_if_empty(cache);
        }
        if let Some(css_class) = &self.css_class {
            widget.css_class = cleared_if_empty(css_class);
        }
        if let Some(value) = self.hide_header {
            widget.hide_header = value;
        }
        if let Some(properties) = &self.properties {
            widget.properties = properties.clone();
        }
    }
}

impl Mutation {
    /// Apply mutation to the document with validation.
    ///
    /// Nothing is modified unless validation passes.
    pub fn apply(&self, doc: &mut Document) -> Result<(), MutationError> {
        self.validate(doc)?;

        match self {
            Mutation::AddPage { page_id, name } => {
                doc.pages.push(Page::new(page_id.clone(), name.clone()));
            }

            Mutation::UpdatePage { page_id, patch } => {
                patch.apply_to(page_mut(doc, page_id)?);
            }

            Mutation::DeletePage { page_id } => {
                doc.pages.retain(|page| page.id != *page_id);
            }

            Mutation::ReorderPages { from_index, to_index } => {
                splice_move(&mut doc.pages, *from_index, *to_index)?;
            }

            Mutation::AddColumn { page_id, column_id, size } => {
                page_mut(doc, page_id)?
                    .columns
                    .push(Column::new(column_id.clone(), *size));
            }

            Mutation::UpdateColumn { page_id, column_id, size } => {
                column_mut(doc, page_id, column_id)?.size = *size;
            }

            Mutation::DeleteColumn { page_id, column_id } => {
                page_mut(doc, page_id)?
                    .columns
                    .retain(|column| column.id != *column_id);
            }

            Mutation::ReorderColumns { page_id, from_index, to_index } => {
                splice_move(&mut page_mut(doc, page_id)?.columns, *from_index, *to_index)?;
            }

            Mutation::AddWidget { page_id, column_id, widget_id, widget_type } => {
                column_mut(doc, page_id, column_id)?
                    .widgets
                    .push(Widget::new(widget_id.clone(), *widget_type));
            }

            Mutation::UpdateWidget { page_id, column_id, widget_id, patch } => {
                let widget = doc
                    .find_widget_mut(page_id, column_id, widget_id)
                    .ok_or_else(|| MutationError::WidgetNotFound(widget_id.clone()))?;
                patch.apply_to(widget);
            }

            Mutation::DeleteWidget { page_id, column_id, widget_id } => {
                column_mut(doc, page_id, column_id)?
                    .widgets
                    .retain(|widget| widget.id != *widget_id);
            }

            Mutation::MoveWidget {
                source_page_id,
                source_column_id,
                source_index,
                dest_page_id,
                dest_column_id,
                dest_index,
            } => {
                // Resolve both ends before touching either column
                let (sp, sc) = locate_column(doc, source_page_id, source_column_id)?;
                let (dp, dc) = locate_column(doc, dest_page_id, dest_column_id)?;

                let widget = doc.pages[sp].columns[sc].widgets.remove(*source_index);
                let dest = &mut doc.pages[dp].columns[dc].widgets;
                let index = (*dest_index).min(dest.len());
                dest.insert(index, widget);
            }

            Mutation::ReorderWidgets { page_id, column_id, from_index, to_index } => {
                splice_move(
                    &mut column_mut(doc, page_id, column_id)?.widgets,
                    *from_index,
                    *to_index,
                )?;
            }
        }

        Ok(())
    }

    /// Validate without applying
    pub fn validate(&self, doc: &Document) -> Result<(), MutationError> {
        match self {
            Mutation::AddPage { page_id, .. } => {
                if doc.find_page(page_id).is_some() {
                    return Err(MutationError::DuplicateId(page_id.clone()));
                }
                Ok(())
            }

            Mutation::UpdatePage { page_id, .. } | Mutation::DeletePage { page_id } => {
                page(doc, page_id).map(|_| ())
            }

            Mutation::ReorderPages { from_index, to_index } => {
                check_indices(doc.pages.len(), *from_index, *to_index)
            }

            Mutation::AddColumn { page_id, column_id, .. } => {
                if page(doc, page_id)?.find_column(column_id).is_some() {
                    return Err(MutationError::DuplicateId(column_id.clone()));
                }
                Ok(())
            }

            Mutation::UpdateColumn { page_id, column_id, .. }
            | Mutation::DeleteColumn { page_id, column_id } => {
                column(doc, page_id, column_id).map(|_| ())
            }

            Mutation::ReorderColumns { page_id, from_index, to_index } => {
                check_indices(page(doc, page_id)?.columns.len(), *from_index, *to_index)
            }

            Mutation::AddWidget { page_id, column_id, widget_id, .. } => {
                if column(doc, page_id, column_id)?.find_widget(widget_id).is_some() {
                    return Err(MutationError::DuplicateId(widget_id.clone()));
                }
                Ok(())
            }

            Mutation::UpdateWidget { page_id, column_id, widget_id, patch } => {
                if let Some(key) = patch.shared_payload_key() {
                    return Err(MutationError::SharedPayloadKey(key.to_string()));
                }
                column(doc, page_id, column_id)?
                    .find_widget(widget_id)
                    .ok_or_else(|| MutationError::WidgetNotFound(widget_id.clone()))?;
                Ok(())
            }

            Mutation::DeleteWidget { page_id, column_id, widget_id } => {
                column(doc, page_id, column_id)?
                    .find_widget(widget_id)
                    .ok_or_else(|| MutationError::WidgetNotFound(widget_id.clone()))?;
                Ok(())
            }

            Mutation::MoveWidget {
                source_page_id,
                source_column_id,
                source_index,
                dest_page_id,
                dest_column_id,
                ..
            } => {
                let source = column(doc, source_page_id, source_column_id)?;
                column(doc, dest_page_id, dest_column_id)?;
                check_index(source.widgets.len(), *source_index)
            }

            Mutation::ReorderWidgets { page_id, column_id, from_index, to_index } => {
                check_indices(
                    column(doc, page_id, column_id)?.widgets.len(),
                    *from_index,
                    *to_index,
                )
            }
        }
    }

    /// Short human-readable label, used for undo history
    pub fn describe(&self) -> &'static str {
        match self {
            Mutation::AddPage { .. } => "Add page",
            Mutation::UpdatePage { .. } => "Update page",
            Mutation::DeletePage { .. } => "Delete page",
            Mutation::ReorderPages { .. } => "Reorder pages",
            Mutation::AddColumn { .. } => "Add column",
            Mutation::UpdateColumn { .. } => "Resize column",
            Mutation::DeleteColumn { .. } => "Delete column",
            Mutation::ReorderColumns { .. } => "Reorder columns",
            Mutation::AddWidget { .. } => "Add widget",
            Mutation::UpdateWidget { .. } => "Update widget",
            Mutation::DeleteWidget { .. } => "Delete widget",
            Mutation::MoveWidget { .. } => "Move widget",
            Mutation::ReorderWidgets { .. } => "Reorder widgets",
        }
    }
}

fn page<'a>(doc: &'a Document, page_id: &str) -> Result<&'a Page, MutationError> {
    doc.find_page(page_id)
        .ok_or_else(|| MutationError::PageNotFound(page_id.to_string()))
}

fn page_mut<'a>(doc: &'a mut Document, page_id: &str) -> Result<&'a mut Page, MutationError> {
    doc.find_page_mut(page_id)
        .ok_or_else(|| MutationError::PageNotFound(page_id.to_string()))
}

fn column<'a>(doc: &'a Document, page_id: &str, column_id: &str) -> Result<&'a Column, MutationError> {
    page(doc, page_id)?
        .find_column(column_id)
        .ok_or_else(|| MutationError::ColumnNotFound(column_id.to_string()))
}

fn column_mut<'a>(
    doc: &'a mut Document,
    page_id: &str,
    column_id: &str,
) -> Result<&'a mut Column, MutationError> {
    page_mut(doc, page_id)?
        .find_column_mut(column_id)
        .ok_or_else(|| MutationError::ColumnNotFound(column_id.to_string()))
}

/// Positions of a column as (page index, column index)
fn locate_column(
    doc: &Document,
    page_id: &str,
    column_id: &str,
) -> Result<(usize, usize), MutationError> {
    let page_index = doc
        .page_index(page_id)
        .ok_or_else(|| MutationError::PageNotFound(page_id.to_string()))?;
    let column_index = doc.pages[page_index]
        .column_index(column_id)
        .ok_or_else(|| MutationError::ColumnNotFound(column_id.to_string()))?;
    Ok((page_index, column_index))
}

fn check_index(len: usize, index: usize) -> Result<(), MutationError> {
    if index < len {
        Ok(())
    } else {
        Err(MutationError::IndexOutOfRange { index, len })
    }
}

fn check_indices(len: usize, from: usize, to: usize) -> Result<(), MutationError> {
    check_index(len, from)?;
    check_index(len, to)
}

fn splice_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), MutationError> {
    check_indices(items.len(), from, to)?;
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_column() -> Document {
        let mut doc = Document::new();
        Mutation::AddPage { page_id: "p".into(), name: "Home".into() }
            .apply(&mut doc)
            .unwrap();
        Mutation::AddColumn { page_id: "p".into(), column_id: "c".into(), size: ColumnSize::Full }
            .apply(&mut doc)
            .unwrap();
        doc
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdatePage {
            page_id: "page-1".to_string(),
            patch: PagePatch::new().name("Home").width(PageWidth::Wide),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_validation_rejects_missing_targets() {
        let doc = doc_with_column();

        let missing_page = Mutation::DeletePage { page_id: "nope".into() };
        assert_eq!(
            missing_page.validate(&doc),
            Err(MutationError::PageNotFound("nope".into()))
        );

        let missing_column = Mutation::AddWidget {
            page_id: "p".into(),
            column_id: "nope".into(),
            widget_id: "w".into(),
            widget_type: WidgetType::Clock,
        };
        assert_eq!(
            missing_column.validate(&doc),
            Err(MutationError::ColumnNotFound("nope".into()))
        );
    }

    #[test]
    fn test_failed_apply_leaves_document_untouched() {
        let mut doc = doc_with_column();
        let before = doc.clone();

        let result = Mutation::ReorderColumns { page_id: "p".into(), from_index: 0, to_index: 4 }
            .apply(&mut doc);

        assert_eq!(result, Err(MutationError::IndexOutOfRange { index: 4, len: 1 }));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut doc = doc_with_column();
        let result = Mutation::AddPage { page_id: "p".into(), name: "Again".into() }.apply(&mut doc);

        assert_eq!(result, Err(MutationError::DuplicateId("p".into())));
        assert_eq!(doc.pages.len(), 1);
    }

    #[test]
    fn test_splice_move() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        splice_move(&mut items, 0, 2).unwrap();
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);

        splice_move(&mut items, 3, 0).unwrap();
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);

        splice_move(&mut items, 1, 1).unwrap();
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);

        assert!(splice_move(&mut items, 4, 0).is_err());
    }

    #[test]
    fn test_page_patch_merges() {
        let mut page = Page::new("p", "Home");
        page.slug = Some("home".into());

        PagePatch::new().width(PageWidth::Slim).apply_to(&mut page);
        assert_eq!(page.name, "Home");
        assert_eq!(page.slug.as_deref(), Some("home"));
        assert_eq!(page.width, PageWidth::Slim);

        PagePatch::new().slug("").apply_to(&mut page);
        assert_eq!(page.slug, None);
    }

    #[test]
    fn test_widget_patch_replaces_payload() {
        let mut widget = Widget::new("w", WidgetType::Weather);
        widget.properties.insert("location".into(), serde_json::json!("London"));
        widget.properties.insert("units".into(), serde_json::json!("metric"));

        let mut payload = Payload::new();
        payload.insert("location".into(), serde_json::json!("Paris"));
        WidgetPatch::new().title("Weather").properties(payload.clone()).apply_to(&mut widget);

        assert_eq!(widget.title.as_deref(), Some("Weather"));
        assert_eq!(widget.properties, payload);
    }

    #[test]
    fn test_shared_keys_in_payload_are_rejected() {
        let mut doc = doc_with_column();
        Mutation::AddWidget {
            page_id: "p".into(),
            column_id: "c".into(),
            widget_id: "w".into(),
            widget_type: WidgetType::Rss,
        }
        .apply(&mut doc)
        .unwrap();
        let before = doc.clone();

        let mut payload = Payload::new();
        payload.insert("limit".into(), serde_json::json!(5));
        payload.insert("cache".into(), serde_json::json!("1h"));

        let result = Mutation::UpdateWidget {
            page_id: "p".into(),
            column_id: "c".into(),
            widget_id: "w".into(),
            patch: WidgetPatch::new().properties(payload),
        }
        .apply(&mut doc);

        assert_eq!(result, Err(MutationError::SharedPayloadKey("cache".into())));
        assert_eq!(doc, before);
    }
}
