//! Tests for longer edit sequences
//!
//! This tests:
//! - Undo/redo chains
//! - Batched edits
//! - Selection after history moves
//! - Document integrity after operations

use glance_editor::{ConfigStore, Mutation, PagePatch};
use glance_model::{decode, encode, ColumnSize, PageWidth, WidgetType};

#[test]
fn test_move_then_delete_sequence() {
    let mut store = ConfigStore::new();
    let page = store.add_page("Home");
    let left = store.add_column(&page, ColumnSize::Small);
    let right = store.add_column(&page, ColumnSize::Full);
    let clock = store.add_widget(&page, &left, WidgetType::Clock);

    store.move_widget(&page, &left, 0, &page, &right, 0);
    store.delete_column(&page, &right);
    assert!(store.get_widget(&page, &right, &clock).is_none());

    // Undo delete restores the column with the moved widget
    assert!(store.undo());
    assert!(store.get_widget(&page, &right, &clock).is_some());

    // Undo move puts it back
    assert!(store.undo());
    assert!(store.get_widget(&page, &left, &clock).is_some());
    assert!(store.get_column(&page, &right).unwrap().widgets.is_empty());
}

#[test]
fn test_multiple_updates_with_undo_redo() {
    let mut store = ConfigStore::new();
    let page = store.add_page("v0");

    for i in 1..=3 {
        store.update_page(&page, PagePatch::new().name(format!("v{i}")));
    }
    assert_eq!(store.get_page(&page).unwrap().name, "v3");

    store.undo();
    store.undo();
    assert_eq!(store.get_page(&page).unwrap().name, "v1");
    assert_eq!(store.redo_description(), Some("Update page"));

    store.redo();
    assert_eq!(store.get_page(&page).unwrap().name, "v2");

    // A new edit drops the remaining redo step
    store.update_page(&page, PagePatch::new().name("fresh"));
    assert!(!store.can_redo());
    assert!(!store.redo());
}

#[test]
fn test_batched_edits_undo_together() {
    let mut store = ConfigStore::new();

    store.begin_batch("Create dashboard");
    let page = store.add_page("Home");
    let column = store.add_column(&page, ColumnSize::Full);
    store.add_widget(&page, &column, WidgetType::Clock);
    store.end_batch();

    assert_eq!(store.undo_description(), Some("Create dashboard"));

    assert!(store.undo());
    assert!(store.document().pages.is_empty());
    assert!(!store.can_undo());

    assert!(store.redo());
    assert_eq!(store.document().pages[0].columns[0].widgets.len(), 1);
}

#[test]
fn test_noops_are_not_recorded() {
    let mut store = ConfigStore::new();
    store.add_page("Home");
    store.delete_page("missing");
    store.reorder_pages(0, 7);

    assert!(store.undo());
    assert!(!store.can_undo());
}

#[test]
fn test_undo_repairs_selection() {
    let mut store = ConfigStore::new();
    let home = store.add_page("Home");
    let news = store.add_page("News");
    assert_eq!(store.selected_page_id(), Some(news.as_str()));

    // Undoing the add removes the selected page
    store.undo();
    assert_eq!(store.selected_page_id(), Some(home.as_str()));
}

#[test]
fn test_history_limit() {
    let mut store = ConfigStore::with_history_limit(2);
    let page = store.add_page("Home");
    store.update_page(&page, PagePatch::new().width(PageWidth::Wide));
    store.update_page(&page, PagePatch::new().width(PageWidth::Slim));

    assert!(store.undo());
    assert!(store.undo());
    assert!(!store.undo());
    assert_eq!(store.document().pages.len(), 1);
}

#[test]
fn test_replayed_mutations_build_identical_documents() {
    let mutations = vec![
        Mutation::AddPage { page_id: "p1".into(), name: "Home".into() },
        Mutation::AddColumn { page_id: "p1".into(), column_id: "c1".into(), size: ColumnSize::Small },
        Mutation::AddColumn { page_id: "p1".into(), column_id: "c2".into(), size: ColumnSize::Full },
        Mutation::AddWidget {
            page_id: "p1".into(),
            column_id: "c2".into(),
            widget_id: "w1".into(),
            widget_type: WidgetType::HackerNews,
        },
        Mutation::ReorderColumns { page_id: "p1".into(), from_index: 1, to_index: 0 },
    ];

    let mut first = ConfigStore::new();
    let mut second = ConfigStore::new();
    for mutation in &mutations {
        assert!(first.apply(mutation.clone()).is_applied());
        second.apply(mutation.clone());
    }

    assert_eq!(first.document(), second.document());
}

#[test]
fn test_document_integrity_after_complex_sequence() {
    let mut store = ConfigStore::new();
    let home = store.add_page("Home");
    let news = store.add_page("News");
    let small = store.add_column(&home, ColumnSize::Small);
    let full = store.add_column(&home, ColumnSize::Full);
    let news_full = store.add_column(&news, ColumnSize::Full);

    store.add_widget(&home, &small, WidgetType::Calendar);
    store.add_widget(&home, &full, WidgetType::Videos);
    store.add_widget(&news, &news_full, WidgetType::Reddit);
    store.move_widget(&news, &news_full, 0, &home, &full, 0);
    store.update_page(&news, PagePatch::new().width(PageWidth::Slim));
    store.reorder_pages(1, 0);
    store.delete_column(&news, &news_full);

    // The store-built tree survives an encode/decode cycle
    let text = store.export_text().unwrap();
    let decoded = decode(&text).unwrap();
    assert!(decoded.same_structure(store.document()));
    assert_eq!(encode(&decoded).unwrap(), text);

    // Ids stay unique across the whole tree
    let mut ids = Vec::new();
    for page in &store.document().pages {
        ids.push(page.id.clone());
        for column in &page.columns {
            ids.push(column.id.clone());
            ids.extend(column.widgets.iter().map(|w| w.id.clone()));
        }
    }
    let count = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), count);
}
