//! Integration tests for editor crate

use glance_editor::{
    ConfigStorage, ConfigStore, EditorError, FileStorage, MemoryStorage, WidgetPatch,
};
use glance_model::{ColumnSize, FormatError, PageWidth, PayloadFormatError, WidgetType};
use serde_json::json;

const CONFIG: &str = r#"
pages:
  - name: Home
    width: slim
    columns:
      - size: small
        widgets:
          - type: weather
            location: London
      - size: full
  - name: News
    columns:
      - size: full
theme:
  primary-color: 157 47 65
"#;

#[test]
fn test_document_lifecycle() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("glance.yml");
    std::fs::write(&path, CONFIG)?;

    let mut storage = FileStorage::new(&path);
    let mut store = ConfigStore::new();
    assert!(store.load_from(&storage)?);
    assert!(!store.is_dirty());
    assert!(!store.can_undo());

    let page = store.document().pages[1].id.clone();
    store.update_page(&page, glance_editor::PagePatch::new().name("Headlines"));
    assert!(store.is_dirty());

    store.save_to(&mut storage)?;
    assert!(!store.is_dirty());

    let saved = std::fs::read_to_string(&path)?;
    assert!(saved.contains("name: Headlines"));
    assert!(saved.contains("primary-color: 157 47 65"));
    Ok(())
}

#[test]
fn test_load_from_empty_storage() -> anyhow::Result<()> {
    let mut store = ConfigStore::new();
    assert!(!store.load_from(&MemoryStorage::new())?);
    assert!(store.document().pages.is_empty());
    Ok(())
}

#[test]
fn test_load_surfaces_format_errors() {
    let mut store = ConfigStore::new();
    let storage = MemoryStorage::with_contents("- just\n- a list\n");

    let err = store.load_from(&storage).unwrap_err();
    assert!(matches!(err, EditorError::Format(FormatError::NotAnObject)));
}

#[test]
fn test_import_selects_first_page() {
    let mut store = ConfigStore::new();
    store.import_text(CONFIG).unwrap();

    let first = &store.document().pages[0];
    assert_eq!(store.selected_page_id(), Some(first.id.as_str()));
    assert_eq!(first.width, PageWidth::Slim);
}

#[test]
fn test_failed_import_leaves_store_untouched() {
    let mut store = ConfigStore::new();
    let page = store.add_page("Keep me");
    let before = store.snapshot();
    let version = store.version();

    let err = store.import_text("pages: \"not-an-array\"\n").unwrap_err();
    assert_eq!(err, FormatError::MissingPages);
    assert_eq!(err.to_string(), "Invalid YAML: pages array is required");

    assert_eq!(*store.document(), *before);
    assert_eq!(store.version(), version);
    assert_eq!(store.selected_page_id(), Some(page.as_str()));
}

#[test]
fn test_import_can_be_undone() {
    let mut store = ConfigStore::new();
    store.add_page("Mine");
    store.import_text(CONFIG).unwrap();
    assert_eq!(store.document().pages.len(), 2);

    assert!(store.undo());
    assert_eq!(store.document().pages[0].name, "Mine");
}

#[test]
fn test_reset() {
    let mut store = ConfigStore::new();
    store.import_text(CONFIG).unwrap();
    store.reset();

    assert!(store.document().pages.is_empty());
    assert!(store.document().extra.is_empty());
    assert_eq!(store.selected_page_id(), None);
    assert_eq!(store.export_text().unwrap(), "pages: []\n");
}

#[test]
fn test_slim_page_rejects_third_column() {
    let mut store = ConfigStore::new();
    store.import_text(CONFIG).unwrap();

    let check = store.column_validation();
    assert!(check.suggested_sizes.is_empty());
    assert_eq!(
        check.can_add_column(ColumnSize::Small).reason.as_deref(),
        Some("Slim pages can have maximum 2 columns")
    );
}

#[test]
fn test_full_after_full_is_accepted() {
    let mut store = ConfigStore::new();
    store.import_text(CONFIG).unwrap();
    let news = store.document().pages[1].id.clone();
    store.select_page(Some(&news));

    assert!(store.column_validation().can_add_column(ColumnSize::Full).can_add);
}

#[test]
fn test_widget_payload_text() -> anyhow::Result<()> {
    let mut store = ConfigStore::new();
    store.import_text(CONFIG)?;
    let page = store.document().pages[0].clone();
    let column = &page.columns[0];
    let weather = &column.widgets[0];

    let text = store.widget_payload_text(&page.id, &column.id, &weather.id)?;
    assert_eq!(text.as_deref(), Some("location: London\n"));

    let clock = store.add_widget(&page.id, &column.id, WidgetType::Clock);
    let template = store.widget_payload_text(&page.id, &column.id, &clock)?;
    assert_eq!(template.as_deref(), Some(WidgetType::Clock.template()));

    assert_eq!(store.widget_payload_text(&page.id, &column.id, "missing")?, None);
    Ok(())
}

#[test]
fn test_set_widget_payload_text() {
    let mut store = ConfigStore::new();
    store.import_text(CONFIG).unwrap();
    let page = store.document().pages[0].clone();
    let column = &page.columns[0];
    let weather = &column.widgets[0];

    let outcome = store
        .set_widget_payload_text(&page.id, &column.id, &weather.id, "location: Paris\nunits: imperial\n")
        .unwrap();
    assert!(outcome.is_applied());

    let widget = store.get_widget(&page.id, &column.id, &weather.id).unwrap();
    assert_eq!(widget.properties["location"], json!("Paris"));
    assert_eq!(widget.properties["units"], json!("imperial"));

    let before = store.snapshot();
    let err = store
        .set_widget_payload_text(&page.id, &column.id, &weather.id, "- not\n- a map\n")
        .unwrap_err();
    assert_eq!(err, PayloadFormatError::NotAnObject);
    assert_eq!(*store.document(), *before);
}

#[test]
fn test_round_trip_of_store_built_document() {
    let mut store = ConfigStore::new();
    let page = store.add_page("Home");
    let column = store.add_column(&page, ColumnSize::Full);
    let widget = store.add_widget(&page, &column, WidgetType::Rss);
    store.update_widget(
        &page,
        &column,
        &widget,
        WidgetPatch::new().title("Feeds").cache("1h").css_class("compact"),
    );

    let text = store.export_text().unwrap();
    let mut other = ConfigStore::new();
    other.import_text(&text).unwrap();

    assert!(other.document().same_structure(store.document()));
}

#[test]
fn test_shared_fields_stay_out_of_the_payload() {
    let mut store = ConfigStore::new();
    let page = store.add_page("Home");
    let column = store.add_column(&page, ColumnSize::Full);
    let widget = store.add_widget(&page, &column, WidgetType::Rss);
    store.update_widget(&page, &column, &widget, WidgetPatch::new().title("Feeds"));

    let before = store.snapshot();
    let err = store
        .set_widget_payload_text(&page, &column, &widget, "title: Other\nlimit: 5\n")
        .unwrap_err();
    assert_eq!(err, PayloadFormatError::SharedKey("title".into()));
    assert_eq!(*store.document(), *before);

    let mut payload = serde_json::Map::new();
    payload.insert("cache".into(), json!("1h"));
    let outcome = store.update_widget(&page, &column, &widget, WidgetPatch::new().properties(payload));
    assert!(!outcome.is_applied());
    assert_eq!(*store.document(), *before);

    let outcome = store
        .set_widget_payload_text(&page, &column, &widget, "limit: 5\n")
        .unwrap();
    assert!(outcome.is_applied());

    let text = store.export_text().unwrap();
    let mut other = ConfigStore::new();
    other.import_text(&text).unwrap();

    assert!(other.document().same_structure(store.document()));
    let reloaded = &other.document().pages[0].columns[0].widgets[0];
    assert_eq!(reloaded.title.as_deref(), Some("Feeds"));
    assert_eq!(reloaded.properties["limit"], json!(5));
}

#[test]
fn test_memory_storage_save() -> anyhow::Result<()> {
    let mut store = ConfigStore::new();
    store.add_page("Home");

    let mut storage = MemoryStorage::new();
    store.save_to(&mut storage)?;

    assert_eq!(storage.load()?.as_deref(), Some("pages:\n- name: Home\n  columns: []\n"));
    Ok(())
}
