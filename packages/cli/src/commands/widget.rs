use super::open_store;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Subcommand;
use colored::Colorize;
use glance_editor::Mutation;
use glance_model::{new_id, WidgetType};
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum WidgetCommand {
    /// Append a widget to a column
    Add {
        /// Page position, starting at 0
        page: usize,

        /// Column position within the page, starting at 0
        column: usize,

        /// Widget type tag (see `glance widgets`)
        widget_type: WidgetType,

        /// Fill the widget with its example settings
        #[arg(short, long)]
        template: bool,

        /// Dashboard config to edit (defaults to the configured file)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

pub fn widget(command: WidgetCommand, cwd: &Path, config: &Config) -> Result<()> {
    match command {
        WidgetCommand::Add {
            page,
            column,
            widget_type,
            template,
            file,
        } => add_widget(
            page,
            column,
            widget_type,
            template,
            &config.resolve_file(cwd, file.as_deref()),
            config,
        ),
    }
}

fn add_widget(
    page_index: usize,
    column_index: usize,
    widget_type: WidgetType,
    template: bool,
    path: &Path,
    config: &Config,
) -> Result<()> {
    let (mut store, mut storage) = open_store(path, config)?;

    let page = store
        .document()
        .pages
        .get(page_index)
        .ok_or_else(|| anyhow!("No page at index {page_index}"))?;
    let column = page
        .columns
        .get(column_index)
        .ok_or_else(|| anyhow!("Page {} has no column at index {column_index}", page.name))?;

    let page_id = page.id.clone();
    let column_id = column.id.clone();
    let page_name = page.name.clone();
    let widget_id = new_id();

    store.try_apply(&Mutation::AddWidget {
        page_id: page_id.clone(),
        column_id: column_id.clone(),
        widget_id: widget_id.clone(),
        widget_type,
    })?;

    if template {
        store.set_widget_payload_text(&page_id, &column_id, &widget_id, widget_type.template())?;
    }

    store.save_to(&mut storage)?;

    println!(
        "{} Added {} to {} column #{}",
        "✓".green(),
        widget_type.label().bright_white(),
        page_name,
        column_index
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glance_model::decode;

    const DASHBOARD: &str = "pages:\n- name: Home\n  columns:\n  - size: full\n";

    #[test]
    fn test_add_widget_with_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glance.yml");
        std::fs::write(&path, DASHBOARD).unwrap();

        add_widget(0, 0, WidgetType::HackerNews, true, &path, &Config::default()).unwrap();

        let doc = decode(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let widget = &doc.pages[0].columns[0].widgets[0];
        assert_eq!(widget.widget_type, WidgetType::HackerNews);
        assert_eq!(widget.properties["limit"], serde_json::json!(15));
    }

    #[test]
    fn test_add_widget_bad_column_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glance.yml");
        std::fs::write(&path, DASHBOARD).unwrap();

        let err = add_widget(0, 3, WidgetType::Clock, false, &path, &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "Page Home has no column at index 3");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DASHBOARD);
    }
}
