use super::open_store;
use crate::config::Config;
use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use glance_editor::PagePatch;
use glance_model::{ColumnSize, PageWidth};
use glance_validator::can_add_column;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum PageCommand {
    /// Append a page to the dashboard
    Add {
        /// Page name
        name: String,

        /// Page width (default, slim, wide)
        #[arg(short, long, default_value = "default")]
        width: PageWidth,

        /// Column to add, in order (small, full); repeatable
        #[arg(short, long = "column")]
        columns: Vec<ColumnSize>,

        /// Dashboard config to edit (defaults to the configured file)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

pub fn page(command: PageCommand, cwd: &Path, config: &Config) -> Result<()> {
    match command {
        PageCommand::Add {
            name,
            width,
            columns,
            file,
        } => add_page(&name, width, &columns, &config.resolve_file(cwd, file.as_deref()), config),
    }
}

fn add_page(
    name: &str,
    width: PageWidth,
    columns: &[ColumnSize],
    path: &Path,
    config: &Config,
) -> Result<()> {
    let (mut store, mut storage) = open_store(path, config)?;

    store.begin_batch(format!("Add page {name}"));
    let page_id = store.add_page(name);
    if width != PageWidth::Default {
        store.update_page(&page_id, PagePatch::new().width(width));
    }

    for size in columns {
        let check = match store.get_page(&page_id) {
            Some(page) => can_add_column(page, *size),
            None => continue,
        };

        if check.can_add {
            store.add_column(&page_id, *size);
            println!("  {} Added {} column", "✓".green(), size);
        } else {
            println!(
                "  {} Skipped {} column: {}",
                "⚠️".yellow(),
                size,
                check.reason.unwrap_or_default()
            );
        }
    }
    store.end_batch();

    store.save_to(&mut storage)?;

    let index = store.document().pages.len().saturating_sub(1);
    println!("{} Added page #{} {}", "✓".green(), index, name.bright_white());
    Ok(())
}
