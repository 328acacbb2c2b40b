use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use glance_editor::{ConfigStore, FileStorage};
use glance_model::{ColumnSize, WidgetType};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Dashboard file to create (defaults to the configured file)
    pub file: Option<PathBuf>,

    /// Force overwrite existing dashboard config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path, config: &Config) -> Result<()> {
    let path = config.resolve_file(cwd, args.file.as_deref());

    if path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            path.display().to_string().bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Glance dashboard...".bright_blue().bold());

    let mut store = ConfigStore::with_history_limit(config.history_limit);
    let page = store.add_page(config.default_page_name.clone());
    let column = store.add_column(&page, ColumnSize::Full);
    store.add_widget(&page, &column, WidgetType::Clock);

    store.save_to(&mut FileStorage::new(&path))?;
    println!("  {} Created {}", "✓".green(), path.display());

    let settings_path = cwd.join(DEFAULT_CONFIG_NAME);
    if !settings_path.exists() {
        fs::write(&settings_path, serde_json::to_string_pretty(config)?)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    }

    println!();
    println!("{}", "✅ Dashboard initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: glance widgets");
    println!("  2. Run: glance widget add 0 0 <type>");
    println!("  3. Run: glance validate");

    Ok(())
}
