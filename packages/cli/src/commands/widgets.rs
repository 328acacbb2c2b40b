use anyhow::Result;
use clap::Args;
use colored::Colorize;
use glance_model::{WidgetCategory, WidgetType};

#[derive(Args, Debug)]
pub struct WidgetsArgs {
    /// Only list one category (feeds, information, productivity, ...)
    #[arg(short, long)]
    pub category: Option<WidgetCategory>,
}

pub fn widgets(args: WidgetsArgs) -> Result<()> {
    let categories: Vec<WidgetCategory> = match args.category {
        Some(category) => vec![category],
        None => WidgetCategory::ALL.to_vec(),
    };

    for category in categories {
        println!("{}", category.as_str().bright_blue().bold());
        for widget_type in WidgetType::in_category(category) {
            println!(
                "  {} {:<22} {}",
                format!("{:<20}", widget_type.as_str()).bright_white(),
                widget_type.label(),
                widget_type.description().dimmed()
            );
        }
        println!();
    }

    Ok(())
}
