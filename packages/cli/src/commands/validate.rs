use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use glance_model::decode;
use glance_validator::{validate_document, DiagnosticLevel, DocumentReport, RuleRegistry};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Dashboard config to check (defaults to the configured file)
    pub file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn validate(args: ValidateArgs, cwd: &Path, config: &Config) -> Result<()> {
    let path = config.resolve_file(cwd, args.file.as_deref());
    let source = fs::read_to_string(&path)?;
    let document = decode(&source)?;

    let report = validate_document(&document, &RuleRegistry::default());

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print_report(&path, &report),
        other => bail!("Unknown output format: {other}. Use: text or json"),
    }

    if !report.is_valid() {
        bail!("{} layout error(s) found", report.error_count());
    }

    Ok(())
}

fn print_report(path: &Path, report: &DocumentReport) {
    println!("🔍 {} {}", "Checking".green().bold(), path.display());
    println!();

    for (index, page) in report.pages.iter().enumerate() {
        if page.diagnostics.is_empty() {
            println!("{} #{} {}", "✓".green(), index, page.page_name);
            continue;
        }

        println!("{} #{} {}", "✗".red(), index, page.page_name);
        for diagnostic in &page.diagnostics {
            let level = match diagnostic.level {
                DiagnosticLevel::Error => "error".red().bold(),
                DiagnosticLevel::Warning => "warning".yellow().bold(),
                DiagnosticLevel::Info => "info".blue().bold(),
            };
            println!("    {}[{}]: {}", level, diagnostic.rule, diagnostic.message);

            if let Some(suggestion) = &diagnostic.suggestion {
                println!("      {} {}", "help:".cyan(), suggestion);
            }
        }
    }

    println!();
    println!("   Pages checked: {}", report.pages.len());
    if report.error_count() > 0 {
        println!("   {} {}", "Errors:".red(), report.error_count());
    }
    if report.warning_count() > 0 {
        println!("   {} {}", "Warnings:".yellow(), report.warning_count());
    }
    if report.error_count() == 0 && report.warning_count() == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}
