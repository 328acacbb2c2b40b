mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    fmt, init, page, validate, widget, widgets, FmtArgs, InitArgs, PageCommand, ValidateArgs,
    WidgetCommand, WidgetsArgs,
};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Glance CLI - edit dashboard configs from the terminal
#[derive(Parser, Debug)]
#[command(name = "glance")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log editor activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a starter dashboard config
    Init(InitArgs),

    /// Check every page's column layout
    Validate(ValidateArgs),

    /// Normalize a dashboard config
    Fmt(FmtArgs),

    /// List available widget types
    Widgets(WidgetsArgs),

    /// Edit pages
    Page {
        #[command(subcommand)]
        command: PageCommand,
    },

    /// Edit widgets
    Widget {
        #[command(subcommand)]
        command: WidgetCommand,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(&cwd)?;

    match cli.command {
        Command::Init(args) => init(args, &cwd, &config),
        Command::Validate(args) => validate(args, &cwd, &config),
        Command::Fmt(args) => fmt(args, &cwd, &config),
        Command::Widgets(args) => widgets(args),
        Command::Page { command } => page(command, &cwd, &config),
        Command::Widget { command } => widget(command, &cwd, &config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
