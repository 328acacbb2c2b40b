use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use glance_model::{decode, encode};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Dashboard config to normalize (defaults to the configured file)
    pub file: Option<PathBuf>,

    /// Fail instead of rewriting when the file is not normalized
    #[arg(long)]
    pub check: bool,

    /// Print the normalized config instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,
}

/// Normalize a config by decoding and re-encoding it
pub fn format_source(source: &str) -> Result<String> {
    Ok(encode(&decode(source)?)?)
}

pub fn fmt(args: FmtArgs, cwd: &Path, config: &Config) -> Result<()> {
    let path = config.resolve_file(cwd, args.file.as_deref());
    let source = fs::read_to_string(&path)?;
    let formatted = format_source(&source)?;
    let unchanged = formatted == source;
    debug!(path = %path.display(), unchanged, "formatted config");

    if args.stdout {
        print!("{formatted}");
        return Ok(());
    }

    if args.check {
        if !unchanged {
            bail!("{} is not normalized. Run `glance fmt` to fix it", path.display());
        }
        println!("{} {} is normalized", "✓".green(), path.display());
        return Ok(());
    }

    if unchanged {
        println!("{} {} unchanged", "✓".green(), path.display());
    } else {
        fs::write(&path, formatted)?;
        println!("{} Formatted {}", "✓".green(), path.display());
    }

    Ok(())
}
