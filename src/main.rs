//! Bytetape - a terminal editor for files as grids of raw bytes.
//!
//! # Usage
//!
//! ```bash
//! bytetape notes.txt
//! bytetape --tab-width 8 --filler 0x20 notes.txt
//! bytetape --log bytetape.log notes.txt
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bytetape::app::App;
use bytetape::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_filler, parse_flag_tokens, parse_tab_width, save_config_flags,
};
use bytetape::editor::DEFAULT_FILLER;
use bytetape::ui::glyph::TAB_WIDTH;

/// Edit a file as a grid of raw bytes
#[derive(Parser, Debug)]
#[command(name = "bytetape", version, about, long_about = None)]
struct Cli {
    /// File to edit (created on first save if missing)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Cells a tab token spans, counting its `\t` (1-64)
    #[arg(long, value_name = "N", value_parser = parse_tab_width)]
    tab_width: Option<usize>,

    /// Byte inserted when the cursor grows a line (char, decimal or 0x hex)
    #[arg(long, value_name = "BYTE", value_parser = parse_filler)]
    filler: Option<u8>,

    /// Write diagnostics to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(log: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log.as_deref())?;
    tracing::debug!(?effective, "configuration");

    App::new(cli.file)
        .with_tab_width(effective.tab_width.unwrap_or(TAB_WIDTH))
        .with_filler(effective.filler.unwrap_or(DEFAULT_FILLER))
        .run()
        .context("Application error")
}
