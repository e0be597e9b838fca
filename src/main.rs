//! picatch - a terminal photo album browser.
//!
//! Usage:
//!   picatch [ROOT]                    Launch interactive TUI
//!   picatch list [ALBUM]              List an album
//!   picatch resolve LOCATION          Show where a location's selection settles
//!   picatch --help                    Show help

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use humansize::{BINARY, format_size};

use picatch_core::{
    AlbumController, AlbumPath, ListingSnapshot, MemoryHistory, Navigator, SelectionStatus,
};
use picatch_scan::{AlbumConfig, AlbumLister};

#[derive(Parser)]
#[command(
    name = "picatch",
    version,
    about = "A terminal photo album browser",
    long_about = "picatch browses a directory of photo albums.\n\n\
                  Launch the interactive TUI by running `picatch [ROOT]`, or use \
                  subcommands for quick operations."
)]
struct Cli {
    /// Photos directory (defaults to current directory)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Location to open, e.g. /album/2019/summer/beach.jpg
    #[arg(short, long)]
    location: Option<String>,

    /// Mount the top album at / instead of /album/
    #[arg(short = 'R', long)]
    root_view: bool,

    /// List hidden files and albums
    #[arg(short = 'H', long)]
    include_hidden: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the sub-albums and photos of one album
    List {
        /// Album path, e.g. /2019/summer/
        #[arg(default_value = "/")]
        album: String,

        /// Photos directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show where the selection for a location settles
    Resolve {
        /// Location, e.g. /album/2019/beach.jpg
        location: String,

        /// Photos directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Interpret the location as a root view
        #[arg(short = 'R', long)]
        root_view: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Command::List {
            album,
            root,
            format,
        }) => {
            run_list(&root, &album, cli.include_hidden, format)?;
        }
        Some(Command::Resolve {
            location,
            root,
            root_view,
        }) => {
            run_resolve(&root, &location, root_view)?;
        }
        None => {
            // Launch TUI
            let root = cli.root.canonicalize().context("Invalid photos directory")?;
            let mut config = picatch_tui::TuiConfig::new(root)
                .with_root_view(cli.root_view)
                .with_include_hidden(cli.include_hidden);
            if let Some(location) = cli.location {
                config = config.with_location(location);
            }
            picatch_tui::run_with_config(config)?;
        }
    }

    Ok(())
}

/// List one album and print its entries.
fn run_list(root: &Path, album: &str, include_hidden: bool, format: OutputFormat) -> Result<()> {
    let root = root.canonicalize().context("Invalid photos directory")?;
    let album = AlbumPath::parse(album);

    let config = AlbumConfig::builder()
        .photos_root(root)
        .include_hidden(include_hidden)
        .build()?;
    let listing = AlbumLister::new()
        .list(&config, &album)
        .with_context(|| format!("Failed to list album {album}"))?;

    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "─".repeat(60));
            println!(
                " {} - {} albums, {} photos",
                listing.album,
                listing.album_count(),
                listing.photo_count()
            );
            println!("{}", "─".repeat(60));
            println!();

            if listing.files.is_empty() {
                println!(" Empty album.");
            }
            for entry in &listing.files {
                if entry.is_dir() {
                    println!(" {:>10}  {:>11}  {}", "album", "", entry.name);
                } else {
                    let dimensions = entry
                        .dimensions
                        .map(|d| format!("{}x{}", d.width, d.height))
                        .unwrap_or_default();
                    println!(
                        " {:>10}  {:>11}  {}",
                        format_size(entry.size, BINARY),
                        dimensions,
                        entry.name
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }

    Ok(())
}

/// Mount a view at `location`, feed it the album listing, and print
/// where the selection settles.
fn run_resolve(root: &Path, location: &str, root_view: bool) -> Result<()> {
    let root = root.canonicalize().context("Invalid photos directory")?;
    let config = AlbumConfig::builder()
        .photos_root(root)
        .root_view(root_view)
        .build()?;

    let mut history = MemoryHistory::new(location);
    let mut controller = AlbumController::new(history.components(), config.root_view);
    let album = controller.components().album.clone();

    let snapshot = match AlbumLister::new().list(&config, &album) {
        Ok(listing) => ListingSnapshot::loaded(listing),
        Err(err) => {
            eprintln!("Failed to list album {album}: {err}");
            ListingSnapshot::failed(album)
        }
    };
    controller.receive_listing(snapshot);
    let pushed = controller.sync(&mut history);

    let components = controller.components();
    println!("album:     {}", components.album);
    println!(
        "file:      {}",
        if components.file.is_empty() {
            "(none)"
        } else {
            components.file.as_str()
        }
    );
    println!("root view: {}", controller.is_root_view());
    let status = match controller.selection().status() {
        SelectionStatus::Empty => "empty".to_string(),
        SelectionStatus::Unresolved => "unresolved".to_string(),
        SelectionStatus::Resolved(index) => {
            format!("resolved at {} of {}", index + 1, controller.files().len())
        }
    };
    println!("selection: {status}");
    println!("location:  {}", history.location());
    if pushed {
        println!("           (pushed, was {location})");
    }

    Ok(())
}
