use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::layout::{DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "roomplan")]
#[command(version)]
#[command(about = "Generate a random top-down room floor plan image", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output image (png, bmp, jpg, tga; other extensions are written as PNG)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Random seed for a reproducible plan
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Theme name or path to a theme YAML file
    #[arg(short, long, default_value = "default")]
    pub theme: String,

    /// Caption text (overrides the theme)
    #[arg(long)]
    pub title: Option<String>,

    /// Also write the placed elements as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub layout_json: Option<PathBuf>,

    /// Append a _YYYYMMDD_HHMMSS timestamp to the output file name
    #[arg(long)]
    pub timestamp: bool,

    /// Log every placement
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List built-in themes and theme search directories
    ListThemes,
}

/// `room_layout.png` -> `room_layout_20261015_120000.png`
pub fn timestamped(path: &Path, stamp: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "room_layout".to_string());
    let file_name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_{}", stem, stamp),
    };
    path.with_file_name(file_name)
}
