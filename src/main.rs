use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use roomplan::cli;
use roomplan::renderer::Palette;
use roomplan::theme::{Theme, BUILTIN_THEMES};
use roomplan::{GeneratorConfig, LayoutGenerator};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match args.command {
        Some(cli::Command::ListThemes) => list_themes(),
        None => generate_plan(&args),
    }
}

fn list_themes() -> Result<()> {
    println!("Built-in themes:");
    for name in BUILTIN_THEMES {
        println!("  {}", name);
    }

    println!("\nSearch directories for <name>.yaml:");
    for path in Theme::theme_search_paths() {
        println!("  {}", path.display());
    }
    Ok(())
}

fn generate_plan(args: &cli::Args) -> Result<()> {
    let theme = Theme::resolve(&args.theme)?;
    let palette = Palette::from_theme(&theme.palette)
        .with_context(|| format!("Invalid palette in theme '{}'", theme.name))?;

    let mut title = theme.title.clone();
    if let Some(text) = &args.title {
        title.text = text.clone();
    }

    let config = GeneratorConfig {
        width: args.width,
        height: args.height,
        seed: args.seed,
        title,
        font: theme.font.clone(),
    };

    let mut generator = LayoutGenerator::new(config, palette).context("Invalid canvas configuration")?;
    log::info!("Using theme '{}', seed {}", theme.name, generator.seed());

    generator.generate().context("Failed to generate floor plan")?;

    let output = if args.timestamp {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        cli::timestamped(&args.output, &stamp)
    } else {
        args.output.clone()
    };

    generator
        .save(&output)
        .with_context(|| format!("Failed to save floor plan to {}", output.display()))?;

    if let Some(json_path) = &args.layout_json {
        let json = serde_json::to_string_pretty(generator.layout())?;
        fs::write(json_path, json)
            .with_context(|| format!("Failed to write layout summary: {}", json_path.display()))?;
        log::info!("Layout summary written to {}", json_path.display());
    }

    let layout = generator.layout();
    log::info!(
        "Plan: {}x{} room, {} furniture pieces ({})",
        layout.room.width,
        layout.room.height,
        layout.furniture.len(),
        layout
            .furniture
            .iter()
            .map(|item| item.kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
