//! themeforge - CLI tool to generate accessible CSS theme variables.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use theme_core::generator::ColorFormat;
use theme_core::{
    apply_theme_to_file, audit_contrast, generate_stylesheet, generate_theme,
    generate_theme_css_with, load_theme_config, validate_config, CssOptions, Mode, ThemeConfig,
};

/// Generate CSS custom properties from a brand color theme.
#[derive(Parser, Debug)]
#[command(name = "themeforge")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Theme config JSON file (defaults are used when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output CSS file path (stdout when omitted and --apply is not given)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the config's mode (light or dark)
    #[arg(long)]
    mode: Option<Mode>,

    /// Override the config's primary color
    #[arg(long)]
    primary: Option<String>,

    /// Emit light variables under :root and dark variables under .dark
    #[arg(long)]
    both: bool,

    /// Color value format (hex or hsl)
    #[arg(long, default_value = "hex")]
    format: String,

    /// HTML file whose theme <style> element should be updated
    #[arg(long)]
    apply: Option<PathBuf>,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output the generated theme as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let color_format = ColorFormat::from_name(&args.format)
        .with_context(|| format!("Unknown color format '{}' (expected hex or hsl)", args.format))?;

    // Load the config
    let mut config = match &args.input {
        Some(path) => {
            info!("Loading: {}", path.display());
            load_theme_config(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => ThemeConfig::default(),
    };

    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(primary) = &args.primary {
        config.primary = primary.clone();
    }

    // Validate
    let validation = validate_config(&config);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    let theme = generate_theme(&config)?;

    for issue in audit_contrast(&theme, config.min_contrast_ratio) {
        warn!(
            "{}: {} on {} has contrast {:.2}",
            issue.name, issue.foreground, issue.background, issue.ratio
        );
    }

    // Debug output
    if args.debug {
        let json = serde_json::to_string_pretty(&theme)?;
        println!("{}", json);
        return Ok(());
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Generate output
    let css = if args.both {
        generate_stylesheet(&config, color_format)?
    } else {
        let options = CssOptions {
            color_format,
            ..Default::default()
        };
        generate_theme_css_with(&theme, &options)
    };

    if let Some(page) = &args.apply {
        apply_theme_to_file(page, &css)
            .with_context(|| format!("Failed to apply theme to {}", page.display()))?;
        info!("Applied theme to: {}", page.display());
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, &css)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None if args.apply.is_none() => print!("{}", css),
        None => {}
    }

    Ok(())
}
