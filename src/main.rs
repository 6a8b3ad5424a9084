#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gradient_hero_core::logging::LoggingBuilder;
use gradient_hero_core::{submitter_from_config, HeroConfig};

use crate::context::HeroContext;

/// Global hero context, set once from command line and config file
static HERO_CONTEXT: OnceLock<HeroContext> = OnceLock::new();

/// Get the hero context (set at startup or defaults)
pub fn get_hero_context() -> HeroContext {
    HERO_CONTEXT
        .get_or_init(HeroContext::simulated_default)
        .clone()
}

/// Gradient Hero - waitlist landing section
#[derive(Parser, Debug)]
#[command(name = "gradient-hero-desktop")]
#[command(about = "Gradient bar hero section with an email waitlist")]
struct Args {
    /// JSON config file (any subset of the defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Waitlist service URL (overrides the config; omit to simulate)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0, value_parser = parse_dimension)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0, value_parser = parse_dimension)]
    height: f64,

    /// Tracing filter, e.g. "gradient_hero_core=debug" (defaults to RUST_LOG, then info)
    #[arg(long)]
    log: Option<String>,
}

/// Window dimensions must be positive, finite logical pixels.
fn parse_dimension(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("not a number: {}", e))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("must be a positive number of pixels, got {}", s));
    }
    Ok(value)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    logging.init()?;

    let mut config = match &args.config {
        Some(path) => HeroConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => HeroConfig::default(),
    };
    if let Some(endpoint) = args.endpoint {
        config.waitlist.endpoint = Some(endpoint);
        config.validate()?;
    }

    let submitter = submitter_from_config(&config.waitlist)?;
    match &config.waitlist.endpoint {
        Some(endpoint) => tracing::info!("Waitlist submissions go to {}", endpoint),
        None => tracing::info!(
            "No waitlist endpoint configured, simulating {}ms submissions",
            config.waitlist.submit_latency_ms
        ),
    }

    let title = format!("{} - Join The Waitlist", config.content.brand);
    let _ = HERO_CONTEXT.set(HeroContext::new(config, submitter));

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
