use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use carousel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "A scroll-snapping carousel in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run(RunArgs),
    /// Run autoplay headless and print the event log as JSON
    Simulate(SimulateArgs),
    /// Print the effective configuration
    Config {
        /// Write the default configuration file instead
        #[arg(long)]
        init: bool,
    },
}

/// Overrides applied on top of the config file
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Number of demo slides
    #[arg(long)]
    pub slides: Option<usize>,
    /// Start with autoplay enabled
    #[arg(long)]
    pub autoplay: bool,
    /// Autoplay period in milliseconds
    #[arg(long)]
    pub speed: Option<u64>,
    /// Number of slides visible at once
    #[arg(long)]
    pub slides_to_show: Option<f64>,
    /// Stop at the ends instead of wrapping
    #[arg(long)]
    pub free_scroll: bool,
}

impl RunArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(slides) = self.slides {
            config.ui.demo_slides = slides;
        }
        if self.autoplay {
            config.carousel.auto_play = true;
        }
        if let Some(speed) = self.speed {
            config.carousel.autoplay_speed_ms = speed;
        }
        if let Some(slides_to_show) = self.slides_to_show {
            config.carousel.slides_to_show = slides_to_show;
        }
        if self.free_scroll {
            config.carousel.use_free_scroll = true;
        }
    }
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of slides
    #[arg(long, default_value_t = 5)]
    pub slides: usize,
    /// Simulated wall-clock time in milliseconds
    #[arg(long, default_value_t = 6500)]
    pub duration_ms: u64,
    /// Autoplay period in milliseconds (defaults to the config file)
    #[arg(long)]
    pub speed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run(args)) => {
            args.apply(&mut config);
            init_logging(&config, true)?;
            commands::run::run(config)
        }
        None => {
            init_logging(&config, true)?;
            commands::run::run(config)
        }
        Some(Commands::Simulate(args)) => {
            init_logging(&config, false)?;
            commands::simulate::run(config, args).await
        }
        Some(Commands::Config { init }) => {
            init_logging(&config, false)?;
            commands::config::run(&config, init)
        }
    }
}

/// Initialize tracing. The TUI logs to a file so output does not tear the
/// alternate screen; everything else logs to stderr.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        std::fs::create_dir_all(config.data_dir())?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
