use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use clap::{Args, Parser, Subcommand};
use deck_carousel::{
    carousel::{IndexMapper, NavigatorConfig},
    deck::Deck,
    error::Result,
    tui::{self, Preferences, ThemeMode},
};
use tracing::{info, level_filters::LevelFilter, warn};

const APP_DIR: &str = "deck-carousel";

#[derive(Parser)]
#[command(name = "deck-carousel")]
#[command(version, about = "Swipe through a deck of topical cards in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    tuning: Tuning,

    /// Log file (default: in the user cache directory)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a deck in the carousel viewer (the default)
    View {
        /// Deck JSON file; defaults to the configured deck or the built-in sample
        deck: Option<PathBuf>,
        /// Start in the light theme, regardless of the saved choice
        #[arg(long)]
        light: bool,
    },
    /// Validate a deck file and print a per-category summary
    Check {
        deck: PathBuf,
    },
}

/// Gesture and animation tuning.
#[derive(Args)]
struct Tuning {
    /// Fraction of the card width a drag must exceed to change cards
    #[arg(long, global = true, default_value_t = 0.2)]
    commit_fraction: f32,
    /// Drag resistance past the first or last card (0..1)
    #[arg(long, global = true, default_value_t = 0.25)]
    edge_damping: f32,
    /// Duration of the snap animation in milliseconds
    #[arg(long, global = true, default_value_t = 300)]
    settle_ms: u64,
    /// Pixels of movement before a drag picks an axis
    #[arg(long, global = true, default_value_t = 8.0)]
    axis_threshold: f32,
}

impl Tuning {
    fn config(&self) -> NavigatorConfig {
        NavigatorConfig {
            axis_threshold_px: self.axis_threshold,
            commit_fraction: self.commit_fraction,
            edge_damping: self.edge_damping,
            settle_duration: Duration::from_millis(self.settle_ms),
        }
    }
}

fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .map_or_else(env::temp_dir, |dir| dir.join(APP_DIR))
        .join("deck-carousel.log")
}

fn init_tracing(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = fs::File::create(path)?;
    let directive = "deck_carousel=info"
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

/// Explicit path, then the user's configured deck, then the built-in sample.
fn resolve_deck(path: Option<&Path>) -> Result<Deck> {
    if let Some(path) = path {
        return Deck::load(path);
    }
    if let Some(configured) = dirs::config_dir().map(|dir| dir.join(APP_DIR).join("deck.json")) {
        if configured.is_file() {
            return Deck::load(&configured);
        }
    }
    info!("No deck given, using the built-in sample");
    Deck::sample()
}

fn check(path: &Path) -> Result<()> {
    let deck = Deck::load(path)?;
    let mapper = IndexMapper::new(&deck);
    println!("{}: {} cards", deck.title(), deck.len());
    for (i, category) in deck.categories().iter().enumerate() {
        let size = mapper.category_size(deck_carousel::CategoryId(i));
        if size == 0 {
            warn!(category = %category.name, "Category has no cards");
        }
        println!("  {:>3}  {}", size, category.name);
    }
    Ok(())
}

fn preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("preferences.json"))
}

async fn view(deck: Option<&Path>, light: bool, config: NavigatorConfig) -> Result<()> {
    let deck = resolve_deck(deck)?;
    let preferences = preferences_path();
    let saved = preferences
        .as_deref()
        .map(Preferences::load)
        .unwrap_or_default();
    let mode = if light { ThemeMode::Light } else { saved.theme };
    tui::run(deck, config, mode, preferences).await
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.tuning.config();
    config.validate()?;

    match cli.command {
        Some(Commands::Check { deck }) => check(&deck),
        Some(Commands::View { deck, light }) => view(deck.as_deref(), light, config).await,
        None => view(None, false, config).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so logs go to a file.
    let log_file = cli.log_file.clone().unwrap_or_else(default_log_file);
    if let Err(e) = init_tracing(&log_file) {
        eprintln!("Warning: logging disabled ({}): {e}", log_file.display());
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
