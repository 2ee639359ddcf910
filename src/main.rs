use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tokio::sync::Mutex;
use xmsync::{
    cli,
    config::{self, MAX_WINDOW_HOURS},
    types::PkceToken,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Mirror the station's recent history into the playlist
    Sync(SyncOptions),

    /// Show the station's recent history
    History(HistoryOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SyncOptions {
    /// Station slug (defaults to STATION_SLUG)
    #[clap(long)]
    pub station: Option<String>,

    /// Size of the history window in hours, at most 8760 (defaults to WINDOW_HOURS, or 12)
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..=MAX_WINDOW_HOURS as i64))]
    pub window_hours: Option<u32>,

    /// Destination playlist; a new one is created when neither this nor SPOTIFY_PLAYLIST_ID is set
    #[clap(long)]
    pub playlist_id: Option<String>,

    /// Resolve tracks and print them without touching the playlist
    #[clap(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct HistoryOptions {
    /// Station slug (defaults to STATION_SLUG)
    #[clap(long)]
    station: Option<String>,

    /// Size of the history window in hours, at most 8760 (defaults to WINDOW_HOURS, or 12)
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..=MAX_WINDOW_HOURS as i64))]
    window_hours: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Sync(opt) => {
            cli::sync(opt.station, opt.window_hours, opt.playlist_id, opt.dry_run).await
        }
        Command::History(opt) => cli::history(opt.station, opt.window_hours).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
