use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use swipefy::{cli, config, types::TimeRange, utils};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Store an access token for the Spotify API
    Auth(AuthOptions),

    /// Clear the stored session
    Logout,

    /// Show listening statistics
    Stats(StatsOptions),

    /// Show recently played tracks
    Recent(RecentOptions),

    /// Show details and audio features for a track
    Track(TrackOptions),

    /// Browse the swipe-style recommendation feed
    Recs(RecsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Access token obtained from Spotify
    token: String,

    /// Token lifetime in seconds
    #[clap(long, default_value_t = 3600)]
    expires_in: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct StatsOptions {
    /// Time window: short_term, medium_term or long_term
    #[clap(long, default_value = "short_term", value_parser = utils::parse_time_range)]
    range: TimeRange,

    /// Show top tracks only
    #[clap(long, conflicts_with_all = ["artists", "genres"])]
    tracks: bool,

    /// Show top artists only
    #[clap(long, conflicts_with = "genres")]
    artists: bool,

    /// Show top genres only
    #[clap(long)]
    genres: bool,

    /// Entries per list in the summary view
    #[clap(long, default_value_t = 5)]
    limit: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct RecentOptions {
    /// Number of tracks to show
    #[clap(long, default_value_t = 20)]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct TrackOptions {
    /// Spotify track id
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RecsOptions {
    /// Seed track id; can be repeated
    #[clap(long = "seed-track", action = ArgAction::Append, num_args = 1)]
    seed_tracks: Vec<String>,

    /// Seed artist id; can be repeated
    #[clap(long = "seed-artist", action = ArgAction::Append, num_args = 1)]
    seed_artists: Vec<String>,

    /// Seed genre label; can be repeated (defaults to pop)
    #[clap(long = "seed-genre", action = ArgAction::Append, num_args = 1)]
    seed_genres: Vec<String>,

    /// Save this track from the feed to liked songs
    #[clap(long)]
    like: Option<String>,

    /// Skip this track from the feed
    #[clap(long)]
    skip: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    config::load_env().await;

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => cli::auth(opt.token, opt.expires_in).await,
        Command::Logout => cli::logout().await,
        Command::Stats(opt) => {
            cli::stats(opt.range, opt.tracks, opt.artists, opt.genres, opt.limit).await
        }
        Command::Recent(opt) => cli::recent(opt.limit).await,
        Command::Track(opt) => cli::track(opt.id).await,
        Command::Recs(opt) => {
            cli::recs(
                opt.seed_tracks,
                opt.seed_artists,
                opt.seed_genres,
                opt.like,
                opt.skip,
            )
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
