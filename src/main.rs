use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sporcat::{
    Res, catalog::OriginalPolicy, cli, config, error, management::EntityType, utils,
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

    /// Classify the artist's catalog and publish the named sets as playlists
    Curate(CurateOptions),

    /// Maintain the response cache
    Cache(CacheOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CurateOptions {
    /// Spotify user owning the playlists (defaults to SPOTIFY_USER_ID)
    #[clap(long)]
    pub user: Option<String>,

    /// Artist to curate (defaults to CURATE_ARTIST_ID)
    #[clap(long)]
    pub artist_id: Option<String>,

    /// Artist name used for playlist names (defaults to CURATE_ARTIST_NAME,
    /// then the name Spotify reports)
    #[clap(long)]
    pub artist_name: Option<String>,

    /// Write reports only, leave playlists untouched
    #[clap(long)]
    pub dry: bool,

    /// Show what would change in the playlists without changing them
    #[clap(long)]
    pub read_only: bool,

    /// Rebuild the playlists of songs with three or more recordings
    #[clap(long, default_value_t = true, action = ArgAction::Set)]
    pub rebuild_multiple: bool,

    /// Rebuild the single recordings playlist
    #[clap(long)]
    pub rebuild_singles: bool,

    /// Rebuild the all, short and candidates playlists
    #[clap(long)]
    pub rebuild_base: bool,

    /// Reload the user's playlist list instead of using the cached one
    #[clap(long)]
    pub refresh_playlists: bool,

    /// Originals when recordings share the earliest date: first or all
    #[clap(long, default_value = "first", value_parser = utils::parse_original_policy)]
    pub policy: OriginalPolicy,
}

#[derive(Parser, Debug, Clone)]
pub struct CacheOptions {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CacheSubcommand {
    /// Remove every cached response
    Clear,

    /// Remove one cached response
    Invalidate(InvalidateOpts),

    /// Print the cache directory
    Path,
}

#[derive(Parser, Debug, Clone)]
pub struct InvalidateOpts {
    /// Entity type: artist, artist-albums, album, album-tracks, tracks,
    /// playlists or playlist
    pub entity: EntityType,

    /// Spotify ID (or user ID for playlists)
    pub id: String,

    /// Owning user of a cached playlist
    #[clap(long)]
    pub owner: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

impl From<CurateOptions> for cli::CurateSettings {
    fn from(opt: CurateOptions) -> Self {
        cli::CurateSettings {
            user: opt.user,
            artist_id: opt.artist_id,
            artist_name: opt.artist_name,
            dry: opt.dry,
            read_only: opt.read_only,
            rebuild_multiple: opt.rebuild_multiple,
            rebuild_singles: opt.rebuild_singles,
            rebuild_base: opt.rebuild_base,
            refresh_playlists: opt.refresh_playlists,
            policy: opt.policy,
        }
    }
}

async fn run(command: Command) -> Res<()> {
    match command {
        Command::Auth => cli::auth().await,
        Command::Curate(opt) => cli::curate(opt.into()).await,
        Command::Cache(opt) => match opt.command {
            CacheSubcommand::Clear => cli::cache::clear().await,
            CacheSubcommand::Invalidate(i) => {
                cli::cache::invalidate(i.entity, &i.id, i.owner).await
            }
            CacheSubcommand::Path => {
                cli::cache::location();
                Ok(())
            }
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        error!("{}", e);
    }
}
