//! Lookup tool - fetches players, guilds and leaderboards, or converts experience to levels.
//!
//! Usage:
//!   cargo run --bin hypixel-lookup -- --key <API_KEY> player Notch --game bedwars
//!   cargo run --bin hypixel-lookup -- guild --name <GUILD_NAME>
//!   cargo run --bin hypixel-lookup -- level bedwars 487000

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hypixel_client::{Client, ClientConfig, GameType, LevelCurve};
use hypixel_types::level_for_experience;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::info;

const API_KEY_ENV: &str = "HYPIXEL_API_KEY";

#[derive(Parser, Debug)]
#[command(author, version, about = "Query the Hypixel API from the command line")]
struct Args {
    #[arg(short, long, default_value = hypixel_client::client::DEFAULT_API_URL)]
    url: String,

    #[arg(long, default_value = hypixel_client::client::DEFAULT_IDENTITY_URL)]
    identity_url: String,

    /// API key (falls back to HYPIXEL_API_KEY).
    #[arg(short, long)]
    key: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    /// Log at debug level.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the API key and print its record.
    Key,
    /// Print a player summary.
    Player {
        /// Display name or identifier.
        player: String,
        /// Include the stats of one game (API name or database key).
        #[arg(long)]
        game: Option<String>,
    },
    /// Print a guild summary.
    Guild {
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        id: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Print leaderboards, optionally for one game.
    Leaderboard {
        #[arg(long)]
        game: Option<String>,
    },
    /// Convert experience to a level without touching the network.
    Level {
        curve: LevelCurve,
        #[arg(allow_hyphen_values = true)]
        experience: f64,
    },
}

#[derive(Serialize)]
struct PlayerSummary {
    uuid: String,
    display_name: Option<String>,
    network_experience: Option<f64>,
    network_level: Option<u64>,
    bedwars_experience: Option<f64>,
    bedwars_level: Option<u64>,
    game_stats: Option<JsonValue>,
}

#[derive(Serialize)]
struct GuildSummary {
    id: String,
    name: Option<String>,
    tag: Option<String>,
    description: Option<String>,
    members: usize,
    experience: Option<f64>,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn api_key(args: &Args) -> Result<String> {
    if let Some(key) = &args.key {
        return Ok(key.clone());
    }
    let key = std::env::var(API_KEY_ENV).unwrap_or_default();
    if key.trim().is_empty() {
        bail!("missing API key: pass --key or set {API_KEY_ENV}");
    }
    Ok(key.trim().to_string())
}

fn build_client(args: &Args) -> Result<Client> {
    if args.timeout_secs == 0 {
        bail!("timeout_secs must be > 0");
    }
    let config = ClientConfig {
        api_url: args.url.clone(),
        identity_url: args.identity_url.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
    };
    Client::with_config(api_key(args)?, config).context("failed to build client")
}

fn parse_game(game: Option<&str>) -> Result<Option<GameType>> {
    game.map(|game| game.parse::<GameType>().map_err(hypixel_client::Error::from))
        .transpose()
        .context("invalid --game")
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Command::Level { curve, experience } = &args.command {
        let level = level_for_experience(*curve, *experience);
        println!("{level}");
        return Ok(());
    }

    let client = build_client(&args)?;
    client.validate_key().await.context("API key rejected")?;
    info!(url = %client.base_url(), "API key accepted");

    match &args.command {
        Command::Key => print_json(&client.key_info().await?)?,
        Command::Player { player, game } => {
            let game = parse_game(game.as_deref())?;
            let player = client
                .player(player)
                .await
                .with_context(|| format!("failed to load player {player}"))?;
            let summary = PlayerSummary {
                uuid: player.uuid().to_string(),
                display_name: player.display_name().map(str::to_string),
                network_experience: player.network_experience(),
                network_level: player.network_level(),
                bedwars_experience: player.bedwars_experience(),
                bedwars_level: player.bedwars_level(),
                game_stats: game.and_then(|game| player.stats_for(game).cloned()),
            };
            print_json(&summary)?;
        }
        Command::Guild { id, name } => {
            let guild = match (id, name) {
                (Some(id), _) => client.guild_by_id(id).await?,
                (None, Some(name)) => client.guild_by_name(name).await?,
                (None, None) => bail!("pass --id or --name"),
            };
            let summary = GuildSummary {
                id: guild.id().to_string(),
                name: guild.name().map(str::to_string),
                tag: guild.tag().map(str::to_string),
                description: guild.description().map(str::to_string),
                members: guild.members().map_or(0, <[JsonValue]>::len),
                experience: guild.experience(),
            };
            print_json(&summary)?;
        }
        Command::Leaderboard { game } => match parse_game(game.as_deref())? {
            Some(game) => match client.game_leaderboard(game).await? {
                Some(leaderboard) => print_json(&leaderboard)?,
                None => bail!("no leaderboard for {game}"),
            },
            None => print_json(&client.leaderboards().await?)?,
        },
        // Answered before the client was built.
        Command::Level { .. } => {}
    }

    Ok(())
}
