mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use game_match::{format_score, GameProfile, MatchConfig, MatchEngine, UserProfile};

#[derive(Parser)]
#[command(name = "game-match", about = "User/game match scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Score(ScoreArgs),
    Serve(ServeArgs),
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct ScoreArgs {
    /// User profile JSON; omit to score as an anonymous visitor.
    #[arg(long)]
    user: Option<PathBuf>,
    #[arg(long)]
    game: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/match.toml")]
    path: PathBuf,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Score(args) => run_score(args).await,
        Command::Serve(args) => {
            let engine = load_engine(args.config.clone())?;
            server::serve(args, engine).await
        }
        Command::InitConfig(args) => {
            MatchConfig::default()
                .write(&args.path)
                .map_err(|err| err.to_string())?;
            println!("Wrote default config to {}", args.path.display());
            Ok(())
        }
    }
}

async fn run_score(args: ScoreArgs) -> Result<(), String> {
    let engine = load_engine(args.config)?;
    let user: Option<UserProfile> = args.user.as_deref().map(read_json::<UserProfile>).transpose()?;
    let game: GameProfile = read_json(&args.game)?;

    let report = engine.report(user.as_ref(), Some(&game)).await;

    println!(
        "Match: {} ({}, {})",
        format_score(report.score),
        report.description,
        report.color
    );

    if !report.reasons.is_empty() {
        println!("\nWhy:");
        for reason in &report.reasons {
            println!("- {}", reason);
        }
    }

    if args.details {
        if let Some(breakdown) = report.breakdown {
            println!("\nSub-scores:");
            println!("  genre: {:.1}", breakdown.scores.genre);
            println!("  rating: {:.1}", breakdown.scores.rating);
            println!("  platform: {:.1}", breakdown.scores.platform);
            println!("  community: {:.1}", breakdown.scores.community);
            println!("  history: {:.1}", breakdown.scores.history);
            println!("  weighted: {:.2}", breakdown.weighted);
        }
    }

    Ok(())
}

fn load_engine(path: Option<PathBuf>) -> Result<MatchEngine, String> {
    let (config, _) = MatchConfig::load(path).map_err(|err| err.to_string())?;
    Ok(MatchEngine::new(config))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
    serde_json::from_str(&data)
        .map_err(|err| format!("failed to parse {}: {}", path.display(), err))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
