use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tweetpulse::config::Config;
use tweetpulse::feeds::auth::provider_from_env;
use tweetpulse::pipeline::Pipeline;
use tweetpulse::store::SqliteStore;
use tweetpulse::ui::{self, App};

const LOG_FILE: &str = "tweetpulse.log";

#[derive(Parser, Debug)]
#[command(name = "tweetpulse")]
#[command(about = "Score recent tweets for sentiment and explore them in the terminal")]
#[command(version)]
struct Cli {
    /// Path to config file (default: <config_dir>/tweetpulse/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, score and store one batch of tweets
    Ingest(RunArgs),
    /// Ingest a batch, then open the dashboard
    Dashboard(RunArgs),
    /// Print every stored row
    Records {
        /// SQLite database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Search query
    #[arg(short, long)]
    query: Option<String>,

    /// Number of tweets to request (1-100)
    #[arg(short = 'n', long)]
    max_results: Option<u32>,

    /// SQLite database file
    #[arg(short, long)]
    database: Option<PathBuf>,
}

impl RunArgs {
    fn apply(self, config: &mut Config) {
        if let Some(query) = self.query {
            config.search.query = query;
        }
        if let Some(max_results) = self.max_results {
            config.search.max_results = max_results;
        }
        if let Some(database) = self.database {
            config.storage.database = database;
        }
    }
}

/// Log to stderr, or to a file while the dashboard owns the terminal.
fn init_tracing(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "tweetpulse=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE)
            .with_context(|| format!("failed to open {}", LOG_FILE))?;
        registry
            .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

fn load_config(path: Option<PathBuf>, overrides: Option<RunArgs>) -> Result<Config> {
    let mut config = Config::load(path.as_deref()).context("failed to load config")?;
    if let Some(overrides) = overrides {
        overrides.apply(&mut config);
        config.validate()?;
    }
    debug!(?config, "configuration loaded");
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(matches!(cli.command, Command::Dashboard(_)))?;

    match cli.command {
        Command::Ingest(args) => {
            let config = load_config(cli.config, Some(args))?;
            let mut pipeline = Pipeline::from_config(&config, provider_from_env(&config.api));
            info!(query = %config.search.query, "starting ingest");

            let outcome = pipeline.run_with_database(&config.storage.database).await?;
            println!("{}", outcome.summary);
            if outcome.summary.aborted {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Dashboard(args) => {
            let config = load_config(cli.config, Some(args))?;
            let mut pipeline = Pipeline::from_config(&config, provider_from_env(&config.api));

            let outcome = pipeline.run_with_database(&config.storage.database).await?;
            info!("{}", outcome.summary);

            let app = App::new(&config, pipeline, outcome);
            ui::run(app).await?;
        }
        Command::Records { database } => {
            let mut config = load_config(cli.config, None)?;
            if let Some(database) = database {
                config.storage.database = database;
            }
            print_records(&config).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn print_records(config: &Config) -> Result<()> {
    let store = SqliteStore::open_existing(&config.storage.database)
        .await
        .with_context(|| {
            format!(
                "failed to open database {}",
                config.storage.database.display()
            )
        })?;
    let rows = store.load_all().await;
    store.close().await;
    let rows = rows?;

    println!(
        "{:>9}  {:>19}  {:>15}  Text",
        "Sentiment", "Sentiment_Magnitude", "Sentiment_VADER"
    );
    for row in &rows {
        println!(
            "{:>9.3}  {:>19.3}  {:>15.3}  {}",
            row.polarity, row.magnitude, row.vader_compound, row.text
        );
    }
    println!("{} rows", rows.len());
    Ok(())
}
