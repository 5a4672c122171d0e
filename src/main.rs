use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
use catalog::load_catalog;

mod config;
use config::{AppConfig, CliConfig, FileConfig};

mod embedding;
use embedding::{Embedder, HashedEmbedder, RemoteEmbedder, DEFAULT_DIMENSIONS};

mod recommend;
use recommend::{Recommender, DEFAULT_FINAL_K};

mod search;
use search::{SemanticRetriever, DEFAULT_INITIAL_K};

mod server;
use server::{run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the book catalog CSV file.
    #[clap(value_parser = parse_path)]
    pub catalog_csv: PathBuf,

    /// Path to an optional TOML config file; its values override CLI args.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Base URL of a remote embedding service. Omit to use the
    /// deterministic local embedder (useful for development).
    #[clap(long)]
    pub embedder_url: Option<String>,

    /// Embedding model name for the remote service.
    #[clap(long, default_value = "nomic-embed-text")]
    pub embedder_model: String,

    /// Timeout in seconds for embedding requests.
    #[clap(long, default_value_t = 300)]
    pub embedder_timeout_sec: u64,

    /// Embedding vector dimensionality.
    #[clap(long, default_value_t = DEFAULT_DIMENSIONS)]
    pub embedding_dimensions: usize,

    /// Size of the candidate pool fetched by similarity search.
    #[clap(long, default_value_t = DEFAULT_INITIAL_K)]
    pub initial_k: usize,

    /// Maximum number of recommendations returned per request.
    #[clap(long, default_value_t = DEFAULT_FINAL_K)]
    pub final_k: usize,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> CliConfig {
        CliConfig {
            catalog_csv: Some(args.catalog_csv.clone()),
            port: args.port,
            logging_level: args.logging_level.clone(),
            embedder_url: args.embedder_url.clone(),
            embedder_model: args.embedder_model.clone(),
            embedder_timeout_sec: args.embedder_timeout_sec,
            embedding_dimensions: args.embedding_dimensions,
            initial_k: args.initial_k,
            final_k: args.final_k,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let app_config = AppConfig::resolve(&CliConfig::from(&cli_args), file_config)?;

    info!("Loading catalog from {:?}...", app_config.catalog_csv);
    let catalog = load_catalog(&app_config.catalog_csv)?;

    let embedder: Arc<dyn Embedder> = match &app_config.embedder.url {
        Some(url) => {
            info!("Using remote embedder at {}", url);
            Arc::new(RemoteEmbedder::new(
                url.clone(),
                app_config.embedder.model.clone(),
                app_config.embedder.dimensions,
                app_config.embedder.timeout_sec,
            ))
        }
        None => {
            info!("Using local hashed embedder (no embedder URL configured)");
            Arc::new(HashedEmbedder::new(app_config.embedder.dimensions))
        }
    };

    info!("Building vector index...");
    let retriever = SemanticRetriever::build(&catalog, embedder).await?;

    let recommender = Arc::new(Recommender::new(
        catalog,
        retriever,
        app_config.initial_k,
        app_config.final_k,
    ));

    info!("Ready to serve at port {}!", app_config.port);
    run_server(
        recommender,
        ServerConfig {
            port: app_config.port,
            requests_logging_level: app_config.logging_level,
        },
    )
    .await
}
