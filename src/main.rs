//! askdb server binary.
//!
//! Startup order matters: the lexicon must load before anything else
//! (its absence is fatal), then the database is reseeded, then the web
//! server starts.

use tracing::{error, info};

use askdb::cli::Cli;
use askdb::config::Config;
use askdb::db::StudentStore;
use askdb::error::{AskdbError, Result};
use askdb::{logging, nlp, web};

#[tokio::main]
async fn main() {
    logging::init_stderr_logging();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let mut config = Config::load_from_file(&config_path)?;
    cli.apply_to(&mut config);

    let lexicon = nlp::load_or_fetch(
        config.model.path.as_deref(),
        config.model.url.as_deref(),
        &Config::data_dir(),
    )
    .await?;

    let store = StudentStore::open(&config.database_path()).await?;

    let addr = config.bind_addr()?;
    let app = web::router(web::AppState::new(store, lexicon));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AskdbError::config(format!("Failed to bind {addr}: {e}")))?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AskdbError::internal(format!("Server error: {e}")))
}
