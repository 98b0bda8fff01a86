use clap::{Parser, Subcommand};
use galley::{
    collections,
    config::{ConfigError, GalleyConfig},
};
use galley_core::{
    document::Document,
    error::Error as EngineError,
    search::{PrefixFacet, SearchFacets, SearchOrchestrator},
    store::MemoryStore,
};
use serde_json::json;
use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};
use thiserror::Error as ThisError;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON fixture mapping collection names to arrays of documents.
    fixture: PathBuf,

    #[arg(long, short)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of a collection in default order.
    Page {
        collection: String,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Print one page of a prefix search over `field`.
    Search {
        collection: String,
        field: String,
        prefix: String,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(Debug, ThisError)]
enum CliError {
    #[error("failed to read fixture '{path}': {source}")]
    Fixture {
        path: String,
        source: std::io::Error,
    },

    #[error("fixture is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fixture must be an object of collection arrays")]
    FixtureShape,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to apply log filter: {0}")]
    LogFilter(#[from] reload::Error),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("galley: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let logging = init_logging();

    let config = match &args.config {
        Some(path) => GalleyConfig::load(path)?,
        None => GalleyConfig::default().with_env_overrides()?,
    };

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    if let Some(filter) = config_filter(rust_log.as_deref(), &config.log_filter) {
        logging.reload(filter)?;
    }

    let store = load_fixture(&args.fixture, config.in_filter_limit)?;

    let (collection, facets, page) = match args.command {
        Command::Page { collection, page } => (collection, SearchFacets::new(), page),
        Command::Search {
            collection,
            field,
            prefix,
            page,
        } => (
            collection,
            SearchFacets::new().with_prefix(PrefixFacet::new(field, prefix)),
            page,
        ),
    };

    let result = SearchOrchestrator::new(&store)
        .with_in_filter_limit(config.in_filter_limit)
        .search(&collection, &facets, None, page, config.page_size)
        .await?;

    let rows: Vec<serde_json::Value> = result.page.rows.iter().map(Document::to_json).collect();
    let output = json!({
        "collection": collection,
        "page": page,
        "pageSize": config.page_size,
        "totalCount": result.total_count,
        "rows": rows,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Install the subscriber before the config is read, filtered by `RUST_LOG`
/// or the default config's filter.
fn init_logging() -> reload::Handle<EnvFilter, Registry> {
    let initial = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&GalleyConfig::default().log_filter));
    let (filter, handle) = reload::Layer::new(initial);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    handle
}

/// The filter to switch to once the config is loaded. A valid `RUST_LOG`
/// keeps precedence and yields `None`.
fn config_filter(rust_log: Option<&str>, configured: &str) -> Option<EnvFilter> {
    match rust_log.map(EnvFilter::try_new) {
        Some(Ok(_)) => None,
        _ => Some(EnvFilter::new(configured)),
    }
}

fn load_fixture(path: &Path, in_limit: usize) -> Result<MemoryStore, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Fixture {
        path: path.display().to_string(),
        source,
    })?;
    let json: serde_json::Value = serde_json::from_str(&text)?;
    let fixture = json.as_object().ok_or(CliError::FixtureShape)?;

    let mut store = MemoryStore::with_in_filter_limit(in_limit);
    for (collection, documents) in fixture {
        let documents = documents.as_array().ok_or(CliError::FixtureShape)?;
        if !collections::ALL.contains(&collection.as_str()) {
            warn!(collection = %collection, "unknown collection in fixture");
        }

        let mut loaded = Vec::with_capacity(documents.len());
        for (index, raw) in documents.iter().enumerate() {
            match Document::from_json(raw, format!("{collection}-{index}")) {
                Some(document) => loaded.push(document),
                None => warn!(collection = %collection, index, "skipping non-object document"),
            }
        }

        info!(collection = %collection, documents = loaded.len(), "loaded fixture collection");
        store = store.with_documents(collection, loaded);
    }

    Ok(store)
}
