mod catalog;
mod config;
mod db;
mod diagnosis;
mod errors;
mod matching;
mod models;
mod placement;
mod routes;
mod state;

use anyhow::{Context, Result};
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::db::create_pool;
use crate::diagnosis::store::{DiagnosisStore, InMemoryDiagnosisStore, RedisDiagnosisStore};
use crate::placement::repository::{
    InMemoryPlacementRepository, PgPlacementRepository, PlacementRepository,
};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Catalog: immutable for the life of the process
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {path}"))?,
        None => Catalog::builtin().context("Built-in catalog is invalid")?,
    };
    info!(
        "Catalog loaded: {} questions, {} bosses",
        catalog.questions().len(),
        catalog.bosses().len()
    );

    // Placement roster: PostgreSQL or the seeded demo roster
    let placement: Arc<dyn PlacementRepository> = match &config.database_url {
        Some(url) => Arc::new(PgPlacementRepository::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set, using in-memory demo roster");
            Arc::new(InMemoryPlacementRepository::seeded())
        }
    };

    // Diagnosis sessions: Redis or in-process
    let sessions: Arc<dyn DiagnosisStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            let conn = client.get_multiplexed_async_connection().await?;
            info!("Redis session store connected (ttl {}s)", config.session_ttl_secs);
            Arc::new(RedisDiagnosisStore::new(conn, config.session_ttl_secs))
        }
        None => {
            warn!("REDIS_URL not set, diagnosis sessions are kept in memory");
            Arc::new(InMemoryDiagnosisStore::new())
        }
    };

    // S3 / MinIO for placement reports
    let s3 = match &config.s3_bucket {
        Some(bucket) => {
            info!("S3 report uploads enabled (bucket {bucket})");
            Some(build_s3_client(&config).await)
        }
        None => None,
    };

    if let Some(seed) = config.match_rng_seed {
        info!("Match RNG pinned to seed {seed}");
    }

    let state = AppState::new(catalog, sessions, placement, s3, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client for MinIO (explicit endpoint and keys) or AWS
/// (default credential chain).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let mut loader =
        aws_config::defaults(aws_config::BehaviorVersion::latest()).region(Region::new("us-east-1"));

    if let (Some(key_id), Some(secret)) = (&config.aws_access_key_id, &config.aws_secret_access_key)
    {
        loader = loader.credentials_provider(Credentials::new(
            key_id,
            secret,
            None,
            None,
            "compass-static",
        ));
    }
    if let Some(endpoint) = &config.s3_endpoint {
        loader = loader.endpoint_url(endpoint);
    }

    let s3_config = loader.load().await;
    let s3_conf = aws_sdk_s3::config::Builder::from(&s3_config)
        .force_path_style(config.s3_endpoint.is_some())
        .build();
    aws_sdk_s3::Client::from_conf(s3_conf)
}
