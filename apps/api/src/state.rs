use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::diagnosis::store::DiagnosisStore;
use crate::placement::repository::PlacementRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Redis-backed when REDIS_URL is set, otherwise in-process.
    pub sessions: Arc<dyn DiagnosisStore>,
    /// Postgres-backed when DATABASE_URL is set, otherwise the seeded demo roster.
    pub placement: Arc<dyn PlacementRepository>,
    /// Serializes load-mutate-save cycles on the placement roster.
    pub placement_lock: Arc<Mutex<()>>,
    pub s3: Option<S3Client>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        sessions: Arc<dyn DiagnosisStore>,
        placement: Arc<dyn PlacementRepository>,
        s3: Option<S3Client>,
        config: Config,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions,
            placement,
            placement_lock: Arc::new(Mutex::new(())),
            s3,
            config,
        }
    }

    /// Fully in-process state over the given catalog.
    #[cfg(test)]
    pub fn in_memory(catalog: Catalog, config: Config) -> Self {
        use crate::diagnosis::store::InMemoryDiagnosisStore;
        use crate::placement::repository::InMemoryPlacementRepository;

        Self::new(
            catalog,
            Arc::new(InMemoryDiagnosisStore::new()),
            Arc::new(InMemoryPlacementRepository::seeded()),
            None,
            config,
        )
    }

    /// RNG for reason-template selection.
    pub fn match_rng(&self) -> StdRng {
        match self.config.match_rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
