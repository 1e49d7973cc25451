//! Target provider: cached, downloaded or synthetic vessels and facilities

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use redteam_core::config::OsintConfig;
use redteam_core::domain::{Facility, Target, TargetKind, Vessel};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::domain::{CacheError, FetchError, SearchHit, SearchScope, matches_query};
use crate::infrastructure::ais::extract_vessels;
use crate::infrastructure::catalog::curated_facilities;
use crate::infrastructure::synthetic::{
    synthetic_facilities, synthetic_facility, synthetic_vessel, synthetic_vessels,
};
use crate::infrastructure::{DatasetSource, HttpDatasetSource, JsonFileCache, LocalDatasetSource};

pub const MARITIME_CACHE_FILE: &str = "processed_kaggle_ais.json";

/// Name of the infrastructure cache file for `country`
pub fn infrastructure_cache_file(country: &str) -> String {
    format!("infrastructure_{}.json", country)
}

/// Supplies targets from cache, the dataset source, or synthetic data.
///
/// Every `collect_*` call is two explicit stages: a `fetch_*` stage that may
/// fail, then a synthetic fallback that cannot. Fetch errors are logged and
/// never returned.
pub struct TargetProvider {
    source: Arc<dyn DatasetSource>,
    cache: JsonFileCache,
    config: OsintConfig,
    rng: Mutex<StdRng>,
}

impl TargetProvider {
    pub fn new(config: OsintConfig, source: Arc<dyn DatasetSource>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            source,
            cache: JsonFileCache::new(&config.data_dir),
            config,
            rng: Mutex::new(rng),
        }
    }

    /// Build the provider with the dataset source the configuration selects
    pub fn from_config(config: OsintConfig) -> Self {
        let source: Arc<dyn DatasetSource> = match &config.local_dataset_dir {
            Some(dir) => Arc::new(LocalDatasetSource::new(dir)),
            None => {
                let download_dir: PathBuf = config.data_dir.join("datasets");
                let http = HttpDatasetSource::new(
                    &config.dataset_base_url,
                    download_dir,
                    config.timeout_seconds,
                );
                match (&config.kaggle_username, &config.kaggle_key) {
                    (Some(user), Some(key)) => Arc::new(http.with_credentials(user, key)),
                    _ => Arc::new(http),
                }
            }
        };

        info!(source = source.name(), data_dir = %config.data_dir.display(), "Target provider ready");
        Self::new(config, source)
    }

    pub fn config(&self) -> &OsintConfig {
        &self.config
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Up to `limit` vessels; never empty for `limit > 0`
    pub async fn collect_vessels(&self, limit: usize) -> Vec<Vessel> {
        match self.fetch_vessels(limit).await {
            Ok(vessels) => vessels,
            Err(e) => {
                warn!(error = %e, limit, "Vessel collection failed, generating synthetic vessels");
                self.synthetic_vessels(limit)
            }
        }
    }

    /// Cached vessels, or download and extract the AIS dataset and cache it
    pub async fn fetch_vessels(&self, limit: usize) -> Result<Vec<Vessel>, FetchError> {
        match self.cache.read::<Vec<Vessel>>(MARITIME_CACHE_FILE).await {
            Ok(Some(vessels)) if !vessels.is_empty() => {
                debug!(cached = vessels.len(), "Serving vessels from cache");
                return Ok(vessels.into_iter().take(limit).collect());
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Ignoring unreadable vessel cache"),
        }

        let files = self.source.fetch(&self.config.ais_dataset).await?;
        let csv_path = files
            .iter()
            .find(|p| {
                p.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
            })
            .cloned()
            .ok_or(FetchError::NoCsvFile { count: files.len() })?;
        info!(path = %csv_path.display(), "Using AIS dataset file");

        let max_vessels = limit.saturating_mul(10);
        let mut rng = StdRng::from_rng(&mut *self.rng());
        let vessels = tokio::task::spawn_blocking(move || {
            extract_vessels(&csv_path, max_vessels, &mut rng)
        })
        .await??;

        if let Err(e) = self.cache.write(MARITIME_CACHE_FILE, &vessels).await {
            warn!(error = %e, "Failed to cache extracted vessels");
        }

        info!(extracted = vessels.len(), "AIS dataset processed");
        Ok(vessels.into_iter().take(limit).collect())
    }

    pub fn synthetic_vessels(&self, limit: usize) -> Vec<Vessel> {
        synthetic_vessels(&mut *self.rng(), limit)
    }

    /// Up to `limit` facilities for `country`; the result is cached either way
    pub async fn collect_facilities(&self, country: &str, limit: usize) -> Vec<Facility> {
        match self.fetch_facilities(country, limit).await {
            Ok(facilities) => facilities,
            Err(e) => {
                warn!(error = %e, country, "Facility collection failed, generating synthetic facilities");
                let facilities = self.synthetic_facilities(country, limit);
                if let Err(e) = self
                    .cache
                    .write(&infrastructure_cache_file(country), &facilities)
                    .await
                {
                    warn!(error = %e, "Failed to cache synthetic facilities");
                }
                facilities
            }
        }
    }

    /// Fresh cached facilities, or the curated catalog written back to cache
    pub async fn fetch_facilities(
        &self,
        country: &str,
        limit: usize,
    ) -> Result<Vec<Facility>, FetchError> {
        let cache_file = infrastructure_cache_file(country);
        let ttl = Duration::from_secs(self.config.infrastructure_cache_ttl_hours * 3600);

        match self.cache.read_fresh::<Vec<Facility>>(&cache_file, ttl).await {
            Ok(Some(facilities)) if !facilities.is_empty() => {
                debug!(cached = facilities.len(), country, "Serving facilities from cache");
                return Ok(facilities.into_iter().take(limit).collect());
            }
            Ok(_) => {}
            Err(e @ CacheError::Malformed { .. }) => {
                warn!(error = %e, "Ignoring unreadable facility cache");
            }
            Err(e) => return Err(e.into()),
        }

        let facilities = curated_facilities(&mut *self.rng(), country, limit);
        self.cache.write(&cache_file, &facilities).await?;

        info!(count = facilities.len(), country, "Infrastructure catalog cached");
        Ok(facilities.into_iter().take(limit).collect())
    }

    pub fn synthetic_facilities(&self, country: &str, limit: usize) -> Vec<Facility> {
        synthetic_facilities(&mut *self.rng(), country, limit)
    }

    /// One target of `kind`, matched by `identifier` when given.
    ///
    /// An unknown identifier is not an error: a random record from the pool
    /// is returned instead.
    pub async fn get_target(&self, kind: TargetKind, identifier: Option<&str>) -> Target {
        let pool = self.target_pool(kind).await;

        if let Some(id) = identifier {
            if let Some(target) = pool.iter().find(|t| t.matches_id(id)) {
                return target.clone();
            }
            warn!(%kind, identifier = id, "Target not found, using a random one");
        }

        let chosen = pool.choose(&mut *self.rng()).cloned();
        chosen.unwrap_or_else(|| {
            let mut rng = self.rng();
            match kind {
                TargetKind::Maritime => synthetic_vessel(&mut *rng).into(),
                TargetKind::Infrastructure => {
                    synthetic_facility(&mut *rng, &self.config.default_country).into()
                }
            }
        })
    }

    async fn target_pool(&self, kind: TargetKind) -> Vec<Target> {
        let size = self.config.target_pool_size;
        match kind {
            TargetKind::Maritime => self
                .collect_vessels(size)
                .await
                .into_iter()
                .map(Target::from)
                .collect(),
            TargetKind::Infrastructure => self
                .collect_facilities(&self.config.default_country, size)
                .await
                .into_iter()
                .map(Target::from)
                .collect(),
        }
    }

    /// Records in `scope` whose JSON form contains `query`, ignoring case
    pub async fn search(&self, query: &str, scope: SearchScope) -> Vec<SearchHit> {
        let size = self.config.target_pool_size;
        let mut hits = Vec::new();

        if scope.includes(TargetKind::Maritime) {
            hits.extend(
                self.collect_vessels(size)
                    .await
                    .into_iter()
                    .filter(|vessel| matches_query(vessel, query))
                    .map(|vessel| SearchHit {
                        kind: TargetKind::Maritime,
                        data: vessel.into(),
                    }),
            );
        }

        if scope.includes(TargetKind::Infrastructure) {
            hits.extend(
                self.collect_facilities(&self.config.default_country, size)
                    .await
                    .into_iter()
                    .filter(|facility| matches_query(facility, query))
                    .map(|facility| SearchHit {
                        kind: TargetKind::Infrastructure,
                        data: facility.into(),
                    }),
            );
        }

        debug!(query, ?scope, hits = hits.len(), "Search complete");
        hits
    }
}
