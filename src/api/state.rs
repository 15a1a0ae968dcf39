use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    catalog::Catalog,
    clock::{Clock, SystemClock},
    config::Config,
    services::Recommender,
    store::Store,
};

/// Shared application state
///
/// The store sits behind a single lock. Batch jobs take the write lock for
/// their whole run, so they never iterate while a request mutates state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub catalog: Arc<Catalog>,
    pub config: Arc<Config>,
    pub clock: Arc<dyn Clock>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default(), Catalog::builtin())
    }
}

impl AppState {
    /// Creates state with an empty store and the wall clock
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::new())),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock, e.g. with a `FixedClock` in tests
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn recommender(&self) -> Recommender<'_> {
        Recommender::new(&self.catalog, &self.config)
    }

    /// Empties the store; catalog and config are untouched
    pub async fn reset(&self) {
        self.store.write().await.reset();
        tracing::info!("Store reset");
    }
}
