use std::sync::Arc;

use anyhow::Context;

use clubadmin_validation::WriteGate;

use crate::config::AppConfig;
use crate::seed::{SeedReport, insert_seed_data};
use crate::store::InMemoryStore;

/// Everything a process needs to serve requests.
#[derive(Debug)]
pub struct Bootstrapped {
    pub config: AppConfig,
    pub store: Arc<InMemoryStore>,
    pub gate: WriteGate,
    /// Present when seeding ran.
    pub seed: Option<SeedReport>,
}

/// Initialize tracing, build the store and gate, and seed when configured.
pub fn bootstrap(config: AppConfig) -> anyhow::Result<Bootstrapped> {
    clubadmin_observability::init_with_filter(&config.log_filter);
    tracing::info!(
        provider = ?config.database_provider,
        seed_data = config.seed_data,
        "starting club admin"
    );

    let store = Arc::new(InMemoryStore::new());
    let seed = if config.seed_data {
        Some(insert_seed_data(&store).context("inserting seed data")?)
    } else {
        None
    };

    Ok(Bootstrapped {
        config,
        store,
        gate: WriteGate::new(),
        seed,
    })
}
