//! Infrastructure layer: configuration, the development store, seed data.

pub mod bootstrap;
pub mod config;
pub mod seed;
pub mod store;

pub use bootstrap::{Bootstrapped, bootstrap};
pub use config::{AppConfig, ConfigError, DatabaseProvider};
pub use seed::{SeedError, SeedReport, insert_seed_data};
pub use store::{InMemoryStore, Table};

mod integration_tests;
